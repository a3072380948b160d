pub mod engine;
pub mod pipeline;

pub use crate::domain::model::{HtmlSource, RenderedPdf};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Renderer, Storage};
pub use crate::utils::error::Result;
