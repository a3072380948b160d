pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{renderer::PrintpdfRenderer, storage::LocalStorage};
pub use config::CliConfig;
pub use core::{engine::ConvertEngine, pipeline::RenderPipeline};
pub use utils::error::{ConvertError, Result};
