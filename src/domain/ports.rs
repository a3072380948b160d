use crate::domain::model::{HtmlSource, RenderedPdf};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

/// The external HTML/CSS-to-PDF capability. Parsing, layout and PDF
/// serialization all happen behind this boundary.
pub trait Renderer {
    fn render(&self, html: &str) -> Result<RenderedPdf>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn page_width_mm(&self) -> f32;
    fn page_height_mm(&self) -> f32;
}

pub trait Pipeline {
    fn read(&self) -> Result<HtmlSource>;
    fn render(&self, source: HtmlSource) -> Result<RenderedPdf>;
    fn write(&self, rendered: RenderedPdf) -> Result<String>;
}
