use crate::domain::model::RenderedPdf;
use crate::domain::ports::Renderer;
use crate::utils::error::{ConvertError, Result};
use printpdf::{GeneratePdfOptions, PdfDocument, PdfSaveOptions};
use std::collections::BTreeMap;

/// Renderer backed by `printpdf`'s HTML support. Parsing, layout and
/// PDF serialization all happen inside the library; this adapter only
/// carries the page geometry in and the bytes out.
pub struct PrintpdfRenderer {
    page_width_mm: f32,
    page_height_mm: f32,
}

impl PrintpdfRenderer {
    pub fn new(page_width_mm: f32, page_height_mm: f32) -> Self {
        Self {
            page_width_mm,
            page_height_mm,
        }
    }

    fn options(&self) -> GeneratePdfOptions {
        let mut options = GeneratePdfOptions::default();
        options.page_width = Some(self.page_width_mm);
        options.page_height = Some(self.page_height_mm);
        options
    }
}

impl Renderer for PrintpdfRenderer {
    fn render(&self, html: &str) -> Result<RenderedPdf> {
        // No external images or fonts are supplied; the renderer falls
        // back to its builtin fonts.
        let images = BTreeMap::new();
        let fonts = BTreeMap::new();
        let options = self.options();

        let mut warnings = Vec::new();
        let doc = PdfDocument::from_html(html, &images, &fonts, &options, &mut warnings)
            .map_err(|e| ConvertError::Render {
                message: e.to_string(),
            })?;
        for warning in &warnings {
            tracing::warn!("renderer: {:?}", warning);
        }

        let page_count = doc.pages.len();

        let mut save_warnings = Vec::new();
        let bytes = doc.save(&PdfSaveOptions::default(), &mut save_warnings);
        for warning in &save_warnings {
            tracing::warn!("pdf serialization: {:?}", warning);
        }

        Ok(RenderedPdf { bytes, page_count })
    }
}
