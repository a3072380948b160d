/// HTML text read from the input file, kept only for the duration of
/// the render call.
#[derive(Debug, Clone)]
pub struct HtmlSource {
    pub path: String,
    pub content: String,
}

/// Serialized PDF produced by the renderer.
#[derive(Debug, Clone)]
pub struct RenderedPdf {
    pub bytes: Vec<u8>,
    pub page_count: usize,
}
