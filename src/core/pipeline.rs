use crate::core::{ConfigProvider, HtmlSource, Pipeline, RenderedPdf, Renderer, Storage};
use crate::utils::error::{ConvertError, Result};

pub struct RenderPipeline<S: Storage, R: Renderer, C: ConfigProvider> {
    storage: S,
    renderer: R,
    config: C,
}

impl<S: Storage, R: Renderer, C: ConfigProvider> RenderPipeline<S, R, C> {
    pub fn new(storage: S, renderer: R, config: C) -> Self {
        Self {
            storage,
            renderer,
            config,
        }
    }
}

impl<S: Storage, R: Renderer, C: ConfigProvider> Pipeline for RenderPipeline<S, R, C> {
    fn read(&self) -> Result<HtmlSource> {
        let path = self.config.input_path();
        tracing::debug!("Reading HTML from: {}", path);

        let bytes = self.storage.read_file(path)?;

        // The renderer takes text, so the input must be valid UTF-8.
        let content = String::from_utf8(bytes).map_err(|e| ConvertError::InputRead {
            path: path.to_string(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        })?;

        Ok(HtmlSource {
            path: path.to_string(),
            content,
        })
    }

    fn render(&self, source: HtmlSource) -> Result<RenderedPdf> {
        tracing::debug!(
            "Rendering {} bytes of HTML from {}",
            source.content.len(),
            source.path
        );
        self.renderer.render(&source.content)
    }

    fn write(&self, rendered: RenderedPdf) -> Result<String> {
        let path = self.config.output_path();
        tracing::debug!("Writing PDF ({} bytes) to: {}", rendered.bytes.len(), path);

        self.storage.write_file(path, &rendered.bytes)?;

        Ok(path.to_string())
    }
}
