use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct ConvertEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ConvertEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs the read, render and write steps in order, stopping at the
    /// first failure. Returns the output path on success.
    pub fn run(&self) -> Result<String> {
        tracing::info!("Reading input...");
        let source = self.pipeline.read()?;
        tracing::info!("Read {} bytes from {}", source.content.len(), source.path);

        tracing::info!("Rendering HTML...");
        let rendered = self.pipeline.render(source)?;
        tracing::info!(
            "Rendered {} page(s), {} bytes",
            rendered.page_count,
            rendered.bytes.len()
        );

        tracing::info!("Writing PDF...");
        let output_path = self.pipeline.write(rendered)?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
