use htmlpdf::{
    ConvertEngine, ConvertError, LocalStorage, PrintpdfRenderer, RenderPipeline,
};
use tempfile::TempDir;

struct TestConfig {
    input: String,
    output: String,
}

impl htmlpdf::core::ConfigProvider for TestConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output
    }

    fn page_width_mm(&self) -> f32 {
        210.0
    }

    fn page_height_mm(&self) -> f32 {
        297.0
    }
}

fn engine_for(
    input: &str,
    output: &str,
) -> ConvertEngine<RenderPipeline<LocalStorage, PrintpdfRenderer, TestConfig>> {
    let config = TestConfig {
        input: input.to_string(),
        output: output.to_string(),
    };
    let pipeline = RenderPipeline::new(
        LocalStorage::new(),
        PrintpdfRenderer::new(210.0, 297.0),
        config,
    );
    ConvertEngine::new(pipeline)
}

#[test]
fn test_end_to_end_conversion() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("a.html");
    let output = temp_dir.path().join("a.pdf");
    std::fs::write(&input, "<html><body><h1>Hi</h1></body></html>").unwrap();

    let engine = engine_for(input.to_str().unwrap(), output.to_str().unwrap());
    let result = engine.run();

    assert!(result.is_ok());
    assert_eq!(result.unwrap(), output.to_str().unwrap());

    let pdf_bytes = std::fs::read(&output).unwrap();
    assert!(!pdf_bytes.is_empty());
    assert!(pdf_bytes.starts_with(b"%PDF-"));
}

#[test]
fn test_missing_input_fails_without_creating_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("missing.html");
    let output = temp_dir.path().join("out.pdf");

    let engine = engine_for(input.to_str().unwrap(), output.to_str().unwrap());
    let err = engine.run().unwrap_err();

    assert!(matches!(err, ConvertError::InputRead { .. }));
    assert!(!output.exists());
}

#[test]
fn test_output_in_missing_directory_is_write_error() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("a.html");
    let output = temp_dir.path().join("no_such_dir").join("a.pdf");
    std::fs::write(&input, "<html><body><p>text</p></body></html>").unwrap();

    let engine = engine_for(input.to_str().unwrap(), output.to_str().unwrap());
    let err = engine.run().unwrap_err();

    assert!(matches!(err, ConvertError::OutputWrite { .. }));
}

#[test]
fn test_rerun_overwrites_existing_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("a.html");
    let output = temp_dir.path().join("a.pdf");
    std::fs::write(&input, "<html><body><h1>Hi</h1></body></html>").unwrap();

    let engine = engine_for(input.to_str().unwrap(), output.to_str().unwrap());

    engine.run().unwrap();
    let first = std::fs::read(&output).unwrap();

    // Second run must succeed against the already-existing file.
    engine.run().unwrap();
    let second = std::fs::read(&output).unwrap();

    assert!(first.starts_with(b"%PDF-"));
    assert!(second.starts_with(b"%PDF-"));
    assert!(!second.is_empty());
}
