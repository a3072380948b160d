use clap::Parser;
use htmlpdf::utils::{logger, validation::Validate};
use htmlpdf::{CliConfig, ConvertEngine, LocalStorage, PrintpdfRenderer, RenderPipeline};

fn main() {
    let config = match CliConfig::try_parse() {
        Ok(config) => config,
        Err(e) => {
            // --help and --version go to stdout and exit cleanly; any
            // argument error prints its usage message to stderr and
            // fails with exit code 1.
            if !e.use_stderr() {
                let _ = e.print();
                return;
            }
            let _ = e.print();
            std::process::exit(1);
        }
    };

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting htmlpdf");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("ERROR: {}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new();
    let renderer = PrintpdfRenderer::new(config.page_width_mm, config.page_height_mm);
    let pipeline = RenderPipeline::new(storage, renderer, config);
    let engine = ConvertEngine::new(pipeline);

    match engine.run() {
        Ok(output_path) => {
            println!("SUCCESS: PDF generated at {}", output_path);
        }
        Err(e) => {
            tracing::error!("Conversion failed: {}", e);
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
    }
}
