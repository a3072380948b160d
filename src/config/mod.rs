use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_range, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "htmlpdf")]
#[command(version)]
#[command(about = "Render an HTML file to a PDF document")]
pub struct CliConfig {
    /// Input HTML file
    pub input: String,

    /// Output PDF path
    pub output: String,

    /// Page width in millimeters
    #[arg(long, default_value = "210.0")]
    pub page_width_mm: f32,

    /// Page height in millimeters
    #[arg(long, default_value = "297.0")]
    pub page_height_mm: f32,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output
    }

    fn page_width_mm(&self) -> f32 {
        self.page_width_mm
    }

    fn page_height_mm(&self) -> f32 {
        self.page_height_mm
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        validate_path("output", &self.output)?;
        validate_range("page_width_mm", self.page_width_mm, 10.0, 5000.0)?;
        validate_range("page_height_mm", self.page_height_mm, 10.0, 5000.0)?;

        Ok(())
    }
}
