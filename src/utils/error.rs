use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Failed to read input file '{path}': {source}")]
    InputRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("HTML rendering failed: {message}")]
    Render { message: String },

    #[error("Failed to write output file '{path}': {source}")]
    OutputWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ConvertError>;
