use thiserror::Error;

/// Errors that can occur in lionfish population analysis.
#[derive(Error, Debug)]
pub enum LionfishError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Excel error: {0}")]
    Excel(String),

    #[error("TOML error: {0}")]
    Toml(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Computation error: {0}")]
    ComputationError(String),

    #[error("Projection failed at step {step}: {source}")]
    ProjectionError {
        step: u32,
        #[source]
        source: Box<LionfishError>,
    },

    #[error("Insufficient data: {0}")]
    InsufficientData(String),
}

impl From<calamine::Error> for LionfishError {
    fn from(e: calamine::Error) -> Self {
        LionfishError::Excel(e.to_string())
    }
}

impl From<calamine::XlsxError> for LionfishError {
    fn from(e: calamine::XlsxError) -> Self {
        LionfishError::Excel(e.to_string())
    }
}

impl From<toml::de::Error> for LionfishError {
    fn from(e: toml::de::Error) -> Self {
        LionfishError::Toml(e.to_string())
    }
}
