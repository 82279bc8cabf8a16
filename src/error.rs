use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalysisError>;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error(
        "Dataset has {found} column(s); wind direction and speed columns are required"
    )]
    InsufficientColumns { found: usize },

    #[error("No column matched wind {0}; name it explicitly")]
    UnresolvedColumn(String),

    #[error("Column '{0}' not found in dataset")]
    ColumnNotFound(String),

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),
}
