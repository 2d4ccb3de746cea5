//! Export error types

use thiserror::Error;

/// Errors that can occur while exporting datasets
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Unknown dataset: {0}")]
    UnknownDataset(String),

    #[error("Unknown export format: {0} (expected json, ndjson or csv)")]
    UnknownFormat(String),

    /// The dataset has no flat row shape for this format
    #[error("Dataset '{dataset}' cannot be exported as {format}")]
    UnsupportedFormat { dataset: String, format: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ExportResult<T> = Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExportError::UnsupportedFormat {
            dataset: "all".to_string(),
            format: "csv".to_string(),
        };
        assert_eq!(err.to_string(), "Dataset 'all' cannot be exported as csv");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ExportError = io_err.into();
        assert!(matches!(err, ExportError::Io(_)));
    }
}
