//! View state error types

use thiserror::Error;

/// Errors raised when parsing view identifiers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// Tab id is not one of overview, sales, customers, churn
    #[error("Unknown tab: {0}")]
    UnknownTab(String),

    /// Region is not All, North, South, East or West
    #[error("Unknown region: {0}")]
    UnknownRegion(String),
}

pub type ViewResult<T> = Result<T, ViewError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ViewError::UnknownTab("not-a-real-tab".to_string());
        assert_eq!(err.to_string(), "Unknown tab: not-a-real-tab");

        let err = ViewError::UnknownRegion("Atlantis".to_string());
        assert_eq!(err.to_string(), "Unknown region: Atlantis");
    }
}
