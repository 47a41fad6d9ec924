//! Error type for the external sentiment analysis boundary.

use std::time::Duration;

use thiserror::Error;

/// Errors surfaced by a sentiment analysis invocation.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Input rejected locally; no request was made.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Missing or unusable service configuration.
    #[error("Sentiment service configuration error: {0}")]
    Configuration(String),

    /// The service call itself failed.
    #[error("Sentiment service error{}: {message}", .status_code.map(|c| format!(" (HTTP {c})")).unwrap_or_default())]
    Service {
        status_code: Option<u16>,
        message: String,
        is_retryable: bool,
        retry_after: Option<Duration>,
    },

    /// The service answered, but not with a usable verdict.
    #[error("Failed to parse sentiment response: {0}")]
    Parse(String),
}

impl AnalysisError {
    /// Whether retrying the same invocation could reasonably succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Service {
                is_retryable: true,
                ..
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_display_includes_status() {
        let err = AnalysisError::Service {
            status_code: Some(429),
            message: "quota exceeded".to_string(),
            is_retryable: true,
            retry_after: None,
        };
        assert_eq!(
            err.to_string(),
            "Sentiment service error (HTTP 429): quota exceeded"
        );
        assert!(err.is_retryable());
    }

    #[test]
    fn test_non_service_errors_are_not_retryable() {
        assert!(!AnalysisError::InvalidInput("blank".to_string()).is_retryable());
        assert!(!AnalysisError::Parse("bad json".to_string()).is_retryable());
    }
}
