//! Error types for the Sentinela analysis service.

use thiserror::Error;

/// The main error type for analysis operations.
///
/// Only [`AnalysisError::InvalidInput`] and [`AnalysisError::PayloadTooLarge`]
/// are ever surfaced to API callers; remote classifier failures are absorbed
/// by the fallback heuristic and anything else is reported as a generic
/// internal failure.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The input text was empty or contained only whitespace.
    #[error("text must contain at least one non-whitespace character")]
    InvalidInput,

    /// The input text exceeded the maximum accepted length.
    #[error("text is {length} characters long, the maximum is {max}")]
    PayloadTooLarge {
        /// The length of the rejected text, in characters.
        length: usize,
        /// The maximum accepted length, in characters.
        max: usize,
    },

    /// The remote classifier could not be reached or returned an unusable
    /// response. Never surfaced to callers; logged and recovered internally.
    #[error("remote classifier unavailable: {0}")]
    RemoteClassifier(String),

    /// Unexpected failure during pipeline execution.
    #[error("internal processing failure: {0}")]
    Internal(String),
}

impl AnalysisError {
    /// Stable machine-readable code for this error, as exposed on the wire.
    pub fn code(&self) -> &'static str {
        match self {
            AnalysisError::InvalidInput => "INVALID_INPUT",
            AnalysisError::PayloadTooLarge { .. } => "TEXT_TOO_LONG",
            AnalysisError::RemoteClassifier(_) => "REMOTE_CLASSIFIER_UNAVAILABLE",
            AnalysisError::Internal(_) => "INTERNAL_SERVER_ERROR",
        }
    }
}

/// Result type alias for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(AnalysisError::InvalidInput.code(), "INVALID_INPUT");
        assert_eq!(
            AnalysisError::PayloadTooLarge { length: 5001, max: 5000 }.code(),
            "TEXT_TOO_LONG"
        );
        assert_eq!(
            AnalysisError::Internal("boom".to_string()).code(),
            "INTERNAL_SERVER_ERROR"
        );
    }

    #[test]
    fn test_payload_too_large_message() {
        let err = AnalysisError::PayloadTooLarge { length: 5001, max: 5000 };
        assert_eq!(
            err.to_string(),
            "text is 5001 characters long, the maximum is 5000"
        );
    }
}
