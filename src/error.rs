//! Error types for the date parsers.

/// Errors raised by the parsers' fallback paths.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("Invalid date format '{input}': {reason}")]
    InvalidFormat { input: String, reason: String },

    #[error("Unrecognized date '{input}'")]
    Unrecognized { input: String },
}

impl DateError {
    pub(crate) fn invalid_format(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn unrecognized(input: &str) -> Self {
        Self::Unrecognized {
            input: input.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DateError>;
