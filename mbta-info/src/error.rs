//! Error types shared across the service.

/// Errors surfaced by the MBTA client and the analysis layers.
///
/// Every variant carries a human-readable message and maps to a numeric
/// status code via [`TransitError::code`]. Variants are constructed at
/// the boundary where each kind of failure originates: `Remote` in the
/// HTTP client, `Validation` and `Internal` in the trip planner.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitError {
    /// Upstream fetch failed, or the API reported an error in its
    /// response envelope.
    #[error("{message}")]
    Remote { code: u16, message: String },

    /// User-supplied input could not be resolved, or no path exists.
    #[error("{message}")]
    Validation { message: String },

    /// Data inconsistency that should not occur with well-formed input.
    #[error("{message}")]
    Internal { message: String },
}

impl TransitError {
    /// An upstream failure with an explicit status code.
    pub fn remote(code: u16, message: impl Into<String>) -> Self {
        TransitError::Remote {
            code,
            message: message.into(),
        }
    }

    /// An unresolvable user input or an impossible request.
    pub fn validation(message: impl Into<String>) -> Self {
        TransitError::Validation {
            message: message.into(),
        }
    }

    /// A data inconsistency.
    pub fn internal(message: impl Into<String>) -> Self {
        TransitError::Internal {
            message: message.into(),
        }
    }

    /// The status code reported alongside the message.
    pub fn code(&self) -> u16 {
        match self {
            TransitError::Remote { code, .. } => *code,
            TransitError::Validation { .. } => 400,
            TransitError::Internal { .. } => 500,
        }
    }

    /// The bare message, without any status-code prefix.
    pub fn message(&self) -> &str {
        match self {
            TransitError::Remote { message, .. }
            | TransitError::Validation { message }
            | TransitError::Internal { message } => message,
        }
    }
}

impl From<reqwest::Error> for TransitError {
    /// Transport-level failures carry no API status; they surface as a
    /// generic upstream 500 with whatever detail reqwest provides.
    fn from(err: reqwest::Error) -> Self {
        TransitError::Remote {
            code: 500,
            message: non_empty_or_internal(err.to_string()),
        }
    }
}

/// Fall back to the generic message when a source error has no text.
pub(crate) fn non_empty_or_internal(message: String) -> String {
    if message.trim().is_empty() {
        "Internal Error.".to_string()
    } else {
        message
    }
}
