use crate::support::SupportVerdict;
use thiserror::Error as ThisError;

///
/// Error
///
/// Crate-level error taxonomy. Resolution failures are deliberately absent:
/// the alias resolver always recovers locally by falling back to the
/// unresolved field key and never surfaces an error to the caller.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum Error {
    /// Target item missing during duplicate or translation merge.
    /// Surfaced to the caller, never retried.
    #[error("item not found: {key}")]
    NotFound { key: String },

    /// Patch rejected by the data API. The edit stays pending so the
    /// caller can retry.
    #[error("update rejected: {message}")]
    Validation { message: String },

    /// An inline write was attempted on a field whose verdict is not
    /// `Full`. This is a logic error in the calling UI; the verdict must
    /// be checked before any write.
    #[error("field '{key}' is not editable inline (support: {verdict})")]
    UnsupportedField { key: String, verdict: SupportVerdict },

    /// Network-layer failure passed through from the host's API client.
    /// Retry policy, if any, belongs to that client.
    #[error("api transport failure: {message}")]
    Api { message: String },
}

impl Error {
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
