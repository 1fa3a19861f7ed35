//! Error types for Airbyte API calls.

use thiserror::Error;

/// Result type alias for Airbyte API calls.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the client and the source adapters.
///
/// Every variant is surfaced to the caller as-is. Nothing here is retried.
#[derive(Debug, Error)]
pub enum Error {
    /// The request payload could not be serialized to JSON.
    #[error("failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    /// No response was obtained (DNS, connection refused, reset, timeout).
    #[error("request to Airbyte failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Airbyte answered with a non-2xx status.
    ///
    /// Displays as the bare message extracted from the error body.
    #[error("{message}")]
    Remote { status: u16, message: String },

    /// A response body could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// The client configuration cannot be used to build a client.
    #[error("invalid client configuration: {0}")]
    Config(String),
}

impl Error {
    /// HTTP status of a remote error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for failures where Airbyte itself was unreachable or refused the call.
    pub fn is_upstream(&self) -> bool {
        matches!(self, Error::Transport(_) | Error::Remote { .. })
    }
}
