//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    /// Invalid or contradictory client configuration. Never retried.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A request failed its own local validation. Never sent over the wire.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Connection-level failure. Retried up to the configured cap.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The service rejected the request via its JSON envelope or an HTTP
    /// error status. `retryable` records how the classifier binned it.
    #[error("API error {status}: {message}")]
    Api {
        status: String,
        message: String,
        retryable: bool,
    },

    /// Response body did not match the expected envelope shape.
    #[error("Decode error: {0}")]
    Decode(String),

    /// The caller's deadline expired or the call was cancelled.
    #[error("Cancelled")]
    Cancelled,

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}

impl SdkError {
    /// Whether the transport's retry loop may try this error again.
    pub fn is_retryable(&self) -> bool {
        match self {
            SdkError::Transport(t) => t.is_retryable(),
            SdkError::Api { retryable, .. } => *retryable,
            _ => false,
        }
    }
}

/// Connection-level errors, below the HTTP status line.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Connect failed: {0}")]
    Connect(String),

    #[error("Timeout")]
    Timeout,

    #[error("Body read failed: {0}")]
    Body(String),

    #[error("Request failed: {0}")]
    Http(String),
}

impl TransportError {
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            TransportError::Connect(_) | TransportError::Timeout | TransportError::Http(_)
        )
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TransportError::Timeout
        } else if e.is_connect() {
            TransportError::Connect(e.to_string())
        } else if e.is_body() || e.is_decode() {
            TransportError::Body(e.to_string())
        } else {
            TransportError::Http(e.to_string())
        }
    }
}
