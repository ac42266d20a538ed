//! Response classification — JSON envelopes and HTTP error statuses.
//!
//! Every JSON endpoint wraps its payload in an envelope carrying a
//! `status` string and an optional error message. Which statuses are
//! transient is configuration data on the endpoint's
//! [`StatusTable`](crate::endpoint::StatusTable); errors produced here
//! carry their retryability so the transport's loop stays mechanical.
//!
//! Envelope checking is split from payload decoding: the retry loop must
//! see a retryable envelope status (e.g. `OVER_QUERY_LIMIT`) on every
//! attempt, while payload shape problems are terminal and classified once,
//! after the loop.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::endpoint::StatusTable;
use crate::error::SdkError;
use crate::http::retry::RetryConfig;

/// The common fields of every JSON envelope. The Time Zone API spells the
/// message `errorMessage`; the older families use `error_message`.
#[derive(Debug, Deserialize)]
struct EnvelopeStatus {
    status: String,
    #[serde(alias = "errorMessage")]
    error_message: Option<String>,
}

/// Check the envelope's `status` field of a 200-status JSON body against
/// the endpoint's table. `Ok(())` means the payload may be decoded.
pub fn check_envelope(body: &str, table: &StatusTable) -> Result<(), SdkError> {
    let envelope: EnvelopeStatus =
        serde_json::from_str(body).map_err(|e| SdkError::Decode(e.to_string()))?;

    if table.is_ok(&envelope.status) {
        return Ok(());
    }

    Err(SdkError::Api {
        message: envelope
            .error_message
            .unwrap_or_else(|| envelope.status.clone()),
        retryable: table.is_retryable(&envelope.status),
        status: envelope.status,
    })
}

/// Decode the typed payload out of an envelope that passed
/// [`check_envelope`].
pub fn decode_payload<T: DeserializeOwned>(body: &str) -> Result<T, SdkError> {
    serde_json::from_str(body).map_err(|e| SdkError::Decode(e.to_string()))
}

/// Classify a non-200 response whose body has been read as text.
pub fn status_code_error(status: u16, body: String, retry: &RetryConfig) -> SdkError {
    SdkError::Api {
        status: status.to_string(),
        message: if body.is_empty() {
            format!("HTTP {status}")
        } else {
            body
        },
        retryable: retry.is_retryable_status(status),
    }
}
