//! High-level client — `MapsClient` with per-endpoint sub-client
//! accessors.
//!
//! This module keeps the builder and the accessor methods; each endpoint
//! family has its own sub-client in `domain/<name>/client.rs`.

use std::num::NonZeroU32;
use std::sync::Arc;

use crate::auth::Credential;
use crate::domain::staticmap::client::StaticMaps;
use crate::domain::timezone::client::Timezone;
use crate::error::SdkError;
use crate::http::{HttpConnector, MapsHttp, RateLimiter, ReqwestConnector, RetryConfig};

// Re-export sub-client types for convenience.
pub use crate::domain::staticmap::client::StaticMaps as StaticMapsClient;
pub use crate::domain::timezone::client::Timezone as TimezoneClient;

/// The primary entry point for the Maps SDK.
///
/// Safe to share between tasks: calls run independently, coordinated only
/// through the client's rate limiter. Cloning is cheap and the clone
/// shares the limiter.
pub struct MapsClient {
    pub(crate) http: MapsHttp,
}

impl MapsClient {
    pub fn builder() -> MapsClientBuilder {
        MapsClientBuilder::default()
    }

    /// Shorthand for the common case: key auth, default everything else.
    pub fn with_api_key(key: impl Into<String>) -> Result<Self, SdkError> {
        Self::builder().api_key(key).build()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn timezone(&self) -> Timezone<'_> {
        Timezone { client: self }
    }

    pub fn static_maps(&self) -> StaticMaps<'_> {
        StaticMaps { client: self }
    }
}

impl Clone for MapsClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

/// Builder for [`MapsClient`]. Exactly one credential is required;
/// supplying none or both fails at `build()`, before any network access.
#[derive(Default)]
pub struct MapsClientBuilder {
    api_key: Option<String>,
    client_id_and_signature: Option<(String, String)>,
    rate_limit: Option<NonZeroU32>,
    retry: RetryConfig,
    connector: Option<Arc<dyn HttpConnector>>,
    host: Option<String>,
}

impl MapsClientBuilder {
    /// Authenticate with a plain API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Authenticate with a Maps for Work client ID and its URL-safe
    /// base64-encoded signing secret.
    pub fn client_id_and_signature(
        mut self,
        client_id: impl Into<String>,
        secret_b64: impl Into<String>,
    ) -> Self {
        self.client_id_and_signature = Some((client_id.into(), secret_b64.into()));
        self
    }

    /// Requests-per-second ceiling shared by all calls on this client.
    /// `None` (the default) disables rate limiting.
    pub fn rate_limit(mut self, requests_per_second: Option<NonZeroU32>) -> Self {
        self.rate_limit = requests_per_second;
        self
    }

    /// Cap on retry attempts beyond the first try.
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.retry.max_retries = max_retries;
        self
    }

    /// Replace the whole retry policy.
    pub fn retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Swap the HTTP transport, for testing.
    pub fn connector(mut self, connector: Arc<dyn HttpConnector>) -> Self {
        self.connector = Some(connector);
        self
    }

    /// Override the base URL of every endpoint (mock servers in tests).
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn build(self) -> Result<MapsClient, SdkError> {
        let credential = match (self.api_key, self.client_id_and_signature) {
            (Some(key), None) => Credential::api_key(key),
            (None, Some((client_id, secret_b64))) => {
                Credential::client_id_and_signature(client_id, secret_b64)?
            }
            (Some(_), Some(_)) => {
                return Err(SdkError::Config(
                    "supply an API key or a client ID with signature, not both".to_string(),
                ))
            }
            (None, None) => {
                return Err(SdkError::Config(
                    "an API key or a client ID with signature is required".to_string(),
                ))
            }
        };

        let connector = self
            .connector
            .unwrap_or_else(|| Arc::new(ReqwestConnector::new()));

        Ok(MapsClient {
            http: MapsHttp::new(
                connector,
                credential,
                Arc::new(RateLimiter::new(self.rate_limit)),
                self.retry,
                self.host,
            ),
        })
    }
}
