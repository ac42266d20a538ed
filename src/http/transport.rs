//! Low-level transport — `MapsHttp`.
//!
//! Owns the connector, the credential, the shared rate limiter, and the
//! retry policy. Every call runs the same attempt loop: deadline check,
//! rate-limiter token, GET through the connector, classification, and
//! backoff on retryable failures. The first attempt is never delayed.
//!
//! Internal to the SDK — the per-endpoint sub-clients wrap this.

use std::future::Future;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::auth::Credential;
use crate::context::CallContext;
use crate::endpoint::EndpointConfig;
use crate::error::SdkError;
use crate::http::classify;
use crate::http::connector::HttpConnector;
use crate::http::limit::RateLimiter;
use crate::http::retry::RetryConfig;
use crate::http::stream::ImageStream;
use crate::query::ParameterSet;

/// Outcome of a single successful attempt, before payload decoding.
enum Fetched {
    /// 200 JSON body, envelope status already verified.
    Json(String),
    /// 200 binary body, handed to the caller untouched.
    Binary(ImageStream),
}

pub struct MapsHttp {
    connector: Arc<dyn HttpConnector>,
    credential: Credential,
    /// Shared across every call (and clone) of one client instance.
    limiter: Arc<RateLimiter>,
    retry: RetryConfig,
    /// Base-URL override for tests against a mock server.
    host_override: Option<String>,
}

impl MapsHttp {
    pub(crate) fn new(
        connector: Arc<dyn HttpConnector>,
        credential: Credential,
        limiter: Arc<RateLimiter>,
        retry: RetryConfig,
        host_override: Option<String>,
    ) -> Self {
        Self {
            connector,
            credential,
            limiter,
            retry,
            host_override,
        }
    }

    /// Execute a JSON-envelope endpoint and decode its payload.
    pub async fn execute_json<T: DeserializeOwned>(
        &self,
        ctx: &CallContext,
        endpoint: &EndpointConfig,
        params: ParameterSet,
    ) -> Result<T, SdkError> {
        match self.fetch(ctx, endpoint, params, false).await? {
            Fetched::Json(body) => classify::decode_payload(&body),
            Fetched::Binary(_) => unreachable!("json fetch returned a binary body"),
        }
    }

    /// Execute a binary endpoint. On success the caller owns the open
    /// stream; on any failure the transport has already drained and
    /// released the body.
    pub async fn execute_binary(
        &self,
        ctx: &CallContext,
        endpoint: &EndpointConfig,
        params: ParameterSet,
    ) -> Result<ImageStream, SdkError> {
        match self.fetch(ctx, endpoint, params, true).await? {
            Fetched::Binary(stream) => Ok(stream),
            Fetched::Json(_) => unreachable!("binary fetch returned a json body"),
        }
    }

    async fn fetch(
        &self,
        ctx: &CallContext,
        endpoint: &EndpointConfig,
        params: ParameterSet,
        binary: bool,
    ) -> Result<Fetched, SdkError> {
        let url = self.signed_url(endpoint, &params)?;
        let mut attempt = 0;

        loop {
            if ctx.is_expired() {
                return Err(SdkError::Cancelled);
            }
            self.limiter.acquire(ctx).await?;

            match self.attempt(ctx, endpoint, &url, binary).await {
                Ok(fetched) => return Ok(fetched),
                Err(SdkError::Cancelled) => return Err(SdkError::Cancelled),
                Err(e) if e.is_retryable() && attempt < self.retry.max_retries => {
                    let delay = self.retry.delay_for_attempt(attempt);
                    tracing::debug!(
                        attempt = attempt + 1,
                        max = self.retry.max_retries,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "Retrying request to {}",
                        endpoint.path
                    );
                    self.guarded(ctx, async {
                        tokio::time::sleep(delay).await;
                        Ok(())
                    })
                    .await?;
                    attempt += 1;
                }
                Err(e) if e.is_retryable() => {
                    tracing::warn!(
                        attempts = attempt + 1,
                        error = %e,
                        "Giving up on request to {}",
                        endpoint.path
                    );
                    return Err(SdkError::MaxRetriesExceeded {
                        attempts: attempt + 1,
                        last_error: e.to_string(),
                    });
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// One GET and its classification. Non-200 bodies are drained here, so
    /// the connection is released before the error propagates.
    async fn attempt(
        &self,
        ctx: &CallContext,
        endpoint: &EndpointConfig,
        url: &str,
        binary: bool,
    ) -> Result<Fetched, SdkError> {
        let response = self
            .guarded(ctx, async {
                Ok(self.connector.get(url).await?)
            })
            .await?;

        if response.status != 200 {
            let status = response.status;
            let body = self
                .guarded(ctx, async { Ok(response.text().await.unwrap_or_default()) })
                .await?;
            return Err(classify::status_code_error(status, body, &self.retry));
        }

        if binary {
            return Ok(Fetched::Binary(ImageStream::new(response.body)));
        }

        let body = self
            .guarded(ctx, async { Ok(response.text().await?) })
            .await?;
        classify::check_envelope(&body, &endpoint.statuses)?;
        Ok(Fetched::Json(body))
    }

    fn signed_url(
        &self,
        endpoint: &EndpointConfig,
        params: &ParameterSet,
    ) -> Result<String, SdkError> {
        match &self.host_override {
            Some(host) => self.credential.sign_with_host(host, endpoint, params),
            None => self.credential.sign(endpoint, params),
        }
    }

    /// Run a future under the context's deadline, mapping expiry to
    /// [`SdkError::Cancelled`].
    async fn guarded<T, F>(&self, ctx: &CallContext, fut: F) -> Result<T, SdkError>
    where
        F: Future<Output = Result<T, SdkError>>,
    {
        match ctx.deadline() {
            Some(deadline) => tokio::time::timeout_at(deadline, fut)
                .await
                .map_err(|_| SdkError::Cancelled)?,
            None => fut.await,
        }
    }
}

impl Clone for MapsHttp {
    fn clone(&self) -> Self {
        Self {
            connector: self.connector.clone(),
            credential: self.credential.clone(),
            limiter: self.limiter.clone(),
            retry: self.retry.clone(),
            host_override: self.host_override.clone(),
        }
    }
}
