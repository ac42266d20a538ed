//! The swappable HTTP connector.
//!
//! [`MapsHttp`](crate::http::MapsHttp) talks to the network only through
//! this trait, so tests can substitute a scripted connector and count
//! invocations without touching a socket.

use std::pin::Pin;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use futures_util::{Stream, TryStreamExt};
use reqwest::Client;

use crate::error::TransportError;

/// Body bytes as they arrive from the wire. Dropping the stream releases
/// the underlying connection.
pub type BodyStream = Pin<Box<dyn Stream<Item = Result<Bytes, TransportError>> + Send>>;

/// A raw HTTP response: status line plus an open body stream.
///
/// Ownership of the stream transfers with the struct; whoever holds it is
/// responsible for draining or dropping it.
pub struct RawResponse {
    pub status: u16,
    pub body: BodyStream,
}

impl RawResponse {
    /// Read the body to completion. Consumes the stream, releasing the
    /// connection even when a chunk errors mid-read.
    pub async fn text(mut self) -> Result<String, TransportError> {
        let mut buf = Vec::new();
        while let Some(chunk) = self.body.try_next().await? {
            buf.extend_from_slice(&chunk);
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// One HTTP GET. Implementations must not retry internally; the retry
/// loop lives in the transport.
#[async_trait]
pub trait HttpConnector: Send + Sync {
    async fn get(&self, url: &str) -> Result<RawResponse, TransportError>;
}

/// Default connector backed by a pooled `reqwest` client.
pub struct ReqwestConnector {
    client: Client,
}

impl ReqwestConnector {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(10)
            .build()
            .expect("Failed to build HTTP client");
        Self { client }
    }

    /// Wrap a caller-configured `reqwest` client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestConnector {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpConnector for ReqwestConnector {
    async fn get(&self, url: &str) -> Result<RawResponse, TransportError> {
        let resp = self.client.get(url).send().await?;
        let status = resp.status().as_u16();
        let body: BodyStream = Box::pin(resp.bytes_stream().map_err(TransportError::from));
        Ok(RawResponse { status, body })
    }
}
