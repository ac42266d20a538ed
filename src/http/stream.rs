//! Caller-owned binary response bodies.

use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::{Bytes, BytesMut};
use futures_util::{Stream, TryStreamExt};

use crate::error::SdkError;
use crate::http::connector::BodyStream;

/// An open binary response body (static map images and the like).
///
/// Ownership of the underlying connection transfers with this value; it is
/// released exactly once, whichever comes first: [`ImageStream::close`],
/// reading to completion, or drop. Abandoning the stream after a mid-read
/// error therefore still releases the connection.
pub struct ImageStream {
    inner: BodyStream,
}

impl ImageStream {
    pub(crate) fn new(inner: BodyStream) -> Self {
        Self { inner }
    }

    /// Next chunk of body bytes, `None` at end of stream.
    pub async fn chunk(&mut self) -> Result<Option<Bytes>, SdkError> {
        Ok(self.inner.try_next().await?)
    }

    /// Read the remaining body to completion.
    pub async fn bytes(mut self) -> Result<Bytes, SdkError> {
        let mut buf = BytesMut::new();
        while let Some(chunk) = self.inner.try_next().await? {
            buf.extend_from_slice(&chunk);
        }
        Ok(buf.freeze())
    }

    /// Release the connection without reading further.
    pub fn close(self) {
        drop(self);
    }
}

impl Stream for ImageStream {
    type Item = Result<Bytes, SdkError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner
            .as_mut()
            .poll_next(cx)
            .map(|opt| opt.map(|res| res.map_err(SdkError::from)))
    }
}

impl std::fmt::Debug for ImageStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ImageStream(..)")
    }
}
