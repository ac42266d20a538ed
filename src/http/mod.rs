//! HTTP transport layer — `MapsHttp` plus its collaborators.

pub mod classify;
pub mod connector;
pub mod limit;
pub mod retry;
pub mod stream;
pub mod transport;

pub use connector::{BodyStream, HttpConnector, RawResponse, ReqwestConnector};
pub use limit::RateLimiter;
pub use retry::RetryConfig;
pub use stream::ImageStream;
pub use transport::MapsHttp;
