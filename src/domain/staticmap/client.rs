//! Static Maps sub-client.

use crate::client::MapsClient;
use crate::context::CallContext;
use crate::domain::staticmap::{StaticMapRequest, STATIC_MAP_API};
use crate::error::SdkError;
use crate::http::ImageStream;
use crate::query::ApiRequest;

pub struct StaticMaps<'a> {
    pub(crate) client: &'a MapsClient,
}

impl<'a> StaticMaps<'a> {
    /// Render a map image. The returned stream owns the connection; read
    /// it to completion, `close()` it, or drop it to release.
    pub async fn get(
        &self,
        ctx: &CallContext,
        request: &StaticMapRequest,
    ) -> Result<ImageStream, SdkError> {
        let params = request.params()?;
        self.client
            .http
            .execute_binary(ctx, &STATIC_MAP_API, params)
            .await
    }
}
