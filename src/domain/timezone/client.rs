//! Time Zone sub-client.

use crate::client::MapsClient;
use crate::context::CallContext;
use crate::domain::timezone::{TimezoneRequest, TimezoneResponse, TIMEZONE_API};
use crate::error::SdkError;
use crate::query::ApiRequest;

pub struct Timezone<'a> {
    pub(crate) client: &'a MapsClient,
}

impl<'a> Timezone<'a> {
    /// Look up the time zone for a coordinate.
    pub async fn get(
        &self,
        ctx: &CallContext,
        request: &TimezoneRequest,
    ) -> Result<TimezoneResponse, SdkError> {
        let params = request.params()?;
        self.client
            .http
            .execute_json(ctx, &TIMEZONE_API, params)
            .await
    }
}
