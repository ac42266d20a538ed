//! Wire types for Time Zone API responses.

use serde::{Deserialize, Serialize};

/// Payload of a successful Time Zone lookup.
///
/// All fields default so a `ZERO_RESULTS` envelope (ocean coordinates)
/// decodes to an empty response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimezoneResponse {
    /// Daylight-savings offset in seconds.
    #[serde(default)]
    pub dst_offset: i64,
    /// Offset from UTC in seconds, ignoring daylight savings.
    #[serde(default)]
    pub raw_offset: i64,
    /// IANA zone name, e.g. `Australia/Sydney`.
    #[serde(default)]
    pub time_zone_id: String,
    /// Localized long-form name, e.g. `Australian Eastern Daylight Time`.
    #[serde(default)]
    pub time_zone_name: String,
}
