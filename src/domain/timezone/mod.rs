//! Time Zone API — time zone lookup for a coordinate at a point in time.

pub mod client;
pub mod wire;

pub use wire::TimezoneResponse;

use chrono::{DateTime, Utc};

use crate::endpoint::{EndpointConfig, DEFAULT_STATUS_TABLE};
use crate::error::SdkError;
use crate::network::DEFAULT_HOST;
use crate::query::{ApiRequest, ParameterSet};
use crate::shared::LatLng;

pub(crate) const TIMEZONE_API: EndpointConfig = EndpointConfig {
    host: DEFAULT_HOST,
    path: "/maps/api/timezone/json",
    accepts_client_id: true,
    statuses: DEFAULT_STATUS_TABLE,
};

/// Request for the Time Zone API.
#[derive(Debug, Clone)]
pub struct TimezoneRequest {
    /// The location to look up.
    pub location: LatLng,
    /// The desired time; determines whether daylight savings applies.
    pub timestamp: DateTime<Utc>,
    /// The language in which to return results.
    pub language: Option<String>,
}

impl TimezoneRequest {
    pub fn new(location: LatLng, timestamp: DateTime<Utc>) -> Self {
        Self {
            location,
            timestamp,
            language: None,
        }
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

impl ApiRequest for TimezoneRequest {
    fn params(&self) -> Result<ParameterSet, SdkError> {
        if !self.location.is_valid() {
            return Err(SdkError::InvalidRequest(format!(
                "location {} is out of range",
                self.location
            )));
        }

        let mut q = ParameterSet::new();
        q.push("location", self.location.to_string());
        q.push("timestamp", self.timestamp.timestamp().to_string());
        if let Some(language) = &self.language {
            q.push("language", language.as_str());
        }
        Ok(q)
    }
}
