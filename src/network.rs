//! Network URL constants for the Maps SDK.

/// Default host for all Maps web-service endpoints.
pub const DEFAULT_HOST: &str = "https://maps.googleapis.com";
