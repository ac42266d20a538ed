//! # Maps SDK
//!
//! A Rust client for the Google Maps Platform web services that share one
//! HTTPS GET transport: Time Zone, Static Maps, and siblings.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — shared value types, query encoding, endpoint descriptors
//! 2. **Auth** — `Credential`: API key or client-ID/signature URL signing
//! 3. **Transport** — `MapsHttp`: rate-limited, retrying, deadline-aware GETs
//! 4. **Endpoints** — per-family request/wire types and sub-clients
//! 5. **High-Level Client** — `MapsClient` with nested sub-client accessors
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use maps_sdk::prelude::*;
//!
//! let client = MapsClient::with_api_key("AIza...")?;
//!
//! let request = TimezoneRequest::new(LatLng::new(-33.86, 151.20), Utc::now());
//! let tz = client.timezone().get(&CallContext::new(), &request).await?;
//! println!("{}", tz.time_zone_id);
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared value types used across endpoint families.
pub mod shared;

/// Query parameter encoding and the per-endpoint request contract.
pub mod query;

/// Static per-endpoint descriptors and envelope status tables.
pub mod endpoint;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

/// Per-call context: deadline propagation.
pub mod context;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Credentials and URL signing.
pub mod auth;

// ── Layer 3: Transport ───────────────────────────────────────────────────────

/// HTTP transport with rate limiting and retry.
pub mod http;

// ── Layer 4: Endpoints ───────────────────────────────────────────────────────

/// Endpoint families (vertical slices): request types, wire types,
/// sub-clients.
pub mod domain;

// ── Layer 5: High-Level Client ───────────────────────────────────────────────

/// `MapsClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared value types
    pub use crate::shared::LatLng;

    // Endpoint requests and responses
    pub use crate::domain::staticmap::{Markers, StaticMapRequest};
    pub use crate::domain::timezone::{TimezoneRequest, TimezoneResponse};

    // Errors
    pub use crate::error::{SdkError, TransportError};

    // Call context
    pub use crate::context::CallContext;

    // Network
    pub use crate::network::DEFAULT_HOST;

    // Client + sub-clients
    pub use crate::client::{MapsClient, MapsClientBuilder, StaticMapsClient, TimezoneClient};

    // Transport knobs and seams
    pub use crate::http::{HttpConnector, ImageStream, RetryConfig};

    // Encoder contract, for callers adding endpoint families of their own
    pub use crate::query::{ApiRequest, ParameterSet};
}
