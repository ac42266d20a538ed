//! Static per-endpoint descriptors.
//!
//! Each API family (time zone, static map, ...) declares one
//! [`EndpointConfig`] const next to its request types. The descriptor also
//! carries the envelope status table, since which service-side statuses are
//! transient differs per family.

/// Classification table for the `status` field of a JSON envelope.
#[derive(Debug, Clone, Copy)]
pub struct StatusTable {
    /// Statuses that mean success; the payload is decoded.
    pub ok: &'static [&'static str],
    /// Transient conditions worth retrying with backoff.
    pub retryable: &'static [&'static str],
}

impl StatusTable {
    pub fn is_ok(&self, status: &str) -> bool {
        self.ok.contains(&status)
    }

    /// Unrecognized statuses are terminal: retrying an unknown condition
    /// would hammer the service for nothing.
    pub fn is_retryable(&self, status: &str) -> bool {
        self.retryable.contains(&status)
    }
}

/// Shared by the current Maps web-service families.
pub const DEFAULT_STATUS_TABLE: StatusTable = StatusTable {
    ok: &["OK", "ZERO_RESULTS"],
    retryable: &["OVER_QUERY_LIMIT", "UNKNOWN_ERROR"],
};

/// Static descriptor for one API family.
#[derive(Debug, Clone, Copy)]
pub struct EndpointConfig {
    pub host: &'static str,
    pub path: &'static str,
    /// Whether the endpoint accepts client-ID/signature auth (Maps for
    /// Work). Key auth is accepted everywhere.
    pub accepts_client_id: bool,
    pub statuses: StatusTable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_results_counts_as_success() {
        assert!(DEFAULT_STATUS_TABLE.is_ok("ZERO_RESULTS"));
    }

    #[test]
    fn over_query_limit_is_retryable() {
        assert!(DEFAULT_STATUS_TABLE.is_retryable("OVER_QUERY_LIMIT"));
        assert!(DEFAULT_STATUS_TABLE.is_retryable("UNKNOWN_ERROR"));
    }

    #[test]
    fn unknown_status_is_terminal() {
        assert!(!DEFAULT_STATUS_TABLE.is_ok("REQUEST_DENIED"));
        assert!(!DEFAULT_STATUS_TABLE.is_retryable("REQUEST_DENIED"));
        assert!(!DEFAULT_STATUS_TABLE.is_retryable("SOME_FUTURE_STATUS"));
    }
}
