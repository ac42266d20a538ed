//! Per-call context — deadline propagation.
//!
//! Every suspension point in the transport (rate-limiter wait, backoff
//! sleep, in-flight request) checks the context's deadline; once it has
//! passed, the call unwinds with [`SdkError::Cancelled`] and no further
//! attempts are made.

use std::time::Duration;

use tokio::time::Instant;

/// Call-scoped context carrying an optional deadline.
///
/// `CallContext::default()` never expires. Contexts are cheap to copy and
/// are not shared between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct CallContext {
    deadline: Option<Instant>,
}

impl CallContext {
    /// A context with no deadline.
    pub fn new() -> Self {
        Self::default()
    }

    /// A context that expires `timeout` from now.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            deadline: Some(Instant::now() + timeout),
        }
    }

    /// A context that expires at an absolute instant.
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_expired(&self) -> bool {
        match self.deadline {
            Some(d) => Instant::now() >= d,
            None => false,
        }
    }
}
