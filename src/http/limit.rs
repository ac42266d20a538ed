//! Client-wide request rate limiting.
//!
//! One token-bucket limiter is shared by every call on a client instance;
//! it is the only coordination point between concurrent calls. Token
//! accounting is atomic inside `governor`, so no two calls can observe the
//! same token. Waiting is cooperative and deadline-aware.

use std::num::NonZeroU32;

use governor::{
    clock::DefaultClock,
    middleware::NoOpMiddleware,
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter as GovernorRateLimiter,
};

use crate::context::CallContext;
use crate::error::SdkError;

type Limiter = GovernorRateLimiter<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>;

/// Token-bucket limiter over requests per second. `None` ceiling disables
/// limiting entirely.
pub struct RateLimiter {
    limiter: Option<Limiter>,
}

impl RateLimiter {
    pub fn new(requests_per_second: Option<NonZeroU32>) -> Self {
        Self {
            limiter: requests_per_second
                .map(|rate| GovernorRateLimiter::direct(Quota::per_second(rate))),
        }
    }

    pub fn unlimited() -> Self {
        Self::new(None)
    }

    pub fn is_enabled(&self) -> bool {
        self.limiter.is_some()
    }

    /// Acquire one token, suspending until it is available or the context's
    /// deadline fires, whichever comes first.
    pub async fn acquire(&self, ctx: &CallContext) -> Result<(), SdkError> {
        let Some(limiter) = &self.limiter else {
            return Ok(());
        };
        match ctx.deadline() {
            Some(deadline) => tokio::time::timeout_at(deadline, limiter.until_ready())
                .await
                .map_err(|_| SdkError::Cancelled),
            None => {
                limiter.until_ready().await;
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn disabled_limiter_never_waits() {
        let limiter = RateLimiter::unlimited();
        assert!(!limiter.is_enabled());
        for _ in 0..1000 {
            limiter.acquire(&CallContext::new()).await.unwrap();
        }
    }

    #[tokio::test]
    async fn acquire_succeeds_under_the_ceiling() {
        let limiter = RateLimiter::new(NonZeroU32::new(100));
        assert!(limiter.is_enabled());
        limiter.acquire(&CallContext::new()).await.unwrap();
    }

    #[tokio::test]
    async fn exhausted_bucket_with_deadline_cancels() {
        let limiter = RateLimiter::new(NonZeroU32::new(1));
        // Drain the single available token.
        limiter.acquire(&CallContext::new()).await.unwrap();

        let ctx = CallContext::with_timeout(Duration::from_millis(10));
        let result = limiter.acquire(&ctx).await;
        assert!(matches!(result, Err(SdkError::Cancelled)));
    }
}
