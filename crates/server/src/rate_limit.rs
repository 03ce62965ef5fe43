//! Injected token bucket rate limiter
//!
//! The bucket lives in `AppState`, not in a module-level static, so each
//! server instance has its own explicitly-scoped limiter and tests can
//! construct one directly.

use std::time::Instant;

/// A token bucket rate limiter
///
/// Refills at `rate` tokens per second up to `capacity`. Each
/// [`try_acquire`](TokenBucket::try_acquire) call consumes one token.
pub struct TokenBucket {
    tokens: f64,
    last_refill: Instant,
    capacity: f64,
    rate: f64,
}

impl TokenBucket {
    /// Create a new token bucket with the given rate (requests per second).
    /// Burst capacity is set equal to the rate.
    pub fn new(rate: u64) -> Self {
        let rate = rate as f64;
        TokenBucket {
            tokens: rate,
            last_refill: Instant::now(),
            capacity: rate,
            rate,
        }
    }

    /// Try to acquire one token. Returns `true` if allowed, `false` if rate limited.
    pub fn try_acquire(&mut self) -> bool {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_refill).as_secs_f64();
        self.tokens = (self.tokens + elapsed * self.rate).min(self.capacity);
        self.last_refill = now;
        if self.tokens >= 1.0 {
            self.tokens -= 1.0;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_up_to_capacity_then_limited() {
        let mut bucket = TokenBucket::new(3);
        assert!(bucket.try_acquire());
        assert!(bucket.try_acquire());
        assert!(bucket.try_acquire());
        assert!(!bucket.try_acquire());
    }

    #[test]
    fn test_refills_over_time() {
        let mut bucket = TokenBucket::new(1000);
        while bucket.try_acquire() {}
        std::thread::sleep(std::time::Duration::from_millis(20));
        assert!(bucket.try_acquire());
    }
}
