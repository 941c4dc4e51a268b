use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;
use tokio::time::sleep;
use tracing::{debug, instrument, warn};

use crate::error::Result;

/// NCBI limit without an API key, in requests per second
const DEFAULT_RATE: f64 = 3.0;

/// Token bucket limiter keeping requests under the NCBI E-utilities limits
///
/// NCBI allows 3 requests per second without an API key and 10 with one.
/// Exceeding that can get the caller's IP blocked.
#[derive(Clone)]
pub struct RateLimiter {
    bucket: Arc<Mutex<TokenBucket>>,
}

struct TokenBucket {
    tokens: f64,
    capacity: f64,
    refill_rate: f64,
    last_refill: Instant,
}

impl RateLimiter {
    /// Create a limiter allowing `rate` requests per second
    ///
    /// A rate that is not a positive finite number falls back to the NCBI
    /// default of 3 requests per second.
    ///
    /// ```
    /// use pubmed_affiliations::rate_limit::RateLimiter;
    ///
    /// let limiter = RateLimiter::new(3.0);
    /// ```
    pub fn new(rate: f64) -> Self {
        let rate = if rate.is_finite() && rate > 0.0 {
            rate
        } else {
            warn!(rate, "Invalid rate limit, using NCBI default");
            DEFAULT_RATE
        };

        let capacity = rate.max(1.0);
        Self {
            bucket: Arc::new(Mutex::new(TokenBucket {
                tokens: capacity,
                capacity,
                refill_rate: rate,
                last_refill: Instant::now(),
            })),
        }
    }

    /// Take one token, sleeping until one is available
    ///
    /// Clones share the bucket, so a token freed while sleeping may go to
    /// another waiter; the wait is then recomputed.
    #[instrument(skip(self))]
    pub async fn acquire(&self) -> Result<()> {
        loop {
            let wait_time = {
                let mut bucket = self.bucket.lock().await;
                bucket.refill();

                if bucket.tokens >= 1.0 {
                    bucket.tokens -= 1.0;
                    debug!(remaining_tokens = %bucket.tokens, "Token acquired");
                    return Ok(());
                }

                let missing = 1.0 - bucket.tokens;
                Duration::from_secs_f64(missing / bucket.refill_rate)
            };

            debug!(
                wait_duration_ms = wait_time.as_millis(),
                "Sleeping to respect rate limit"
            );
            sleep(wait_time).await;
        }
    }

    /// Whether a token could be taken right now, without taking it
    pub async fn check_available(&self) -> bool {
        let mut bucket = self.bucket.lock().await;
        bucket.refill();
        bucket.tokens >= 1.0
    }

    pub async fn token_count(&self) -> f64 {
        let mut bucket = self.bucket.lock().await;
        bucket.refill();
        bucket.tokens
    }

    pub async fn rate(&self) -> f64 {
        self.bucket.lock().await.refill_rate
    }
}

impl TokenBucket {
    fn refill(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_refill);

        self.tokens = (self.tokens + elapsed.as_secs_f64() * self.refill_rate).min(self.capacity);
        self.last_refill = now;
    }
}
