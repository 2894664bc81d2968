use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{sleep, Instant};

/// Spaces out requests to prevent API throttling.
///
/// Shared by concurrent fetches: callers queue on the lock, so consecutive
/// requests start at least `delay` apart no matter which task sends them.
pub struct RateLimiter {
    delay: Duration,
    last_request: Mutex<Option<Instant>>,
}

impl RateLimiter {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            last_request: Mutex::new(None),
        }
    }

    pub async fn wait(&self) {
        let mut last = self.last_request.lock().await;
        if let Some(previous) = *last {
            self.apply_delay(previous).await;
        }
        *last = Some(Instant::now());
    }

    async fn apply_delay(&self, previous: Instant) {
        let elapsed = previous.elapsed();
        if elapsed < self.delay {
            sleep(self.delay - elapsed).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_first_request_is_not_delayed() {
        let limiter = RateLimiter::new(50);
        let start = Instant::now();
        limiter.wait().await;
        assert!(start.elapsed() < Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_consecutive_requests_are_spaced() {
        let limiter = RateLimiter::new(50);
        let start = Instant::now();
        limiter.wait().await;
        limiter.wait().await;
        limiter.wait().await;
        assert!(start.elapsed() >= Duration::from_millis(100));
    }
}
