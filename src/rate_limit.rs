//! Fixed-rate admission control for outbound marketplace requests

use std::collections::VecDeque;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

const WINDOW: Duration = Duration::from_secs(1);

/// Caps request starts at `rps` per rolling one-second window.
///
/// `acquire` suspends the caller until a slot frees. Independent fetches
/// only contend for the shared window state, so one limiter behind an
/// `Arc` is safe across concurrent invocations.
pub struct RateLimiter {
    rps: usize,
    admissions: Mutex<VecDeque<Instant>>,
}

impl RateLimiter {
    pub fn new(rps: usize) -> Self {
        assert!(rps > 0, "rate limiter requires a positive rate");
        Self {
            rps,
            admissions: Mutex::new(VecDeque::with_capacity(rps)),
        }
    }

    /// Wait until starting one more request keeps the window under the cap
    pub async fn acquire(&self) {
        loop {
            let wait = {
                let mut admissions = self.admissions.lock().await;
                let now = Instant::now();
                while let Some(front) = admissions.front() {
                    if now.duration_since(*front) >= WINDOW {
                        admissions.pop_front();
                    } else {
                        break;
                    }
                }
                if admissions.len() < self.rps {
                    admissions.push_back(now);
                    return;
                }
                // The oldest admission leaves the window after one full second
                let front = *admissions.front().expect("window is at capacity");
                WINDOW.saturating_sub(now.duration_since(front))
            };
            tokio::time::sleep(wait).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn admits_up_to_rate_immediately() {
        let limiter = RateLimiter::new(3);
        let start = Instant::now();
        limiter.acquire().await;
        limiter.acquire().await;
        limiter.acquire().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn defers_requests_past_the_window_cap() {
        let limiter = RateLimiter::new(2);
        let start = Instant::now();
        limiter.acquire().await;
        limiter.acquire().await;
        limiter.acquire().await;
        assert!(start.elapsed() >= Duration::from_secs(1));
        // Both slots freed at once, so one more is admitted without delay
        let before = Instant::now();
        limiter.acquire().await;
        assert_eq!(before.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn window_refills_after_idle_second() {
        let limiter = RateLimiter::new(2);
        limiter.acquire().await;
        limiter.acquire().await;
        tokio::time::sleep(Duration::from_millis(1100)).await;
        let start = Instant::now();
        limiter.acquire().await;
        limiter.acquire().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
