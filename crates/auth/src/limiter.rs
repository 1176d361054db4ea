//! Sliding-window sign-in attempt limiter.

use std::collections::VecDeque;
use std::time::Duration;

use tokio::time::Instant;

pub const DEFAULT_MAX_ATTEMPTS: usize = 5;
pub const DEFAULT_WINDOW: Duration = Duration::from_secs(60);

/// Allows at most `max_attempts` attempts in any `window`.
#[derive(Debug, Clone)]
pub struct AttemptLimiter {
    max_attempts: usize,
    window: Duration,
    attempts: VecDeque<Instant>,
}

impl AttemptLimiter {
    pub fn new(max_attempts: usize, window: Duration) -> Self {
        Self {
            max_attempts,
            window,
            attempts: VecDeque::with_capacity(max_attempts),
        }
    }

    /// Record an attempt at `now`.
    ///
    /// When the window is full the attempt is not recorded and the error holds
    /// the whole seconds until the oldest attempt leaves the window (at least 1).
    pub fn try_acquire(&mut self, now: Instant) -> Result<(), u64> {
        while let Some(oldest) = self.attempts.front() {
            if now.duration_since(*oldest) >= self.window {
                self.attempts.pop_front();
            } else {
                break;
            }
        }

        if let Some(oldest) = self.attempts.front().filter(|_| self.attempts.len() >= self.max_attempts) {
            let wait = self.window.saturating_sub(now.duration_since(*oldest));
            return Err(wait.as_secs_f64().ceil().max(1.0) as u64);
        }

        self.attempts.push_back(now);
        Ok(())
    }

    pub fn remaining(&self, now: Instant) -> usize {
        let live = self
            .attempts
            .iter()
            .filter(|t| now.duration_since(**t) < self.window)
            .count();
        self.max_attempts.saturating_sub(live)
    }
}

impl Default for AttemptLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS, DEFAULT_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allows_up_to_the_limit_then_refuses() {
        let start = Instant::now();
        let mut limiter = AttemptLimiter::new(3, Duration::from_secs(60));

        for _ in 0..3 {
            assert!(limiter.try_acquire(start).is_ok());
        }
        assert_eq!(limiter.try_acquire(start + Duration::from_secs(15)), Err(45));
        assert_eq!(limiter.remaining(start), 0);
    }

    #[test]
    fn window_slides() {
        let start = Instant::now();
        let mut limiter = AttemptLimiter::new(2, Duration::from_secs(10));

        limiter.try_acquire(start).unwrap();
        limiter.try_acquire(start + Duration::from_secs(5)).unwrap();
        assert!(limiter.try_acquire(start + Duration::from_secs(9)).is_err());

        // first attempt has aged out
        assert!(limiter.try_acquire(start + Duration::from_secs(10)).is_ok());
        assert!(limiter.try_acquire(start + Duration::from_secs(11)).is_err());
    }

    #[test]
    fn retry_hint_is_at_least_one_second() {
        let start = Instant::now();
        let mut limiter = AttemptLimiter::new(1, Duration::from_secs(1));
        limiter.try_acquire(start).unwrap();
        assert_eq!(limiter.try_acquire(start + Duration::from_millis(999)), Err(1));
    }
}
