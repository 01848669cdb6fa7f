//! Provider rate-limit backoff tracking
//!
//! The hosted provider throttles auth endpoints aggressively on free tiers.
//! Every 429 observed feeds this tracker; consecutive hits inside a 5-minute
//! window grow the advertised wait exponentially, capped at 15 minutes.

use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;
use serde::Serialize;

/// First backoff step (minutes)
const BASE_WAIT_MINUTES: u64 = 2;
/// Backoff ceiling (minutes)
const MAX_WAIT_MINUTES: u64 = 15;
/// Hits further apart than this reset the consecutive counter
const WINDOW_SECS: i64 = 5 * 60;

#[derive(Debug, Default)]
struct TrackerState {
    last_hit: Option<DateTime<Utc>>,
    consecutive: u32,
}

/// Process-wide rate-limit state
#[derive(Debug, Default)]
pub struct RateLimitTracker {
    inner: Mutex<TrackerState>,
}

/// Snapshot exposed on the rate-limit-status endpoint
#[derive(Debug, Clone, Serialize)]
pub struct RateLimitStatus {
    pub last_rate_limit: Option<DateTime<Utc>>,
    pub consecutive_limits: u32,
    pub is_in_cooldown: bool,
}

impl RateLimitTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a provider rate-limit hit, returning the wait to advertise (minutes)
    pub fn record_hit(&self) -> u64 {
        self.record_hit_at(Utc::now())
    }

    fn record_hit_at(&self, now: DateTime<Utc>) -> u64 {
        let mut state = self.inner.lock();

        match state.last_hit {
            Some(prev) if now - prev < Duration::seconds(WINDOW_SECS) => {
                state.consecutive += 1;
            }
            _ => state.consecutive = 1,
        }
        state.last_hit = Some(now);

        backoff_minutes(state.consecutive)
    }

    /// Current tracker snapshot
    pub fn status(&self) -> RateLimitStatus {
        self.status_at(Utc::now())
    }

    fn status_at(&self, now: DateTime<Utc>) -> RateLimitStatus {
        let state = self.inner.lock();
        let wait = backoff_minutes(state.consecutive.max(1)) as i64;

        RateLimitStatus {
            last_rate_limit: state.last_hit,
            consecutive_limits: state.consecutive,
            is_in_cooldown: state
                .last_hit
                .map(|hit| now - hit < Duration::minutes(wait))
                .unwrap_or(false),
        }
    }
}

/// `min(2 * 2^(n-1), 15)` minutes for the n-th consecutive hit
fn backoff_minutes(consecutive: u32) -> u64 {
    let exponent = consecutive.saturating_sub(1).min(10);
    (BASE_WAIT_MINUTES << exponent).min(MAX_WAIT_MINUTES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_progression() {
        assert_eq!(backoff_minutes(1), 2);
        assert_eq!(backoff_minutes(2), 4);
        assert_eq!(backoff_minutes(3), 8);
        assert_eq!(backoff_minutes(4), 15);
        assert_eq!(backoff_minutes(5), 15);
        assert_eq!(backoff_minutes(100), 15);
    }

    #[test]
    fn test_consecutive_hits_inside_window() {
        let tracker = RateLimitTracker::new();
        let start = Utc::now();

        assert_eq!(tracker.record_hit_at(start), 2);
        assert_eq!(tracker.record_hit_at(start + Duration::minutes(1)), 4);
        assert_eq!(tracker.record_hit_at(start + Duration::minutes(2)), 8);
    }

    #[test]
    fn test_window_expiry_resets_counter() {
        let tracker = RateLimitTracker::new();
        let start = Utc::now();

        assert_eq!(tracker.record_hit_at(start), 2);
        assert_eq!(tracker.record_hit_at(start + Duration::minutes(1)), 4);
        // Next hit lands outside the 5-minute window
        assert_eq!(tracker.record_hit_at(start + Duration::minutes(7)), 2);
    }

    #[test]
    fn test_status_cooldown() {
        let tracker = RateLimitTracker::new();
        let start = Utc::now();

        let fresh = tracker.status_at(start);
        assert_eq!(fresh.consecutive_limits, 0);
        assert!(!fresh.is_in_cooldown);
        assert!(fresh.last_rate_limit.is_none());

        tracker.record_hit_at(start);

        let hot = tracker.status_at(start + Duration::minutes(1));
        assert_eq!(hot.consecutive_limits, 1);
        assert!(hot.is_in_cooldown);

        let cooled = tracker.status_at(start + Duration::minutes(3));
        assert!(!cooled.is_in_cooldown);
    }
}
