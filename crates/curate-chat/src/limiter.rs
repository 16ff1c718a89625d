//! Sliding-window rate limiting
//!
//! Per-key message log on a shared concurrent map

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use std::collections::VecDeque;

/// Longest window accepted by [`SlidingWindowLimiter::from_secs`]
pub const MAX_WINDOW_SECS: i64 = 7 * 24 * 3600;

/// Outcome of a limiter check
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LimitResult {
    /// Recorded; `remaining` more fit in the current window
    Allowed { remaining: u32 },
    /// Not recorded
    Limited { limit: u32, retry_after_secs: u64 },
}

impl LimitResult {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed { .. })
    }
}

/// Sliding-window limiter keyed by wallet
pub struct SlidingWindowLimiter {
    /// Events per window
    max_events: u32,

    /// Window duration
    window: Duration,

    /// Timestamps of accepted events inside the window, oldest first
    events: DashMap<String, VecDeque<DateTime<Utc>>>,
}

impl SlidingWindowLimiter {
    /// Create new limiter
    pub fn new(max_events: u32, window: Duration) -> Self {
        Self {
            max_events,
            window,
            events: DashMap::new(),
        }
    }

    /// Build from a window length in seconds
    pub fn from_secs(max_events: u32, window_seconds: u64) -> Self {
        let secs = i64::try_from(window_seconds)
            .unwrap_or(i64::MAX)
            .min(MAX_WINDOW_SECS);
        Self::new(max_events, Duration::seconds(secs))
    }

    fn prune(log: &mut VecDeque<DateTime<Utc>>, cutoff: DateTime<Utc>) {
        while log.front().map_or(false, |ts| *ts <= cutoff) {
            log.pop_front();
        }
    }

    /// Check and record an event for `key` at `now`
    pub fn check_at(&self, key: &str, now: DateTime<Utc>) -> LimitResult {
        let cutoff = now - self.window;
        let mut log = self.events.entry(key.to_string()).or_default();
        Self::prune(&mut log, cutoff);

        if log.len() as u64 >= u64::from(self.max_events) {
            let reopens = log.front().map_or(now + self.window, |oldest| *oldest + self.window);
            let wait_ms = (reopens - now).num_milliseconds().max(0);
            return LimitResult::Limited {
                limit: self.max_events,
                retry_after_secs: ((wait_ms + 999) / 1_000) as u64,
            };
        }

        // Keep the log sorted when the clock steps backwards
        let stamp = log.back().map_or(now, |last| (*last).max(now));
        log.push_back(stamp);
        LimitResult::Allowed {
            remaining: self.max_events - log.len() as u32,
        }
    }

    /// Check and record an event for `key` now
    pub fn check(&self, key: &str) -> LimitResult {
        self.check_at(key, Utc::now())
    }

    /// Events still available to `key` at `now`, without recording one
    pub fn remaining_at(&self, key: &str, now: DateTime<Utc>) -> u32 {
        let cutoff = now - self.window;
        let used = self
            .events
            .get(key)
            .map(|log| log.iter().filter(|ts| **ts > cutoff).count())
            .unwrap_or(0);
        self.max_events.saturating_sub(used as u32)
    }

    /// Drop expired timestamps and forget idle keys, returning how many keys went
    pub fn evict_expired(&self, now: DateTime<Utc>) -> usize {
        let cutoff = now - self.window;
        let before = self.events.len();
        self.events.retain(|_, log| {
            Self::prune(log, cutoff);
            !log.is_empty()
        });
        let evicted = before.saturating_sub(self.events.len());
        if evicted > 0 {
            tracing::info!(evicted, "evicted idle chat limiter keys");
        }
        evicted
    }

    /// Number of keys currently tracked
    pub fn tracked_keys(&self) -> usize {
        self.events.len()
    }
}
