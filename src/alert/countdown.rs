// SPDX-License-Identifier: MPL-2.0
//! Pausable countdown driving auto-dismissal and the progress bar.
//!
//! Time is always passed in explicitly. The elapsed time is measured from a
//! start reference that is pushed forward by every paused interval, so a
//! pause of `n` ms delays expiry by exactly `n` ms.

use std::time::{Duration, Instant};

/// Countdown of a single alert.
#[derive(Debug, Clone)]
pub struct Countdown {
    duration: Duration,
    /// Start reference, shifted forward on every resume.
    started_at: Instant,
    /// Set while paused.
    paused_at: Option<Instant>,
    /// Whether `pause` has any effect (the alert's `pause_on_hover`).
    pausable: bool,
    expired: bool,
}

impl Countdown {
    /// Starts a countdown of `duration` at `now`.
    #[must_use]
    pub fn start(duration: Duration, pausable: bool, now: Instant) -> Self {
        Self {
            duration,
            started_at: now,
            paused_at: None,
            pausable,
            expired: false,
        }
    }

    /// Freezes the countdown. No-op when not pausable, already paused, or
    /// expired.
    pub fn pause(&mut self, now: Instant) {
        if self.expired || !self.pausable || self.paused_at.is_some() {
            return;
        }
        self.paused_at = Some(now);
    }

    /// Resumes a paused countdown, excluding the paused interval.
    pub fn resume(&mut self, now: Instant) {
        if self.expired {
            return;
        }
        if let Some(paused_at) = self.paused_at.take() {
            self.started_at += now.saturating_duration_since(paused_at);
        }
    }

    /// Returns whether the countdown is currently paused.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }

    /// Returns whether expiry has been reported.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expired
    }

    /// Returns the total duration.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Non-paused time elapsed since start, capped at the duration.
    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Duration {
        let reference = self.paused_at.unwrap_or(now);
        reference
            .saturating_duration_since(self.started_at)
            .min(self.duration)
    }

    /// Time left before expiry.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.duration.saturating_sub(self.elapsed(now))
    }

    /// Fraction of the countdown left, from `1.0` (just started) to `0.0`.
    #[must_use]
    pub fn fraction_remaining(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 0.0;
        }
        let remaining = self.remaining(now).as_secs_f64() / self.duration.as_secs_f64();
        remaining.clamp(0.0, 1.0) as f32
    }

    /// Checks for expiry. Returns true exactly once, on the first call at or
    /// after the expiry instant; the countdown is inert afterwards.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.expired || self.paused_at.is_some() {
            return false;
        }
        if now.saturating_duration_since(self.started_at) >= self.duration {
            self.expired = true;
            return true;
        }
        false
    }
}
