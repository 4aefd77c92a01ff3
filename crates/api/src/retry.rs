// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Retry policy for backend calls.
//!
//! The delay before retry `n` (1-based) is `base_delay * factor^(n-1)`,
//! capped at `max_delay`. The schedule is deterministic.

use std::time::Duration;

use crate::error::ClientError;

/// Decides whether and when a failed call is attempted again.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Total attempts, including the first. Zero is treated as one.
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub factor: f64,
    pub max_delay: Duration,
    /// Classifies errors as retryable.
    pub retryable: fn(&ClientError) -> bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(500),
            factor: 2.0,
            max_delay: Duration::from_secs(8),
            retryable: ClientError::is_transient,
        }
    }
}

impl RetryPolicy {
    /// A policy that makes exactly one attempt.
    #[must_use]
    pub fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    #[must_use]
    pub const fn with_base_delay(mut self, base_delay: Duration) -> Self {
        self.base_delay = base_delay;
        self
    }

    /// Total attempts, at least one.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// The pause before retry number `retry` (1 for the first retry).
    #[must_use]
    pub fn delay_for(&self, retry: u32) -> Duration {
        let exponent: i32 = i32::try_from(retry.saturating_sub(1)).unwrap_or(i32::MAX);
        let factor: f64 = if self.factor.is_finite() && self.factor >= 1.0 {
            self.factor
        } else {
            1.0
        };
        let scaled: f64 = self.base_delay.as_secs_f64() * factor.powi(exponent);
        let capped: f64 = scaled.min(self.max_delay.as_secs_f64());
        Duration::try_from_secs_f64(capped).unwrap_or(self.max_delay)
    }

    /// Returns true if `err` on attempt `attempt` (1-based) should be retried.
    #[must_use]
    pub fn should_retry(&self, attempt: u32, err: &ClientError) -> bool {
        attempt < self.attempts() && (self.retryable)(err)
    }
}
