use std::time::Duration;

use crate::classify::Classification;
use crate::config::RetryConfig;

/// Decision returned by the retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Do not retry this error.
    NoRetry,
    /// Retry after the given delay.
    RetryAfter(Duration),
}

/// Bounded-attempt policy with linear backoff.
///
/// The wait before attempt n+1 is `base_delay × n`, clamped to `max_delay`.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Maximum number of attempts (including the first).
    pub max_attempts: u32,
    /// Base delay; the wait grows linearly with the attempt number.
    pub base_delay: Duration,
    /// Upper bound on the backoff delay.
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&RetryConfig::default())
    }
}

impl RetryPolicy {
    pub fn from_config(cfg: &RetryConfig) -> Self {
        Self {
            max_attempts: cfg.max_attempts.max(1),
            base_delay: Duration::from_millis(cfg.base_delay_ms),
            max_delay: Duration::from_millis(cfg.max_delay_ms.max(cfg.base_delay_ms)),
        }
    }

    /// Compute the next backoff delay for a given attempt and classification.
    ///
    /// `attempt` is 1-based (1 = first attempt). Returns `RetryDecision::NoRetry`
    /// when the classification is non-retryable or attempts are exhausted.
    pub fn decide(&self, attempt: u32, classification: &Classification) -> RetryDecision {
        if !classification.retryable || attempt >= self.max_attempts {
            return RetryDecision::NoRetry;
        }
        let raw = self.base_delay.saturating_mul(attempt);
        RetryDecision::RetryAfter(raw.min(self.max_delay))
    }
}
