//! Retry loop: run a closure until success or policy says stop.

use crate::classify::{Classifier, RequestError};

use super::policy::{RetryDecision, RetryPolicy};

/// Runs a closure until it succeeds or the retry policy says to stop.
///
/// Attempts are numbered from 1. Each failure is classified; non-retryable
/// failures (unauthorized, forbidden, not-found, unconfigured statuses)
/// propagate immediately without further attempts. On retryable failure the
/// loop sleeps for the decided backoff, then tries again. The last failure
/// is propagated once attempts are exhausted.
pub fn run_with_retry<T, F>(
    policy: &RetryPolicy,
    classifier: &Classifier,
    mut f: F,
) -> Result<T, RequestError>
where
    F: FnMut() -> Result<T, RequestError>,
{
    let mut attempt = 1u32;
    loop {
        match f() {
            Ok(value) => return Ok(value),
            Err(e) => {
                let classification = classifier.classify_full(&e);
                match policy.decide(attempt, &classification) {
                    RetryDecision::NoRetry => return Err(e),
                    RetryDecision::RetryAfter(delay) => {
                        tracing::debug!(
                            attempt,
                            category = ?classification.category,
                            delay_ms = delay.as_millis() as u64,
                            "retrying after failure: {e}"
                        );
                        std::thread::sleep(delay);
                        attempt += 1;
                    }
                }
            }
        }
    }
}
