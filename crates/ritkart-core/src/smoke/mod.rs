//! Deployment smoke checks.
//!
//! Probes the deployed endpoints with bounded-timeout GET requests, retries
//! retryable failures through the shared policy, and reports pass/fail per
//! endpoint. A deployment passes when every endpoint answers 2xx.

mod probe;

use serde::{Deserialize, Serialize};

use crate::classify::{Classification, Classifier, RequestError};
use crate::retry::{run_with_retry, RetryPolicy};

pub use probe::probe_status;

/// One endpoint to probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmokeEndpoint {
    pub name: String,
    pub url: String,
}

/// Outcome for one endpoint.
#[derive(Debug, Clone)]
pub enum ProbeOutcome {
    /// Endpoint answered with a 2xx status.
    Passed { status: u16 },
    /// Probe kept failing; the classification of the final failure.
    Failed(Classification),
}

/// Results of one smoke run, in endpoint order.
#[derive(Debug, Clone)]
pub struct SmokeReport {
    pub results: Vec<(SmokeEndpoint, ProbeOutcome)>,
}

impl SmokeReport {
    pub fn passed(&self) -> usize {
        self.results
            .iter()
            .filter(|(_, outcome)| matches!(outcome, ProbeOutcome::Passed { .. }))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }
}

/// Probe every endpoint, retrying retryable failures.
pub fn run_smoke(
    endpoints: &[SmokeEndpoint],
    timeout: std::time::Duration,
    policy: &RetryPolicy,
    classifier: &Classifier,
) -> SmokeReport {
    let results = endpoints
        .iter()
        .map(|endpoint| {
            let outcome = run_with_retry(policy, classifier, || {
                let status = probe_status(&endpoint.url, timeout)?;
                if (200..300).contains(&status) {
                    Ok(status)
                } else {
                    Err(RequestError::Http { status, message: None })
                }
            });
            let outcome = match outcome {
                Ok(status) => {
                    tracing::info!("{}: HTTP {status}", endpoint.name);
                    ProbeOutcome::Passed { status }
                }
                Err(e) => {
                    tracing::warn!("{}: {e}", endpoint.name);
                    ProbeOutcome::Failed(classifier.classify_full(&e))
                }
            };
            (endpoint.clone(), outcome)
        })
        .collect();
    SmokeReport { results }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::ErrorCategory;

    fn endpoint(name: &str) -> SmokeEndpoint {
        SmokeEndpoint {
            name: name.to_string(),
            url: format!("https://example.com/{name}"),
        }
    }

    #[test]
    fn report_counts_pass_and_fail() {
        let classifier = Classifier::default();
        let failure = classifier.classify_full(&RequestError::Http { status: 503, message: None });
        let report = SmokeReport {
            results: vec![
                (endpoint("health"), ProbeOutcome::Passed { status: 200 }),
                (endpoint("products"), ProbeOutcome::Failed(failure)),
            ],
        };
        assert_eq!(report.passed(), 1);
        assert_eq!(report.failed(), 1);
        assert!(!report.all_passed());
    }

    #[test]
    fn empty_endpoint_list_passes() {
        let report = SmokeReport { results: Vec::new() };
        assert!(report.all_passed());
    }

    #[test]
    fn failed_outcome_carries_classification() {
        let classifier = Classifier::default();
        let failure = classifier.classify_full(&RequestError::Http { status: 404, message: None });
        match ProbeOutcome::Failed(failure) {
            ProbeOutcome::Failed(c) => {
                assert_eq!(c.category, ErrorCategory::NotFound);
                assert!(!c.retryable);
            }
            ProbeOutcome::Passed { .. } => unreachable!(),
        }
    }
}
