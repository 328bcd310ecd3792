//! `ritkart smoke` – probe the deployed endpoints.

use std::time::Duration;

use anyhow::Result;
use ritkart_core::classify::Classifier;
use ritkart_core::config::RitkartConfig;
use ritkart_core::retry::RetryPolicy;
use ritkart_core::smoke::{run_smoke as probe_endpoints, ProbeOutcome};

pub fn run_smoke(cfg: &RitkartConfig) -> Result<()> {
    let smoke = cfg.smoke();
    let policy = RetryPolicy::from_config(&cfg.retry());
    let classifier = Classifier::from_config(cfg);

    let report = probe_endpoints(
        &smoke.endpoints,
        Duration::from_secs(smoke.timeout_secs),
        &policy,
        &classifier,
    );

    for (endpoint, outcome) in &report.results {
        match outcome {
            ProbeOutcome::Passed { status } => {
                println!("{:<28} PASS  HTTP {status}", endpoint.name);
            }
            ProbeOutcome::Failed(c) => {
                println!(
                    "{:<28} FAIL  {} ({})",
                    endpoint.name,
                    format!("{:?}", c.category).to_lowercase(),
                    c.message
                );
            }
        }
    }
    println!("{} passed, {} failed", report.passed(), report.failed());

    if !report.all_passed() {
        anyhow::bail!("smoke test failed");
    }
    Ok(())
}
