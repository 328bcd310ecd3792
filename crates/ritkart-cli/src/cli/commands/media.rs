//! `ritkart media ...` – media host maintenance.

use anyhow::Result;
use ritkart_core::classify::Classifier;
use ritkart_core::config::RitkartConfig;
use ritkart_core::media::{
    find_duplicates, migrate, read_manifest, MediaClient, MediaCredentials,
};
use ritkart_core::retry::{run_with_retry, RetryPolicy};

use crate::cli::MediaAction;

pub fn run_media(cfg: &RitkartConfig, action: MediaAction) -> Result<()> {
    let creds = MediaCredentials::resolve(cfg.media.as_ref())?;
    let client = MediaClient::new(creds);
    let policy = RetryPolicy::from_config(&cfg.retry());
    let classifier = Classifier::from_config(cfg);

    match action {
        MediaAction::Upload { source, id } => {
            let asset = run_with_retry(&policy, &classifier, || client.upload(&source, &id))?;
            println!("Uploaded {} -> {}", asset.public_id, asset.secure_url);
        }
        MediaAction::List { prefix } => {
            let prefix = prefix.unwrap_or_else(|| client.folder().to_string());
            let assets = run_with_retry(&policy, &classifier, || client.list(&prefix))?;
            if assets.is_empty() {
                println!("No assets under prefix '{prefix}'.");
            } else {
                println!("{:<36} {:<8} {:<12} {:<10}", "PUBLIC ID", "FORMAT", "DIMENSIONS", "BYTES");
                for asset in &assets {
                    println!(
                        "{:<36} {:<8} {:<12} {:<10}",
                        asset.public_id,
                        asset.format,
                        format!("{}x{}", asset.width, asset.height),
                        asset.bytes
                    );
                }
                println!("{} asset(s)", assets.len());
            }
        }
        MediaAction::Delete { public_id } => {
            let ids = vec![public_id.clone()];
            run_with_retry(&policy, &classifier, || client.delete(&ids))?;
            println!("Deleted {public_id}");
        }
        MediaAction::Dedupe { apply } => {
            let prefix = client.folder().to_string();
            let assets = run_with_retry(&policy, &classifier, || client.list(&prefix))?;
            let groups = find_duplicates(&assets);
            if groups.is_empty() {
                println!("No duplicates among {} asset(s).", assets.len());
                return Ok(());
            }
            for group in &groups {
                println!(
                    "keep {} ({} bytes, {}x{}, {})",
                    group.keeper.public_id,
                    group.keeper.bytes,
                    group.keeper.width,
                    group.keeper.height,
                    group.keeper.format
                );
                for dup in &group.duplicates {
                    println!("  duplicate {}", dup.public_id);
                }
            }
            let ids: Vec<String> = groups.iter().flat_map(|g| g.duplicate_ids()).collect();
            if apply {
                run_with_retry(&policy, &classifier, || client.delete(&ids))?;
                println!("Deleted {} duplicate asset(s)", ids.len());
            } else {
                println!(
                    "{} duplicate asset(s) found; re-run with --apply to delete them",
                    ids.len()
                );
            }
        }
        MediaAction::Migrate { manifest, mapping } => {
            let sources = read_manifest(&manifest)?;
            let summary = migrate(&client, &policy, &classifier, &sources, &mapping)?;
            println!(
                "Migrated {} image(s), {} failed; mapping written to {}",
                summary.uploaded,
                summary.failed,
                summary.mapping_path.display()
            );
        }
    }

    Ok(())
}
