//! Catalog image migration: upload named sources, record the id → URL map.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::classify::Classifier;
use crate::retry::{run_with_retry, RetryPolicy};

use super::client::MediaClient;

/// Outcome of a migration run. Failed uploads are logged and skipped so one
/// bad source does not abort the batch.
#[derive(Debug, Clone)]
pub struct MigrationSummary {
    pub uploaded: usize,
    pub failed: usize,
    pub mapping_path: PathBuf,
}

/// Upload every `name → source URL` entry under the client's folder and
/// write the resulting `name → durable URL` mapping as pretty JSON.
/// Retryable upload failures go through the retry policy first.
pub fn migrate(
    client: &MediaClient,
    policy: &RetryPolicy,
    classifier: &Classifier,
    sources: &BTreeMap<String, String>,
    mapping_path: &Path,
) -> Result<MigrationSummary> {
    let mut mapping: BTreeMap<String, String> = BTreeMap::new();
    let mut failed = 0usize;

    for (name, source) in sources {
        let public_id = format!("{}/{}", client.folder(), name);
        match run_with_retry(policy, classifier, || client.upload(source, &public_id)) {
            Ok(asset) => {
                tracing::info!("uploaded {name} as {}", asset.public_id);
                mapping.insert(name.clone(), asset.secure_url);
            }
            Err(e) => {
                tracing::error!("failed to upload {name}: {e}");
                failed += 1;
            }
        }
    }

    let json = serde_json::to_string_pretty(&mapping).context("serialize media mapping")?;
    std::fs::write(mapping_path, json)
        .with_context(|| format!("write media mapping: {}", mapping_path.display()))?;

    Ok(MigrationSummary {
        uploaded: mapping.len(),
        failed,
        mapping_path: mapping_path.to_path_buf(),
    })
}

/// Read a `name → source URL` migration manifest (a flat JSON object).
pub fn read_manifest(path: &Path) -> Result<BTreeMap<String, String>> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("read migration manifest: {}", path.display()))?;
    serde_json::from_str(&data)
        .with_context(|| format!("parse migration manifest: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manifest.json");
        std::fs::write(
            &path,
            r#"{"samsung-s24":"https://img.example.com/s24.jpg","iphone-15":"https://img.example.com/i15.jpg"}"#,
        )
        .unwrap();
        let manifest = read_manifest(&path).unwrap();
        assert_eq!(manifest.len(), 2);
        assert_eq!(
            manifest.get("samsung-s24").map(String::as_str),
            Some("https://img.example.com/s24.jpg")
        );
    }

    #[test]
    fn missing_manifest_is_an_error() {
        assert!(read_manifest(Path::new("/nonexistent/manifest.json")).is_err());
    }
}
