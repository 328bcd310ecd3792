//! Media host maintenance.
//!
//! Thin signed client for the image-hosting API (upload, list, delete) plus
//! the maintenance passes built on it: duplicate analysis and catalog image
//! migration. The hosting provider owns the API contract; these calls only
//! construct requests and surface failures through the classifier.

mod client;
mod dedupe;
mod migrate;
mod sign;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::config::MediaConfig;

pub use client::{MediaClient, UploadedAsset};
pub use dedupe::{find_duplicates, DuplicateGroup};
pub use migrate::{migrate, read_manifest, MigrationSummary};
pub use sign::api_signature;

/// Environment variables that override the config-file credentials.
pub const ENV_CLOUD_NAME: &str = "RITKART_MEDIA_CLOUD";
pub const ENV_API_KEY: &str = "RITKART_MEDIA_KEY";
pub const ENV_API_SECRET: &str = "RITKART_MEDIA_SECRET";

/// One hosted image as reported by the admin list API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaAsset {
    pub public_id: String,
    pub format: String,
    pub width: u32,
    pub height: u32,
    pub bytes: u64,
    pub secure_url: String,
}

/// Resolved media host credentials.
#[derive(Debug, Clone)]
pub struct MediaCredentials {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    /// Folder prefix for uploads and listings.
    pub folder: String,
}

impl MediaCredentials {
    /// Resolve credentials from the config section with environment-variable
    /// overrides. Fails with a usable message when anything is missing.
    pub fn resolve(cfg: Option<&MediaConfig>) -> Result<Self> {
        let env = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());

        let cloud_name = env(ENV_CLOUD_NAME)
            .or_else(|| cfg.map(|c| c.cloud_name.clone()).filter(|v| !v.is_empty()));
        let api_key = env(ENV_API_KEY).or_else(|| cfg.and_then(|c| c.api_key.clone()));
        let api_secret = env(ENV_API_SECRET).or_else(|| cfg.and_then(|c| c.api_secret.clone()));

        let (Some(cloud_name), Some(api_key), Some(api_secret)) = (cloud_name, api_key, api_secret)
        else {
            bail!(
                "media credentials not configured; set [media] in the config file \
                 or the {ENV_CLOUD_NAME}/{ENV_API_KEY}/{ENV_API_SECRET} environment variables"
            );
        };

        let folder = cfg
            .map(|c| c.folder.clone())
            .filter(|f| !f.is_empty())
            .unwrap_or_else(|| "ritkart".to_string());

        Ok(Self { cloud_name, api_key, api_secret, folder })
    }
}
