use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::smoke::SmokeEndpoint;

/// Retry policy parameters (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts per operation (including the first).
    pub max_attempts: u32,
    /// Base delay in milliseconds; the wait grows linearly with the attempt number.
    pub base_delay_ms: u64,
    /// Upper bound on the backoff delay in milliseconds.
    pub max_delay_ms: u64,
    /// HTTP status codes that may be retried (subject to category rules).
    pub retryable_status_codes: Vec<u16>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_ms: 1000,
            max_delay_ms: 10_000,
            retryable_status_codes: vec![408, 429, 500, 502, 503, 504],
        }
    }
}

/// Per-category auto-redirect switches (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedirectConfig {
    pub network: bool,
    pub server: bool,
    pub not_found: bool,
    pub unauthorized: bool,
    /// Other 4xx responses (validation, timeouts).
    pub client_errors: bool,
}

impl Default for RedirectConfig {
    fn default() -> Self {
        Self {
            network: true,
            server: true,
            not_found: true,
            unauthorized: true,
            client_errors: false,
        }
    }
}

/// Media host account settings (optional section in config.toml).
///
/// The API key/secret may also come from `RITKART_MEDIA_KEY` /
/// `RITKART_MEDIA_SECRET`, which take precedence. The generated default
/// config never contains a secret.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MediaConfig {
    /// Account (cloud) name at the media host.
    #[serde(default)]
    pub cloud_name: String,
    /// Folder prefix for uploaded assets.
    #[serde(default = "default_media_folder")]
    pub folder: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_secret: Option<String>,
}

fn default_media_folder() -> String {
    "ritkart".to_string()
}

/// Deployment smoke-test settings (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmokeConfig {
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Endpoints to probe; a deployment passes when all return 2xx.
    pub endpoints: Vec<SmokeEndpoint>,
}

impl Default for SmokeConfig {
    fn default() -> Self {
        let backend = "https://ritkart-backend.onrender.com";
        let frontend = "https://ritkart-frontend.onrender.com";
        let api = |name: &str, path: &str| SmokeEndpoint {
            name: name.to_string(),
            url: format!("{backend}{path}"),
        };
        Self {
            timeout_secs: 10,
            endpoints: vec![
                api("backend health", "/api/health"),
                api("backend products", "/api/products"),
                api("backend categories", "/api/categories"),
                api("backend users", "/api/users"),
                api("admin image list", "/api/admin/images/list"),
                api("admin duplicate analysis", "/api/admin/images/analyze-duplicates"),
                SmokeEndpoint {
                    name: "frontend".to_string(),
                    url: frontend.to_string(),
                },
            ],
        }
    }
}

/// Global configuration loaded from `~/.config/ritkart/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RitkartConfig {
    /// Retry policy; if missing, built-in defaults are used.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
    /// Auto-redirect switches; if missing, built-in defaults are used.
    #[serde(default)]
    pub redirect: Option<RedirectConfig>,
    /// Media host account; required only for `media` operations.
    #[serde(default)]
    pub media: Option<MediaConfig>,
    /// Smoke-test endpoints; if missing, the deployed defaults are used.
    #[serde(default)]
    pub smoke: Option<SmokeConfig>,
}

impl RitkartConfig {
    pub fn retry(&self) -> RetryConfig {
        self.retry.clone().unwrap_or_default()
    }

    pub fn redirect(&self) -> RedirectConfig {
        self.redirect.clone().unwrap_or_default()
    }

    pub fn smoke(&self) -> SmokeConfig {
        self.smoke.clone().unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ritkart")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RitkartConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = RitkartConfig {
            retry: Some(RetryConfig::default()),
            redirect: Some(RedirectConfig::default()),
            media: None,
            smoke: Some(SmokeConfig::default()),
        };
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: RitkartConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_retry_values() {
        let retry = RetryConfig::default();
        assert_eq!(retry.max_attempts, 3);
        assert_eq!(retry.base_delay_ms, 1000);
        assert_eq!(retry.max_delay_ms, 10_000);
        assert_eq!(retry.retryable_status_codes, vec![408, 429, 500, 502, 503, 504]);
    }

    #[test]
    fn default_redirect_values() {
        let redirect = RedirectConfig::default();
        assert!(redirect.network);
        assert!(redirect.server);
        assert!(redirect.not_found);
        assert!(redirect.unauthorized);
        assert!(!redirect.client_errors);
    }

    #[test]
    fn empty_config_parses_with_all_sections_missing() {
        let cfg: RitkartConfig = toml::from_str("").unwrap();
        assert!(cfg.retry.is_none());
        assert!(cfg.redirect.is_none());
        assert!(cfg.media.is_none());
        assert!(cfg.smoke.is_none());
        // Accessors fall back to defaults.
        assert_eq!(cfg.retry().max_attempts, 3);
        assert!(cfg.redirect().network);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = RitkartConfig {
            retry: Some(RetryConfig::default()),
            redirect: Some(RedirectConfig::default()),
            media: Some(MediaConfig {
                cloud_name: "demo".to_string(),
                folder: "ritkart".to_string(),
                api_key: None,
                api_secret: None,
            }),
            smoke: Some(SmokeConfig::default()),
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: RitkartConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.retry().max_attempts, 3);
        assert_eq!(parsed.media.as_ref().unwrap().cloud_name, "demo");
        assert_eq!(parsed.smoke().endpoints.len(), 7);
    }

    #[test]
    fn config_toml_custom_retry() {
        let toml = r#"
            [retry]
            max_attempts = 5
            base_delay_ms = 250
            max_delay_ms = 4000
            retryable_status_codes = [500, 503]
        "#;
        let cfg: RitkartConfig = toml::from_str(toml).unwrap();
        let retry = cfg.retry();
        assert_eq!(retry.max_attempts, 5);
        assert_eq!(retry.base_delay_ms, 250);
        assert_eq!(retry.max_delay_ms, 4000);
        assert_eq!(retry.retryable_status_codes, vec![500, 503]);
    }

    #[test]
    fn config_toml_media_section() {
        let toml = r#"
            [media]
            cloud_name = "dv0lg87ib"
            folder = "ritkart"
        "#;
        let cfg: RitkartConfig = toml::from_str(toml).unwrap();
        let media = cfg.media.unwrap();
        assert_eq!(media.cloud_name, "dv0lg87ib");
        assert_eq!(media.folder, "ritkart");
        assert!(media.api_key.is_none());
        assert!(media.api_secret.is_none());
    }
}
