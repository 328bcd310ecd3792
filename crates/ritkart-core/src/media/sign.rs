//! Request signatures for the media host API.

use std::collections::BTreeMap;

use sha2::{Digest, Sha256};

/// Compute the request signature: the parameters joined as `key=value`
/// pairs in key order, with the API secret appended, SHA-256 hashed and
/// hex-encoded. The `file` and `api_key` parameters are never signed.
pub fn api_signature(params: &BTreeMap<&str, String>, api_secret: &str) -> String {
    let joined = params
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");
    let mut hasher = Sha256::new();
    hasher.update(joined.as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            ("public_id", "ritkart/samsung-s24".to_string()),
            ("timestamp", "1722945600".to_string()),
            ("folder", "ritkart".to_string()),
        ])
    }

    #[test]
    fn signature_is_hex_sha256() {
        let sig = api_signature(&params(), "secret");
        assert_eq!(sig.len(), 64);
        assert!(sig.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn signature_is_deterministic() {
        assert_eq!(api_signature(&params(), "secret"), api_signature(&params(), "secret"));
    }

    #[test]
    fn secret_changes_signature() {
        assert_ne!(api_signature(&params(), "secret"), api_signature(&params(), "other"));
    }

    #[test]
    fn parameter_values_change_signature() {
        let mut other = params();
        other.insert("timestamp", "1722945601".to_string());
        assert_ne!(api_signature(&params(), "secret"), api_signature(&other, "secret"));
    }
}
