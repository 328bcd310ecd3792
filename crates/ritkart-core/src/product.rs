//! Product reference stored in saved collections.

use serde::{Deserialize, Serialize};

/// A product reference as the storefront sees it. Only the fields needed for
/// saved-collection display are kept; the catalog itself lives in the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique catalog identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Price in whole rupees, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_inr: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Product {
    /// Minimal product with just an id and title.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            brand: None,
            price_inr: None,
            image_url: None,
        }
    }
}
