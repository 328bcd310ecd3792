//! Size presets for common storefront surfaces.

use std::str::FromStr;

/// Target pixel dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

/// Named rendition sizes used across the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizePreset {
    Thumbnail,
    Small,
    Medium,
    Large,
    Hero,
    ProductCard,
    ProductDetail,
    ProductGallery,
}

impl SizePreset {
    pub fn size(self) -> ImageSize {
        let (width, height) = match self {
            SizePreset::Thumbnail => (150, 150),
            SizePreset::Small => (300, 300),
            SizePreset::Medium => (600, 600),
            SizePreset::Large => (1200, 800),
            SizePreset::Hero => (1920, 1080),
            SizePreset::ProductCard => (280, 280),
            SizePreset::ProductDetail => (500, 500),
            SizePreset::ProductGallery => (800, 800),
        };
        ImageSize { width, height }
    }
}

impl FromStr for SizePreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "thumbnail" => Ok(SizePreset::Thumbnail),
            "small" => Ok(SizePreset::Small),
            "medium" => Ok(SizePreset::Medium),
            "large" => Ok(SizePreset::Large),
            "hero" => Ok(SizePreset::Hero),
            "product-card" => Ok(SizePreset::ProductCard),
            "product-detail" => Ok(SizePreset::ProductDetail),
            "product-gallery" => Ok(SizePreset::ProductGallery),
            other => Err(format!("unknown size preset: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_dimensions() {
        assert_eq!(SizePreset::Thumbnail.size(), ImageSize { width: 150, height: 150 });
        assert_eq!(SizePreset::Large.size(), ImageSize { width: 1200, height: 800 });
        assert_eq!(SizePreset::Hero.size(), ImageSize { width: 1920, height: 1080 });
    }

    #[test]
    fn preset_parses_from_kebab_case() {
        assert_eq!("product-card".parse::<SizePreset>().unwrap(), SizePreset::ProductCard);
        assert!("poster".parse::<SizePreset>().is_err());
    }
}
