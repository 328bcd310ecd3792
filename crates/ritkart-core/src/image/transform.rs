//! Optimized image URL construction.

use std::fmt;
use std::str::FromStr;

use url::Url;

/// Default quality; elided from generated URLs.
pub const DEFAULT_QUALITY: u32 = 80;

/// Target image format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageFormat {
    #[default]
    Webp,
    Jpg,
    Png,
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ImageFormat::Webp => "webp",
            ImageFormat::Jpg => "jpg",
            ImageFormat::Png => "png",
        };
        f.write_str(s)
    }
}

impl FromStr for ImageFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "webp" => Ok(ImageFormat::Webp),
            "jpg" | "jpeg" => Ok(ImageFormat::Jpg),
            "png" => Ok(ImageFormat::Png),
            other => Err(format!("unsupported image format: {other}")),
        }
    }
}

/// Target dimensions, quality and format for one rendition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformOptions {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub quality: u32,
    pub format: ImageFormat,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            quality: DEFAULT_QUALITY,
            format: ImageFormat::Webp,
        }
    }
}

impl TransformOptions {
    pub fn width(width: u32) -> Self {
        Self { width: Some(width), ..Self::default() }
    }
}

/// Build the optimized URL for `src`.
///
/// Local/relative paths, `data:` URIs and development hosts have no
/// transformation endpoint and pass through unchanged, as does anything that
/// fails to parse as a URL. Otherwise `w`/`h`/`q`/`f` query parameters are
/// appended, omitting `q` at the default quality and `f` at the default
/// format.
pub fn transform_url(src: &str, options: &TransformOptions) -> String {
    if src.starts_with('/') || src.starts_with("data:") || src.contains("localhost") {
        return src.to_string();
    }
    let mut url = match Url::parse(src) {
        Ok(url) => url,
        Err(_) => return src.to_string(),
    };
    if matches!(url.host_str(), Some("127.0.0.1")) {
        return src.to_string();
    }

    {
        let mut query = url.query_pairs_mut();
        if let Some(w) = options.width {
            query.append_pair("w", &w.to_string());
        }
        if let Some(h) = options.height {
            query.append_pair("h", &h.to_string());
        }
        if options.quality != DEFAULT_QUALITY {
            query.append_pair("q", &options.quality.to_string());
        }
        if options.format != ImageFormat::Webp {
            query.append_pair("f", &options.format.to_string());
        }
    }
    url.to_string()
}

/// Build a `srcset` attribute value from (width, density) pairs: each entry
/// is the source transformed to `width × density` pixels wide.
pub fn srcset(src: &str, entries: &[(u32, u32)]) -> String {
    entries
        .iter()
        .map(|&(width, density)| {
            let scaled = transform_url(src, &TransformOptions::width(width * density));
            format!("{scaled} {density}x")
        })
        .collect::<Vec<_>>()
        .join(", ")
}
