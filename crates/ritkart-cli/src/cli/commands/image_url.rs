//! `ritkart image-url` – print the optimized URL for a source image.

use anyhow::{anyhow, Result};
use ritkart_core::image::{transform_url, SizePreset, TransformOptions};

pub fn run_image_url(
    src: &str,
    width: Option<u32>,
    height: Option<u32>,
    quality: Option<u32>,
    format: Option<String>,
    preset: Option<String>,
) -> Result<()> {
    let mut options = TransformOptions::default();

    // Preset fills the dimensions; explicit flags override it.
    if let Some(preset) = preset {
        let preset: SizePreset = preset.parse().map_err(|e: String| anyhow!(e))?;
        let size = preset.size();
        options.width = Some(size.width);
        options.height = Some(size.height);
    }
    if let Some(width) = width {
        options.width = Some(width);
    }
    if let Some(height) = height {
        options.height = Some(height);
    }
    if let Some(quality) = quality {
        options.quality = quality;
    }
    if let Some(format) = format {
        options.format = format.parse().map_err(|e: String| anyhow!(e))?;
    }

    println!("{}", transform_url(src, &options));
    Ok(())
}
