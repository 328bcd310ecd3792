//! CLI for the RitKART storefront support tools.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use ritkart_core::config;
use std::path::PathBuf;

use commands::{
    run_compare, run_completions, run_image_url, run_login, run_logout, run_manpage, run_media,
    run_smoke, run_status, run_wishlist,
};

/// Top-level CLI for the RitKART storefront support tools.
#[derive(Debug, Parser)]
#[command(name = "ritkart")]
#[command(about = "RitKART: storefront support tools", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Sign in (stores the local session marker that gates the wishlist).
    Login {
        /// Account email.
        email: String,
    },

    /// Sign out and drop the session marker.
    Logout,

    /// Manage the wishlist. Mutations require sign-in.
    Wishlist {
        #[command(subcommand)]
        action: CollectionAction,
    },

    /// Manage the comparison list (up to 4 products).
    Compare {
        #[command(subcommand)]
        action: CollectionAction,
    },

    /// Print the optimized URL for an image source.
    ImageUrl {
        /// Source image URL or path.
        src: String,
        /// Target width in pixels.
        #[arg(long)]
        width: Option<u32>,
        /// Target height in pixels.
        #[arg(long)]
        height: Option<u32>,
        /// Quality 1-100 (default 80, elided from the URL).
        #[arg(long)]
        quality: Option<u32>,
        /// Target format: webp (default), jpg, png.
        #[arg(long)]
        format: Option<String>,
        /// Named size preset (thumbnail, small, medium, large, hero,
        /// product-card, product-detail, product-gallery).
        #[arg(long)]
        preset: Option<String>,
    },

    /// Media host maintenance: upload, list, delete, dedupe, migrate.
    Media {
        #[command(subcommand)]
        action: MediaAction,
    },

    /// Probe the deployed endpoints and report pass/fail.
    Smoke,

    /// Show session state and saved-collection counts.
    Status,

    /// Generate shell completions.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Render the man page to stdout.
    Manpage,
}

#[derive(Debug, Subcommand)]
pub enum CollectionAction {
    /// Add a product by id.
    Add {
        /// Product identifier.
        id: String,
        /// Display title (defaults to the id).
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        brand: Option<String>,
        /// Price in whole rupees.
        #[arg(long)]
        price: Option<u64>,
        /// Product image URL.
        #[arg(long)]
        image: Option<String>,
    },

    /// Remove a product by id.
    Remove {
        /// Product identifier.
        id: String,
    },

    /// List saved products.
    List,

    /// Remove all products.
    Clear,
}

impl CollectionAction {
    /// True for actions that change the collection (and thus hit the
    /// wishlist's sign-in gate).
    pub fn is_mutation(&self) -> bool {
        !matches!(self, CollectionAction::List)
    }
}

#[derive(Debug, Subcommand)]
pub enum MediaAction {
    /// Upload a source image URL under a public id.
    Upload {
        /// Fetchable source URL.
        source: String,
        /// Public id to store the asset under.
        #[arg(long)]
        id: String,
    },

    /// List hosted assets.
    List {
        /// Public-id prefix (defaults to the configured folder).
        #[arg(long)]
        prefix: Option<String>,
    },

    /// Delete an asset by public id.
    Delete {
        /// Public id of the asset.
        public_id: String,
    },

    /// Report duplicate assets (same bytes, dimensions and format).
    Dedupe {
        /// Delete the duplicates instead of only reporting them.
        #[arg(long)]
        apply: bool,
    },

    /// Upload a manifest of name -> source URL and write the mapping file.
    Migrate {
        /// Path to the JSON manifest.
        manifest: PathBuf,
        /// Where to write the name -> durable URL mapping.
        #[arg(long, default_value = "media-mapping.json")]
        mapping: PathBuf,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Login { email } => run_login(&email)?,
            CliCommand::Logout => run_logout()?,
            CliCommand::Wishlist { action } => run_wishlist(action)?,
            CliCommand::Compare { action } => run_compare(action)?,
            CliCommand::ImageUrl { src, width, height, quality, format, preset } => {
                run_image_url(&src, width, height, quality, format, preset)?;
            }
            CliCommand::Media { action } => run_media(&cfg, action)?,
            CliCommand::Smoke => run_smoke(&cfg)?,
            CliCommand::Status => run_status()?,
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Manpage => run_manpage()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
