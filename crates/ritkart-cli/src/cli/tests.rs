//! CLI parse tests for every subcommand.

use clap::Parser;

use super::{Cli, CliCommand, CollectionAction, MediaAction};

fn parse(args: &[&str]) -> CliCommand {
    Cli::try_parse_from(args).expect("args should parse").command
}

#[test]
fn cli_parse_login() {
    match parse(&["ritkart", "login", "rita@ritkart.in"]) {
        CliCommand::Login { email } => assert_eq!(email, "rita@ritkart.in"),
        _ => panic!("expected Login"),
    }
}

#[test]
fn cli_parse_logout() {
    match parse(&["ritkart", "logout"]) {
        CliCommand::Logout => {}
        _ => panic!("expected Logout"),
    }
}

#[test]
fn cli_parse_wishlist_add_with_fields() {
    match parse(&[
        "ritkart", "wishlist", "add", "prod-1", "--title", "Galaxy S24", "--brand", "Samsung",
        "--price", "79999",
    ]) {
        CliCommand::Wishlist {
            action: CollectionAction::Add { id, title, brand, price, image },
        } => {
            assert_eq!(id, "prod-1");
            assert_eq!(title.as_deref(), Some("Galaxy S24"));
            assert_eq!(brand.as_deref(), Some("Samsung"));
            assert_eq!(price, Some(79_999));
            assert!(image.is_none());
        }
        _ => panic!("expected Wishlist Add"),
    }
}

#[test]
fn cli_parse_wishlist_clear() {
    match parse(&["ritkart", "wishlist", "clear"]) {
        CliCommand::Wishlist { action: CollectionAction::Clear } => {}
        _ => panic!("expected Wishlist Clear"),
    }
}

#[test]
fn cli_parse_compare_add_and_remove() {
    match parse(&["ritkart", "compare", "add", "prod-2"]) {
        CliCommand::Compare { action: CollectionAction::Add { id, title, .. } } => {
            assert_eq!(id, "prod-2");
            assert!(title.is_none());
        }
        _ => panic!("expected Compare Add"),
    }
    match parse(&["ritkart", "compare", "remove", "prod-2"]) {
        CliCommand::Compare { action: CollectionAction::Remove { id } } => {
            assert_eq!(id, "prod-2");
        }
        _ => panic!("expected Compare Remove"),
    }
}

#[test]
fn cli_parse_compare_list() {
    match parse(&["ritkart", "compare", "list"]) {
        CliCommand::Compare { action: CollectionAction::List } => {}
        _ => panic!("expected Compare List"),
    }
}

#[test]
fn collection_mutation_flags() {
    assert!(CollectionAction::Add {
        id: "x".to_string(),
        title: None,
        brand: None,
        price: None,
        image: None,
    }
    .is_mutation());
    assert!(CollectionAction::Remove { id: "x".to_string() }.is_mutation());
    assert!(CollectionAction::Clear.is_mutation());
    assert!(!CollectionAction::List.is_mutation());
}

#[test]
fn cli_parse_image_url() {
    match parse(&[
        "ritkart", "image-url", "https://host/img.jpg", "--width", "300", "--quality", "60",
        "--format", "jpg",
    ]) {
        CliCommand::ImageUrl { src, width, height, quality, format, preset } => {
            assert_eq!(src, "https://host/img.jpg");
            assert_eq!(width, Some(300));
            assert!(height.is_none());
            assert_eq!(quality, Some(60));
            assert_eq!(format.as_deref(), Some("jpg"));
            assert!(preset.is_none());
        }
        _ => panic!("expected ImageUrl"),
    }
}

#[test]
fn cli_parse_image_url_preset() {
    match parse(&["ritkart", "image-url", "/img.png", "--preset", "product-card"]) {
        CliCommand::ImageUrl { preset, .. } => {
            assert_eq!(preset.as_deref(), Some("product-card"));
        }
        _ => panic!("expected ImageUrl"),
    }
}

#[test]
fn cli_parse_media_upload() {
    match parse(&[
        "ritkart", "media", "upload", "https://img.example.com/a.jpg", "--id", "ritkart/a",
    ]) {
        CliCommand::Media { action: MediaAction::Upload { source, id } } => {
            assert_eq!(source, "https://img.example.com/a.jpg");
            assert_eq!(id, "ritkart/a");
        }
        _ => panic!("expected Media Upload"),
    }
}

#[test]
fn cli_parse_media_dedupe_apply() {
    match parse(&["ritkart", "media", "dedupe"]) {
        CliCommand::Media { action: MediaAction::Dedupe { apply } } => assert!(!apply),
        _ => panic!("expected Media Dedupe"),
    }
    match parse(&["ritkart", "media", "dedupe", "--apply"]) {
        CliCommand::Media { action: MediaAction::Dedupe { apply } } => assert!(apply),
        _ => panic!("expected Media Dedupe with --apply"),
    }
}

#[test]
fn cli_parse_media_migrate_default_mapping() {
    match parse(&["ritkart", "media", "migrate", "manifest.json"]) {
        CliCommand::Media { action: MediaAction::Migrate { manifest, mapping } } => {
            assert_eq!(manifest, std::path::PathBuf::from("manifest.json"));
            assert_eq!(mapping, std::path::PathBuf::from("media-mapping.json"));
        }
        _ => panic!("expected Media Migrate"),
    }
}

#[test]
fn cli_parse_smoke_and_status() {
    match parse(&["ritkart", "smoke"]) {
        CliCommand::Smoke => {}
        _ => panic!("expected Smoke"),
    }
    match parse(&["ritkart", "status"]) {
        CliCommand::Status => {}
        _ => panic!("expected Status"),
    }
}

#[test]
fn cli_rejects_unknown_subcommand() {
    assert!(Cli::try_parse_from(["ritkart", "orders"]).is_err());
}
