//! `ritkart wishlist ...` / `ritkart compare ...` – saved collections.

use anyhow::Result;
use ritkart_core::product::Product;
use ritkart_core::saved::{AddOutcome, JsonFileStore, PersistedList, SnapshotStore};
use ritkart_core::session::SessionStore;

use crate::cli::CollectionAction;

pub fn run_wishlist(action: CollectionAction) -> Result<()> {
    let store = JsonFileStore::open_default()?;
    // The storefront gates wishlist changes behind sign-in.
    if action.is_mutation() && SessionStore::new(&store).current().is_none() {
        println!("Please sign in to manage your wishlist (ritkart login <email>)");
        return Ok(());
    }
    let mut list = PersistedList::open_wishlist(&store);
    apply(&mut list, action, "wishlist")
}

pub fn run_compare(action: CollectionAction) -> Result<()> {
    let store = JsonFileStore::open_default()?;
    let mut list = PersistedList::open_comparison(&store);
    apply(&mut list, action, "comparison")
}

fn apply<S: SnapshotStore>(
    list: &mut PersistedList<S>,
    action: CollectionAction,
    label: &str,
) -> Result<()> {
    match action {
        CollectionAction::Add { id, title, brand, price, image } => {
            let product = Product {
                title: title.unwrap_or_else(|| id.clone()),
                id,
                brand,
                price_inr: price,
                image_url: image,
            };
            let title = product.title.clone();
            match list.add(product) {
                AddOutcome::Added => println!("{title} added to {label}"),
                AddOutcome::AlreadyPresent => println!("Product is already in {label}"),
                AddOutcome::CapacityFull => match list.capacity() {
                    Some(cap) => {
                        println!("You can only compare up to {cap} products at once")
                    }
                    None => println!("The {label} is full"),
                },
            }
        }
        CollectionAction::Remove { id } => match list.remove(&id) {
            Some(product) => println!("{} removed from {label}", product.title),
            None => println!("Product is not in the {label}"),
        },
        CollectionAction::List => {
            if list.is_empty() {
                println!("No products in the {label}.");
            } else {
                println!("{:<16} {:<28} {:<10}", "ID", "TITLE", "PRICE");
                for product in list.items() {
                    let price = product
                        .price_inr
                        .map(|p| format!("₹{p}"))
                        .unwrap_or_else(|| "-".to_string());
                    println!("{:<16} {:<28} {:<10}", product.id, product.title, price);
                }
            }
        }
        CollectionAction::Clear => {
            list.clear();
            println!("{} cleared", capitalize(label));
        }
    }
    Ok(())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
