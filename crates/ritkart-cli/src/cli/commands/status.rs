//! `ritkart status` – session state and saved-collection counts.

use anyhow::Result;
use ritkart_core::saved::{JsonFileStore, PersistedList, MAX_COMPARE_ITEMS};
use ritkart_core::session::SessionStore;

pub fn run_status() -> Result<()> {
    let store = JsonFileStore::open_default()?;

    match SessionStore::new(&store).current() {
        Some(session) => println!("Signed in as {}", session.email),
        None => println!("Signed out"),
    }

    let wishlist = PersistedList::open_wishlist(&store);
    let comparison = PersistedList::open_comparison(&store);
    println!("Wishlist: {} item(s)", wishlist.len());
    println!("Comparison: {}/{} item(s)", comparison.len(), MAX_COMPARE_ITEMS);

    Ok(())
}
