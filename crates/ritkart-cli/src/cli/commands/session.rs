//! `ritkart login` / `ritkart logout` – manage the local session marker.

use anyhow::Result;
use ritkart_core::saved::JsonFileStore;
use ritkart_core::session::SessionStore;

pub fn run_login(email: &str) -> Result<()> {
    let store = JsonFileStore::open_default()?;
    let session = SessionStore::new(&store).login(email)?;
    println!("Signed in as {}", session.email);
    Ok(())
}

pub fn run_logout() -> Result<()> {
    let store = JsonFileStore::open_default()?;
    SessionStore::new(&store).logout()?;
    println!("Signed out");
    Ok(())
}
