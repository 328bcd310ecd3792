//! Persisted collection: a SavedList bound to a snapshot store and key.

use crate::product::Product;

use super::list::{AddOutcome, SavedList};
use super::store::SnapshotStore;

/// Maximum number of products in the comparison list.
pub const MAX_COMPARE_ITEMS: usize = 4;

/// Snapshot key for the comparison list.
pub const COMPARISON_KEY: &str = "ritkart_comparison";

/// Snapshot key for the wishlist.
pub const WISHLIST_KEY: &str = "ritkart_wishlist";

/// A saved list bound to its snapshot store. Every mutation that changes
/// state writes a fresh snapshot. Writes are best-effort: a failed write is
/// logged at warn and the in-memory state stands (at-most-once persistence;
/// a crash between mutation and write loses only the latest change).
#[derive(Debug)]
pub struct PersistedList<S: SnapshotStore> {
    key: &'static str,
    list: SavedList,
    store: S,
}

impl<S: SnapshotStore> PersistedList<S> {
    /// Open the comparison list (capacity 4) from its snapshot.
    pub fn open_comparison(store: S) -> Self {
        Self::open(store, COMPARISON_KEY, Some(MAX_COMPARE_ITEMS))
    }

    /// Open the wishlist (unbounded) from its snapshot. The authentication
    /// gate is the caller's job.
    pub fn open_wishlist(store: S) -> Self {
        Self::open(store, WISHLIST_KEY, None)
    }

    fn open(store: S, key: &'static str, capacity: Option<usize>) -> Self {
        let list = match store.load(key) {
            Ok(Some(bytes)) => match serde_json::from_slice::<Vec<Product>>(&bytes) {
                Ok(items) => SavedList::from_items(items, capacity),
                Err(e) => {
                    // Corrupt snapshot: discard it and start empty.
                    tracing::warn!("discarding corrupt snapshot {key}: {e}");
                    if let Err(e) = store.remove(key) {
                        tracing::warn!("failed to discard snapshot {key}: {e}");
                    }
                    SavedList::new(capacity)
                }
            },
            Ok(None) => SavedList::new(capacity),
            Err(e) => {
                tracing::warn!("failed to load snapshot {key}: {e}");
                SavedList::new(capacity)
            }
        };
        Self { key, list, store }
    }

    pub fn add(&mut self, product: Product) -> AddOutcome {
        let outcome = self.list.add(product);
        if outcome == AddOutcome::Added {
            self.persist();
        }
        outcome
    }

    pub fn remove(&mut self, id: &str) -> Option<Product> {
        let removed = self.list.remove(id);
        if removed.is_some() {
            self.persist();
        }
        removed
    }

    pub fn clear(&mut self) {
        if !self.list.is_empty() {
            self.list.clear();
            self.persist();
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.list.contains(id)
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn can_add_more(&self) -> bool {
        self.list.can_add_more()
    }

    pub fn capacity(&self) -> Option<usize> {
        self.list.capacity()
    }

    pub fn items(&self) -> &[Product] {
        self.list.items()
    }

    fn persist(&self) {
        let bytes = match serde_json::to_vec(self.list.items()) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!("failed to serialize snapshot {}: {e}", self.key);
                return;
            }
        };
        if let Err(e) = self.store.save(self.key, &bytes) {
            tracing::warn!("failed to persist snapshot {}: {e}", self.key);
        }
    }
}
