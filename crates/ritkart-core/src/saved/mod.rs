//! Saved product collections (wishlist, comparison).
//!
//! An ordered, duplicate-free list of product references with an optional
//! capacity, persisted as a JSON snapshot after every mutation. The store is
//! an injected interface so the CLI, tests, and any future surface share the
//! same semantics; production uses one JSON file per key under the XDG state
//! dir. Persistence is best-effort: a failed snapshot write is logged and
//! the in-memory state stands.

mod list;
mod persisted;
mod store;

pub use list::{AddOutcome, SavedList};
pub use persisted::{PersistedList, COMPARISON_KEY, MAX_COMPARE_ITEMS, WISHLIST_KEY};
pub use store::{JsonFileStore, SnapshotStore, StoreError};
