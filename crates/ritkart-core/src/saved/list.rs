//! In-memory ordered set of products with an optional capacity.

use crate::product::Product;

/// Outcome of an add call. Rejections are outcomes, not errors: the caller
/// notifies the user and moves on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// Product appended at the end.
    Added,
    /// A product with the same id is already present; the list is unchanged.
    AlreadyPresent,
    /// The list is at capacity; the list is unchanged.
    CapacityFull,
}

/// Ordered sequence of products, unique by id, optionally capacity-bounded.
/// Insertion order is preserved for display.
#[derive(Debug, Clone, Default)]
pub struct SavedList {
    items: Vec<Product>,
    capacity: Option<usize>,
}

impl SavedList {
    pub fn new(capacity: Option<usize>) -> Self {
        Self { items: Vec::new(), capacity }
    }

    /// Rebuild a list from a persisted snapshot, re-enforcing the invariants:
    /// duplicates beyond the first occurrence are dropped and the list is
    /// truncated to capacity.
    pub fn from_items(items: Vec<Product>, capacity: Option<usize>) -> Self {
        let mut list = Self::new(capacity);
        for product in items {
            if list.add(product) == AddOutcome::CapacityFull {
                break;
            }
        }
        list
    }

    pub fn add(&mut self, product: Product) -> AddOutcome {
        if self.contains(&product.id) {
            return AddOutcome::AlreadyPresent;
        }
        if self.capacity.is_some_and(|cap| self.items.len() >= cap) {
            return AddOutcome::CapacityFull;
        }
        self.items.push(product);
        AddOutcome::Added
    }

    /// Removes the product with the given id, if present.
    pub fn remove(&mut self, id: &str) -> Option<Product> {
        let index = self.items.iter().position(|p| p.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// True when another distinct product would be accepted.
    pub fn can_add_more(&self) -> bool {
        self.capacity.map_or(true, |cap| self.items.len() < cap)
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str) -> Product {
        Product::new(id, format!("Product {id}"))
    }

    #[test]
    fn preserves_insertion_order() {
        let mut list = SavedList::new(None);
        for id in ["a", "b", "c"] {
            assert_eq!(list.add(product(id)), AddOutcome::Added);
        }
        let ids: Vec<&str> = list.items().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn duplicate_id_yields_single_entry() {
        let mut list = SavedList::new(Some(4));
        assert_eq!(list.add(product("a")), AddOutcome::Added);
        assert_eq!(list.add(product("a")), AddOutcome::AlreadyPresent);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn fifth_item_rejected_at_capacity_four() {
        let mut list = SavedList::new(Some(4));
        for id in ["a", "b", "c", "d"] {
            assert_eq!(list.add(product(id)), AddOutcome::Added);
        }
        assert!(!list.can_add_more());
        assert_eq!(list.add(product("e")), AddOutcome::CapacityFull);
        assert_eq!(list.len(), 4);
        let ids: Vec<&str> = list.items().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c", "d"]);
    }

    #[test]
    fn remove_missing_id_is_a_noop() {
        let mut list = SavedList::new(None);
        list.add(product("a"));
        assert!(list.remove("zzz").is_none());
        assert_eq!(list.len(), 1);
        let removed = list.remove("a").unwrap();
        assert_eq!(removed.id, "a");
        assert!(list.is_empty());
    }

    #[test]
    fn from_items_reapplies_invariants() {
        let items = vec![product("a"), product("a"), product("b"), product("c")];
        let list = SavedList::from_items(items, Some(2));
        let ids: Vec<&str> = list.items().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }
}
