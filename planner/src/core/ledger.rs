//! Per-horizon bookkeeping for the weekly allocator
//!
//! The ledger is a plain value: each resolved day produces a new ledger from
//! the previous one, so a day's decision depends only on its inputs.

use std::collections::{BTreeSet, HashMap, HashSet};

use shared::{Category, ItemId, OutfitId, OutfitRecord, WardrobeItem};

/// Item id → category lookup over a wardrobe snapshot
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    categories: HashMap<ItemId, Category>,
}

impl Catalog {
    pub fn from_items(items: &[WardrobeItem]) -> Self {
        Self {
            categories: items.iter().map(|item| (item.id.clone(), item.category)).collect(),
        }
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.categories.contains_key(id)
    }

    pub fn category(&self, id: &ItemId) -> Option<Category> {
        self.categories.get(id).copied()
    }

    /// Ids among `ids` whose category is restricted. Unknown ids are never restricted.
    pub fn restricted_items<'a>(&'a self, ids: &'a [ItemId]) -> impl Iterator<Item = &'a ItemId> + 'a {
        ids.iter()
            .filter(move |id| self.category(id).is_some_and(Category::is_restricted))
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Outfits used and restricted items consumed so far in one horizon
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HorizonLedger {
    used_outfits: HashSet<OutfitId>,
    consumed_items: BTreeSet<ItemId>,
}

impl HorizonLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_used(&self, outfit: &OutfitId) -> bool {
        self.used_outfits.contains(outfit)
    }

    pub fn is_consumed(&self, item: &ItemId) -> bool {
        self.consumed_items.contains(item)
    }

    /// True when none of the record's restricted items were worn earlier
    pub fn restricted_free(&self, record: &OutfitRecord, catalog: &Catalog) -> bool {
        catalog
            .restricted_items(&record.item_ids)
            .all(|item| !self.is_consumed(item))
    }

    /// Record a resolved day: the outfit becomes used and its restricted items consumed
    pub fn with_assignment(mut self, outfit: &OutfitId, item_ids: &[ItemId], catalog: &Catalog) -> Self {
        self.used_outfits.insert(outfit.clone());
        self.consumed_items
            .extend(catalog.restricted_items(item_ids).cloned());
        self
    }

    /// Consumed restricted items in id order
    pub fn consumed_items(&self) -> impl Iterator<Item = &ItemId> {
        self.consumed_items.iter()
    }

    pub fn used_count(&self) -> usize {
        self.used_outfits.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_items(&[
            WardrobeItem::new("top1", Category::Top),
            WardrobeItem::new("bottom1", Category::Bottom),
            WardrobeItem::new("dress1", Category::Dress),
            WardrobeItem::new("shoe1", Category::Shoes),
        ])
    }

    fn record(id: &str, items: &[&str]) -> OutfitRecord {
        OutfitRecord::new(id, items.iter().map(|i| ItemId::from(*i)).collect())
    }

    #[test]
    fn test_restricted_items_skip_flexible_and_unknown() {
        let catalog = catalog();
        let ids: Vec<ItemId> = ["top1", "shoe1", "ghost", "dress1"].into_iter().map(ItemId::from).collect();

        let restricted: Vec<&str> = catalog.restricted_items(&ids).map(ItemId::as_str).collect();
        assert_eq!(restricted, vec!["top1", "dress1"]);
    }

    #[test]
    fn test_assignment_consumes_only_restricted_items() {
        let catalog = catalog();
        let o1 = record("o1", &["top1", "bottom1", "shoe1"]);

        let ledger = HorizonLedger::new().with_assignment(&o1.id, &o1.item_ids, &catalog);

        assert!(ledger.is_used(&OutfitId::from("o1")));
        assert!(ledger.is_consumed(&ItemId::from("top1")));
        assert!(!ledger.is_consumed(&ItemId::from("shoe1")));
        assert_eq!(ledger.used_count(), 1);
    }

    #[test]
    fn test_restricted_free_ignores_shared_flexible_items() {
        let catalog = catalog();
        let o1 = record("o1", &["top1", "bottom1", "shoe1"]);
        let o2 = record("o2", &["dress1", "shoe1"]);
        let o3 = record("o3", &["top1", "shoe1"]);

        let ledger = HorizonLedger::new().with_assignment(&o1.id, &o1.item_ids, &catalog);

        assert!(ledger.restricted_free(&o2, &catalog));
        assert!(!ledger.restricted_free(&o3, &catalog));
    }
}
