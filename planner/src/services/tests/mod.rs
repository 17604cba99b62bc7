//! Tests for planner services
//!
//! Both stores are driven through the `OutfitStore` trait with the same
//! catalog so their cascade and dedup behaviour can be compared directly.


use shared::{Category, ItemId, NewOutfit, WardrobeItem};

pub(crate) fn wardrobe() -> Vec<WardrobeItem> {
    vec![
        WardrobeItem::new("top1", Category::Top).with_name("White tee"),
        WardrobeItem::new("bottom1", Category::Bottom).with_name("Blue jeans"),
        WardrobeItem::new("shoe1", Category::Shoes).with_name("Sneakers"),
        WardrobeItem::new("dress1", Category::Dress),
    ]
}

pub(crate) fn outfit(ids: &[&str]) -> NewOutfit {
    NewOutfit::new(ids.iter().map(|id| ItemId::from(*id)).collect())
}

pub(crate) fn ids(values: &[&str]) -> Vec<ItemId> {
    values.iter().map(|id| ItemId::from(*id)).collect()
}
