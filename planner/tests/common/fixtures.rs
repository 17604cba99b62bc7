//! Wardrobe, history and calendar fixtures

use chrono::{Days, NaiveDate};

use shared::{Category, ItemId, OutfitRecord, PlanningDay, WardrobeItem, WeeklyRequest};

pub struct TestFixtures;

impl TestFixtures {
    /// First day of every test horizon (a Monday)
    pub fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    pub fn day(offset: u64) -> NaiveDate {
        Self::monday().checked_add_days(Days::new(offset)).unwrap()
    }

    pub fn ids(values: &[&str]) -> Vec<ItemId> {
        values.iter().map(|id| ItemId::from(*id)).collect()
    }

    /// top1, bottom1, shoe1
    pub fn minimal_wardrobe() -> Vec<WardrobeItem> {
        vec![
            WardrobeItem::new("top1", Category::Top).with_name("White tee"),
            WardrobeItem::new("bottom1", Category::Bottom).with_name("Blue jeans"),
            WardrobeItem::new("shoe1", Category::Shoes).with_name("Sneakers"),
        ]
    }

    pub fn full_wardrobe() -> Vec<WardrobeItem> {
        let mut items = Self::minimal_wardrobe();
        items.extend([
            WardrobeItem::new("top2", Category::Top),
            WardrobeItem::new("bottom2", Category::Bottom),
            WardrobeItem::new("dress1", Category::Dress),
            WardrobeItem::new("coat1", Category::Outerwear),
            WardrobeItem::new("scarf1", Category::Accessory),
        ]);
        items
    }

    pub fn record(id: &str, items: &[&str]) -> OutfitRecord {
        OutfitRecord::new(id, Self::ids(items))
    }

    /// History where o2 shares a top with o1
    pub fn overlapping_history() -> Vec<OutfitRecord> {
        vec![
            Self::record("o1", &["top1", "bottom1", "shoe1"]),
            Self::record("o2", &["top1", "bottom2"]),
            Self::record("o3", &["top2", "bottom2", "shoe1"]),
            Self::record("o4", &["dress1", "shoe1", "coat1"]),
        ]
    }

    /// Explicit horizon of `count` consecutive days from Monday
    pub fn week_request(count: u64) -> WeeklyRequest {
        WeeklyRequest {
            days: Some((0..count).map(|offset| PlanningDay::new(Self::day(offset))).collect()),
            ..WeeklyRequest::default()
        }
    }
}
