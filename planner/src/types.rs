//! Planner-specific data types

use serde::{Deserialize, Serialize};

use shared::{ItemId, OutfitId};

use crate::core::UnknownItemPolicy;

/// Outcome of a wardrobe item deletion cascade
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletionReport {
    pub item_id: ItemId,
    /// Whether the item existed in the catalog
    pub item_removed: bool,
    /// Records that lost the item but survive
    pub pruned_outfits: Vec<OutfitId>,
    /// Records removed because they became empty or duplicated another record
    pub purged_outfits: Vec<OutfitId>,
}

impl DeletionReport {
    pub fn new(item_id: ItemId) -> Self {
        Self {
            item_id,
            ..Self::default()
        }
    }
}

/// Tunables for daily and weekly planning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannerSettings {
    /// Days planned when a weekly request carries no explicit day list
    pub horizon_days: u32,
    /// Upper bound on daily alternatives
    pub max_alternatives: usize,
    /// Treatment of recommender picks that are not in the wardrobe
    pub unknown_items: UnknownItemPolicy,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            horizon_days: 7,
            max_alternatives: 2,
            unknown_items: UnknownItemPolicy::Strip,
        }
    }
}
