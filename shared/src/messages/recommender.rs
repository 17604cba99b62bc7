//! Planner ↔ recommender exchange
//!
//! The recommender answers with item picks per day. Its output is untrusted:
//! the planner re-validates every item id before persisting anything.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{empty_if_null, ItemId, OutfitId, OutfitSummary, PlanningDay, WardrobeItem};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    #[serde(default)]
    pub persona: Option<serde_json::Value>,
    pub days: Vec<PlanningDay>,
    pub wardrobe: Vec<WardrobeItem>,
    pub existing_outfits: Vec<OutfitSummary>,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub rules: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPick {
    #[serde(alias = "item_id")]
    pub item_id: ItemId,
    #[serde(default)]
    pub rationale: String,
}

impl ItemPick {
    pub fn new(item_id: impl Into<ItemId>, rationale: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            rationale: rationale.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRecommendation {
    pub date: NaiveDate,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub items: Vec<ItemPick>,
    /// Existing outfit the recommender believes matches the picks exactly
    #[serde(default, alias = "existing_outfit_id")]
    pub existing_outfit_id: Option<OutfitId>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl DayRecommendation {
    pub fn new(date: NaiveDate, items: Vec<ItemPick>) -> Self {
        Self {
            date,
            items,
            existing_outfit_id: None,
            notes: None,
        }
    }

    pub fn item_ids(&self) -> Vec<ItemId> {
        self.items.iter().map(|pick| pick.item_id.clone()).collect()
    }
}
