//! Persisted outfit records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ItemId, OutfitId};

/// A curated combination of wardrobe items
///
/// `item_ids` is never empty for a live record: the store purges records
/// whose last item was deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutfitRecord {
    pub id: OutfitId,
    pub item_ids: Vec<ItemId>,
    #[serde(default)]
    pub tags: Option<serde_json::Value>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl OutfitRecord {
    pub fn new(id: impl Into<OutfitId>, item_ids: Vec<ItemId>) -> Self {
        Self {
            id: id.into(),
            item_ids,
            tags: None,
            notes: None,
            name: None,
            created_at: Utc::now(),
        }
    }

    pub fn contains(&self, item: &ItemId) -> bool {
        self.item_ids.contains(item)
    }

    pub fn summary(&self) -> OutfitSummary {
        OutfitSummary {
            id: self.id.clone(),
            item_ids: self.item_ids.clone(),
        }
    }
}

/// Fields supplied when persisting a new outfit; the store assigns id and timestamp
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewOutfit {
    pub item_ids: Vec<ItemId>,
    #[serde(default)]
    pub tags: Option<serde_json::Value>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl NewOutfit {
    pub fn new(item_ids: Vec<ItemId>) -> Self {
        Self {
            item_ids,
            ..Self::default()
        }
    }
}

/// Id and item set of an existing outfit, as handed to the recommender
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitSummary {
    pub id: OutfitId,
    pub item_ids: Vec<ItemId>,
}
