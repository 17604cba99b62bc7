//! Store trait definition for dependency injection

use std::collections::HashMap;

use async_trait::async_trait;

use shared::{DisplayItem, ItemId, NewOutfit, OutfitId, OutfitRecord, WardrobeItem};

use crate::error::StoreResult;
use crate::types::DeletionReport;

/// Wardrobe catalog and outfit history
///
/// Implementations guarantee that no two live outfit records share a
/// fingerprint and that no live record has an empty item set.
#[mockall::automock]
#[async_trait]
pub trait OutfitStore: Send + Sync {
    /// All outfit records in snapshot order (oldest first)
    async fn list_outfits(&self) -> StoreResult<Vec<OutfitRecord>>;

    /// Records with the given ids, in snapshot order; unknown ids are skipped
    async fn list_outfits_by_ids(&self, ids: &[OutfitId]) -> StoreResult<Vec<OutfitRecord>>;

    /// Persist an outfit under a fresh id
    ///
    /// Idempotent by fingerprint: when a live record already holds the same
    /// item set, that record is returned and nothing is written.
    async fn insert_outfit(&self, outfit: NewOutfit) -> StoreResult<OutfitRecord>;

    /// Full wardrobe catalog
    async fn list_items(&self) -> StoreResult<Vec<WardrobeItem>>;

    /// Display projections for the given ids; ids that no longer exist are dropped
    async fn resolve_items(&self, ids: &[ItemId]) -> StoreResult<HashMap<ItemId, DisplayItem>>;

    /// Insert or replace a wardrobe item
    async fn upsert_item(&self, item: WardrobeItem) -> StoreResult<()>;

    /// Delete an item and cascade into outfit records
    async fn delete_item(&self, id: &ItemId) -> StoreResult<DeletionReport>;
}
