//! In-memory outfit store

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use shared::{process_debug, DisplayItem, ItemId, NewOutfit, OutfitId, OutfitRecord, ProcessId, WardrobeItem};

use crate::core::{canonicalize, Fingerprint};
use crate::error::{StoreError, StoreResult};
use crate::traits::OutfitStore;
use crate::types::DeletionReport;

#[derive(Debug, Default)]
struct StoreState {
    items: Vec<WardrobeItem>,
    outfits: Vec<OutfitRecord>,
    fingerprints: HashMap<Fingerprint, OutfitId>,
}

impl StoreState {
    fn reindex(&mut self) {
        self.fingerprints = self
            .outfits
            .iter()
            .map(|record| (canonicalize(&record.item_ids), record.id.clone()))
            .collect();
    }
}

/// Outfit store held entirely in process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<StoreState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with a catalog and outfit history
    ///
    /// Records repeating an earlier record's item set are dropped.
    pub fn with_data(items: Vec<WardrobeItem>, outfits: Vec<OutfitRecord>) -> Self {
        let mut state = StoreState {
            items,
            ..StoreState::default()
        };
        for record in outfits {
            if record.item_ids.is_empty() {
                continue;
            }
            let fingerprint = canonicalize(&record.item_ids);
            if !state.fingerprints.contains_key(&fingerprint) {
                state.fingerprints.insert(fingerprint, record.id.clone());
                state.outfits.push(record);
            }
        }
        Self {
            state: RwLock::new(state),
        }
    }
}

#[async_trait]
impl OutfitStore for MemoryStore {
    async fn list_outfits(&self) -> StoreResult<Vec<OutfitRecord>> {
        Ok(self.state.read().await.outfits.clone())
    }

    async fn list_outfits_by_ids(&self, ids: &[OutfitId]) -> StoreResult<Vec<OutfitRecord>> {
        let state = self.state.read().await;
        Ok(state
            .outfits
            .iter()
            .filter(|record| ids.contains(&record.id))
            .cloned()
            .collect())
    }

    async fn insert_outfit(&self, outfit: NewOutfit) -> StoreResult<OutfitRecord> {
        if outfit.item_ids.is_empty() {
            return Err(StoreError::InvalidRecord {
                message: "an outfit needs at least one item".to_string(),
            });
        }

        let fingerprint = canonicalize(&outfit.item_ids);
        let mut state = self.state.write().await;

        if let Some(existing) = state.fingerprints.get(&fingerprint) {
            let existing = existing.clone();
            if let Some(record) = state.outfits.iter().find(|record| record.id == existing) {
                process_debug!(ProcessId::current(), "♻️ Outfit {} already holds {}", record.id, fingerprint);
                return Ok(record.clone());
            }
        }

        let record = OutfitRecord {
            id: OutfitId::generate(),
            item_ids: outfit.item_ids,
            tags: outfit.tags,
            notes: outfit.notes,
            name: outfit.name,
            created_at: Utc::now(),
        };
        state.fingerprints.insert(fingerprint, record.id.clone());
        state.outfits.push(record.clone());
        Ok(record)
    }

    async fn list_items(&self) -> StoreResult<Vec<WardrobeItem>> {
        Ok(self.state.read().await.items.clone())
    }

    async fn resolve_items(&self, ids: &[ItemId]) -> StoreResult<HashMap<ItemId, DisplayItem>> {
        let state = self.state.read().await;
        Ok(state
            .items
            .iter()
            .filter(|item| ids.contains(&item.id))
            .map(|item| (item.id.clone(), DisplayItem::from(item)))
            .collect())
    }

    async fn upsert_item(&self, item: WardrobeItem) -> StoreResult<()> {
        let mut state = self.state.write().await;
        match state.items.iter().position(|existing| existing.id == item.id) {
            Some(index) => state.items[index] = item,
            None => state.items.push(item),
        }
        Ok(())
    }

    async fn delete_item(&self, id: &ItemId) -> StoreResult<DeletionReport> {
        let mut state = self.state.write().await;
        let mut report = DeletionReport::new(id.clone());

        let before = state.items.len();
        state.items.retain(|item| &item.id != id);
        report.item_removed = state.items.len() != before;

        let (pruned, untouched): (Vec<(usize, OutfitRecord)>, Vec<(usize, OutfitRecord)>) =
            std::mem::take(&mut state.outfits)
                .into_iter()
                .enumerate()
                .partition(|(_, record)| record.contains(id));

        // Untouched records already hold unique fingerprints and keep them
        let mut holders: HashMap<Fingerprint, OutfitId> = untouched
            .iter()
            .map(|(_, record)| (canonicalize(&record.item_ids), record.id.clone()))
            .collect();

        let mut kept = untouched;
        for (position, mut record) in pruned {
            record.item_ids.retain(|item| item != id);
            let fingerprint = canonicalize(&record.item_ids);
            if record.item_ids.is_empty() || holders.contains_key(&fingerprint) {
                report.purged_outfits.push(record.id);
            } else {
                holders.insert(fingerprint, record.id.clone());
                report.pruned_outfits.push(record.id.clone());
                kept.push((position, record));
            }
        }

        kept.sort_by_key(|(position, _)| *position);
        state.outfits = kept.into_iter().map(|(_, record)| record).collect();
        state.reindex();

        if !report.purged_outfits.is_empty() {
            process_debug!(
                ProcessId::current(),
                "🧹 Deleting {} purged {} outfit(s)",
                id,
                report.purged_outfits.len()
            );
        }
        Ok(report)
    }
}
