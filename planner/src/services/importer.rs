//! JSON file import into an outfit store

use std::collections::HashSet;
use std::path::Path;

use serde::Serialize;

use shared::{process_info, process_warn, NewOutfit, ProcessId, WardrobeItem};

use crate::error::PlannerResult;
use crate::traits::OutfitStore;

/// Counts from one import run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    /// New records written
    pub imported: usize,
    /// Entries whose item set was already stored
    pub duplicates: usize,
    /// Entries rejected before reaching the store
    pub skipped: usize,
}

/// Upsert every item of a JSON array file
pub async fn import_wardrobe<S>(store: &S, path: &Path) -> PlannerResult<ImportSummary>
where
    S: OutfitStore + ?Sized,
{
    let items: Vec<WardrobeItem> = serde_json::from_str(&tokio::fs::read_to_string(path).await?)?;

    let mut summary = ImportSummary::default();
    for item in items {
        store.upsert_item(item).await?;
        summary.imported += 1;
    }

    process_info!(ProcessId::current(), "📥 Imported {} wardrobe items from {}", summary.imported, path.display());
    Ok(summary)
}

/// Insert every outfit of a JSON array file, deduplicating by fingerprint
pub async fn import_outfits<S>(store: &S, path: &Path) -> PlannerResult<ImportSummary>
where
    S: OutfitStore + ?Sized,
{
    let outfits: Vec<NewOutfit> = serde_json::from_str(&tokio::fs::read_to_string(path).await?)?;
    let mut known: HashSet<_> = store.list_outfits().await?.into_iter().map(|record| record.id).collect();

    let mut summary = ImportSummary::default();
    for (position, outfit) in outfits.into_iter().enumerate() {
        if outfit.item_ids.is_empty() {
            process_warn!(ProcessId::current(), "⚠️ Skipping outfit #{} with no items", position);
            summary.skipped += 1;
            continue;
        }
        let record = store.insert_outfit(outfit).await?;
        if known.insert(record.id) {
            summary.imported += 1;
        } else {
            summary.duplicates += 1;
        }
    }

    process_info!(
        ProcessId::current(),
        "📥 Imported {} outfits from {} ({} duplicates, {} skipped)",
        summary.imported,
        path.display(),
        summary.duplicates,
        summary.skipped
    );
    Ok(summary)
}
