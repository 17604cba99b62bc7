//! SQLite-backed outfit store
//!
//! Item and outfit lists are stored as JSON text columns. Outfit fingerprints
//! are kept in a UNIQUE column so concurrent inserts of the same item set
//! collapse onto one record.

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

use shared::{
    process_debug, process_info, Category, DisplayItem, ItemId, ItemTags, NewOutfit, OutfitId, OutfitRecord,
    ProcessId, WardrobeItem,
};

use crate::core::canonicalize;
use crate::error::{StoreError, StoreResult};
use crate::traits::OutfitStore;
use crate::types::DeletionReport;

/// Column list for the `outfits` table
const OUTFIT_COLUMNS: &str = "id, item_ids, tags, notes, name, created_at";

/// Column list for the `wardrobe_items` table
const ITEM_COLUMNS: &str = "id, category, name, image_url, colors, seasons, styles";

#[derive(Debug, sqlx::FromRow)]
struct OutfitRow {
    id: String,
    item_ids: String,
    tags: Option<String>,
    notes: Option<String>,
    name: Option<String>,
    created_at: String,
}

impl OutfitRow {
    fn into_record(self) -> StoreResult<OutfitRecord> {
        let item_ids: Vec<ItemId> = serde_json::from_str(&self.item_ids).map_err(|e| StoreError::Corrupt {
            message: format!("outfit {} has unreadable item_ids: {e}", self.id),
        })?;
        let tags: Option<serde_json::Value> = self
            .tags
            .as_deref()
            .map(serde_json::from_str)
            .transpose()
            .map_err(|e| StoreError::Corrupt {
                message: format!("outfit {} has unreadable tags: {e}", self.id),
            })?;
        let created_at = DateTime::parse_from_rfc3339(&self.created_at)
            .map_err(|e| StoreError::Corrupt {
                message: format!("outfit {} has unreadable created_at: {e}", self.id),
            })?
            .with_timezone(&Utc);

        Ok(OutfitRecord {
            id: OutfitId::from(self.id),
            item_ids,
            tags,
            notes: self.notes,
            name: self.name,
            created_at,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ItemRow {
    id: String,
    category: String,
    name: Option<String>,
    image_url: Option<String>,
    colors: String,
    seasons: String,
    styles: String,
}

impl ItemRow {
    fn into_item(self) -> StoreResult<WardrobeItem> {
        let category = Category::from_str(&self.category).map_err(|e| StoreError::Corrupt {
            message: format!("item {}: {e}", self.id),
        })?;
        let list = |raw: &str| -> StoreResult<Vec<String>> {
            serde_json::from_str::<Option<Vec<String>>>(raw)
                .map(Option::unwrap_or_default)
                .map_err(|e| StoreError::Corrupt {
                    message: format!("item {} has an unreadable tag list: {e}", self.id),
                })
        };
        let tags = ItemTags {
            colors: list(&self.colors)?,
            seasons: list(&self.seasons)?,
            styles: list(&self.styles)?,
        };

        Ok(WardrobeItem {
            id: ItemId::from(self.id),
            category,
            name: self.name,
            image_url: self.image_url,
            tags,
        })
    }
}

/// Outfit store persisted in a SQLite database
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (creating if needed) a database file
    pub async fn open(db_path: &Path) -> StoreResult<Self> {
        let newly_created = !db_path.exists();
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .foreign_keys(true)
            .busy_timeout(Duration::from_millis(5000));
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        if newly_created {
            process_info!(ProcessId::current(), "🗄️ Initialized new database: {}", db_path.display());
        } else {
            process_info!(ProcessId::current(), "🗄️ Opened existing database: {}", db_path.display());
        }

        Self::init(pool).await
    }

    /// Private in-memory database, gone when the store is dropped
    pub async fn in_memory() -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        // A single connection that never recycles keeps the database alive
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        Self::init(pool).await
    }

    async fn init(pool: SqlitePool) -> StoreResult<Self> {
        create_wardrobe_items_table(&pool).await?;
        create_outfits_table(&pool).await?;
        Ok(Self { pool })
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }

    async fn fetch_outfit_by_fingerprint(&self, fingerprint: &str) -> StoreResult<OutfitRecord> {
        let query = format!("SELECT {OUTFIT_COLUMNS} FROM outfits WHERE fingerprint = ?");
        sqlx::query_as::<_, OutfitRow>(&query)
            .bind(fingerprint)
            .fetch_one(&self.pool)
            .await?
            .into_record()
    }
}

async fn create_wardrobe_items_table(pool: &SqlitePool) -> StoreResult<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS wardrobe_items (
            id TEXT PRIMARY KEY,
            category TEXT NOT NULL,
            name TEXT,
            image_url TEXT,
            colors TEXT NOT NULL DEFAULT '[]',
            seasons TEXT NOT NULL DEFAULT '[]',
            styles TEXT NOT NULL DEFAULT '[]'
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

async fn create_outfits_table(pool: &SqlitePool) -> StoreResult<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS outfits (
            seq INTEGER PRIMARY KEY AUTOINCREMENT,
            id TEXT NOT NULL UNIQUE,
            item_ids TEXT NOT NULL,
            fingerprint TEXT NOT NULL UNIQUE,
            tags TEXT,
            notes TEXT,
            name TEXT,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

fn placeholders(count: usize) -> String {
    vec!["?"; count].join(", ")
}

#[async_trait]
impl OutfitStore for SqliteStore {
    async fn list_outfits(&self) -> StoreResult<Vec<OutfitRecord>> {
        let query = format!("SELECT {OUTFIT_COLUMNS} FROM outfits ORDER BY seq");
        sqlx::query_as::<_, OutfitRow>(&query)
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(OutfitRow::into_record)
            .collect()
    }

    async fn list_outfits_by_ids(&self, ids: &[OutfitId]) -> StoreResult<Vec<OutfitRecord>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!(
            "SELECT {OUTFIT_COLUMNS} FROM outfits WHERE id IN ({}) ORDER BY seq",
            placeholders(ids.len())
        );
        let mut select = sqlx::query_as::<_, OutfitRow>(&query);
        for id in ids {
            select = select.bind(id.as_str());
        }
        select
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(OutfitRow::into_record)
            .collect()
    }

    async fn insert_outfit(&self, outfit: NewOutfit) -> StoreResult<OutfitRecord> {
        if outfit.item_ids.is_empty() {
            return Err(StoreError::InvalidRecord {
                message: "an outfit needs at least one item".to_string(),
            });
        }

        let fingerprint = canonicalize(&outfit.item_ids);
        let id = OutfitId::generate();
        let tags = outfit.tags.as_ref().map(serde_json::to_string).transpose()?;

        let inserted = sqlx::query(
            "INSERT INTO outfits (id, item_ids, fingerprint, tags, notes, name, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?) \
             ON CONFLICT(fingerprint) DO NOTHING",
        )
        .bind(id.as_str())
        .bind(serde_json::to_string(&outfit.item_ids)?)
        .bind(fingerprint.as_str())
        .bind(tags)
        .bind(&outfit.notes)
        .bind(&outfit.name)
        .bind(Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true))
        .execute(&self.pool)
        .await?
        .rows_affected();

        if inserted == 0 {
            process_debug!(ProcessId::current(), "♻️ Fingerprint {} already stored", fingerprint);
        }
        self.fetch_outfit_by_fingerprint(fingerprint.as_str()).await
    }

    async fn list_items(&self) -> StoreResult<Vec<WardrobeItem>> {
        let query = format!("SELECT {ITEM_COLUMNS} FROM wardrobe_items ORDER BY id");
        sqlx::query_as::<_, ItemRow>(&query)
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(ItemRow::into_item)
            .collect()
    }

    async fn resolve_items(&self, ids: &[ItemId]) -> StoreResult<HashMap<ItemId, DisplayItem>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let query = format!(
            "SELECT {ITEM_COLUMNS} FROM wardrobe_items WHERE id IN ({})",
            placeholders(ids.len())
        );
        let mut select = sqlx::query_as::<_, ItemRow>(&query);
        for id in ids {
            select = select.bind(id.as_str());
        }

        let mut resolved = HashMap::new();
        for row in select.fetch_all(&self.pool).await? {
            let item = row.into_item()?;
            resolved.insert(item.id.clone(), DisplayItem::from(&item));
        }
        Ok(resolved)
    }

    async fn upsert_item(&self, item: WardrobeItem) -> StoreResult<()> {
        sqlx::query(
            "INSERT INTO wardrobe_items (id, category, name, image_url, colors, seasons, styles) \
             VALUES (?, ?, ?, ?, ?, ?, ?) \
             ON CONFLICT(id) DO UPDATE SET \
                category = excluded.category, \
                name = excluded.name, \
                image_url = excluded.image_url, \
                colors = excluded.colors, \
                seasons = excluded.seasons, \
                styles = excluded.styles",
        )
        .bind(item.id.as_str())
        .bind(item.category.to_string())
        .bind(&item.name)
        .bind(&item.image_url)
        .bind(serde_json::to_string(&item.tags.colors)?)
        .bind(serde_json::to_string(&item.tags.seasons)?)
        .bind(serde_json::to_string(&item.tags.styles)?)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete_item(&self, id: &ItemId) -> StoreResult<DeletionReport> {
        let mut report = DeletionReport::new(id.clone());
        let mut tx = self.pool.begin().await?;

        report.item_removed = sqlx::query("DELETE FROM wardrobe_items WHERE id = ?")
            .bind(id.as_str())
            .execute(&mut *tx)
            .await?
            .rows_affected()
            > 0;

        let query = format!("SELECT {OUTFIT_COLUMNS} FROM outfits ORDER BY seq");
        let records = sqlx::query_as::<_, OutfitRow>(&query)
            .fetch_all(&mut *tx)
            .await?
            .into_iter()
            .map(OutfitRow::into_record)
            .collect::<StoreResult<Vec<_>>>()?;
        let (pruned, untouched): (Vec<OutfitRecord>, Vec<OutfitRecord>) =
            records.into_iter().partition(|record| record.contains(id));

        // Untouched records already hold unique fingerprints and keep them
        let mut holders: HashSet<String> = untouched
            .iter()
            .map(|record| canonicalize(&record.item_ids).to_string())
            .collect();

        for mut record in pruned {
            record.item_ids.retain(|item| item != id);
            let fingerprint = canonicalize(&record.item_ids).to_string();

            if record.item_ids.is_empty() || holders.contains(&fingerprint) {
                sqlx::query("DELETE FROM outfits WHERE id = ?")
                    .bind(record.id.as_str())
                    .execute(&mut *tx)
                    .await?;
                report.purged_outfits.push(record.id);
            } else {
                sqlx::query("UPDATE outfits SET item_ids = ?, fingerprint = ? WHERE id = ?")
                    .bind(serde_json::to_string(&record.item_ids)?)
                    .bind(&fingerprint)
                    .bind(record.id.as_str())
                    .execute(&mut *tx)
                    .await?;
                holders.insert(fingerprint);
                report.pruned_outfits.push(record.id);
            }
        }

        tx.commit().await?;

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
