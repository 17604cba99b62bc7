//! Outfit planner library
//!
//! Assigns outfits to days from a wardrobe catalog and an outfit history.
//! A daily request reuses a curated outfit or asks a recommender for a new
//! one; a weekly request walks a horizon of days, preferring history that
//! avoids repeating tops, bottoms and dresses, and falls back to generation.
//! New combinations are deduplicated by fingerprint before they are stored.

pub mod config;
pub mod core;
pub mod error;
pub mod planner;
pub mod services;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use core::{Catalog, Fingerprint, FingerprintIndex, HorizonLedger, UnknownItemPolicy};
pub use error::{DailyOutfitError, PlannerError, PlannerResult, StoreError, StoreResult};
pub use planner::{DynPlanner, Planner};
pub use services::{ImportSummary, MemoryStore, SqliteStore};
pub use traits::{MockOutfitStore, OutfitStore};
pub use types::{DeletionReport, PlannerSettings};
