//! Command line configuration shared by the planner and webserver binaries

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Args;

use recommender::{
    GenerationConfig, LlmRecommender, ProviderId, RandomRecommender, RealApiKeySource, RealProviderClient,
    Recommender,
};
use shared::{process_debug, process_info, ProcessId};

use crate::core::UnknownItemPolicy;
use crate::error::PlannerResult;
use crate::planner::DynPlanner;
use crate::services::{import_outfits, import_wardrobe, MemoryStore, SqliteStore};
use crate::traits::OutfitStore;
use crate::types::PlannerSettings;

/// Where outfits and wardrobe items are kept
#[derive(Args, Debug, Clone)]
pub struct StoreArgs {
    /// SQLite database file
    #[arg(long, default_value = "planner.db")]
    pub database: PathBuf,

    /// Keep all data in memory for this run only
    #[arg(long)]
    pub in_memory: bool,

    /// Wardrobe JSON file upserted into the store on startup
    #[arg(long)]
    pub wardrobe: Option<PathBuf>,

    /// Outfit history JSON file inserted into the store on startup
    #[arg(long)]
    pub outfits: Option<PathBuf>,
}

/// Which recommender generates new outfits
#[derive(Args, Debug, Clone)]
pub struct RecommenderArgs {
    /// Provider: random, openai, anthropic or gemini
    #[arg(long, default_value = "random")]
    pub provider: ProviderId,

    /// Model name (provider default if not set)
    #[arg(long)]
    pub model: Option<String>,

    /// Provider request timeout in seconds
    #[arg(long, default_value = "30")]
    pub timeout_secs: u64,

    /// Override the provider API base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Seed for the random recommender and the planner's picks
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Planning tunables
#[derive(Args, Debug, Clone)]
pub struct PlanningArgs {
    /// Days planned when a weekly request lists no days
    #[arg(long, default_value = "7")]
    pub horizon_days: u32,

    /// Maximum alternatives returned with a daily outfit
    #[arg(long, default_value = "2")]
    pub max_alternatives: usize,

    /// Unknown items in recommendations: strip or reject
    #[arg(long, default_value = "strip")]
    pub unknown_items: UnknownItemPolicy,
}

impl PlanningArgs {
    pub fn settings(&self) -> PlannerSettings {
        PlannerSettings {
            horizon_days: self.horizon_days,
            max_alternatives: self.max_alternatives,
            unknown_items: self.unknown_items,
        }
    }
}

/// Open the configured store and load any seed files into it
///
/// The wardrobe is loaded before the outfits so an in-memory run starts
/// with a usable catalog.
pub async fn open_store(args: &StoreArgs) -> PlannerResult<Arc<dyn OutfitStore>> {
    let store: Arc<dyn OutfitStore> = if args.in_memory {
        process_debug!(ProcessId::current(), "🧠 Using in-memory store");
        Arc::new(MemoryStore::new())
    } else {
        Arc::new(SqliteStore::open(&args.database).await?)
    };

    if let Some(path) = &args.wardrobe {
        let summary = import_wardrobe(store.as_ref(), path).await?;
        process_info!(ProcessId::current(), "👕 Loaded {} wardrobe items from {}", summary.imported, path.display());
    }
    if let Some(path) = &args.outfits {
        let summary = import_outfits(store.as_ref(), path).await?;
        process_info!(
            ProcessId::current(),
            "📚 Loaded {} outfits from {} ({} duplicates, {} skipped)",
            summary.imported,
            path.display(),
            summary.duplicates,
            summary.skipped
        );
    }
    Ok(store)
}

/// Build the configured recommender, reading API keys from the environment
pub fn build_recommender(args: &RecommenderArgs) -> PlannerResult<Arc<dyn Recommender>> {
    if args.provider == ProviderId::Random {
        process_debug!(ProcessId::current(), "🎲 Using offline random recommender");
        return Ok(Arc::new(RandomRecommender::new(args.seed)));
    }

    let api_key = RealApiKeySource::new().key_for(args.provider)?;
    let mut client = RealProviderClient::new(args.provider, api_key);
    if let Some(base_url) = &args.base_url {
        client = client.with_base_url(base_url.clone());
    }

    let mut config =
        GenerationConfig::for_provider(args.provider).with_timeout(Duration::from_secs(args.timeout_secs.max(1)));
    if let Some(model) = &args.model {
        config = config.with_model(model.clone());
    }

    process_info!(ProcessId::current(), "🤖 Using {} recommender with model {}", args.provider, config.model);
    Ok(Arc::new(LlmRecommender::new(Arc::new(client)).with_config(config)))
}

/// Wire store, recommender and settings into a planner
pub async fn build_planner(
    store_args: &StoreArgs,
    recommender_args: &RecommenderArgs,
    planning_args: &PlanningArgs,
) -> PlannerResult<DynPlanner> {
    let store = open_store(store_args).await?;
    let recommender = build_recommender(recommender_args)?;

    let planner = DynPlanner::new(store, recommender).with_settings(planning_args.settings());
    Ok(match recommender_args.seed {
        Some(seed) => planner.with_seed(seed),
        None => planner,
    })
}
