//! Command line entry point for the outfit planner

use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Serialize;

use planner::config::{build_planner, PlanningArgs, RecommenderArgs, StoreArgs};
use planner::services::{import_outfits, import_wardrobe};
use shared::{logging, process_debug, DailyRequest, ItemId, ProcessId, Strategy, WeatherSnapshot, WeeklyRequest};

/// Assign outfits to days from a wardrobe and outfit history
#[derive(Parser)]
#[command(name = "planner")]
#[command(about = "Plans daily and weekly outfits from a wardrobe and outfit history")]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(flatten)]
    store: StoreArgs,

    #[command(flatten)]
    recommender: RecommenderArgs,

    #[command(flatten)]
    planning: PlanningArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Upsert wardrobe items from a JSON array file
    ImportWardrobe { file: PathBuf },

    /// Insert outfits from a JSON array file, skipping duplicates
    ImportOutfits { file: PathBuf },

    /// Pick or generate the outfit for one day
    Daily {
        /// existing or new
        #[arg(long, default_value = "existing")]
        strategy: Strategy,

        /// Style tag passed to the recommender (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Temperature in degrees Celsius
        #[arg(long, requires = "condition")]
        temperature: Option<f64>,

        /// Weather condition, e.g. sunny or rain
        #[arg(long, requires = "temperature")]
        condition: Option<String>,

        /// Day to dress for (YYYY-MM-DD), today by default
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Plan a multi-day horizon
    Weekly {
        /// First day when no explicit days are given (YYYY-MM-DD)
        #[arg(long)]
        start_date: Option<NaiveDate>,

        /// JSON file holding a full weekly request
        #[arg(long)]
        request: Option<PathBuf>,
    },

    /// Delete a wardrobe item and cascade into outfits
    DeleteItem { id: String },

    /// Print the outfit history
    ListOutfits,
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn read_weekly_request(path: Option<PathBuf>, start_date: Option<NaiveDate>) -> anyhow::Result<WeeklyRequest> {
    let mut request = match path {
        Some(path) => {
            let raw = tokio::fs::read_to_string(&path)
                .await
                .with_context(|| format!("reading weekly request {}", path.display()))?;
            serde_json::from_str(&raw).with_context(|| format!("parsing weekly request {}", path.display()))?
        }
        None => WeeklyRequest::default(),
    };
    if start_date.is_some() {
        request.start_date = start_date;
    }
    Ok(request)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    ProcessId::init_cli();
    logging::init_tracing_with_level(Some(&args.log_level));
    process_debug!(ProcessId::current(), "Store: {:?}, provider: {}", args.store, args.recommender.provider);

    let planner = build_planner(&args.store, &args.recommender, &args.planning).await?;

    match args.command {
        Command::ImportWardrobe { file } => {
            print_json(&import_wardrobe(planner.store().as_ref(), &file).await?)?;
        }
        Command::ImportOutfits { file } => {
            print_json(&import_outfits(planner.store().as_ref(), &file).await?)?;
        }
        Command::Daily {
            strategy,
            tags,
            temperature,
            condition,
            date,
        } => {
            let weather = match (temperature, condition) {
                (Some(temperature), Some(condition)) => Some(WeatherSnapshot { temperature, condition }),
                _ => None,
            };
            let request = DailyRequest {
                strategy,
                tags,
                weather,
                date,
            };
            print_json(&planner.plan_daily(request).await?)?;
        }
        Command::Weekly { start_date, request } => {
            let request = read_weekly_request(request, start_date).await?;
            print_json(&planner.plan_weekly(request).await?)?;
        }
        Command::DeleteItem { id } => {
            print_json(&planner.delete_item(&ItemId::from(id)).await?)?;
        }
        Command::ListOutfits => {
            print_json(&planner.list_outfits().await?)?;
        }
    }

    logging::log_success(ProcessId::current(), "Done");
    Ok(())
}
