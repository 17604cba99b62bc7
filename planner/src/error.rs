//! Planner error types

use chrono::NaiveDate;
use recommender::RecommenderError;
use thiserror::Error;

/// Persistence failures. Any of these aborts the request that hit it.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Corrupt stored record: {message}")]
    Corrupt { message: String },

    #[error("Invalid outfit record: {message}")]
    InvalidRecord { message: String },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store unavailable: {message}")]
    Unavailable { message: String },
}

impl StoreError {
    pub fn is_retryable(&self) -> bool {
        match self {
            StoreError::Unavailable { .. } => true,
            StoreError::Database(e) => matches!(
                e,
                sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_)
            ),
            _ => false,
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Daily selection could not produce a main outfit
#[derive(Error, Debug)]
pub enum DailyOutfitError {
    #[error("Wardrobe is empty, nothing to build an outfit from")]
    EmptyWardrobe,

    #[error("Recommender returned no outfit for {date}")]
    NoRecommendation { date: NaiveDate },

    #[error("Recommender failed: {0}")]
    Recommender(#[from] RecommenderError),
}

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Invalid request field '{field}': {message}")]
    Validation { field: String, message: String },

    #[error("Daily outfit unavailable: {0}")]
    DailyOutfit(#[from] DailyOutfitError),

    #[error("Recommender error: {0}")]
    Recommender(#[from] RecommenderError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PlannerError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Stable machine-readable error category
    pub fn kind(&self) -> &'static str {
        match self {
            PlannerError::Validation { .. } => "validation",
            PlannerError::DailyOutfit(_) => "daily_outfit",
            PlannerError::Recommender(_) => "recommender",
            PlannerError::Store(_) => "store",
            PlannerError::Configuration { .. } => "configuration",
            PlannerError::Io(_) => "io",
            PlannerError::Json(_) => "json",
        }
    }

    /// Whether repeating the same request may succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            PlannerError::DailyOutfit(DailyOutfitError::Recommender(e)) | PlannerError::Recommender(e) => {
                e.is_retryable()
            }
            // Sampling is not deterministic across calls
            PlannerError::DailyOutfit(DailyOutfitError::NoRecommendation { .. }) => true,
            PlannerError::Store(e) => e.is_retryable(),
            _ => false,
        }
    }
}

pub type PlannerResult<T> = Result<T, PlannerError>;
