//! Message types exchanged between the planner, its recommender and its callers
//!
//! - `daily`: single-day outfit requests
//! - `weekly`: multi-day horizon requests
//! - `recommender`: planner ↔ generative recommender

pub mod daily;
pub mod recommender;
pub mod weekly;

pub use daily::{DailyRequest, DailyResponse, OutfitSource, ResolvedOutfit, Strategy};

pub use recommender::{DayRecommendation, ItemPick, RecommendationRequest};

pub use weekly::{AssignedOutfit, AssignmentSource, DayAssignment, WeeklyRequest, WeeklyResponse};
