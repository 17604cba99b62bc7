//! Shared types for the outfit planning system
//!
//! Contains the wardrobe and outfit domain model, the request/response
//! messages used by the planner, the recommender and the webserver, and the
//! logging helpers every binary initialises at startup.

pub mod errors;
pub mod logging;
pub mod messages;
pub mod types;

pub use errors::*;
pub use types::*;

pub use messages::{
    // Daily selection
    DailyRequest, DailyResponse, OutfitSource, ResolvedOutfit, Strategy,

    // Weekly allocation
    AssignedOutfit, AssignmentSource, DayAssignment, WeeklyRequest, WeeklyResponse,

    // Recommender exchange
    DayRecommendation, ItemPick, RecommendationRequest,
};
