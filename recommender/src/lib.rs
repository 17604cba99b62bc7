//! Outfit recommender library
//!
//! Defines the [`Recommender`] contract used by the planner and two
//! implementations: [`LlmRecommender`], which prompts a hosted language model
//! through a [`ProviderClient`], and [`RandomRecommender`], a seedable offline
//! stand-in.

pub mod core;
pub mod error;
pub mod services;
pub mod traits;
pub mod types;

pub use error::{RecommenderError, RecommenderResult};
pub use services::{LlmRecommender, RandomRecommender, RealApiKeySource, RealProviderClient};
pub use traits::{MockProviderClient, MockRecommender, ProviderClient, Recommender};
pub use types::{GenerationConfig, ProviderId, ProviderResponse};
