//! Recommender trait definitions for dependency injection

use async_trait::async_trait;

use shared::{DayRecommendation, RecommendationRequest};

use crate::error::RecommenderResult;
use crate::types::{GenerationConfig, ProviderId, ProviderResponse};

/// Synthesises new item sets for planning days
///
/// Stateless across calls. Output may reference items that are not in the
/// wardrobe snapshot and must be validated by the caller.
#[mockall::automock]
#[async_trait]
pub trait Recommender: Send + Sync {
    /// Recommend one outfit per requested day
    async fn recommend(&self, request: &RecommendationRequest) -> RecommenderResult<Vec<DayRecommendation>>;
}

/// Raw text completion against one LLM provider
#[mockall::automock]
#[async_trait]
pub trait ProviderClient: Send + Sync {
    /// Provider this client talks to
    fn provider(&self) -> ProviderId;

    /// Send a prompt and return the provider's text answer
    async fn complete(&self, prompt: &str, config: &GenerationConfig) -> RecommenderResult<ProviderResponse>;
}
