//! LLM-backed recommender

use std::sync::Arc;

use async_trait::async_trait;

use shared::{process_debug, process_info, DayRecommendation, ProcessId, RecommendationRequest};

use crate::core::{parse_recommendations, PromptBuilder};
use crate::error::{RecommenderError, RecommenderResult};
use crate::traits::{ProviderClient, Recommender};
use crate::types::GenerationConfig;

/// Recommender that asks a language model for outfits
pub struct LlmRecommender {
    client: Arc<dyn ProviderClient>,
    prompt: PromptBuilder,
    config: GenerationConfig,
}

impl LlmRecommender {
    /// Create a recommender using the provider's default generation config
    pub fn new(client: Arc<dyn ProviderClient>) -> Self {
        let config = GenerationConfig::for_provider(client.provider());
        Self {
            client,
            prompt: PromptBuilder::new(),
            config,
        }
    }

    pub fn with_config(mut self, config: GenerationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_prompt_builder(mut self, prompt: PromptBuilder) -> Self {
        self.prompt = prompt;
        self
    }
}

#[async_trait]
impl Recommender for LlmRecommender {
    async fn recommend(&self, request: &RecommendationRequest) -> RecommenderResult<Vec<DayRecommendation>> {
        if request.days.is_empty() {
            return Err(RecommenderError::InvalidRequest {
                message: "at least one planning day is required".to_string(),
            });
        }

        let prompt = self.prompt.build(request);
        process_debug!(
            ProcessId::current(),
            "🧵 Requesting {} day(s) from {} ({} prompt chars)",
            request.days.len(),
            self.client.provider(),
            prompt.len()
        );

        let response = self.client.complete(&prompt, &self.config).await?;
        process_info!(
            ProcessId::current(),
            "🤖 {} answered in {:?} using {} tokens",
            response.model_used,
            response.response_time,
            response.tokens_used
        );

        parse_recommendations(&response.content)
    }
}
