//! Tests for LlmRecommender with a mocked provider client

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use mockall::predicate::always;

use shared::{Category, ItemId, PlanningDay, RecommendationRequest, WardrobeItem};

use crate::error::RecommenderError;
use crate::services::llm::LlmRecommender;
use crate::traits::{MockProviderClient, Recommender};
use crate::types::{ProviderId, ProviderResponse};

fn response(content: &str) -> ProviderResponse {
    ProviderResponse {
        content: content.to_string(),
        tokens_used: 42,
        prompt_tokens: 30,
        completion_tokens: 12,
        model_used: "gpt-4o-mini".to_string(),
        response_time: Duration::from_millis(120),
    }
}

fn request() -> RecommendationRequest {
    RecommendationRequest {
        days: vec![PlanningDay::new(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap())],
        wardrobe: vec![
            WardrobeItem::new("top1", Category::Top),
            WardrobeItem::new("bottom1", Category::Bottom),
        ],
        ..RecommendationRequest::default()
    }
}

#[tokio::test]
async fn test_recommend_parses_provider_answer() {
    let mut client = MockProviderClient::new();
    client.expect_provider().return_const(ProviderId::OpenAI);
    client
        .expect_complete()
        .with(always(), always())
        .times(1)
        .returning(|prompt, _| {
            assert!(prompt.contains("- top1 | top"));
            Ok(response(
                "```json\n{\"days\":[{\"date\":\"2026-10-16\",\"items\":[{\"itemId\":\"top1\"},{\"itemId\":\"bottom1\"}]}]}\n```",
            ))
        });

    let recommender = LlmRecommender::new(Arc::new(client));
    let days = recommender.recommend(&request()).await.unwrap();

    assert_eq!(days.len(), 1);
    assert_eq!(days[0].item_ids(), vec![ItemId::from("top1"), ItemId::from("bottom1")]);
}

#[tokio::test]
async fn test_recommend_propagates_provider_errors() {
    let mut client = MockProviderClient::new();
    client.expect_provider().return_const(ProviderId::Anthropic);
    client.expect_complete().returning(|_, _| {
        Err(RecommenderError::ServiceUnavailable {
            provider: ProviderId::Anthropic,
        })
    });

    let recommender = LlmRecommender::new(Arc::new(client));
    let result = recommender.recommend(&request()).await;

    assert!(matches!(result, Err(RecommenderError::ServiceUnavailable { .. })));
}

#[tokio::test]
async fn test_recommend_rejects_prose_answer() {
    let mut client = MockProviderClient::new();
    client.expect_provider().return_const(ProviderId::OpenAI);
    client
        .expect_complete()
        .returning(|_, _| Ok(response("Wear something comfortable!")));

    let recommender = LlmRecommender::new(Arc::new(client));
    let result = recommender.recommend(&request()).await;

    assert!(matches!(result, Err(RecommenderError::Unparseable { .. })));
}

#[tokio::test]
async fn test_recommend_requires_days() {
    let mut client = MockProviderClient::new();
    client.expect_provider().return_const(ProviderId::OpenAI);
    client.expect_complete().never();

    let recommender = LlmRecommender::new(Arc::new(client));
    let result = recommender.recommend(&RecommendationRequest::default()).await;

    assert!(matches!(result, Err(RecommenderError::InvalidRequest { .. })));
}
