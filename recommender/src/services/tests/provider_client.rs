//! Tests for RealProviderClient against a local mock HTTP server

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::error::RecommenderError;
use crate::services::provider_client::RealProviderClient;
use crate::traits::ProviderClient;
use crate::types::{GenerationConfig, ProviderId};

#[tokio::test]
async fn test_openai_completion_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("Authorization", "Bearer sk-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"content": "{\"days\": []}"}}],
            "usage": {"prompt_tokens": 12, "completion_tokens": 8, "total_tokens": 20}
        })))
        .mount(&server)
        .await;

    let client = RealProviderClient::new(ProviderId::OpenAI, "sk-test").with_base_url(server.uri());
    let config = GenerationConfig::for_provider(ProviderId::OpenAI);
    let response = client.complete("plan my week", &config).await.unwrap();

    assert_eq!(response.content, "{\"days\": []}");
    assert_eq!(response.tokens_used, 20);
    assert_eq!(response.prompt_tokens, 12);
    assert_eq!(response.model_used, "gpt-4o-mini");
}

#[tokio::test]
async fn test_anthropic_completion_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(header("x-api-key", "ak-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [{"type": "text", "text": "hello"}],
            "usage": {"input_tokens": 5, "output_tokens": 3}
        })))
        .mount(&server)
        .await;

    let client = RealProviderClient::new(ProviderId::Anthropic, "ak-test").with_base_url(server.uri());
    let config = GenerationConfig::for_provider(ProviderId::Anthropic);
    let response = client.complete("hi", &config).await.unwrap();

    assert_eq!(response.content, "hello");
    assert_eq!(response.tokens_used, 8);
}

#[tokio::test]
async fn test_status_codes_map_to_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let openai = RealProviderClient::new(ProviderId::OpenAI, "sk").with_base_url(server.uri());
    let result = openai
        .complete("x", &GenerationConfig::for_provider(ProviderId::OpenAI))
        .await;
    assert!(matches!(
        result,
        Err(RecommenderError::RateLimited {
            provider: ProviderId::OpenAI
        })
    ));

    let anthropic = RealProviderClient::new(ProviderId::Anthropic, "ak").with_base_url(server.uri());
    let result = anthropic
        .complete("x", &GenerationConfig::for_provider(ProviderId::Anthropic))
        .await;
    assert!(matches!(result, Err(RecommenderError::AuthenticationFailed { .. })));
}

#[tokio::test]
async fn test_unexpected_status_is_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = RealProviderClient::new(ProviderId::Gemini, "g").with_base_url(server.uri());
    let result = client
        .complete("x", &GenerationConfig::for_provider(ProviderId::Gemini))
        .await;
    assert!(matches!(result, Err(RecommenderError::ServerError { status: 500, .. })));
}

#[tokio::test]
async fn test_slow_provider_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .mount(&server)
        .await;

    let client = RealProviderClient::new(ProviderId::OpenAI, "sk").with_base_url(server.uri());
    let config = GenerationConfig::for_provider(ProviderId::OpenAI).with_timeout(Duration::from_millis(50));
    let result = client.complete("x", &config).await;

    assert!(matches!(result, Err(RecommenderError::Timeout { .. })));
}

#[tokio::test]
async fn test_random_provider_has_no_endpoint() {
    let client = RealProviderClient::new(ProviderId::Random, "");
    let result = client
        .complete("x", &GenerationConfig::for_provider(ProviderId::Random))
        .await;
    assert!(matches!(result, Err(RecommenderError::ConfigError { .. })));
}
