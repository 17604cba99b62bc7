//! HTTP provider client for the supported chat-completion APIs

use std::time::Instant;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{RecommenderError, RecommenderResult};
use crate::traits::ProviderClient;
use crate::types::{GenerationConfig, ProviderId, ProviderResponse};

/// Real provider client backed by reqwest
pub struct RealProviderClient {
    provider: ProviderId,
    api_key: String,
    http: reqwest::Client,
    base_url: String,
}

impl RealProviderClient {
    /// Create a client for one provider using its public endpoint
    pub fn new(provider: ProviderId, api_key: impl Into<String>) -> Self {
        Self {
            provider,
            api_key: api_key.into(),
            http: reqwest::Client::new(),
            base_url: Self::default_base_url(provider).to_string(),
        }
    }

    /// Point the client at a different host (proxies, tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn default_base_url(provider: ProviderId) -> &'static str {
        match provider {
            ProviderId::OpenAI => "https://api.openai.com",
            ProviderId::Anthropic => "https://api.anthropic.com",
            ProviderId::Gemini => "https://generativelanguage.googleapis.com",
            ProviderId::Random => "",
        }
    }

    async fn send(&self, request: reqwest::RequestBuilder, config: &GenerationConfig) -> RecommenderResult<Value> {
        let response = request
            .header("Content-Type", "application/json")
            .timeout(config.timeout)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(match status.as_u16() {
                401 | 403 => RecommenderError::AuthenticationFailed { provider: self.provider },
                429 => RecommenderError::RateLimited { provider: self.provider },
                503 => RecommenderError::ServiceUnavailable { provider: self.provider },
                code => RecommenderError::ServerError {
                    provider: self.provider,
                    status: code,
                },
            });
        }

        response.json().await.map_err(|e| RecommenderError::Unparseable {
            message: format!("Failed to parse provider response: {e}"),
        })
    }

    fn map_transport_error(&self, error: reqwest::Error) -> RecommenderError {
        if error.is_timeout() {
            RecommenderError::Timeout { provider: self.provider }
        } else {
            RecommenderError::NetworkError {
                message: error.to_string(),
            }
        }
    }

    async fn complete_openai(&self, prompt: &str, config: &GenerationConfig) -> RecommenderResult<ProviderResponse> {
        let request_start = Instant::now();
        let request_body = serde_json::json!({
            "model": config.model,
            "messages": [
                {
                    "role": "user",
                    "content": prompt
                }
            ],
            "max_tokens": config.max_tokens,
            "temperature": config.temperature
        });

        let request = self
            .http
            .post(format!("{}/v1/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request_body);
        let response_json = self.send(request, config).await?;
        let response_time = request_start.elapsed();

        let content = response_json
            .get("choices")
            .and_then(|choices| choices.get(0))
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|content| content.as_str())
            .ok_or(RecommenderError::EmptyResponse)?;

        let usage = response_json.get("usage");
        let prompt_tokens = token_count(usage, "prompt_tokens");
        let completion_tokens = token_count(usage, "completion_tokens");

        Ok(ProviderResponse {
            content: content.to_string(),
            tokens_used: token_count(usage, "total_tokens").max(prompt_tokens + completion_tokens),
            prompt_tokens,
            completion_tokens,
            model_used: config.model.clone(),
            response_time,
        })
    }

    async fn complete_anthropic(&self, prompt: &str, config: &GenerationConfig) -> RecommenderResult<ProviderResponse> {
        let request_start = Instant::now();
        let request_body = serde_json::json!({
            "model": config.model,
            "max_tokens": config.max_tokens,
            "temperature": config.temperature,
            "messages": [
                {
                    "role": "user",
                    "content": prompt
                }
            ]
        });

        let request = self
            .http
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .json(&request_body);
        let response_json = self.send(request, config).await?;
        let response_time = request_start.elapsed();

        let content = response_json
            .get("content")
            .and_then(|content| content.get(0))
            .and_then(|item| item.get("text"))
            .and_then(|text| text.as_str())
            .ok_or(RecommenderError::EmptyResponse)?;

        let usage = response_json.get("usage");
        let input_tokens = token_count(usage, "input_tokens");
        let output_tokens = token_count(usage, "output_tokens");

        Ok(ProviderResponse {
            content: content.to_string(),
            tokens_used: input_tokens + output_tokens,
            prompt_tokens: input_tokens,
            completion_tokens: output_tokens,
            model_used: config.model.clone(),
            response_time,
        })
    }

    async fn complete_gemini(&self, prompt: &str, config: &GenerationConfig) -> RecommenderResult<ProviderResponse> {
        let request_start = Instant::now();
        let request_body = serde_json::json!({
            "contents": [
                {
                    "parts": [
                        {
                            "text": prompt
                        }
                    ]
                }
            ],
            "generationConfig": {
                "maxOutputTokens": config.max_tokens,
                "temperature": config.temperature,
                "responseMimeType": "application/json"
            }
        });

        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, config.model, self.api_key
        );
        let request = self.http.post(url).json(&request_body);
        let response_json = self.send(request, config).await?;
        let response_time = request_start.elapsed();

        let content = response_json
            .get("candidates")
            .and_then(|candidates| candidates.get(0))
            .and_then(|candidate| candidate.get("content"))
            .and_then(|content| content.get("parts"))
            .and_then(|parts| parts.get(0))
            .and_then(|part| part.get("text"))
            .and_then(|text| text.as_str())
            .ok_or(RecommenderError::EmptyResponse)?;

        // Gemini doesn't always provide token counts
        let usage_metadata = response_json.get("usageMetadata");
        let prompt_tokens = token_count(usage_metadata, "promptTokenCount");
        let completion_tokens = token_count(usage_metadata, "candidatesTokenCount");

        Ok(ProviderResponse {
            content: content.to_string(),
            tokens_used: prompt_tokens + completion_tokens,
            prompt_tokens,
            completion_tokens,
            model_used: config.model.clone(),
            response_time,
        })
    }
}

fn token_count(usage: Option<&Value>, field: &str) -> u32 {
    usage
        .and_then(|u| u.get(field))
        .and_then(|t| t.as_u64())
        .unwrap_or(0) as u32
}

#[async_trait]
impl ProviderClient for RealProviderClient {
    fn provider(&self) -> ProviderId {
        self.provider
    }

    async fn complete(&self, prompt: &str, config: &GenerationConfig) -> RecommenderResult<ProviderResponse> {
        match self.provider {
            ProviderId::OpenAI => self.complete_openai(prompt, config).await,
            ProviderId::Anthropic => self.complete_anthropic(prompt, config).await,
            ProviderId::Gemini => self.complete_gemini(prompt, config).await,
            ProviderId::Random => Err(RecommenderError::ConfigError {
                message: "the random provider has no HTTP endpoint".to_string(),
            }),
        }
    }
}
