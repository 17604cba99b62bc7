//! Recommender-specific data types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Generative backends a recommender can be built on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderId {
    OpenAI,
    Anthropic,
    Gemini,
    /// Offline seeded picks, no network
    Random,
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderId::OpenAI => write!(f, "openai"),
            ProviderId::Anthropic => write!(f, "anthropic"),
            ProviderId::Gemini => write!(f, "gemini"),
            ProviderId::Random => write!(f, "random"),
        }
    }
}

impl std::str::FromStr for ProviderId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(ProviderId::OpenAI),
            "anthropic" => Ok(ProviderId::Anthropic),
            "gemini" | "google" => Ok(ProviderId::Gemini),
            "random" => Ok(ProviderId::Random),
            _ => Err(format!("Unknown provider: {s}")),
        }
    }
}

/// Model parameters for one provider request
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout: Duration,
}

impl GenerationConfig {
    /// Sensible defaults for each provider
    pub fn for_provider(provider: ProviderId) -> Self {
        let model = match provider {
            ProviderId::OpenAI => "gpt-4o-mini",
            ProviderId::Anthropic => "claude-3-5-haiku-latest",
            ProviderId::Gemini => "gemini-1.5-flash",
            ProviderId::Random => "random",
        };
        Self {
            model: model.to_string(),
            max_tokens: 1500,
            temperature: 0.7,
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Provider response data
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    pub content: String,
    pub tokens_used: u32,
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub model_used: String,
    pub response_time: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_round_trip_through_strings() {
        for provider in [ProviderId::OpenAI, ProviderId::Anthropic, ProviderId::Gemini, ProviderId::Random] {
            assert_eq!(provider.to_string().parse::<ProviderId>().unwrap(), provider);
        }
        assert_eq!("google".parse::<ProviderId>().unwrap(), ProviderId::Gemini);
        assert!("mistral".parse::<ProviderId>().is_err());
    }

    #[test]
    fn test_generation_config_defaults() {
        let config = GenerationConfig::for_provider(ProviderId::OpenAI).with_timeout(Duration::from_secs(5));
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
