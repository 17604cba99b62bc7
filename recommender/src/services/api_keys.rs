//! Environment-backed API key lookup
//!
//! Keys are read from the process environment after loading a `.env` file
//! from the current directory or one of its parents, if present. Variables
//! already set in the environment take precedence over the file.
//!
//! | Provider  | Variables                            |
//! |-----------|--------------------------------------|
//! | OpenAI    | `OPENAI_API_KEY`                     |
//! | Anthropic | `ANTHROPIC_API_KEY`                  |
//! | Gemini    | `GEMINI_API_KEY`, `GOOGLE_API_KEY`   |

use crate::error::{RecommenderError, RecommenderResult};
use crate::types::ProviderId;

/// Real API key source using environment variables
pub struct RealApiKeySource;

impl RealApiKeySource {
    pub fn new() -> Self {
        Self::init_env();
        Self
    }

    /// Environment variables checked for a provider, in priority order
    pub fn variables_for(provider: ProviderId) -> &'static [&'static str] {
        match provider {
            ProviderId::OpenAI => &["OPENAI_API_KEY"],
            ProviderId::Anthropic => &["ANTHROPIC_API_KEY"],
            ProviderId::Gemini => &["GEMINI_API_KEY", "GOOGLE_API_KEY"],
            ProviderId::Random => &[],
        }
    }

    /// First non-empty key configured for `provider`
    pub fn key_for(&self, provider: ProviderId) -> RecommenderResult<String> {
        Self::variables_for(provider)
            .iter()
            .filter_map(|name| std::env::var(name).ok())
            .find(|value| !value.trim().is_empty())
            .ok_or(RecommenderError::MissingApiKey { provider })
    }

    // dotenv never overrides variables that are already set
    fn init_env() {
        let _ = dotenv::dotenv();
    }
}

impl Default for RealApiKeySource {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gemini_accepts_google_variable() {
        assert_eq!(
            RealApiKeySource::variables_for(ProviderId::Gemini),
            &["GEMINI_API_KEY", "GOOGLE_API_KEY"]
        );
    }

    #[test]
    fn test_random_provider_never_has_a_key() {
        let source = RealApiKeySource::new();
        assert!(matches!(
            source.key_for(ProviderId::Random),
            Err(RecommenderError::MissingApiKey {
                provider: ProviderId::Random
            })
        ));
    }
}
