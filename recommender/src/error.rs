//! Recommender error types

use thiserror::Error;

use crate::types::ProviderId;

/// Result type for recommender operations
pub type RecommenderResult<T> = Result<T, RecommenderError>;

/// Failures of a single recommendation call. No call is retried automatically.
#[derive(Error, Debug)]
pub enum RecommenderError {
    #[error("Missing API key for provider {provider}")]
    MissingApiKey { provider: ProviderId },

    #[error("Provider authentication failed: {provider}")]
    AuthenticationFailed { provider: ProviderId },

    #[error("Provider rate limit exceeded: {provider}")]
    RateLimited { provider: ProviderId },

    #[error("Provider unavailable: {provider}")]
    ServiceUnavailable { provider: ProviderId },

    #[error("Provider returned HTTP {status}: {provider}")]
    ServerError { provider: ProviderId, status: u16 },

    #[error("Provider request timed out: {provider}")]
    Timeout { provider: ProviderId },

    #[error("Network error: {message}")]
    NetworkError { message: String },

    #[error("Unparseable recommender output: {message}")]
    Unparseable { message: String },

    #[error("Recommender returned no outfit")]
    EmptyResponse,

    #[error("Recommender referenced unknown wardrobe items: {ids:?}")]
    UnknownItems { ids: Vec<String> },

    #[error("Invalid recommendation request: {message}")]
    InvalidRequest { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

impl RecommenderError {
    /// Transient provider conditions worth retrying later
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            RecommenderError::RateLimited { .. }
                | RecommenderError::ServiceUnavailable { .. }
                | RecommenderError::Timeout { .. }
                | RecommenderError::NetworkError { .. }
                | RecommenderError::ServerError { .. }
        )
    }
}
