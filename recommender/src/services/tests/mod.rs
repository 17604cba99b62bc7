//! Tests for recommender services
//!
//! Provider traffic is served by wiremock; the LLM recommender is driven
//! through a mocked provider client.

pub mod llm;
pub mod provider_client;
pub mod random;
