//! Recommender service implementations

pub mod api_keys;
pub mod llm;
pub mod provider_client;
pub mod random;

#[cfg(test)]
pub mod tests;

pub use api_keys::*;
pub use llm::*;
pub use provider_client::*;
pub use random::*;
