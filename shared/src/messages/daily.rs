//! Daily outfit request and response

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::SharedError;
use crate::types::{empty_if_null, DisplayItem, OutfitId, WeatherSnapshot};

/// How the daily outfit should be sourced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Reuse a curated outfit from history, generating only when history is empty
    Existing,
    /// Ask the recommender for a fresh combination
    New,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Existing => write!(f, "existing"),
            Strategy::New => write!(f, "new"),
        }
    }
}

impl FromStr for Strategy {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "existing" => Ok(Strategy::Existing),
            "new" => Ok(Strategy::New),
            _ => Err(SharedError::InvalidStrategy { input: s.to_string() }),
        }
    }
}

/// Where the main daily outfit came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutfitSource {
    Existing,
    New,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRequest {
    pub strategy: Strategy,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub weather: Option<WeatherSnapshot>,
    /// Day being dressed for; today when absent
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl DailyRequest {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            tags: Vec::new(),
            weather: None,
            date: None,
        }
    }
}

/// An outfit with its items resolved for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedOutfit {
    pub id: OutfitId,
    pub items: Vec<DisplayItem>,
    pub rationale: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyResponse {
    pub source: OutfitSource,
    pub weather: Option<WeatherSnapshot>,
    pub main_outfit: ResolvedOutfit,
    pub alternatives: Vec<ResolvedOutfit>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_request_defaults() {
        let request: DailyRequest = serde_json::from_str(r#"{"strategy": "new"}"#).unwrap();

        assert_eq!(request.strategy, Strategy::New);
        assert!(request.tags.is_empty());
        assert!(request.weather.is_none());
        assert!(request.date.is_none());
    }

    #[test]
    fn test_strategy_from_str() {
        assert_eq!("EXISTING".parse::<Strategy>().unwrap(), Strategy::Existing);
        assert!("reuse".parse::<Strategy>().is_err());
    }

    #[test]
    fn test_daily_response_is_camel_case() {
        let response = DailyResponse {
            source: OutfitSource::Existing,
            weather: None,
            main_outfit: ResolvedOutfit {
                id: OutfitId::from("o1"),
                items: Vec::new(),
                rationale: "pulled from history".to_string(),
            },
            alternatives: Vec::new(),
        };
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["source"], "existing");
        assert_eq!(json["mainOutfit"]["id"], "o1");
        assert!(json["alternatives"].as_array().unwrap().is_empty());
    }
}
