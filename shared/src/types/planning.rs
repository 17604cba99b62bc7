//! Planning day context: date, weather and events

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::empty_if_null;

/// Weather observed or forecast for a day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Degrees Celsius
    pub temperature: f64,
    pub condition: String,
}

/// Calendar event with a dress-code label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default)]
    pub title: Option<String>,
    pub dress_code: String,
}

/// One day of a planning horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningDay {
    pub date: NaiveDate,
    #[serde(default)]
    pub weather: Option<WeatherSnapshot>,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub events: Vec<Event>,
}

impl PlanningDay {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            weather: None,
            events: Vec::new(),
        }
    }

    pub fn with_weather(mut self, weather: WeatherSnapshot) -> Self {
        self.weather = Some(weather);
        self
    }

    pub fn with_event(mut self, event: Event) -> Self {
        self.events.push(event);
        self
    }
}
