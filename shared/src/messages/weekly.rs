//! Weekly plan request and response

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{empty_if_null, DisplayItem, OutfitId, PlanningDay};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyRequest {
    /// First day of a generated horizon when `days` is absent; today by default
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Explicit horizon; must not be empty when present
    #[serde(default)]
    pub days: Option<Vec<PlanningDay>>,
    /// Opaque persona data forwarded to the recommender
    #[serde(default)]
    pub persona: Option<serde_json::Value>,
    /// Free-form rule overrides forwarded to the recommender
    #[serde(default, deserialize_with = "empty_if_null")]
    pub rules: Vec<String>,
}

/// Path by which a day's outfit was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentSource {
    /// History match with no restricted item reused
    History,
    /// History match that reuses restricted items worn earlier in the horizon
    Relaxed,
    /// Produced by the recommender (possibly deduplicated onto an existing record)
    Generated,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignedOutfit {
    pub id: OutfitId,
    pub items: Vec<DisplayItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayAssignment {
    pub date: NaiveDate,
    pub outfit_id: OutfitId,
    pub outfit: AssignedOutfit,
    pub rationale: String,
    pub source: AssignmentSource,
}

/// Only resolvable days are present; missing dates are unplanned
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyResponse {
    pub days: Vec<DayAssignment>,
}

impl WeeklyResponse {
    pub fn assignment_for(&self, date: NaiveDate) -> Option<&DayAssignment> {
        self.days.iter().find(|day| day.date == date)
    }
}
