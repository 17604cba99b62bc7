//! Validation and dedup resolution of recommender proposals
//!
//! Recommender output is untrusted. Every proposed id is checked against the
//! wardrobe before a proposal may be matched to history or persisted.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use recommender::{RecommenderError, RecommenderResult};
use shared::{process_warn, DayRecommendation, ItemId, OutfitId, ProcessId};

use super::fingerprint::{canonicalize, Fingerprint, FingerprintIndex};
use super::ledger::Catalog;

/// Treatment of proposed item ids that are not in the wardrobe
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownItemPolicy {
    /// Drop unknown ids; fail only when nothing is left
    #[default]
    Strip,
    /// Fail the whole proposal on any unknown id
    Reject,
}

impl fmt::Display for UnknownItemPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnknownItemPolicy::Strip => write!(f, "strip"),
            UnknownItemPolicy::Reject => write!(f, "reject"),
        }
    }
}

impl FromStr for UnknownItemPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strip" => Ok(UnknownItemPolicy::Strip),
            "reject" => Ok(UnknownItemPolicy::Reject),
            _ => Err(format!("Unknown item policy must be 'strip' or 'reject', got '{s}'")),
        }
    }
}

/// A proposal whose ids all exist in the wardrobe
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedProposal {
    /// Distinct ids in proposal order
    pub item_ids: Vec<ItemId>,
    pub rationale: String,
    pub notes: Option<String>,
    /// Existing outfit the recommender claimed to match
    pub claimed: Option<OutfitId>,
    /// Unknown ids removed under the strip policy
    pub stripped: Vec<ItemId>,
}

impl ValidatedProposal {
    pub fn fingerprint(&self) -> Fingerprint {
        canonicalize(&self.item_ids)
    }
}

/// Where a validated proposal lands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Same item set as this live record
    Existing(OutfitId),
    /// No live record holds this item set
    New,
}

/// Check a recommendation against the wardrobe under `policy`
pub fn validate_proposal(
    recommendation: &DayRecommendation,
    catalog: &Catalog,
    policy: UnknownItemPolicy,
) -> RecommenderResult<ValidatedProposal> {
    let mut seen = HashSet::new();
    let distinct: Vec<ItemId> = recommendation
        .items
        .iter()
        .map(|pick| pick.item_id.clone())
        .filter(|id| seen.insert(id.clone()))
        .collect();
    if distinct.is_empty() {
        return Err(RecommenderError::EmptyResponse);
    }

    let (known, unknown): (Vec<ItemId>, Vec<ItemId>) = distinct.into_iter().partition(|id| catalog.contains(id));

    if !unknown.is_empty() {
        let unknown_ids: Vec<String> = unknown.iter().map(ToString::to_string).collect();
        if policy == UnknownItemPolicy::Reject || known.is_empty() {
            return Err(RecommenderError::UnknownItems { ids: unknown_ids });
        }
        process_warn!(
            ProcessId::current(),
            "⚠️ Dropping unknown items from proposal for {}: {}",
            recommendation.date,
            unknown_ids.join(", ")
        );
    }

    Ok(ValidatedProposal {
        rationale: summarize_rationale(recommendation, &known),
        item_ids: known,
        notes: recommendation.notes.clone().filter(|n| !n.trim().is_empty()),
        claimed: recommendation.existing_outfit_id.clone(),
        stripped: unknown,
    })
}

/// Match a proposal against history
///
/// A claimed existing id is honoured only when that record's fingerprint is
/// the proposal's fingerprint; otherwise the claim is ignored.
pub fn resolve_proposal(proposal: &ValidatedProposal, index: &FingerprintIndex) -> Resolution {
    let fingerprint = proposal.fingerprint();

    if let Some(claimed) = &proposal.claimed {
        if index.fingerprint_of(claimed) == Some(&fingerprint) {
            return Resolution::Existing(claimed.clone());
        }
    }

    match index.lookup(&fingerprint) {
        Some(id) => Resolution::Existing(id.clone()),
        None => Resolution::New,
    }
}

fn summarize_rationale(recommendation: &DayRecommendation, kept: &[ItemId]) -> String {
    if let Some(notes) = recommendation.notes.as_deref().filter(|n| !n.trim().is_empty()) {
        return notes.trim().to_string();
    }
    let reasons: Vec<String> = recommendation
        .items
        .iter()
        .filter(|pick| kept.contains(&pick.item_id) && !pick.rationale.trim().is_empty())
        .map(|pick| format!("{}: {}", pick.item_id, pick.rationale.trim()))
        .collect();
    if reasons.is_empty() {
        "generated for the day".to_string()
    } else {
        reasons.join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::{Category, ItemPick, OutfitRecord, WardrobeItem};

    fn catalog() -> Catalog {
        Catalog::from_items(&[
            WardrobeItem::new("top1", Category::Top),
            WardrobeItem::new("bottom1", Category::Bottom),
            WardrobeItem::new("shoe1", Category::Shoes),
        ])
    }

    fn recommendation(items: &[&str]) -> DayRecommendation {
        DayRecommendation::new(
            NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
            items.iter().map(|id| ItemPick::new(*id, "")).collect(),
        )
    }

    #[test]
    fn test_strip_drops_unknown_items() {
        let proposal =
            validate_proposal(&recommendation(&["top1", "ghost", "bottom1", "top1"]), &catalog(), UnknownItemPolicy::Strip)
                .unwrap();

        assert_eq!(proposal.item_ids, vec![ItemId::from("top1"), ItemId::from("bottom1")]);
        assert_eq!(proposal.stripped, vec![ItemId::from("ghost")]);
        assert_eq!(proposal.rationale, "generated for the day");
    }

    #[test]
    fn test_strip_fails_when_nothing_is_left() {
        let result = validate_proposal(&recommendation(&["ghost"]), &catalog(), UnknownItemPolicy::Strip);
        assert!(matches!(result, Err(RecommenderError::UnknownItems { ids }) if ids == vec!["ghost".to_string()]));
    }

    #[test]
    fn test_reject_fails_on_any_unknown_item() {
        let result = validate_proposal(&recommendation(&["top1", "ghost"]), &catalog(), UnknownItemPolicy::Reject);
        assert!(matches!(result, Err(RecommenderError::UnknownItems { .. })));
    }

    #[test]
    fn test_empty_proposal() {
        let result = validate_proposal(&recommendation(&[]), &catalog(), UnknownItemPolicy::Strip);
        assert!(matches!(result, Err(RecommenderError::EmptyResponse)));
    }

    #[test]
    fn test_rationale_prefers_notes() {
        let mut day = recommendation(&["top1"]);
        day.items[0].rationale = "crisp".to_string();
        let proposal = validate_proposal(&day, &catalog(), UnknownItemPolicy::Strip).unwrap();
        assert_eq!(proposal.rationale, "top1: crisp");

        day.notes = Some("Office ready".to_string());
        let proposal = validate_proposal(&day, &catalog(), UnknownItemPolicy::Strip).unwrap();
        assert_eq!(proposal.rationale, "Office ready");
    }

    #[test]
    fn test_resolution_reuses_matching_fingerprint() {
        let index = FingerprintIndex::from_records(&[OutfitRecord::new(
            "o1",
            vec![ItemId::from("top1"), ItemId::from("bottom1")],
        )]);

        let proposal =
            validate_proposal(&recommendation(&["bottom1", "top1"]), &catalog(), UnknownItemPolicy::Strip).unwrap();
        assert_eq!(resolve_proposal(&proposal, &index), Resolution::Existing(OutfitId::from("o1")));

        let proposal = validate_proposal(&recommendation(&["top1"]), &catalog(), UnknownItemPolicy::Strip).unwrap();
        assert_eq!(resolve_proposal(&proposal, &index), Resolution::New);
    }

    #[test]
    fn test_false_claim_is_ignored() {
        let index = FingerprintIndex::from_records(&[OutfitRecord::new(
            "o1",
            vec![ItemId::from("top1"), ItemId::from("bottom1")],
        )]);
        let mut day = recommendation(&["top1", "shoe1"]);
        day.existing_outfit_id = Some(OutfitId::from("o1"));

        let proposal = validate_proposal(&day, &catalog(), UnknownItemPolicy::Strip).unwrap();
        assert_eq!(resolve_proposal(&proposal, &index), Resolution::New);
    }
}
