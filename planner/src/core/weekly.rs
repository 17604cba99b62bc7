//! Horizon resolution and history matching for the weekly allocator

use std::collections::HashSet;

use chrono::{Days, NaiveDate};

use shared::{AssignmentSource, OutfitRecord, PlanningDay, WeeklyRequest};

use super::daily::HISTORY_RATIONALE;
use super::ledger::{Catalog, HorizonLedger};
use crate::error::{PlannerError, PlannerResult};

/// How a history record was matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// No restricted item was worn earlier in the horizon
    Strict,
    /// Restricted items repeat
    Relaxed,
}

impl MatchKind {
    pub fn source(self) -> AssignmentSource {
        match self {
            MatchKind::Strict => AssignmentSource::History,
            MatchKind::Relaxed => AssignmentSource::Relaxed,
        }
    }

    pub fn rationale(self) -> String {
        match self {
            MatchKind::Strict => HISTORY_RATIONALE.to_string(),
            MatchKind::Relaxed => format!("{HISTORY_RATIONALE}; repeats pieces worn earlier this week"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryMatch {
    /// Index into the snapshot
    pub index: usize,
    pub kind: MatchKind,
}

/// Validate and order the days of a weekly request
///
/// Explicit days must be non-empty and carry distinct dates. Without explicit
/// days, `horizon_days` consecutive days starting at `startDate` (or `today`)
/// are planned.
pub fn resolve_horizon(request: &WeeklyRequest, today: NaiveDate, horizon_days: u32) -> PlannerResult<Vec<PlanningDay>> {
    match &request.days {
        Some(days) => {
            if days.is_empty() {
                return Err(PlannerError::validation("days", "must contain at least one day"));
            }
            let mut seen = HashSet::new();
            if let Some(duplicate) = days.iter().find(|day| !seen.insert(day.date)) {
                return Err(PlannerError::validation(
                    "days",
                    format!("date {} appears more than once", duplicate.date),
                ));
            }
            let mut days = days.clone();
            days.sort_by_key(|day| day.date);
            Ok(days)
        }
        None => {
            if horizon_days == 0 {
                return Err(PlannerError::config("horizon length must be at least one day"));
            }
            let start = request.start_date.unwrap_or(today);
            (0..u64::from(horizon_days))
                .map(|offset| {
                    start
                        .checked_add_days(Days::new(offset))
                        .map(PlanningDay::new)
                        .ok_or_else(|| PlannerError::validation("startDate", "horizon runs past the supported calendar"))
                })
                .collect()
        }
    }
}

/// First-fit history match for one day
///
/// Only records not yet used in the horizon are considered, in snapshot
/// order. Weather and events are not consulted.
pub fn select_from_history(snapshot: &[OutfitRecord], ledger: &HorizonLedger, catalog: &Catalog) -> Option<HistoryMatch> {
    let unused = || {
        snapshot
            .iter()
            .enumerate()
            .filter(|(_, record)| !ledger.is_used(&record.id))
    };

    unused()
        .find(|(_, record)| ledger.restricted_free(record, catalog))
        .map(|(index, _)| HistoryMatch {
            index,
            kind: MatchKind::Strict,
        })
        .or_else(|| {
            unused().next().map(|(index, _)| HistoryMatch {
                index,
                kind: MatchKind::Relaxed,
            })
        })
}

/// Rule asking the recommender to stay clear of consumed items
pub fn avoidance_rule(ledger: &HorizonLedger) -> Option<String> {
    let consumed: Vec<&str> = ledger.consumed_items().map(|id| id.as_str()).collect();
    if consumed.is_empty() {
        None
    } else {
        Some(format!(
            "Avoid these tops, bottoms and dresses already worn earlier this week: {}",
            consumed.join(", ")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{Category, ItemId, WardrobeItem};

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, day).unwrap()
    }

    fn catalog() -> Catalog {
        Catalog::from_items(&[
            WardrobeItem::new("top1", Category::Top),
            WardrobeItem::new("top2", Category::Top),
            WardrobeItem::new("bottom1", Category::Bottom),
            WardrobeItem::new("shoe1", Category::Shoes),
        ])
    }

    fn record(id: &str, items: &[&str]) -> OutfitRecord {
        OutfitRecord::new(id, items.iter().map(|i| ItemId::from(*i)).collect())
    }

    #[test]
    fn test_default_horizon_starts_today() {
        let days = resolve_horizon(&WeeklyRequest::default(), date(16), 7).unwrap();

        assert_eq!(days.len(), 7);
        assert_eq!(days[0].date, date(16));
        assert_eq!(days[6].date, date(22));
    }

    #[test]
    fn test_horizon_from_start_date() {
        let request = WeeklyRequest {
            start_date: Some(date(20)),
            ..WeeklyRequest::default()
        };
        let days = resolve_horizon(&request, date(16), 3).unwrap();
        assert_eq!(days.iter().map(|d| d.date).collect::<Vec<_>>(), vec![date(20), date(21), date(22)]);
    }

    #[test]
    fn test_explicit_days_are_sorted() {
        let request = WeeklyRequest {
            days: Some(vec![PlanningDay::new(date(18)), PlanningDay::new(date(16))]),
            ..WeeklyRequest::default()
        };
        let days = resolve_horizon(&request, date(1), 7).unwrap();
        assert_eq!(days[0].date, date(16));
        assert_eq!(days[1].date, date(18));
    }

    #[test]
    fn test_empty_or_duplicate_days_are_invalid() {
        let empty = WeeklyRequest {
            days: Some(Vec::new()),
            ..WeeklyRequest::default()
        };
        assert!(matches!(
            resolve_horizon(&empty, date(1), 7),
            Err(PlannerError::Validation { ref field, .. }) if field == "days"
        ));

        let duplicate = WeeklyRequest {
            days: Some(vec![PlanningDay::new(date(16)), PlanningDay::new(date(16))]),
            ..WeeklyRequest::default()
        };
        assert!(matches!(resolve_horizon(&duplicate, date(1), 7), Err(PlannerError::Validation { .. })));
    }

    #[test]
    fn test_strict_match_skips_consumed_restricted_items() {
        let catalog = catalog();
        let snapshot = vec![
            record("o1", &["top1", "bottom1"]),
            record("o2", &["top1", "shoe1"]),
            record("o3", &["top2", "shoe1"]),
        ];
        let ledger = HorizonLedger::new().with_assignment(&snapshot[0].id, &snapshot[0].item_ids, &catalog);

        let found = select_from_history(&snapshot, &ledger, &catalog).unwrap();
        assert_eq!(found, HistoryMatch { index: 2, kind: MatchKind::Strict });
    }

    #[test]
    fn test_relaxed_match_when_everything_collides() {
        let catalog = catalog();
        let snapshot = vec![record("o1", &["top1", "bottom1"]), record("o2", &["top1"])];
        let ledger = HorizonLedger::new().with_assignment(&snapshot[0].id, &snapshot[0].item_ids, &catalog);

        let found = select_from_history(&snapshot, &ledger, &catalog).unwrap();
        assert_eq!(found, HistoryMatch { index: 1, kind: MatchKind::Relaxed });
        assert_eq!(found.kind.source(), AssignmentSource::Relaxed);
    }

    #[test]
    fn test_no_match_once_pool_is_used() {
        let catalog = catalog();
        let snapshot = vec![record("o1", &["top1", "bottom1"])];
        let ledger = HorizonLedger::new().with_assignment(&snapshot[0].id, &snapshot[0].item_ids, &catalog);

        assert!(select_from_history(&snapshot, &ledger, &catalog).is_none());
    }

    #[test]
    fn test_avoidance_rule_lists_consumed_items() {
        let catalog = catalog();
        let o1 = record("o1", &["top1", "bottom1", "shoe1"]);
        assert!(avoidance_rule(&HorizonLedger::new()).is_none());

        let ledger = HorizonLedger::new().with_assignment(&o1.id, &o1.item_ids, &catalog);
        let rule = avoidance_rule(&ledger).unwrap();
        assert!(rule.ends_with("bottom1, top1"));
    }
}
