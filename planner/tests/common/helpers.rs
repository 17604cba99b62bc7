//! Planner construction and recommender mock helpers

use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;

use planner::{Catalog, MemoryStore, OutfitStore, Planner, PlannerSettings, UnknownItemPolicy};
use recommender::{MockRecommender, ProviderId, Recommender, RecommenderError};
use shared::{DayRecommendation, ItemId, ItemPick, OutfitRecord, WardrobeItem, WeeklyResponse};

pub struct TestHelpers;

impl TestHelpers {
    pub const SEED: u64 = 7;

    pub fn memory_store(items: Vec<WardrobeItem>, history: Vec<OutfitRecord>) -> Arc<MemoryStore> {
        Arc::new(MemoryStore::with_data(items, history))
    }

    pub fn build_planner<S, R>(store: Arc<S>, recommender: R) -> Planner<S, R>
    where
        S: OutfitStore + ?Sized,
        R: Recommender,
    {
        Planner::new(store, Arc::new(recommender)).with_seed(Self::SEED)
    }

    pub fn rejecting_settings() -> PlannerSettings {
        PlannerSettings {
            unknown_items: UnknownItemPolicy::Reject,
            ..PlannerSettings::default()
        }
    }

    fn picks(items: &[ItemId]) -> Vec<ItemPick> {
        items.iter().map(|id| ItemPick::new(id.clone(), "fits the day")).collect()
    }

    /// Recommender that proposes the same items for every requested day
    pub fn echo_recommender(items: &[&str]) -> MockRecommender {
        let items: Vec<ItemId> = items.iter().map(|id| ItemId::from(*id)).collect();
        let mut recommender = MockRecommender::new();
        recommender.expect_recommend().returning(move |request| {
            Ok(request
                .days
                .iter()
                .map(|day| DayRecommendation::new(day.date, Self::picks(&items)))
                .collect())
        });
        recommender
    }

    /// Recommender that proposes `items` but fails for `failing_date`
    pub fn failing_on(failing_date: NaiveDate, items: &[&str]) -> MockRecommender {
        let items: Vec<ItemId> = items.iter().map(|id| ItemId::from(*id)).collect();
        let mut recommender = MockRecommender::new();
        recommender.expect_recommend().returning(move |request| {
            if request.days.iter().any(|day| day.date == failing_date) {
                return Err(RecommenderError::ServiceUnavailable {
                    provider: ProviderId::OpenAI,
                });
            }
            Ok(request
                .days
                .iter()
                .map(|day| DayRecommendation::new(day.date, Self::picks(&items)))
                .collect())
        });
        recommender
    }

    /// Recommender that must never be called
    pub fn silent_recommender() -> MockRecommender {
        let mut recommender = MockRecommender::new();
        recommender.expect_recommend().times(0);
        recommender
    }

    /// Assert that consecutive history days share no top, bottom or dress
    pub fn assert_strict_days_disjoint(response: &WeeklyResponse, catalog: &Catalog, history: &[OutfitRecord]) {
        let mut worn: HashSet<ItemId> = HashSet::new();
        for day in &response.days {
            let record = history
                .iter()
                .find(|record| record.id == day.outfit_id)
                .expect("assigned outfit comes from history");
            for item in catalog.restricted_items(&record.item_ids) {
                assert!(worn.insert(item.clone()), "{} repeats on {}", item, day.date);
            }
        }
    }
}
