//! Offline recommender that assembles outfits from random wardrobe picks

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tokio::sync::Mutex;

use shared::{Category, DayRecommendation, ItemPick, PlanningDay, RecommendationRequest, WardrobeItem};

use crate::error::{RecommenderError, RecommenderResult};
use crate::traits::Recommender;

/// Below this temperature an outer layer is added
const OUTERWEAR_BELOW_CELSIUS: f64 = 15.0;

/// Seedable recommender with no network dependency
pub struct RandomRecommender {
    rng: Mutex<StdRng>,
}

impl RandomRecommender {
    /// Seeded when `seed` is given, otherwise seeded from entropy
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng: Mutex::new(rng) }
    }

    fn compose_day<R: Rng>(rng: &mut R, day: &PlanningDay, wardrobe: &[WardrobeItem]) -> DayRecommendation {
        let of = |category: Category| -> Vec<&WardrobeItem> {
            wardrobe.iter().filter(|item| item.category == category).collect()
        };
        let dresses = of(Category::Dress);
        let tops = of(Category::Top);
        let bottoms = of(Category::Bottom);

        let has_pair = !tops.is_empty() && !bottoms.is_empty();
        let use_dress = match (dresses.is_empty(), has_pair) {
            (false, true) => rng.gen_bool(0.5),
            (false, false) => true,
            _ => false,
        };

        let mut picks = Vec::new();
        if use_dress {
            push_pick(rng, &mut picks, &dresses, "one-piece base");
        } else if has_pair {
            push_pick(rng, &mut picks, &tops, "top");
            push_pick(rng, &mut picks, &bottoms, "bottom");
        } else {
            // No complete base available, lead with whatever restricted piece exists
            let base: Vec<&WardrobeItem> = wardrobe.iter().filter(|item| item.category.is_restricted()).collect();
            push_pick(rng, &mut picks, &base, "base piece");
        }

        push_pick(rng, &mut picks, &of(Category::Shoes), "shoes");

        let cold = day
            .weather
            .as_ref()
            .is_some_and(|weather| weather.temperature < OUTERWEAR_BELOW_CELSIUS);
        if cold {
            push_pick(rng, &mut picks, &of(Category::Outerwear), "layer for the cold");
        }

        if rng.gen_bool(0.5) {
            push_pick(rng, &mut picks, &of(Category::Accessory), "finishing touch");
        }

        if picks.is_empty() {
            push_pick(rng, &mut picks, &wardrobe.iter().collect::<Vec<_>>(), "only available piece");
        }

        DayRecommendation::new(day.date, picks)
    }
}

fn push_pick<R: Rng>(rng: &mut R, picks: &mut Vec<ItemPick>, pool: &[&WardrobeItem], rationale: &str) {
    if let Some(item) = pool.choose(rng) {
        picks.push(ItemPick::new(item.id.clone(), rationale));
    }
}

#[async_trait]
impl Recommender for RandomRecommender {
    async fn recommend(&self, request: &RecommendationRequest) -> RecommenderResult<Vec<DayRecommendation>> {
        if request.days.is_empty() {
            return Err(RecommenderError::InvalidRequest {
                message: "at least one planning day is required".to_string(),
            });
        }
        if request.wardrobe.is_empty() {
            return Err(RecommenderError::EmptyResponse);
        }

        let mut rng = self.rng.lock().await;
        Ok(request
            .days
            .iter()
            .map(|day| Self::compose_day(&mut *rng, day, &request.wardrobe))
            .collect())
    }
}
