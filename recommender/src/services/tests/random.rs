//! Tests for RandomRecommender

use chrono::NaiveDate;

use shared::{Category, ItemId, PlanningDay, RecommendationRequest, WardrobeItem, WeatherSnapshot};

use crate::error::RecommenderError;
use crate::services::random::RandomRecommender;
use crate::traits::Recommender;

fn wardrobe() -> Vec<WardrobeItem> {
    vec![
        WardrobeItem::new("top1", Category::Top),
        WardrobeItem::new("top2", Category::Top),
        WardrobeItem::new("bottom1", Category::Bottom),
        WardrobeItem::new("shoe1", Category::Shoes),
        WardrobeItem::new("coat1", Category::Outerwear),
    ]
}

fn day(offset: u32, temperature: f64) -> PlanningDay {
    PlanningDay::new(NaiveDate::from_ymd_opt(2026, 10, 16 + offset).unwrap()).with_weather(WeatherSnapshot {
        temperature,
        condition: "clear".to_string(),
    })
}

#[tokio::test]
async fn test_one_recommendation_per_day() {
    let recommender = RandomRecommender::new(Some(7));
    let request = RecommendationRequest {
        days: vec![day(0, 20.0), day(1, 20.0), day(2, 20.0)],
        wardrobe: wardrobe(),
        ..RecommendationRequest::default()
    };

    let days = recommender.recommend(&request).await.unwrap();

    assert_eq!(days.len(), 3);
    for (recommendation, planned) in days.iter().zip(&request.days) {
        assert_eq!(recommendation.date, planned.date);
        let ids = recommendation.item_ids();
        assert!(ids.contains(&ItemId::from("bottom1")));
        assert!(ids.contains(&ItemId::from("shoe1")));
        assert!(!ids.contains(&ItemId::from("coat1")));
    }
}

#[tokio::test]
async fn test_cold_days_get_outerwear() {
    let recommender = RandomRecommender::new(Some(1));
    let request = RecommendationRequest {
        days: vec![day(0, 4.0)],
        wardrobe: wardrobe(),
        ..RecommendationRequest::default()
    };

    let days = recommender.recommend(&request).await.unwrap();
    assert!(days[0].item_ids().contains(&ItemId::from("coat1")));
}

#[tokio::test]
async fn test_same_seed_same_picks() {
    let request = RecommendationRequest {
        days: vec![day(0, 20.0), day(1, 10.0)],
        wardrobe: wardrobe(),
        ..RecommendationRequest::default()
    };

    let first = RandomRecommender::new(Some(99)).recommend(&request).await.unwrap();
    let second = RandomRecommender::new(Some(99)).recommend(&request).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_empty_wardrobe_is_empty_response() {
    let recommender = RandomRecommender::new(Some(3));
    let request = RecommendationRequest {
        days: vec![day(0, 20.0)],
        ..RecommendationRequest::default()
    };

    assert!(matches!(
        recommender.recommend(&request).await,
        Err(RecommenderError::EmptyResponse)
    ));
}
