//! Extraction of structured recommendations from raw model output

use serde::Deserialize;

use shared::DayRecommendation;

use crate::error::{RecommenderError, RecommenderResult};

#[derive(Debug, Deserialize)]
struct RecommendationEnvelope {
    #[serde(default)]
    days: Vec<DayRecommendation>,
}

/// Parse a model answer into per-day recommendations
///
/// Accepts bare JSON or JSON wrapped in prose / code fences. Fails with
/// `Unparseable` when no JSON object can be read and `EmptyResponse` when no
/// day carries any item.
pub fn parse_recommendations(content: &str) -> RecommenderResult<Vec<DayRecommendation>> {
    let json = extract_json_object(content).ok_or_else(|| RecommenderError::Unparseable {
        message: "no JSON object in response".to_string(),
    })?;

    let envelope: RecommendationEnvelope =
        serde_json::from_str(json).map_err(|e| RecommenderError::Unparseable { message: e.to_string() })?;

    if envelope.days.iter().all(|day| day.items.is_empty()) {
        return Err(RecommenderError::EmptyResponse);
    }

    Ok(envelope.days)
}

/// Slice from the first `{` to the last `}`
fn extract_json_object(content: &str) -> Option<&str> {
    let start = content.find('{')?;
    let end = content.rfind('}')?;
    (end > start).then(|| &content[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{ItemId, OutfitId};

    #[test]
    fn test_parse_plain_json() {
        let content = r#"{"days":[{"date":"2026-10-16","items":[{"itemId":"top1","rationale":"crisp"},{"itemId":"bottom1","rationale":"neutral"}],"existingOutfitId":"o1","notes":"office"}]}"#;
        let days = parse_recommendations(content).unwrap();

        assert_eq!(days.len(), 1);
        assert_eq!(days[0].item_ids(), vec![ItemId::from("top1"), ItemId::from("bottom1")]);
        assert_eq!(days[0].existing_outfit_id, Some(OutfitId::from("o1")));
        assert_eq!(days[0].notes.as_deref(), Some("office"));
    }

    #[test]
    fn test_parse_fenced_json_with_prose() {
        let content = "Here is your plan:\n```json\n{\"days\":[{\"date\":\"2026-10-16\",\"items\":[{\"item_id\":\"dress1\"}]}]}\n```\nEnjoy!";
        let days = parse_recommendations(content).unwrap();

        assert_eq!(days[0].item_ids(), vec![ItemId::from("dress1")]);
        assert_eq!(days[0].existing_outfit_id, None);
    }

    #[test]
    fn test_garbage_is_unparseable() {
        assert!(matches!(
            parse_recommendations("I could not decide, sorry."),
            Err(RecommenderError::Unparseable { .. })
        ));
        assert!(matches!(
            parse_recommendations("{\"days\": [oops]}"),
            Err(RecommenderError::Unparseable { .. })
        ));
    }

    #[test]
    fn test_empty_days_are_rejected() {
        assert!(matches!(parse_recommendations("{\"days\": []}"), Err(RecommenderError::EmptyResponse)));
        assert!(matches!(
            parse_recommendations(r#"{"days":[{"date":"2026-10-16","items":[]}]}"#),
            Err(RecommenderError::EmptyResponse)
        ));
    }
}
