//! Prompt construction for LLM-backed recommendations

use std::fmt::Write;

use shared::{PlanningDay, RecommendationRequest, WardrobeItem};

/// Builds stylist prompts with bounded context lists
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    /// Maximum wardrobe lines included in the prompt
    max_wardrobe_items: usize,

    /// Maximum existing outfits listed as dedup hints
    max_existing_outfits: usize,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptBuilder {
    pub fn new() -> Self {
        Self {
            max_wardrobe_items: 300,
            max_existing_outfits: 50,
        }
    }

    /// Override context limits
    pub fn with_limits(mut self, max_wardrobe_items: usize, max_existing_outfits: usize) -> Self {
        self.max_wardrobe_items = max_wardrobe_items;
        self.max_existing_outfits = max_existing_outfits;
        self
    }

    /// Render the full prompt for a request
    pub fn build(&self, request: &RecommendationRequest) -> String {
        let persona = request
            .persona
            .as_ref()
            .map(|p| p.to_string())
            .unwrap_or_else(|| "None".to_string());

        let days: Vec<String> = request.days.iter().map(describe_day).collect();

        let wardrobe_total = request.wardrobe.len();
        let mut wardrobe: Vec<String> = request
            .wardrobe
            .iter()
            .take(self.max_wardrobe_items)
            .map(describe_item)
            .collect();
        if wardrobe_total > self.max_wardrobe_items {
            wardrobe.push(format!("(showing {} of {} items)", self.max_wardrobe_items, wardrobe_total));
        }

        let existing_total = request.existing_outfits.len();
        let existing = if existing_total == 0 {
            "None".to_string()
        } else {
            let mut lines: Vec<String> = request
                .existing_outfits
                .iter()
                .take(self.max_existing_outfits)
                .map(|outfit| {
                    let ids: Vec<&str> = outfit.item_ids.iter().map(|id| id.as_str()).collect();
                    format!("- {}: {}", outfit.id, ids.join(", "))
                })
                .collect();
            if existing_total > self.max_existing_outfits {
                lines.push(format!(
                    "(showing {} most recent of {} outfits)",
                    self.max_existing_outfits, existing_total
                ));
            }
            lines.join("\n")
        };

        let rules = if request.rules.is_empty() {
            "None".to_string()
        } else {
            request
                .rules
                .iter()
                .map(|rule| format!("- {rule}"))
                .collect::<Vec<_>>()
                .join("\n")
        };

        format!(
            r#"You are a personal stylist. Build exactly one outfit for each day below.

Persona: {persona}

Days:
{days}

Wardrobe (id | category | colors | seasons | styles):
{wardrobe}

Existing outfits (id: item ids):
{existing}

Rules:
{rules}

CRITICAL REQUIREMENTS:
- Use ONLY item ids from the wardrobe list above
- Each outfit needs either a dress or a top with a bottom
- If an existing outfit fits a day exactly, set existingOutfitId to its id
- Respond with JSON only, no prose, in exactly this shape:
{{"days":[{{"date":"YYYY-MM-DD","items":[{{"itemId":"...","rationale":"..."}}],"existingOutfitId":null,"notes":"..."}}]}}"#,
            days = days.join("\n"),
            wardrobe = wardrobe.join("\n"),
        )
    }
}

fn describe_day(day: &PlanningDay) -> String {
    let mut line = format!("- {}", day.date);
    match &day.weather {
        Some(weather) => {
            let _ = write!(line, " | weather: {:.1}°C, {}", weather.temperature, weather.condition);
        }
        None => line.push_str(" | weather: unknown"),
    }
    if !day.events.is_empty() {
        let events: Vec<String> = day
            .events
            .iter()
            .map(|event| match &event.title {
                Some(title) => format!("{title} ({})", event.dress_code),
                None => event.dress_code.clone(),
            })
            .collect();
        let _ = write!(line, " | events: {}", events.join(", "));
    }
    line
}

fn describe_item(item: &WardrobeItem) -> String {
    format!(
        "- {} | {} | {} | {} | {}",
        item.id,
        item.category,
        or_dash(&item.tags.colors),
        or_dash(&item.tags.seasons),
        or_dash(&item.tags.styles)
    )
}

fn or_dash(values: &[String]) -> String {
    if values.is_empty() {
        "-".to_string()
    } else {
        values.join(",")
    }
}
