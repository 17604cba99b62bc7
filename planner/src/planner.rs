//! Daily selector and weekly allocator over a store and a recommender

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::Mutex;

use recommender::{Recommender, RecommenderError};
use shared::{
    process_debug, process_info, process_warn, AssignedOutfit, AssignmentSource, DailyRequest, DailyResponse, DayAssignment,
    DayRecommendation, DisplayItem, ItemId, NewOutfit, OutfitId, OutfitRecord, OutfitSource, PlanningDay, ProcessId,
    RecommendationRequest, ResolvedOutfit, Strategy, WardrobeItem, WeeklyRequest, WeeklyResponse,
};

use crate::core::{
    avoidance_rule, canonicalize, pick_alternatives, pick_from_history, resolve_horizon, resolve_proposal,
    select_from_history, validate_proposal, Catalog, FingerprintIndex, HorizonLedger, Resolution, ValidatedProposal,
    HISTORY_RATIONALE,
};
use crate::error::{DailyOutfitError, PlannerResult};
use crate::traits::OutfitStore;
use crate::types::{DeletionReport, PlannerSettings};

/// Planner over trait objects, as used by the binaries
pub type DynPlanner = Planner<dyn OutfitStore, dyn Recommender>;

/// Outfit planner
///
/// Every request reads one outfit snapshot up front and never refreshes it.
/// The random source is the only state shared between requests.
pub struct Planner<S: ?Sized, R: ?Sized> {
    store: Arc<S>,
    recommender: Arc<R>,
    rng: Mutex<StdRng>,
    settings: PlannerSettings,
}

/// One resolved weekly day before item resolution
struct Choice {
    date: NaiveDate,
    outfit_id: OutfitId,
    item_ids: Vec<ItemId>,
    rationale: String,
    source: AssignmentSource,
}

/// Horizon-wide context shared by the generation fallback
struct GenerationContext<'a> {
    request: &'a WeeklyRequest,
    wardrobe: &'a [WardrobeItem],
    catalog: &'a Catalog,
}

impl<S, R> Planner<S, R>
where
    S: OutfitStore + ?Sized,
    R: Recommender + ?Sized,
{
    pub fn new(store: Arc<S>, recommender: Arc<R>) -> Self {
        Self {
            store,
            recommender,
            rng: Mutex::new(StdRng::from_entropy()),
            settings: PlannerSettings::default(),
        }
    }

    /// Deterministic random picks
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    pub fn with_settings(mut self, settings: PlannerSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &PlannerSettings {
        &self.settings
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Current outfit history
    pub async fn list_outfits(&self) -> PlannerResult<Vec<OutfitRecord>> {
        Ok(self.store.list_outfits().await?)
    }

    /// Delete a wardrobe item and cascade into outfit history
    pub async fn delete_item(&self, id: &ItemId) -> PlannerResult<DeletionReport> {
        let report = self.store.delete_item(id).await?;
        process_info!(
            ProcessId::current(),
            "🗑️ Deleted item {}: {} outfit(s) pruned, {} purged",
            id,
            report.pruned_outfits.len(),
            report.purged_outfits.len()
        );
        Ok(report)
    }

    /// Resolve one day's outfit
    pub async fn plan_daily(&self, request: DailyRequest) -> PlannerResult<DailyResponse> {
        let snapshot = self.store.list_outfits().await?;

        if request.strategy == Strategy::Existing {
            let pick = {
                let mut rng = self.rng.lock().await;
                pick_from_history(&mut *rng, &snapshot, self.settings.max_alternatives)
            };
            if let Some(pick) = pick {
                let main = &snapshot[pick.main];
                let alternatives: Vec<&OutfitRecord> = pick.alternatives.iter().map(|&i| &snapshot[i]).collect();
                process_debug!(
                    ProcessId::current(),
                    "📚 Daily pick {} from {} stored outfits",
                    main.id,
                    snapshot.len()
                );
                return self
                    .daily_response(
                        OutfitSource::Existing,
                        request,
                        main.id.clone(),
                        &main.item_ids,
                        HISTORY_RATIONALE.to_string(),
                        &alternatives,
                    )
                    .await;
            }
            process_debug!(ProcessId::current(), "📭 No stored outfits, generating a new one");
        }

        self.plan_daily_new(request, snapshot).await
    }

    async fn plan_daily_new(&self, request: DailyRequest, snapshot: Vec<OutfitRecord>) -> PlannerResult<DailyResponse> {
        let wardrobe = self.store.list_items().await?;
        if wardrobe.is_empty() {
            return Err(DailyOutfitError::EmptyWardrobe.into());
        }

        let date = request.date.unwrap_or_else(today);
        let mut day = PlanningDay::new(date);
        if let Some(weather) = &request.weather {
            day = day.with_weather(weather.clone());
        }

        let recommendation_request = RecommendationRequest {
            persona: None,
            days: vec![day],
            wardrobe: wardrobe.clone(),
            existing_outfits: snapshot.iter().rev().map(OutfitRecord::summary).collect(),
            rules: request.tags.clone(),
        };
        let recommendations = self
            .recommender
            .recommend(&recommendation_request)
            .await
            .map_err(DailyOutfitError::from)?;
        let recommendation =
            pick_for_date(recommendations, date).ok_or(DailyOutfitError::NoRecommendation { date })?;

        let catalog = Catalog::from_items(&wardrobe);
        let proposal = validate_proposal(&recommendation, &catalog, self.settings.unknown_items)
            .map_err(DailyOutfitError::from)?;
        let index = FingerprintIndex::from_records(&snapshot);
        let record = self.materialize(&proposal, &index, &snapshot, date).await?;

        let alternative_indices = {
            let mut rng = self.rng.lock().await;
            pick_alternatives(&mut *rng, &snapshot, Some(&record.id), self.settings.max_alternatives)
        };
        let alternatives: Vec<&OutfitRecord> = alternative_indices.iter().map(|&i| &snapshot[i]).collect();

        self.daily_response(OutfitSource::New, request, record.id, &record.item_ids, proposal.rationale, &alternatives)
            .await
    }

    async fn daily_response(
        &self,
        source: OutfitSource,
        request: DailyRequest,
        main_id: OutfitId,
        main_items: &[ItemId],
        rationale: String,
        alternatives: &[&OutfitRecord],
    ) -> PlannerResult<DailyResponse> {
        let mut item_sets: Vec<&[ItemId]> = vec![main_items];
        item_sets.extend(alternatives.iter().map(|record| record.item_ids.as_slice()));
        let mut displayed = self.display_items(&item_sets).await?.into_iter();

        let main_outfit = ResolvedOutfit {
            id: main_id,
            items: displayed.next().unwrap_or_default(),
            rationale,
        };
        let alternatives = alternatives
            .iter()
            .zip(displayed)
            .map(|(record, items)| ResolvedOutfit {
                id: record.id.clone(),
                items,
                rationale: HISTORY_RATIONALE.to_string(),
            })
            .collect();

        Ok(DailyResponse {
            source,
            weather: request.weather,
            main_outfit,
            alternatives,
        })
    }

    /// Resolve a multi-day horizon
    ///
    /// Days are processed in date order. A day that neither history nor the
    /// recommender can satisfy is left out of the response; a store failure
    /// aborts the whole plan.
    pub async fn plan_weekly(&self, request: WeeklyRequest) -> PlannerResult<WeeklyResponse> {
        let days = resolve_horizon(&request, today(), self.settings.horizon_days)?;

        let snapshot = self.store.list_outfits().await?;
        let wardrobe = self.store.list_items().await?;
        let catalog = Catalog::from_items(&wardrobe);
        let mut index = FingerprintIndex::from_records(&snapshot);

        // Snapshot first, then records generated during this horizon
        let pool_len = snapshot.len();
        let mut known = snapshot;
        let context = GenerationContext {
            request: &request,
            wardrobe: &wardrobe,
            catalog: &catalog,
        };

        let mut ledger = HorizonLedger::new();
        let mut choices: Vec<Choice> = Vec::with_capacity(days.len());

        for day in &days {
            let choice = match select_from_history(&known[..pool_len], &ledger, &catalog) {
                Some(found) => {
                    let record = &known[found.index];
                    Some(Choice {
                        date: day.date,
                        outfit_id: record.id.clone(),
                        item_ids: record.item_ids.clone(),
                        rationale: found.kind.rationale(),
                        source: found.kind.source(),
                    })
                }
                None => self.generate_for_day(day, &context, &ledger, &mut index, &mut known).await?,
            };

            match choice {
                Some(choice) => {
                    ledger = ledger.with_assignment(&choice.outfit_id, &choice.item_ids, &catalog);
                    choices.push(choice);
                }
                None => process_warn!(ProcessId::current(), "📅 No outfit for {}, leaving the day unplanned", day.date),
            }
        }

        let item_sets: Vec<&[ItemId]> = choices.iter().map(|choice| choice.item_ids.as_slice()).collect();
        let displayed = self.display_items(&item_sets).await?;

        let assignments: Vec<DayAssignment> = choices
            .into_iter()
            .zip(displayed)
            .map(|(choice, items)| DayAssignment {
                date: choice.date,
                outfit_id: choice.outfit_id.clone(),
                outfit: AssignedOutfit {
                    id: choice.outfit_id,
                    items,
                },
                rationale: choice.rationale,
                source: choice.source,
            })
            .collect();

        process_info!(
            ProcessId::current(),
            "🗓️ Planned {} of {} day(s), {} outfit(s) used",
            assignments.len(),
            days.len(),
            ledger.used_count()
        );
        Ok(WeeklyResponse { days: assignments })
    }

    /// Recommender fallback for one weekly day
    ///
    /// Recommender failures and rejected proposals leave the day unplanned;
    /// store failures propagate.
    async fn generate_for_day(
        &self,
        day: &PlanningDay,
        context: &GenerationContext<'_>,
        ledger: &HorizonLedger,
        index: &mut FingerprintIndex,
        known: &mut Vec<OutfitRecord>,
    ) -> PlannerResult<Option<Choice>> {
        if context.wardrobe.is_empty() {
            process_debug!(ProcessId::current(), "👗 Wardrobe is empty, cannot generate for {}", day.date);
            return Ok(None);
        }

        let mut rules = context.request.rules.clone();
        rules.extend(avoidance_rule(ledger));

        let recommendation_request = RecommendationRequest {
            persona: context.request.persona.clone(),
            days: vec![day.clone()],
            wardrobe: context.wardrobe.to_vec(),
            existing_outfits: known.iter().rev().map(OutfitRecord::summary).collect(),
            rules,
        };

        let proposal = match self.propose(&recommendation_request, day.date, context.catalog).await {
            Ok(proposal) => proposal,
            Err(e) => {
                process_warn!(ProcessId::current(), "🤖 Generation for {} failed: {}", day.date, e);
                return Ok(None);
            }
        };

        let record = self.materialize(&proposal, index, known, day.date).await?;
        if index.insert(record.id.clone(), canonicalize(&record.item_ids)) {
            known.push(record.clone());
        }

        Ok(Some(Choice {
            date: day.date,
            outfit_id: record.id,
            item_ids: record.item_ids,
            rationale: proposal.rationale,
            source: AssignmentSource::Generated,
        }))
    }

    async fn propose(
        &self,
        request: &RecommendationRequest,
        date: NaiveDate,
        catalog: &Catalog,
    ) -> Result<ValidatedProposal, RecommenderError> {
        let recommendations = self.recommender.recommend(request).await?;
        let recommendation = pick_for_date(recommendations, date).ok_or(RecommenderError::EmptyResponse)?;
        validate_proposal(&recommendation, catalog, self.settings.unknown_items)
    }

    /// Reuse the record holding the proposal's item set, or persist a new one
    async fn materialize(
        &self,
        proposal: &ValidatedProposal,
        index: &FingerprintIndex,
        known: &[OutfitRecord],
        date: NaiveDate,
    ) -> PlannerResult<OutfitRecord> {
        if let Resolution::Existing(id) = resolve_proposal(proposal, index) {
            if let Some(record) = known.iter().find(|record| record.id == id) {
                process_debug!(ProcessId::current(), "♻️ Proposal for {} matches outfit {}", date, id);
                return Ok(record.clone());
            }
        }

        let outfit = NewOutfit {
            item_ids: proposal.item_ids.clone(),
            tags: Some(serde_json::json!({ "source": "generated", "date": date })),
            notes: proposal.notes.clone(),
            name: None,
        };
        let record = self.store.insert_outfit(outfit).await?;
        process_info!(ProcessId::current(), "✨ Stored outfit {} for {}", record.id, date);
        Ok(record)
    }

    /// Display items for several item lists with a single store lookup
    ///
    /// Item order is kept; ids the store no longer knows are dropped.
    async fn display_items(&self, item_sets: &[&[ItemId]]) -> PlannerResult<Vec<Vec<DisplayItem>>> {
        let mut seen = HashSet::new();
        let unique: Vec<ItemId> = item_sets
            .iter()
            .flat_map(|set| set.iter())
            .filter(|id| seen.insert(*id))
            .cloned()
            .collect();
        let resolved: HashMap<ItemId, DisplayItem> = self.store.resolve_items(&unique).await?;

        Ok(item_sets
            .iter()
            .map(|set| set.iter().filter_map(|id| resolved.get(id).cloned()).collect())
            .collect())
    }
}

/// The recommendation for `date`, or the first one when none carries that date
fn pick_for_date(recommendations: Vec<DayRecommendation>, date: NaiveDate) -> Option<DayRecommendation> {
    let mut recommendations = recommendations.into_iter();
    let first = recommendations.next()?;
    if first.date == date {
        return Some(first);
    }
    Some(recommendations.find(|r| r.date == date).unwrap_or(first))
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
