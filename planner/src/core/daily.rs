//! Random history picks for the daily selector

use rand::seq::SliceRandom;
use rand::Rng;

use shared::{OutfitId, OutfitRecord};

/// Rationale attached to outfits reused from history
pub const HISTORY_RATIONALE: &str = "pulled from history";

/// Main pick plus alternatives, as indices into the snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryPick {
    pub main: usize,
    pub alternatives: Vec<usize>,
}

/// Uniform random main outfit and up to `max_alternatives` distinct others
pub fn pick_from_history<R: Rng + ?Sized>(
    rng: &mut R,
    snapshot: &[OutfitRecord],
    max_alternatives: usize,
) -> Option<HistoryPick> {
    if snapshot.is_empty() {
        return None;
    }
    let main = rng.gen_range(0..snapshot.len());
    let alternatives = pick_alternatives(rng, snapshot, Some(&snapshot[main].id), max_alternatives);
    Some(HistoryPick { main, alternatives })
}

/// Up to `max` random records other than `exclude`
pub fn pick_alternatives<R: Rng + ?Sized>(
    rng: &mut R,
    snapshot: &[OutfitRecord],
    exclude: Option<&OutfitId>,
    max: usize,
) -> Vec<usize> {
    let candidates: Vec<usize> = (0..snapshot.len())
        .filter(|&i| Some(&snapshot[i].id) != exclude)
        .collect();
    candidates.choose_multiple(rng, max).copied().collect()
}
