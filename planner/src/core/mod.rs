//! Core planning logic
//!
//! Pure functions and values with no I/O: fingerprints, the horizon ledger,
//! proposal validation and the history selection rules.

pub mod daily;
pub mod fingerprint;
pub mod ledger;
pub mod proposal;
pub mod weekly;

pub use daily::{pick_alternatives, pick_from_history, HistoryPick, HISTORY_RATIONALE};
pub use fingerprint::{canonicalize, Fingerprint, FingerprintIndex};
pub use ledger::{Catalog, HorizonLedger};
pub use proposal::{resolve_proposal, validate_proposal, Resolution, UnknownItemPolicy, ValidatedProposal};
pub use weekly::{avoidance_rule, resolve_horizon, select_from_history, HistoryMatch, MatchKind};
