//! Core types used throughout the outfit planning system

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;
use uuid::Uuid;

pub mod outfit;
pub mod planning;
pub mod wardrobe;

pub use outfit::{NewOutfit, OutfitRecord, OutfitSummary};
pub use planning::{Event, PlanningDay, WeatherSnapshot};
pub use wardrobe::{Category, CategoryClass, DisplayItem, ItemTags, WardrobeItem};

/// Global process ID singleton - set once at startup
static PROCESS_ID: OnceLock<ProcessId> = OnceLock::new();

/// Fallback used when no binary has claimed an identity (tests, embedding)
static LIBRARY_PROCESS: ProcessId = ProcessId::Library;

/// Process identifier attached to every log line
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcessId {
    /// Command line planner
    Cli,
    /// HTTP server
    WebServer,
    /// Library use without an initialised binary
    Library,
}

impl ProcessId {
    /// Initialize the global process ID for the command line planner
    pub fn init_cli() -> &'static ProcessId {
        PROCESS_ID.get_or_init(|| ProcessId::Cli)
    }

    /// Initialize the global process ID for webserver
    pub fn init_webserver() -> &'static ProcessId {
        PROCESS_ID.get_or_init(|| ProcessId::WebServer)
    }

    /// Get the global process ID, `Library` when nothing was initialised
    pub fn current() -> &'static ProcessId {
        PROCESS_ID.get().unwrap_or(&LIBRARY_PROCESS)
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessId::Cli => write!(f, "planner"),
            ProcessId::WebServer => write!(f, "webserver"),
            ProcessId::Library => write!(f, "library"),
        }
    }
}

/// Identifier of a wardrobe item
///
/// Ordering is plain string ordering, which is what outfit fingerprints sort by.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Identifier of a persisted outfit record
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutfitId(String);

impl OutfitId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh random identifier for a newly persisted record
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OutfitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OutfitId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for OutfitId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Deserialize a list that may be missing or explicitly `null` as an empty list
pub fn empty_if_null<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}
