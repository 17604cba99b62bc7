//! Canonical dedup keys for outfit item sets
//!
//! Two item lists describe the same outfit exactly when their fingerprints
//! are equal, regardless of order or repeated ids.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use shared::{ItemId, OutfitId, OutfitRecord};

/// Separator between item ids in a fingerprint
pub const SEPARATOR: char = '|';

/// Escapes a literal separator or escape character inside an item id
pub const ESCAPE: char = '\\';

/// Deduplicated, sorted, `|`-joined item ids
///
/// Ids containing `|` or `\` are escaped, so distinct sets never share a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Canonicalize an item id collection into its fingerprint
pub fn canonicalize<'a, I>(item_ids: I) -> Fingerprint
where
    I: IntoIterator<Item = &'a ItemId>,
{
    let unique: BTreeSet<&str> = item_ids.into_iter().map(ItemId::as_str).collect();
    let mut key = String::new();
    for (position, id) in unique.into_iter().enumerate() {
        if position > 0 {
            key.push(SEPARATOR);
        }
        for ch in id.chars() {
            if ch == SEPARATOR || ch == ESCAPE {
                key.push(ESCAPE);
            }
            key.push(ch);
        }
    }
    Fingerprint(key)
}

/// Fingerprint lookup over one snapshot of outfit records
#[derive(Debug, Clone, Default)]
pub struct FingerprintIndex {
    by_fingerprint: HashMap<Fingerprint, OutfitId>,
    by_outfit: HashMap<OutfitId, Fingerprint>,
}

impl FingerprintIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index a snapshot; on collision the earliest record wins
    pub fn from_records(records: &[OutfitRecord]) -> Self {
        let mut index = Self::new();
        for record in records {
            index.insert(record.id.clone(), canonicalize(&record.item_ids));
        }
        index
    }

    /// Returns false and keeps the existing holder when the fingerprint is taken
    pub fn insert(&mut self, id: OutfitId, fingerprint: Fingerprint) -> bool {
        if self.by_fingerprint.contains_key(&fingerprint) {
            return false;
        }
        self.by_outfit.insert(id.clone(), fingerprint.clone());
        self.by_fingerprint.insert(fingerprint, id);
        true
    }

    pub fn lookup(&self, fingerprint: &Fingerprint) -> Option<&OutfitId> {
        self.by_fingerprint.get(fingerprint)
    }

    pub fn fingerprint_of(&self, id: &OutfitId) -> Option<&Fingerprint> {
        self.by_outfit.get(id)
    }

    pub fn len(&self) -> usize {
        self.by_fingerprint.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_fingerprint.is_empty()
    }
}
