//! Archetype lookup table keyed by classification code.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::sync::LazyLock;

use compass_core::error::DomainError;

use super::classification::Classification;

/// Canonical archetype names, one per classification code.
const STANDARD_ARCHETYPES: [(&str, &str); 16] = [
    ("H H H H", "The Harmonious Leader"),
    ("H H H L", "The Contributing Catalyst (High-Performance Drain)"),
    ("H H L H", "The Soulful Activist (Meaningful Observer)"),
    ("H L H H", "The Joyful Creator (Mission-Driven Striker)"),
    ("L H H H", "The Focused Professional (Contented Achiever)"),
    ("H L L H", "The Self-Sustaining Mystic (Quiet Contemplative)"),
    ("L H L H", "The Well-Meaning Optimist (Happy Cruiser)"),
    ("L L H H", "The Unburdened Influencer (Effective Operator)"),
    ("H H L L", "The High-Achieving Seeker (Aspiring Burnout)"),
    ("H L H L", "The Mission-Driven Martyr (Driven Architect)"),
    ("L H H L", "The Joyful Producer (Busy Hedonist)"),
    ("H L L L", "The Burnt-Out Visionary (Idealist in Distress)"),
    ("L H L L", "The Contented Drifter (Distracted Escapist)"),
    ("L L L H", "The Healthy Underachiever (Resilient Placeholder)"),
    ("L L H L", "The Disillusioned Performer (Transactional Hustler)"),
    ("L L L L", "The Fully Disconnected (Seeking Explorer)"),
];

static STANDARD_TABLE: LazyLock<ArchetypeTable> = LazyLock::new(|| {
    ArchetypeTable::try_new(STANDARD_ARCHETYPES).expect("standard archetype table is well-formed")
});

/// Mapping from classification to archetype display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchetypeTable {
    entries: BTreeMap<Classification, String>,
}

impl ArchetypeTable {
    /// Builds a table from `(code, name)` pairs.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidArchetypeTable` if a code is malformed or
    /// appears more than once. Duplicates are rejected rather than letting a
    /// later entry silently replace an earlier one.
    pub fn try_new<I, C, N>(entries: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = (C, N)>,
        C: AsRef<str>,
        N: Into<String>,
    {
        let mut table = BTreeMap::new();
        for (code, name) in entries {
            let code = code.as_ref();
            let classification: Classification = code.parse().map_err(|_| {
                DomainError::InvalidArchetypeTable(format!("malformed code {code:?}"))
            })?;
            if table.insert(classification, name.into()).is_some() {
                return Err(DomainError::InvalidArchetypeTable(format!(
                    "duplicate code {code:?}"
                )));
            }
        }
        Ok(Self { entries: table })
    }

    /// The built-in table covering all sixteen codes.
    #[must_use]
    pub fn standard() -> &'static ArchetypeTable {
        &STANDARD_TABLE
    }

    /// The archetype name for `classification`, if defined.
    #[must_use]
    pub fn get(&self, classification: &Classification) -> Option<&str> {
        self.entries.get(classification).map(String::as_str)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether every one of the sixteen classifications has an entry.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        Classification::all().all(|c| self.entries.contains_key(&c))
    }

    /// Entries ordered from `H H H H` to `L L L L`.
    pub fn iter(&self) -> impl Iterator<Item = (&Classification, &str)> {
        self.entries.iter().map(|(c, name)| (c, name.as_str()))
    }

    /// Plain-text listing, one `"CODE": Name` line per entry, for inclusion
    /// in a generation prompt.
    #[must_use]
    pub fn describe(&self) -> String {
        let mut out = String::new();
        for (classification, name) in self.iter() {
            // Writing to a String cannot fail.
            let _ = writeln!(out, "\"{classification}\": {name}");
        }
        out
    }
}
