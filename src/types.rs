// Shortcut Finder Type Definitions
// Core types for shortcut records, scored matches and search outcomes

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// One keyboard-shortcut entry from a hotkey sheet
///
/// Only `category`, `keys` and `action` are part of the serialized shape;
/// `search_terms` and `high_priority` are ranking internals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortcutRecord {
    /// Nearest preceding header in the sheet (empty if none was seen)
    pub category: String,

    /// Literal key combination, e.g. "Shift + A"
    pub keys: String,

    /// What the shortcut does
    pub action: String,

    /// Lower-cased bag of words used for matching
    #[serde(skip)]
    pub search_terms: String,

    /// Boosted during scoring
    #[serde(skip)]
    pub high_priority: bool,
}

impl ShortcutRecord {
    /// Create a record with search terms built from its own fields
    pub fn new(
        category: impl Into<String>,
        keys: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        let category = category.into();
        let keys = keys.into();
        let action = action.into();
        let search_terms = crate::parser::build_search_terms(&category, &keys, &action);

        Self {
            category,
            keys,
            action,
            search_terms,
            high_priority: false,
        }
    }

    /// Append extra search terms
    pub fn with_terms(mut self, terms: &str) -> Self {
        self.search_terms.push(' ');
        self.search_terms.push_str(&terms.to_lowercase());
        self
    }

    /// Set the high-priority flag
    pub fn with_high_priority(mut self, high_priority: bool) -> Self {
        self.high_priority = high_priority;
        self
    }

    /// A record is usable only when both keys and action are present
    pub fn is_valid(&self) -> bool {
        !self.keys.trim().is_empty() && !self.action.trim().is_empty()
    }
}

impl std::fmt::Display for ShortcutRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.keys, self.action)
    }
}

/// A record paired with its relevance score
#[derive(Debug, Clone)]
pub struct ScoredMatch {
    pub record: ShortcutRecord,
    pub score: i64,
}

/// What a search produced, so the caller can pick the right message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Query was empty or had no searchable terms
    NoQuery,

    /// Normal ranked results
    Ranked(Vec<ShortcutRecord>),

    /// Nothing ranked; lenient word matches instead
    Partial(Vec<ShortcutRecord>),

    /// Nothing matched at all
    NoMatches,
}

impl SearchOutcome {
    /// Records carried by this outcome (empty for `NoQuery`/`NoMatches`)
    pub fn records(&self) -> &[ShortcutRecord] {
        match self {
            SearchOutcome::Ranked(records) | SearchOutcome::Partial(records) => records,
            SearchOutcome::NoQuery | SearchOutcome::NoMatches => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }
}

impl std::fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchOutcome::NoQuery => write!(f, "NoQuery"),
            SearchOutcome::Ranked(r) => write!(f, "Ranked({})", r.len()),
            SearchOutcome::Partial(r) => write!(f, "Partial({})", r.len()),
            SearchOutcome::NoMatches => write!(f, "NoMatches"),
        }
    }
}

/// Errors raised while loading a hotkey sheet
#[derive(Debug, Error)]
pub enum ShortcutError {
    #[error("Failed to read shortcut sheet {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Shortcut sheet contains no valid records")]
    EmptyCorpus,
}
