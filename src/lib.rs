//! # Shortcut Finder: Natural-Language Hotkey Lookup
//!
//! Loads a keyboard-shortcut sheet and ranks its entries against free-text
//! queries such as "how do i add a cube" or just "x".
//!
//! ## Sheet Format
//!
//! - A line without `:` is a category header
//! - `Keys: Action` is a shortcut (extra colons stay in the action)
//! - Blank lines and `//` comments are ignored
//!
//! ```text
//! View
//! MMB + Drag: Rotate 3D view
//! Numpad 0: Camera View
//! ```
//!
//! ## Example Usage
//!
//! ```
//! use shortcut_finder::ShortcutSearch;
//!
//! let search = ShortcutSearch::new()?;
//!
//! // Natural-language query
//! let results = search.search("how do i add a cube");
//! assert_eq!(results[0].keys, "Shift + A");
//!
//! // Top 5 only
//! let results = search.search_limit("rotate", 5);
//! assert!(results.len() <= 5);
//!
//! // Statistics
//! let (records, categories) = search.stats();
//! # assert!(records > 0 && categories > 0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! - **Record Parser** - Sheet text → shortcut records
//! - **Enrichment** - Guarantees commonly searched shortcuts exist
//! - **Query Normalizer** - Stop words out, synonyms in
//! - **Scorer** - Layered additive relevance score
//! - **Deduplicator** - One record per distinct shortcut
//! - **ShortcutSearch API** - Main entry point combining all components

pub mod data;
pub mod dedup;
pub mod enrich;
pub mod normalize;
pub mod parser;
pub mod scorer;
pub mod search;
pub mod types;

// Re-export main types and functions for convenience
pub use data::{DataInfo, DataLoader};
pub use dedup::deduplicate;
pub use enrich::enrich_missing_common;
pub use normalize::{normalize, tokenize};
pub use parser::parse_shortcuts;
pub use scorer::{PreparedQuery, ScoreBreakdown, ScoringWeights, ShortcutScorer};
pub use search::{SearchConfig, ShortcutSearch};
pub use types::{ScoredMatch, SearchOutcome, ShortcutError, ShortcutRecord};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
