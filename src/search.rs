// Shortcut Finder Search Engine
// Main API that orchestrates normalizing, scoring, ranking and deduplication

use crate::data::DataLoader;
use crate::dedup::{deduplicate, deduplicate_by};
use crate::enrich::enrich_missing_common;
use crate::normalize::{has_searchable_terms, normalize, strip_stop_words};
use crate::scorer::{PreparedQuery, ScoreBreakdown, ScoringWeights, ShortcutScorer};
use crate::types::{ScoredMatch, SearchOutcome, ShortcutError, ShortcutRecord};
use std::path::Path;
use tracing::debug;

/// Number of top candidates written to the debug log per search
const DEBUG_TOP_N: usize = 5;

/// Search engine configuration
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Scoring bonus weights
    pub weights: ScoringWeights,

    /// Fall back to lenient word matching when ranking finds nothing
    pub partial_fallback: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            partial_fallback: true,
        }
    }
}

/// Rank a corpus against a query with the default weights
///
/// Pure function of its inputs: an empty query, or one with nothing left
/// after normalization, gives an empty result.
///
/// # Examples
/// ```
/// # use shortcut_finder::{search::search, parser::parse_shortcuts};
/// let corpus = parse_shortcuts("General\nX: Delete\nShift+X: Delete Globally");
/// let results = search(&corpus, "x");
/// assert_eq!(results[0].keys, "X");
/// assert!(search(&corpus, "").is_empty());
/// ```
pub fn search(corpus: &[ShortcutRecord], raw_query: &str) -> Vec<ShortcutRecord> {
    rank(&ShortcutScorer::default(), corpus, raw_query)
        .into_iter()
        .map(|m| m.record)
        .collect()
}

/// Score, filter, stable-sort and deduplicate
fn rank(scorer: &ShortcutScorer, corpus: &[ShortcutRecord], raw_query: &str) -> Vec<ScoredMatch> {
    if raw_query.trim().is_empty() {
        return Vec::new();
    }

    let normalized = normalize(raw_query);
    if !has_searchable_terms(&normalized) {
        return Vec::new();
    }

    let prepared = PreparedQuery::new(raw_query, &normalized);
    let mut scored: Vec<ScoredMatch> = corpus
        .iter()
        .filter_map(|record| {
            let score = scorer.score_prepared(record, &prepared);
            (score > 0).then(|| ScoredMatch {
                record: record.clone(),
                score,
            })
        })
        .collect();

    // sort_by is stable: equal scores keep corpus order
    scored.sort_by(|a, b| b.score.cmp(&a.score));

    for (idx, m) in scored.iter().take(DEBUG_TOP_N).enumerate() {
        debug!(
            rank = idx + 1,
            action = %m.record.action,
            keys = %m.record.keys,
            score = m.score,
            query = raw_query,
            "top candidate"
        );
    }

    deduplicate_by(scored, |m| &m.record)
}

/// Main shortcut search engine
///
/// Holds an enriched, read-only corpus. Every search is a pure function of
/// that corpus and the query, so one engine can serve any number of callers.
pub struct ShortcutSearch {
    /// Parsed and enriched records
    corpus: Vec<ShortcutRecord>,

    /// Relevance scorer
    scorer: ShortcutScorer,

    /// Whether to try lenient matches after an empty ranking
    partial_fallback: bool,
}

impl ShortcutSearch {
    /// Create an engine over the embedded Blender sheet
    pub fn new() -> Result<Self, ShortcutError> {
        Self::from_text(DataLoader::default_sheet())
    }

    /// Create an engine from sheet text
    pub fn from_text(text: &str) -> Result<Self, ShortcutError> {
        Ok(Self::from_records(DataLoader::load_text(text)?))
    }

    /// Create an engine from a sheet file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ShortcutError> {
        Ok(Self::from_records(DataLoader::load_path(path)?))
    }

    /// Create an engine from parsed records
    ///
    /// Enrichment with commonly searched shortcuts runs here, once.
    pub fn from_records(mut records: Vec<ShortcutRecord>) -> Self {
        records.retain(ShortcutRecord::is_valid);
        enrich_missing_common(&mut records);
        debug!(records = records.len(), "shortcut corpus ready");

        Self {
            corpus: records,
            scorer: ShortcutScorer::default(),
            partial_fallback: true,
        }
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.scorer = ShortcutScorer::new(config.weights);
        self.partial_fallback = config.partial_fallback;
        self
    }

    /// The enriched corpus
    pub fn corpus(&self) -> &[ShortcutRecord] {
        &self.corpus
    }

    /// Execute a search query
    ///
    /// # Returns
    /// Records ordered by relevance, one per distinct shortcut
    pub fn search(&self, query: &str) -> Vec<ShortcutRecord> {
        self.search_scored(query)
            .into_iter()
            .map(|m| m.record)
            .collect()
    }

    /// Execute a search query, keeping scores
    pub fn search_scored(&self, query: &str) -> Vec<ScoredMatch> {
        rank(&self.scorer, &self.corpus, query)
    }

    /// Search with limit on results
    pub fn search_limit(&self, query: &str, limit: usize) -> Vec<ShortcutRecord> {
        let mut results = self.search(query);
        results.truncate(limit);
        results
    }

    /// Search and report what kind of result was produced
    ///
    /// When ranking finds nothing and the fallback is enabled, lenient
    /// word matches are returned as [`SearchOutcome::Partial`].
    pub fn search_outcome(&self, query: &str) -> SearchOutcome {
        if !has_searchable_terms(&normalize(query)) {
            return SearchOutcome::NoQuery;
        }

        let ranked = self.search(query);
        if !ranked.is_empty() {
            return SearchOutcome::Ranked(ranked);
        }

        if self.partial_fallback {
            let partial = self.partial_matches(query);
            if !partial.is_empty() {
                debug!(query, matches = partial.len(), "using partial matches");
                return SearchOutcome::Partial(partial);
            }
        }

        SearchOutcome::NoMatches
    }

    /// Lenient matching for queries the ranker could not place
    ///
    /// Each query word longer than two characters (stop words aside) matches
    /// a record when:
    /// - the word minus its last letter appears in the search terms
    /// - the word appears in the action or category
    /// - the word's letters appear in order in the action (words of 4+ letters)
    /// - the word is "rename" and the action mentions a name or label
    pub fn partial_matches(&self, query: &str) -> Vec<ShortcutRecord> {
        let cleaned = strip_stop_words(query);
        let words: Vec<&str> = cleaned
            .split_whitespace()
            .filter(|w| w.chars().count() > 2)
            .collect();

        if words.is_empty() {
            return Vec::new();
        }

        let matches = self
            .corpus
            .iter()
            .filter(|record| words.iter().any(|w| partial_hit(record, w)))
            .cloned()
            .collect();

        deduplicate(matches)
    }

    /// Per-signal score of one record for a query
    pub fn explain(&self, record: &ShortcutRecord, query: &str) -> ScoreBreakdown {
        self.scorer.breakdown(record, query, &normalize(query))
    }

    /// Get statistics about the corpus
    ///
    /// # Returns
    /// (record count, distinct category count)
    pub fn stats(&self) -> (usize, usize) {
        let mut categories: Vec<&str> = self.corpus.iter().map(|r| r.category.as_str()).collect();
        categories.sort_unstable();
        categories.dedup();
        (self.corpus.len(), categories.len())
    }
}

fn partial_hit(record: &ShortcutRecord, word: &str) -> bool {
    let action = record.action.to_lowercase();
    let category = record.category.to_lowercase();

    let stem_len = word.len() - word.chars().last().map_or(0, char::len_utf8);
    let stem = &word[..stem_len];

    record.search_terms.contains(stem)
        || action.contains(word)
        || category.contains(word)
        || (word.chars().count() >= 4 && is_subsequence(word, &action))
        || (word == "rename" && (action.contains("name") || action.contains("label")))
}

/// True if every char of `needle` appears in `haystack` in order
pub fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut hay = haystack.chars();
    needle.chars().all(|n| hay.any(|h| h == n))
}
