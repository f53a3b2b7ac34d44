// Shortcut Finder Relevance Scorer
// Layered, additive scoring of a shortcut record against a query

use crate::normalize::{tokenize, PRIORITY_ADD_MENU, STOP_WORDS};
use crate::parser::compact_keys;
use crate::types::ShortcutRecord;
use regex::Regex;
use std::sync::LazyLock;

/// Anything that is not a word character, whitespace or `+`
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s+]").expect("valid non-word regex"));

/// Single-key commands and common combinations that may appear in a query
const POTENTIAL_KEYS: &[&str] = &[
    "a", "b", "c", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q", "r", "s", "t",
    "u", "v", "w", "x", "y", "z", "tab", "space", "shift+a", "ctrl+j", "ctrl+z", "shift+d",
];

/// Terms with high value for shortcut lookup
const HIGH_VALUE_KEYWORDS: &[&str] = &[
    "add", "create", "new", "delete", "remove", "move", "grab", "translate", "rotate", "scale",
    "extrude", "select", "deselect", "loop", "cut", "join", "separate", "merge", "split",
    "duplicate", "copy", "paste", "undo", "redo", "save", "load", "render", "animate",
    "keyframe", "curve", "mesh", "object", "face", "edge", "vertex", "point", "camera", "light",
    "material", "texture", "uv", "unwrap", "mode", "edit", "sculpt", "paint", "draw", "view",
    "hide", "show", "wireframe", "solid", "shade", "smooth", "flat", "parent", "child",
    "constraint", "modifier", "apply", "transform", "tab", "menu", "pie", "panel", "properties",
    "preferences", "settings",
];

/// Extra stop words for keyword extraction only
const KEYWORD_STOP_WORDS: &[&str] = &[
    "get", "make", "use", "used", "way", "show", "me", "please", "help", "tell",
];

/// Multi-word terms kept together as one keyword
const COMPOUND_TERMS: &[&str] = &[
    "add menu", "loop cut", "box select", "circle select", "edge loop", "face select",
    "vertex select", "edit mode", "object mode", "texture paint", "weight paint",
    "vertex paint", "uv mapping", "vertex group",
];

/// Object types that point an "add" query at the Add Menu
const ADD_MENU_OBJECT_TYPES: &[&str] =
    &["cube", "sphere", "plane", "mesh", "light", "camera", "curve"];

/// Operation named in the query → keys that perform it
const COMMON_OPERATIONS: &[(&str, &[&str])] = &[
    ("grab", &["g"]),
    ("move", &["g"]),
    ("rotate", &["r"]),
    ("scale", &["s"]),
    ("extrude", &["e"]),
    ("select all", &["a"]),
    ("deselect", &["a"]),
    ("select", &["a", "b", "c"]),
    ("box select", &["b"]),
    ("circle select", &["c"]),
    ("duplicate", &["shift+d"]),
    ("join", &["ctrl+j"]),
    ("parent", &["ctrl+p"]),
    ("search", &["f3"]),
    ("undo", &["ctrl+z"]),
    ("save", &["ctrl+s"]),
];

/// Interrogative prefixes stripped before verb matching
const QUESTION_PREFIXES: &[&str] = &["how to", "how do i"];

/// Verb in a "how to" question → keys that perform it
const ACTION_VERBS: &[(&str, &[&str])] = &[
    ("add", &["shift+a"]),
    ("create", &["shift+a"]),
    ("delete", &["x"]),
    ("remove", &["x"]),
    ("move", &["g"]),
    ("grab", &["g"]),
    ("rotate", &["r"]),
    ("scale", &["s"]),
    ("select", &["a", "b", "c"]),
    ("extrude", &["e"]),
    ("duplicate", &["shift+d"]),
    ("copy", &["shift+d"]),
    ("join", &["ctrl+j"]),
    ("connect", &["j", "f"]),
];

/// Bonus weights for every scoring signal
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringWeights {
    // Exact matches
    pub exact_keys: i64,
    pub exact_keys_bonus: i64,
    pub exact_action: i64,
    pub exact_action_bonus: i64,

    // Canonical intents
    pub add_intent: i64,
    pub add_menu_object_type: i64,
    pub delete_intent: i64,
    pub common_operation: i64,
    pub priority_marker: i64,

    // Keyword hits, per field
    pub keyword_keys: i64,
    pub keyword_action: i64,
    pub keyword_category: i64,
    pub keyword_terms: i64,
    pub keyword_perfect_keys: i64,
    pub keyword_perfect_action: i64,
    pub keyword_action_prefix: i64,

    // Word overlap, per field
    pub word_exact_keys: i64,
    pub word_keys: i64,
    pub word_action: i64,
    pub word_category: i64,
    pub word_terms: i64,

    // Natural-language questions
    pub question_action: i64,
    pub question_verb: i64,

    pub high_priority: i64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            exact_keys: 1000,
            exact_keys_bonus: 500,
            exact_action: 900,
            exact_action_bonus: 400,

            add_intent: 2000,
            add_menu_object_type: 750,
            delete_intent: 1500,
            common_operation: 800,
            priority_marker: 1000,

            keyword_keys: 75,
            keyword_action: 50,
            keyword_category: 25,
            keyword_terms: 20,
            keyword_perfect_keys: 300,
            keyword_perfect_action: 200,
            keyword_action_prefix: 100,

            word_exact_keys: 120,
            word_keys: 80,
            word_action: 70,
            word_category: 40,
            word_terms: 30,

            question_action: 500,
            question_verb: 600,

            high_priority: 300,
        }
    }
}

/// Per-signal parts of a record's score
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    /// Exact keys/action match
    pub exact: i64,
    /// Canonical intent boosts
    pub intent: i64,
    /// Perfect/prefix keyword bonuses
    pub keyword: i64,
    /// Word-by-word overlap
    pub word: i64,
    /// "How to" handling
    pub question: i64,
    /// Multiplier applied to the running score, in quarters (4 = ×1)
    pub multiplier_quarters: i64,
    /// Late exact-match bonus added after the multiplier
    pub exact_bonus: i64,
    /// Sum of keyword field-hit weights, added after the multiplier
    pub keyword_importance: i64,
    /// High-priority flat bonus
    pub priority: i64,
    /// Distinct keywords with at least one field hit
    pub keywords_matched: usize,
    /// Keywords extracted from the query
    pub keywords_total: usize,
}

impl ScoreBreakdown {
    /// Final score
    pub fn total(&self) -> i64 {
        let running = self.exact + self.intent + self.keyword + self.word + self.question;
        let multiplied = match self.multiplier_quarters {
            6 => running * 3 / 2,
            5 => running * 5 / 4,
            _ => running,
        };
        multiplied + self.exact_bonus + self.keyword_importance + self.priority
    }
}

/// Lower-cased views of a record used during scoring
struct RecordFields<'a> {
    keys: String,
    action: String,
    category: String,
    terms: &'a str,
}

impl<'a> RecordFields<'a> {
    fn new(record: &'a ShortcutRecord) -> Self {
        Self {
            keys: compact_keys(&record.keys),
            action: record.action.to_lowercase(),
            category: record.category.to_lowercase(),
            terms: &record.search_terms,
        }
    }

    fn is_add_menu(&self) -> bool {
        keys_include(&self.keys, "shift+a") && self.action.contains("add menu")
    }
}

/// Query-side inputs to scoring, computed once per search
///
/// Build one with [`PreparedQuery::new`] and score every record of a corpus
/// against it with [`ShortcutScorer::score_prepared`].
#[derive(Debug, Clone)]
pub struct PreparedQuery {
    /// Trimmed, lower-cased raw query without trailing `?`/`!`
    query: String,
    normalized: String,
    keywords: Vec<String>,
}

impl PreparedQuery {
    pub fn new(raw_query: &str, normalized_query: &str) -> Self {
        let query = raw_query
            .trim()
            .trim_end_matches(['?', '!'])
            .trim_end()
            .to_lowercase();

        Self {
            query,
            normalized: normalized_query.to_string(),
            keywords: extract_keywords(raw_query),
        }
    }

    /// Keywords extracted from the raw query
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

/// Relevance scorer for shortcut records
#[derive(Debug, Clone, Default)]
pub struct ShortcutScorer {
    weights: ScoringWeights,
}

impl ShortcutScorer {
    /// Create a scorer with custom weights
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Active weights
    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score a record; anything ≤ 0 means "no match"
    ///
    /// The high-priority bonus is only added to a record that already scored
    /// above zero, so flagged records never match unrelated queries.
    ///
    /// # Arguments
    /// * `record` - The record to score
    /// * `raw_query` - The query exactly as the user typed it
    /// * `normalized_query` - Output of [`crate::normalize::normalize`]
    pub fn score(&self, record: &ShortcutRecord, raw_query: &str, normalized_query: &str) -> i64 {
        self.score_prepared(record, &PreparedQuery::new(raw_query, normalized_query))
    }

    /// Score a record against a query prepared once for the whole corpus
    pub fn score_prepared(&self, record: &ShortcutRecord, query: &PreparedQuery) -> i64 {
        self.breakdown_prepared(record, query).total()
    }

    /// Score a record and keep every signal's contribution
    pub fn breakdown(
        &self,
        record: &ShortcutRecord,
        raw_query: &str,
        normalized_query: &str,
    ) -> ScoreBreakdown {
        self.breakdown_prepared(record, &PreparedQuery::new(raw_query, normalized_query))
    }

    /// [`ShortcutScorer::breakdown`] for a prepared query
    pub fn breakdown_prepared(
        &self,
        record: &ShortcutRecord,
        prepared: &PreparedQuery,
    ) -> ScoreBreakdown {
        let w = &self.weights;
        let fields = RecordFields::new(record);
        let query = prepared.query.as_str();
        let normalized_query = prepared.normalized.as_str();
        let mut parts = ScoreBreakdown {
            multiplier_quarters: 4,
            ..ScoreBreakdown::default()
        };

        // Exact matches
        if !query.is_empty() && fields.keys == compact_keys(query) {
            parts.exact += w.exact_keys;
            parts.exact_bonus += w.exact_keys_bonus;
        }
        if !query.is_empty() && fields.action == query {
            parts.exact += w.exact_action;
            parts.exact_bonus += w.exact_action_bonus;
        }

        // Keyword overlap
        for keyword in prepared.keywords() {
            let keyword = keyword.as_str();
            let mut hit = false;

            if keys_include(&fields.keys, keyword) {
                hit = true;
                parts.keyword_importance += w.keyword_keys;
                if fields.keys == keyword {
                    parts.keyword += w.keyword_perfect_keys;
                }
            }
            if fields.action.contains(keyword) {
                hit = true;
                parts.keyword_importance += w.keyword_action;
                if fields.action == keyword {
                    parts.keyword += w.keyword_perfect_action;
                }
                if fields.action.starts_with(keyword) {
                    parts.keyword += w.keyword_action_prefix;
                }
            }
            if fields.category.contains(keyword) {
                hit = true;
                parts.keyword_importance += w.keyword_category;
            }
            if fields.terms.contains(keyword) {
                hit = true;
                parts.keyword_importance += w.keyword_terms;
            }

            if hit {
                parts.keywords_matched += 1;
            }
        }
        parts.keywords_total = prepared.keywords().len();

        parts.intent = self.intent_bonus(&fields, query, normalized_query);
        parts.question = self.question_bonus(&fields, query);

        // Word-by-word overlap
        for word in tokenize(normalized_query) {
            if fields.keys == word {
                parts.word += w.word_exact_keys;
            } else if fields.keys.contains(word) {
                parts.word += w.word_keys;
            }
            if fields.action.contains(word) {
                parts.word += w.word_action;
            }
            if fields.category.contains(word) {
                parts.word += w.word_category;
            }
            if fields.terms.contains(word) {
                parts.word += w.word_terms;
            }
        }

        parts.multiplier_quarters = quality_multiplier(parts.keywords_matched, parts.keywords_total);

        // Only boosts records that matched on their own
        if record.high_priority && parts.total() > 0 {
            parts.priority = w.high_priority;
        }

        parts
    }

    /// Boosts for canonical, very common lookups
    fn intent_bonus(&self, fields: &RecordFields<'_>, query: &str, normalized_query: &str) -> i64 {
        let w = &self.weights;
        let mut bonus = 0;

        let add_intent = query == "add"
            || query.starts_with("add ")
            || query == "create"
            || query.starts_with("create ")
            || query.contains("new object");
        let add_record = keys_include(&fields.keys, "shift+a")
            && (fields.action.contains("add menu") || fields.action.contains("create new"));
        if add_intent && add_record {
            bonus += w.add_intent;
        }

        if fields.is_add_menu() {
            let object_hits = ADD_MENU_OBJECT_TYPES
                .iter()
                .filter(|t| query.contains(*t))
                .count() as i64;
            bonus += object_hits * w.add_menu_object_type;

            if normalized_query.contains(PRIORITY_ADD_MENU) {
                bonus += w.priority_marker;
            }
        }

        if (query == "delete" || query == "remove")
            && fields.keys == "x"
            && fields.action.contains("delete")
        {
            bonus += w.delete_intent;
        }

        for (operation, keys) in COMMON_OPERATIONS {
            if query.contains(operation)
                && keys.iter().any(|k| keys_include(&fields.keys, k))
                && fields.action.contains(operation)
            {
                bonus += w.common_operation;
            }
        }

        bonus
    }

    /// "How to ..." questions: match the remainder and its verbs
    fn question_bonus(&self, fields: &RecordFields<'_>, query: &str) -> i64 {
        let Some(remainder) = strip_question_prefix(query) else {
            return 0;
        };

        let w = &self.weights;
        let mut bonus = 0;

        if !remainder.is_empty() && fields.action.contains(remainder) {
            bonus += w.question_action;
        }

        for (verb, keys) in ACTION_VERBS {
            if remainder.contains(verb) && keys.iter().any(|k| keys_include(&fields.keys, k)) {
                bonus += w.question_verb;
            }
        }

        bonus
    }
}

/// Strip a leading "how to"/"how do i", returning the trimmed remainder
pub fn strip_question_prefix(query: &str) -> Option<&str> {
    QUESTION_PREFIXES
        .iter()
        .find_map(|prefix| query.strip_prefix(prefix))
        .map(str::trim)
}

/// True if every `+`-separated part of `key` is a part of `record_keys`
///
/// Both sides are compact lower-case key strings. "x" is part of "shift+x"
/// and "shift+d" of "ctrl+shift+d", but "e" is not part of "ctrl+space".
fn keys_include(record_keys: &str, key: &str) -> bool {
    key.split('+')
        .all(|part| record_keys.split('+').any(|own| own == part))
}

/// Multiplier (in quarters) for the share of keywords that matched
fn quality_multiplier(matched: usize, total: usize) -> i64 {
    if total == 0 {
        return 4;
    }
    // matched/total >= 0.75 and >= 0.5, in integers
    if matched * 4 >= total * 3 {
        6
    } else if matched * 2 >= total {
        5
    } else {
        4
    }
}

/// Pull the meaningful keywords out of a raw query
///
/// Direct key references, high-value terms, any other non-stop word of three
/// or more characters, then compound terms. Each keyword appears once.
pub fn extract_keywords(raw_query: &str) -> Vec<String> {
    let lower = raw_query.to_lowercase();
    let cleaned = NON_WORD.replace_all(&lower, " ");
    let words: Vec<&str> = cleaned
        .split_whitespace()
        .filter(|w| !STOP_WORDS.contains(w))
        .collect();
    let joined = words.join(" ");

    let mut keywords: Vec<String> = Vec::new();
    let mut add = |keyword: &str| {
        if !keywords.iter().any(|k| k == keyword) {
            keywords.push(keyword.to_string());
        }
    };

    for key in POTENTIAL_KEYS {
        if words.contains(key) {
            add(key);
        }
    }

    for keyword in HIGH_VALUE_KEYWORDS {
        if words.contains(keyword) {
            add(keyword);
        }
    }

    for word in &words {
        if word.chars().count() >= 3 && !KEYWORD_STOP_WORDS.contains(word) {
            add(word);
        }
    }

    for term in COMPOUND_TERMS {
        if joined.contains(term) {
            add(term);
        }
    }

    keywords
}
