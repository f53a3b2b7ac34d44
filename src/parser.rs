// Shortcut Finder Record Parser
// Converts a line-oriented hotkey sheet into shortcut records

use crate::types::ShortcutRecord;
use regex::Regex;
use std::sync::LazyLock;

/// Lines starting with this marker are ignored
const COMMENT_MARKER: &str = "//";

/// Whitespace around a `+` separator in a key combination
static PLUS_SPACING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\+\s*").expect("valid plus-spacing regex"));

/// Runs of whitespace
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Fixed synonym expansion applied to a record's search terms
///
/// A rule fires when every trigger it names is present: `keys` is compared
/// against the whitespace-free lower-case keys, `action` triggers against the
/// lower-case action (any one of them is enough).
struct ExpansionRule {
    keys: Option<&'static str>,
    action_any: &'static [&'static str],
    terms: &'static str,
}

const EXPANSION_RULES: &[ExpansionRule] = &[
    ExpansionRule {
        keys: None,
        action_any: &["uv"],
        terms: "unwrap texture mapping",
    },
    ExpansionRule {
        keys: Some("ctrl+e"),
        action_any: &["mark seam"],
        terms: "unwrap uv mapping texture",
    },
    ExpansionRule {
        keys: None,
        action_any: &["triangulate", "tris"],
        terms: "triangle triangulation",
    },
];

/// Parse a hotkey sheet into records
///
/// # Line Format
/// - Blank lines and `//` comments are skipped
/// - A line without `:` is a category header for the lines that follow
/// - `Keys: Action` is a shortcut; later colons stay in the action
///
/// Malformed lines (empty keys or action) are skipped silently.
///
/// # Examples
/// ```
/// # use shortcut_finder::parser::parse_shortcuts;
/// let records = parse_shortcuts("View\nMMB + Drag: Rotate 3D view");
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].category, "View");
/// assert_eq!(records[0].keys, "MMB + Drag");
/// assert_eq!(records[0].action, "Rotate 3D view");
/// ```
pub fn parse_shortcuts(text: &str) -> Vec<ShortcutRecord> {
    let mut current_category = String::new();
    let mut records = Vec::new();

    for line in text.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with(COMMENT_MARKER) {
            continue;
        }

        let Some((keys, action)) = line.split_once(':') else {
            current_category = line.to_string();
            continue;
        };

        let keys = keys.trim();
        let action = action.trim();
        if keys.is_empty() || action.is_empty() {
            continue;
        }

        records.push(ShortcutRecord::new(current_category.as_str(), keys, action));
    }

    records
}

/// Build the lower-cased search-term bag for a record
///
/// Action, keys and category are concatenated, followed by any terms from
/// the fixed expansion table whose triggers are present.
pub fn build_search_terms(category: &str, keys: &str, action: &str) -> String {
    let action_lower = action.to_lowercase();
    let keys_lower = keys.to_lowercase();
    let mut terms = format!(
        "{} {} {}",
        action_lower,
        keys_lower,
        category.to_lowercase()
    );

    let compact = compact_keys(keys);
    for rule in EXPANSION_RULES {
        let keys_hit = rule.keys.is_none_or(|k| compact.contains(k));
        let action_hit = rule.action_any.iter().any(|t| action_lower.contains(t));
        if keys_hit && action_hit {
            terms.push(' ');
            terms.push_str(rule.terms);
        }
    }

    terms
}

/// Canonical form of a key combination used for grouping
///
/// Lower-cased, no spaces around `+`, other whitespace collapsed:
/// `"Shift + A"` and `"shift+a"` both become `"shift+a"`.
pub fn normalize_keys(keys: &str) -> String {
    let lower = keys.trim().to_lowercase();
    let joined = PLUS_SPACING.replace_all(&lower, "+");
    WHITESPACE_RUN.replace_all(&joined, " ").into_owned()
}

/// Key combination with all whitespace removed, lower-cased
#[inline]
pub fn compact_keys(keys: &str) -> String {
    keys.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
