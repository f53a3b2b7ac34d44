// Shortcut Finder Query Normalizer
// Cleans a raw user query and expands it into search terms

use rustc_hash::FxHashSet;
use tracing::trace;

/// Words that carry no meaning for shortcut lookup
pub const STOP_WORDS: &[&str] = &[
    "how", "to", "do", "i", "can", "the", "in", "blender", "shortcut", "shortcuts", "keyboard",
    "key", "keys", "what", "is", "for", "with", "using", "a", "an", "where", "when", "which",
    "button", "press", "need", "want", "would", "should", "will",
];

/// Queries that collapse to the canonical Add Menu lookup
const ADD_MENU_QUERIES: &[&str] = &["add", "add menu", "create"];

/// Marker term that the scorer rewards on the Add Menu record
pub const PRIORITY_ADD_MENU: &str = "priority-add-menu";

/// Fixed replacement for bare "add"-style queries
pub const ADD_MENU_EXPANSION: &str = "add menu shift+a create new object priority-add-menu";

/// Phrase → synonyms
///
/// Forward: phrase found anywhere in the cleaned query appends its synonyms.
/// Reverse: a query word equal to one of the synonyms appends the phrase too.
const SYNONYMS: &[(&str, &[&str])] = &[
    ("add", &["add menu", "shift+a", "create", "new"]),
    ("new", &["add menu", "shift+a", "create", "add"]),
    ("create", &["add menu", "shift+a", "new", "add"]),
    ("cube", &["add mesh cube", "primitive", "box", "shift+a"]),
    ("delete", &["remove", "erase", "x", "del"]),
    ("remove", &["delete", "x", "del"]),
    ("move", &["grab", "g", "translate", "position", "drag"]),
    ("grab", &["move", "g", "translate", "position"]),
    ("rotate", &["r", "spin", "turn"]),
    ("scale", &["s", "resize", "size", "stretch"]),
    ("resize", &["scale", "s", "size"]),
    ("select", &["box select", "circle select", "choose", "pick"]),
    ("transform", &["grab", "rotate", "scale", "g", "r", "s", "move"]),
    ("extrude", &["e", "extend", "pull"]),
    ("copy", &["duplicate", "shift+d", "clone"]),
    ("duplicate", &["shift+d", "copy", "clone"]),
    ("clone", &["duplicate", "shift+d", "copy"]),
    ("join", &["combine", "merge", "ctrl+j"]),
    ("combine", &["join", "merge", "ctrl+j"]),
    ("merge", &["join", "combine", "ctrl+j", "merge vertices"]),
    ("save", &["ctrl+s", "save as", "save file"]),
    ("undo", &["ctrl+z"]),
    ("redo", &["ctrl+shift+z", "ctrl+y"]),
    ("loop cut", &["ctrl+r", "edge loop"]),
    ("subdivide", &["subdivision"]),
    ("render", &["f12", "rendering", "rendered view"]),
    ("uv", &["unwrap", "texture", "mapping"]),
    ("view", &["viewport", "camera", "perspective", "orthographic"]),
    ("camera", &["camera view", "numpad 0", "viewport", "view"]),
    ("hide", &["show", "visible", "invisible", "h"]),
    ("edit mode", &["tab", "editing"]),
    ("object mode", &["tab", "leave edit mode"]),
    ("wireframe", &["toggle wireframe", "z"]),
    ("material", &["shader", "texture"]),
    ("parent", &["ctrl+p", "parenting"]),
    ("constraint", &["restrict", "limit"]),
];

/// Multi-word phrases with their own expansions
const PHRASES: &[(&str, &[&str])] = &[
    ("add cube", &["shift+a", "add mesh cube", "add menu"]),
    ("create cube", &["shift+a", "add mesh cube", "add menu"]),
    ("new object", &["shift+a", "add menu", "add object"]),
    ("delete object", &["delete", "x"]),
    ("move object", &["grab", "g"]),
    ("rotate object", &["rotate", "r"]),
    ("scale object", &["scale", "s"]),
];

const OBJECT_NOUNS: &[&str] = &["cube", "object", "mesh", "primitive"];
const CREATE_VERBS: &[&str] = &["add", "create", "new"];

const INFORMATIONAL_PHRASES: &[&str] = &["how to", "how do i", "what is", "how can i", "tutorial"];

/// Normalize a raw query into an expanded, space-separated term list
///
/// 1. Lower-case
/// 2. Drop stop words (whole words only, so "cat" keeps its "a")
/// 3. Bare "add"/"add menu"/"create" → [`ADD_MENU_EXPANSION`]
/// 4. Append synonyms and phrase expansions (never removes a term)
///
/// # Examples
/// ```
/// # use shortcut_finder::normalize::normalize;
/// assert_eq!(normalize(""), "");
/// assert!(normalize("how to add a cube").starts_with("add cube"));
/// ```
pub fn normalize(raw: &str) -> String {
    let cleaned = strip_stop_words(raw);

    if cleaned.is_empty() {
        return String::new();
    }

    if ADD_MENU_QUERIES.contains(&cleaned.as_str()) {
        return ADD_MENU_EXPANSION.to_string();
    }

    let words: Vec<&str> = cleaned.split_whitespace().collect();
    let mut terms = TermList::default();
    for word in &words {
        terms.push(word);
    }

    for (phrase, synonyms) in SYNONYMS {
        if cleaned.contains(phrase) {
            terms.extend(synonyms);
        }
        if words.iter().any(|w| synonyms.contains(w)) {
            terms.push(phrase);
            terms.extend(synonyms);
        }
    }

    for (phrase, expansions) in PHRASES {
        if cleaned.contains(phrase) {
            terms.extend(expansions);
        }
    }

    let mentions_object = OBJECT_NOUNS.iter().any(|n| cleaned.contains(n));
    let wants_new = CREATE_VERBS.iter().any(|v| cleaned.contains(v));
    if mentions_object && wants_new {
        terms.extend(&["shift+a", "add menu"]);
    }

    let normalized = terms.join();
    trace!(raw, normalized = %normalized, "normalized query");
    normalized
}

/// Lower-case the query and drop stop words, keeping word order
///
/// Kept words lose leading and trailing punctuation ("cube?" → "cube"), but
/// `+` survives so key combinations like "shift+" stay intact.
pub fn strip_stop_words(raw: &str) -> String {
    raw.to_lowercase()
        .split_whitespace()
        .filter(|word| !is_stop_word(word))
        .map(trim_punctuation)
        .collect::<Vec<_>>()
        .join(" ")
}

fn trim_punctuation(word: &str) -> &str {
    word.trim_matches(|c: char| !c.is_alphanumeric() && c != '+')
}

/// Check a single word against the stop list, ignoring surrounding punctuation
///
/// Pure punctuation ("?", "--") counts as a stop word; a lone `+` does not,
/// since it can be part of a key combination.
pub fn is_stop_word(word: &str) -> bool {
    let bare = word.trim_matches(|c: char| !c.is_alphanumeric());
    if bare.is_empty() {
        return !word.contains('+');
    }
    STOP_WORDS.contains(&bare)
}

/// Single-word synonyms of `word`, looked up in both directions
///
/// Key names ("g", "shift+d") and multi-word phrases are left out, so the
/// result only relates plain words such as "move" and "grab".
pub fn word_synonyms(word: &str) -> Vec<&'static str> {
    let mut related = Vec::new();
    for (phrase, synonyms) in SYNONYMS {
        if *phrase == word {
            related.extend(synonyms.iter().copied());
        } else if synonyms.contains(&word) {
            related.push(*phrase);
        }
    }
    related.retain(|t| t.len() > 2 && t.chars().all(char::is_alphabetic));
    related
}

/// Split a normalized query into matchable tokens (longer than one char)
pub fn tokenize(normalized: &str) -> Vec<&str> {
    normalized
        .split_whitespace()
        .filter(|t| t.chars().count() > 1)
        .collect()
}

/// True if the normalized query has anything worth matching
pub fn has_searchable_terms(normalized: &str) -> bool {
    !tokenize(normalized).is_empty()
}

/// Check whether a query reads like a general question rather than a lookup
pub fn is_informational_query(raw: &str) -> bool {
    let lower = raw.to_lowercase();
    INFORMATIONAL_PHRASES.iter().any(|p| lower.contains(p))
}

/// Order-preserving list of unique terms
#[derive(Default)]
struct TermList<'a> {
    seen: FxHashSet<&'a str>,
    terms: Vec<&'a str>,
}

impl<'a> TermList<'a> {
    fn push(&mut self, term: &'a str) {
        if self.seen.insert(term) {
            self.terms.push(term);
        }
    }

    fn extend(&mut self, terms: &[&'a str]) {
        for term in terms {
            self.push(term);
        }
    }

    fn join(&self) -> String {
        self.terms.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_only_stop_words() {
        assert_eq!(normalize("how do i"), "");
        assert!(!has_searchable_terms(&normalize("what is the key")));
    }

    #[test]
    fn test_stop_words_are_whole_words() {
        assert_eq!(strip_stop_words("a cat"), "cat");
        assert_eq!(strip_stop_words("how to add a cube"), "add cube");
        assert_eq!(strip_stop_words("Transform Into"), "transform into");
    }

    #[test]
    fn test_kept_words_lose_punctuation() {
        assert_eq!(strip_stop_words("add?"), "add");
        assert_eq!(strip_stop_words("how do i add a cube?"), "add cube");
        assert_eq!(strip_stop_words("(extrude), please!"), "extrude please");
        assert_eq!(strip_stop_words("ctrl+ z"), "ctrl+ z");
    }

    #[test]
    fn test_question_mark_keeps_add_expansion() {
        assert_eq!(normalize("add?"), ADD_MENU_EXPANSION);
        assert_eq!(normalize("How do I create?"), ADD_MENU_EXPANSION);
    }

    #[test]
    fn test_stop_word_with_punctuation() {
        assert!(is_stop_word("how?"));
        assert!(is_stop_word("?"));
        assert!(!is_stop_word("cat"));
        assert!(!is_stop_word("+"));
    }

    #[test]
    fn test_add_menu_special_case() {
        assert_eq!(normalize("add"), ADD_MENU_EXPANSION);
        assert_eq!(normalize("Add Menu"), ADD_MENU_EXPANSION);
        assert_eq!(normalize("how do i create"), ADD_MENU_EXPANSION);
        assert_ne!(normalize("add cube"), ADD_MENU_EXPANSION);
    }

    #[test]
    fn test_synonyms_are_additive() {
        let normalized = normalize("duplicate");
        assert!(normalized.starts_with("duplicate"));
        assert!(normalized.contains("copy"));
        assert!(normalized.contains("shift+d"));
    }

    #[test]
    fn test_reverse_synonym_for_single_key() {
        let normalized = normalize("x");
        assert!(normalized.starts_with("x "));
        assert!(normalized.contains("delete"));
    }

    #[test]
    fn test_add_cube_gets_add_menu_terms() {
        let normalized = normalize("how to add a cube");
        assert!(normalized.contains("shift+a"));
        assert!(normalized.contains("add menu"));
        assert!(normalized.contains("add mesh cube"));
    }

    #[test]
    fn test_terms_are_unique() {
        let normalized = normalize("move grab");
        let count = normalized.split_whitespace().filter(|t| *t == "grab").count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_word_synonyms_both_directions() {
        let move_words = word_synonyms("move");
        assert!(move_words.contains(&"grab"));
        assert!(move_words.contains(&"translate"));
        assert!(!move_words.contains(&"g"));

        assert!(word_synonyms("grab").contains(&"move"));
        assert!(word_synonyms("erase").contains(&"delete"));
        assert!(word_synonyms("banana").is_empty());
    }

    #[test]
    fn test_tokenize_drops_short_tokens() {
        assert_eq!(tokenize("x delete  g move"), vec!["delete", "move"]);
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_informational_query() {
        assert!(is_informational_query("How do I bevel edges"));
        assert!(is_informational_query("bevel tutorial"));
        assert!(!is_informational_query("bevel"));
    }
}
