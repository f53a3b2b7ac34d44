// Integration tests for the query normalizer

use shortcut_finder::normalize::{
    has_searchable_terms, is_informational_query, strip_stop_words, ADD_MENU_EXPANSION,
};
use shortcut_finder::{normalize, tokenize};

// ============ Stop Words ============

#[test]
fn test_stop_word_inside_word_is_kept() {
    assert_eq!(strip_stop_words("a cat"), "cat");
    assert!(normalize("a cat").starts_with("cat"));
}

#[test]
fn test_how_to_add_a_cube() {
    let normalized = normalize("how to add a cube");
    let words: Vec<&str> = normalized.split_whitespace().collect();

    assert!(words.contains(&"add"));
    assert!(words.contains(&"cube"));
    assert!(!words.contains(&"how"));
    assert!(!words.contains(&"to"));
    assert!(!words.contains(&"a"));
}

#[test]
fn test_trailing_punctuation_is_ignored() {
    assert_eq!(normalize("add?"), ADD_MENU_EXPANSION);

    let normalized = normalize("how do i add a cube?");
    let tokens = tokenize(&normalized);
    assert!(tokens.contains(&"cube"));
    assert!(!tokens.iter().any(|t| t.ends_with('?')));
}

#[test]
fn test_case_is_folded() {
    assert_eq!(strip_stop_words("HOW To EXTRUDE"), "extrude");
}

// ============ Expansion ============

#[test]
fn test_bare_add_queries_use_fixed_expansion() {
    for query in ["add", "ADD", "add menu", "create", "how do i add"] {
        assert_eq!(normalize(query), ADD_MENU_EXPANSION, "query: {}", query);
    }
}

#[test]
fn test_synonyms_extend_query() {
    let normalized = normalize("rotate");
    assert!(normalized.starts_with("rotate"));
    assert!(normalized.contains("spin"));
    assert!(normalized.contains("turn"));
}

#[test]
fn test_multi_word_synonym_key() {
    let normalized = normalize("loop cut");
    assert!(normalized.contains("ctrl+r"));
    assert!(normalized.contains("edge loop"));
}

#[test]
fn test_object_creation_heuristic() {
    let normalized = normalize("new mesh");
    assert!(normalized.contains("shift+a"));
    assert!(normalized.contains("add menu"));
}

// ============ Tokenization ============

#[test]
fn test_tokens_skip_single_chars() {
    let normalized = normalize("x");
    let tokens = tokenize(&normalized);

    assert!(!tokens.contains(&"x"));
    assert!(tokens.contains(&"delete"));
    assert!(normalized.split_whitespace().any(|t| t == "x"));
}

#[test]
fn test_empty_and_stop_word_queries() {
    assert_eq!(normalize(""), "");
    assert!(!has_searchable_terms(&normalize("how do i")));
    assert!(!has_searchable_terms(&normalize("q")));
}

#[test]
fn test_informational_queries() {
    assert!(is_informational_query("what is the knife tool"));
    assert!(!is_informational_query("knife"));
}
