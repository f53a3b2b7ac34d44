// Integration tests for ShortcutSearch over the embedded sheet

use shortcut_finder::parser::normalize_keys;
use shortcut_finder::{SearchConfig, SearchOutcome, ShortcutError, ShortcutSearch};

fn engine() -> ShortcutSearch {
    ShortcutSearch::new().unwrap()
}

// ============ Engine Setup ============

#[test]
fn test_search_creation() {
    let _search = engine();
}

#[test]
fn test_stats() {
    let (records, categories) = engine().stats();
    assert!(records > 50);
    assert!(categories >= 6);
}

#[test]
fn test_corpus_is_enriched() {
    let search = engine();
    let corpus = search.corpus();

    assert_eq!(normalize_keys(&corpus[0].keys), "shift+a");
    assert!(corpus[0].high_priority);
    for keys in ["F2", "F3", "Alt + M"] {
        assert!(corpus.iter().any(|r| r.keys == keys), "missing {}", keys);
    }
}

#[test]
fn test_missing_file_error() {
    let result = ShortcutSearch::from_path("/nonexistent/shortcuts.txt");
    assert!(matches!(result, Err(ShortcutError::Io { .. })));
}

#[test]
fn test_empty_sheet_error() {
    let result = ShortcutSearch::from_text("// nothing here\n\nHeader Only\n");
    assert!(matches!(result, Err(ShortcutError::EmptyCorpus)));
}

// ============ Ranking ============

#[test]
fn test_add_a_cube() {
    let results = engine().search("how do i add a cube");
    assert_eq!(results[0].keys, "Shift + A");
}

#[test]
fn test_bare_add() {
    let results = engine().search("add");
    assert_eq!(normalize_keys(&results[0].keys), "shift+a");
}

#[test]
fn test_single_key_query() {
    let results = engine().search("x");
    assert_eq!(results[0].keys, "X");
}

#[test]
fn test_loop_cut() {
    let results = engine().search("loop cut");
    assert_eq!(results[0].keys, "Ctrl + R");
}

#[test]
fn test_scores_descending() {
    let results = engine().search_scored("rotate view");

    assert!(!results.is_empty());
    for pair in results.windows(2) {
        assert!(
            pair[0].score >= pair[1].score,
            "Results not sorted: {} < {}",
            pair[0].score,
            pair[1].score
        );
    }
}

#[test]
fn test_search_limit() {
    let search = engine();
    let results = search.search_limit("mode", 3);

    assert!(results.len() <= 3);
    assert_eq!(results, search.search("mode")[..results.len()].to_vec());
}

#[test]
fn test_repeated_search_is_stable() {
    let search = engine();
    assert_eq!(search.search("select"), search.search("select"));
}

#[test]
fn test_one_result_per_shortcut() {
    let results = engine().search("move");
    let grabs = results.iter().filter(|r| r.keys == "G").count();
    assert_eq!(grabs, 1);
}

// ============ Outcomes ============

#[test]
fn test_outcome_no_query() {
    assert_eq!(engine().search_outcome("  "), SearchOutcome::NoQuery);
}

#[test]
fn test_outcome_ranked() {
    let outcome = engine().search_outcome("extrude");
    assert!(matches!(outcome, SearchOutcome::Ranked(_)));
    assert!(!outcome.is_empty());
}

#[test]
fn test_outcome_partial() {
    match engine().search_outcome("renamed") {
        SearchOutcome::Partial(records) => {
            assert!(records.iter().any(|r| r.keys == "F2"));
        }
        other => panic!("expected partial matches, got {:?}", other),
    }
}

#[test]
fn test_outcome_no_matches() {
    let outcome = engine().search_outcome("qqqq zzzz");
    assert_eq!(outcome, SearchOutcome::NoMatches);
    assert!(outcome.records().is_empty());
}

#[test]
fn test_fallback_can_be_disabled() {
    let search = engine().with_config(SearchConfig {
        partial_fallback: false,
        ..SearchConfig::default()
    });
    assert_eq!(search.search_outcome("renamed"), SearchOutcome::NoMatches);
}

// ============ Serialization ============

#[test]
fn test_json_fields() {
    let results = engine().search_limit("undo", 1);
    let value = serde_json::to_value(&results[0]).unwrap();

    assert_eq!(value["keys"], "Ctrl + Z");
    assert_eq!(value["action"], "Undo");
    assert!(value.get("category").is_some());
    assert!(value.get("search_terms").is_none());
    assert!(value.get("high_priority").is_none());
}
