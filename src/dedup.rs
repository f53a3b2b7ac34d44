// Shortcut Finder Deduplicator
// Collapses records that describe the same shortcut, keeping the best one

use crate::normalize::{word_synonyms, STOP_WORDS};
use crate::parser::{compact_keys, normalize_keys};
use crate::types::ShortcutRecord;
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Ordering;

/// Collapse duplicate shortcuts
///
/// Records are grouped by [`normalize_keys`]. Inside a group, records whose
/// actions share a significant word, or a synonym of one ("Move" and
/// "Grab"), describe the same operation and collapse to one representative.
/// Actions with nothing in common stay separate.
///
/// The representative takes the position of the group's first member, so a
/// ranked input stays ranked.
///
/// # Representative Preference
/// 1. The canonical Add Menu entry (`shift+a` + "add menu")
/// 2. A high-priority record
/// 3. A more trusted category ("General" > any named category > none)
/// 4. The longer, more descriptive action
/// 5. The earlier record
pub fn deduplicate(records: Vec<ShortcutRecord>) -> Vec<ShortcutRecord> {
    deduplicate_by(records, |record| record)
}

/// [`deduplicate`] for items that wrap a record, such as scored matches
pub fn deduplicate_by<T, F>(items: Vec<T>, record_of: F) -> Vec<T>
where
    F: Fn(&T) -> &ShortcutRecord,
{
    let mut clusters: Vec<Cluster<T>> = Vec::new();
    let mut by_keys: FxHashMap<String, Vec<usize>> = FxHashMap::default();

    for item in items {
        let record = record_of(&item);
        let words = operation_words(&record.action);
        let candidates = by_keys.entry(normalize_keys(&record.keys)).or_default();

        let existing = candidates
            .iter()
            .copied()
            .find(|&idx| clusters[idx].same_operation(&words));

        match existing {
            Some(idx) => {
                let cluster = &mut clusters[idx];
                cluster.words.extend(words);
                if prefer(record_of(&item), record_of(&cluster.best)) == Ordering::Greater {
                    cluster.best = item;
                }
            }
            None => {
                candidates.push(clusters.len());
                clusters.push(Cluster { best: item, words });
            }
        }
    }

    clusters.into_iter().map(|c| c.best).collect()
}

/// Items sharing keys and an operation
struct Cluster<T> {
    best: T,
    words: FxHashSet<String>,
}

impl<T> Cluster<T> {
    /// Shared word (synonyms included), or neither side has any
    fn same_operation(&self, words: &FxHashSet<String>) -> bool {
        if self.words.is_empty() && words.is_empty() {
            return true;
        }
        !self.words.is_disjoint(words)
    }
}

/// Compare two records for representative selection; `Greater` means `a` wins
fn prefer(a: &ShortcutRecord, b: &ShortcutRecord) -> Ordering {
    is_canonical_add_menu(a)
        .cmp(&is_canonical_add_menu(b))
        .then(a.high_priority.cmp(&b.high_priority))
        .then(category_trust(&a.category).cmp(&category_trust(&b.category)))
        .then(a.action.chars().count().cmp(&b.action.chars().count()))
}

fn is_canonical_add_menu(record: &ShortcutRecord) -> bool {
    compact_keys(&record.keys).contains("shift+a")
        && record.action.to_lowercase().contains("add menu")
}

/// How much a category label is trusted
fn category_trust(category: &str) -> u8 {
    let category = category.trim().to_lowercase();
    if category.contains("general") {
        2
    } else if !category.is_empty() {
        1
    } else {
        0
    }
}

/// Significant words of an action plus their single-word synonyms
fn operation_words(action: &str) -> FxHashSet<String> {
    let words = significant_words(action);
    let synonyms: Vec<String> = words
        .iter()
        .flat_map(|w| word_synonyms(w))
        .map(str::to_string)
        .collect();

    let mut all = words;
    all.extend(synonyms);
    all
}

/// Lower-case alphanumeric words of more than two chars that are not stop words
fn significant_words(action: &str) -> FxHashSet<String> {
    action
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| w.chars().count() > 2 && !STOP_WORDS.contains(w))
        .map(str::to_string)
        .collect()
}
