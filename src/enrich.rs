// Shortcut Finder Record Enrichment
// Makes sure commonly searched shortcuts exist in a parsed corpus

use crate::parser::normalize_keys;
use crate::types::ShortcutRecord;
use tracing::debug;

/// A shortcut people search for often enough that it must be present
struct CanonicalShortcut {
    category: &'static str,
    keys: &'static str,
    action: &'static str,
    terms: &'static str,
    /// Prepended instead of appended, and moved to the front when found
    top: bool,
}

const CANONICAL_SHORTCUTS: &[CanonicalShortcut] = &[
    CanonicalShortcut {
        category: "General Shortcuts",
        keys: "Shift + A",
        action: "Add Menu (Create New Objects)",
        terms: "add menu create new object mesh cube sphere plane light camera curve \
                add cube add sphere add plane add object shift+a primary",
        top: true,
    },
    CanonicalShortcut {
        category: "Object Mode",
        keys: "F2",
        action: "Rename Object",
        terms: "rename object name change label f2",
        top: false,
    },
    CanonicalShortcut {
        category: "General Shortcuts",
        keys: "F3",
        action: "Search Menu",
        terms: "search find command tool menu f3",
        top: false,
    },
    CanonicalShortcut {
        category: "Edit Mode",
        keys: "E",
        action: "Extrude",
        terms: "extrude mesh modeling",
        top: false,
    },
    CanonicalShortcut {
        category: "Object Mode",
        keys: "Ctrl + A",
        action: "Apply Transformations",
        terms: "apply transformation location rotation scale ctrl+a",
        top: false,
    },
    CanonicalShortcut {
        category: "Edit Mode",
        keys: "Alt + M",
        action: "Merge Vertices",
        terms: "merge vertices points alt+m",
        top: false,
    },
];

/// Insert any missing commonly searched shortcuts
///
/// For each canonical shortcut, an existing record with the same normalized
/// keys and an overlapping action (either contains the other) is marked
/// high-priority and gains the canonical search terms. Otherwise the
/// canonical record is inserted: at the front for top-priority entries,
/// at the end for the rest.
///
/// Running this twice leaves the corpus unchanged the second time.
pub fn enrich_missing_common(records: &mut Vec<ShortcutRecord>) {
    for canonical in CANONICAL_SHORTCUTS {
        let keys = normalize_keys(canonical.keys);
        let action = normalize_action(canonical.action);

        let existing = records.iter().position(|r| {
            let other = normalize_action(&r.action);
            normalize_keys(&r.keys) == keys && (other.contains(&action) || action.contains(&other))
        });

        match existing {
            Some(idx) => {
                let record = &mut records[idx];
                record.high_priority = true;
                if !record.search_terms.contains(canonical.terms) {
                    record.search_terms.push(' ');
                    record.search_terms.push_str(canonical.terms);
                }
                debug!(keys = %record.keys, action = %record.action, "marked canonical shortcut");

                if canonical.top && idx != 0 {
                    let record = records.remove(idx);
                    records.insert(0, record);
                }
            }
            None => {
                let record = ShortcutRecord::new(canonical.category, canonical.keys, canonical.action)
                    .with_terms(canonical.terms)
                    .with_high_priority(true);
                debug!(keys = %record.keys, action = %record.action, "inserted canonical shortcut");

                if canonical.top {
                    records.insert(0, record);
                } else {
                    records.push(record);
                }
            }
        }
    }
}

/// Lower-case with whitespace collapsed
fn normalize_action(action: &str) -> String {
    action
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
