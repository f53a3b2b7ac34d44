// Shortcut Finder Data Loader
// Embedded default hotkey sheet and file loading

use crate::parser::parse_shortcuts;
use crate::types::{ShortcutError, ShortcutRecord};
use std::path::Path;

/// Embedded Blender hotkey sheet (line format: headers and `Keys: Action`)
pub const DEFAULT_SHEET: &str = include_str!("../data/blender_shortcuts.txt");

/// Data loader utility
pub struct DataLoader;

impl DataLoader {
    /// Raw text of the embedded sheet
    pub fn default_sheet() -> &'static str {
        DEFAULT_SHEET
    }

    /// Parse the embedded sheet
    pub fn default_records() -> Vec<ShortcutRecord> {
        parse_shortcuts(DEFAULT_SHEET)
    }

    /// Read and parse a sheet from disk
    ///
    /// Fails if the file cannot be read or yields no valid records.
    pub fn load_path(path: impl AsRef<Path>) -> Result<Vec<ShortcutRecord>, ShortcutError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ShortcutError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::load_text(&text)
    }

    /// Parse a sheet held in memory, rejecting one with no valid records
    pub fn load_text(text: &str) -> Result<Vec<ShortcutRecord>, ShortcutError> {
        let records = parse_shortcuts(text);
        if records.is_empty() {
            return Err(ShortcutError::EmptyCorpus);
        }
        Ok(records)
    }

    /// Get embedded data info
    pub fn info() -> DataInfo {
        let records = Self::default_records();
        let mut categories: Vec<&str> = records.iter().map(|r| r.category.as_str()).collect();
        categories.sort_unstable();
        categories.dedup();

        DataInfo {
            sheet_size: DEFAULT_SHEET.len(),
            record_count: records.len(),
            category_count: categories.len(),
        }
    }
}

/// Information about the embedded sheet
#[derive(Debug, Clone)]
pub struct DataInfo {
    /// Size of the sheet in bytes
    pub sheet_size: usize,
    /// Valid shortcut lines
    pub record_count: usize,
    /// Distinct category headers in use
    pub category_count: usize,
}
