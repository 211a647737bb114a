//! Fixed header-to-index column mapping.
//!
//! Built once from the header row instead of looking columns up by name per
//! cell, so a misspelled column name in code fails a test immediately rather
//! than silently defaulting every row.

use std::collections::BTreeMap;

use lead_model::columns;

/// Maps recognized source column names to their position in the header row.
///
/// Columns missing from the export stay unmapped and read as empty, matching
/// the tolerate-missing-columns contract. Unknown extra columns are ignored.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    indices: BTreeMap<&'static str, usize>,
}

impl ColumnMap {
    /// Builds the map from a normalized header row.
    ///
    /// When a recognized column appears more than once, the first occurrence
    /// wins and the duplicate is logged.
    pub fn from_headers(headers: &[String]) -> Self {
        let mut indices = BTreeMap::new();
        for (idx, header) in headers.iter().enumerate() {
            let Some(column) = columns::ALL.iter().copied().find(|c| *c == header.as_str())
            else {
                continue;
            };
            if indices.contains_key(column) {
                tracing::warn!(column, index = idx, "duplicate column in header, ignoring");
                continue;
            }
            indices.insert(column, idx);
        }
        for column in columns::ALL {
            if !indices.contains_key(column) {
                tracing::debug!(column, "column absent from export, fields will default");
            }
        }
        Self { indices }
    }

    /// Returns the cell for `column` in `row`, or `""` when the column is
    /// unmapped. An empty cell and a missing column are indistinguishable.
    pub fn value<'a>(&self, row: &'a [String], column: &str) -> &'a str {
        self.indices
            .get(column)
            .and_then(|idx| row.get(*idx))
            .map_or("", String::as_str)
    }

    /// Number of recognized columns found in the header.
    pub fn mapped_count(&self) -> usize {
        self.indices.len()
    }
}
