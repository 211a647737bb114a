//! In-memory CSV table loading.

use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{IngestError, Result};

/// A fully loaded CSV table: one header row plus zero or more data rows.
///
/// Data rows are padded or truncated to header width so positional lookups
/// never go out of bounds. Cells are kept verbatim; only headers are
/// normalized (trimmed, BOM stripped).
#[derive(Debug, Clone)]
pub struct LeadTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl LeadTable {
    /// Number of data rows (header excluded).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn normalize_header(raw: &str) -> String {
    raw.trim_matches('\u{feff}').trim().to_string()
}

/// Reads the whole source CSV into memory.
///
/// The first record is taken as the header row. Data rows shorter than the
/// header are padded with empty cells, longer rows are truncated. A file with
/// a header row but no data rows yields an empty table; a file with no
/// records at all yields a fully empty table (no headers either), which
/// downstream serializes as an empty array.
pub fn read_lead_table(path: &Path) -> Result<LeadTable> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut records = reader.records();
    let header_record = match records.next() {
        Some(record) => record.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            source: e,
        })?,
        None => {
            tracing::debug!(path = %path.display(), "lead export has no records");
            return Ok(LeadTable {
                headers: Vec::new(),
                rows: Vec::new(),
            });
        }
    };
    let headers: Vec<String> = header_record.iter().map(normalize_header).collect();

    let mut rows = Vec::new();
    for record in records {
        let record = record.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            row.push(record.get(idx).unwrap_or("").to_string());
        }
        rows.push(row);
    }

    tracing::debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = rows.len(),
        "loaded lead table"
    );
    Ok(LeadTable { headers, rows })
}
