//! The conversion driver: ingest, normalize, write.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use lead_ingest::{ColumnMap, read_lead_table};
use lead_model::LeadRecord;
use lead_output::write_seed_json;
use lead_transform::normalize_record;

/// Outcome of one conversion run.
#[derive(Debug)]
pub struct ConvertResult {
    pub input: PathBuf,
    pub output: PathBuf,
    pub records: usize,
    pub complete: usize,
    pub missing_dates: usize,
}

/// Runs the whole conversion: read the export at `input`, normalize every
/// row in order, write the JSON seed file to `output`.
///
/// Per-field problems degrade silently inside normalization; only whole-run
/// failures (missing input, CSV-level parse failure, unwritable output)
/// surface here and abort. No partial-output guarantee is made on failure.
pub fn run_convert(input: &Path, output: &Path) -> Result<ConvertResult> {
    let span = info_span!("convert", input = %input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let table = read_lead_table(input).context("read lead export")?;
    let map = ColumnMap::from_headers(&table.headers);
    info!(
        rows = table.len(),
        mapped_columns = map.mapped_count(),
        "lead export loaded"
    );

    let records: Vec<LeadRecord> = table
        .rows
        .iter()
        .map(|row| normalize_record(&map, row))
        .collect();
    let complete = records.iter().filter(|r| r.is_complete).count();
    let missing_dates = records
        .iter()
        .filter(|r| r.create_date.is_empty())
        .count();

    write_seed_json(output, &records).context("write seed file")?;
    info!(
        records = records.len(),
        complete,
        missing_dates,
        duration_ms = start.elapsed().as_millis(),
        "conversion complete"
    );

    Ok(ConvertResult {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        records: records.len(),
        complete,
        missing_dates,
    })
}
