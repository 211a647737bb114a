//! Seed-data JSON output.
//!
//! Serializes the normalized records as a single pretty-printed JSON array
//! (2-space indentation) and writes it to the target path in one call,
//! overwriting any existing file. The parent directory is not created: a
//! missing output directory aborts the run, matching the one-shot migration
//! contract.

use std::path::{Path, PathBuf};

use thiserror::Error;

use lead_model::LeadRecord;

/// Errors that can occur while writing the seed file.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Records failed to serialize.
    #[error("failed to serialize seed data: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Target path could not be written (missing directory, permissions).
    #[error("failed to write seed file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;

/// Renders the records as the seed-file document.
///
/// Deterministic: identical records produce identical bytes. Field order is
/// fixed by [`LeadRecord`]'s declaration order.
pub fn render_seed_json(records: &[LeadRecord]) -> Result<String> {
    let json = serde_json::to_string_pretty(records)?;
    Ok(format!("{json}\n"))
}

/// Serializes the records and writes them to `path`, overwriting any
/// existing file. Returns the path written.
pub fn write_seed_json(path: &Path, records: &[LeadRecord]) -> Result<PathBuf> {
    let document = render_seed_json(records)?;
    std::fs::write(path, document).map_err(|source| OutputError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), records = records.len(), "seed file written");
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> LeadRecord {
        LeadRecord {
            id: "42".to_string(),
            first_name: "Ann".to_string(),
            company: "Acme".to_string(),
            industry: "Tech".to_string(),
            state: String::new(),
            create_date: "2023-01-01T09:00:00Z".to_string(),
            is_complete: true,
            form_submissions: 2,
            ..LeadRecord::default()
        }
    }

    #[test]
    fn renders_empty_array() {
        let document = render_seed_json(&[]).expect("render");
        assert_eq!(document, "[]\n");
    }

    #[test]
    fn renders_pretty_two_space_document() {
        let document = render_seed_json(&[sample_record()]).expect("render");
        insta::assert_snapshot!(document, @r#"
        [
          {
            "id": "42",
            "firstName": "Ann",
            "lastName": "",
            "email": "",
            "phone": "",
            "company": "Acme",
            "industry": "Tech",
            "state": "",
            "createDate": "2023-01-01T09:00:00Z",
            "trafficSource": "",
            "trafficSourceDetail": "",
            "originalTrafficSource": "",
            "formType": "",
            "isComplete": true,
            "recordSource": "",
            "message": "",
            "leadStatus": "",
            "formSubmissions": 2
          }
        ]
        "#);
    }

    #[test]
    fn rendering_is_deterministic() {
        let records = vec![sample_record(), LeadRecord::default()];
        let first = render_seed_json(&records).expect("render");
        let second = render_seed_json(&records).expect("render");
        assert_eq!(first, second);
    }

    #[test]
    fn writes_and_overwrites_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("initial_data.json");
        std::fs::write(&path, "stale").expect("seed stale file");

        let written = write_seed_json(&path, &[sample_record()]).expect("write seed");
        assert_eq!(written, path);
        let contents = std::fs::read_to_string(&path).expect("read back");
        assert!(contents.starts_with("[\n  {\n    \"id\": \"42\","));
        assert!(contents.ends_with("]\n"));
    }

    #[test]
    fn missing_output_directory_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("no-such-dir").join("initial_data.json");
        let result = write_seed_json(&path, &[]);
        assert!(matches!(result, Err(OutputError::FileWrite { .. })));
    }
}
