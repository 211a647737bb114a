//! End-to-end tests for the conversion driver.

use std::fs;
use std::path::{Path, PathBuf};

use lead_cli::pipeline::run_convert;

fn write_export(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("initial_data.csv");
    fs::write(&path, contents).expect("write export");
    path
}

const FULL_HEADER: &str = "Record ID,First Name,Last Name,Email,Phone Number,\
Company Name,Your Industry,State/Region,Create Date,Latest Traffic Source,\
Latest Traffic Source Drill-Down 1,Original Traffic Source,\
Record source detail 1,Record source,Message,Lead Status,\
Number of Form Submissions";

#[test]
fn end_to_end_produces_expected_document() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_export(
        dir.path(),
        "Record ID,First Name,Company Name,Your Industry,Create Date,Number of Form Submissions\n\
         42,Ann,Acme,Tech,2023-01-01 09:00,2\n",
    );
    let output = dir.path().join("initial_data.json");

    let result = run_convert(&input, &output).expect("run convert");
    assert_eq!(result.records, 1);
    assert_eq!(result.complete, 1);
    assert_eq!(result.missing_dates, 0);

    let document = fs::read_to_string(&output).expect("read seed file");
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
fn preserves_row_count_and_order() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_export(
        dir.path(),
        "Record ID,First Name\n3,Carol\n1,Ann\n2,Bob\n",
    );
    let output = dir.path().join("out.json");

    let result = run_convert(&input, &output).expect("run convert");
    assert_eq!(result.records, 3);

    let document = fs::read_to_string(&output).expect("read seed file");
    let records: Vec<serde_json::Value> =
        serde_json::from_str(&document).expect("parse seed file");
    let ids: Vec<&str> = records.iter().map(|r| r["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["3", "1", "2"]);
}

#[test]
fn full_header_with_empty_cells_degrades_silently() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_export(
        dir.path(),
        &format!("{FULL_HEADER}\n7,,,,,,,,not-a-date,,,,,,,,many\n"),
    );
    let output = dir.path().join("out.json");

    let result = run_convert(&input, &output).expect("run convert");
    assert_eq!(result.records, 1);
    assert_eq!(result.complete, 0);
    assert_eq!(result.missing_dates, 1);

    let document = fs::read_to_string(&output).expect("read seed file");
    let records: Vec<serde_json::Value> =
        serde_json::from_str(&document).expect("parse seed file");
    assert_eq!(records[0]["id"], "7");
    assert_eq!(records[0]["createDate"], "");
    assert_eq!(records[0]["isComplete"], false);
    assert_eq!(records[0]["formSubmissions"], 0);
}

#[test]
fn conversion_is_deterministic() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_export(
        dir.path(),
        "Record ID,Company Name,Your Industry\n1,Acme,Tech\n2,,\n",
    );

    let first_path = dir.path().join("first.json");
    let second_path = dir.path().join("second.json");
    run_convert(&input, &first_path).expect("first run");
    run_convert(&input, &second_path).expect("second run");

    let first = fs::read(&first_path).expect("read first");
    let second = fs::read(&second_path).expect("read second");
    assert_eq!(first, second);
}

#[test]
fn header_only_export_yields_empty_array() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_export(dir.path(), &format!("{FULL_HEADER}\n"));
    let output = dir.path().join("out.json");

    let result = run_convert(&input, &output).expect("run convert");
    assert_eq!(result.records, 0);
    assert_eq!(fs::read_to_string(&output).expect("read seed file"), "[]\n");
}

#[test]
fn empty_export_yields_empty_array() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_export(dir.path(), "");
    let output = dir.path().join("out.json");

    let result = run_convert(&input, &output).expect("run convert");
    assert_eq!(result.records, 0);
    assert_eq!(fs::read_to_string(&output).expect("read seed file"), "[]\n");
}

#[test]
fn missing_input_aborts() {
    let dir = tempfile::tempdir().expect("temp dir");
    let result = run_convert(
        &dir.path().join("no-such.csv"),
        &dir.path().join("out.json"),
    );
    assert!(result.is_err());
}

#[test]
fn missing_output_directory_aborts() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_export(dir.path(), "Record ID\n1\n");
    let result = run_convert(&input, &dir.path().join("no-such-dir").join("out.json"));
    assert!(result.is_err());
}
