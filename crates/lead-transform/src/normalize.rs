//! The row-to-record normalizer.

use lead_ingest::ColumnMap;
use lead_model::{LeadRecord, columns};

use crate::normalization::{format_create_date, parse_create_date, parse_submission_count};

/// Normalizes one data row into a [`LeadRecord`].
///
/// Total function: every malformed or missing field degrades to its
/// documented default (empty string, `false`, `0`) rather than failing.
/// Degradations that lose information are traced so a run can be audited.
pub fn normalize_record(map: &ColumnMap, row: &[String]) -> LeadRecord {
    let company = map.value(row, columns::COMPANY_NAME);
    let industry = map.value(row, columns::YOUR_INDUSTRY);

    let raw_date = map.value(row, columns::CREATE_DATE);
    let create_date = match parse_create_date(raw_date) {
        Some(dt) => format_create_date(dt),
        None => {
            if !raw_date.is_empty() {
                tracing::debug!(value = raw_date, "unparseable create date, emitting empty");
            }
            String::new()
        }
    };

    let raw_count = map.value(row, columns::FORM_SUBMISSIONS);
    let form_submissions = match parse_submission_count(raw_count) {
        Some(count) => count,
        None => {
            if !raw_count.is_empty() {
                tracing::warn!(value = raw_count, "non-numeric submission count, using 0");
            }
            0
        }
    };

    LeadRecord {
        id: map.value(row, columns::RECORD_ID).to_string(),
        first_name: map.value(row, columns::FIRST_NAME).to_string(),
        last_name: map.value(row, columns::LAST_NAME).to_string(),
        email: map.value(row, columns::EMAIL).to_string(),
        phone: map.value(row, columns::PHONE_NUMBER).to_string(),
        company: company.to_string(),
        industry: industry.to_string(),
        state: map.value(row, columns::STATE_REGION).to_string(),
        create_date,
        traffic_source: map.value(row, columns::LATEST_TRAFFIC_SOURCE).to_string(),
        traffic_source_detail: map
            .value(row, columns::LATEST_TRAFFIC_SOURCE_DRILL_DOWN)
            .to_string(),
        original_traffic_source: map.value(row, columns::ORIGINAL_TRAFFIC_SOURCE).to_string(),
        form_type: map.value(row, columns::RECORD_SOURCE_DETAIL).to_string(),
        is_complete: !company.is_empty() && !industry.is_empty(),
        record_source: map.value(row, columns::RECORD_SOURCE).to_string(),
        message: map.value(row, columns::MESSAGE).to_string(),
        lead_status: map.value(row, columns::LEAD_STATUS).to_string(),
        form_submissions,
    }
}
