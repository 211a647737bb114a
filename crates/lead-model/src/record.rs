//! The normalized lead record.

use serde::{Deserialize, Serialize};

/// One normalized lead, as serialized into the seed-data JSON array.
///
/// Field order matters: serialization preserves declaration order, and the
/// seed file is expected to be byte-stable across runs. String fields hold
/// the source cell verbatim, or the empty string when the source column is
/// absent or the cell is empty — the two cases are deliberately not
/// distinguished.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRecord {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub industry: String,
    pub state: String,
    /// `YYYY-MM-DDTHH:MM:SSZ` on a successful parse, empty string otherwise.
    /// The trailing `Z` is a label carried over from the source system; the
    /// export's timezone is unknown and no conversion is performed.
    pub create_date: String,
    pub traffic_source: String,
    pub traffic_source_detail: String,
    pub original_traffic_source: String,
    pub form_type: String,
    /// True iff both `company` and `industry` are non-empty.
    pub is_complete: bool,
    pub record_source: String,
    pub message: String,
    pub lead_status: String,
    pub form_submissions: i64,
}
