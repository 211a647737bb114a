//! Source CSV column names.
//!
//! These match the export's header row exactly, spelling and case included.
//! A header that does not match is treated as an unknown column and ignored.

pub const RECORD_ID: &str = "Record ID";
pub const FIRST_NAME: &str = "First Name";
pub const LAST_NAME: &str = "Last Name";
pub const EMAIL: &str = "Email";
pub const PHONE_NUMBER: &str = "Phone Number";
pub const COMPANY_NAME: &str = "Company Name";
pub const YOUR_INDUSTRY: &str = "Your Industry";
pub const STATE_REGION: &str = "State/Region";
pub const CREATE_DATE: &str = "Create Date";
pub const LATEST_TRAFFIC_SOURCE: &str = "Latest Traffic Source";
pub const LATEST_TRAFFIC_SOURCE_DRILL_DOWN: &str = "Latest Traffic Source Drill-Down 1";
pub const ORIGINAL_TRAFFIC_SOURCE: &str = "Original Traffic Source";
pub const RECORD_SOURCE_DETAIL: &str = "Record source detail 1";
pub const RECORD_SOURCE: &str = "Record source";
pub const MESSAGE: &str = "Message";
pub const LEAD_STATUS: &str = "Lead Status";
pub const FORM_SUBMISSIONS: &str = "Number of Form Submissions";

/// All recognized source columns, in record-field order.
pub const ALL: &[&str] = &[
    RECORD_ID,
    FIRST_NAME,
    LAST_NAME,
    EMAIL,
    PHONE_NUMBER,
    COMPANY_NAME,
    YOUR_INDUSTRY,
    STATE_REGION,
    CREATE_DATE,
    LATEST_TRAFFIC_SOURCE,
    LATEST_TRAFFIC_SOURCE_DRILL_DOWN,
    ORIGINAL_TRAFFIC_SOURCE,
    RECORD_SOURCE_DETAIL,
    RECORD_SOURCE,
    MESSAGE,
    LEAD_STATUS,
    FORM_SUBMISSIONS,
];
