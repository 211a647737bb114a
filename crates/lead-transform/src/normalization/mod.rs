//! Normalization functions for lead record fields.
//!
//! - **datetime**: export-timestamp parsing and ISO 8601 formatting
//! - **numeric**: submission-count coercion

pub mod datetime;
pub mod numeric;

pub use datetime::{format_create_date, parse_create_date};
pub use numeric::parse_submission_count;
