//! Data model for lead seed records.
//!
//! The central type is [`LeadRecord`], the normalized shape of one lead row
//! as consumed by the downstream application's seed loader. Source column
//! names live in [`columns`] so the ingest and transform crates agree on
//! spelling.

pub mod columns;
pub mod record;

pub use record::LeadRecord;
