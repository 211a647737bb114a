//! Lead data ingestion.
//!
//! Loads the source CSV export into an in-memory [`LeadTable`] and builds a
//! [`ColumnMap`] from its header row so downstream normalization reads cells
//! through a fixed name-to-index mapping.

mod column_map;
mod error;
mod table;

pub use column_map::ColumnMap;
pub use error::{IngestError, Result};
pub use table::{LeadTable, read_lead_table};
