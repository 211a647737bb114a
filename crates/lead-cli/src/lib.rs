//! CLI library components for the Lead Seeder.

pub mod logging;
pub mod pipeline;
