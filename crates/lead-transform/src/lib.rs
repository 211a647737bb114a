//! Normalization of raw lead rows into [`lead_model::LeadRecord`] values.
//!
//! The entry point is [`normalize_record`]; the lower-level field coercions
//! live in [`normalization`].

pub mod normalization;
mod normalize;

pub use normalize::normalize_record;
