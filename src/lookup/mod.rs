//! Lookup module — nearby enrichment records from a remote service
//!
//! Translates a set of numeric page ids into a deterministically ordered
//! list of [`EnrichmentRecord`]s. Missing per-record fields fall back to
//! a fixed sentinel; only whole-response failures surface as errors.

pub mod client;
pub mod types;

pub use client::NearbyInfoLookup;
pub use types::EnrichmentRecord;
