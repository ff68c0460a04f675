//! Normalization, parsing and scoring for Dutch open-data location statistics.
//!
//! Raw key-value payloads from the CBS, RIVM and Politie feeds are mapped to
//! human-readable indicators, enriched with absolute and relative figures, and
//! scored against a national baseline. See the `datasets` module for the
//! pipeline itself; `config` and `telemetry` carry the service plumbing.

pub mod config;
pub mod datasets;
pub mod telemetry;
