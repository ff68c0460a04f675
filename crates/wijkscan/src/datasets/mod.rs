//! The normalization, parsing and scoring pipeline.
//!
//! Each source module pairs a key mapping (raw field key to display label)
//! with a parser producing a [`record::ParsedDataset`]. Parsing is a pure,
//! synchronous transformation: malformed or absent fields degrade to null
//! figures, never to errors. Scoring is a second pure pass comparing a
//! location's dataset against the national reference.

pub mod demographics;
pub mod health;
pub mod import;
pub mod livability;
pub mod profile;
pub mod record;
pub mod safety;
pub mod scoring;

mod derivation;

pub use derivation::ParseContext;

use chrono::{DateTime, Utc};

use record::{ParsedDataset, RawRecord, Source};

/// Parse a single source. Demographics resolves its own denominators; the
/// other sources read them from the supplied context.
pub fn parse_source(
    source: Source,
    record: &RawRecord,
    ctx: &ParseContext,
    fetched_at: DateTime<Utc>,
) -> ParsedDataset {
    match source {
        Source::Demographics => demographics::parse(record, fetched_at),
        Source::Health => health::parse(record, ctx, fetched_at),
        Source::Livability => livability::parse(record, ctx, fetched_at),
        Source::Safety => safety::parse(record, ctx, fetched_at),
    }
}
