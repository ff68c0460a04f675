use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Deserialize;
use wijkscan::datasets::profile::LocationProfile;
use wijkscan::datasets::record::RawRecord;
use wijkscan::datasets::scoring::ScoringEngine;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) engine: Arc<ScoringEngine>,
}

/// Raw payloads for all four sources of one area, as posted by clients or
/// read from payload files by the CLI.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SourceRecords {
    pub(crate) demographics: RawRecord,
    pub(crate) health: RawRecord,
    pub(crate) livability: RawRecord,
    pub(crate) safety: RawRecord,
}

impl SourceRecords {
    pub(crate) fn profile(&self, fetched_at: DateTime<Utc>) -> LocationProfile {
        LocationProfile::from_records(
            &self.demographics,
            &self.health,
            &self.livability,
            &self.safety,
            fetched_at,
        )
    }
}
