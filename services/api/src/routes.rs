use std::io::Cursor;

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use wijkscan::datasets::profile::{LocationProfile, ProfileSummary};
use wijkscan::datasets::record::{ParsedDataset, RawRecord, Source};
use wijkscan::datasets::{import, parse_source, ParseContext};

use crate::error::ApiError;
use crate::infra::{AppState, SourceRecords};

pub(crate) fn router() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/datasets/parse", post(parse_dataset_endpoint))
        .route("/api/v1/location/profile", post(location_profile_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[derive(Debug, Deserialize)]
pub(crate) struct ParseDatasetRequest {
    pub(crate) source: Source,
    /// JSON payload for the source, keyed by raw field name.
    #[serde(default)]
    pub(crate) record: Option<RawRecord>,
    /// Alternative to `record`: a StatLine CSV export for the source.
    #[serde(default)]
    pub(crate) csv: Option<String>,
    /// Resident total of the area; required for derived figures of the
    /// non-demographics sources.
    #[serde(default)]
    pub(crate) total_population: Option<f64>,
    #[serde(default)]
    pub(crate) total_households: Option<f64>,
    #[serde(default)]
    pub(crate) fetched_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ParseDatasetResponse {
    pub(crate) dataset: ParsedDataset,
}

pub(crate) async fn parse_dataset_endpoint(
    Json(payload): Json<ParseDatasetRequest>,
) -> Result<Json<ParseDatasetResponse>, ApiError> {
    let ParseDatasetRequest {
        source,
        record,
        csv,
        total_population,
        total_households,
        fetched_at,
    } = payload;

    let record = match (record, csv) {
        (Some(record), _) => record,
        (None, Some(csv)) => import::raw_record_from_csv(Cursor::new(csv.into_bytes()))?,
        (None, None) => return Err(ApiError::MissingRecord),
    };

    let ctx = ParseContext {
        total_population,
        total_households,
    };
    let fetched_at = fetched_at.unwrap_or_else(Utc::now);
    let dataset = parse_source(source, &record, &ctx, fetched_at);

    Ok(Json(ParseDatasetResponse { dataset }))
}

#[derive(Debug, Deserialize)]
pub(crate) struct LocationProfileRequest {
    pub(crate) location: SourceRecords,
    pub(crate) national: SourceRecords,
    #[serde(default)]
    pub(crate) fetched_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct LocationProfileResponse {
    pub(crate) profile: LocationProfile,
    pub(crate) summary: ProfileSummary,
}

pub(crate) async fn location_profile_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<LocationProfileRequest>,
) -> Json<LocationProfileResponse> {
    let LocationProfileRequest {
        location,
        national,
        fetched_at,
    } = payload;

    let fetched_at = fetched_at.unwrap_or_else(Utc::now);
    let location = location.profile(fetched_at);
    let national = national.profile(fetched_at);

    let profile = location.scored(&state.engine, &national);
    let summary = profile.summary();

    Json(LocationProfileResponse { profile, summary })
}
