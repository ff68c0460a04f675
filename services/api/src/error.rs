use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use wijkscan::config::ConfigError;
use wijkscan::datasets::import::ImportError;
use wijkscan::datasets::scoring::OverrideLoadError;
use wijkscan::telemetry::TelemetryError;

#[derive(Debug)]
pub enum ApiError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Import(ImportError),
    Overrides(OverrideLoadError),
    Payload(serde_json::Error),
    MissingRecord,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Config(err) => write!(f, "configuration error: {err}"),
            ApiError::Telemetry(err) => write!(f, "telemetry error: {err}"),
            ApiError::Io(err) => write!(f, "io error: {err}"),
            ApiError::Import(err) => write!(f, "import error: {err}"),
            ApiError::Overrides(err) => write!(f, "scoring override error: {err}"),
            ApiError::Payload(err) => write!(f, "invalid payload: {err}"),
            ApiError::MissingRecord => {
                write!(f, "request must carry either a record or a csv payload")
            }
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Config(err) => Some(err),
            ApiError::Telemetry(err) => Some(err),
            ApiError::Io(err) => Some(err),
            ApiError::Import(err) => Some(err),
            ApiError::Overrides(err) => Some(err),
            ApiError::Payload(err) => Some(err),
            ApiError::MissingRecord => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Import(_) | ApiError::Payload(_) | ApiError::MissingRecord => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Config(_)
            | ApiError::Telemetry(_)
            | ApiError::Io(_)
            | ApiError::Overrides(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for ApiError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for ApiError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for ApiError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<ImportError> for ApiError {
    fn from(value: ImportError) -> Self {
        Self::Import(value)
    }
}

impl From<OverrideLoadError> for ApiError {
    fn from(value: OverrideLoadError) -> Self {
        Self::Overrides(value)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(value: serde_json::Error) -> Self {
        Self::Payload(value)
    }
}
