//! HTTP mapping for registry errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::warn;
use weather_registry::WeatherError;

/// JSON error body returned for all failed requests.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// HTTP status code, repeated in the body for convenience.
    pub status: u16,
    /// Human-readable description of what was rejected.
    pub detail: String,
}

/// Adapter-level error: a registry failure or a malformed request.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            detail: detail.into(),
        }
    }

    /// The status this error maps to.
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<WeatherError> for ApiError {
    fn from(err: WeatherError) -> Self {
        let status = match err {
            WeatherError::UnknownAirport(_) => StatusCode::NOT_FOUND,
            WeatherError::DuplicateAirport(_) => StatusCode::CONFLICT,
            WeatherError::UnknownDataPointType(_)
            | WeatherError::InvalidMeasurement { .. }
            | WeatherError::InvalidRadius(_) => StatusCode::BAD_REQUEST,
        };
        Self {
            status,
            detail: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!(status = %self.status, detail = %self.detail, "request rejected");
        let body = ErrorBody {
            status: self.status.as_u16(),
            detail: self.detail,
        };
        (self.status, Json(body)).into_response()
    }
}
