//! Collector surface: airport management and inbound sensor readings.
//!
//! These routes are what weather collection sites push to. Airport
//! coordinates arrive path-encoded as strings, matching the historical
//! wire contract.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    Json,
};
use tracing::info;
use weather_registry::{Airport, DataPoint};

use crate::error::ApiError;
use crate::state::AppState;

/// GET /collect/ping - liveness check for collection sites.
pub async fn ping_handler() -> &'static str {
    "ready"
}

/// POST /collect/weather/:iata/:point_type
///
/// Body is a data point summary; the kind comes from the path and is
/// matched case-insensitively.
pub async fn update_weather_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path((iata, point_type)): Path<(String, String)>,
    Json(dp): Json<DataPoint>,
) -> Result<StatusCode, ApiError> {
    state.store.apply_measurement(&iata, &point_type, dp)?;
    Ok(StatusCode::OK)
}

/// GET /collect/airports - all known IATA codes.
pub async fn list_airports_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Json<Vec<String>> {
    let codes = state
        .store
        .list()
        .into_iter()
        .map(|airport| airport.iata)
        .collect();
    Json(codes)
}

/// GET /collect/airports/:iata - one airport with its coordinates.
pub async fn get_airport_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(iata): Path<String>,
) -> Result<Json<Airport>, ApiError> {
    Ok(Json(state.store.get(&iata)?))
}

/// POST /collect/airports/:iata/:lat/:long - register a new airport.
///
/// Re-registering an existing code is rejected with 409 rather than
/// silently duplicated.
pub async fn add_airport_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path((iata, lat, long)): Path<(String, String, String)>,
) -> Result<(StatusCode, Json<Airport>), ApiError> {
    let latitude: f64 = lat
        .parse()
        .map_err(|_| ApiError::bad_request(format!("invalid latitude: {lat:?}")))?;
    let longitude: f64 = long
        .parse()
        .map_err(|_| ApiError::bad_request(format!("invalid longitude: {long:?}")))?;

    let airport = state.store.add(&iata, latitude, longitude)?;
    info!(iata = %airport.iata, "airport registered via collect API");
    Ok((StatusCode::CREATED, Json(airport)))
}

/// DELETE /collect/airports/:iata - drop an airport and its readings.
pub async fn delete_airport_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(iata): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.store.remove(&iata)?;
    Ok(StatusCode::OK)
}
