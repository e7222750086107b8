//! Query surface: proximity weather lookups and health stats.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    Json,
};
use chrono::Utc;
use weather_registry::{AtmosphericInformation, StatusReport};

use crate::error::ApiError;
use crate::state::AppState;

/// GET /query/ping
///
/// Service health stats: count of recently updated records plus request
/// frequency information. Never fails; all counts degrade to zero.
pub async fn ping_handler(Extension(state): Extension<Arc<AppState>>) -> Json<StatusReport> {
    Json(state.engine.status_report(Utc::now()))
}

/// GET /query/weather/:iata/:radius
///
/// Atmospheric records within `radius` km of the given airport. A blank
/// radius segment means a direct lookup of that airport's record.
pub async fn weather_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path((iata, radius)): Path<(String, String)>,
) -> Result<Json<Vec<AtmosphericInformation>>, ApiError> {
    let records = state.engine.find_by_radius(&iata, &radius)?;
    Ok(Json(records))
}
