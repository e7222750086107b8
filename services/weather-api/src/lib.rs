//! Airport weather HTTP service.
//!
//! Thin adapter over [`weather_registry`]: decodes wire requests into
//! registry/query-engine calls and encodes the results back as JSON.
//! Exposes the collector surface under `/collect` (sensor sites pushing
//! measurements and managing airports) and the query surface under
//! `/query` (proximity weather lookups and the health stats report).

pub mod error;
pub mod handlers;
pub mod state;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

/// Build the service router over shared state.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Collector surface
        .route("/collect/ping", get(handlers::collect::ping_handler))
        .route(
            "/collect/weather/:iata/:point_type",
            post(handlers::collect::update_weather_handler),
        )
        .route(
            "/collect/airports",
            get(handlers::collect::list_airports_handler),
        )
        .route(
            "/collect/airports/:iata",
            get(handlers::collect::get_airport_handler)
                .delete(handlers::collect::delete_airport_handler),
        )
        .route(
            "/collect/airports/:iata/:lat/:long",
            post(handlers::collect::add_airport_handler),
        )
        // Query surface
        .route("/query/ping", get(handlers::query::ping_handler))
        .route(
            "/query/weather/:iata/:radius",
            get(handlers::query::weather_handler),
        )
        // Liveness
        .route("/health", get(handlers::health::health_handler))
        // Middleware
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
