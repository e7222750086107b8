//! In-memory airport weather registry.
//!
//! This crate holds the data model and core operations for the airport
//! weather service: a concurrent registry of airports keyed by IATA code,
//! each paired with a mutable atmospheric snapshot, plus the radius search
//! and the usage counters behind the health report.
//!
//! All operations are synchronous and in-memory; the HTTP adapter in
//! `services/weather-api` decodes wire requests into these calls.
//!
//! # Example
//!
//! ```rust
//! use weather_registry::{AirportStore, DataPoint, QueryEngine};
//! use std::sync::Arc;
//!
//! let store = Arc::new(AirportStore::with_default_airports());
//! let engine = QueryEngine::new(Arc::clone(&store));
//!
//! store
//!     .apply_measurement("BOS", "wind", DataPoint::with_mean(12.0))
//!     .unwrap();
//! let nearby = engine.find_by_radius("EWR", "250").unwrap();
//! assert_eq!(nearby.len(), 1);
//! ```

pub mod airport;
pub mod atmosphere;
pub mod datapoint;
pub mod error;
pub mod geo;
pub mod query;
pub mod store;
pub mod telemetry;

// Re-export commonly used types
pub use airport::Airport;
pub use atmosphere::AtmosphericInformation;
pub use datapoint::{DataPoint, DataPointType};
pub use error::WeatherError;
pub use query::{QueryEngine, StatusReport};
pub use store::AirportStore;
pub use telemetry::Telemetry;

/// Freshness window for the health report's `datasize` figure.
pub const FRESHNESS_WINDOW_HOURS: i64 = 24;
