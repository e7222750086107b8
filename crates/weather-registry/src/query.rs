//! Radius search and the health status report.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tracing::debug;

use crate::atmosphere::AtmosphericInformation;
use crate::error::WeatherError;
use crate::geo;
use crate::store::AirportStore;
use crate::telemetry::Telemetry;
use crate::FRESHNESS_WINDOW_HOURS;

/// Health stats assembled by [`QueryEngine::status_report`].
#[derive(Debug, Serialize)]
pub struct StatusReport {
    /// Number of airports with at least one reading updated inside the
    /// freshness window.
    pub datasize: usize,
    /// Per-airport fraction of queries for every known airport.
    pub iata_freq: HashMap<String, f64>,
    /// Query counts bucketed by truncated radius.
    pub radius_freq: Vec<u64>,
}

/// Proximity queries and statistics over the airport store.
///
/// Every weather query runs through here so the telemetry counters see
/// all traffic.
pub struct QueryEngine {
    store: Arc<AirportStore>,
    telemetry: Telemetry,
}

impl QueryEngine {
    pub fn new(store: Arc<AirportStore>) -> Self {
        Self {
            store,
            telemetry: Telemetry::new(),
        }
    }

    /// The counters this engine records into.
    pub fn telemetry(&self) -> &Telemetry {
        &self.telemetry
    }

    /// Atmospheric records near an airport.
    ///
    /// `radius_str` is the raw wire value: blank means 0, anything else
    /// must parse as a number ([`WeatherError::InvalidRadius`] otherwise).
    ///
    /// With radius 0 the result is exactly the named airport's record,
    /// even if it has never reported a reading. With a positive radius
    /// the result holds the record of every known airport (the named one
    /// included) within `radius` km great-circle distance that has at
    /// least one reading, in registration order. The query is counted in
    /// telemetry once the airport resolves.
    pub fn find_by_radius(
        &self,
        iata: &str,
        radius_str: &str,
    ) -> Result<Vec<AtmosphericInformation>, WeatherError> {
        let radius = parse_radius(radius_str)?;
        let center = self.store.get(iata)?;
        self.telemetry.record_query(iata, radius);

        if radius == 0.0 {
            return Ok(vec![self.store.get_record(iata)?]);
        }

        let matches: Vec<AtmosphericInformation> = self
            .store
            .list_with_records()
            .into_iter()
            .filter(|(airport, record)| {
                geo::distance_km(center.position(), airport.position()) <= radius
                    && record.has_any_reading()
            })
            .map(|(_, record)| record)
            .collect();

        debug!(iata, radius, matches = matches.len(), "radius query");
        Ok(matches)
    }

    /// Assemble the health report. Never fails; with no data every count
    /// degrades to zero.
    pub fn status_report(&self, now: DateTime<Utc>) -> StatusReport {
        let window = Duration::hours(FRESHNESS_WINDOW_HOURS);
        let entries = self.store.list_with_records();

        let datasize = entries
            .iter()
            .filter(|(_, record)| record.is_fresh(now, window))
            .count();

        let airports: Vec<_> = entries.into_iter().map(|(airport, _)| airport).collect();
        StatusReport {
            datasize,
            iata_freq: self.telemetry.airport_frequencies(&airports),
            radius_freq: self.telemetry.radius_histogram(),
        }
    }
}

/// Blank radius means a direct lookup (0.0); non-blank input must be a
/// number.
fn parse_radius(radius_str: &str) -> Result<f64, WeatherError> {
    let trimmed = radius_str.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| WeatherError::InvalidRadius(radius_str.to_string()))
}
