//! Concurrent registry of airports and their atmospheric records.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::{debug, info};

use crate::airport::Airport;
use crate::atmosphere::AtmosphericInformation;
use crate::datapoint::{DataPoint, DataPointType};
use crate::error::WeatherError;

/// An airport paired with its atmospheric record.
///
/// The record carries its own lock so measurement writes to different
/// airports never contend with each other or with registry reads.
struct AirportEntry {
    airport: Airport,
    record: RwLock<AtmosphericInformation>,
}

impl AirportEntry {
    fn new(airport: Airport) -> Self {
        Self {
            airport,
            record: RwLock::new(AtmosphericInformation::new()),
        }
    }

    fn record_snapshot(&self) -> AtmosphericInformation {
        self.record
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

/// Map plus registration order, always mutated together under the store's
/// lock. Keying both sides by IATA code keeps airport/record insertion
/// and removal atomic; a code can never resolve to a missing record.
#[derive(Default)]
struct Registry {
    entries: HashMap<String, Arc<AirportEntry>>,
    order: Vec<String>,
}

/// Concurrent registry of known airports keyed by IATA code, each with
/// exactly one [`AtmosphericInformation`] created alongside it.
///
/// All mutation of the code→entry mapping goes through one `RwLock`;
/// sensor updates only read-lock the registry and write-lock the single
/// record they touch. Iteration follows registration order.
pub struct AirportStore {
    inner: RwLock<Registry>,
}

impl AirportStore {
    /// An empty store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Registry::default()),
        }
    }

    /// A store seeded with the five default airports the service has
    /// always known about at startup.
    pub fn with_default_airports() -> Self {
        let store = Self::new();
        for (iata, lat, lon) in [
            ("BOS", 42.364347, -71.005181),
            ("EWR", 40.6925, -74.168667),
            ("JFK", 40.639751, -73.778925),
            ("LGA", 40.777245, -73.872608),
            ("MMU", 40.79935, -74.4148747),
        ] {
            // The store is empty and not yet shared, so no duplicates.
            store
                .add(iata, lat, lon)
                .expect("seed airports are distinct");
        }
        store
    }

    fn read_registry(&self) -> std::sync::RwLockReadGuard<'_, Registry> {
        self.inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_registry(&self) -> std::sync::RwLockWriteGuard<'_, Registry> {
        self.inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Register a new airport together with an empty atmospheric record.
    ///
    /// Fails with [`WeatherError::DuplicateAirport`] if the code is
    /// already present; existing data is left untouched in that case.
    pub fn add(&self, iata: &str, latitude: f64, longitude: f64) -> Result<Airport, WeatherError> {
        let mut registry = self.write_registry();
        if registry.entries.contains_key(iata) {
            return Err(WeatherError::DuplicateAirport(iata.to_string()));
        }

        let airport = Airport::new(iata, latitude, longitude);
        registry
            .entries
            .insert(iata.to_string(), Arc::new(AirportEntry::new(airport.clone())));
        registry.order.push(iata.to_string());

        info!(iata, latitude, longitude, "registered airport");
        Ok(airport)
    }

    /// Remove an airport and its record in one step.
    ///
    /// No reader can observe the airport without its record or the record
    /// without its airport; both leave under the same write lock.
    pub fn remove(&self, iata: &str) -> Result<(), WeatherError> {
        let mut registry = self.write_registry();
        if registry.entries.remove(iata).is_none() {
            return Err(WeatherError::UnknownAirport(iata.to_string()));
        }
        registry.order.retain(|code| code != iata);

        info!(iata, "removed airport");
        Ok(())
    }

    /// Look up an airport by code.
    pub fn get(&self, iata: &str) -> Result<Airport, WeatherError> {
        self.read_registry()
            .entries
            .get(iata)
            .map(|entry| entry.airport.clone())
            .ok_or_else(|| WeatherError::UnknownAirport(iata.to_string()))
    }

    /// Snapshot of an airport's atmospheric record.
    pub fn get_record(&self, iata: &str) -> Result<AtmosphericInformation, WeatherError> {
        let entry = self.entry(iata)?;
        Ok(entry.record_snapshot())
    }

    /// Snapshot of all known airports in registration order.
    ///
    /// Concurrent adds or removals during iteration affect neither the
    /// returned list nor its order.
    pub fn list(&self) -> Vec<Airport> {
        let registry = self.read_registry();
        registry
            .order
            .iter()
            .filter_map(|code| registry.entries.get(code))
            .map(|entry| entry.airport.clone())
            .collect()
    }

    /// Snapshot of all airports with their current records, in
    /// registration order. This is what the query engine iterates.
    pub fn list_with_records(&self) -> Vec<(Airport, AtmosphericInformation)> {
        let registry = self.read_registry();
        registry
            .order
            .iter()
            .filter_map(|code| registry.entries.get(code))
            .map(|entry| (entry.airport.clone(), entry.record_snapshot()))
            .collect()
    }

    /// Number of known airports.
    pub fn len(&self) -> usize {
        self.read_registry().entries.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.read_registry().entries.is_empty()
    }

    /// The sole writer path for sensor data: parse the kind string
    /// (case-insensitively), validate the data point against the kind's
    /// range, then overwrite the airport's slot and refresh its
    /// last-update time.
    ///
    /// A failed parse or validation leaves the record untouched. Writes
    /// to the same airport serialize on that record's lock (last write
    /// wins by completion order); different airports proceed in parallel.
    pub fn apply_measurement(
        &self,
        iata: &str,
        kind: &str,
        dp: DataPoint,
    ) -> Result<(), WeatherError> {
        let kind: DataPointType = kind.parse()?;
        kind.validate(&dp)?;

        let entry = self.entry(iata)?;
        entry
            .record
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .update(kind, dp);

        debug!(iata, kind = kind.name(), mean = dp.mean, "recorded measurement");
        Ok(())
    }

    /// Clone the entry handle out from under the registry lock so record
    /// locking never nests inside it.
    fn entry(&self, iata: &str) -> Result<Arc<AirportEntry>, WeatherError> {
        self.read_registry()
            .entries
            .get(iata)
            .cloned()
            .ok_or_else(|| WeatherError::UnknownAirport(iata.to_string()))
    }
}

impl Default for AirportStore {
    fn default() -> Self {
        Self::new()
    }
}
