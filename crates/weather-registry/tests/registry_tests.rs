//! End-to-end tests over the registry, query engine, and telemetry.

use std::sync::Arc;
use std::thread;

use chrono::Utc;
use weather_registry::{AirportStore, DataPoint, DataPointType, QueryEngine, WeatherError};

#[test]
fn add_get_round_trip_preserves_fields() {
    let store = AirportStore::new();
    store.add("SEA", 47.449, -122.309306).unwrap();

    let airport = store.get("SEA").unwrap();
    assert_eq!(airport.iata, "SEA");
    assert_eq!(airport.latitude, 47.449);
    assert_eq!(airport.longitude, -122.309306);
}

#[test]
fn removed_airport_is_fully_unreachable() {
    let store = Arc::new(AirportStore::with_default_airports());
    let engine = QueryEngine::new(Arc::clone(&store));

    store
        .apply_measurement("LGA", "wind", DataPoint::with_mean(3.0))
        .unwrap();
    store.remove("LGA").unwrap();

    assert!(matches!(
        store.get("LGA").unwrap_err(),
        WeatherError::UnknownAirport(_)
    ));
    assert!(matches!(
        store.get_record("LGA").unwrap_err(),
        WeatherError::UnknownAirport(_)
    ));
    assert!(matches!(
        engine.find_by_radius("LGA", "").unwrap_err(),
        WeatherError::UnknownAirport(_)
    ));
    // the record no longer shows up in neighbors' searches either
    assert!(engine.find_by_radius("JFK", "50").unwrap().is_empty());
}

#[test]
fn validation_boundaries_are_exact() {
    // (kind, lower bound) pairs; lower bound is inclusive, one unit of
    // 0.01 below it is invalid.
    let cases = [
        (DataPointType::Wind, 0.0),
        (DataPointType::Temperature, -50.0),
        (DataPointType::Humidity, 0.0),
        (DataPointType::Pressure, 650.0),
        (DataPointType::CloudCover, 0.0),
        (DataPointType::Precipitation, 0.0),
    ];
    for (kind, lower) in cases {
        assert!(
            kind.is_valid(&DataPoint::with_mean(lower)),
            "{kind} at lower bound"
        );
        assert!(
            !kind.is_valid(&DataPoint::with_mean(lower - 0.01)),
            "{kind} below lower bound"
        );
    }
}

#[test]
fn zero_radius_returns_empty_record_but_positive_radius_excludes_it() {
    let engine = QueryEngine::new(Arc::new(AirportStore::with_default_airports()));

    let direct = engine.find_by_radius("MMU", "").unwrap();
    assert_eq!(direct.len(), 1);
    assert!(!direct[0].has_any_reading());

    // distance to itself is 0 <= 5, but without readings MMU is filtered
    assert!(engine.find_by_radius("MMU", "5").unwrap().is_empty());
}

#[test]
fn invalid_radius_string_is_rejected() {
    let engine = QueryEngine::new(Arc::new(AirportStore::with_default_airports()));
    assert!(matches!(
        engine.find_by_radius("BOS", "ten").unwrap_err(),
        WeatherError::InvalidRadius(_)
    ));
}

#[test]
fn radius_search_follows_registration_order() {
    let store = Arc::new(AirportStore::with_default_airports());
    let engine = QueryEngine::new(Arc::clone(&store));

    for iata in ["EWR", "JFK", "LGA", "MMU"] {
        store
            .apply_measurement(iata, "humidity", DataPoint::with_mean(50.0))
            .unwrap();
    }
    store
        .apply_measurement("EWR", "wind", DataPoint::with_mean(9.0))
        .unwrap();

    // All four New-York-area airports sit within 80 km of EWR; BOS does
    // not. Results come back in registration order: EWR, JFK, LGA, MMU.
    let records = engine.find_by_radius("EWR", "80").unwrap();
    assert_eq!(records.len(), 4);
    assert!(records[0].wind.is_some());
    assert!(records[1].wind.is_none());
}

#[test]
fn frequencies_and_histogram_aggregate_queries() {
    let engine = QueryEngine::new(Arc::new(AirportStore::with_default_airports()));

    engine.find_by_radius("BOS", "5.7").unwrap();
    engine.find_by_radius("EWR", "5.2").unwrap();
    engine.find_by_radius("JFK", "").unwrap();

    let report = engine.status_report(Utc::now());

    // both 5.x radii land in bucket 5
    assert_eq!(report.radius_freq[5], 2);
    assert_eq!(report.radius_freq[0], 1);
    assert_eq!(report.radius_freq.len(), 6);

    // three distinct airports queried once each
    let sum: f64 = report.iata_freq.values().sum();
    assert!(sum <= 1.0 + f64::EPSILON);
    assert_eq!(report.iata_freq["LGA"], 0.0);
    assert!((report.iata_freq["BOS"] - 1.0 / 3.0).abs() < 1e-12);
}

#[test]
fn concurrent_measurements_to_different_airports_all_land() {
    let store = Arc::new(AirportStore::with_default_airports());
    let codes = ["BOS", "EWR", "JFK", "LGA", "MMU"];

    let mut handles = Vec::new();
    for (i, iata) in codes.into_iter().enumerate() {
        let store = Arc::clone(&store);
        handles.push(thread::spawn(move || {
            for round in 0..200 {
                store
                    .apply_measurement(
                        iata,
                        "temperature",
                        DataPoint::with_mean((i + round % 10) as f64),
                    )
                    .unwrap();
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    for iata in codes {
        let record = store.get_record(iata).unwrap();
        assert!(record.temperature.is_some(), "{iata} lost its updates");
    }
}

#[test]
fn concurrent_adds_and_removes_keep_pairing_intact() {
    let store = Arc::new(AirportStore::new());

    let mut handles = Vec::new();
    for worker in 0..4 {
        let store = Arc::clone(&store);
        handles.push(thread::spawn(move || {
            for i in 0..100 {
                let code = format!("A{worker}{i:02}");
                store.add(&code, 40.0, -70.0).unwrap();
                if i % 2 == 0 {
                    store.remove(&code).unwrap();
                }
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    // every surviving airport still resolves to a record
    let airports = store.list();
    assert_eq!(airports.len(), 200);
    for airport in airports {
        store.get_record(&airport.iata).unwrap();
    }
}

#[test]
fn duplicate_add_is_rejected_concurrently() {
    let store = Arc::new(AirportStore::new());

    let mut handles = Vec::new();
    for _ in 0..8 {
        let store = Arc::clone(&store);
        handles.push(thread::spawn(move || store.add("DEN", 39.861656, -104.673178).is_ok()));
    }
    let successes = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|ok| *ok)
        .count();

    assert_eq!(successes, 1);
    assert_eq!(store.len(), 1);
}
