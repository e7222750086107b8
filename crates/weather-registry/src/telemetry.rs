//! Usage counters behind the health report.
//!
//! Tracks how often each airport is queried and which radii callers ask
//! for. Counters are monotonically increasing for the process lifetime,
//! never persisted, and reset only on restart; the health endpoint pulls
//! them off for aggregation with other performance metrics.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::airport::Airport;

/// Histogram span when no radius has been observed yet, and the cap on
/// how far an observed maximum can grow it. Without the cap a single
/// query for an enormous radius would size the report's histogram
/// allocation by attacker-chosen input.
const RADIUS_HISTOGRAM_BOUND: f64 = 1000.0;

#[derive(Default)]
struct Counters {
    /// Queries per IATA code. Only known airports are ever recorded.
    airport_queries: HashMap<String, u64>,
    /// Queries per exact radius value, keyed by the f64 bit pattern
    /// (f64 itself is not Eq/Hash).
    radius_queries: HashMap<u64, u64>,
}

/// Concurrent query-frequency counters.
///
/// A single mutex guards both maps: increments are read-modify-write and
/// must not lose updates under concurrent queries, and contention is one
/// short critical section per query.
#[derive(Default)]
pub struct Telemetry {
    counters: Mutex<Counters>,
}

impl Telemetry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one query against `iata` with the requested `radius`.
    pub fn record_query(&self, iata: &str, radius: f64) {
        let mut counters = self.lock();
        *counters
            .airport_queries
            .entry(iata.to_string())
            .or_insert(0) += 1;
        *counters
            .radius_queries
            .entry(radius.to_bits())
            .or_insert(0) += 1;
    }

    /// Fraction of queries that went to each of the given airports.
    ///
    /// The denominator is the number of distinct airports queried so far;
    /// airports never queried map to 0.0, and everything is 0.0 before
    /// the first query (no NaN from a zero denominator).
    pub fn airport_frequencies(&self, airports: &[Airport]) -> HashMap<String, f64> {
        let counters = self.lock();
        let distinct = counters.airport_queries.len();

        airports
            .iter()
            .map(|airport| {
                let count = counters
                    .airport_queries
                    .get(&airport.iata)
                    .copied()
                    .unwrap_or(0);
                let frac = if distinct == 0 {
                    0.0
                } else {
                    count as f64 / distinct as f64
                };
                (airport.iata.clone(), frac)
            })
            .collect()
    }

    /// Query counts bucketed by truncated radius, one bucket per unit.
    ///
    /// The histogram spans 0 through the truncated maximum observed
    /// radius, capped at 1000 (also the span before any query). Radii
    /// sharing a truncated value sum into the same bucket; sub-zero or
    /// beyond-cap radii are counted in the maps but fall outside the
    /// histogram. The report must never fail, so the length math is
    /// saturating rather than trusting the observed maximum.
    pub fn radius_histogram(&self) -> Vec<u64> {
        let counters = self.lock();

        let max_radius = counters
            .radius_queries
            .keys()
            .map(|bits| f64::from_bits(*bits))
            .fold(f64::NEG_INFINITY, f64::max);
        let bound = if max_radius.is_finite() {
            max_radius.clamp(0.0, RADIUS_HISTOGRAM_BOUND)
        } else {
            RADIUS_HISTOGRAM_BOUND
        };

        let mut hist = vec![0u64; (bound as usize).saturating_add(1)];
        for (bits, count) in &counters.radius_queries {
            let radius = f64::from_bits(*bits);
            if radius >= 0.0 {
                let bucket = radius as usize;
                if bucket < hist.len() {
                    hist[bucket] += *count;
                }
            }
        }
        hist
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Counters> {
        self.counters
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
