//! Per-airport atmospheric snapshot.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::datapoint::{DataPoint, DataPointType};

/// Sensor information for one airport: up to six optional measurement
/// slots plus the time of the last successful update to any of them.
///
/// A slot is `None` until its kind is first reported and is only ever
/// overwritten afterwards, never cleared.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtmosphericInformation {
    /// Temperature in degrees celsius.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<DataPoint>,

    /// Wind speed in km/h.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind: Option<DataPoint>,

    /// Humidity in percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humidity: Option<DataPoint>,

    /// Precipitation in cm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precipitation: Option<DataPoint>,

    /// Pressure in mmHg.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pressure: Option<DataPoint>,

    /// Cloud cover percent from 0 - 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_cover: Option<DataPoint>,

    /// Last time any slot was successfully updated.
    pub last_update_time: DateTime<Utc>,
}

impl AtmosphericInformation {
    /// An empty record: no readings, last-update pinned at the epoch so
    /// it never counts as fresh.
    pub fn new() -> Self {
        Self {
            temperature: None,
            wind: None,
            humidity: None,
            precipitation: None,
            pressure: None,
            cloud_cover: None,
            last_update_time: DateTime::<Utc>::UNIX_EPOCH,
        }
    }

    /// Overwrite the slot for `kind` and refresh `last_update_time`.
    ///
    /// Validation is the caller's responsibility
    /// ([`AirportStore::apply_measurement`](crate::store::AirportStore::apply_measurement)
    /// is the sole production writer and always validates first).
    pub fn update(&mut self, kind: DataPointType, dp: DataPoint) {
        let slot = match kind {
            DataPointType::Wind => &mut self.wind,
            DataPointType::Temperature => &mut self.temperature,
            DataPointType::Humidity => &mut self.humidity,
            DataPointType::Pressure => &mut self.pressure,
            DataPointType::CloudCover => &mut self.cloud_cover,
            DataPointType::Precipitation => &mut self.precipitation,
        };
        *slot = Some(dp);
        self.last_update_time = Utc::now();
    }

    /// Whether at least one slot has ever been reported.
    pub fn has_any_reading(&self) -> bool {
        self.temperature.is_some()
            || self.wind.is_some()
            || self.humidity.is_some()
            || self.precipitation.is_some()
            || self.pressure.is_some()
            || self.cloud_cover.is_some()
    }

    /// Whether this record has a reading updated within `window` of `now`.
    pub fn is_fresh(&self, now: DateTime<Utc>, window: Duration) -> bool {
        self.has_any_reading() && now - self.last_update_time < window
    }
}

impl Default for AtmosphericInformation {
    fn default() -> Self {
        Self::new()
    }
}
