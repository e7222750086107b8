//! Measurement value objects and per-kind validation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WeatherError;

/// A statistical summary of one atmospheric quantity at one point in time.
///
/// The wire format is a flat object with exactly these keys. Validation
/// only inspects `mean`; the remaining fields are stored opaquely.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Mean of the sampled values; the only field validation looks at.
    pub mean: f64,
    /// First quartile.
    pub first: f64,
    /// Second quartile (median).
    pub second: f64,
    /// Third quartile.
    pub third: f64,
    /// Number of samples in the summary.
    pub count: u32,
}

impl DataPoint {
    /// A data point with the given mean and zeroed summary fields,
    /// convenient for tests and examples.
    pub fn with_mean(mean: f64) -> Self {
        Self {
            mean,
            first: 0.0,
            second: 0.0,
            third: 0.0,
            count: 0,
        }
    }
}

/// The six kinds of atmospheric measurement the service collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataPointType {
    /// Wind speed in km/h.
    Wind,
    /// Temperature in degrees celsius.
    Temperature,
    /// Humidity in percent.
    Humidity,
    /// Pressure in mmHg.
    Pressure,
    /// Cloud cover in percent.
    CloudCover,
    /// Precipitation in cm.
    Precipitation,
}

impl DataPointType {
    /// All kinds, in the order the atmospheric record lays out its slots.
    pub const ALL: [DataPointType; 6] = [
        DataPointType::Wind,
        DataPointType::Temperature,
        DataPointType::Humidity,
        DataPointType::Pressure,
        DataPointType::CloudCover,
        DataPointType::Precipitation,
    ];

    /// Canonical upper-case name, as used in wire paths and error messages.
    pub const fn name(&self) -> &'static str {
        match self {
            DataPointType::Wind => "WIND",
            DataPointType::Temperature => "TEMPERATURE",
            DataPointType::Humidity => "HUMIDITY",
            DataPointType::Pressure => "PRESSURE",
            DataPointType::CloudCover => "CLOUDCOVER",
            DataPointType::Precipitation => "PRECIPITATION",
        }
    }

    /// Valid range for this kind's mean: inclusive lower bound, exclusive
    /// upper bound (`None` = unbounded above, only WIND).
    const fn bounds(&self) -> (f64, Option<f64>) {
        match self {
            DataPointType::Wind => (0.0, None),
            DataPointType::Temperature => (-50.0, Some(100.0)),
            DataPointType::Humidity => (0.0, Some(100.0)),
            DataPointType::Pressure => (650.0, Some(800.0)),
            DataPointType::CloudCover => (0.0, Some(100.0)),
            DataPointType::Precipitation => (0.0, Some(100.0)),
        }
    }

    /// Whether the data point's mean falls inside this kind's valid range.
    pub fn is_valid(&self, dp: &DataPoint) -> bool {
        let (lower, upper) = self.bounds();
        dp.mean >= lower && upper.map_or(true, |u| dp.mean < u)
    }

    /// Validate a data point against this kind, surfacing the rejected
    /// value in the error.
    pub fn validate(&self, dp: &DataPoint) -> Result<(), WeatherError> {
        if self.is_valid(dp) {
            Ok(())
        } else {
            Err(WeatherError::InvalidMeasurement {
                kind: self.name(),
                mean: dp.mean,
            })
        }
    }
}

impl fmt::Display for DataPointType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DataPointType {
    type Err = WeatherError;

    /// Case-insensitive parse; anything other than the six known names
    /// fails with `UnknownDataPointType`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "WIND" => Ok(DataPointType::Wind),
            "TEMPERATURE" => Ok(DataPointType::Temperature),
            "HUMIDITY" => Ok(DataPointType::Humidity),
            "PRESSURE" => Ok(DataPointType::Pressure),
            "CLOUDCOVER" => Ok(DataPointType::CloudCover),
            "PRECIPITATION" => Ok(DataPointType::Precipitation),
            _ => Err(WeatherError::UnknownDataPointType(s.to_string())),
        }
    }
}
