//! Basic airport identity and location.

use serde::{Deserialize, Serialize};

/// A known airport: IATA code plus position in degrees.
///
/// Identity is the IATA code alone; two airports with the same code are
/// the same airport regardless of coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Airport {
    /// Three-letter IATA code, unique and immutable once created.
    pub iata: String,
    /// Latitude in degrees, [-90, 90].
    pub latitude: f64,
    /// Longitude in degrees, [-180, 180].
    pub longitude: f64,
}

impl Airport {
    pub fn new(iata: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            iata: iata.into(),
            latitude,
            longitude,
        }
    }

    /// Position as a `(latitude, longitude)` pair for distance math.
    pub fn position(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

impl PartialEq for Airport {
    fn eq(&self, other: &Self) -> bool {
        self.iata == other.iata
    }
}

impl Eq for Airport {}

impl std::hash::Hash for Airport {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.iata.hash(state);
    }
}
