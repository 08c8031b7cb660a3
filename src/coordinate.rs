//! Geographic coordinate in decimal degrees (WGS-84).

use serde::{Deserialize, Serialize};

use crate::error::RouteError;

/// A validated (latitude, longitude) pair.
///
/// Serializes as a `[lat, lng]` array, the shape route geometry takes in
/// responses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "(f64, f64)", into = "(f64, f64)")]
pub struct Coordinate {
    lat: f64,
    lng: f64,
}

impl Coordinate {
    /// Creates a coordinate, rejecting latitudes outside [-90, 90] and
    /// longitudes outside [-180, 180] (including NaN).
    pub fn new(lat: f64, lng: f64) -> Result<Self, RouteError> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return Err(RouteError::InvalidCoordinate { lat, lng });
        }
        Ok(Self { lat, lng })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }
}

impl TryFrom<(f64, f64)> for Coordinate {
    type Error = RouteError;

    fn try_from((lat, lng): (f64, f64)) -> Result<Self, Self::Error> {
        Self::new(lat, lng)
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(coord: Coordinate) -> Self {
        (coord.lat, coord.lng)
    }
}
