//! Geodesic distance along a route.
//!
//! Segment boundaries and fuel cost are sensitive to the earth model, so a
//! single [`GeodesicModel`] is chosen per request and threaded through every
//! stage that measures distance.

use geo::{Distance, Geodesic, Haversine, Point};
use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::error::RouteError;

const METERS_PER_MILE: f64 = 1609.344;

/// Earth model used for pairwise distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeodesicModel {
    /// Karney's geodesic on the WGS-84 ellipsoid.
    #[default]
    Geodesic,
    /// Great-circle distance on a sphere of mean earth radius.
    Haversine,
}

impl GeodesicModel {
    /// Distance between two points in miles.
    pub fn distance_miles(self, from: Coordinate, to: Coordinate) -> f64 {
        let (from, to) = (to_point(from), to_point(to));
        let meters = match self {
            GeodesicModel::Geodesic => Geodesic.distance(from, to),
            GeodesicModel::Haversine => Haversine.distance(from, to),
        };
        meters / METERS_PER_MILE
    }
}

fn to_point(coord: Coordinate) -> Point<f64> {
    Point::new(coord.lng(), coord.lat())
}

/// Running distance totals in miles, one entry per route point.
///
/// Entry 0 is 0.0 and the sequence is non-decreasing.
pub fn cumulative(route: &[Coordinate], model: GeodesicModel) -> Result<Vec<f64>, RouteError> {
    if route.is_empty() {
        return Err(RouteError::EmptyRoute);
    }

    let mut distances = Vec::with_capacity(route.len());
    let mut total = 0.0;
    distances.push(total);
    for pair in route.windows(2) {
        total += model.distance_miles(pair[0], pair[1]);
        distances.push(total);
    }

    Ok(distances)
}

/// Total route length in miles; equal to the last entry of [`cumulative`].
pub fn total(route: &[Coordinate], model: GeodesicModel) -> Result<f64, RouteError> {
    if route.is_empty() {
        return Err(RouteError::EmptyRoute);
    }

    Ok(route
        .windows(2)
        .map(|pair| model.distance_miles(pair[0], pair[1]))
        .sum())
}
