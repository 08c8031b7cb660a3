//! Route geometry as returned by a routing provider.

use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::error::RouteError;
use crate::polyline::Polyline;

/// An ordered, non-empty path from origin to destination.
///
/// The provider's summary distance and duration are kept for display only;
/// the planner measures the geometry itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RouteRepr")]
pub struct Route {
    points: Vec<Coordinate>,
    pub summary_distance_meters: Option<f64>,
    pub summary_duration_seconds: Option<f64>,
}

/// Wire shape of a [`Route`], checked on the way in.
#[derive(Deserialize)]
struct RouteRepr {
    points: Vec<Coordinate>,
    #[serde(default)]
    summary_distance_meters: Option<f64>,
    #[serde(default)]
    summary_duration_seconds: Option<f64>,
}

impl TryFrom<RouteRepr> for Route {
    type Error = RouteError;

    fn try_from(repr: RouteRepr) -> Result<Self, Self::Error> {
        let mut route = Route::new(repr.points)?;
        route.summary_distance_meters = repr.summary_distance_meters;
        route.summary_duration_seconds = repr.summary_duration_seconds;
        Ok(route)
    }
}

impl Route {
    pub fn new(points: Vec<Coordinate>) -> Result<Self, RouteError> {
        if points.is_empty() {
            return Err(RouteError::EmptyRoute);
        }
        Ok(Self {
            points,
            summary_distance_meters: None,
            summary_duration_seconds: None,
        })
    }

    /// Builds a route from a provider-encoded polyline.
    pub fn from_polyline(encoded: &str) -> Result<Self, RouteError> {
        Self::new(Polyline::decode(encoded)?.into_points())
    }

    pub fn with_summary(mut self, distance_meters: f64, duration_seconds: f64) -> Self {
        self.summary_distance_meters = Some(distance_meters);
        self.summary_duration_seconds = Some(duration_seconds);
        self
    }

    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    pub fn origin(&self) -> Coordinate {
        self.points[0]
    }

    pub fn destination(&self) -> Coordinate {
        self.points[self.points.len() - 1]
    }
}
