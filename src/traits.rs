//! Narrow interfaces to the collaborators the planner consumes.
//!
//! The planner depends only on these; concrete apps plug in their routing
//! service and price database, and tests plug in in-memory fakes.

use crate::coordinate::Coordinate;
use crate::error::ProviderError;
use crate::route::Route;
use crate::stops::FuelStation;

/// Produces a drivable route between two endpoints.
pub trait RouteProvider {
    fn get_route(&self, origin: Coordinate, destination: Coordinate) -> Result<Route, ProviderError>;
}

/// Queryable set of priced, geolocated stations.
///
/// Lookups are synchronous with no implied retry or timeout; wrap the store
/// if you need either.
pub trait FuelPriceStore {
    /// Lowest-price station within `radius_miles` of `point`, if any.
    ///
    /// Ties resolve to the store's own ordering.
    fn find_cheapest_within(&self, point: Coordinate, radius_miles: f64) -> Option<FuelStation>;
}
