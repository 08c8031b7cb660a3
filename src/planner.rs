//! End-to-end refuel planning for a single trip.

use serde::Serialize;

use crate::config::PlannerConfig;
use crate::coordinate::Coordinate;
use crate::cost;
use crate::distance;
use crate::error::{PlanError, RouteError};
use crate::polyline::Polyline;
use crate::route::Route;
use crate::segment::{self, Segment};
use crate::simplify::simplify;
use crate::stops::{self, FuelStop};
use crate::traits::{FuelPriceStore, RouteProvider};

/// Everything a caller needs to render a planned trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripPlan {
    pub route: Route,
    pub total_distance_miles: f64,
    pub segments: Vec<Segment>,
    pub fuel_stops: Vec<FuelStop>,
    pub total_fuel_cost: f64,
    /// Simplified geometry, encoded for a map-display URL.
    pub display_polyline: String,
    /// Origin and destination markers for the map.
    pub markers: [Coordinate; 2],
}

/// Plans stops and cost over an already-fetched route.
pub fn plan_route<S>(route: Route, store: &S, config: &PlannerConfig) -> Result<TripPlan, RouteError>
where
    S: FuelPriceStore + Sync + ?Sized,
{
    config.validate()?;

    let points = route.points();
    let cumulative = distance::cumulative(points, config.geodesic)?;
    let total_distance_miles = cumulative[cumulative.len() - 1];

    let segments = segment::segment(
        points,
        &cumulative,
        config.range_miles,
        config.search_radius_miles,
        config.midpoint,
    )?;
    let fuel_stops = stops::build_stops(store, &segments);
    let total_fuel_cost = cost::estimate(
        total_distance_miles,
        &fuel_stops,
        config.fuel_economy_mpg,
        config.max_leg_miles,
    );

    let thinned = Polyline::new(simplify(points, config.display_tolerance, config.display_stride));
    let display_polyline = thinned.encode();
    let markers = [route.origin(), route.destination()];

    tracing::info!(
        points = points.len(),
        miles = total_distance_miles,
        segments = segments.len(),
        stops = fuel_stops.len(),
        cost = total_fuel_cost,
        display_points = thinned.points().len(),
        "planned route"
    );

    Ok(TripPlan {
        route,
        total_distance_miles,
        segments,
        fuel_stops,
        total_fuel_cost,
        display_polyline,
        markers,
    })
}

/// Fetches a route between two endpoints and plans it.
///
/// Provider failures and empty or malformed geometry surface as
/// [`PlanError::RouteUnavailable`]; broken invariants as
/// [`PlanError::Internal`].
pub fn plan_trip<P, S>(
    provider: &P,
    store: &S,
    origin: Coordinate,
    destination: Coordinate,
    config: &PlannerConfig,
) -> Result<TripPlan, PlanError>
where
    P: RouteProvider + ?Sized,
    S: FuelPriceStore + Sync + ?Sized,
{
    config.validate()?;

    let route = provider.get_route(origin, destination)?;
    tracing::debug!(points = route.points().len(), "fetched route");

    Ok(plan_route(route, store, config)?)
}
