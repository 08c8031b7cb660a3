mod fixtures;

use fixtures::*;
use fuel_route_planner::config::PlannerConfig;
use fuel_route_planner::distance::{self, GeodesicModel};
use fuel_route_planner::error::{PlanError, ProviderError, RouteError};
use fuel_route_planner::fallback::{FallbackRouteProvider, GreatCircleRouteProvider};
use fuel_route_planner::planner::{plan_route, plan_trip};
use fuel_route_planner::polyline;
use fuel_route_planner::route::Route;
use fuel_route_planner::segment::MidpointStrategy;
use fuel_route_planner::store::InMemoryFuelPriceStore;

fn haversine_config() -> PlannerConfig {
    PlannerConfig {
        geodesic: GeodesicModel::Haversine,
        ..PlannerConfig::default()
    }
}

/// Stations around the index-halved midpoints of a 132-point northbound
/// route from 30N: point 29 (32.9N) and point 58 (35.8N).
fn texas_panhandle_store() -> InMemoryFuelPriceStore {
    InMemoryFuelPriceStore::with_model(
        vec![
            station("Sweetwater", 3.20, 33.0, -100.1),
            station("Snyder", 3.00, 32.9, -100.0),
            station("Amarillo East", 3.50, 35.8, -100.0),
            station("Far Away", 1.99, 25.0, -80.0),
        ],
        GeodesicModel::Haversine,
    )
}

#[test]
fn short_route_has_no_stops_and_no_cost() {
    let route = Route::new(northbound(30.0, -100.0, 52)).unwrap();
    let plan = plan_route(route, &texas_panhandle_store(), &haversine_config()).unwrap();

    assert!(plan.total_distance_miles > 350.0 && plan.total_distance_miles < 400.0);
    assert!(plan.segments.is_empty());
    assert!(plan.fuel_stops.is_empty());
    assert_eq!(plan.total_fuel_cost, 0.0);
}

#[test]
fn two_segments_pick_cheapest_station_near_each_midpoint() {
    let points = northbound(30.0, -100.0, 132);
    let route = Route::new(points.clone()).unwrap();
    let plan = plan_route(route, &texas_panhandle_store(), &haversine_config()).unwrap();

    let total = plan.total_distance_miles;
    assert!((total - 131.0 * MILES_PER_TENTH_DEGREE).abs() < 1e-3, "got {}", total);

    assert_eq!(plan.segments.len(), 2);
    assert_eq!(plan.segments[0].boundary_index, 58);
    assert_eq!(plan.segments[0].midpoint, points[29]);
    assert_eq!(plan.segments[1].boundary_index, 116);
    assert_eq!(plan.segments[1].midpoint, points[58]);

    let names: Vec<&str> = plan.fuel_stops.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Snyder", "Amarillo East"]);
    assert_eq!(plan.fuel_stops[0].mile_position, 0.0);
    assert_eq!(plan.fuel_stops[1].mile_position, 400.0);

    // Legs: 0 @ 3.00, 400 @ 3.50, remainder @ 3.50.
    let expected = (400.0 / 10.0) * 3.50 + ((total - 400.0) / 10.0) * 3.50;
    assert!((plan.total_fuel_cost - expected).abs() < 0.006);
}

#[test]
fn segment_without_station_is_skipped() {
    let store = InMemoryFuelPriceStore::with_model(
        vec![station("Snyder", 3.00, 32.9, -100.0)],
        GeodesicModel::Haversine,
    );
    let route = Route::new(northbound(30.0, -100.0, 132)).unwrap();
    let plan = plan_route(route, &store, &haversine_config()).unwrap();

    assert_eq!(plan.segments.len(), 2);
    assert_eq!(plan.fuel_stops.len(), 1);
    assert_eq!(plan.fuel_stops[0].name, "Snyder");

    let expected = plan.total_distance_miles / 10.0 * 3.00;
    assert!((plan.total_fuel_cost - expected).abs() < 0.006);
}

#[test]
fn display_polyline_and_markers() {
    let points = northbound(30.0, -100.0, 132);
    let route = Route::new(points.clone()).unwrap();
    let plan = plan_route(route, &texas_panhandle_store(), &haversine_config()).unwrap();

    // A straight line simplifies to its endpoints.
    let display = polyline::decode(&plan.display_polyline).unwrap();
    assert_eq!(display.len(), 2);
    assert!((display[1].lat() - 43.1).abs() < 1e-5);
    assert_eq!(plan.markers, [points[0], points[131]]);

    let strided = PlannerConfig {
        display_tolerance: None,
        ..haversine_config()
    };
    let route = Route::new(points).unwrap();
    let plan = plan_route(route, &texas_panhandle_store(), &strided).unwrap();
    assert_eq!(polyline::decode(&plan.display_polyline).unwrap().len(), 27);
}

#[test]
fn plan_trip_decodes_provider_polyline() {
    let points = northbound(30.0, -100.0, 132);
    let provider = StaticRouteProvider::new(&points);
    let plan = plan_trip(
        &provider,
        &texas_panhandle_store(),
        points[0],
        points[131],
        &haversine_config(),
    )
    .unwrap();

    assert_eq!(plan.route.points().len(), 132);
    assert_eq!(plan.fuel_stops.len(), 2);
}

#[test]
fn plan_trip_reports_unavailable_route() {
    let store = texas_panhandle_store();
    let config = PlannerConfig::default();
    let (a, b) = (coord(30.0, -100.0), coord(40.0, -100.0));

    let err = plan_trip(&UnavailableRouteProvider, &store, a, b, &config).unwrap_err();
    assert!(matches!(err, PlanError::RouteUnavailable(ProviderError::NoRoute(_))));
    assert_eq!(err.to_string(), "unable to find a route");

    let err = plan_trip(&StaticRouteProvider::raw("_p~iF~ps|"), &store, a, b, &config).unwrap_err();
    assert!(matches!(
        err,
        PlanError::RouteUnavailable(ProviderError::Geometry(RouteError::MalformedPolyline(_)))
    ));

    let err = plan_trip(&StaticRouteProvider::raw(""), &store, a, b, &config).unwrap_err();
    assert!(matches!(
        err,
        PlanError::RouteUnavailable(ProviderError::Geometry(RouteError::EmptyRoute))
    ));
}

#[test]
fn plan_trip_rejects_bad_config() {
    let config = PlannerConfig {
        range_miles: -1.0,
        ..PlannerConfig::default()
    };
    let points = northbound(30.0, -100.0, 10);
    let err = plan_trip(
        &StaticRouteProvider::new(&points),
        &texas_panhandle_store(),
        points[0],
        points[9],
        &config,
    )
    .unwrap_err();
    assert!(matches!(err, PlanError::Internal(RouteError::InvalidConfig(_))));
}

#[test]
fn fallback_chain_plans_over_great_circle() {
    let provider = FallbackRouteProvider::new()
        .with(UnavailableRouteProvider)
        .with(GreatCircleRouteProvider::default());
    let origin = coord(30.0, -100.0);
    let destination = coord(43.1, -100.0);

    let plan = plan_trip(
        &provider,
        &texas_panhandle_store(),
        origin,
        destination,
        &haversine_config(),
    )
    .unwrap();

    assert_eq!(plan.segments.len(), 2);
    assert_eq!(plan.markers, [origin, destination]);
    assert!(plan.fuel_stops.len() <= plan.segments.len());
}

#[test]
fn interstate_80_segments_and_stop_order() {
    let points = i80_route(20);
    let store: InMemoryFuelPriceStore = I80_WESTBOUND
        .iter()
        .enumerate()
        .map(|(i, w)| station(w.name, 3.00 + i as f64 * 0.05, w.lat, w.lng))
        .collect();

    for model in [GeodesicModel::Geodesic, GeodesicModel::Haversine] {
        let config = PlannerConfig {
            geodesic: model,
            search_radius_miles: 150.0,
            ..PlannerConfig::default()
        };
        let plan = plan_route(Route::new(points.clone()).unwrap(), &store, &config).unwrap();

        let total = plan.total_distance_miles;
        assert!(total > 1300.0 && total < 1330.0, "{:?} got {}", model, total);
        assert_eq!(plan.segments.len(), (total / 400.0).floor() as usize);
        assert!(plan.segments.iter().all(|s| s.end_mile <= total));
        assert!(plan.fuel_stops.len() <= plan.segments.len());
        assert!(!plan.fuel_stops.is_empty());
        assert!(plan
            .fuel_stops
            .windows(2)
            .all(|w| w[0].mile_position < w[1].mile_position));
        assert!(plan.total_fuel_cost > 0.0);
    }
}

#[test]
fn geodesic_models_agree_within_half_a_percent() {
    let points = i80_route(10);
    let ellipsoidal = distance::total(&points, GeodesicModel::Geodesic).unwrap();
    let spherical = distance::total(&points, GeodesicModel::Haversine).unwrap();
    assert!(((ellipsoidal - spherical) / spherical).abs() < 0.005);
}

#[test]
fn interpolated_midpoints_stay_on_segment() {
    let points = northbound(30.0, -100.0, 132);
    let config = PlannerConfig {
        midpoint: MidpointStrategy::Interpolated,
        ..haversine_config()
    };
    let plan = plan_route(Route::new(points).unwrap(), &texas_panhandle_store(), &config).unwrap();

    // Mile 200 is about 2.89 degrees north, mile 600 about 8.68.
    assert!((plan.segments[0].midpoint.lat() - (30.0 + 200.0 / MILES_PER_TENTH_DEGREE / 10.0)).abs() < 1e-6);
    assert!((plan.segments[1].midpoint.lat() - (30.0 + 600.0 / MILES_PER_TENTH_DEGREE / 10.0)).abs() < 1e-6);
    // Nothing is stocked near 38.7N.
    assert_eq!(plan.fuel_stops.len(), 1);
}
