//! Test fixtures for fuel-route-planner.
//!
//! Provides:
//! - Real interstate waypoints (I-80, Chicago to Salt Lake City)
//! - Synthetic due-north routes with exactly known spacing
//! - In-memory route providers and station builders

#![allow(dead_code)]

pub mod interstate_80;

pub use interstate_80::*;

use fuel_route_planner::coordinate::Coordinate;
use fuel_route_planner::error::ProviderError;
use fuel_route_planner::polyline;
use fuel_route_planner::route::Route;
use fuel_route_planner::stops::FuelStation;
use fuel_route_planner::traits::RouteProvider;

/// Haversine miles covered by 0.1 degree of latitude.
pub const MILES_PER_TENTH_DEGREE: f64 = 6.909_341_9;

pub fn coord(lat: f64, lng: f64) -> Coordinate {
    Coordinate::new(lat, lng).expect("valid fixture coordinate")
}

/// `count` points heading due north from (`start_lat`, `lng`) in 0.1 degree
/// steps.
pub fn northbound(start_lat: f64, lng: f64, count: usize) -> Vec<Coordinate> {
    (0..count)
        .map(|i| coord(start_lat + i as f64 * 0.1, lng))
        .collect()
}

pub fn station(name: &str, price: f64, lat: f64, lng: f64) -> FuelStation {
    FuelStation {
        name: name.to_string(),
        address: format!("{} Truck Plaza", name),
        state: String::new(),
        location: coord(lat, lng),
        price,
    }
}

/// Serves one fixed geometry, shipped as an encoded polyline the way a real
/// routing service would.
pub struct StaticRouteProvider {
    pub encoded: String,
}

impl StaticRouteProvider {
    pub fn new(points: &[Coordinate]) -> Self {
        Self {
            encoded: polyline::encode(points),
        }
    }

    pub fn raw(encoded: &str) -> Self {
        Self {
            encoded: encoded.to_string(),
        }
    }
}

impl RouteProvider for StaticRouteProvider {
    fn get_route(&self, _origin: Coordinate, _destination: Coordinate) -> Result<Route, ProviderError> {
        Ok(Route::from_polyline(&self.encoded)?)
    }
}

pub struct UnavailableRouteProvider;

impl RouteProvider for UnavailableRouteProvider {
    fn get_route(&self, _origin: Coordinate, _destination: Coordinate) -> Result<Route, ProviderError> {
        Err(ProviderError::NoRoute("routing service unavailable".to_string()))
    }
}
