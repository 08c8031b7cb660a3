//! Route providers that keep planning alive when the routing service is down.
//!
//! [`GreatCircleRouteProvider`] never fails for sane endpoints but ignores
//! roads entirely; [`FallbackRouteProvider`] tries a prioritized list of
//! providers in order, so it usually sits last in that list.

use crate::coordinate::Coordinate;
use crate::distance::GeodesicModel;
use crate::error::ProviderError;
use crate::route::Route;
use crate::traits::RouteProvider;

/// Assumed average highway speed for duration estimates.
const DEFAULT_SPEED_KMH: f64 = 90.0;

/// Spacing between sampled points on the great circle.
const DEFAULT_STEP_MILES: f64 = 5.0;

const KM_PER_MILE: f64 = 1.609344;

/// Straight-line route sampled along the great circle between endpoints.
#[derive(Debug, Clone)]
pub struct GreatCircleRouteProvider {
    pub step_miles: f64,
    /// Assumed average driving speed in km/h.
    pub speed_kmh: f64,
}

impl Default for GreatCircleRouteProvider {
    fn default() -> Self {
        Self {
            step_miles: DEFAULT_STEP_MILES,
            speed_kmh: DEFAULT_SPEED_KMH,
        }
    }
}

impl GreatCircleRouteProvider {
    pub fn new(step_miles: f64, speed_kmh: f64) -> Self {
        Self {
            step_miles,
            speed_kmh,
        }
    }

    fn sample(&self, from: Coordinate, to: Coordinate, miles: f64) -> Result<Vec<Coordinate>, ProviderError> {
        if miles == 0.0 {
            return Ok(vec![from]);
        }

        let (lat1, lng1) = (from.lat().to_radians(), from.lng().to_radians());
        let (lat2, lng2) = (to.lat().to_radians(), to.lng().to_radians());
        let angle = (unit_vector(lat1, lng1).dot(unit_vector(lat2, lng2))).clamp(-1.0, 1.0).acos();
        let sin_angle = angle.sin();
        if sin_angle.abs() < 1e-12 {
            return Err(ProviderError::NoRoute(
                "endpoints are antipodal; great circle is undefined".to_string(),
            ));
        }

        let steps = (miles / self.step_miles).ceil().max(1.0) as usize;
        let mut points = Vec::with_capacity(steps + 1);
        points.push(from);
        for i in 1..steps {
            let f = i as f64 / steps as f64;
            let a = ((1.0 - f) * angle).sin() / sin_angle;
            let b = (f * angle).sin() / sin_angle;
            let x = a * lat1.cos() * lng1.cos() + b * lat2.cos() * lng2.cos();
            let y = a * lat1.cos() * lng1.sin() + b * lat2.cos() * lng2.sin();
            let z = a * lat1.sin() + b * lat2.sin();
            let lat = z.atan2((x * x + y * y).sqrt()).to_degrees();
            let lng = y.atan2(x).to_degrees();
            points.push(Coordinate::new(lat, lng)?);
        }
        points.push(to);

        Ok(points)
    }
}

impl RouteProvider for GreatCircleRouteProvider {
    fn get_route(&self, origin: Coordinate, destination: Coordinate) -> Result<Route, ProviderError> {
        if !(self.step_miles > 0.0 && self.speed_kmh > 0.0) {
            return Err(ProviderError::NoRoute(
                "great circle step and speed must be positive".to_string(),
            ));
        }

        let miles = GeodesicModel::Haversine.distance_miles(origin, destination);
        let points = self.sample(origin, destination, miles)?;
        let km = miles * KM_PER_MILE;
        let seconds = km / self.speed_kmh * 3600.0;

        Ok(Route::new(points)?.with_summary(km * 1000.0, seconds))
    }
}

struct Unit(f64, f64, f64);

impl Unit {
    fn dot(&self, other: Unit) -> f64 {
        self.0 * other.0 + self.1 * other.1 + self.2 * other.2
    }
}

fn unit_vector(lat: f64, lng: f64) -> Unit {
    Unit(lat.cos() * lng.cos(), lat.cos() * lng.sin(), lat.sin())
}

/// Tries each provider in priority order until one produces a route.
#[derive(Default)]
pub struct FallbackRouteProvider {
    providers: Vec<Box<dyn RouteProvider + Send + Sync>>,
}

impl FallbackRouteProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a provider with lower priority than those already added.
    pub fn with(mut self, provider: impl RouteProvider + Send + Sync + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl RouteProvider for FallbackRouteProvider {
    fn get_route(&self, origin: Coordinate, destination: Coordinate) -> Result<Route, ProviderError> {
        for (priority, provider) in self.providers.iter().enumerate() {
            match provider.get_route(origin, destination) {
                Ok(route) => return Ok(route),
                Err(err) => {
                    tracing::warn!(priority, error = %err, "route provider failed, trying next");
                }
            }
        }

        Err(ProviderError::Exhausted {
            attempted: self.providers.len(),
        })
    }
}
