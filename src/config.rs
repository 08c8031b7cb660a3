//! Planner tuning knobs.

use serde::Deserialize;

use crate::distance::GeodesicModel;
use crate::error::RouteError;
use crate::segment::MidpointStrategy;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Miles covered by one segment before another refuel search.
    pub range_miles: f64,
    /// Station search radius around each segment midpoint, in miles.
    pub search_radius_miles: f64,
    /// Vehicle fuel economy in miles per unit of fuel.
    pub fuel_economy_mpg: f64,
    /// Tank range; caps every leg that ends at a stop.
    pub max_leg_miles: f64,
    pub geodesic: GeodesicModel,
    pub midpoint: MidpointStrategy,
    /// Douglas-Peucker tolerance (degrees) for the display polyline.
    pub display_tolerance: Option<f64>,
    /// Fallback stride for the display polyline when no tolerance is set.
    pub display_stride: Option<usize>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            range_miles: 400.0,
            search_radius_miles: 50.0,
            fuel_economy_mpg: 10.0,
            max_leg_miles: 500.0,
            geodesic: GeodesicModel::default(),
            midpoint: MidpointStrategy::default(),
            display_tolerance: Some(0.001),
            display_stride: Some(5),
        }
    }
}

impl PlannerConfig {
    /// Rejects values that would stall segmentation or divide by zero.
    pub fn validate(&self) -> Result<(), RouteError> {
        let positive = [
            ("range_miles", self.range_miles),
            ("search_radius_miles", self.search_radius_miles),
            ("fuel_economy_mpg", self.fuel_economy_mpg),
            ("max_leg_miles", self.max_leg_miles),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(RouteError::InvalidConfig(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
