//! Picks the cheapest nearby station for each segment.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::segment::Segment;
use crate::traits::FuelPriceStore;

/// A priced, geolocated station as held by the price store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelStation {
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub state: String,
    pub location: Coordinate,
    /// Retail price per unit of fuel.
    pub price: f64,
}

/// The station chosen for one segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelStop {
    /// Start mile of the segment this stop serves.
    pub mile_position: f64,
    pub name: String,
    pub price: f64,
    pub location: Coordinate,
}

impl FuelStop {
    fn new(segment: &Segment, station: FuelStation) -> Self {
        Self {
            mile_position: segment.start_mile,
            name: station.name,
            price: station.price,
            location: station.location,
        }
    }
}

/// Cheapest station within `radius_miles` of `midpoint`. No retry, no
/// widening of the radius.
pub fn select<S>(store: &S, midpoint: Coordinate, radius_miles: f64) -> Option<FuelStation>
where
    S: FuelPriceStore + ?Sized,
{
    store.find_cheapest_within(midpoint, radius_miles)
}

/// One stop per segment that has a station in range, in segment order.
///
/// Lookups run in parallel; the result keeps ascending mile order regardless
/// of completion order. Segments with no station in range are skipped.
pub fn build_stops<S>(store: &S, segments: &[Segment]) -> Vec<FuelStop>
where
    S: FuelPriceStore + Sync + ?Sized,
{
    let stops: Vec<FuelStop> = segments
        .par_iter()
        .filter_map(|segment| {
            select(store, segment.midpoint, segment.search_radius_miles)
                .map(|station| FuelStop::new(segment, station))
        })
        .collect();

    tracing::debug!(
        segments = segments.len(),
        stops = stops.len(),
        "selected fuel stops"
    );

    stops
}
