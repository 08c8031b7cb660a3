//! In-memory fuel price store backed by an R-tree.
//!
//! Stations are indexed by (lat, lng). A radius query first collects the
//! stations inside a degree-space bounding box that fully contains the search
//! circle, then filters them by exact geodesic distance.

use rstar::primitives::GeomWithData;
use rstar::{AABB, RTree};

use crate::coordinate::Coordinate;
use crate::distance::GeodesicModel;
use crate::stops::FuelStation;
use crate::traits::FuelPriceStore;

/// Lower bound on miles per degree of latitude (68.7 on WGS-84 at the
/// equator), so the bounding box never under-covers the circle.
const MIN_MILES_PER_DEGREE: f64 = 68.0;

/// Above this latitude the box spans every longitude.
const POLAR_CUTOFF_DEG: f64 = 89.0;

type IndexedStation = GeomWithData<[f64; 2], usize>;

#[derive(Debug, Clone)]
pub struct InMemoryFuelPriceStore {
    stations: Vec<FuelStation>,
    tree: RTree<IndexedStation>,
    model: GeodesicModel,
}

impl InMemoryFuelPriceStore {
    pub fn new(stations: Vec<FuelStation>) -> Self {
        Self::with_model(stations, GeodesicModel::default())
    }

    /// Uses `model` for the radius check; pass the planner's model so the
    /// store and the route agree on distance.
    pub fn with_model(stations: Vec<FuelStation>, model: GeodesicModel) -> Self {
        let entries = stations
            .iter()
            .enumerate()
            .map(|(index, station)| {
                GeomWithData::new([station.location.lat(), station.location.lng()], index)
            })
            .collect();

        Self {
            stations,
            tree: RTree::bulk_load(entries),
            model,
        }
    }
}

impl FromIterator<FuelStation> for InMemoryFuelPriceStore {
    fn from_iter<I: IntoIterator<Item = FuelStation>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl FuelPriceStore for InMemoryFuelPriceStore {
    fn find_cheapest_within(&self, point: Coordinate, radius_miles: f64) -> Option<FuelStation> {
        if radius_miles.is_nan() || radius_miles < 0.0 {
            return None;
        }

        let envelope = search_envelope(point, radius_miles);
        self.tree
            .locate_in_envelope(&envelope)
            .map(|entry| entry.data)
            .filter(|&index| {
                self.model
                    .distance_miles(point, self.stations[index].location)
                    <= radius_miles
            })
            // Insertion order breaks price ties.
            .min_by(|&a, &b| {
                self.stations[a]
                    .price
                    .total_cmp(&self.stations[b].price)
                    .then(a.cmp(&b))
            })
            .map(|index| self.stations[index].clone())
    }
}

/// Degree-space box containing every point within `radius_miles` of `center`.
fn search_envelope(center: Coordinate, radius_miles: f64) -> AABB<[f64; 2]> {
    let lat_delta = radius_miles / MIN_MILES_PER_DEGREE;
    let min_lat = (center.lat() - lat_delta).max(-90.0);
    let max_lat = (center.lat() + lat_delta).min(90.0);

    let poleward = min_lat.abs().max(max_lat.abs());
    let (min_lng, max_lng) = if poleward >= POLAR_CUTOFF_DEG {
        (-180.0, 180.0)
    } else {
        let lng_delta = radius_miles / (MIN_MILES_PER_DEGREE * poleward.to_radians().cos());
        let (min_lng, max_lng) = (center.lng() - lng_delta, center.lng() + lng_delta);
        // Wrapping across the antimeridian: search every longitude.
        if min_lng < -180.0 || max_lng > 180.0 {
            (-180.0, 180.0)
        } else {
            (min_lng, max_lng)
        }
    };

    AABB::from_corners([min_lat, min_lng], [max_lat, max_lng])
}
