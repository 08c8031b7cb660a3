//! Interstate 80 waypoints, Chicago to Salt Lake City.
//!
//! Coordinates are city centers along the corridor, close enough to the
//! highway for distance and segmentation tests.

use fuel_route_planner::coordinate::Coordinate;

use super::coord;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Waypoint {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Waypoint {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> Coordinate {
        coord(self.lat, self.lng)
    }
}

pub const I80_WESTBOUND: &[Waypoint] = &[
    Waypoint::new("Chicago, IL", 41.8781, -87.6298),
    Waypoint::new("Joliet, IL", 41.5250, -88.0817),
    Waypoint::new("Davenport, IA", 41.5236, -90.5776),
    Waypoint::new("Iowa City, IA", 41.6611, -91.5302),
    Waypoint::new("Des Moines, IA", 41.5868, -93.6250),
    Waypoint::new("Council Bluffs, IA", 41.2619, -95.8608),
    Waypoint::new("Omaha, NE", 41.2565, -95.9345),
    Waypoint::new("Lincoln, NE", 40.8136, -96.7026),
    Waypoint::new("Grand Island, NE", 40.9264, -98.3420),
    Waypoint::new("Kearney, NE", 40.6993, -99.0832),
    Waypoint::new("North Platte, NE", 41.1403, -100.7601),
    Waypoint::new("Sidney, NE", 41.1428, -102.9780),
    Waypoint::new("Cheyenne, WY", 41.1400, -104.8202),
    Waypoint::new("Laramie, WY", 41.3114, -105.5911),
    Waypoint::new("Rawlins, WY", 41.7911, -107.2387),
    Waypoint::new("Rock Springs, WY", 41.5875, -109.2029),
    Waypoint::new("Evanston, WY", 41.2683, -110.9632),
    Waypoint::new("Salt Lake City, UT", 40.7608, -111.8910),
];

/// The waypoints densified by linear interpolation so each leg between
/// waypoints has `per_leg` steps.
pub fn i80_route(per_leg: usize) -> Vec<Coordinate> {
    let mut points = Vec::new();
    for pair in I80_WESTBOUND.windows(2) {
        let (from, to) = (&pair[0], &pair[1]);
        for step in 0..per_leg {
            let t = step as f64 / per_leg as f64;
            points.push(coord(
                from.lat + (to.lat - from.lat) * t,
                from.lng + (to.lng - from.lng) * t,
            ));
        }
    }
    points.push(I80_WESTBOUND[I80_WESTBOUND.len() - 1].coords());
    points
}
