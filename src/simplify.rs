//! Point reduction for display geometry.
//!
//! Map URLs have length limits, so the route is thinned before it is
//! re-encoded. Tolerance-based reduction works in raw degree space.

use geo::{Coord, LineString, Simplify};

use crate::coordinate::Coordinate;

/// Thins `route` by Ramer-Douglas-Peucker when `tolerance` is a positive
/// number, otherwise by keeping every `stride`-th point starting at the first.
///
/// With neither set (or a stride of 0 or 1) the route comes back unchanged.
/// Stride sampling does not force the final point in.
pub fn simplify(route: &[Coordinate], tolerance: Option<f64>, stride: Option<usize>) -> Vec<Coordinate> {
    match (tolerance, stride) {
        (Some(tolerance), _) if tolerance > 0.0 => douglas_peucker(route, tolerance),
        (_, Some(stride)) if stride > 1 => route.iter().step_by(stride).copied().collect(),
        _ => route.to_vec(),
    }
}

/// Keeps the endpoints and every point whose removal would shift the line by
/// more than `tolerance` degrees.
fn douglas_peucker(route: &[Coordinate], tolerance: f64) -> Vec<Coordinate> {
    let line: LineString<f64> = route
        .iter()
        .map(|point| Coord {
            x: point.lng(),
            y: point.lat(),
        })
        .collect::<Vec<_>>()
        .into();

    // Surviving vertices are copies of in-range inputs.
    line.simplify(tolerance)
        .coords()
        .filter_map(|coord| Coordinate::new(coord.y, coord.x).ok())
        .collect()
}
