//! Splits a route into fixed-range segments, each anchoring one station search.

use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::error::RouteError;

/// How a segment's representative point is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MidpointStrategy {
    /// The route point at half the boundary point's index. Cheap, and matches
    /// the stops existing deployments produce, but it is not a geometric
    /// midpoint: on routes with uneven point density it can land far from
    /// the segment.
    #[default]
    IndexHalving,
    /// The point at `start_mile + range / 2`, linearly interpolated between
    /// the two route points that bracket it.
    Interpolated,
}

/// A range-bounded slice of the route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start_mile: f64,
    pub end_mile: f64,
    /// Index of the first route point at or beyond `end_mile`.
    pub boundary_index: usize,
    pub midpoint: Coordinate,
    pub search_radius_miles: f64,
}

/// Partitions the route into consecutive `range_miles` segments.
///
/// Emits `floor(total / range_miles)` segments in increasing mile order; the
/// trailing remainder shorter than a full range is dropped. `cumulative` must
/// be the non-decreasing output of [`crate::distance::cumulative`] for
/// `route`.
pub fn segment(
    route: &[Coordinate],
    cumulative: &[f64],
    range_miles: f64,
    search_radius_miles: f64,
    strategy: MidpointStrategy,
) -> Result<Vec<Segment>, RouteError> {
    if route.is_empty() {
        return Err(RouteError::EmptyRoute);
    }
    if route.len() != cumulative.len() {
        return Err(RouteError::MismatchedDistances {
            points: route.len(),
            distances: cumulative.len(),
        });
    }
    if !range_miles.is_finite() || range_miles <= 0.0 {
        return Err(RouteError::InvalidConfig(format!(
            "range_miles must be a positive number, got {}",
            range_miles
        )));
    }

    let total = cumulative[cumulative.len() - 1];
    let mut segments = Vec::new();

    // Multiplying instead of accumulating keeps the count at floor(total / range).
    let mut k: u32 = 1;
    loop {
        let start_mile = f64::from(k - 1) * range_miles;
        let end_mile = f64::from(k) * range_miles;
        if end_mile > total {
            break;
        }

        let boundary_index = first_index_reaching(cumulative, end_mile)
            .ok_or(RouteError::NoSegmentBoundary { end_mile })?;

        let midpoint = match strategy {
            MidpointStrategy::IndexHalving => route[boundary_index / 2],
            MidpointStrategy::Interpolated => {
                interpolate_at(route, cumulative, start_mile + range_miles / 2.0)?
            }
        };

        segments.push(Segment {
            start_mile,
            end_mile,
            boundary_index,
            midpoint,
            search_radius_miles,
        });
        k += 1;
    }

    Ok(segments)
}

/// Smallest index whose cumulative distance is at least `mile`.
fn first_index_reaching(cumulative: &[f64], mile: f64) -> Option<usize> {
    let index = cumulative.partition_point(|&d| d < mile);
    (index < cumulative.len()).then_some(index)
}

fn interpolate_at(
    route: &[Coordinate],
    cumulative: &[f64],
    mile: f64,
) -> Result<Coordinate, RouteError> {
    let index = first_index_reaching(cumulative, mile)
        .ok_or(RouteError::NoSegmentBoundary { end_mile: mile })?;
    if index == 0 || cumulative[index] == mile {
        return Ok(route[index]);
    }

    let (from, to) = (route[index - 1], route[index]);
    let span = cumulative[index] - cumulative[index - 1];
    if span <= 0.0 {
        return Ok(to);
    }

    let t = (mile - cumulative[index - 1]) / span;
    Coordinate::new(
        from.lat() + (to.lat() - from.lat()) * t,
        from.lng() + (to.lng() - from.lng()) * t,
    )
}
