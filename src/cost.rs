//! Fuel cost estimate for a planned route.
//!
//! Assumes a full tank at departure. Legs are paired with stop prices by
//! position: leg `i` is priced at stop `i`, so the leg before the first stop
//! is priced at the first stop, and once stops run out every remaining leg
//! reuses the last stop's price.

use crate::stops::FuelStop;

/// One stretch of driving and the price used for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leg {
    pub miles: f64,
    pub price: f64,
}

/// Splits the route at each stop and assigns prices positionally.
///
/// Legs ending at a stop are capped at `max_leg_miles`; the final leg past
/// the last stop is not capped.
pub fn legs(route_distance_miles: f64, stops: &[FuelStop], max_leg_miles: f64) -> Vec<Leg> {
    let Some(last) = stops.last() else {
        return Vec::new();
    };

    let mut lengths = Vec::with_capacity(stops.len() + 1);
    let mut previous = 0.0;
    for stop in stops {
        lengths.push(max_leg_miles.min(stop.mile_position - previous));
        previous = stop.mile_position;
    }

    let remainder = route_distance_miles - previous;
    if remainder > 0.0 {
        lengths.push(remainder);
    }

    lengths
        .into_iter()
        .enumerate()
        .map(|(i, miles)| Leg {
            miles,
            price: stops.get(i).unwrap_or(last).price,
        })
        .collect()
}

/// Total fuel spend rounded to cents. Zero when there are no stops.
pub fn estimate(
    route_distance_miles: f64,
    stops: &[FuelStop],
    fuel_economy_mpg: f64,
    max_leg_miles: f64,
) -> f64 {
    let total: f64 = legs(route_distance_miles, stops, max_leg_miles)
        .iter()
        .map(|leg| leg.miles / fuel_economy_mpg * leg.price)
        .sum();

    round_cents(total)
}

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
