//! Fuel stop planning along a driving route.
//!
//! Decodes a route's polyline, measures it, splits it into range-bounded
//! segments, picks the cheapest station near each one, and estimates the
//! fuel bill.

pub mod config;
pub mod coordinate;
pub mod cost;
pub mod distance;
pub mod error;
pub mod fallback;
pub mod osrm;
pub mod planner;
pub mod polyline;
pub mod route;
pub mod segment;
pub mod simplify;
pub mod stops;
pub mod store;
pub mod traits;
