//! Encoded polyline codec for route geometries.
//!
//! Routing providers ship geometry as a compact ASCII string: coordinates
//! scaled by 1e5, delta-encoded against the previous point (starting from
//! 0,0), zigzag-mapped to unsigned, and emitted as 5-bit groups offset by 63
//! with 0x20 marking continuation. See [Google's polyline
//! algorithm](https://developers.google.com/maps/documentation/utilities/polylinealgorithm).

use std::str::Bytes;

use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::error::RouteError;

/// Scale between decimal degrees and encoded integers (5 decimal digits).
const PRECISION: f64 = 1e5;

/// Offset added to every 5-bit group to land in printable ASCII.
const CHAR_OFFSET: u8 = 63;

const CONTINUATION_BIT: u64 = 0x20;

const CHUNK_MASK: u64 = 0x1F;

/// Groups beyond this shift cannot come from a valid coordinate delta.
const MAX_SHIFT: u32 = 60;

/// Route geometry held decoded, encodable back to the wire string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<Coordinate>,
}

impl Polyline {
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    /// Decodes an encoded polyline string.
    pub fn decode(encoded: &str) -> Result<Self, RouteError> {
        decode(encoded).map(Self::new)
    }

    /// Encodes the points back into the compact string format.
    pub fn encode(&self) -> String {
        encode(&self.points)
    }

    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }
}

/// Decodes an encoded polyline into absolute coordinates.
///
/// An empty string decodes to an empty sequence. Fails with
/// [`RouteError::MalformedPolyline`] on characters outside `'?'..='~'`, a
/// value cut off mid-group, a latitude with no longitude, or a point outside
/// the valid coordinate range.
pub fn decode(encoded: &str) -> Result<Vec<Coordinate>, RouteError> {
    let mut bytes = encoded.bytes();
    let mut points = Vec::with_capacity(encoded.len() / 4);
    let mut lat: i64 = 0;
    let mut lng: i64 = 0;

    while bytes.len() > 0 {
        let d_lat = read_value(&mut bytes)?;
        if bytes.len() == 0 {
            return Err(RouteError::MalformedPolyline(format!(
                "latitude without longitude at point {}",
                points.len()
            )));
        }
        let d_lng = read_value(&mut bytes)?;

        lat = lat.checked_add(d_lat).ok_or_else(overflow)?;
        lng = lng.checked_add(d_lng).ok_or_else(overflow)?;

        let point = Coordinate::new(lat as f64 / PRECISION, lng as f64 / PRECISION).map_err(
            |_| {
                RouteError::MalformedPolyline(format!(
                    "point {} decodes out of range ({}, {})",
                    points.len(),
                    lat as f64 / PRECISION,
                    lng as f64 / PRECISION
                ))
            },
        )?;
        points.push(point);
    }

    Ok(points)
}

/// Encodes coordinates into the compact polyline string.
pub fn encode(points: &[Coordinate]) -> String {
    let mut encoded = String::with_capacity(points.len() * 8);
    let mut prev_lat: i64 = 0;
    let mut prev_lng: i64 = 0;

    for point in points {
        let lat = (point.lat() * PRECISION).round() as i64;
        let lng = (point.lng() * PRECISION).round() as i64;
        write_value(lat - prev_lat, &mut encoded);
        write_value(lng - prev_lng, &mut encoded);
        prev_lat = lat;
        prev_lng = lng;
    }

    encoded
}

fn overflow() -> RouteError {
    RouteError::MalformedPolyline("coordinate value overflows".to_string())
}

/// Reads a zigzag-encoded signed value.
fn read_value(bytes: &mut Bytes) -> Result<i64, RouteError> {
    let raw = read_raw_value(bytes)?;
    let value = (raw >> 1) as i64;
    Ok(if raw & 1 == 1 { !value } else { value })
}

/// Reads an unsigned value spread over one or more 5-bit groups.
fn read_raw_value(bytes: &mut Bytes) -> Result<u64, RouteError> {
    let mut result: u64 = 0;
    let mut shift: u32 = 0;
    loop {
        let byte = bytes.next().ok_or_else(|| {
            RouteError::MalformedPolyline("input ends inside a multi-byte group".to_string())
        })?;
        if !(CHAR_OFFSET..=CHAR_OFFSET + 63).contains(&byte) {
            return Err(RouteError::MalformedPolyline(format!(
                "invalid character {:?}",
                byte as char
            )));
        }
        let chunk = u64::from(byte - CHAR_OFFSET);
        result |= (chunk & CHUNK_MASK) << shift;
        if chunk & CONTINUATION_BIT == 0 {
            return Ok(result);
        }
        shift += 5;
        if shift > MAX_SHIFT {
            return Err(overflow());
        }
    }
}

fn write_value(value: i64, out: &mut String) {
    let mut raw = (if value < 0 { !(value << 1) } else { value << 1 }) as u64;
    while raw >= CONTINUATION_BIT {
        out.push(((CONTINUATION_BIT | (raw & CHUNK_MASK)) as u8 + CHAR_OFFSET) as char);
        raw >>= 5;
    }
    out.push((raw as u8 + CHAR_OFFSET) as char);
}
