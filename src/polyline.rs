//! Encoded polyline codec and decoded polyline representation.
//!
//! Route geometries travel over the wire as compact ASCII polyline strings:
//! coordinates are scaled to fixed-point integers, delta-encoded against the
//! previous point, zig-zag transformed, and packed as little-endian base-32
//! varints offset into printable ASCII. [`encode`] and [`decode`] implement
//! that codec; [`Polyline`] holds the decoded coordinate sequence used for
//! internal processing.
//!
//! The precision exponent is part of the provider's API contract and is not
//! embedded in the encoded string. Decoding with a different precision than
//! the one used to encode produces silently wrong coordinates; the codec
//! cannot detect the mismatch.

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Highest supported precision exponent.
///
/// Scaled coordinates must stay within a 32-bit accumulator; a longitude of
/// 180 degrees at precision 10 would not.
pub const MAX_PRECISION: u32 = 9;

/// ASCII offset applied to every 5-bit chunk.
const CHUNK_OFFSET: u8 = 63;

/// Continuation bit marking a non-final chunk of a varint group.
const CONTINUATION_BIT: u64 = 0x20;

/// Error type for polyline codec operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolylineError {
    /// The precision exponent is outside the supported range (0-9).
    InvalidPrecision(u32),
    /// A byte outside the polyline alphabet, or a latitude delta with no
    /// matching longitude delta.
    MalformedPolyline,
    /// The final varint group has its continuation bit set with no
    /// following byte.
    TruncatedPolyline,
}

impl std::fmt::Display for PolylineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PolylineError::InvalidPrecision(p) => {
                write!(f, "Invalid precision {} (supported range 0-{})", p, MAX_PRECISION)
            }
            PolylineError::MalformedPolyline => write!(f, "Malformed polyline"),
            PolylineError::TruncatedPolyline => write!(f, "Truncated polyline"),
        }
    }
}

impl std::error::Error for PolylineError {}

/// Encodes a coordinate sequence into a compact polyline string.
///
/// Each point is a `(latitude, longitude)` tuple. Coordinates are scaled by
/// `10^precision`, rounded to the nearest integer, and delta-encoded in
/// input order. An empty sequence encodes to an empty string.
///
/// # Errors
///
/// [`PolylineError::InvalidPrecision`] if `precision` exceeds
/// [`MAX_PRECISION`].
pub fn encode(points: &[(f64, f64)], precision: u32) -> Result<String, PolylineError> {
    let factor = scale_factor(precision)?;

    let mut output = String::with_capacity(points.len() * 10);
    let mut prev_lat: i64 = 0;
    let mut prev_lng: i64 = 0;

    for &(lat, lng) in points {
        let scaled_lat = (lat * factor).round() as i64;
        let scaled_lng = (lng * factor).round() as i64;
        encode_value(scaled_lat - prev_lat, &mut output);
        encode_value(scaled_lng - prev_lng, &mut output);
        prev_lat = scaled_lat;
        prev_lng = scaled_lng;
    }

    trace!(points = points.len(), bytes = output.len(), "encoded polyline");
    Ok(output)
}

/// Decodes a polyline string back into a coordinate sequence.
///
/// `precision` must match the value used at encode time. An empty string
/// decodes to an empty sequence. Decoding is all-or-nothing: no partial
/// result is returned for malformed input.
///
/// # Errors
///
/// - [`PolylineError::InvalidPrecision`] if `precision` exceeds
///   [`MAX_PRECISION`].
/// - [`PolylineError::MalformedPolyline`] if a byte falls outside the
///   polyline alphabet or the final point is missing its longitude.
/// - [`PolylineError::TruncatedPolyline`] if the input ends in the middle of
///   a varint group.
pub fn decode(blob: &str, precision: u32) -> Result<Vec<(f64, f64)>, PolylineError> {
    let factor = scale_factor(precision)?;

    let bytes = blob.as_bytes();
    let mut points = Vec::new();
    let mut index = 0;
    let mut lat: i64 = 0;
    let mut lng: i64 = 0;

    while index < bytes.len() {
        let (delta_lat, after_lat) = decode_value(bytes, index)?;
        if after_lat == bytes.len() {
            // Latitude delta with no matching longitude delta.
            return Err(PolylineError::MalformedPolyline);
        }
        let (delta_lng, after_lng) = decode_value(bytes, after_lat)?;

        lat += delta_lat;
        lng += delta_lng;
        points.push((lat as f64 / factor, lng as f64 / factor));
        index = after_lng;
    }

    trace!(points = points.len(), bytes = bytes.len(), "decoded polyline");
    Ok(points)
}

fn scale_factor(precision: u32) -> Result<f64, PolylineError> {
    if precision > MAX_PRECISION {
        return Err(PolylineError::InvalidPrecision(precision));
    }
    Ok(10f64.powi(precision as i32))
}

/// Appends one signed delta as a zig-zag base-32 varint.
fn encode_value(delta: i64, output: &mut String) {
    let mut value = (delta << 1) as u64;
    if delta < 0 {
        value = !value;
    }

    loop {
        let mut chunk = value & 0x1f;
        value >>= 5;
        if value > 0 {
            chunk |= CONTINUATION_BIT;
        }
        output.push((chunk as u8 + CHUNK_OFFSET) as char);
        if value == 0 {
            break;
        }
    }
}

/// Reads one varint group starting at `index`, returning the signed delta
/// and the index of the byte after the group.
fn decode_value(bytes: &[u8], mut index: usize) -> Result<(i64, usize), PolylineError> {
    let mut value: u64 = 0;
    let mut shift: u32 = 0;

    loop {
        let Some(&byte) = bytes.get(index) else {
            return Err(PolylineError::TruncatedPolyline);
        };
        if !(CHUNK_OFFSET..=CHUNK_OFFSET + 63).contains(&byte) {
            return Err(PolylineError::MalformedPolyline);
        }
        if shift >= u64::BITS {
            // More continuation chunks than any in-range value can need.
            return Err(PolylineError::MalformedPolyline);
        }

        let chunk = u64::from(byte - CHUNK_OFFSET);
        value |= (chunk & 0x1f) << shift;
        shift += 5;
        index += 1;

        if chunk & CONTINUATION_BIT == 0 {
            break;
        }
    }

    let delta = if value & 1 == 1 {
        !(value >> 1) as i64
    } else {
        (value >> 1) as i64
    };
    Ok((delta, index))
}

/// A polyline representing a route geometry as decoded coordinates.
///
/// Stores latitude/longitude points directly for internal processing; the
/// compact encoded form only exists at API boundaries, produced and consumed
/// through [`Polyline::encode`] and [`Polyline::from_encoded`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<(f64, f64)>,
}

impl Polyline {
    /// Creates a new Polyline from decoded coordinate points.
    ///
    /// Each point is a (latitude, longitude) tuple.
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// Decodes an encoded polyline string received from a routing provider.
    pub fn from_encoded(blob: &str, precision: u32) -> Result<Self, PolylineError> {
        decode(blob, precision).map(Self::new)
    }

    /// Encodes the points into the compact polyline wire format.
    pub fn encode(&self, precision: u32) -> Result<String, PolylineError> {
        encode(&self.points, precision)
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<(f64, f64)> {
        self.points
    }
}
