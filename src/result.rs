//! Route result records: the shape a routing response decodes into.
//!
//! Plain data records with no provider-schema awareness. A consumer parses
//! the provider's response, decodes each leg's shape through the polyline
//! codec, and assembles these records.

use serde::{Deserialize, Serialize};

use crate::polyline::Polyline;

/// A single instruction along a leg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Maneuver {
    /// Human-readable instruction text.
    pub instruction: String,
    /// Street names the maneuver applies to.
    pub street_names: Vec<String>,
    /// Estimated travel time in seconds.
    pub time: u32,
    /// Length in the result's distance units.
    pub length: f64,
    /// Index into the owning leg's shape where this maneuver begins.
    pub begin_shape_index: usize,
    /// Index into the owning leg's shape where this maneuver ends.
    pub end_shape_index: usize,
}

impl Maneuver {
    /// The slice of the leg's shape this maneuver covers.
    ///
    /// Returns `None` when the indices fall outside the shape.
    pub fn shape_slice<'a>(&self, shape: &'a Polyline) -> Option<&'a [(f64, f64)]> {
        if self.begin_shape_index > self.end_shape_index {
            return None;
        }
        shape.points().get(self.begin_shape_index..=self.end_shape_index)
    }
}

/// One leg of a route, between two break points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteLeg {
    /// Decoded leg geometry.
    pub shape: Polyline,
    /// Length in the result's distance units.
    pub distance: f64,
    /// Estimated travel time in seconds.
    pub time: u32,
    pub maneuvers: Vec<Maneuver>,
}

/// A complete route: one leg per break-to-break segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    pub legs: Vec<RouteLeg>,
    /// Total length in `units`.
    pub distance: f64,
    /// Total estimated travel time in seconds.
    pub time: u32,
    /// Distance units label as reported by the provider (e.g. "kilometers").
    pub units: String,
}

impl RouteResult {
    /// All shape points across legs, in travel order.
    pub fn shape_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.legs.iter().flat_map(|leg| leg.shape.points().iter().copied())
    }
}
