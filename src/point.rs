//! Routing points: the locations a route is requested through.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::costing::UnknownVariant;

/// How a route interacts with a point.
///
/// A `Break` is a stop: the route arrives, a leg ends, and the next leg
/// starts there. A `Through` point only shapes the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutingPointType {
    Break,
    Through,
}

impl RoutingPointType {
    /// Canonical wire string for this point type.
    pub fn as_str(self) -> &'static str {
        match self {
            RoutingPointType::Break => "break",
            RoutingPointType::Through => "through",
        }
    }
}

impl fmt::Display for RoutingPointType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoutingPointType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "break" => Ok(RoutingPointType::Break),
            "through" => Ok(RoutingPointType::Through),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

/// A single location in a routing request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingPoint {
    pub lat: f64,
    pub lng: f64,
    #[serde(rename = "type")]
    pub point_type: RoutingPointType,
    /// Preferred approach heading in degrees from north, if any.
    pub heading: Option<u16>,
    /// Display name for the point (e.g. a street address).
    pub name: Option<String>,
}

impl RoutingPoint {
    /// Creates a break point at the given coordinates.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            point_type: RoutingPointType::Break,
            heading: None,
            name: None,
        }
    }

    /// Creates a through point at the given coordinates.
    pub fn through(lat: f64, lng: f64) -> Self {
        Self {
            point_type: RoutingPointType::Through,
            ..Self::new(lat, lng)
        }
    }

    /// The point's coordinates as a (latitude, longitude) tuple.
    pub fn location(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_type_wire_strings() {
        assert_eq!(RoutingPointType::Break.as_str(), "break");
        assert_eq!(RoutingPointType::Through.as_str(), "through");
    }

    #[test]
    fn test_point_type_from_str() {
        assert_eq!("break".parse::<RoutingPointType>(), Ok(RoutingPointType::Break));
        assert_eq!("through".parse::<RoutingPointType>(), Ok(RoutingPointType::Through));
        assert_eq!(
            "waypoint".parse::<RoutingPointType>(),
            Err(UnknownVariant("waypoint".to_string()))
        );
    }

    #[test]
    fn test_new_is_break() {
        let point = RoutingPoint::new(36.17, -115.14);
        assert_eq!(point.point_type, RoutingPointType::Break);
        assert_eq!(point.location(), (36.17, -115.14));
        assert!(point.heading.is_none());
        assert!(point.name.is_none());
    }

    #[test]
    fn test_through_constructor() {
        let point = RoutingPoint::through(36.12, -115.17);
        assert_eq!(point.point_type, RoutingPointType::Through);
        assert_eq!(point.location(), (36.12, -115.17));
    }

    #[test]
    fn test_serde_renames_point_type() {
        let point = RoutingPoint::new(36.17, -115.14);
        let json = serde_json::to_string(&point).unwrap();
        assert!(json.contains("\"type\":\"break\""));
        let parsed: RoutingPoint = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, point);
    }
}
