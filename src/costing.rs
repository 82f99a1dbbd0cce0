//! Costing models and their wire-string representations.
//!
//! A costing model names the routing preference profile a request is priced
//! against (driving, cycling, walking, ...). The provider API speaks in
//! lowercase snake_case strings; this module owns the mapping in both
//! directions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Routing preference profile understood by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostingModel {
    Auto,
    AutoShorter,
    Bicycle,
    Bus,
    Multimodal,
    Pedestrian,
}

impl CostingModel {
    /// Canonical wire string for this costing model.
    pub fn as_str(self) -> &'static str {
        match self {
            CostingModel::Auto => "auto",
            CostingModel::AutoShorter => "auto_shorter",
            CostingModel::Bicycle => "bicycle",
            CostingModel::Bus => "bus",
            CostingModel::Multimodal => "multimodal",
            CostingModel::Pedestrian => "pedestrian",
        }
    }

    /// All supported costing models.
    pub fn all() -> &'static [CostingModel] {
        &[
            CostingModel::Auto,
            CostingModel::AutoShorter,
            CostingModel::Bicycle,
            CostingModel::Bus,
            CostingModel::Multimodal,
            CostingModel::Pedestrian,
        ]
    }
}

impl fmt::Display for CostingModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CostingModel {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(CostingModel::Auto),
            "auto_shorter" => Ok(CostingModel::AutoShorter),
            "bicycle" => Ok(CostingModel::Bicycle),
            "bus" => Ok(CostingModel::Bus),
            "multimodal" => Ok(CostingModel::Multimodal),
            "pedestrian" => Ok(CostingModel::Pedestrian),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

/// A wire string that maps to no known variant.
///
/// Returned instead of silently defaulting, so a provider adding a new
/// profile surfaces as an error rather than a misrouted request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant(pub String);

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown variant: {}", self.0)
    }
}

impl std::error::Error for UnknownVariant {}
