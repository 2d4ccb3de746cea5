//! Tab and region filter identifiers
//!
//! Both are closed enums. Parsing is the only place a string becomes a
//! tab or region, and it rejects anything outside the fixed sets.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::ViewError;
use crate::data::Region;

/// Mutually exclusive dashboard view mode
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Overview,
    #[serde(rename = "sales")]
    SalesAnalysis,
    #[serde(rename = "customers")]
    CustomerInsights,
    #[serde(rename = "churn")]
    ChurnPrediction,
}

impl Tab {
    /// All tabs in display order
    pub fn all() -> &'static [Tab] {
        &[
            Tab::Overview,
            Tab::SalesAnalysis,
            Tab::CustomerInsights,
            Tab::ChurnPrediction,
        ]
    }

    /// Short identifier used on the command line
    pub fn id(&self) -> &'static str {
        match self {
            Tab::Overview => "overview",
            Tab::SalesAnalysis => "sales",
            Tab::CustomerInsights => "customers",
            Tab::ChurnPrediction => "churn",
        }
    }

    /// Label shown in the tab bar
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::SalesAnalysis => "Sales Analysis",
            Tab::CustomerInsights => "Customer Insights",
            Tab::ChurnPrediction => "Churn Prediction",
        }
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Tab {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Tab::all()
            .iter()
            .copied()
            .find(|tab| {
                tab.id().eq_ignore_ascii_case(needle) || tab.label().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| ViewError::UnknownTab(s.to_string()))
    }
}

/// Region selected in the sales filter dropdown
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RegionFilter {
    #[default]
    All,
    North,
    South,
    East,
    West,
}

impl RegionFilter {
    /// All dropdown options in display order
    pub fn all() -> &'static [RegionFilter] {
        &[
            RegionFilter::All,
            RegionFilter::North,
            RegionFilter::South,
            RegionFilter::East,
            RegionFilter::West,
        ]
    }

    /// The region this option names, `None` for All
    pub fn region(&self) -> Option<Region> {
        match self {
            RegionFilter::All => None,
            RegionFilter::North => Some(Region::North),
            RegionFilter::South => Some(Region::South),
            RegionFilter::East => Some(Region::East),
            RegionFilter::West => Some(Region::West),
        }
    }

    pub fn label(&self) -> &'static str {
        match self.region() {
            None => "All Regions",
            Some(region) => region.name(),
        }
    }
}

impl From<Region> for RegionFilter {
    fn from(region: Region) -> Self {
        match region {
            Region::North => RegionFilter::North,
            Region::South => RegionFilter::South,
            Region::East => RegionFilter::East,
            Region::West => RegionFilter::West,
        }
    }
}

impl std::fmt::Display for RegionFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RegionFilter {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        if needle.eq_ignore_ascii_case("all") || needle.eq_ignore_ascii_case("all regions") {
            return Ok(RegionFilter::All);
        }

        Region::all()
            .iter()
            .find(|region| region.name().eq_ignore_ascii_case(needle))
            .map(|&region| RegionFilter::from(region))
            .ok_or_else(|| ViewError::UnknownRegion(s.to_string()))
    }
}
