//! Core value types for the dashboard datasets
//!
//! Every record here is an immutable value produced once per session:
//! - `MonthlyPoint`: revenue and order count for one calendar month
//! - `CategoryRecord` / `RegionRecord`: randomized breakdowns
//! - `Segment`, `ChurnBucket`, `ProductRecord`: fixed literal tables
//! - `DataBundle`: the complete set handed to the view layer

use serde::{Deserialize, Serialize};

/// Month labels in calendar order
pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Product categories, in generation order
pub const CATEGORIES: [&str; 5] = ["Electronics", "Clothing", "Home & Garden", "Sports", "Books"];

/// Sales region
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Region {
    North,
    South,
    East,
    West,
}

impl Region {
    /// All regions in generation order
    pub fn all() -> &'static [Region] {
        &[Region::North, Region::South, Region::East, Region::West]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Region::North => "North",
            Region::South => "South",
            Region::East => "East",
            Region::West => "West",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Revenue and orders for one month
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyPoint {
    /// Month label, one of [`MONTHS`]
    pub month: String,
    /// Revenue in dollars
    pub revenue: f64,
    /// Number of orders placed
    pub orders: u32,
}

/// Sales performance of one product category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryRecord {
    pub category: String,
    pub sales: f64,
    pub units: u32,
}

/// Revenue and customer base of one region
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegionRecord {
    pub region: Region,
    pub revenue: f64,
    pub customers: u32,
}

/// Customer segment from the RFM breakdown
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Segment {
    pub name: String,
    /// Share of the customer base, in percent
    pub value: u8,
    /// Hex colour token used for the segment swatch
    pub color: String,
    pub description: String,
}

impl Segment {
    pub fn new(
        name: impl Into<String>,
        value: u8,
        color: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value,
            color: color.into(),
            description: description.into(),
        }
    }
}

/// Churn risk tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Risk",
            RiskLevel::Medium => "Medium Risk",
            RiskLevel::High => "High Risk",
        }
    }
}

/// Customers falling into one churn risk tier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChurnBucket {
    pub risk: RiskLevel,
    pub segment: String,
    pub customers: u32,
    pub percentage: u8,
}

impl ChurnBucket {
    pub fn new(risk: RiskLevel, customers: u32, percentage: u8) -> Self {
        Self {
            risk,
            segment: risk.label().to_string(),
            customers,
            percentage,
        }
    }
}

/// A best-selling product
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductRecord {
    pub name: String,
    pub sales: f64,
    pub units: u32,
}

impl ProductRecord {
    pub fn new(name: impl Into<String>, sales: f64, units: u32) -> Self {
        Self {
            name: name.into(),
            sales,
            units,
        }
    }
}

/// All datasets shown by the dashboard
///
/// Built once per session by the generator and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataBundle {
    pub monthly_sales: Vec<MonthlyPoint>,
    /// Sorted by sales, highest first
    pub categories: Vec<CategoryRecord>,
    pub regions: Vec<RegionRecord>,
    pub segments: Vec<Segment>,
    pub churn: Vec<ChurnBucket>,
    pub top_products: Vec<ProductRecord>,
}

impl DataBundle {
    /// Sum of monthly revenue over the year
    pub fn total_revenue(&self) -> f64 {
        self.monthly_sales.iter().map(|m| m.revenue).sum()
    }

    /// Sum of monthly orders over the year
    pub fn total_orders(&self) -> u64 {
        self.monthly_sales.iter().map(|m| m.orders as u64).sum()
    }

    /// Month with the highest revenue
    pub fn peak_month(&self) -> Option<&MonthlyPoint> {
        self.monthly_sales
            .iter()
            .max_by(|a, b| a.revenue.total_cmp(&b.revenue))
    }

    /// Fraction of annual revenue earned in the last three months
    pub fn holiday_share(&self) -> f64 {
        let total = self.total_revenue();
        if total <= 0.0 {
            return 0.0;
        }
        let holiday: f64 = self
            .monthly_sales
            .iter()
            .rev()
            .take(3)
            .map(|m| m.revenue)
            .sum();
        holiday / total
    }

    /// The `n` best-selling categories
    pub fn top_categories(&self, n: usize) -> &[CategoryRecord] {
        &self.categories[..n.min(self.categories.len())]
    }

    pub fn region(&self, region: Region) -> Option<&RegionRecord> {
        self.regions.iter().find(|r| r.region == region)
    }
}
