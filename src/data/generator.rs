//! Mock dataset generator
//!
//! Draws every randomized figure from a bounded uniform range. The draw
//! order is fixed (month by month, then category by category, then region
//! by region), so a seeded random source always yields the same bundle.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::catalog;
use super::types::{
    CategoryRecord, DataBundle, MonthlyPoint, Region, RegionRecord, CATEGORIES, MONTHS,
};

/// Monthly revenue: base + uniform spread
pub const REVENUE_BASE: f64 = 45_000.0;
pub const REVENUE_SPREAD: f64 = 35_000.0;
/// Added to revenue for the holiday months
pub const REVENUE_HOLIDAY_BOOST: f64 = 20_000.0;

pub const ORDERS_BASE: f64 = 800.0;
pub const ORDERS_SPREAD: f64 = 400.0;
pub const ORDERS_HOLIDAY_BOOST: f64 = 300.0;

/// Months after this index (Oct, Nov, Dec) get the holiday boost
pub const HOLIDAY_AFTER_INDEX: usize = 8;

pub const CATEGORY_SALES_BASE: f64 = 40_000.0;
pub const CATEGORY_SALES_SPREAD: f64 = 80_000.0;
pub const CATEGORY_UNITS_BASE: f64 = 500.0;
pub const CATEGORY_UNITS_SPREAD: f64 = 2_000.0;

pub const REGION_REVENUE_BASE: f64 = 80_000.0;
pub const REGION_REVENUE_SPREAD: f64 = 150_000.0;
pub const REGION_CUSTOMERS_BASE: f64 = 1_000.0;
pub const REGION_CUSTOMERS_SPREAD: f64 = 3_000.0;

/// Generator configuration
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfig {
    /// Random seed for reproducibility (None = entropy)
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }
}

/// Builds a [`DataBundle`] from its own random source
pub struct DataGenerator {
    rng: StdRng,
    seed: Option<u64>,
}

impl DataGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            rng,
            seed: config.seed,
        }
    }

    /// Seed in use, if the generator was seeded
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn generate(&mut self) -> DataBundle {
        let bundle = generate(&mut self.rng);
        tracing::debug!(
            seed = ?self.seed,
            months = bundle.monthly_sales.len(),
            categories = bundle.categories.len(),
            regions = bundle.regions.len(),
            "Generated data bundle"
        );
        bundle
    }
}

/// Generate a bundle from a fixed seed
pub fn generate_seeded(seed: u64) -> DataBundle {
    DataGenerator::new(GeneratorConfig::seeded(seed)).generate()
}

/// Generate a complete bundle from the given random source
pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> DataBundle {
    DataBundle {
        monthly_sales: monthly_sales(rng),
        categories: categories(rng),
        regions: regions(rng),
        segments: catalog::segments(),
        churn: catalog::churn_buckets(),
        top_products: catalog::top_products(),
    }
}

fn monthly_sales<R: Rng + ?Sized>(rng: &mut R) -> Vec<MonthlyPoint> {
    MONTHS
        .iter()
        .enumerate()
        .map(|(i, month)| {
            let holiday = i > HOLIDAY_AFTER_INDEX;

            let mut revenue = REVENUE_BASE + rng.gen::<f64>() * REVENUE_SPREAD;
            let mut orders = ORDERS_BASE + rng.gen::<f64>() * ORDERS_SPREAD;
            if holiday {
                revenue += REVENUE_HOLIDAY_BOOST;
                orders += ORDERS_HOLIDAY_BOOST;
            }

            MonthlyPoint {
                month: month.to_string(),
                revenue,
                orders: orders.floor() as u32,
            }
        })
        .collect()
}

fn categories<R: Rng + ?Sized>(rng: &mut R) -> Vec<CategoryRecord> {
    let mut records: Vec<CategoryRecord> = CATEGORIES
        .iter()
        .map(|category| {
            let sales = rng.gen::<f64>() * CATEGORY_SALES_SPREAD + CATEGORY_SALES_BASE;
            let units = (rng.gen::<f64>() * CATEGORY_UNITS_SPREAD + CATEGORY_UNITS_BASE).floor();
            CategoryRecord {
                category: category.to_string(),
                sales,
                units: units as u32,
            }
        })
        .collect();

    // sort_by is stable: equal sales keep generation order
    records.sort_by(|a, b| b.sales.total_cmp(&a.sales));
    records
}

fn regions<R: Rng + ?Sized>(rng: &mut R) -> Vec<RegionRecord> {
    Region::all()
        .iter()
        .map(|&region| {
            let revenue = rng.gen::<f64>() * REGION_REVENUE_SPREAD + REGION_REVENUE_BASE;
            let customers =
                (rng.gen::<f64>() * REGION_CUSTOMERS_SPREAD + REGION_CUSTOMERS_BASE).floor();
            RegionRecord {
                region,
                revenue,
                customers: customers as u32,
            }
        })
        .collect()
}
