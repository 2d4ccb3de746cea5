//! Mock data layer
//!
//! - **types**: Value records (MonthlyPoint, CategoryRecord, DataBundle, ...)
//! - **generator**: Randomized generation of the bundle
//! - **catalog**: Fixed literal tables (segments, churn, top products)
//!
//! # Example
//!
//! ```rust
//! use shoplens::data::generate_seeded;
//!
//! let bundle = generate_seeded(42);
//! assert_eq!(bundle.monthly_sales.len(), 12);
//! assert_eq!(bundle, generate_seeded(42));
//! ```

pub mod catalog;
pub mod generator;
pub mod types;

pub use generator::{generate, generate_seeded, DataGenerator, GeneratorConfig};
pub use types::{
    CategoryRecord, ChurnBucket, DataBundle, MonthlyPoint, ProductRecord, Region, RegionRecord,
    RiskLevel, Segment, CATEGORIES, MONTHS,
};
