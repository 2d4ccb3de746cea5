//! # shoplens
//!
//! E-commerce analytics dashboard over synthetic data: revenue trends,
//! category and region breakdowns, customer segmentation and churn risk.
//!
//! ## Modules
//!
//! - [`data`]: Mock data generation (`DataBundle`, generated once per session)
//! - [`view`]: Tab and region filter state over a bundle
//! - [`dashboard`]: Static content, terminal rendering and dataset export
//! - [`session`]: One interactive dashboard session
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust
//! use shoplens::{generate_seeded, render, RenderOptions, Tab, ViewController};
//!
//! let mut view = ViewController::new(generate_seeded(42));
//! view.select_tab("churn").unwrap();
//! assert_eq!(view.selected_tab(), Tab::ChurnPrediction);
//!
//! // Unknown identifiers are rejected, the selection is kept
//! assert!(view.select_tab("not-a-real-tab").is_err());
//!
//! let text = render(&view, &RenderOptions::plain());
//! assert!(text.contains("Customer Churn Risk Analysis"));
//! ```

pub mod config;
pub mod dashboard;
pub mod data;
pub mod session;
pub mod view;

// Re-export top-level types for convenience
pub use data::{
    generate, generate_seeded, CategoryRecord, ChurnBucket, DataBundle, DataGenerator,
    GeneratorConfig, MonthlyPoint, ProductRecord, Region, RegionRecord, RiskLevel, Segment,
};

pub use view::{Panel, RegionFilter, Tab, ViewController, ViewError, ViewResult, ViewState};

pub use dashboard::{export, render, Dataset, ExportError, ExportFormat, RenderOptions};

pub use session::{Command, Outcome, Session};

pub use config::{Config, ConfigError, DashboardConfig, DisplayConfig, LoggingConfig};
