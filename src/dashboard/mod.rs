//! Dashboard presentation
//!
//! - **content**: Static KPI cards, lifetime value tiers, churn indicators, insight lines
//! - **format**: Money, count and bar formatting
//! - **render**: Text rendering of the active tab
//! - **export**: JSON / NDJSON / CSV export of bundle datasets
//! - **error**: Export errors
//!
//! ```text
//! Session → ViewController::visible() → Panel → render() → String
//!                    └─ bundle() → export() → String
//! ```

pub mod content;
pub mod error;
pub mod export;
pub mod format;
pub mod render;

pub use content::{
    churn_indicators, clv_tiers, insights, kpi_cards, retention_tactics, ChurnIndicator, ClvTier,
    KpiCard, RetentionTactics,
};
pub use error::{ExportError, ExportResult};
pub use export::{export, Dataset, ExportFormat};
pub use format::{format_count, format_thousands, MAX_BAR_WIDTH};
pub use render::{render, RenderOptions};
