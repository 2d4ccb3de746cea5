//! View state
//!
//! - **types**: `Tab` and `RegionFilter` closed enums
//! - **controller**: `ViewController`, the selection over a `DataBundle`
//! - **error**: Parsing errors for tab and region identifiers

pub mod controller;
pub mod error;
pub mod types;

pub use controller::{Panel, ViewController, ViewState};
pub use error::{ViewError, ViewResult};
pub use types::{RegionFilter, Tab};
