//! View State Controller
//!
//! Holds the selected tab and region filter over one immutable
//! [`DataBundle`] and decides which slice of it is visible.
//!
//! The region filter is cosmetic: it is stored and echoed by the sales
//! panel but never narrows the bundle or any visible figure.

use std::sync::Arc;

use super::error::ViewResult;
use super::types::{RegionFilter, Tab};
use crate::data::{
    CategoryRecord, ChurnBucket, DataBundle, MonthlyPoint, ProductRecord, RegionRecord, Segment,
};

/// Current selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewState {
    pub tab: Tab,
    pub region: RegionFilter,
}

/// Datasets exposed to the presentation layer for the active tab
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Panel<'a> {
    Overview {
        monthly_sales: &'a [MonthlyPoint],
        categories: &'a [CategoryRecord],
        regions: &'a [RegionRecord],
        top_products: &'a [ProductRecord],
    },
    SalesAnalysis {
        monthly_sales: &'a [MonthlyPoint],
        region: RegionFilter,
    },
    CustomerInsights {
        segments: &'a [Segment],
    },
    ChurnPrediction {
        churn: &'a [ChurnBucket],
    },
}

impl Panel<'_> {
    pub fn tab(&self) -> Tab {
        match self {
            Panel::Overview { .. } => Tab::Overview,
            Panel::SalesAnalysis { .. } => Tab::SalesAnalysis,
            Panel::CustomerInsights { .. } => Tab::CustomerInsights,
            Panel::ChurnPrediction { .. } => Tab::ChurnPrediction,
        }
    }
}

/// Tab and region selection over a session's data bundle
#[derive(Debug, Clone)]
pub struct ViewController {
    bundle: Arc<DataBundle>,
    state: ViewState,
}

impl ViewController {
    pub fn new(bundle: impl Into<Arc<DataBundle>>) -> Self {
        Self {
            bundle: bundle.into(),
            state: ViewState::default(),
        }
    }

    /// Builder: start on a given selection
    pub fn with_state(mut self, state: ViewState) -> Self {
        self.state = state;
        self
    }

    pub fn bundle(&self) -> &DataBundle {
        &self.bundle
    }

    pub fn shared_bundle(&self) -> Arc<DataBundle> {
        Arc::clone(&self.bundle)
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn selected_tab(&self) -> Tab {
        self.state.tab
    }

    pub fn selected_region(&self) -> RegionFilter {
        self.state.region
    }

    pub fn set_tab(&mut self, tab: Tab) {
        if self.state.tab != tab {
            tracing::debug!(from = %self.state.tab, to = %tab, "Tab changed");
        }
        self.state.tab = tab;
    }

    pub fn set_region(&mut self, region: RegionFilter) {
        if self.state.region != region {
            tracing::debug!(from = %self.state.region, to = %region, "Region filter changed");
        }
        self.state.region = region;
    }

    /// Select a tab by id or label
    ///
    /// Unknown ids are rejected and the current tab is kept.
    pub fn select_tab(&mut self, id: &str) -> ViewResult<Tab> {
        let tab = id.parse::<Tab>()?;
        self.set_tab(tab);
        Ok(tab)
    }

    /// Select a region by name
    ///
    /// Unknown names are rejected and the current region is kept.
    pub fn select_region(&mut self, name: &str) -> ViewResult<RegionFilter> {
        let region = name.parse::<RegionFilter>()?;
        self.set_region(region);
        Ok(region)
    }

    /// Datasets visible under the current tab
    pub fn visible(&self) -> Panel<'_> {
        let bundle = self.bundle.as_ref();
        match self.state.tab {
            Tab::Overview => Panel::Overview {
                monthly_sales: &bundle.monthly_sales,
                categories: &bundle.categories,
                regions: &bundle.regions,
                top_products: &bundle.top_products,
            },
            Tab::SalesAnalysis => Panel::SalesAnalysis {
                monthly_sales: &bundle.monthly_sales,
                region: self.state.region,
            },
            Tab::CustomerInsights => Panel::CustomerInsights {
                segments: &bundle.segments,
            },
            Tab::ChurnPrediction => Panel::ChurnPrediction {
                churn: &bundle.churn,
            },
        }
    }
}
