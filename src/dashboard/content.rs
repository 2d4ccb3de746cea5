//! Static dashboard content
//!
//! Headline KPI cards, lifetime value tiers, churn model indicators,
//! retention tactics and the per-tab insight lines. None of it is derived
//! from the generated bundle.

use serde::Serialize;

use crate::data::RiskLevel;
use crate::view::Tab;

/// Headline figure shown above every tab
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct KpiCard {
    pub label: &'static str,
    pub value: &'static str,
    pub change: &'static str,
}

pub fn kpi_cards() -> Vec<KpiCard> {
    vec![
        KpiCard {
            label: "Total Revenue",
            value: "$847K",
            change: "+23.5%",
        },
        KpiCard {
            label: "Total Orders",
            value: "12,459",
            change: "+18.2%",
        },
        KpiCard {
            label: "Active Customers",
            value: "5,432",
            change: "+12.4%",
        },
        KpiCard {
            label: "Avg Order Value",
            value: "$68",
            change: "+4.3%",
        },
    ]
}

/// Customer lifetime value tier
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ClvTier {
    pub label: &'static str,
    /// Average lifetime value in dollars
    pub value: u32,
    pub customers: u32,
    pub orders_per_year: f64,
    /// Fill of the tier's progress bar, in percent
    pub bar_percent: u8,
}

pub fn clv_tiers() -> Vec<ClvTier> {
    vec![
        ClvTier {
            label: "High Value (Top 20%)",
            value: 2340,
            customers: 1086,
            orders_per_year: 8.3,
            bar_percent: 80,
        },
        ClvTier {
            label: "Medium Value (60%)",
            value: 780,
            customers: 3259,
            orders_per_year: 4.1,
            bar_percent: 60,
        },
        ClvTier {
            label: "Low Value (20%)",
            value: 180,
            customers: 1087,
            orders_per_year: 1.2,
            bar_percent: 30,
        },
    ]
}

/// Feature importance of a churn model input
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChurnIndicator {
    pub feature: &'static str,
    pub importance: u8,
}

pub fn churn_indicators() -> Vec<ChurnIndicator> {
    [
        ("Days Since Last Purchase", 92),
        ("Order Frequency Drop", 85),
        ("Cart Abandonment Rate", 78),
        ("Customer Service Contacts", 65),
        ("Email Engagement", 58),
    ]
    .into_iter()
    .map(|(feature, importance)| ChurnIndicator {
        feature,
        importance,
    })
    .collect()
}

/// Retention playbook for one risk tier
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RetentionTactics {
    pub risk: RiskLevel,
    pub customers: u32,
    pub tactics: Vec<&'static str>,
}

pub fn retention_tactics() -> Vec<RetentionTactics> {
    vec![
        RetentionTactics {
            risk: RiskLevel::High,
            customers: 600,
            tactics: vec![
                "Send personalized win-back offers (20% discount)",
                "Priority customer support outreach",
                "Exclusive early access to new products",
            ],
        },
        RetentionTactics {
            risk: RiskLevel::Medium,
            customers: 980,
            tactics: vec![
                "Re-engagement email campaigns",
                "Product recommendations based on history",
                "Limited-time loyalty rewards",
            ],
        },
    ]
}

pub const RETENTION_IMPACT: &str =
    "Reducing churn by 5% could save $127K annually in revenue";

/// One-line blurb per churn tier card
pub fn churn_blurb(risk: RiskLevel) -> &'static str {
    match risk {
        RiskLevel::Low => "customers with regular purchase patterns",
        RiskLevel::Medium => "customers with declining activity",
        RiskLevel::High => "customers likely to churn soon",
    }
}

/// Insight lines shown under a tab's panel
pub fn insights(tab: Tab) -> &'static [&'static str] {
    match tab {
        Tab::Overview => &[
            "Insight: Revenue peaks during holiday season (Nov-Dec). Plan inventory accordingly.",
            "Recommendation: Focus marketing budget on top 3 categories for maximum ROI.",
            "Action Item: Investigate lower performance in underperforming regions.",
        ],
        Tab::SalesAnalysis => &[
            "Revenue shows 23.5% YoY growth with strong Q4 performance",
            "Average order value increased 4.3% indicating successful upselling",
            "Holiday season (Nov-Dec) accounts for 35% of annual revenue",
        ],
        Tab::CustomerInsights => &[
            "Create VIP program for high-value segment (20%)",
            "Re-engagement campaign for medium-value customers",
            "Offer incentives to boost low-value segment frequency",
        ],
        Tab::ChurnPrediction => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kpi_cards() {
        let cards = kpi_cards();
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].value, "$847K");
        assert!(cards.iter().all(|c| c.change.starts_with('+')));
    }

    #[test]
    fn test_clv_tier_customers() {
        let total: u32 = clv_tiers().iter().map(|t| t.customers).sum();
        assert_eq!(total, 5432);
    }

    #[test]
    fn test_churn_indicators_ranked() {
        let indicators = churn_indicators();
        assert_eq!(indicators.len(), 5);
        assert!(indicators.windows(2).all(|w| w[0].importance > w[1].importance));
    }

    #[test]
    fn test_retention_tactics_match_churn_counts() {
        let tactics = retention_tactics();
        let churn = crate::data::catalog::churn_buckets();

        for playbook in &tactics {
            let bucket = churn.iter().find(|b| b.risk == playbook.risk).unwrap();
            assert_eq!(bucket.customers, playbook.customers);
            assert_eq!(playbook.tactics.len(), 3);
        }
    }

    #[test]
    fn test_insights_per_tab() {
        assert_eq!(insights(Tab::Overview).len(), 3);
        assert!(insights(Tab::ChurnPrediction).is_empty());
    }
}
