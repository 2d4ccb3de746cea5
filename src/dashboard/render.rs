//! Terminal renderer
//!
//! Turns the controller's visible panel into plain text: header, tab bar,
//! KPI cards, the active panel with text bar charts, and a footer.

use owo_colors::OwoColorize;
use std::fmt::Write as _;

use super::content::{
    churn_blurb, churn_indicators, clv_tiers, insights, kpi_cards, retention_tactics,
    RETENTION_IMPACT,
};
use super::format::{bar, format_count, format_thousands};
use crate::data::{
    CategoryRecord, ChurnBucket, MonthlyPoint, ProductRecord, RegionRecord, Segment,
};
use crate::view::{Panel, RegionFilter, Tab, ViewController};

pub const TITLE: &str = "E-Commerce Analytics Dashboard";
pub const SUBTITLE: &str = "Real-time insights for data-driven business decisions";
pub const FOOTER: &str = "Data: Simulated E-Commerce Dataset";

/// Rendering options
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Width of bar charts in characters
    pub bar_width: usize,
    /// Emit ANSI colours
    pub color: bool,
    /// Currency symbol prefixed to money figures
    pub currency: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            bar_width: 32,
            color: true,
            currency: "$".to_string(),
        }
    }
}

impl RenderOptions {
    pub fn plain() -> Self {
        Self {
            color: false,
            ..Default::default()
        }
    }

    fn heading(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn positive(&self, text: &str) -> String {
        if self.color {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    fn accent(&self, text: &str) -> String {
        if self.color {
            text.cyan().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn money(&self, value: f64) -> String {
        format_thousands(value, &self.currency)
    }
}

/// Render the full dashboard for the controller's current state
pub fn render(view: &ViewController, options: &RenderOptions) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", options.heading(TITLE));
    let _ = writeln!(out, "{}", SUBTITLE);
    let _ = writeln!(out);

    render_tab_bar(&mut out, view.selected_tab(), options);
    render_kpis(&mut out, options);

    match view.visible() {
        Panel::Overview {
            monthly_sales,
            categories,
            regions,
            top_products,
        } => {
            render_revenue_trend(&mut out, monthly_sales, options);
            render_categories(&mut out, categories, options);
            render_regions(&mut out, regions, options);
            render_top_products(&mut out, top_products, options);
        }
        Panel::SalesAnalysis {
            monthly_sales,
            region,
        } => render_sales_analysis(&mut out, monthly_sales, region, options),
        Panel::CustomerInsights { segments } => {
            render_segments(&mut out, segments, options);
            render_clv(&mut out, options);
        }
        Panel::ChurnPrediction { churn } => render_churn(&mut out, churn, options),
    }

    let tab_insights = insights(view.selected_tab());
    if !tab_insights.is_empty() {
        let _ = writeln!(out, "{}", options.heading(insight_heading(view.selected_tab())));
        for line in tab_insights {
            let _ = writeln!(out, "  • {}", line);
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "{}", FOOTER);
    out
}

fn insight_heading(tab: Tab) -> &'static str {
    match tab {
        Tab::Overview => "Takeaways",
        Tab::SalesAnalysis => "Key Findings",
        Tab::CustomerInsights => "Recommended Actions",
        Tab::ChurnPrediction => "",
    }
}

fn render_tab_bar(out: &mut String, active: Tab, options: &RenderOptions) {
    let labels: Vec<String> = Tab::all()
        .iter()
        .map(|tab| {
            if *tab == active {
                options.accent(&format!("[ {} ]", tab.label()))
            } else {
                format!("  {}  ", tab.label())
            }
        })
        .collect();

    let _ = writeln!(out, "{}", labels.join(" "));
    let _ = writeln!(out, "{}", "─".repeat(72));
}

fn render_kpis(out: &mut String, options: &RenderOptions) {
    for card in kpi_cards() {
        let _ = writeln!(
            out,
            "  {:<18} {:>8}  {}",
            card.label,
            card.value,
            options.positive(card.change)
        );
    }
    let _ = writeln!(out);
}

fn render_revenue_trend(out: &mut String, months: &[MonthlyPoint], options: &RenderOptions) {
    let _ = writeln!(out, "{}", options.heading("Monthly Revenue Trend"));
    let max = months.iter().map(|m| m.revenue).fold(0.0, f64::max);
    for point in months {
        let _ = writeln!(
            out,
            "  {:<4} {} {:>8}",
            point.month,
            bar(point.revenue, max, options.bar_width),
            options.money(point.revenue)
        );
    }
    let _ = writeln!(out);
}

fn render_categories(out: &mut String, categories: &[CategoryRecord], options: &RenderOptions) {
    let _ = writeln!(out, "{}", options.heading("Top Product Categories"));
    let max = categories.iter().map(|c| c.sales).fold(0.0, f64::max);
    for record in categories {
        let _ = writeln!(
            out,
            "  {:<14} {} {:>8}  {:>6} units",
            record.category,
            bar(record.sales, max, options.bar_width),
            options.money(record.sales),
            format_count(record.units as u64)
        );
    }
    let _ = writeln!(out);
}

fn render_regions(out: &mut String, regions: &[RegionRecord], options: &RenderOptions) {
    let _ = writeln!(out, "{}", options.heading("Revenue by Region"));
    let max = regions.iter().map(|r| r.revenue).fold(0.0, f64::max);
    for record in regions {
        let _ = writeln!(
            out,
            "  {:<6} {} {:>8}  {:>6} customers",
            record.region.name(),
            bar(record.revenue, max, options.bar_width),
            options.money(record.revenue),
            format_count(record.customers as u64)
        );
    }
    let _ = writeln!(out);
}

fn render_top_products(out: &mut String, products: &[ProductRecord], options: &RenderOptions) {
    let _ = writeln!(out, "{}", options.heading("Top Selling Products"));
    for (rank, product) in products.iter().enumerate() {
        let _ = writeln!(
            out,
            "  #{} {:<22} {:>6} units sold  {:>8}",
            rank + 1,
            product.name,
            format_count(product.units as u64),
            options.money(product.sales)
        );
    }
    let _ = writeln!(out);
}

fn render_sales_analysis(
    out: &mut String,
    months: &[MonthlyPoint],
    region: RegionFilter,
    options: &RenderOptions,
) {
    let _ = writeln!(
        out,
        "{}  (region: {})",
        options.heading("Sales Performance Analysis"),
        region.label()
    );

    let max_revenue = months.iter().map(|m| m.revenue).fold(0.0, f64::max);
    let max_orders = months.iter().map(|m| m.orders).max().unwrap_or(0) as f64;
    let half = (options.bar_width / 2).max(1);

    let _ = writeln!(
        out,
        "  {:<4} {:<width$} {:>9}  {:<width$} {:>6}",
        "",
        "Revenue ($)",
        "",
        "Orders",
        "",
        width = half
    );
    for point in months {
        let _ = writeln!(
            out,
            "  {:<4} {} {:>9}  {} {:>6}",
            point.month,
            bar(point.revenue, max_revenue, half),
            options.money(point.revenue),
            bar(point.orders as f64, max_orders, half),
            format_count(point.orders as u64)
        );
    }
    let _ = writeln!(out);
}

fn render_segments(out: &mut String, segments: &[Segment], options: &RenderOptions) {
    let _ = writeln!(out, "{}", options.heading("Customer Segmentation (RFM Analysis)"));
    for segment in segments {
        let _ = writeln!(
            out,
            "  {:<10} {} {:>3}%  {}",
            segment.name,
            bar(segment.value as f64, 100.0, options.bar_width),
            segment.value,
            segment.description
        );
    }
    let _ = writeln!(out);
}

fn render_clv(out: &mut String, options: &RenderOptions) {
    let _ = writeln!(out, "{}", options.heading("Customer Lifetime Value Distribution"));
    for tier in clv_tiers() {
        let _ = writeln!(
            out,
            "  {:<22} {:>8}  {}",
            tier.label,
            format!("{}{}", options.currency, format_count(tier.value as u64)),
            bar(tier.bar_percent as f64, 100.0, options.bar_width)
        );
        let _ = writeln!(
            out,
            "  {:<22} {} customers • Avg {:.1} orders/year",
            "",
            format_count(tier.customers as u64),
            tier.orders_per_year
        );
    }
    let _ = writeln!(out);
}

fn render_churn(out: &mut String, churn: &[ChurnBucket], options: &RenderOptions) {
    let _ = writeln!(out, "{}", options.heading("Customer Churn Risk Analysis"));
    let max = churn.iter().map(|b| b.customers).max().unwrap_or(0) as f64;
    for bucket in churn {
        let _ = writeln!(
            out,
            "  {:<12} {} {:>6} {:>4}%",
            bucket.segment,
            bar(bucket.customers as f64, max, options.bar_width),
            format_count(bucket.customers as u64),
            bucket.percentage
        );
    }
    let _ = writeln!(out);

    for bucket in churn {
        let _ = writeln!(
            out,
            "  {} {}%: {} {}",
            bucket.segment,
            bucket.percentage,
            format_count(bucket.customers as u64),
            churn_blurb(bucket.risk)
        );
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", options.heading("Churn Indicators (Feature Importance)"));
    for indicator in churn_indicators() {
        let _ = writeln!(
            out,
            "  {:<26} {} {:>3}%",
            indicator.feature,
            bar(indicator.importance as f64, 100.0, options.bar_width),
            indicator.importance
        );
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", options.heading("Recommended Retention Tactics"));
    for playbook in retention_tactics() {
        let _ = writeln!(
            out,
            "  {} Customers ({})",
            playbook.risk.label(),
            format_count(playbook.customers as u64)
        );
        for tactic in &playbook.tactics {
            let _ = writeln!(out, "    • {}", tactic);
        }
    }
    let _ = writeln!(out, "  Estimated Impact: {}", RETENTION_IMPACT);
    let _ = writeln!(out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::generate_seeded;

    fn render_tab(tab: Tab) -> String {
        let mut view = ViewController::new(generate_seeded(5));
        view.set_tab(tab);
        render(&view, &RenderOptions::plain())
    }

    #[test]
    fn test_render_marks_active_tab() {
        let out = render_tab(Tab::SalesAnalysis);
        assert!(out.contains("[ Sales Analysis ]"));
        assert!(!out.contains("[ Overview ]"));
        assert!(out.starts_with(TITLE));
        assert!(out.trim_end().ends_with(FOOTER));
    }

    #[test]
    fn test_render_overview_panels() {
        let out = render_tab(Tab::Overview);
        for heading in [
            "Monthly Revenue Trend",
            "Top Product Categories",
            "Revenue by Region",
            "Top Selling Products",
        ] {
            assert!(out.contains(heading), "missing {heading}");
        }
        assert!(out.contains("#1 Wireless Earbuds Pro"));
        assert!(out.contains("$45.2K"));
        assert!(out.contains("Total Revenue"));
    }

    #[test]
    fn test_render_with_oversized_bar_width() {
        let options = RenderOptions {
            bar_width: usize::MAX,
            ..RenderOptions::plain()
        };
        let full = "█".repeat(crate::dashboard::MAX_BAR_WIDTH);

        for tab in Tab::all() {
            let mut view = ViewController::new(generate_seeded(5));
            view.set_tab(*tab);
            let out = render(&view, &options);
            assert!(!out.contains(&format!("{full}█")));
            if *tab == Tab::Overview {
                assert!(out.contains(&full));
            }
        }
    }

    #[test]
    fn test_render_sales_echoes_region() {
        let mut view = ViewController::new(generate_seeded(5));
        view.set_tab(Tab::SalesAnalysis);
        view.set_region(RegionFilter::North);
        let out = render(&view, &RenderOptions::plain());

        assert!(out.contains("(region: North)"));
        assert!(out.contains("Key Findings"));
    }

    #[test]
    fn test_render_customer_and_churn_panels() {
        let customers = render_tab(Tab::CustomerInsights);
        assert!(customers.contains("Champions"));
        assert!(customers.contains("$2,340"));

        let churn = render_tab(Tab::ChurnPrediction);
        assert!(churn.contains("Low Risk"));
        assert!(churn.contains("3,420"));
        assert!(churn.contains("Days Since Last Purchase"));
        assert!(churn.contains(RETENTION_IMPACT));
    }

    #[test]
    fn test_plain_output_has_no_ansi() {
        let out = render_tab(Tab::ChurnPrediction);
        assert!(!out.contains('\u{1b}'));

        let mut view = ViewController::new(generate_seeded(5));
        view.set_tab(Tab::Overview);
        let colored = render(&view, &RenderOptions::default());
        assert!(colored.contains('\u{1b}'));
    }
}
