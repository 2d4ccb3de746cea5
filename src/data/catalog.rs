//! Fixed literal tables
//!
//! Segments, churn buckets and top products are not randomized.

use super::types::{ChurnBucket, ProductRecord, RiskLevel, Segment};

/// RFM customer segments
pub fn segments() -> Vec<Segment> {
    vec![
        Segment::new("Champions", 23, "#10b981", "High value, frequent buyers"),
        Segment::new("Loyal", 18, "#3b82f6", "Regular customers"),
        Segment::new("Potential", 28, "#f59e0b", "New with potential"),
        Segment::new("At Risk", 15, "#ef4444", "Declining activity"),
        Segment::new("Lost", 16, "#6b7280", "Haven't purchased recently"),
    ]
}

/// Churn risk distribution
pub fn churn_buckets() -> Vec<ChurnBucket> {
    vec![
        ChurnBucket::new(RiskLevel::Low, 3420, 68),
        ChurnBucket::new(RiskLevel::Medium, 980, 20),
        ChurnBucket::new(RiskLevel::High, 600, 12),
    ]
}

pub fn top_products() -> Vec<ProductRecord> {
    vec![
        ProductRecord::new("Wireless Earbuds Pro", 45230.0, 892),
        ProductRecord::new("Smart Watch Ultra", 38900.0, 523),
        ProductRecord::new("Laptop Stand Deluxe", 32450.0, 1234),
        ProductRecord::new("LED Desk Lamp", 28700.0, 1567),
        ProductRecord::new("Ergonomic Chair", 25600.0, 234),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_values() {
        let values: Vec<u8> = segments().iter().map(|s| s.value).collect();
        assert_eq!(values, vec![23, 18, 28, 15, 16]);
        assert_eq!(values.iter().map(|&v| v as u32).sum::<u32>(), 100);
    }

    #[test]
    fn test_churn_buckets() {
        let buckets = churn_buckets();
        assert_eq!(buckets.len(), 3);
        assert_eq!(buckets[0].segment, "Low Risk");
        assert_eq!(buckets.iter().map(|b| b.customers).sum::<u32>(), 5000);
        assert_eq!(buckets.iter().map(|b| b.percentage as u32).sum::<u32>(), 100);
    }

    #[test]
    fn test_top_products_are_ranked() {
        let products = top_products();
        assert_eq!(products.len(), 5);
        assert!(products.windows(2).all(|p| p[0].sales > p[1].sales));
    }
}
