//! # Sample Dataset
//!
//! Fixed literal dataset and summary for the demo dashboard.
//!
//! Replaceable: the engine takes whatever dataset and summary it is given
//! ([`Dashboard::new`](crate::engine::Dashboard::new)); these literals are
//! just the out-of-the-box construction-materials shop.

use crate::types::{DashboardSummary, ProductRecord};

/// The demo dashboard summary. A separately maintained snapshot, NOT
/// derived from [`sample_products`].
pub fn sample_summary() -> DashboardSummary {
    DashboardSummary {
        total_revenue: 480_000,
        total_products: 18,
        stock_available: 1240,
        monthly_growth_percent: 12.4,
    }
}

/// The demo product dataset, in its canonical (pre-sort) order.
pub fn sample_products() -> Vec<ProductRecord> {
    vec![
        ProductRecord::new("Cement (UltraTech)", 320, 180, 90_000),
        ProductRecord::new("TMT Steel", 210, 140, 140_000),
        ProductRecord::new("River Sand", 710, 460, 250_000),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_dataset_shape() {
        let products = sample_products();
        assert_eq!(products.len(), 3);
        assert_eq!(products[0].product, "Cement (UltraTech)");
        assert_eq!(products[2].revenue, 250_000);
    }
}
