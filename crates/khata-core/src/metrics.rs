//! # Metrics Aggregation
//!
//! Aggregate sums and the top earner over a record collection.
//!
//! The computation is a pure function of its input; the audit event for a
//! metrics run is emitted by the engine (`Dashboard::metrics`), keeping
//! this module free of any sink dependency.

use serde::{Deserialize, Serialize};

use crate::types::ProductRecord;

// =============================================================================
// Metrics
// =============================================================================

/// Aggregate metrics over a record collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    /// Sum of `revenue` across all records. 0 for empty input.
    pub total_revenue: i64,

    /// Sum of `units_sold` across all records.
    pub total_units_sold: i64,

    /// Sum of `inventory` across all records.
    pub total_inventory: i64,

    /// The record with the highest revenue. On ties, the first such record
    /// in input order. `None` for empty input.
    pub top_by_revenue: Option<ProductRecord>,
}

impl Metrics {
    /// Computes metrics over a record collection.
    ///
    /// ## Example
    /// ```rust
    /// use khata_core::metrics::Metrics;
    /// use khata_core::types::ProductRecord;
    ///
    /// let records = vec![
    ///     ProductRecord::new("River Sand", 710, 460, 250_000),
    ///     ProductRecord::new("TMT Steel", 210, 140, 140_000),
    /// ];
    /// let metrics = Metrics::compute(&records);
    /// assert_eq!(metrics.total_revenue, 390_000);
    /// assert_eq!(metrics.top_by_revenue.unwrap().product, "River Sand");
    /// ```
    pub fn compute(records: &[ProductRecord]) -> Self {
        let total_revenue = records.iter().map(|r| r.revenue).sum();
        let total_units_sold = records.iter().map(|r| r.units_sold).sum();
        let total_inventory = records.iter().map(|r| r.inventory).sum();

        // Strict-greater fold keeps the FIRST record on revenue ties.
        // (Iterator::max_by_key would keep the last.)
        let top_by_revenue = records
            .iter()
            .fold(None::<&ProductRecord>, |best, r| match best {
                Some(b) if r.revenue > b.revenue => Some(r),
                Some(b) => Some(b),
                None => Some(r),
            })
            .cloned();

        Metrics {
            total_revenue,
            total_units_sold,
            total_inventory,
            top_by_revenue,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_on_empty_input() {
        let metrics = Metrics::compute(&[]);
        assert_eq!(metrics.total_revenue, 0);
        assert_eq!(metrics.total_units_sold, 0);
        assert_eq!(metrics.total_inventory, 0);
        assert_eq!(metrics.top_by_revenue, None);
    }

    #[test]
    fn test_metrics_sums() {
        let records = vec![
            ProductRecord::new("River Sand", 710, 460, 250_000),
            ProductRecord::new("TMT Steel", 210, 140, 140_000),
        ];
        let metrics = Metrics::compute(&records);
        assert_eq!(metrics.total_revenue, 390_000);
        assert_eq!(metrics.total_units_sold, 600);
        assert_eq!(metrics.total_inventory, 920);
        assert_eq!(
            metrics.top_by_revenue,
            Some(ProductRecord::new("River Sand", 710, 460, 250_000))
        );
    }

    #[test]
    fn test_top_by_revenue_ties_keep_first() {
        let records = vec![
            ProductRecord::new("first", 1, 1, 140_000),
            ProductRecord::new("second", 2, 2, 140_000),
        ];
        let metrics = Metrics::compute(&records);
        assert_eq!(metrics.top_by_revenue.unwrap().product, "first");
    }
}
