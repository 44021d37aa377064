//! # Domain Types
//!
//! Core domain types for the Khata Dashboard.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────────┐                        │
//! │  │  ProductRecord  │   │   DashboardSummary   │                        │
//! │  │  ─────────────  │   │  ──────────────────  │                        │
//! │  │  product        │   │  total_revenue       │                        │
//! │  │  inventory      │   │  total_products      │                        │
//! │  │  units_sold     │   │  stock_available     │                        │
//! │  │  revenue (INR)  │   │  monthly_growth_pct  │                        │
//! │  └─────────────────┘   └──────────────────────┘                        │
//! │                                                                         │
//! │  Both are immutable value types with structural equality.              │
//! │  The summary is a separately maintained snapshot - it is NOT           │
//! │  derived from the product list.                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Field Order Contract
//! The field declaration order on [`ProductRecord`] is load-bearing: JSON
//! export emits keys and CSV export emits columns in exactly this order
//! (`product, inventory, units_sold, revenue`).

use serde::{Deserialize, Serialize};

// =============================================================================
// Product Record
// =============================================================================

/// A single product row in the dashboard dataset.
///
/// ## Design Decisions
/// - **Integer revenue**: Monetary values are whole INR (i64), never floats
/// - **No identity**: Two records with equal fields are the same record;
///   the dataset may contain duplicate names
/// - **Never mutated**: Created once from literals, cloned on read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Display name. Non-empty by convention (not enforced).
    pub product: String,

    /// Units currently in stock.
    pub inventory: i64,

    /// Units sold over the reporting period.
    pub units_sold: i64,

    /// Revenue over the reporting period, in whole INR.
    pub revenue: i64,
}

impl ProductRecord {
    /// Creates a record from its four fields.
    pub fn new(product: impl Into<String>, inventory: i64, units_sold: i64, revenue: i64) -> Self {
        ProductRecord {
            product: product.into(),
            inventory,
            units_sold,
            revenue,
        }
    }
}

// =============================================================================
// Dashboard Summary
// =============================================================================

/// Top-level dashboard snapshot.
///
/// A separately maintained literal, independent of the product list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Total revenue across the whole business, in whole INR.
    pub total_revenue: i64,

    /// Number of distinct products carried.
    pub total_products: i64,

    /// Total units in stock across all products.
    pub stock_available: i64,

    /// Month-over-month growth, in percent.
    pub monthly_growth_percent: f64,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_structural_equality() {
        let a = ProductRecord::new("TMT Steel", 210, 140, 140_000);
        let b = ProductRecord::new("TMT Steel", 210, 140, 140_000);
        assert_eq!(a, b);
    }

    #[test]
    fn test_record_json_key_order() {
        let record = ProductRecord::new("River Sand", 710, 460, 250_000);
        let json = serde_json::to_string(&record).unwrap();
        let product_pos = json.find("\"product\"").unwrap();
        let inventory_pos = json.find("\"inventory\"").unwrap();
        let units_pos = json.find("\"units_sold\"").unwrap();
        let revenue_pos = json.find("\"revenue\"").unwrap();
        assert!(product_pos < inventory_pos);
        assert!(inventory_pos < units_pos);
        assert!(units_pos < revenue_pos);
    }
}
