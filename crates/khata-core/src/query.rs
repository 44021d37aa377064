//! # Query Building Blocks
//!
//! Predicates and sorting for the filter → sort → limit pipeline.
//!
//! ## How a Requirement Becomes a Result
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Query Pipeline                                    │
//! │                                                                         │
//! │  UserRequirement                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  build_predicates() ──► [MinInventory(200), MinRevenue(100000), ...]   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Filter: keep records where EVERY predicate matches (AND)              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  sort_records(): stable sort on the chosen key                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  truncate(limit): first N records                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Predicates are a tagged-variant list rather than boxed closures: each
//! variant carries its captured bound, evaluation is uniform, and a test
//! can assert on exactly which filters a requirement produced.

use std::cmp::Ordering;

use crate::requirement::{SortKey, UserRequirement};
use crate::types::ProductRecord;

// =============================================================================
// Predicate
// =============================================================================

/// A single boolean test derived from one active requirement field.
///
/// All bounds are inclusive. Each predicate is pure and stateless aside
/// from its captured bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// `inventory >= bound`
    MinInventory(i64),
    /// `inventory <= bound`
    MaxInventory(i64),
    /// `units_sold >= bound`
    MinUnitsSold(i64),
    /// `units_sold <= bound`
    MaxUnitsSold(i64),
    /// `revenue >= bound`
    MinRevenue(i64),
    /// `revenue <= bound`
    MaxRevenue(i64),
    /// Lower-cased, trimmed needle occurs anywhere in the lower-cased name.
    ProductContains(String),
}

impl Predicate {
    /// Tests a single record against this predicate.
    pub fn matches(&self, record: &ProductRecord) -> bool {
        match self {
            Predicate::MinInventory(min) => record.inventory >= *min,
            Predicate::MaxInventory(max) => record.inventory <= *max,
            Predicate::MinUnitsSold(min) => record.units_sold >= *min,
            Predicate::MaxUnitsSold(max) => record.units_sold <= *max,
            Predicate::MinRevenue(min) => record.revenue >= *min,
            Predicate::MaxRevenue(max) => record.revenue <= *max,
            Predicate::ProductContains(needle) => record.product.to_lowercase().contains(needle),
        }
    }
}

// =============================================================================
// Predicate Builder
// =============================================================================

/// Derives the ordered predicate list from a requirement.
///
/// One predicate per active field, in a fixed order: inventory-min,
/// inventory-max, units-min, units-max, revenue-min, revenue-max,
/// substring. The substring needle is lower-cased and trimmed once here;
/// an absent or empty `product_contains` produces no predicate.
///
/// An all-absent requirement produces an empty list, and an empty list
/// keeps every record (vacuous AND).
pub fn build_predicates(req: &UserRequirement) -> Vec<Predicate> {
    let mut preds = Vec::new();

    if let Some(min) = req.min_inventory {
        preds.push(Predicate::MinInventory(min));
    }
    if let Some(max) = req.max_inventory {
        preds.push(Predicate::MaxInventory(max));
    }

    if let Some(min) = req.min_units_sold {
        preds.push(Predicate::MinUnitsSold(min));
    }
    if let Some(max) = req.max_units_sold {
        preds.push(Predicate::MaxUnitsSold(max));
    }

    if let Some(min) = req.min_revenue {
        preds.push(Predicate::MinRevenue(min));
    }
    if let Some(max) = req.max_revenue {
        preds.push(Predicate::MaxRevenue(max));
    }

    if let Some(text) = req.product_contains.as_deref() {
        if !text.is_empty() {
            preds.push(Predicate::ProductContains(text.to_lowercase().trim().to_string()));
        }
    }

    preds
}

// =============================================================================
// Stable Sort
// =============================================================================

/// Stably sorts records in place on the chosen key.
///
/// Descending order flips the comparator rather than reversing a sorted
/// vector: reversal would invert the relative order of equal-key records,
/// and ties must keep their pre-sort (dataset) order in both directions.
/// The `product` key compares lower-cased names.
pub fn sort_records(records: &mut [ProductRecord], key: SortKey, descending: bool) {
    records.sort_by(|a, b| {
        let ordering = compare_on(a, b, key);
        if descending {
            ordering.reverse()
        } else {
            ordering
        }
    });
}

/// Compares two records on a single key, ascending.
fn compare_on(a: &ProductRecord, b: &ProductRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Inventory => a.inventory.cmp(&b.inventory),
        SortKey::UnitsSold => a.units_sold.cmp(&b.units_sold),
        SortKey::Revenue => a.revenue.cmp(&b.revenue),
        SortKey::Product => a.product.to_lowercase().cmp(&b.product.to_lowercase()),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, inventory: i64, units_sold: i64, revenue: i64) -> ProductRecord {
        ProductRecord::new(name, inventory, units_sold, revenue)
    }

    #[test]
    fn test_empty_requirement_builds_no_predicates() {
        assert!(build_predicates(&UserRequirement::default()).is_empty());
    }

    #[test]
    fn test_predicates_built_in_fixed_order() {
        let req = UserRequirement {
            min_inventory: Some(1),
            max_inventory: Some(2),
            min_units_sold: Some(3),
            max_units_sold: Some(4),
            min_revenue: Some(5),
            max_revenue: Some(6),
            product_contains: Some("Steel".to_string()),
            ..Default::default()
        };
        assert_eq!(
            build_predicates(&req),
            vec![
                Predicate::MinInventory(1),
                Predicate::MaxInventory(2),
                Predicate::MinUnitsSold(3),
                Predicate::MaxUnitsSold(4),
                Predicate::MinRevenue(5),
                Predicate::MaxRevenue(6),
                Predicate::ProductContains("steel".to_string()),
            ]
        );
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let r = record("Cement", 320, 180, 90_000);
        assert!(Predicate::MinInventory(320).matches(&r));
        assert!(Predicate::MaxInventory(320).matches(&r));
        assert!(Predicate::MinRevenue(90_000).matches(&r));
        assert!(Predicate::MaxRevenue(90_000).matches(&r));
        assert!(!Predicate::MinInventory(321).matches(&r));
        assert!(!Predicate::MaxInventory(319).matches(&r));
    }

    #[test]
    fn test_substring_match_is_case_insensitive() {
        let r = record("Cement (UltraTech)", 320, 180, 90_000);
        assert!(Predicate::ProductContains("ultratech".to_string()).matches(&r));
        assert!(!Predicate::ProductContains("granite".to_string()).matches(&r));
    }

    #[test]
    fn test_substring_needle_is_lowercased_and_trimmed() {
        let req = UserRequirement {
            product_contains: Some("  STEEL ".to_string()),
            ..Default::default()
        };
        assert_eq!(
            build_predicates(&req),
            vec![Predicate::ProductContains("steel".to_string())]
        );
    }

    #[test]
    fn test_empty_substring_builds_no_predicate() {
        let req = UserRequirement {
            product_contains: Some(String::new()),
            ..Default::default()
        };
        assert!(build_predicates(&req).is_empty());
    }

    #[test]
    fn test_whitespace_needle_matches_everything() {
        // "  " trims to "", and every name contains the empty string.
        let req = UserRequirement {
            product_contains: Some("  ".to_string()),
            ..Default::default()
        };
        let preds = build_predicates(&req);
        assert_eq!(preds, vec![Predicate::ProductContains(String::new())]);
        assert!(preds[0].matches(&record("TMT Steel", 210, 140, 140_000)));
    }

    #[test]
    fn test_sort_descending_by_revenue() {
        let mut records = vec![
            record("Cement", 320, 180, 90_000),
            record("Steel", 210, 140, 140_000),
            record("Sand", 710, 460, 250_000),
        ];
        sort_records(&mut records, SortKey::Revenue, true);
        let names: Vec<&str> = records.iter().map(|r| r.product.as_str()).collect();
        assert_eq!(names, vec!["Sand", "Steel", "Cement"]);
    }

    #[test]
    fn test_sort_ascending_by_product_is_case_insensitive() {
        let mut records = vec![
            record("bricks", 10, 1, 100),
            record("Aggregate", 20, 2, 200),
            record("CEMENT", 30, 3, 300),
        ];
        sort_records(&mut records, SortKey::Product, false);
        let names: Vec<&str> = records.iter().map(|r| r.product.as_str()).collect();
        assert_eq!(names, vec!["Aggregate", "bricks", "CEMENT"]);
    }

    #[test]
    fn test_sort_keeps_dataset_order_on_ties() {
        // Same revenue everywhere; both directions must keep input order.
        let records = vec![
            record("first", 1, 1, 500),
            record("second", 2, 2, 500),
            record("third", 3, 3, 500),
        ];

        let mut desc = records.clone();
        sort_records(&mut desc, SortKey::Revenue, true);
        assert_eq!(desc, records);

        let mut asc = records.clone();
        sort_records(&mut asc, SortKey::Revenue, false);
        assert_eq!(asc, records);
    }
}
