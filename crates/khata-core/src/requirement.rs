//! # User Requirement
//!
//! The caller-supplied filter/sort/limit specification and its validation.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Requirement Lifecycle                              │
//! │                                                                         │
//! │  Caller builds UserRequirement (all fields optional)                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate() ← THIS MODULE                                               │
//! │       │                                                                 │
//! │       ├── any bound < 0?        → NegativeBound                        │
//! │       ├── any pair min > max?   → InvertedRange                        │
//! │       ├── sort_by unsupported?  → UnsupportedSortKey                   │
//! │       │                                                                 │
//! │       └── OK → query pipeline runs (query module)                      │
//! │                                                                         │
//! │  Fail-fast: the FIRST violated rule is returned, not all of them.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Validity is checked on demand, not enforced at construction: a
//! requirement is a plain mutable request object, built fresh per query,
//! used once, then discarded.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{QueryResult, ValidationError};

// =============================================================================
// Sort Key
// =============================================================================

/// The fixed set of fields a result can be sorted by.
///
/// Parsed from the requirement's textual `sort_by` so that an unsupported
/// key surfaces as a [`ValidationError::UnsupportedSortKey`] instead of a
/// silently ignored field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Sort by `inventory`.
    Inventory,
    /// Sort by `units_sold`.
    UnitsSold,
    /// Sort by `revenue`.
    Revenue,
    /// Sort by `product`, compared case-insensitively.
    Product,
}

impl FromStr for SortKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inventory" => Ok(SortKey::Inventory),
            "units_sold" => Ok(SortKey::UnitsSold),
            "revenue" => Ok(SortKey::Revenue),
            "product" => Ok(SortKey::Product),
            other => Err(ValidationError::UnsupportedSortKey {
                value: other.to_string(),
            }),
        }
    }
}

// =============================================================================
// User Requirement
// =============================================================================

/// A filter/sort/limit request against the product dataset.
///
/// All bounds are inclusive. Absent fields are skipped, never errors:
/// `UserRequirement::default()` matches every record.
///
/// ## Example
/// ```rust
/// use khata_core::requirement::UserRequirement;
///
/// let req = UserRequirement {
///     min_revenue: Some(100_000),
///     min_inventory: Some(200),
///     sort_by: Some("revenue".to_string()),
///     ..Default::default()
/// };
/// assert!(req.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserRequirement {
    /// Keep records with `inventory >= min_inventory`.
    pub min_inventory: Option<i64>,
    /// Keep records with `inventory <= max_inventory`.
    pub max_inventory: Option<i64>,
    /// Keep records with `units_sold >= min_units_sold`.
    pub min_units_sold: Option<i64>,
    /// Keep records with `units_sold <= max_units_sold`.
    pub max_units_sold: Option<i64>,
    /// Keep records with `revenue >= min_revenue`.
    pub min_revenue: Option<i64>,
    /// Keep records with `revenue <= max_revenue`.
    pub max_revenue: Option<i64>,
    /// Case-insensitive substring match against the product name.
    pub product_contains: Option<String>,
    /// Sort field: one of `inventory | units_sold | revenue | product`.
    pub sort_by: Option<String>,
    /// Sort direction. Defaults to descending.
    pub sort_desc: bool,
    /// Keep only the first N records after sorting. 0 yields an empty result.
    pub limit: Option<usize>,
}

impl Default for UserRequirement {
    fn default() -> Self {
        UserRequirement {
            min_inventory: None,
            max_inventory: None,
            min_units_sold: None,
            max_units_sold: None,
            min_revenue: None,
            max_revenue: None,
            product_contains: None,
            sort_by: None,
            sort_desc: true,
            limit: None,
        }
    }
}

impl UserRequirement {
    /// Checks the requirement for internal consistency.
    ///
    /// ## Rules
    /// - Each of the six bounds, if present, must be >= 0
    /// - For each (min, max) pair, if both present, min <= max
    /// - `sort_by`, if present, must name a supported [`SortKey`]
    ///
    /// Fails fast on the first violated rule. No side effects.
    pub fn validate(&self) -> QueryResult<()> {
        check_non_negative("min_inventory", self.min_inventory)?;
        check_non_negative("max_inventory", self.max_inventory)?;
        check_non_negative("min_units_sold", self.min_units_sold)?;
        check_non_negative("max_units_sold", self.max_units_sold)?;
        check_non_negative("min_revenue", self.min_revenue)?;
        check_non_negative("max_revenue", self.max_revenue)?;

        check_range(
            "min_inventory",
            "max_inventory",
            self.min_inventory,
            self.max_inventory,
        )?;
        check_range(
            "min_units_sold",
            "max_units_sold",
            self.min_units_sold,
            self.max_units_sold,
        )?;
        check_range("min_revenue", "max_revenue", self.min_revenue, self.max_revenue)?;

        if let Some(key) = self.sort_by.as_deref() {
            key.parse::<SortKey>()?;
        }

        Ok(())
    }

    /// Returns the parsed sort key, if one is set.
    ///
    /// Callers are expected to [`validate`](Self::validate) first; an
    /// unsupported key still surfaces as an error here rather than a panic.
    pub fn sort_key(&self) -> QueryResult<Option<SortKey>> {
        self.sort_by.as_deref().map(str::parse).transpose()
    }
}

/// Rejects a present, negative bound.
fn check_non_negative(field: &'static str, value: Option<i64>) -> QueryResult<()> {
    match value {
        Some(v) if v < 0 => Err(ValidationError::NegativeBound { field, value: v }),
        _ => Ok(()),
    }
}

/// Rejects a (min, max) pair with min > max when both are present.
fn check_range(
    min_field: &'static str,
    max_field: &'static str,
    min: Option<i64>,
    max: Option<i64>,
) -> QueryResult<()> {
    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            return Err(ValidationError::InvertedRange {
                min_field,
                max_field,
                min,
                max,
            });
        }
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
