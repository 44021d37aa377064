//! # Error Types
//!
//! Validation error types for khata-core.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, offending value)
//! 3. Errors are enum variants, never String
//!
//! Validation is the only failure source in this crate: every other
//! operation is total over well-typed input. The validator fails fast on
//! the first violated rule and never touches the dataset.

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// A malformed [`UserRequirement`](crate::requirement::UserRequirement).
///
/// Raised by [`UserRequirement::validate`](crate::requirement::UserRequirement::validate)
/// before any filtering or sorting runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A numeric bound was negative.
    #[error("{field} must be non-negative, got {value}")]
    NegativeBound { field: &'static str, value: i64 },

    /// A (min, max) pair had min > max.
    #[error("{min_field} cannot be greater than {max_field} (got {min} > {max})")]
    InvertedRange {
        min_field: &'static str,
        max_field: &'static str,
        min: i64,
        max: i64,
    },

    /// `sort_by` named a key outside the supported set.
    #[error("unsupported sort_by: {value}")]
    UnsupportedSortKey { value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for query operations.
pub type QueryResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
