//! # Dashboard Engine
//!
//! The audited surface over an injected dataset and summary.
//!
//! ## Query Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Dashboard::query                                     │
//! │                                                                         │
//! │  1. req.validate()          → ValidationError propagates, nothing runs │
//! │  2. audit: query_requested  → full requirement payload                 │
//! │  3. Filter                  → AND over build_predicates(req)           │
//! │  4. Sort (if sort_by)       → stable, ties keep dataset order          │
//! │  5. Limit (if limit)        → truncate to first N                      │
//! │  6. audit: query_result_count                                          │
//! │                                                                         │
//! │  The source dataset is never touched: the pipeline runs on clones.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The dataset, summary, and audit sink are constructor inputs, never
//! globals: tests substitute their own dataset and a recording or no-op
//! sink.

use crate::audit::{AuditEvent, AuditSink, TracingSink};
use crate::error::QueryResult;
use crate::metrics::Metrics;
use crate::query::{build_predicates, sort_records};
use crate::requirement::UserRequirement;
use crate::sample::{sample_products, sample_summary};
use crate::types::{DashboardSummary, ProductRecord};

// =============================================================================
// Dashboard
// =============================================================================

/// Query and reporting engine over an immutable product dataset.
///
/// ## Usage
/// ```rust
/// use khata_core::engine::Dashboard;
/// use khata_core::requirement::UserRequirement;
///
/// let dashboard = Dashboard::with_sample_data();
///
/// let req = UserRequirement {
///     min_revenue: Some(100_000),
///     min_inventory: Some(200),
///     sort_by: Some("revenue".to_string()),
///     ..Default::default()
/// };
///
/// let result = dashboard.query(&req).unwrap();
/// assert_eq!(result[0].product, "River Sand");
/// ```
#[derive(Debug)]
pub struct Dashboard<S: AuditSink> {
    /// The dataset, read-only after construction.
    products: Vec<ProductRecord>,
    /// The summary snapshot, read-only after construction.
    summary: DashboardSummary,
    /// Receiver for audit events.
    sink: S,
}

impl Dashboard<TracingSink> {
    /// Builds a dashboard over the built-in sample dataset, auditing to
    /// `tracing`.
    pub fn with_sample_data() -> Self {
        Dashboard::new(sample_products(), sample_summary(), TracingSink)
    }
}

impl<S: AuditSink> Dashboard<S> {
    /// Builds a dashboard over an injected dataset, summary, and sink.
    pub fn new(products: Vec<ProductRecord>, summary: DashboardSummary, sink: S) -> Self {
        Dashboard {
            products,
            summary,
            sink,
        }
    }

    /// Runs the filter → sort → limit pipeline over the dataset.
    ///
    /// Validates first; a malformed requirement propagates as a
    /// [`ValidationError`](crate::error::ValidationError) and the pipeline
    /// never runs. Emits `query_requested` before filtering and
    /// `query_result_count` after the limit step.
    pub fn query(&self, req: &UserRequirement) -> QueryResult<Vec<ProductRecord>> {
        req.validate()?;

        self.sink.record(AuditEvent::QueryRequested {
            requirement: req.clone(),
        });

        // Filter: conjunction over all active predicates. Zero predicates
        // keeps everything.
        let predicates = build_predicates(req);
        let mut result: Vec<ProductRecord> = self
            .products
            .iter()
            .filter(|r| predicates.iter().all(|p| p.matches(r)))
            .cloned()
            .collect();

        // Sort: validated above, so the key parses.
        if let Some(key) = req.sort_key()? {
            sort_records(&mut result, key, req.sort_desc);
        }

        // Limit: 0 empties the result; oversize is a no-op.
        if let Some(limit) = req.limit {
            result.truncate(limit);
        }

        self.sink.record(AuditEvent::QueryResultCount {
            count: result.len(),
        });

        Ok(result)
    }

    /// Computes aggregate metrics over a record collection (typically a
    /// query result) and emits `metrics_computed`.
    pub fn metrics(&self, records: &[ProductRecord]) -> Metrics {
        let metrics = Metrics::compute(records);
        self.sink.record(AuditEvent::MetricsComputed {
            metrics: metrics.clone(),
        });
        metrics
    }

    /// Returns the summary snapshot and emits `summary_accessed`.
    pub fn summary(&self) -> DashboardSummary {
        let summary = self.summary.clone();
        self.sink.record(AuditEvent::SummaryAccessed {
            summary: summary.clone(),
        });
        summary
    }

    /// Returns a defensive copy of the dataset and emits
    /// `products_accessed`.
    ///
    /// Callers may freely mutate the returned vector; the shared source is
    /// unaffected.
    pub fn products(&self) -> Vec<ProductRecord> {
        self.sink.record(AuditEvent::ProductsAccessed {
            count: self.products.len(),
        });
        self.products.clone()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
