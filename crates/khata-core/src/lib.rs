//! # khata-core: Pure Business Logic for the Khata Dashboard
//!
//! In-memory query and reporting over a small, static collection of
//! product records. All logic is pure functions plus one injected seam
//! (the audit sink); there is no I/O anywhere in this crate.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Khata Dashboard Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/demo (driver)                           │   │
//! │  │      tracing init ──► build Dashboard ──► print reports        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ khata-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │requirement│  │   query   │  │  metrics  │  │   │
//! │  │   │  Record   │  │ validate  │  │ predicates│  │ aggregate │  │   │
//! │  │   │  Summary  │  │  SortKey  │  │   sort    │  │  top-by   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                  │   │
//! │  │   │  export   │  │   audit   │  │  engine   │                  │   │
//! │  │   │ JSON/CSV  │  │ sink trait│  │ Dashboard │                  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types ([`ProductRecord`], [`DashboardSummary`])
//! - [`error`] - Validation error type
//! - [`requirement`] - The caller's filter/sort/limit request and its rules
//! - [`query`] - Predicate building and stable sorting
//! - [`metrics`] - Aggregate sums and the top earner
//! - [`export`] - JSON and CSV text formatting
//! - [`audit`] - Audit event and sink seam
//! - [`sample`] - The built-in demo dataset
//! - [`engine`] - [`Dashboard`], the audited query surface
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Same requirement + same dataset = same result
//! 2. **No I/O**: Exports return strings; audit goes through an injected trait
//! 3. **Integer Money**: Revenue is whole INR (i64), never floating point
//! 4. **Explicit Errors**: Validation failures are typed variants, never panics
//!
//! ## Example Usage
//!
//! ```rust
//! use khata_core::{Dashboard, UserRequirement};
//! use khata_core::export::export_csv;
//!
//! let dashboard = Dashboard::with_sample_data();
//!
//! // Revenue >= 100000 and inventory >= 200, highest revenue first
//! let req = UserRequirement {
//!     min_revenue: Some(100_000),
//!     min_inventory: Some(200),
//!     sort_by: Some("revenue".to_string()),
//!     ..Default::default()
//! };
//!
//! let result = dashboard.query(&req).unwrap();
//! let metrics = dashboard.metrics(&result);
//! assert_eq!(metrics.total_revenue, 390_000);
//!
//! let csv = export_csv(&result);
//! assert!(csv.starts_with("product,inventory,units_sold,revenue"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod audit;
pub mod engine;
pub mod error;
pub mod export;
pub mod metrics;
pub mod query;
pub mod requirement;
pub mod sample;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use khata_core::Dashboard` instead of
// `use khata_core::engine::Dashboard`

pub use audit::{AuditEvent, AuditSink, NoopSink, RecordingSink, TracingSink};
pub use engine::Dashboard;
pub use error::{QueryResult, ValidationError};
pub use metrics::Metrics;
pub use requirement::{SortKey, UserRequirement};
pub use types::{DashboardSummary, ProductRecord};
