//! # Khata Dashboard Demo
//!
//! Console walkthrough of the query engine:
//!
//! 1. Read the dashboard summary
//! 2. Query: revenue >= 100000 AND inventory >= 200, highest revenue first
//! 3. Compute metrics over the filtered result
//! 4. Print JSON and CSV exports
//!
//! ## Usage
//! ```bash
//! cargo run -p khata-demo
//!
//! # With the full audit trail visible
//! RUST_LOG=khata=info cargo run -p khata-demo
//! ```

use khata_core::export::{export_csv, export_json};
use khata_core::{Dashboard, UserRequirement};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting Khata Dashboard demo");

    let dashboard = Dashboard::with_sample_data();

    // Access summary
    let summary = dashboard.summary();

    // Build requirement: revenue >= 100000 and inventory >= 200
    let req = UserRequirement {
        min_revenue: Some(100_000),
        min_inventory: Some(200),
        sort_by: Some("revenue".to_string()),
        sort_desc: true,
        ..Default::default()
    };

    // Apply query and compute metrics on the filtered set
    let result = dashboard.query(&req)?;
    let metrics = dashboard.metrics(&result);

    println!("Business Accounting Dashboard Summary:");
    println!("{}", serde_json::to_string_pretty(&summary)?);

    println!("\nFiltered Product Data:");
    println!("{}", export_json(&result)?);

    println!("\nFiltered Metrics:");
    println!("{}", serde_json::to_string_pretty(&metrics)?);

    println!("\nCSV Export:");
    println!("{}", export_csv(&result));

    Ok(())
}

/// Initializes the tracing subscriber for the audit trail.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show everything
/// - `RUST_LOG=khata=info` - Show the audit trail only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
