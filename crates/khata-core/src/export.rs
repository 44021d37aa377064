//! # Export Formatters
//!
//! Render a record collection as JSON or CSV text.
//!
//! Both formatters return in-memory strings and perform no filesystem or
//! network I/O. Column/key order follows the field declaration order on
//! [`ProductRecord`]: `product, inventory, units_sold, revenue`.

use crate::types::ProductRecord;

/// CSV header row. Matches the JSON key order exactly.
const CSV_HEADER: &str = "product,inventory,units_sold,revenue";

// =============================================================================
// JSON Export
// =============================================================================

/// Renders records as a pretty-printed JSON array.
///
/// ## Output Contract
/// - One object per record, keys in declaration order
/// - 2-space indentation
/// - Non-ASCII characters pass through unescaped
/// - Empty input renders `[]`
///
/// ## Example
/// ```rust
/// use khata_core::export::export_json;
///
/// assert_eq!(export_json(&[]).unwrap(), "[]");
/// ```
pub fn export_json(records: &[ProductRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}

// =============================================================================
// CSV Export
// =============================================================================

/// Renders records as CSV text.
///
/// ## Output Contract
/// - First line is exactly `product,inventory,units_sold,revenue`
/// - One line per record, field values comma-joined, numbers as plain
///   decimal integers
/// - Lines joined with `\n`, no trailing newline
/// - Empty input yields just the header line
///
/// ## Known Limitation
/// Field values are NOT quoted or escaped: a product name containing a
/// comma will misalign columns. Callers requiring RFC-4180 robustness must
/// pre-sanitize names. Kept as documented behavior, not silently fixed.
pub fn export_csv(records: &[ProductRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(CSV_HEADER.to_string());

    for r in records {
        lines.push(format!(
            "{},{},{},{}",
            r.product, r.inventory, r.units_sold, r.revenue
        ));
    }

    lines.join("\n")
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ProductRecord> {
        vec![
            ProductRecord::new("River Sand", 710, 460, 250_000),
            ProductRecord::new("TMT Steel", 210, 140, 140_000),
        ]
    }

    #[test]
    fn test_json_round_trip_preserves_records_and_order() {
        let records = sample();
        let json = export_json(&records).unwrap();
        let parsed: Vec<ProductRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn test_json_empty_input_is_empty_array() {
        assert_eq!(export_json(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_json_is_pretty_printed_with_ordered_keys() {
        let json = export_json(&sample()).unwrap();
        let expected = "\
[
  {
    \"product\": \"River Sand\",
    \"inventory\": 710,
    \"units_sold\": 460,
    \"revenue\": 250000
  },
  {
    \"product\": \"TMT Steel\",
    \"inventory\": 210,
    \"units_sold\": 140,
    \"revenue\": 140000
  }
]";
        assert_eq!(json, expected);
    }

    #[test]
    fn test_json_passes_non_ascii_through() {
        let records = vec![ProductRecord::new("सीमेंट", 10, 5, 1_000)];
        let json = export_json(&records).unwrap();
        assert!(json.contains("सीमेंट"));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_csv_output() {
        let csv = export_csv(&sample());
        assert_eq!(
            csv,
            "product,inventory,units_sold,revenue\n\
             River Sand,710,460,250000\n\
             TMT Steel,210,140,140000"
        );
    }

    #[test]
    fn test_csv_empty_input_is_header_only() {
        assert_eq!(export_csv(&[]), "product,inventory,units_sold,revenue");
    }

    #[test]
    fn test_csv_does_not_escape_embedded_commas() {
        // Documented limitation: the comma lands in the output verbatim.
        let records = vec![ProductRecord::new("Cement, Grey", 1, 2, 3)];
        assert_eq!(
            export_csv(&records),
            "product,inventory,units_sold,revenue\nCement, Grey,1,2,3"
        );
    }
}
