//! # Audit Trail
//!
//! Structured audit events and the sink they are delivered to.
//!
//! ## Why a Trait?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Audit Flow                                        │
//! │                                                                         │
//! │  Dashboard::query/metrics/summary/products                              │
//! │       │                                                                 │
//! │       ▼  (synchronous call at fixed points)                             │
//! │  AuditSink::record(AuditEvent)                                          │
//! │       │                                                                 │
//! │       ├── TracingSink    → tracing::info! (production)                 │
//! │       ├── NoopSink       → dropped (quiet tests)                       │
//! │       └── RecordingSink  → in-memory buffer (asserting tests)          │
//! │                                                                         │
//! │  Business logic never knows where events go. Delivery guarantees       │
//! │  are the sink's problem, not the engine's.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Mutex;

use serde::Serialize;
use tracing::info;

use crate::metrics::Metrics;
use crate::requirement::UserRequirement;
use crate::types::DashboardSummary;

// =============================================================================
// Audit Event
// =============================================================================

/// A structured record of one engine operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AuditEvent {
    /// A query is about to run; carries the full requirement.
    QueryRequested {
        /// The validated requirement, as submitted.
        requirement: UserRequirement,
    },

    /// A query finished; carries the post-pipeline record count.
    QueryResultCount {
        /// Records surviving filter, sort, and limit.
        count: usize,
    },

    /// Metrics were computed; carries all four aggregates.
    MetricsComputed {
        /// The computed aggregates.
        metrics: Metrics,
    },

    /// The dashboard summary was read.
    SummaryAccessed {
        /// The four summary fields.
        summary: DashboardSummary,
    },

    /// The product dataset was copied out.
    ProductsAccessed {
        /// Number of records returned.
        count: usize,
    },
}

// =============================================================================
// Audit Sink
// =============================================================================

/// Receiver for [`AuditEvent`]s.
///
/// The engine calls `record` synchronously at fixed points; the sink's own
/// reliability and delivery guarantees are out of scope for the core.
pub trait AuditSink {
    /// Delivers one event to the sink.
    fn record(&self, event: AuditEvent);
}

impl<T: AuditSink + ?Sized> AuditSink for &T {
    fn record(&self, event: AuditEvent) {
        (**self).record(event);
    }
}

// =============================================================================
// Tracing Sink (production)
// =============================================================================

/// Production sink: emits each event as a `tracing` info event with the
/// payload rendered as JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl AuditSink for TracingSink {
    fn record(&self, event: AuditEvent) {
        // Derive-only payloads cannot fail to serialize; fall back to Debug
        // rather than panic in a logging path.
        let payload = serde_json::to_string(&event)
            .unwrap_or_else(|_| format!("{event:?}"));

        match &event {
            AuditEvent::QueryRequested { .. } => info!(target: "khata::audit", %payload, "query requested"),
            AuditEvent::QueryResultCount { count } => {
                info!(target: "khata::audit", count, "query result count");
            }
            AuditEvent::MetricsComputed { .. } => info!(target: "khata::audit", %payload, "metrics computed"),
            AuditEvent::SummaryAccessed { .. } => info!(target: "khata::audit", %payload, "summary accessed"),
            AuditEvent::ProductsAccessed { count } => {
                info!(target: "khata::audit", count, "products accessed");
            }
        }
    }
}

// =============================================================================
// Noop Sink
// =============================================================================

/// Discards every event. For callers that want a silent engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl AuditSink for NoopSink {
    fn record(&self, _event: AuditEvent) {}
}

// =============================================================================
// Recording Sink
// =============================================================================

/// Buffers every event in memory so tests can assert on the exact
/// sequence the engine emitted.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<AuditEvent>>,
}

impl RecordingSink {
    /// Creates an empty recording sink.
    pub fn new() -> Self {
        RecordingSink::default()
    }

    /// Returns a snapshot of all events recorded so far, in order.
    pub fn events(&self) -> Vec<AuditEvent> {
        self.events.lock().expect("audit buffer poisoned").clone()
    }
}

impl AuditSink for RecordingSink {
    fn record(&self, event: AuditEvent) {
        self.events.lock().expect("audit buffer poisoned").push(event);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_keeps_order() {
        let sink = RecordingSink::new();
        sink.record(AuditEvent::ProductsAccessed { count: 3 });
        sink.record(AuditEvent::QueryResultCount { count: 2 });
        assert_eq!(
            sink.events(),
            vec![
                AuditEvent::ProductsAccessed { count: 3 },
                AuditEvent::QueryResultCount { count: 2 },
            ]
        );
    }

    #[test]
    fn test_event_serializes_with_tag() {
        let event = AuditEvent::QueryResultCount { count: 2 };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "query_result_count");
        assert_eq!(json["count"], 2);
    }
}
