//! Tracing-backed event sink.
//!
//! The logic crate only knows the [`EventSink`] trait; this is the production
//! implementation, mapping event severities onto `tracing` levels so the
//! host application's subscriber decides formatting and filtering.

use biobots_logic::events::{EventSink, LogEvent, Severity};

/// Event sink that forwards everything to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TraceSink;

impl EventSink for TraceSink {
    fn log(&self, event: LogEvent) {
        match event.severity {
            Severity::Info => tracing::info!(
                target: "biobots",
                event = event.event,
                category = ?event.category,
                payload = %event.payload,
            ),
            Severity::Warning => tracing::warn!(
                target: "biobots",
                event = event.event,
                category = ?event.category,
                payload = %event.payload,
            ),
            Severity::Critical => tracing::error!(
                target: "biobots",
                event = event.event,
                category = ?event.category,
                payload = %event.payload,
            ),
        }
    }
}
