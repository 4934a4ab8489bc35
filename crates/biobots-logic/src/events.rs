//! Event-log contract — the write-only sink the simulation reports into.
//!
//! The sink is injected rather than global: processors receive `&dyn
//! EventSink` and fire events on notable transitions (spawn, death, decay,
//! state change, player action). Calls are fire-and-forget — the trait is
//! infallible by signature, so a misbehaving sink can never abort a tick.
//! Tests pass [`NullSink`]; the engine crate provides a tracing-backed sink.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Coarse event grouping, mirrored in the game's log panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventCategory {
    Lifecycle,
    Economy,
    Simulation,
    Player,
}

/// How loudly the event should surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

/// One structured log entry.
#[derive(Debug, Clone, Serialize)]
pub struct LogEvent {
    /// Machine-readable event name, e.g. `"biobot_died"`.
    pub event: &'static str,
    pub category: EventCategory,
    pub severity: Severity,
    /// Arbitrary structured payload.
    pub payload: Value,
}

/// Write-only event sink. Implementations must not block.
pub trait EventSink: Send + Sync {
    fn log(&self, event: LogEvent);
}

/// Sink that drops everything — the default for unit tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn log(&self, _event: LogEvent) {}
}
