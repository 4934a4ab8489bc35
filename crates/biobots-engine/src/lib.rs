//! Runtime shell for the BioBots simulation.
//!
//! Everything the pure logic crate deliberately leaves out lives here: the
//! wall clock, identifier generation, randomized entity factories, the
//! player's mana commands, JSON save/load, a tracing-backed event sink, and
//! the tick driver that keeps the world advancing.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`clock`] | Millisecond wall-clock source |
//! | [`commands`] | Mana-gated player actions (spawn, water, assign work) |
//! | [`driver`] | Background tick loop with pause/stop semantics |
//! | [`ids`] | v4 identifier generation with a PRNG fallback |
//! | [`log`] | `tracing`-backed [`EventSink`](biobots_logic::EventSink) |
//! | [`snapshot`] | Versioned JSON save/load |
//! | [`spawn`] | Entity factories with fixed name/personality pools |

pub mod clock;
pub mod commands;
pub mod driver;
pub mod ids;
pub mod log;
pub mod snapshot;
pub mod spawn;

pub use commands::{CommandError, PlayerState};
pub use driver::TickDriver;
pub use log::TraceSink;
pub use snapshot::{SaveData, SnapshotError};
