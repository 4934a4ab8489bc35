//! Pure simulation logic for BioBots.
//!
//! This crate contains the deterministic world-update core of the game,
//! independent of any clock, RNG, renderer, or runtime. Every function takes
//! plain data plus an explicit timestamp and returns plain data, so a tick
//! replays exactly given the same inputs — which is also what makes the
//! whole engine unit-testable offline.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`behavior`] | Per-tick bot energy, state machine, and movement physics |
//! | [`config`] | Every tunable constant the processors consume |
//! | [`death`] | Zero-energy countdown, death transition, corpse removal timer |
//! | [`entity`] | Entity model: biobots, land nodes, clamped gauges |
//! | [`events`] | Injected write-only event sink contract |
//! | [`land`] | Depleted-node decay timer and removal |
//! | [`score`] | Resource-tier scoring (yellow/pink/green) |
//! | [`seed`] | Stable per-entity motion seed and replayable jitter |
//! | [`world`] | Copy-on-write orchestrator advancing the full entity set |

pub mod behavior;
pub mod config;
pub mod death;
pub mod entity;
pub mod events;
pub mod land;
pub mod score;
pub mod seed;
pub mod world;

pub use config::SimConfig;
pub use entity::{BotAttributes, BotState, Entity, EntityKind, Gender, LandAttributes, Vec2};
pub use events::{EventCategory, EventSink, LogEvent, NullSink, Severity};
pub use world::advance_world;
