//! Simulation configuration — every tunable the processors consume.
//!
//! Each knob maps 1:1 to one effect in the engine; processors read the config
//! and never hard-code a rate or timer. `Default` carries the canonical
//! values the game ships with. The struct is serde-friendly so a frontend can
//! persist tweaked values alongside a save.

use serde::{Deserialize, Serialize};

/// All numeric constants the simulation core consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Side length of the square world, in world units.
    pub world_size: f32,
    /// Movement targets are clamped into `[target_inset, world_size - target_inset]`.
    pub target_inset: f32,

    /// Per-tick energy decay while `Working` (the fastest drain).
    pub decay_working: f32,
    /// Per-tick energy decay while `Walking`.
    pub decay_walking: f32,
    /// Per-tick energy decay in every other living state, `Feeding` included.
    pub decay_idle: f32,
    /// Per-tick energy gain while `Feeding`.
    pub recharge_rate: f32,
    /// Per-tick resource drained from the node a bot feeds on.
    pub consume_rate: f32,
    /// Bots below this energy seek food.
    pub hunger_threshold: f32,
    /// Maximum distance at which a bot can feed from a node.
    pub feeding_radius: f32,
    /// While feeding, movement speed is multiplied by this factor.
    pub feeding_speed_factor: f32,

    /// Length of one work assignment, in milliseconds.
    pub work_duration_ms: u64,
    /// Orbit radius while working near a node.
    pub orbit_radius: f32,
    /// Extra reach (beyond the interaction radius) inside which a working bot
    /// orbits its node instead of walking toward it.
    pub work_orbit_slack: f32,
    /// Jitter applied to the approach target when closing on a food node.
    pub approach_jitter: f32,
    /// Amplitude of the sinusoidal idle wander.
    pub wander_amplitude: f32,

    /// Whether zero-energy bots die at all.
    pub auto_death: bool,
    /// Grace period at zero energy before death, in milliseconds.
    pub time_to_die_ms: u64,
    /// Display period a dead bot stays frozen in place, in milliseconds.
    pub time_frozen_ms: u64,
    /// Fade-out period after the frozen window, in milliseconds.
    pub fade_duration_ms: u64,

    /// Grace period a fully depleted land is kept before removal.
    pub decay_timeout_ms: u64,
    /// Resource added by one watering action.
    pub water_growth: f32,

    /// Resource level at or above which a node pays the green-tier rate.
    pub tier_green: f32,
    /// Resource level at or above which a node pays the pink-tier rate.
    pub tier_pink: f32,
    /// Per-tick score for the green tier.
    pub green_tick: f32,
    /// Per-tick score for the pink tier.
    pub pink_tick: f32,
    /// Per-tick score for the yellow tier.
    pub yellow_tick: f32,

    /// Mana the player starts with.
    pub starting_mana: f32,
    /// Mana cap.
    pub mana_max: f32,
    /// Mana regenerated per second of elapsed time.
    pub mana_regen_per_sec: f32,
    /// Mana cost to spawn a biobot.
    pub bot_cost: f32,
    /// Mana cost to spawn a land node.
    pub land_cost: f32,
    /// Mana cost to water a land node.
    pub water_cost: f32,

    /// Default tick interval for the driver, in milliseconds.
    pub step_ms: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            world_size: 2000.0,
            target_inset: 100.0,

            decay_working: 0.08,
            decay_walking: 0.05,
            decay_idle: 0.02,
            recharge_rate: 0.5,
            consume_rate: 0.25,
            hunger_threshold: 90.0,
            feeding_radius: 60.0,
            feeding_speed_factor: 0.2,

            work_duration_ms: 10_000,
            orbit_radius: 40.0,
            work_orbit_slack: 50.0,
            approach_jitter: 10.0,
            wander_amplitude: 100.0,

            auto_death: true,
            time_to_die_ms: 30_000,
            time_frozen_ms: 3_000,
            fade_duration_ms: 2_000,

            decay_timeout_ms: 60_000,
            water_growth: 25.0,

            tier_green: 100.0,
            tier_pink: 50.0,
            green_tick: 0.5,
            pink_tick: 0.2,
            yellow_tick: 0.05,

            starting_mana: 300.0,
            mana_max: 500.0,
            mana_regen_per_sec: 2.0,
            bot_cost: 100.0,
            land_cost: 50.0,
            water_cost: 10.0,

            step_ms: 16,
        }
    }
}

impl SimConfig {
    /// Energy decay rate for a given state. Dead bots do not decay.
    pub fn decay_for(&self, state: crate::entity::BotState) -> f32 {
        use crate::entity::BotState;
        match state {
            BotState::Working => self.decay_working,
            BotState::Walking => self.decay_walking,
            BotState::Dead => 0.0,
            _ => self.decay_idle,
        }
    }

    /// Total time a dead bot remains in the world before removal.
    pub fn corpse_lifetime_ms(&self) -> u64 {
        self.time_frozen_ms + self.fade_duration_ms
    }
}
