//! Player commands — the mana economy around the simulation core.
//!
//! The player spends mana to spawn biobots and land nodes, water nodes back
//! to life, and assign work. Commands validate before mutating: a command
//! that cannot pay or cannot find its target returns a [`CommandError`] and
//! leaves the world untouched. Applied commands log a player event.

use rand::Rng;
use serde_json::json;

use biobots_logic::entity::BotState;
use biobots_logic::events::{EventCategory, EventSink, LogEvent, Severity};
use biobots_logic::{Entity, Gender, SimConfig, Vec2};

use crate::spawn::{bot_attributes, spawn_biobot, spawn_land};

/// Why a command was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandError {
    /// Not enough mana to pay the cost.
    InsufficientMana { needed: f32, available: f32 },
    /// No entity with the given identifier.
    NoSuchEntity(String),
    /// The target exists but is the wrong kind or in the wrong state.
    InvalidTarget(String),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InsufficientMana { needed, available } => {
                write!(f, "insufficient mana: need {needed}, have {available}")
            }
            Self::NoSuchEntity(id) => write!(f, "no entity with id {id}"),
            Self::InvalidTarget(id) => write!(f, "entity {id} cannot accept this command"),
        }
    }
}

impl std::error::Error for CommandError {}

/// The player's spendable resource.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlayerState {
    pub mana: f32,
}

impl PlayerState {
    pub fn new(cfg: &SimConfig) -> Self {
        Self {
            mana: cfg.starting_mana,
        }
    }

    /// Regenerate mana for `elapsed_ms` of real time, clamped to the cap.
    pub fn regen(&mut self, elapsed_ms: u64, cfg: &SimConfig) {
        let gained = cfg.mana_regen_per_sec * elapsed_ms as f32 / 1000.0;
        self.mana = (self.mana + gained).min(cfg.mana_max);
    }

    fn pay(&mut self, cost: f32) -> Result<(), CommandError> {
        if self.mana < cost {
            return Err(CommandError::InsufficientMana {
                needed: cost,
                available: self.mana,
            });
        }
        self.mana -= cost;
        Ok(())
    }
}

/// Spend mana and add a new biobot to the world. Returns its identifier.
#[allow(clippy::too_many_arguments)]
pub fn spawn_bot_command(
    player: &mut PlayerState,
    world: &mut Vec<Entity>,
    rng: &mut impl Rng,
    gender: Gender,
    custom_name: Option<&str>,
    pos: Vec2,
    now: u64,
    cfg: &SimConfig,
    sink: &dyn EventSink,
) -> Result<String, CommandError> {
    player.pay(cfg.bot_cost)?;
    let entity = spawn_biobot(bot_attributes(rng, gender, custom_name), pos, now, sink);
    let id = entity.id.clone();
    log_player_action(sink, "spawn_bot", &id, player.mana);
    world.push(entity);
    Ok(id)
}

/// Spend mana and add a new (empty) land node. Returns its identifier.
pub fn spawn_land_command(
    player: &mut PlayerState,
    world: &mut Vec<Entity>,
    pos: Vec2,
    now: u64,
    cfg: &SimConfig,
    sink: &dyn EventSink,
) -> Result<String, CommandError> {
    player.pay(cfg.land_cost)?;
    let entity = spawn_land(pos, now, sink);
    let id = entity.id.clone();
    log_player_action(sink, "spawn_land", &id, player.mana);
    world.push(entity);
    Ok(id)
}

/// Water a land node: costs mana, raises the resource level by the growth
/// amount (clamped to the cap), and disarms the decay timer.
pub fn water_command(
    player: &mut PlayerState,
    world: &mut [Entity],
    land_id: &str,
    cfg: &SimConfig,
    sink: &dyn EventSink,
) -> Result<(), CommandError> {
    let entity = world
        .iter_mut()
        .find(|e| e.id == land_id)
        .ok_or_else(|| CommandError::NoSuchEntity(land_id.to_owned()))?;
    let Some(land) = entity.land_mut() else {
        return Err(CommandError::InvalidTarget(land_id.to_owned()));
    };
    player.pay(cfg.water_cost)?;
    land.grow(cfg.water_growth);
    log_player_action(sink, "water_land", land_id, player.mana);
    Ok(())
}

/// Put a living biobot to work until `now + work_duration_ms`.
pub fn assign_work_command(
    world: &mut [Entity],
    bot_id: &str,
    now: u64,
    cfg: &SimConfig,
    sink: &dyn EventSink,
) -> Result<(), CommandError> {
    let entity = world
        .iter_mut()
        .find(|e| e.id == bot_id)
        .ok_or_else(|| CommandError::NoSuchEntity(bot_id.to_owned()))?;
    let Some(attrs) = entity.bot_mut() else {
        return Err(CommandError::InvalidTarget(bot_id.to_owned()));
    };
    if attrs.state == BotState::Dead {
        return Err(CommandError::InvalidTarget(bot_id.to_owned()));
    }
    attrs.state = BotState::Working;
    attrs.work_end_time = Some(now + cfg.work_duration_ms);
    sink.log(LogEvent {
        event: "work_assigned",
        category: EventCategory::Player,
        severity: Severity::Info,
        payload: json!({ "id": bot_id, "until": now + cfg.work_duration_ms }),
    });
    Ok(())
}

fn log_player_action(sink: &dyn EventSink, action: &'static str, id: &str, mana_left: f32) {
    sink.log(LogEvent {
        event: action,
        category: EventCategory::Player,
        severity: Severity::Info,
        payload: json!({ "id": id, "mana_left": mana_left }),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use biobots_logic::NullSink;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_spawn_bot_deducts_mana_and_adds_entity() {
        let cfg = SimConfig::default();
        let mut player = PlayerState::new(&cfg);
        let mut world = Vec::new();
        let mut rng = StdRng::seed_from_u64(1);

        let id = spawn_bot_command(
            &mut player,
            &mut world,
            &mut rng,
            Gender::Male,
            None,
            Vec2::new(500.0, 500.0),
            0,
            &cfg,
            &NullSink,
        )
        .unwrap();

        assert_eq!(player.mana, cfg.starting_mana - cfg.bot_cost);
        assert_eq!(world.len(), 1);
        assert_eq!(world[0].id, id);
    }

    #[test]
    fn test_broke_player_cannot_spawn() {
        let cfg = SimConfig::default();
        let mut player = PlayerState { mana: 1.0 };
        let mut world = Vec::new();
        let mut rng = StdRng::seed_from_u64(1);

        let err = spawn_bot_command(
            &mut player,
            &mut world,
            &mut rng,
            Gender::Male,
            None,
            Vec2::new(0.0, 0.0),
            0,
            &cfg,
            &NullSink,
        )
        .unwrap_err();

        assert!(matches!(err, CommandError::InsufficientMana { .. }));
        assert!(world.is_empty());
        assert_eq!(player.mana, 1.0);
    }

    #[test]
    fn test_watering_fills_and_disarms_timer() {
        let cfg = SimConfig::default();
        let mut player = PlayerState::new(&cfg);
        let mut world = vec![spawn_land(Vec2::new(100.0, 100.0), 0, &NullSink)];
        let id = world[0].id.clone();

        water_command(&mut player, &mut world, &id, &cfg, &NullSink).unwrap();

        let land = world[0].land().unwrap();
        assert_eq!(land.resource_level, cfg.water_growth);
        assert!(land.empty_since.is_none());
        assert_eq!(player.mana, cfg.starting_mana - cfg.water_cost);
    }

    #[test]
    fn test_watering_clamps_at_cap() {
        let cfg = SimConfig::default();
        let mut player = PlayerState::new(&cfg);
        let mut world = vec![spawn_land(Vec2::new(100.0, 100.0), 0, &NullSink)];
        let id = world[0].id.clone();
        world[0].land_mut().unwrap().resource_level = 95.0;

        water_command(&mut player, &mut world, &id, &cfg, &NullSink).unwrap();
        assert_eq!(world[0].land().unwrap().resource_level, 100.0);
    }

    #[test]
    fn test_water_rejects_bot_target() {
        let cfg = SimConfig::default();
        let mut player = PlayerState::new(&cfg);
        let mut rng = StdRng::seed_from_u64(1);
        let bot = spawn_biobot(
            bot_attributes(&mut rng, Gender::Female, None),
            Vec2::new(0.0, 0.0),
            0,
            &NullSink,
        );
        let id = bot.id.clone();
        let mut world = vec![bot];

        let err = water_command(&mut player, &mut world, &id, &cfg, &NullSink).unwrap_err();
        assert_eq!(err, CommandError::InvalidTarget(id));
    }

    #[test]
    fn test_assign_work_sets_state_and_timer() {
        let cfg = SimConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        let bot = spawn_biobot(
            bot_attributes(&mut rng, Gender::Female, None),
            Vec2::new(0.0, 0.0),
            0,
            &NullSink,
        );
        let id = bot.id.clone();
        let mut world = vec![bot];

        assign_work_command(&mut world, &id, 5_000, &cfg, &NullSink).unwrap();
        let attrs = world[0].bot().unwrap();
        assert_eq!(attrs.state, BotState::Working);
        assert_eq!(attrs.work_end_time, Some(5_000 + cfg.work_duration_ms));
    }

    #[test]
    fn test_assign_work_rejects_dead_bot() {
        let cfg = SimConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut bot = spawn_biobot(
            bot_attributes(&mut rng, Gender::Female, None),
            Vec2::new(0.0, 0.0),
            0,
            &NullSink,
        );
        bot.bot_mut().unwrap().state = BotState::Dead;
        let id = bot.id.clone();
        let mut world = vec![bot];

        assert!(assign_work_command(&mut world, &id, 0, &cfg, &NullSink).is_err());
    }

    #[test]
    fn test_mana_regen_clamps_to_cap() {
        let cfg = SimConfig::default();
        let mut player = PlayerState::new(&cfg);
        player.regen(10_000_000, &cfg);
        assert_eq!(player.mana, cfg.mana_max);
    }
}
