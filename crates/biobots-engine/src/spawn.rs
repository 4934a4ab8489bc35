//! Entity factories — randomized attributes from fixed pools.
//!
//! Names and personalities come from small fixed pools; everything the core
//! logic actually consumes (energy, state, score, timers) starts at its
//! canonical value. Factories take `&mut impl Rng` so callers control the
//! randomness source.

use rand::Rng;
use serde_json::json;

use biobots_logic::entity::{BotAttributes, BotState, EntityKind, LandAttributes};
use biobots_logic::events::{EventCategory, EventSink, LogEvent, Severity};
use biobots_logic::{Entity, Gender, Vec2};

use crate::ids::new_id;

static MALE_NAMES: &[&str] = &[
    "Bolt", "Cobalt", "Ferro", "Gizmo", "Krank", "Piston", "Quark", "Ratchet", "Sprocket",
    "Tesla", "Volt", "Widget",
];

static FEMALE_NAMES: &[&str] = &[
    "Amber", "Circuit", "Dynamo", "Echo", "Flux", "Ion", "Lumen", "Nova", "Pixel", "Rune",
    "Vela", "Zephyr",
];

/// Fixed 8-entry personality pool; affects external dialogue only.
static PERSONALITIES: &[&str] = &[
    "curious", "grumpy", "playful", "stoic", "anxious", "cheerful", "lazy", "diligent",
];

/// Build a fresh attribute record: full energy, idle, zero score, randomized
/// cosmetics. A supplied `custom_name` overrides the gender pool.
pub fn bot_attributes(rng: &mut impl Rng, gender: Gender, custom_name: Option<&str>) -> BotAttributes {
    let pool = match gender {
        Gender::Male => MALE_NAMES,
        Gender::Female => FEMALE_NAMES,
    };
    let name = custom_name
        .map(str::to_owned)
        .unwrap_or_else(|| pool[rng.gen_range(0..pool.len())].to_owned());

    BotAttributes {
        name,
        gender,
        age: rng.gen_range(1..=10),
        energy: 100.0,
        state: BotState::Idle,
        work_end_time: None,
        personality: PERSONALITIES[rng.gen_range(0..PERSONALITIES.len())].to_owned(),
        strength: rng.gen_range(1..=10),
        intelligence: rng.gen_range(1..=10),
        individual_score: 0.0,
        zero_energy_since: None,
        death_timestamp: None,
    }
}

/// Wrap attributes into a full biobot entity and log its birth.
pub fn spawn_biobot(attrs: BotAttributes, pos: Vec2, now: u64, sink: &dyn EventSink) -> Entity {
    let entity = Entity {
        id: new_id(),
        pos,
        created_at: now,
        kind: EntityKind::BioBot(attrs),
    };
    let name = entity.bot().map(|a| a.name.clone()).unwrap_or_default();
    sink.log(LogEvent {
        event: "biobot_spawned",
        category: EventCategory::Lifecycle,
        severity: Severity::Info,
        payload: json!({ "id": entity.id.clone(), "name": name }),
    });
    entity
}

/// Create a land node. New nodes start empty with the decay timer armed —
/// the player must water them before they produce anything.
pub fn spawn_land(pos: Vec2, now: u64, sink: &dyn EventSink) -> Entity {
    let entity = Entity {
        id: new_id(),
        pos,
        created_at: now,
        kind: EntityKind::Land(LandAttributes {
            resource_level: 0.0,
            empty_since: Some(now),
        }),
    };
    sink.log(LogEvent {
        event: "land_spawned",
        category: EventCategory::Economy,
        severity: Severity::Info,
        payload: json!({ "id": entity.id.clone() }),
    });
    entity
}
