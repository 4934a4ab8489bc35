//! World update orchestrator — one tick of the whole entity set.
//!
//! Copy-on-write per tick: every entity is cloned up front, so the
//! processors can mutate freely while the caller's previous snapshot stays
//! intact. Decay and death checks run first; surviving bots then advance
//! their behavior against this tick's land list. Lands flagged for removal
//! are still visible to behavior within the tick — the filter applies when
//! the next set is assembled, matching the original game.

use crate::behavior::process_biobot;
use crate::config::SimConfig;
use crate::death::process_death_lifecycle;
use crate::entity::Entity;
use crate::events::EventSink;
use crate::land::process_land_decay;

/// Advance the world one tick. Returns the next entity set: surviving lands
/// first, surviving bots after. `now` is always explicit so ticks replay
/// deterministically; the driver resolves the wall clock.
///
/// Stable under empty input and total for any well-formed entity set.
pub fn advance_world(
    entities: &[Entity],
    cfg: &SimConfig,
    speed: f32,
    interaction_radius: f32,
    now: u64,
    sink: &dyn EventSink,
) -> Vec<Entity> {
    // Fresh copies for this tick; nothing the caller holds is mutated.
    let mut lands: Vec<Entity> = Vec::new();
    let mut bots: Vec<Entity> = Vec::new();
    for entity in entities {
        if entity.is_land() {
            lands.push(entity.clone());
        } else {
            bots.push(entity.clone());
        }
    }

    let land_keep: Vec<bool> = lands
        .iter_mut()
        .map(|land| !process_land_decay(land, now, cfg, sink))
        .collect();

    bots.retain_mut(|bot| {
        if process_death_lifecycle(bot, now, cfg, sink) {
            return false;
        }
        process_biobot(bot, &mut lands, speed, interaction_radius, now, cfg, sink);
        true
    });

    let mut next: Vec<Entity> = lands
        .into_iter()
        .zip(land_keep)
        .filter_map(|(land, keep)| keep.then_some(land))
        .collect();
    next.append(&mut bots);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{
        BotAttributes, BotState, EntityKind, Gender, LandAttributes, Vec2, GAUGE_MAX,
    };
    use crate::events::NullSink;

    fn bot(id: &str, pos: Vec2, energy: f32, state: BotState) -> Entity {
        Entity {
            id: id.into(),
            pos,
            created_at: 0,
            kind: EntityKind::BioBot(BotAttributes {
                name: "Wren".into(),
                gender: Gender::Female,
                age: 7,
                energy,
                state,
                work_end_time: None,
                personality: "playful".into(),
                strength: 5,
                intelligence: 5,
                individual_score: 0.0,
                zero_energy_since: None,
                death_timestamp: None,
            }),
        }
    }

    fn land(id: &str, pos: Vec2, resource_level: f32) -> Entity {
        Entity {
            id: id.into(),
            pos,
            created_at: 0,
            kind: EntityKind::Land(LandAttributes {
                resource_level,
                empty_since: None,
            }),
        }
    }

    #[test]
    fn test_empty_world_stays_empty() {
        let cfg = SimConfig::default();
        let next = advance_world(&[], &cfg, 2.0, 30.0, 1_000, &NullSink);
        assert!(next.is_empty());
    }

    #[test]
    fn test_previous_snapshot_not_mutated() {
        let cfg = SimConfig::default();
        let world = vec![
            bot("bot-1", Vec2::new(500.0, 500.0), 80.0, BotState::Idle),
            land("land-1", Vec2::new(505.0, 500.0), 80.0),
        ];
        let before = world.clone();
        let _ = advance_world(&world, &cfg, 2.0, 30.0, 1_000, &NullSink);
        assert_eq!(world, before);
    }

    #[test]
    fn test_gauges_stay_clamped_over_many_ticks() {
        let cfg = SimConfig::default();
        let mut world = vec![
            bot("bot-1", Vec2::new(500.0, 500.0), 50.0, BotState::Idle),
            land("land-1", Vec2::new(505.0, 500.0), 60.0),
        ];
        for tick in 0..1_000_u64 {
            world = advance_world(&world, &cfg, 2.0, 30.0, tick * 16, &NullSink);
            for entity in &world {
                if let Some(attrs) = entity.bot() {
                    assert!((0.0..=GAUGE_MAX).contains(&attrs.energy));
                }
                if let Some(attrs) = entity.land() {
                    assert!((0.0..=GAUGE_MAX).contains(&attrs.resource_level));
                }
            }
        }
    }

    #[test]
    fn test_energy_strictly_decreases_when_not_feeding() {
        let cfg = SimConfig::default();
        let world = vec![bot("bot-1", Vec2::new(500.0, 500.0), 50.0, BotState::Idle)];
        let next = advance_world(&world, &cfg, 2.0, 30.0, 1_000, &NullSink);
        assert!(next[0].bot().unwrap().energy < 50.0);
    }

    #[test]
    fn test_decayed_land_removed_bot_survives() {
        let cfg = SimConfig::default();
        let mut world = vec![
            bot("bot-1", Vec2::new(500.0, 500.0), 100.0, BotState::Idle),
            land("land-1", Vec2::new(900.0, 900.0), 0.0),
        ];
        // Tick at t=0 arms the decay timer, then jump past the timeout.
        world = advance_world(&world, &cfg, 2.0, 30.0, 0, &NullSink);
        assert_eq!(world.len(), 2);
        world = advance_world(&world, &cfg, 2.0, 30.0, cfg.decay_timeout_ms + 1, &NullSink);
        assert_eq!(world.len(), 1);
        assert!(world[0].is_bot());
    }

    #[test]
    fn test_forced_working_bot_scores_green_tick() {
        let cfg = SimConfig::default();
        let pos = Vec2::new(500.0, 500.0);
        let mut worker = bot("bot-1", pos, 100.0, BotState::Working);
        worker.bot_mut().unwrap().work_end_time = Some(u64::MAX);
        let world = vec![worker, land("land-1", pos, 100.0)];
        let next = advance_world(&world, &cfg, 2.0, 30.0, 1_000, &NullSink);
        let score = next
            .iter()
            .find_map(|e| e.bot())
            .map(|a| a.individual_score)
            .unwrap();
        assert!((score - cfg.green_tick).abs() < 1e-5);
    }

    #[test]
    fn test_dead_bot_removed_after_frozen_plus_fade() {
        let cfg = SimConfig::default();
        let mut corpse = bot("bot-1", Vec2::new(500.0, 500.0), 0.0, BotState::Dead);
        corpse.bot_mut().unwrap().death_timestamp = Some(1_000);
        let world = vec![corpse];

        let at_edge = advance_world(
            &world,
            &cfg,
            2.0,
            30.0,
            1_000 + cfg.corpse_lifetime_ms(),
            &NullSink,
        );
        assert_eq!(at_edge.len(), 1);

        let past_edge = advance_world(
            &world,
            &cfg,
            2.0,
            30.0,
            1_000 + cfg.corpse_lifetime_ms() + 1,
            &NullSink,
        );
        assert!(past_edge.is_empty());
    }

    #[test]
    fn test_zero_energy_bot_dies_after_grace_then_fades_out() {
        let cfg = SimConfig::default();
        let mut world = vec![bot("bot-1", Vec2::new(500.0, 500.0), 0.0, BotState::Idle)];

        // t=0 arms the zero-energy timer.
        world = advance_world(&world, &cfg, 2.0, 30.0, 0, &NullSink);
        assert_ne!(world[0].bot().unwrap().state, BotState::Dead);

        // Grace window elapsed: dies, still present.
        let death_tick = cfg.time_to_die_ms;
        world = advance_world(&world, &cfg, 2.0, 30.0, death_tick, &NullSink);
        let attrs = world[0].bot().unwrap();
        assert_eq!(attrs.state, BotState::Dead);
        assert_eq!(attrs.death_timestamp, Some(death_tick));

        // Frozen + fade elapsed: removed.
        world = advance_world(
            &world,
            &cfg,
            2.0,
            30.0,
            death_tick + cfg.corpse_lifetime_ms() + 1,
            &NullSink,
        );
        assert!(world.is_empty());
    }

    #[test]
    fn test_feeding_bot_drains_the_shared_land_copy() {
        let cfg = SimConfig::default();
        let world = vec![
            bot("bot-1", Vec2::new(500.0, 500.0), 40.0, BotState::Idle),
            land("land-1", Vec2::new(505.0, 500.0), 80.0),
        ];
        let next = advance_world(&world, &cfg, 2.0, 30.0, 1_000, &NullSink);
        let level = next
            .iter()
            .find_map(|e| e.land())
            .map(|l| l.resource_level)
            .unwrap();
        assert!((level - (80.0 - cfg.consume_rate)).abs() < 1e-4);
    }
}
