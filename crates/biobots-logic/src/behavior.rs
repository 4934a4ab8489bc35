//! Biobot behavior — per-tick energy, state machine, and movement physics.
//!
//! One call advances a single living bot one tick: drain energy by state,
//! expire finished work, scan for the nearest land node, resolve the next
//! state in priority order, then pick a movement target and integrate. All
//! per-tick "randomness" (orbit phase, approach jitter, idle wander) derives
//! from the entity seed and the timestamp, so a tick replays exactly given
//! the same inputs.
//!
//! State resolution priority, re-evaluated fresh every tick:
//! 1. working against a depleted node ⇒ idle
//! 2. hungry + resourced node in feeding range ⇒ feeding (heal, drain node)
//! 3. working + resourced node ⇒ accrue score at the node's tier rate
//! 4. feeding but sated or node depleted ⇒ idle
//! 5. otherwise unchanged

use serde_json::json;

use crate::config::SimConfig;
use crate::entity::{BotState, Entity, Vec2};
use crate::events::{EventCategory, EventSink, LogEvent, Severity};
use crate::score::score_rate;
use crate::seed::{entity_seed, seeded_jitter};

/// Advance one living bot one tick against the current land set.
///
/// Dead bots are skipped entirely. The bot's attributes and position are
/// mutated in place; the fed-from land's resource level is drained through
/// `lands`. The orchestrator supplies fresh per-tick copies of both sides,
/// so no caller-visible prior state is touched.
pub fn process_biobot(
    bot: &mut Entity,
    lands: &mut [Entity],
    speed: f32,
    interaction_radius: f32,
    now: u64,
    cfg: &SimConfig,
    sink: &dyn EventSink,
) {
    if bot.bot().map_or(true, |a| a.state == BotState::Dead) {
        return;
    }

    let id = bot.id.clone();
    let seed = entity_seed(&id);
    let pos = bot.pos;
    let nearest = nearest_land(pos, lands);

    let Some(attrs) = bot.bot_mut() else {
        return;
    };
    let prev_state = attrs.state;

    // 1. Energy decay by state. Working drains fastest, walking next,
    //    everything else (feeding included) at the idle rate.
    attrs.drain_energy(cfg.decay_for(attrs.state));

    // 2. Work timer expiry.
    if attrs.state == BotState::Working && attrs.work_end_time.is_some_and(|t| now >= t) {
        attrs.state = BotState::Idle;
        attrs.work_end_time = None;
    }

    // 3.–4. State resolution against the nearest node.
    match nearest {
        Some(i) => {
            let land_pos = lands[i].pos;
            let resource = lands[i].land().map_or(0.0, |l| l.resource_level);
            let dist = pos.distance(land_pos);

            if attrs.state == BotState::Working && resource == 0.0 {
                attrs.state = BotState::Idle;
            } else if attrs.energy < cfg.hunger_threshold
                && resource > 0.0
                && dist <= cfg.feeding_radius
            {
                attrs.state = BotState::Feeding;
                attrs.recharge_energy(cfg.recharge_rate);
                if let Some(land) = lands[i].land_mut() {
                    land.drain(cfg.consume_rate);
                }
            } else if attrs.state == BotState::Working && resource > 0.0 {
                // Scoring has no distance gate — being assigned to a resourced
                // node is enough.
                attrs.individual_score += score_rate(resource, cfg);
            } else if attrs.state == BotState::Feeding {
                attrs.state = BotState::Idle;
            }
        }
        None => {
            if attrs.state == BotState::Feeding {
                attrs.state = BotState::Idle;
            }
        }
    }

    // Work timer only exists while working.
    if attrs.state != BotState::Working {
        attrs.work_end_time = None;
    }

    if attrs.state != prev_state {
        sink.log(LogEvent {
            event: "state_changed",
            category: EventCategory::Simulation,
            severity: Severity::Info,
            payload: json!({
                "id": id,
                "from": format!("{:?}", prev_state),
                "to": format!("{:?}", attrs.state),
            }),
        });
    }

    let state = attrs.state;
    let energy = attrs.energy;

    // 5. Movement target selection.
    let target = match nearest {
        Some(i) => {
            let land_pos = lands[i].pos;
            let resource = lands[i].land().map_or(0.0, |l| l.resource_level);
            let dist = pos.distance(land_pos);

            if state == BotState::Working && resource > 0.0 {
                if dist <= interaction_radius + cfg.work_orbit_slack {
                    orbit_target(land_pos, seed, now, cfg.orbit_radius)
                } else {
                    land_pos
                }
            } else if energy < cfg.hunger_threshold && resource > 0.0 {
                Vec2::new(
                    land_pos.x + seeded_jitter(seed, now, 1) * cfg.approach_jitter,
                    land_pos.y + seeded_jitter(seed, now, 2) * cfg.approach_jitter,
                )
            } else {
                wander_target(pos, seed, now, cfg.wander_amplitude)
            }
        }
        None => wander_target(pos, seed, now, cfg.wander_amplitude),
    };
    let target = target.clamped(cfg.target_inset, cfg.world_size - cfg.target_inset);

    // 6. Integration: full speed toward the target, never overshooting.
    //    Feeding bots are anchored to the node and crawl.
    let eff_speed = if state == BotState::Feeding {
        speed * cfg.feeding_speed_factor
    } else {
        speed
    };
    let dist = pos.distance(target);
    if dist > 1.0 {
        let step = eff_speed.min(dist);
        bot.pos = Vec2::new(
            pos.x + (target.x - pos.x) / dist * step,
            pos.y + (target.y - pos.y) / dist * step,
        )
        .clamped(0.0, cfg.world_size);
    }
}

/// Index of the Euclidean-nearest land node; first-encountered wins ties.
fn nearest_land(pos: Vec2, lands: &[Entity]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, land) in lands.iter().enumerate() {
        if !land.is_land() {
            continue;
        }
        let d = pos.distance(land.pos);
        if best.map_or(true, |(_, bd)| d < bd) {
            best = Some((i, d));
        }
    }
    best.map(|(i, _)| i)
}

/// A point orbiting `center`, phase-shifted by the entity seed so co-workers
/// spread around the node instead of stacking.
fn orbit_target(center: Vec2, seed: u32, now: u64, radius: f32) -> Vec2 {
    let t = now as f64 / 1000.0;
    let phase = f64::from(seed % 6_283) / 1000.0;
    Vec2::new(
        center.x + ((t * 2.0 + phase).cos() as f32) * radius,
        center.y + ((t * 2.0 + phase).sin() as f32) * radius,
    )
}

/// Smoothly time-varying wander point around the current position, with an
/// independent phase per axis.
fn wander_target(pos: Vec2, seed: u32, now: u64, amplitude: f32) -> Vec2 {
    let t = now as f64 / 1000.0;
    let phase = f64::from(seed % 6_283) / 1000.0;
    Vec2::new(
        pos.x + ((t * 0.6 + phase).sin() as f32) * amplitude,
        pos.y + ((t * 0.8 + phase * 1.7).cos() as f32) * amplitude,
    )
}
