//! Death lifecycle — the zero-energy countdown and post-mortem removal timer.
//!
//! A bot at zero energy gets a grace window (`time_to_die_ms`) before dying.
//! Death itself never removes the bot: the corpse stays for a frozen display
//! window plus a fade window so the frontend can animate the departure, and
//! only after both have elapsed does this processor signal removal.

use serde_json::json;

use crate::config::SimConfig;
use crate::entity::{BotState, Entity};
use crate::events::{EventCategory, EventSink, LogEvent, Severity};

/// Advance one bot's death timers. Returns `true` when the bot should be
/// removed from the world. Non-bot entities are left untouched and kept.
///
/// Never returns `true` on the tick a death transition happens — removal is
/// deferred at least one full frozen+fade cycle.
pub fn process_death_lifecycle(
    entity: &mut Entity,
    now: u64,
    cfg: &SimConfig,
    sink: &dyn EventSink,
) -> bool {
    let id = entity.id.clone();
    let Some(attrs) = entity.bot_mut() else {
        return false;
    };

    if attrs.state == BotState::Dead {
        // Idempotent: only arm the timestamp if a prior tick somehow missed it.
        let died_at = *attrs.death_timestamp.get_or_insert(now);
        return now.saturating_sub(died_at) > cfg.corpse_lifetime_ms();
    }

    if attrs.energy <= 0.0 {
        let zero_since = *attrs.zero_energy_since.get_or_insert(now);
        if cfg.auto_death && now.saturating_sub(zero_since) >= cfg.time_to_die_ms {
            attrs.state = BotState::Dead;
            attrs.death_timestamp = Some(now);
            sink.log(LogEvent {
                event: "biobot_died",
                category: EventCategory::Lifecycle,
                severity: Severity::Critical,
                payload: json!({ "id": id, "name": attrs.name.clone(), "died_at": now }),
            });
        }
        return false;
    }

    attrs.zero_energy_since = None;
    false
}
