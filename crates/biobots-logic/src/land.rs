//! Land decay — the removal timer for fully depleted resource nodes.
//!
//! A resourced node is never removed and keeps its timer disarmed. A node at
//! zero resource arms `empty_since` on the first tick the emptiness is
//! observed (not at creation) and is removed strictly after the configured
//! decay timeout has elapsed.

use serde_json::json;

use crate::config::SimConfig;
use crate::entity::Entity;
use crate::events::{EventCategory, EventSink, LogEvent, Severity};

/// Advance one land node's decay timer. Returns `true` when the node should
/// be removed from the world. Non-land entities are left untouched and kept.
pub fn process_land_decay(entity: &mut Entity, now: u64, cfg: &SimConfig, sink: &dyn EventSink) -> bool {
    let id = entity.id.clone();
    let Some(land) = entity.land_mut() else {
        return false;
    };

    if land.resource_level > 0.0 {
        land.empty_since = None;
        return false;
    }

    // Arm the timer on first observed emptiness; re-observations keep it.
    let empty_since = *land.empty_since.get_or_insert(now);

    if now.saturating_sub(empty_since) > cfg.decay_timeout_ms {
        sink.log(LogEvent {
            event: "land_decayed",
            category: EventCategory::Economy,
            severity: Severity::Warning,
            payload: json!({ "id": id, "empty_since": empty_since }),
        });
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{EntityKind, LandAttributes, Vec2};
    use crate::events::test_support::RecordingSink;
    use crate::events::NullSink;

    fn land(resource_level: f32, empty_since: Option<u64>) -> Entity {
        Entity {
            id: "land-1".into(),
            pos: Vec2::new(500.0, 500.0),
            created_at: 0,
            kind: EntityKind::Land(LandAttributes {
                resource_level,
                empty_since,
            }),
        }
    }

    #[test]
    fn test_resourced_node_never_removed_and_timer_cleared() {
        let cfg = SimConfig::default();
        let mut e = land(5.0, Some(0));
        assert!(!process_land_decay(&mut e, 10_000_000, &cfg, &NullSink));
        assert!(e.land().unwrap().empty_since.is_none());
    }

    #[test]
    fn test_timer_armed_on_first_empty_observation() {
        let cfg = SimConfig::default();
        let mut e = land(0.0, None);
        assert!(!process_land_decay(&mut e, 7_000, &cfg, &NullSink));
        assert_eq!(e.land().unwrap().empty_since, Some(7_000));
    }

    #[test]
    fn test_timer_arming_is_idempotent() {
        let cfg = SimConfig::default();
        let mut e = land(0.0, None);
        process_land_decay(&mut e, 7_000, &cfg, &NullSink);
        process_land_decay(&mut e, 7_000, &cfg, &NullSink);
        assert_eq!(e.land().unwrap().empty_since, Some(7_000));
    }

    #[test]
    fn test_removal_strictly_after_timeout() {
        let cfg = SimConfig::default();
        let now = 1_000_000;

        let mut kept = land(0.0, Some(now - cfg.decay_timeout_ms));
        assert!(!process_land_decay(&mut kept, now, &cfg, &NullSink));

        let mut removed = land(0.0, Some(now - cfg.decay_timeout_ms - 1));
        assert!(process_land_decay(&mut removed, now, &cfg, &NullSink));
    }

    #[test]
    fn test_decay_warning_logged_on_removal_only() {
        let cfg = SimConfig::default();
        let sink = RecordingSink::default();
        let now = 1_000_000;

        let mut kept = land(0.0, Some(now - 10));
        process_land_decay(&mut kept, now, &cfg, &sink);
        assert!(sink.names().is_empty());

        let mut removed = land(0.0, Some(now - cfg.decay_timeout_ms - 1));
        process_land_decay(&mut removed, now, &cfg, &sink);
        assert_eq!(sink.names(), vec!["land_decayed"]);
    }
}
