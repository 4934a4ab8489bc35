//! Entity model — the discriminated union the whole simulation operates on.
//!
//! Two kinds of entity exist: autonomous biobots and stationary land nodes.
//! Both carry a stable string identifier, a 2D position, and a creation
//! timestamp. All numeric gauges (energy, resource level) are clamped into
//! `[0.0, 100.0]` at every mutation site — invariant violations are prevented
//! structurally, never surfaced as errors.

use serde::{Deserialize, Serialize};

/// Upper bound for energy and resource gauges.
pub const GAUGE_MAX: f32 = 100.0;

/// 2D position in world units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to another point.
    pub fn distance(&self, other: Vec2) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Clamp both axes into `[lo, hi]`.
    pub fn clamped(self, lo: f32, hi: f32) -> Vec2 {
        Vec2::new(self.x.clamp(lo, hi), self.y.clamp(lo, hi))
    }
}

/// Cosmetic gender — informs name-pool selection at creation, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

/// Behavioral state of a biobot.
///
/// `Socializing` is reserved: the engine defines it but never transitions
/// into it. `Dead` is terminal — a dead bot never re-enters any other state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BotState {
    Idle,
    Working,
    Walking,
    Socializing,
    Feeding,
    Dead,
}

/// Mutable per-bot record. The orchestrator hands each processor a fresh
/// per-tick copy, so processors mutate freely without defensive cloning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotAttributes {
    /// Immutable after creation.
    pub name: String,
    pub gender: Gender,
    /// 1–10, cosmetic.
    pub age: u8,
    /// Central survival gauge, always in `[0, 100]`.
    pub energy: f32,
    pub state: BotState,
    /// Present only while `Working`.
    pub work_end_time: Option<u64>,
    /// Cosmetic, drawn from a fixed pool; feeds external dialogue only.
    pub personality: String,
    /// 1–10, cosmetic, unused by core logic.
    pub strength: u8,
    /// 1–10, cosmetic, unused by core logic.
    pub intelligence: u8,
    /// Monotonically non-decreasing while working a resourced node.
    pub individual_score: f32,
    /// Armed the instant energy first hits 0, cleared when it rises above 0.
    pub zero_energy_since: Option<u64>,
    /// Armed exactly once, at the tick state first becomes `Dead`.
    pub death_timestamp: Option<u64>,
}

impl BotAttributes {
    /// Subtract `amount` from energy, clamping at 0.
    pub fn drain_energy(&mut self, amount: f32) {
        self.energy = (self.energy - amount).max(0.0);
    }

    /// Add `amount` to energy, clamping at [`GAUGE_MAX`].
    pub fn recharge_energy(&mut self, amount: f32) {
        self.energy = (self.energy + amount).min(GAUGE_MAX);
    }
}

/// Mutable per-land record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandAttributes {
    /// Depletable/rechargeable gauge, always in `[0, 100]`.
    pub resource_level: f32,
    /// Armed the instant the level first hits 0, cleared when it rises above 0.
    pub empty_since: Option<u64>,
}

impl LandAttributes {
    /// Subtract `amount` from the resource level, clamping at 0.
    pub fn drain(&mut self, amount: f32) {
        self.resource_level = (self.resource_level - amount).max(0.0);
    }

    /// Add `amount` to the resource level, clamping at [`GAUGE_MAX`].
    /// A level rising above 0 disarms the decay timer.
    pub fn grow(&mut self, amount: f32) {
        self.resource_level = (self.resource_level + amount).min(GAUGE_MAX);
        if self.resource_level > 0.0 {
            self.empty_since = None;
        }
    }
}

/// Kind-specific payload of an entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EntityKind {
    BioBot(BotAttributes),
    Land(LandAttributes),
}

/// A world entity: stable identity, position, creation time, and payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: String,
    pub pos: Vec2,
    /// Wall-clock milliseconds at creation.
    pub created_at: u64,
    pub kind: EntityKind,
}

impl Entity {
    pub fn is_land(&self) -> bool {
        matches!(self.kind, EntityKind::Land(_))
    }

    pub fn is_bot(&self) -> bool {
        matches!(self.kind, EntityKind::BioBot(_))
    }

    pub fn bot(&self) -> Option<&BotAttributes> {
        match &self.kind {
            EntityKind::BioBot(attrs) => Some(attrs),
            _ => None,
        }
    }

    pub fn bot_mut(&mut self) -> Option<&mut BotAttributes> {
        match &mut self.kind {
            EntityKind::BioBot(attrs) => Some(attrs),
            _ => None,
        }
    }

    pub fn land(&self) -> Option<&LandAttributes> {
        match &self.kind {
            EntityKind::Land(attrs) => Some(attrs),
            _ => None,
        }
    }

    pub fn land_mut(&mut self) -> Option<&mut LandAttributes> {
        match &mut self.kind {
            EntityKind::Land(attrs) => Some(attrs),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_energy_clamps_both_ends() {
        let mut attrs = BotAttributes {
            name: "T".into(),
            gender: Gender::Male,
            age: 5,
            energy: 1.0,
            state: BotState::Idle,
            work_end_time: None,
            personality: "curious".into(),
            strength: 5,
            intelligence: 5,
            individual_score: 0.0,
            zero_energy_since: None,
            death_timestamp: None,
        };
        attrs.drain_energy(5.0);
        assert_eq!(attrs.energy, 0.0);
        attrs.recharge_energy(250.0);
        assert_eq!(attrs.energy, GAUGE_MAX);
    }

    #[test]
    fn test_grow_above_zero_disarms_timer() {
        let mut land = LandAttributes {
            resource_level: 0.0,
            empty_since: Some(1_000),
        };
        land.grow(10.0);
        assert_eq!(land.resource_level, 10.0);
        assert!(land.empty_since.is_none());
    }

    #[test]
    fn test_distance() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < f32::EPSILON);
    }
}
