//! Economic scoring — maps a node's resource level to a per-tick payout.
//!
//! Three tiers, named after the node's on-screen color. Boundaries are
//! inclusive (`>=`), and the comparison is plain floating point with no
//! rounding guard — a level hovering at a threshold after fractional
//! consumption can flicker between tiers by one ULP, matching the original
//! game's behavior.

use crate::config::SimConfig;

/// Resource-level band of a land node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceTier {
    /// Level at or above the green threshold — highest payout.
    Green,
    /// Level at or above the pink threshold — middle payout.
    Pink,
    /// Everything below — lowest payout.
    Yellow,
}

impl ResourceTier {
    pub fn from_level(level: f32, cfg: &SimConfig) -> Self {
        if level >= cfg.tier_green {
            Self::Green
        } else if level >= cfg.tier_pink {
            Self::Pink
        } else {
            Self::Yellow
        }
    }
}

/// Per-tick score increment for a node at `level`.
pub fn score_rate(level: f32, cfg: &SimConfig) -> f32 {
    match ResourceTier::from_level(level, cfg) {
        ResourceTier::Green => cfg.green_tick,
        ResourceTier::Pink => cfg.pink_tick,
        ResourceTier::Yellow => cfg.yellow_tick,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries_inclusive() {
        let cfg = SimConfig::default();
        assert_eq!(ResourceTier::from_level(100.0, &cfg), ResourceTier::Green);
        assert_eq!(ResourceTier::from_level(99.9, &cfg), ResourceTier::Pink);
        assert_eq!(ResourceTier::from_level(50.0, &cfg), ResourceTier::Pink);
        assert_eq!(ResourceTier::from_level(49.0, &cfg), ResourceTier::Yellow);
        assert_eq!(ResourceTier::from_level(0.0, &cfg), ResourceTier::Yellow);
    }

    #[test]
    fn test_score_rate_table() {
        let cfg = SimConfig::default();
        assert_eq!(score_rate(100.0, &cfg), cfg.green_tick);
        assert_eq!(score_rate(75.0, &cfg), cfg.pink_tick);
        assert_eq!(score_rate(50.0, &cfg), cfg.pink_tick);
        assert_eq!(score_rate(49.0, &cfg), cfg.yellow_tick);
        assert_eq!(score_rate(0.0, &cfg), cfg.yellow_tick);
    }
}
