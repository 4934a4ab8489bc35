//! Per-entity motion seed — a stable hash of the entity identifier.
//!
//! The seed phase-shifts each bot's periodic wander/orbit motion so bots with
//! different identifiers never move in lockstep. FNV-1a over the identifier
//! bytes: pure, platform-stable, and cheap enough to recompute every tick.

const FNV_OFFSET: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// Hash an entity identifier to a non-negative motion seed.
///
/// Same identifier ⇒ same seed, across runs and platforms.
pub fn entity_seed(id: &str) -> u32 {
    let mut hash = FNV_OFFSET;
    for byte in id.bytes() {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Deterministic pseudo-jitter in `[-1.0, 1.0]` derived from a seed, the
/// current timestamp, and a caller-chosen salt (so the two axes differ).
///
/// Used instead of a live RNG inside the processors: every tick stays
/// replayable given identical timestamps.
pub fn seeded_jitter(seed: u32, now: u64, salt: u32) -> f32 {
    let mixed = seed
        .wrapping_mul(31)
        .wrapping_add((now as u32).wrapping_mul(salt.wrapping_mul(2_654_435_761)));
    (mixed % 2001) as f32 / 1000.0 - 1.0
}
