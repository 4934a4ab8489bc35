//! Entity identifier generation.
//!
//! Identifiers are v4 UUID strings. Bytes come from the OS randomness source
//! when available; if that fails (sandboxed targets, exotic platforms) we
//! fall back to the thread-local PRNG, which still yields practically-unique
//! strings. Generation never fails.

use rand::Rng;
use uuid::Builder;

/// Produce a fresh, universally-unique entity identifier.
pub fn new_id() -> String {
    let mut bytes = [0u8; 16];
    if getrandom::getrandom(&mut bytes).is_err() {
        rand::thread_rng().fill(&mut bytes);
    }
    Builder::from_random_bytes(bytes).into_uuid().to_string()
}
