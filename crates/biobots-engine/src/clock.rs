//! Wall clock — millisecond timestamps for the driver and factories.
//!
//! The simulation core never reads the clock itself; every processor takes
//! an explicit `now`, and this is the one place the real time comes from.

use std::time::{SystemTime, UNIX_EPOCH};

/// Current wall-clock time in milliseconds since the Unix epoch.
///
/// Saturates to 0 if the system clock reports a pre-epoch time.
pub fn wall_clock_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
