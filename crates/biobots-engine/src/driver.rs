//! Tick driver — the continuously-scheduled loop that advances the world.
//!
//! A background thread plays the role of the browser's frame callback: while
//! the driver is running and not paused, it locks the shared world, runs one
//! orchestrator tick against the wall clock, publishes the result, and
//! sleeps for the step interval. Each tick runs to completion before the
//! next is scheduled, so ticks never overlap. The step is injectable so
//! headless tests are not bound to a display refresh rate.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use biobots_logic::events::EventSink;
use biobots_logic::{advance_world, Entity, SimConfig};

use crate::clock::wall_clock_ms;

/// Owns the scheduling of future ticks. Dropping (or calling [`stop`]) halts
/// the loop and joins the thread — no scheduling handle leaks.
///
/// [`stop`]: TickDriver::stop
pub struct TickDriver {
    world: Arc<Mutex<Vec<Entity>>>,
    running: Arc<AtomicBool>,
    paused: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl TickDriver {
    /// Start ticking `initial` at `step` intervals.
    pub fn start(
        initial: Vec<Entity>,
        cfg: SimConfig,
        speed: f32,
        interaction_radius: f32,
        sink: Arc<dyn EventSink>,
        step: Duration,
    ) -> Self {
        let world = Arc::new(Mutex::new(initial));
        let running = Arc::new(AtomicBool::new(true));
        let paused = Arc::new(AtomicBool::new(false));

        let handle = std::thread::spawn({
            let world = Arc::clone(&world);
            let running = Arc::clone(&running);
            let paused = Arc::clone(&paused);
            move || {
                while running.load(Ordering::Relaxed) {
                    if !paused.load(Ordering::Relaxed) {
                        let now = wall_clock_ms();
                        let Ok(mut guard) = world.lock() else {
                            // A panicking consumer poisoned the world; stop
                            // issuing ticks rather than tick garbage.
                            break;
                        };
                        let next = advance_world(
                            &guard,
                            &cfg,
                            speed,
                            interaction_radius,
                            now,
                            sink.as_ref(),
                        );
                        *guard = next;
                    }
                    std::thread::sleep(step);
                }
            }
        });

        Self {
            world,
            running,
            paused,
            handle: Some(handle),
        }
    }

    /// Start with the config's default step interval.
    pub fn start_default(
        initial: Vec<Entity>,
        cfg: SimConfig,
        speed: f32,
        interaction_radius: f32,
        sink: Arc<dyn EventSink>,
    ) -> Self {
        let step = Duration::from_millis(cfg.step_ms);
        Self::start(initial, cfg, speed, interaction_radius, sink, step)
    }

    /// Skip ticks without stopping the thread.
    pub fn pause(&self) {
        self.paused.store(true, Ordering::Relaxed);
    }

    /// Resume ticking after a pause.
    pub fn resume(&self) {
        self.paused.store(false, Ordering::Relaxed);
    }

    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Relaxed)
    }

    /// Clone of the latest published entity set.
    pub fn snapshot(&self) -> Vec<Entity> {
        self.world.lock().map(|g| g.clone()).unwrap_or_default()
    }

    /// Shared handle to the world, for commands applied between ticks.
    pub fn world_handle(&self) -> Arc<Mutex<Vec<Entity>>> {
        Arc::clone(&self.world)
    }

    /// Stop issuing ticks and join the scheduling thread.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for TickDriver {
    fn drop(&mut self) {
        self.shutdown();
    }
}
