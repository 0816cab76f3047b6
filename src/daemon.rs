//! # Crossfade Daemon
//!
//! Runs a [`CrossfadeEngine`] on a background thread during playback. The
//! thread advances the engine against a monotonic [`Instant`] clock in short
//! ticks; the engine itself decides when polls and fade steps are due.
//!
//! The daemon is an explicitly owned service object. `start` is guarded by
//! the in-flight thread handle, so a second call while running does nothing.
//! `stop` joins the thread before returning, and the engine's timers are
//! cancelled, so no poll or fade step can fire afterwards.

use crate::crossfade::{CrossfadeEngine, PlaybackBackend};
use anyhow::{anyhow, Context, Result};
use log::{debug, error, info};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// How often the thread wakes to advance the engine clock.
pub const DEFAULT_TICK: Duration = Duration::from_millis(50);

pub struct CrossfadeDaemon<B: PlaybackBackend + Send + 'static> {
    engine: Arc<Mutex<CrossfadeEngine<B>>>,
    stop_flag: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
    tick: Duration,
    /// Engine clock origin, kept across restarts so engine time never rewinds.
    epoch: Instant,
}

impl<B: PlaybackBackend + Send + 'static> CrossfadeDaemon<B> {
    #[must_use]
    pub fn new(engine: CrossfadeEngine<B>) -> Self {
        Self::with_tick(engine, DEFAULT_TICK)
    }

    #[must_use]
    pub fn with_tick(engine: CrossfadeEngine<B>, tick: Duration) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
            stop_flag: Arc::new(AtomicBool::new(false)),
            handle: None,
            tick: tick.max(Duration::from_millis(1)),
            epoch: Instant::now(),
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Start the background thread. Returns `Ok(false)` if it was already running.
    ///
    /// # Errors
    ///
    /// Returns an error if the thread cannot be spawned.
    pub fn start(&mut self) -> Result<bool> {
        if self.handle.is_some() {
            debug!("Crossfade daemon already running");
            return Ok(false);
        }

        self.stop_flag.store(false, Ordering::SeqCst);
        let engine = Arc::clone(&self.engine);
        let stop_flag = Arc::clone(&self.stop_flag);
        let (tick, epoch) = (self.tick, self.epoch);

        let handle = thread::Builder::new()
            .name("crossfade".to_string())
            .spawn(move || run(&engine, &stop_flag, tick, epoch))
            .context("Failed to spawn crossfade thread")?;

        self.handle = Some(handle);
        info!("Crossfade daemon started");
        Ok(true)
    }

    /// Stop the thread and cancel every engine timer. Safe to call repeatedly.
    pub fn stop(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };

        self.stop_flag.store(true, Ordering::SeqCst);
        if handle.join().is_err() {
            error!("Crossfade thread panicked");
        }
        match self.engine.lock() {
            Ok(mut engine) => engine.stop_polling(),
            Err(poisoned) => poisoned.into_inner().stop_polling(),
        }
        info!("Crossfade daemon stopped");
    }

    /// Run `f` against the engine, e.g. to toggle fading or register tempos.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine lock is poisoned.
    pub fn with_engine<R>(&self, f: impl FnOnce(&mut CrossfadeEngine<B>) -> R) -> Result<R> {
        let mut engine = self.engine.lock().map_err(|_| anyhow!("Crossfade engine lock poisoned"))?;
        Ok(f(&mut engine))
    }
}

impl<B: PlaybackBackend + Send + 'static> Drop for CrossfadeDaemon<B> {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run<B: PlaybackBackend>(engine: &Mutex<CrossfadeEngine<B>>, stop_flag: &AtomicBool, tick: Duration, epoch: Instant) {
    match engine.lock() {
        Ok(mut engine) => engine.start_polling(epoch.elapsed()),
        Err(_) => {
            error!("Crossfade engine lock poisoned, not starting");
            return;
        }
    }

    while !stop_flag.load(Ordering::SeqCst) {
        match engine.lock() {
            Ok(mut engine) => engine.advance_to(epoch.elapsed()),
            Err(_) => {
                error!("Crossfade engine lock poisoned, stopping");
                break;
            }
        }
        thread::sleep(tick);
    }
    debug!("Crossfade thread exiting at {:?}", epoch.elapsed());
}
