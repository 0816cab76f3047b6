//! # Crossfade Engine
//!
//! Fades playback volume across track boundaries. The engine is a plain state
//! machine driven by a monotonic clock: the owner calls
//! [`CrossfadeEngine::advance_to`] with the time elapsed since it started, and
//! every timer that has come due up to that instant fires in order. No timer
//! fires outside `advance_to`, so once [`CrossfadeEngine::stop_polling`] or
//! [`CrossfadeEngine::destroy`] returns nothing else runs.
//!
//! Two timers exist, at most one of each:
//! - the poll timer reads the playback state every `poll_interval`
//! - the fade timer steps the active fade
//!
//! A detected track change always cancels the active fade and starts a
//! fade-in, even in the middle of a fade-out. Backend failures are logged and
//! the tick is skipped; the engine never returns an error or panics.

use crate::config::CrossfadeSettings;
use anyhow::Result;
use log::{debug, trace, warn};
use std::collections::HashMap;
use std::time::Duration;

const FADE_IN_DURATION: Duration = Duration::from_millis(1500);
const FADE_IN_STEPS: u32 = 15;
const FADE_OUT_STEP: Duration = Duration::from_millis(100);
/// Fade-out starts this much before the fade would need to begin.
const FADE_OUT_LEAD: Duration = Duration::from_millis(500);
const MIN_TRACK_DURATION: Duration = Duration::from_secs(30);
const MIN_ELAPSED: Duration = Duration::from_secs(10);
/// Tempo assumed for tracks without a known tempo.
pub const DEFAULT_TEMPO: f64 = 120.0;

/// Fade length anchors as (BPM, milliseconds); interpolated linearly between.
const FADE_ANCHORS: [(f64, f64); 3] = [(60.0, 5000.0), (120.0, 3000.0), (180.0, 1500.0)];

/// Fade-out length for a track at `tempo` BPM: 5 s at 60 BPM, 3 s at 120 BPM,
/// 1.5 s at 180 BPM, with tempo clamped to `[60, 180]`.
#[must_use]
pub fn fade_duration(tempo: f64) -> Duration {
    let (min_bpm, _) = FADE_ANCHORS[0];
    let (max_bpm, _) = FADE_ANCHORS[FADE_ANCHORS.len() - 1];
    let tempo = if tempo.is_finite() { tempo.clamp(min_bpm, max_bpm) } else { DEFAULT_TEMPO };

    let millis = FADE_ANCHORS
        .windows(2)
        .find(|pair| tempo <= pair[1].0)
        .map_or(FADE_ANCHORS[FADE_ANCHORS.len() - 1].1, |pair| {
            let ((bpm_a, ms_a), (bpm_b, ms_b)) = (pair[0], pair[1]);
            ms_a + (tempo - bpm_a) / (bpm_b - bpm_a) * (ms_b - ms_a)
        });
    Duration::from_millis(millis.round() as u64)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossfadeState {
    Idle,
    FadingOut,
    FadingIn,
}

/// Snapshot reported by the playback backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackState {
    pub position_ms: u64,
    pub duration_ms: u64,
    pub paused: bool,
    pub current_track_id: Option<String>,
}

/// The player the engine reads state from and sets volume on.
pub trait PlaybackBackend {
    /// Current playback state; `Ok(None)` when nothing is available.
    ///
    /// # Errors
    ///
    /// Any backend failure; the engine skips the tick.
    fn get_state(&mut self) -> Result<Option<PlaybackState>>;

    /// Set output volume, `0..=100`.
    ///
    /// # Errors
    ///
    /// Any backend failure; the engine logs it and carries on.
    fn set_volume(&mut self, volume: u8) -> Result<()>;
}

/// Called with the new track id whenever a track change is detected.
pub type TrackChangeListener = Box<dyn FnMut(&str) + Send>;

#[derive(Debug, Clone, Copy)]
struct Timer {
    due: Duration,
    interval: Duration,
}

impl Timer {
    fn reschedule(&mut self) {
        self.due += self.interval;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FadeKind {
    In,
    Out,
}

#[derive(Debug, Clone)]
struct Fade {
    kind: FadeKind,
    timer: Timer,
    step: u32,
    steps: u32,
    /// Volume the curve scales: the target for a fade-in, the starting
    /// volume for a fade-out.
    volume: u8,
    track_id: String,
}

impl Fade {
    fn volume_at(&self, progress: f64) -> u8 {
        let scale = f64::from(self.volume);
        let level = match self.kind {
            FadeKind::In => scale * progress * progress,
            FadeKind::Out => scale * (1.0 - progress) * (1.0 - progress),
        };
        level.round().clamp(0.0, 100.0) as u8
    }
}

pub struct CrossfadeEngine<B: PlaybackBackend> {
    backend: B,
    settings: CrossfadeSettings,
    state: CrossfadeState,
    now: Duration,
    poll: Option<Timer>,
    fade: Option<Fade>,
    volume: u8,
    last_track_id: Option<String>,
    faded_out_track: Option<String>,
    tempos: HashMap<String, f64>,
    listener: Option<TrackChangeListener>,
    destroyed: bool,
}

impl<B: PlaybackBackend> CrossfadeEngine<B> {
    #[must_use]
    pub fn new(backend: B, settings: CrossfadeSettings) -> Self {
        let volume = settings.target_volume.min(100);
        Self {
            backend,
            settings,
            state: CrossfadeState::Idle,
            now: Duration::ZERO,
            poll: None,
            fade: None,
            volume,
            last_track_id: None,
            faded_out_track: None,
            tempos: HashMap::new(),
            listener: None,
            destroyed: false,
        }
    }

    #[must_use]
    pub fn state(&self) -> CrossfadeState {
        self.state
    }

    /// Last volume the engine set (or its target before any fade).
    #[must_use]
    pub fn volume(&self) -> u8 {
        self.volume
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.settings.enabled
    }

    #[must_use]
    pub fn is_polling(&self) -> bool {
        self.poll.is_some()
    }

    /// Number of scheduled timers, 0 to 2.
    #[must_use]
    pub fn active_timer_count(&self) -> usize {
        usize::from(self.poll.is_some()) + usize::from(self.fade.is_some())
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn set_track_change_listener(&mut self, listener: TrackChangeListener) {
        self.listener = Some(listener);
    }

    /// Remember the tempo of a track so its fade-out matches it.
    pub fn set_track_tempo(&mut self, track_id: impl Into<String>, tempo: f64) {
        self.tempos.insert(track_id.into(), tempo);
    }

    /// Remember the tempo of every track in a journey.
    pub fn load_journey(&mut self, journey: &crate::generator::Journey) {
        for track in &journey.tracks {
            self.set_track_tempo(track.id(), track.features.tempo);
        }
    }

    /// Enable or disable fading. Disabling cancels any fade, goes idle, and
    /// restores the target volume if a fade left it anywhere else, including
    /// the silence after a finished fade-out.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.settings.enabled = enabled;
        if !enabled {
            self.cancel_fade();
            self.restore_volume();
        }
    }

    /// Start polling; the first poll fires at `now`.
    pub fn start_polling(&mut self, now: Duration) {
        if self.destroyed {
            warn!("Ignoring start on a destroyed crossfade engine");
            return;
        }
        if self.poll.is_some() {
            return;
        }
        self.now = self.now.max(now);
        let interval = Duration::from_millis(self.settings.poll_interval_ms.max(1));
        self.poll = Some(Timer { due: self.now, interval });
        debug!("Crossfade polling every {interval:?}");
    }

    /// Cancel the poll timer and any fade timer. Safe to call repeatedly.
    pub fn stop_polling(&mut self) {
        self.poll = None;
        self.cancel_fade();
    }

    /// Stop everything and drop the listener. Safe to call repeatedly.
    pub fn destroy(&mut self) {
        self.stop_polling();
        self.listener = None;
        self.destroyed = true;
    }

    /// Fire every timer due at or before `now`, in chronological order.
    pub fn advance_to(&mut self, now: Duration) {
        loop {
            let poll_due = self.poll.map(|t| t.due).filter(|&due| due <= now);
            let fade_due = self.fade.as_ref().map(|f| f.timer.due).filter(|&due| due <= now);

            match (poll_due, fade_due) {
                (Some(p), Some(f)) if f < p => self.run_fade_step(f),
                (Some(p), _) => self.run_poll(p),
                (None, Some(f)) => self.run_fade_step(f),
                (None, None) => break,
            }
        }
        self.now = self.now.max(now);
    }

    fn run_poll(&mut self, due: Duration) {
        self.now = due;
        if let Some(timer) = self.poll.as_mut() {
            timer.reschedule();
        }
        self.poll_tick();
    }

    fn poll_tick(&mut self) {
        let state = match self.backend.get_state() {
            Ok(Some(state)) => state,
            Ok(None) => {
                trace!("No playback state, skipping tick");
                return;
            }
            Err(e) => {
                warn!("Failed to read playback state: {e:#}");
                return;
            }
        };
        let Some(track_id) = state.current_track_id.clone() else {
            return;
        };

        if self.last_track_id.as_deref() != Some(track_id.as_str()) {
            self.on_track_change(track_id);
        } else if self.should_fade_out(&state, &track_id) {
            self.start_fade_out(track_id);
        }
    }

    fn on_track_change(&mut self, track_id: String) {
        debug!("Track changed to {track_id}");
        self.cancel_fade();
        self.faded_out_track = None;
        self.last_track_id = Some(track_id.clone());

        if self.settings.enabled {
            self.start_fade_in(track_id.clone());
        } else {
            self.restore_volume();
        }
        if let Some(listener) = self.listener.as_mut() {
            listener(&track_id);
        }
    }

    fn should_fade_out(&self, state: &PlaybackState, track_id: &str) -> bool {
        if !self.settings.enabled || self.state != CrossfadeState::Idle || state.paused {
            return false;
        }
        if self.faded_out_track.as_deref() == Some(track_id) {
            return false;
        }

        let duration = Duration::from_millis(state.duration_ms);
        let position = Duration::from_millis(state.position_ms);
        if duration < MIN_TRACK_DURATION || position < MIN_ELAPSED {
            return false;
        }
        let remaining = duration.saturating_sub(position);
        remaining <= self.fade_duration_for(track_id) + FADE_OUT_LEAD
    }

    fn fade_duration_for(&self, track_id: &str) -> Duration {
        fade_duration(self.tempos.get(track_id).copied().unwrap_or(DEFAULT_TEMPO))
    }

    fn start_fade_in(&mut self, track_id: String) {
        self.apply_volume(0);
        let interval = FADE_IN_DURATION / FADE_IN_STEPS;
        self.fade = Some(Fade {
            kind: FadeKind::In,
            timer: Timer { due: self.now + interval, interval },
            step: 0,
            steps: FADE_IN_STEPS,
            volume: self.settings.target_volume.min(100),
            track_id,
        });
        self.state = CrossfadeState::FadingIn;
    }

    fn start_fade_out(&mut self, track_id: String) {
        let duration = self.fade_duration_for(&track_id);
        let steps = ((duration.as_millis() as f64 / FADE_OUT_STEP.as_millis() as f64).round() as u32).max(1);
        let interval = duration / steps;
        debug!("Fading out {track_id} over {duration:?} in {steps} steps");

        self.fade = Some(Fade {
            kind: FadeKind::Out,
            timer: Timer { due: self.now + interval, interval },
            step: 0,
            steps,
            volume: self.volume,
            track_id,
        });
        self.state = CrossfadeState::FadingOut;
    }

    fn run_fade_step(&mut self, due: Duration) {
        self.now = due;
        let Some(fade) = self.fade.as_mut() else {
            return;
        };
        fade.step += 1;
        fade.timer.reschedule();

        let progress = f64::from(fade.step) / f64::from(fade.steps);
        let level = fade.volume_at(progress.min(1.0));
        let finished = fade.step >= fade.steps;
        let (kind, track_id) = (fade.kind, fade.track_id.clone());

        self.apply_volume(level);
        if finished {
            self.fade = None;
            self.state = CrossfadeState::Idle;
            if kind == FadeKind::Out {
                self.faded_out_track = Some(track_id);
            }
        }
    }

    fn cancel_fade(&mut self) {
        if self.fade.take().is_some() {
            trace!("Fade cancelled");
        }
        self.state = CrossfadeState::Idle;
    }

    fn restore_volume(&mut self) {
        let target = self.settings.target_volume.min(100);
        if self.volume != target {
            self.apply_volume(target);
        }
    }

    fn apply_volume(&mut self, volume: u8) {
        match self.backend.set_volume(volume) {
            Ok(()) => self.volume = volume,
            Err(e) => warn!("Failed to set volume to {volume}: {e:#}"),
        }
    }
}

impl<B: PlaybackBackend> Drop for CrossfadeEngine<B> {
    fn drop(&mut self) {
        self.destroy();
    }
}
