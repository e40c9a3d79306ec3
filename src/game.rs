//! Simulation driver
//!
//! Owns one session and the collaborators injected at construction
//! (best-score store, renderer, HUD). The host calls `signal` for input and
//! `frame` once per display frame with a monotonic timestamp.

use crate::persistence::ScoreStore;
use crate::platform::{FrameClock, Hud, HudSnapshot};
use crate::renderer::{FrameView, Renderer};
use crate::sim::{GameEvent, GamePhase, GameState, InputSignal, autopilot, tick};
use crate::tuning::Tuning;

/// Game instance holding the session and its collaborators
pub struct Game {
    state: GameState,
    clock: FrameClock,
    store: Box<dyn ScoreStore>,
    renderer: Box<dyn Renderer>,
    hud: Box<dyn Hud>,
    /// Demo mode: the autopilot supplies signals each frame
    pub autopilot: bool,
}

impl Game {
    /// Build a game, reading the initial best score from `store`
    pub fn new(
        seed: u64,
        tuning: Tuning,
        store: Box<dyn ScoreStore>,
        renderer: Box<dyn Renderer>,
        hud: Box<dyn Hud>,
    ) -> Self {
        let best_score = store.load();
        let clock = FrameClock::new(tuning.frame_ms, tuning.max_delta);
        log::info!("Game initialized with seed {} (best {})", seed, best_score);
        Self {
            state: GameState::with_tuning(seed, tuning).with_best_score(best_score),
            clock,
            store,
            renderer,
            hud,
            autopilot: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Deliver an input signal; entering Playing re-anchors the frame clock
    pub fn signal(&mut self, signal: InputSignal) {
        let before = self.state.phase;
        self.state.handle_signal(signal);
        let after = self.state.phase;
        if before != after {
            log::debug!("{:?} -> {:?} on {:?}", before, after, signal);
            if after == GamePhase::Playing {
                self.clock.reanchor();
            }
        }
        self.flush_events();
    }

    /// Run one display frame at `timestamp_ms`
    pub fn frame(&mut self, timestamp_ms: f64) {
        if self.autopilot {
            if let Some(signal) = autopilot::decide(&self.state) {
                self.signal(signal);
            }
        }

        if self.state.phase == GamePhase::Playing {
            if let Some(delta) = self.clock.advance(timestamp_ms) {
                tick(&mut self.state, delta);
            }
        }
        self.flush_events();

        self.renderer.render(&FrameView::capture(&self.state));
        self.hud.update(&HudSnapshot::capture(&self.state));
    }

    /// Drain session events into logs and persistence
    fn flush_events(&mut self) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::NewBestScore(score) => self.store.save(score),
                GameEvent::ShieldConsumed => log::info!("Shield consumed"),
                GameEvent::ObstaclePassed { id, score } => {
                    log::debug!("Obstacle {} passed, score {}", id, score)
                }
                GameEvent::RunStarted
                | GameEvent::PowerUpCollected(_)
                | GameEvent::PowerUpExpired(_)
                | GameEvent::GameOver { .. } => {}
            }
        }
    }
}
