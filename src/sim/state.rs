//! Session state and the phase state machine
//!
//! One `GameState` is one play-through plus the best score carried between runs.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::effects::{ActiveEffect, PowerUpKind};
use super::glider::Glider;
use super::obstacle::Obstacle;
use super::parallax::ParallaxLayer;
use super::powerup::PowerUp;
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first flap/start
    #[default]
    Idle,
    /// Active gameplay
    Playing,
    /// Frozen; only drawing continues
    Paused,
    /// Run ended
    GameOver,
}

/// Discrete player intents delivered by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputSignal {
    Flap,
    Start,
    Pause,
    Resume,
}

/// Notable things that happened during a tick, drained by the driver
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    RunStarted,
    ObstaclePassed { id: u32, score: u64 },
    PowerUpCollected(PowerUpKind),
    PowerUpExpired(PowerUpKind),
    ShieldConsumed,
    GameOver { score: u64 },
    NewBestScore(u64),
}

fn default_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

/// Complete session state (deterministic for a given seed and delta sequence)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub score: u64,
    /// Best completed-run score (loaded from and written back to persistence)
    pub best_score: u64,
    pub score_multiplier: u64,
    pub speed_multiplier: f32,
    /// Spawn accumulators (ms)
    pub time_since_obstacle_ms: f32,
    pub time_since_power_up_ms: f32,
    /// Simulation clock: sum of deltas in reference-frame milliseconds
    pub sim_time_ms: f64,
    /// Ticks executed this run
    pub time_ticks: u64,
    pub glider: Glider,
    /// Active obstacles (spawn order)
    pub obstacles: Vec<Obstacle>,
    /// Active pickups (spawn order)
    pub power_ups: Vec<PowerUp>,
    pub active_effect: Option<ActiveEffect>,
    /// Background decoration (not gameplay-affecting)
    pub layers: Vec<ParallaxLayer>,
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Gameplay RNG (spawns, obstacle phases)
    #[serde(skip, default = "default_rng")]
    pub(crate) rng: Pcg32,
    /// Decoration RNG, kept apart so cosmetics never shift gameplay draws
    #[serde(skip, default = "default_rng")]
    pub(crate) decor_rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// Create an idle session with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut decor_rng = Pcg32::seed_from_u64(seed ^ 0x5eed_dec0);
        let layers = ParallaxLayer::default_layers(&mut decor_rng, &tuning);
        Self {
            seed,
            glider: Glider::new(&tuning),
            tuning,
            phase: GamePhase::Idle,
            score: 0,
            best_score: 0,
            score_multiplier: 1,
            speed_multiplier: 1.0,
            time_since_obstacle_ms: 0.0,
            time_since_power_up_ms: 0.0,
            sim_time_ms: 0.0,
            time_ticks: 0,
            obstacles: Vec::new(),
            power_ups: Vec::new(),
            active_effect: None,
            layers,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            decor_rng,
            next_id: 1,
        }
    }

    /// Seed the best score read from persistence
    pub fn with_best_score(mut self, best_score: u64) -> Self {
        self.best_score = best_score;
        self
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Interpret a signal relative to the current phase; invalid ones are ignored
    pub fn handle_signal(&mut self, signal: InputSignal) {
        match (signal, self.phase) {
            (InputSignal::Flap, GamePhase::Playing) => {
                self.glider.flap(self.tuning.flap_velocity);
            }
            (InputSignal::Flap, GamePhase::Idle) => {
                self.start();
                self.glider.flap(self.tuning.flap_velocity);
            }
            (InputSignal::Flap, GamePhase::GameOver)
            | (InputSignal::Start, GamePhase::Idle | GamePhase::GameOver) => self.start(),
            (InputSignal::Pause, GamePhase::Playing) => self.pause(),
            (InputSignal::Resume, GamePhase::Paused) => self.resume(),
            _ => {}
        }
    }

    /// Reset every entity, timer, and multiplier and begin playing
    pub fn start(&mut self) {
        let spawn_y = self.tuning.spawn_y();
        self.glider.reset(spawn_y);
        self.obstacles.clear();
        self.power_ups.clear();
        self.active_effect = None;
        self.score = 0;
        self.score_multiplier = 1;
        self.speed_multiplier = 1.0;
        self.time_since_obstacle_ms = 0.0;
        self.time_since_power_up_ms = 0.0;
        self.sim_time_ms = 0.0;
        self.time_ticks = 0;
        self.layers = ParallaxLayer::default_layers(&mut self.decor_rng, &self.tuning);
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::RunStarted);
        log::info!("Run started (best {})", self.best_score);
    }

    pub fn pause(&mut self) {
        if self.phase == GamePhase::Playing {
            self.phase = GamePhase::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.phase == GamePhase::Paused {
            self.phase = GamePhase::Playing;
        }
    }

    /// End the run and fold the score into the best score
    pub fn game_over(&mut self) {
        self.phase = GamePhase::GameOver;
        self.events.push(GameEvent::GameOver { score: self.score });
        log::info!("Game over with score {}", self.score);
        if self.score > self.best_score {
            self.best_score = self.score;
            self.events.push(GameEvent::NewBestScore(self.score));
            log::info!("New best score: {}", self.score);
        }
    }

    /// Activate a power-up, reverting any active one first (no stacking)
    pub fn activate_power_up(&mut self, kind: PowerUpKind) {
        if let Some(previous) = self.active_effect.take() {
            previous.kind.clear(self);
            log::debug!("{} replaced by {}", previous.kind.name(), kind.name());
        }
        kind.apply(self);
        self.active_effect = Some(ActiveEffect::new(kind, self.sim_time_ms));
        self.events.push(GameEvent::PowerUpCollected(kind));
        log::info!("Power-up: {}", kind.name());
    }

    /// Revert and drop the active power-up, if any
    pub fn clear_power_up(&mut self) {
        if let Some(effect) = self.active_effect.take() {
            effect.kind.clear(self);
            self.events.push(GameEvent::PowerUpExpired(effect.kind));
            log::info!("Power-up expired: {}", effect.kind.name());
        }
    }

    /// Spend the shield on a would-be-fatal contact; false if unshielded
    pub fn consume_shield(&mut self) -> bool {
        if !self.glider.shielded {
            return false;
        }
        self.glider.shielded = false;
        self.events.push(GameEvent::ShieldConsumed);
        log::debug!("Shield absorbed a hit");
        true
    }

    /// Current game speed used for glider banking
    pub fn game_speed(&self) -> f32 {
        self.tuning.base_speed * self.speed_multiplier
    }

    /// Take the events produced since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
