//! Sky Glider - A side-scrolling glider arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, session state)
//! - `game`: Frame driver wiring the simulation to its collaborators
//! - `renderer`: Read-only frame view and renderer contract
//! - `platform`: Frame clock, input signals, HUD contract
//! - `persistence`: Best-score storage
//! - `tuning`: Data-driven game balance

pub mod game;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use game::Game;
pub use tuning::Tuning;

/// Game configuration constants (source units: pixels, pixels per reference frame)
pub mod consts {
    /// Duration of one reference frame in milliseconds (60 Hz)
    pub const FRAME_MS: f32 = 16.666;
    /// Largest normalized delta applied in one update (guards tab-suspend stalls)
    pub const MAX_DELTA: f32 = 1.6;
    /// Spawn timers advance this many milliseconds per delta unit
    pub const SPAWN_MS_PER_DELTA: f32 = 16.0;

    /// Play field dimensions
    pub const FIELD_WIDTH: f32 = 480.0;
    pub const FIELD_HEIGHT: f32 = 640.0;

    /// Glider physics
    pub const GRAVITY: f32 = 0.35;
    pub const GRAVITY_DAMPING: f32 = 0.6;
    pub const FLAP_VELOCITY: f32 = -6.8;
    pub const GLIDER_X: f32 = 120.0;
    pub const GLIDER_RADIUS: f32 = 22.0;
    /// Cosmetic trail length (positions)
    pub const TRAIL_CAPACITY: usize = 12;

    /// Base horizontal scroll speed
    pub const BASE_SPEED: f32 = 2.4;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 80.0;
    pub const OBSTACLE_GAP: f32 = 160.0;
    pub const OBSTACLE_SPEED_JITTER: f32 = 1.2;
    pub const LASER_HALF_WIDTH: f32 = 4.0;
    pub const OBSTACLE_INTERVAL_MS: f32 = 1600.0;
    pub const OBSTACLE_DESPAWN_X: f32 = -120.0;

    /// Power-up defaults
    pub const POWERUP_RADIUS: f32 = 18.0;
    pub const POWERUP_PICKUP_TOLERANCE: f32 = 5.0;
    pub const POWERUP_DRIFT: f32 = 1.2;
    pub const POWERUP_INTERVAL_MS: f32 = 5500.0;
    pub const POWERUP_DESPAWN_X: f32 = -40.0;
}

/// Phase of a sinusoid driven by simulation time (milliseconds)
#[inline]
pub fn wave(time_ms: f64, period_ms: f64, offset: f32) -> f32 {
    ((time_ms / period_ms) as f32 + offset).sin()
}
