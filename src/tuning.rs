//! Data-driven game balance
//!
//! Every numeric knob the simulation reads lives here. Defaults mirror
//! `crate::consts`; partial JSON documents override only the fields they name.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Balance and play-field configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Play field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Frame clock ===
    /// Reference frame duration used to normalize elapsed time
    pub frame_ms: f32,
    /// Upper bound on a single normalized delta
    pub max_delta: f32,
    /// Milliseconds credited to spawn timers per delta unit
    pub spawn_ms_per_delta: f32,

    // === Glider ===
    pub gravity: f32,
    pub gravity_damping: f32,
    pub flap_velocity: f32,
    pub glider_x: f32,
    pub glider_radius: f32,
    pub trail_capacity: usize,

    // === Scrolling ===
    pub base_speed: f32,

    // === Obstacles ===
    pub obstacle_width: f32,
    pub obstacle_gap: f32,
    pub obstacle_speed_jitter: f32,
    pub laser_half_width: f32,
    /// Spawn interval at speed multiplier 1.0 (scaled inversely by it)
    pub obstacle_interval_ms: f32,
    pub obstacle_despawn_x: f32,

    // === Power-ups ===
    pub powerup_radius: f32,
    pub powerup_pickup_tolerance: f32,
    /// Power-up scroll speed as a multiple of base speed
    pub powerup_drift: f32,
    pub powerup_interval_ms: f32,
    pub powerup_despawn_x: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            frame_ms: FRAME_MS,
            max_delta: MAX_DELTA,
            spawn_ms_per_delta: SPAWN_MS_PER_DELTA,

            gravity: GRAVITY,
            gravity_damping: GRAVITY_DAMPING,
            flap_velocity: FLAP_VELOCITY,
            glider_x: GLIDER_X,
            glider_radius: GLIDER_RADIUS,
            trail_capacity: TRAIL_CAPACITY,

            base_speed: BASE_SPEED,

            obstacle_width: OBSTACLE_WIDTH,
            obstacle_gap: OBSTACLE_GAP,
            obstacle_speed_jitter: OBSTACLE_SPEED_JITTER,
            laser_half_width: LASER_HALF_WIDTH,
            obstacle_interval_ms: OBSTACLE_INTERVAL_MS,
            obstacle_despawn_x: OBSTACLE_DESPAWN_X,

            powerup_radius: POWERUP_RADIUS,
            powerup_pickup_tolerance: POWERUP_PICKUP_TOLERANCE,
            powerup_drift: POWERUP_DRIFT,
            powerup_interval_ms: POWERUP_INTERVAL_MS,
            powerup_despawn_x: POWERUP_DESPAWN_X,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Parse tuning, falling back to defaults on malformed or out-of-range input
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(tuning) => match tuning.validate() {
                Ok(()) => tuning,
                Err(reason) => {
                    log::warn!("Invalid tuning ({}), using defaults", reason);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Invalid tuning ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Reject values the frame clock or physics cannot run with
    pub fn validate(&self) -> Result<(), String> {
        let fields = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("frame_ms", self.frame_ms),
            ("max_delta", self.max_delta),
            ("spawn_ms_per_delta", self.spawn_ms_per_delta),
            ("gravity", self.gravity),
            ("gravity_damping", self.gravity_damping),
            ("flap_velocity", self.flap_velocity),
            ("glider_x", self.glider_x),
            ("glider_radius", self.glider_radius),
            ("base_speed", self.base_speed),
            ("obstacle_width", self.obstacle_width),
            ("obstacle_gap", self.obstacle_gap),
            ("obstacle_speed_jitter", self.obstacle_speed_jitter),
            ("laser_half_width", self.laser_half_width),
            ("obstacle_despawn_x", self.obstacle_despawn_x),
            ("powerup_radius", self.powerup_radius),
            ("powerup_pickup_tolerance", self.powerup_pickup_tolerance),
            ("powerup_drift", self.powerup_drift),
            ("powerup_despawn_x", self.powerup_despawn_x),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(format!("{} must be finite", name));
        }
        // Spawn intervals may be infinite (spawning disabled) but never NaN
        if self.obstacle_interval_ms.is_nan() || self.powerup_interval_ms.is_nan() {
            return Err("spawn intervals must not be NaN".to_string());
        }
        if self.frame_ms <= 0.0 {
            return Err(format!("frame_ms must be positive, got {}", self.frame_ms));
        }
        if self.max_delta < 0.0 {
            return Err(format!("max_delta must not be negative, got {}", self.max_delta));
        }
        Ok(())
    }

    /// Vertical center of the play field (glider spawn height)
    pub fn spawn_y(&self) -> f32 {
        self.field_height / 2.0
    }

    /// Obstacle spawn interval for the current speed multiplier
    pub fn obstacle_interval_for(&self, speed_multiplier: f32) -> f32 {
        self.obstacle_interval_ms / speed_multiplier
    }
}
