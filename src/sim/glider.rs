//! The player-controlled glider

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Bounds;
use crate::tuning::Tuning;

/// Horizontal offset of trail points behind the glider
const TRAIL_OFFSET_X: f32 = 12.0;

/// The glider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Glider {
    /// Position (x stays fixed, y integrates freely)
    pub pos: Vec2,
    /// Vertical velocity (negative = up)
    pub vy: f32,
    /// Visual banking angle (radians)
    pub rotation: f32,
    /// One-shot collision immunity
    pub shielded: bool,
    pub radius: f32,
    /// Recent positions for rendering (oldest first, not gameplay-affecting)
    #[serde(skip)]
    pub trail: VecDeque<Vec2>,
    #[serde(skip)]
    trail_capacity: usize,
}

impl Glider {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.glider_x, tuning.spawn_y()),
            vy: 0.0,
            rotation: 0.0,
            shielded: false,
            radius: tuning.glider_radius,
            trail: VecDeque::with_capacity(tuning.trail_capacity),
            trail_capacity: tuning.trail_capacity,
        }
    }

    /// Replace vertical velocity with the flap impulse
    pub fn flap(&mut self, flap_velocity: f32) {
        self.vy = flap_velocity;
    }

    /// Integrate gravity, then position, then bank toward the velocity
    pub fn update(&mut self, delta: f32, game_speed: f32, tuning: &Tuning) {
        self.vy += tuning.gravity * delta * tuning.gravity_damping;
        self.pos.y += self.vy * delta;
        self.rotation = self.vy.atan2(game_speed * 16.0) * 0.8;
    }

    /// Push a cosmetic trail point, dropping the oldest when full
    pub fn record_trail(&mut self, time_ms: f64) {
        if self.trail_capacity == 0 {
            return;
        }
        if self.trail.len() == self.trail_capacity {
            self.trail.pop_front();
        }
        let wobble = crate::wave(time_ms, 80.0, 0.0) * 2.0;
        self.trail
            .push_back(Vec2::new(self.pos.x - TRAIL_OFFSET_X, self.pos.y + wobble));
    }

    /// Back to spawn height, at rest, unshielded
    pub fn reset(&mut self, y: f32) {
        self.pos.y = y;
        self.vy = 0.0;
        self.rotation = 0.0;
        self.shielded = false;
        self.trail.clear();
    }

    /// The sole collision primitive
    pub fn bounds(&self) -> Bounds {
        Bounds::centered(self.pos, self.radius)
    }
}
