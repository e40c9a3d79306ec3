//! Power-up pickups drifting across the field

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::pickup_collision;
use super::effects::PowerUpKind;
use super::glider::Glider;
use crate::tuning::Tuning;

/// A pickup entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    pub id: u32,
    pub kind: PowerUpKind,
    pub pos: Vec2,
    pub radius: f32,
    /// Cleared on pickup; inactive pickups are swept the same tick
    pub active: bool,
}

impl PowerUp {
    pub fn new(id: u32, kind: PowerUpKind, pos: Vec2, tuning: &Tuning) -> Self {
        Self {
            id,
            kind,
            pos,
            radius: tuning.powerup_radius,
            active: true,
        }
    }

    /// Spawn a random pickup just past the right edge, in the middle half of the field
    pub fn spawn(id: u32, rng: &mut impl Rng, tuning: &Tuning) -> Self {
        let kind = PowerUpKind::ALL[rng.random_range(0..PowerUpKind::ALL.len())];
        let y = tuning.field_height * (0.25 + rng.random::<f32>() * 0.5);
        let x = tuning.field_width + 40.0;
        Self::new(id, kind, Vec2::new(x, y), tuning)
    }

    /// Drift left faster than the scenery, bobbing vertically (cosmetic)
    pub fn update(&mut self, delta: f32, speed_multiplier: f32, time_ms: f64, tuning: &Tuning) {
        self.pos.x -= tuning.base_speed * speed_multiplier * delta * tuning.powerup_drift;
        self.pos.y += crate::wave(time_ms, 300.0, self.pos.x / 50.0) * 0.4 * delta;
    }

    pub fn collides(&self, glider: &Glider, tuning: &Tuning) -> bool {
        pickup_collision(
            glider.pos,
            glider.radius,
            self.pos,
            self.radius,
            tuning.powerup_pickup_tolerance,
        )
    }

    /// Consume the pickup; returns its kind only the first time
    pub fn take(&mut self) -> Option<PowerUpKind> {
        if !self.active {
            return None;
        }
        self.active = false;
        Some(self.kind)
    }

    /// Still collectible and on screen
    pub fn is_live(&self, despawn_x: f32) -> bool {
        self.active && self.pos.x > despawn_x
    }
}
