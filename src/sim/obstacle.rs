//! Scrolling obstacles with a vertical gap

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::{Bounds, beam_collision, gap_column_collision, tilted_width};
use crate::tuning::Tuning;

/// Obstacle behavior (fixed at construction)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Plain column with a fixed gap
    Static,
    /// Gap center drifts up and down
    Moving,
    /// Column rocks around the gap center
    Tilting,
    /// Thin full-height beam, lethal whenever horizontally aligned
    Laser,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 4] = [
        ObstacleKind::Static,
        ObstacleKind::Moving,
        ObstacleKind::Tilting,
        ObstacleKind::Laser,
    ];
}

/// An obstacle entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub kind: ObstacleKind,
    /// Left edge
    pub x: f32,
    /// Vertical center of the gap
    pub gap_y: f32,
    pub width: f32,
    pub gap_size: f32,
    /// Scroll speed before the global multiplier
    pub speed: f32,
    /// Tilt angle (radians), only meaningful for `Tilting`
    pub rotation: f32,
    /// Per-instance sinusoid phase so obstacles desync
    pub phase: f32,
    /// Set once when the trailing edge clears the glider
    pub passed: bool,
    /// Set when a shield absorbed a hit; a disarmed obstacle no longer collides
    #[serde(default)]
    pub disarmed: bool,
}

impl Obstacle {
    pub fn new(id: u32, kind: ObstacleKind, x: f32, gap_y: f32, speed: f32, tuning: &Tuning) -> Self {
        Self {
            id,
            kind,
            x,
            gap_y,
            width: tuning.obstacle_width,
            gap_size: tuning.obstacle_gap,
            speed,
            rotation: 0.0,
            phase: 0.0,
            passed: false,
            disarmed: false,
        }
    }

    /// Spawn a random obstacle just past the right edge of the field
    pub fn spawn(id: u32, rng: &mut impl Rng, tuning: &Tuning) -> Self {
        let kind = ObstacleKind::ALL[rng.random_range(0..ObstacleKind::ALL.len())];
        let h = tuning.field_height;
        let gap_y = h * 0.3 + rng.random::<f32>() * h * 0.4;
        let speed = tuning.base_speed + rng.random::<f32>() * tuning.obstacle_speed_jitter;
        let x = tuning.field_width + tuning.obstacle_width;

        let mut obstacle = Self::new(id, kind, x, gap_y, speed, tuning);
        obstacle.phase = rng.random::<f32>() * std::f32::consts::TAU;
        obstacle.rotation = rng.random::<f32>() * std::f32::consts::FRAC_PI_4;
        obstacle
    }

    /// Scroll left and run the variant's motion
    pub fn update(&mut self, delta: f32, speed_multiplier: f32, time_ms: f64) {
        self.x -= self.speed * speed_multiplier * delta;
        match self.kind {
            ObstacleKind::Moving => {
                self.gap_y += crate::wave(time_ms, 600.0, self.phase) * 0.8 * delta;
            }
            ObstacleKind::Tilting => {
                self.rotation = crate::wave(time_ms, 750.0, self.phase) * 0.2;
            }
            ObstacleKind::Static | ObstacleKind::Laser => {}
        }
    }

    pub fn gap_top(&self) -> f32 {
        self.gap_y - self.gap_size / 2.0
    }

    pub fn gap_bottom(&self) -> f32 {
        self.gap_y + self.gap_size / 2.0
    }

    /// Horizontal midpoint (laser beam position)
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn trailing_edge(&self) -> f32 {
        self.x + self.width
    }

    /// Trailing edge has cleared `glider_x` and the obstacle has not scored yet
    pub fn ready_to_score(&self, glider_x: f32) -> bool {
        !self.passed && self.trailing_edge() < glider_x
    }

    /// Scrolled far enough left to be dropped
    pub fn is_offscreen(&self, despawn_x: f32) -> bool {
        self.trailing_edge() <= despawn_x
    }

    /// Variant-dispatched hit test against the glider box
    pub fn collides(&self, bounds: &Bounds, tuning: &Tuning) -> bool {
        if self.disarmed {
            return false;
        }
        match self.kind {
            ObstacleKind::Laser => beam_collision(bounds, self.center_x(), tuning.laser_half_width),
            ObstacleKind::Static | ObstacleKind::Moving => {
                gap_column_collision(bounds, self.x, self.width, self.gap_top(), self.gap_bottom())
            }
            ObstacleKind::Tilting => {
                let width = tilted_width(self.width, self.rotation, tuning.field_height);
                gap_column_collision(bounds, self.x, width, self.gap_top(), self.gap_bottom())
            }
        }
    }
}
