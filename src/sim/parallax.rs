//! Decorative parallax background
//!
//! Pure visual state. Shares the tick cadence but never touches gameplay, and
//! recycles items with its own RNG so it cannot perturb spawns.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// One scrolling band of background items
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParallaxLayer {
    /// Scroll speed (pixels per reference frame)
    pub speed: f32,
    /// Item size, also the recycle margin
    pub size: f32,
    /// Vertical draw offset
    pub offset: f32,
    /// Vertical wander per reference frame
    pub amplitude: f32,
    pub items: Vec<Vec2>,
}

impl ParallaxLayer {
    pub fn new(speed: f32, size: f32, offset: f32, amplitude: f32, rng: &mut impl Rng, tuning: &Tuning) -> Self {
        let count = (tuning.field_width / size).ceil() as usize + 2;
        let items = (0..count)
            .map(|i| {
                Vec2::new(
                    i as f32 * size + rng.random::<f32>() * 60.0,
                    rng.random::<f32>() * tuning.field_height * 0.6,
                )
            })
            .collect();
        Self {
            speed,
            size,
            offset,
            amplitude,
            items,
        }
    }

    /// The three default layers, far to near
    pub fn default_layers(rng: &mut impl Rng, tuning: &Tuning) -> Vec<Self> {
        vec![
            Self::new(0.2, 60.0, 80.0, 0.2, &mut *rng, tuning),
            Self::new(0.5, 48.0, 120.0, 0.3, &mut *rng, tuning),
            Self::new(1.2, 36.0, 180.0, 0.4, &mut *rng, tuning),
        ]
    }

    pub fn update(&mut self, delta: f32, speed_multiplier: f32, time_ms: f64, rng: &mut impl Rng, tuning: &Tuning) {
        let step = self.speed * speed_multiplier * delta;
        for item in &mut self.items {
            item.x -= step;
            item.y += crate::wave(time_ms, 1000.0, item.x / 80.0) * self.amplitude * delta;
            if item.x < -self.size {
                item.x = tuning.field_width + self.size;
                item.y = rng.random::<f32>() * tuning.field_height * 0.6;
            }
        }
    }
}
