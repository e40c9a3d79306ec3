//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time comes only from the deltas passed to `tick`
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod effects;
pub mod glider;
pub mod obstacle;
pub mod parallax;
pub mod powerup;
pub mod state;
pub mod tick;

pub use collision::Bounds;
pub use effects::{ActiveEffect, PowerUpKind};
pub use glider::Glider;
pub use obstacle::{Obstacle, ObstacleKind};
pub use parallax::ParallaxLayer;
pub use powerup::PowerUp;
pub use state::{GameEvent, GamePhase, GameState, InputSignal};
pub use tick::tick;
