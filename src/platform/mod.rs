//! Platform abstraction layer
//!
//! Handles host-facing concerns the simulation never touches directly:
//! - Time: normalizing frame timestamps into clamped deltas
//! - Input: mapping keys and pointers to signals
//! - HUD: score/power-up/overlay text pushed to the host after each frame

pub mod clock;
pub mod hud;
pub mod input;

pub use clock::FrameClock;
pub use hud::{Hud, HudSnapshot};
pub use input::signal_for_key;
