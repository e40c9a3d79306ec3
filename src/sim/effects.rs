//! Power-up effect catalog
//!
//! Each kind knows how to apply itself to a session, how to describe its
//! remaining time, and how to revert what it applied. At most one effect is
//! active at a time; see `GameState::activate_power_up`.

use serde::{Deserialize, Serialize};

use super::state::GameState;

/// Global speed multiplier while Slow Motion is active
pub const SLOW_MOTION_MULTIPLIER: f32 = 0.55;
/// Score multiplier while Score Surge is active
pub const SCORE_SURGE_MULTIPLIER: u64 = 2;

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    Shield,
    SlowMotion,
    ScoreSurge,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 3] = [
        PowerUpKind::Shield,
        PowerUpKind::SlowMotion,
        PowerUpKind::ScoreSurge,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PowerUpKind::Shield => "Shield",
            PowerUpKind::SlowMotion => "Slow Motion",
            PowerUpKind::ScoreSurge => "Score Surge",
        }
    }

    /// Short label used in the HUD countdown
    fn hud_label(&self) -> &'static str {
        match self {
            PowerUpKind::Shield => "Shield",
            PowerUpKind::SlowMotion => "Slow Motion",
            PowerUpKind::ScoreSurge => "Score x2",
        }
    }

    /// CSS color for rendering
    pub fn color(&self) -> &'static str {
        match self {
            PowerUpKind::Shield => "#4cd964",
            PowerUpKind::SlowMotion => "#ffd31a",
            PowerUpKind::ScoreSurge => "#ff6b81",
        }
    }

    /// Effect duration in simulation milliseconds
    pub fn duration_ms(&self) -> f64 {
        match self {
            PowerUpKind::Shield => 6000.0,
            PowerUpKind::SlowMotion => 5000.0,
            PowerUpKind::ScoreSurge => 7000.0,
        }
    }

    pub fn apply(&self, state: &mut GameState) {
        match self {
            PowerUpKind::Shield => state.glider.shielded = true,
            PowerUpKind::SlowMotion => state.speed_multiplier = SLOW_MOTION_MULTIPLIER,
            PowerUpKind::ScoreSurge => state.score_multiplier = SCORE_SURGE_MULTIPLIER,
        }
    }

    /// Display text for the remaining time; no gameplay effect
    pub fn status_text(&self, remaining_ms: f64) -> String {
        format!(
            "Power-up: {} ({:.1}s)",
            self.hud_label(),
            remaining_ms / 1000.0
        )
    }

    pub fn clear(&self, state: &mut GameState) {
        match self {
            PowerUpKind::Shield => state.glider.shielded = false,
            PowerUpKind::SlowMotion => state.speed_multiplier = 1.0,
            PowerUpKind::ScoreSurge => state.score_multiplier = 1,
        }
    }
}

/// The single active effect slot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActiveEffect {
    pub kind: PowerUpKind,
    /// Simulation time (ms) at which the effect ends
    pub expires_at_ms: f64,
    /// Remaining time as of the last tick
    pub remaining_ms: f64,
}

impl ActiveEffect {
    pub fn new(kind: PowerUpKind, now_ms: f64) -> Self {
        Self {
            kind,
            expires_at_ms: now_ms + kind.duration_ms(),
            remaining_ms: kind.duration_ms(),
        }
    }

    pub fn status_text(&self) -> String {
        self.kind.status_text(self.remaining_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_durations() {
        assert_eq!(PowerUpKind::Shield.duration_ms(), 6000.0);
        assert_eq!(PowerUpKind::SlowMotion.duration_ms(), 5000.0);
        assert_eq!(PowerUpKind::ScoreSurge.duration_ms(), 7000.0);
    }

    #[test]
    fn test_apply_then_clear_restores_baseline() {
        for kind in PowerUpKind::ALL {
            let mut state = GameState::new(1);
            kind.apply(&mut state);
            kind.clear(&mut state);
            assert_eq!(state.speed_multiplier, 1.0);
            assert_eq!(state.score_multiplier, 1);
            assert!(!state.glider.shielded);
        }
    }

    #[test]
    fn test_apply_effects() {
        let mut state = GameState::new(1);
        PowerUpKind::SlowMotion.apply(&mut state);
        assert!(state.speed_multiplier < 1.0);
        PowerUpKind::ScoreSurge.apply(&mut state);
        assert_eq!(state.score_multiplier, 2);
        PowerUpKind::Shield.apply(&mut state);
        assert!(state.glider.shielded);
    }

    #[test]
    fn test_status_text() {
        assert_eq!(
            PowerUpKind::Shield.status_text(5940.0),
            "Power-up: Shield (5.9s)"
        );
        assert_eq!(
            PowerUpKind::ScoreSurge.status_text(6000.0),
            "Power-up: Score x2 (6.0s)"
        );
    }

    #[test]
    fn test_active_effect_expiry() {
        let effect = ActiveEffect::new(PowerUpKind::SlowMotion, 1000.0);
        assert_eq!(effect.expires_at_ms, 6000.0);
        assert_eq!(effect.remaining_ms, 5000.0);
    }
}
