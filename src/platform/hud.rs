//! Score display and overlay contract

use crate::sim::{GamePhase, GameState};

/// Text the host shows around the play field, refreshed after every frame
#[derive(Debug, Clone, PartialEq)]
pub struct HudSnapshot {
    pub phase: GamePhase,
    pub score: u64,
    pub best_score: u64,
    pub score_text: String,
    pub best_text: String,
    pub power_up_text: String,
    /// Centered overlay message; `None` while playing
    pub overlay: Option<String>,
}

impl HudSnapshot {
    pub fn capture(state: &GameState) -> Self {
        let power_up_text = match &state.active_effect {
            Some(effect) => effect.status_text(),
            None => "Power-up: None".to_string(),
        };
        let overlay = match state.phase {
            GamePhase::Idle => Some("Tap Start or press Space to fly".to_string()),
            GamePhase::Playing => None,
            GamePhase::Paused => Some("Paused".to_string()),
            GamePhase::GameOver => Some(format!("Game Over\nScore: {}", state.score)),
        };
        Self {
            phase: state.phase,
            score: state.score,
            best_score: state.best_score,
            score_text: format!("Score: {}", state.score),
            best_text: format!("Best: {}", state.best_score),
            power_up_text,
            overlay,
        }
    }
}

/// Host-side score display / overlay
pub trait Hud {
    fn update(&mut self, hud: &HudSnapshot);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::PowerUpKind;

    #[test]
    fn test_idle_overlay() {
        let state = GameState::new(1).with_best_score(12);
        let hud = HudSnapshot::capture(&state);
        assert_eq!(hud.score_text, "Score: 0");
        assert_eq!(hud.best_text, "Best: 12");
        assert_eq!(hud.power_up_text, "Power-up: None");
        assert_eq!(hud.overlay.as_deref(), Some("Tap Start or press Space to fly"));
    }

    #[test]
    fn test_playing_with_power_up() {
        let mut state = GameState::new(1);
        state.start();
        state.activate_power_up(PowerUpKind::SlowMotion);
        let hud = HudSnapshot::capture(&state);
        assert_eq!(hud.overlay, None);
        assert_eq!(hud.power_up_text, "Power-up: Slow Motion (5.0s)");
    }

    #[test]
    fn test_game_over_overlay() {
        let mut state = GameState::new(1);
        state.start();
        state.score = 7;
        state.game_over();
        let hud = HudSnapshot::capture(&state);
        assert_eq!(hud.overlay.as_deref(), Some("Game Over\nScore: 7"));
        assert_eq!(hud.best_text, "Best: 7");
    }
}
