//! Demo-mode pilot
//!
//! Picks flap signals from the current state so the game can play itself
//! (headless runs, attract mode). Deterministic: same state, same decision.

use super::obstacle::ObstacleKind;
use super::state::{GamePhase, GameState, InputSignal};

/// How far below the target height the glider may sink before flapping
const SINK_MARGIN: f32 = 18.0;
/// Never flap with the glider's top edge this close to the ceiling
const CEILING_MARGIN: f32 = 40.0;
/// Look-ahead window for chasing pickups instead of gaps
const PICKUP_WINDOW: f32 = 160.0;

/// Decide what signal (if any) to send this frame
pub fn decide(state: &GameState) -> Option<InputSignal> {
    match state.phase {
        GamePhase::Idle => Some(InputSignal::Flap),
        GamePhase::Playing => {
            let glider = &state.glider;
            let bounds = glider.bounds();
            if bounds.top() < CEILING_MARGIN || glider.vy < 0.0 {
                return None;
            }
            (glider.pos.y > target_height(state) + SINK_MARGIN).then_some(InputSignal::Flap)
        }
        GamePhase::Paused | GamePhase::GameOver => None,
    }
}

/// Height to hold: the next gap ahead, a nearby pickup, or mid-field
fn target_height(state: &GameState) -> f32 {
    let glider = &state.glider;
    let left = glider.bounds().left();

    // Lasers are unavoidable without a shield, so aim past them
    let next_gap = state
        .obstacles
        .iter()
        .filter(|o| o.trailing_edge() > left && o.kind != ObstacleKind::Laser && !o.disarmed)
        .min_by(|a, b| a.x.total_cmp(&b.x));

    let nearby_pickup = state
        .power_ups
        .iter()
        .filter(|p| p.active && p.pos.x > glider.pos.x && p.pos.x - glider.pos.x < PICKUP_WINDOW)
        .min_by(|a, b| a.pos.x.total_cmp(&b.pos.x));

    match (next_gap, nearby_pickup) {
        (Some(gap), Some(pickup)) if pickup.pos.x < gap.x => pickup.pos.y,
        (Some(gap), _) => gap.gap_y,
        (None, Some(pickup)) => pickup.pos.y,
        (None, None) => state.tuning.spawn_y(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::obstacle::Obstacle;
    use crate::sim::tick::tick;

    #[test]
    fn test_idle_starts_with_flap() {
        let state = GameState::new(1);
        assert_eq!(decide(&state), Some(InputSignal::Flap));
    }

    #[test]
    fn test_flaps_when_sinking_below_gap() {
        let mut state = GameState::new(1);
        state.start();
        let id = state.next_entity_id();
        let obstacle = Obstacle::new(id, ObstacleKind::Static, 300.0, 250.0, 2.4, &state.tuning);
        state.obstacles.push(obstacle);
        state.glider.vy = 1.0;
        assert_eq!(decide(&state), Some(InputSignal::Flap));

        // Already climbing
        state.glider.vy = -2.0;
        assert_eq!(decide(&state), None);
    }

    #[test]
    fn test_keeps_glider_alive_without_obstacles() {
        let tuning = crate::Tuning {
            obstacle_interval_ms: f32::MAX,
            powerup_interval_ms: f32::MAX,
            ..Default::default()
        };
        let mut state = GameState::with_tuning(3, tuning);
        for _ in 0..1200 {
            if let Some(signal) = decide(&state) {
                state.handle_signal(signal);
            }
            tick(&mut state, 1.0);
        }
        assert_eq!(state.phase, GamePhase::Playing);
    }
}
