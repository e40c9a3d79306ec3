//! Rendering contract
//!
//! The simulation owns no drawing code. Each frame the driver hands a
//! borrowed, read-only view of the session to a `Renderer`.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;

use crate::sim::{GamePhase, GameState, Glider, Obstacle, ParallaxLayer, PowerUp};

/// Read-only snapshot of everything a renderer may draw
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub phase: GamePhase,
    pub field_width: f32,
    pub field_height: f32,
    pub glider: &'a Glider,
    pub obstacles: &'a [Obstacle],
    pub power_ups: &'a [PowerUp],
    pub layers: &'a [ParallaxLayer],
}

impl<'a> FrameView<'a> {
    pub fn capture(state: &'a GameState) -> Self {
        Self {
            phase: state.phase,
            field_width: state.tuning.field_width,
            field_height: state.tuning.field_height,
            glider: &state.glider,
            obstacles: &state.obstacles,
            power_ups: &state.power_ups,
            layers: &state.layers,
        }
    }
}

/// Produces a frame from a view of the session
pub trait Renderer {
    fn render(&mut self, frame: &FrameView<'_>);
}

/// Renderer for headless runs: traces a one-line summary per frame
#[derive(Debug, Default)]
pub struct LogRenderer {
    frames: u64,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for LogRenderer {
    fn render(&mut self, frame: &FrameView<'_>) {
        self.frames += 1;
        log::trace!(
            "frame {} {:?}: glider y={:.1} rot={:.2}{} obstacles={} power-ups={}",
            self.frames,
            frame.phase,
            frame.glider.pos.y,
            frame.glider.rotation,
            if frame.glider.shielded { " [shield]" } else { "" },
            frame.obstacles.len(),
            frame.power_ups.len(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_borrows_session() {
        let mut state = GameState::new(1);
        state.start();
        let view = FrameView::capture(&state);
        assert_eq!(view.phase, GamePhase::Playing);
        assert_eq!(view.layers.len(), 3);
        assert_eq!(view.field_height, state.tuning.field_height);

        let mut renderer = LogRenderer::new();
        renderer.render(&view);
        renderer.render(&view);
        assert_eq!(renderer.frames(), 2);
    }
}
