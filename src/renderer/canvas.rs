//! Canvas 2D renderer for the browser build
//!
//! Flat-color shapes only; gameplay never depends on anything drawn here.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::{FrameView, Renderer};
use crate::sim::{Glider, Obstacle, ObstacleKind, PowerUp};

const SKY: &str = "#9fd3ff";
const GROUND: &str = "#74c69d";
const COLUMN: &str = "#2ecc71";
const LASER: &str = "rgba(255, 82, 82, 0.9)";
const GLIDER_BODY: &str = "#4cb9ff";
const GLIDER_WING: &str = "#0f4275";
const SHIELD_RING: &str = "rgba(76, 217, 100, 0.8)";
const LAYER_COLORS: [&str; 3] = [
    "rgba(255,255,255,0.5)",
    "rgba(255,255,255,0.7)",
    "rgba(255,255,255,0.9)",
];

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn draw(&self, frame: &FrameView<'_>) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        let w = f64::from(frame.field_width);
        let h = f64::from(frame.field_height);

        ctx.clear_rect(0.0, 0.0, w, h);
        ctx.set_fill_style_str(SKY);
        ctx.fill_rect(0.0, 0.0, w, h);

        for (layer, color) in frame.layers.iter().zip(LAYER_COLORS.iter().cycle()) {
            ctx.set_fill_style_str(color);
            let size = f64::from(layer.size);
            for item in &layer.items {
                ctx.begin_path();
                ctx.ellipse(
                    f64::from(item.x),
                    f64::from(item.y + layer.offset),
                    size,
                    size * 0.6,
                    0.0,
                    0.0,
                    TAU,
                )?;
                ctx.fill();
            }
        }

        ctx.set_fill_style_str(GROUND);
        ctx.fill_rect(0.0, h - 20.0, w, 20.0);

        for obstacle in frame.obstacles {
            self.draw_obstacle(obstacle, h)?;
        }
        for power_up in frame.power_ups {
            self.draw_power_up(power_up)?;
        }
        self.draw_glider(frame.glider)
    }

    fn draw_obstacle(&self, obstacle: &Obstacle, h: f64) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        let x = f64::from(obstacle.x);
        let width = f64::from(obstacle.width);
        let top = f64::from(obstacle.gap_top());
        let bottom = f64::from(obstacle.gap_bottom());

        ctx.save();
        ctx.set_fill_style_str(COLUMN);
        if obstacle.kind == ObstacleKind::Tilting {
            ctx.translate(x + width / 2.0, f64::from(obstacle.gap_y))?;
            ctx.rotate(f64::from(obstacle.rotation))?;
            let half_gap = f64::from(obstacle.gap_size) / 2.0;
            ctx.fill_rect(-width / 2.0, -h - half_gap, width, h);
            ctx.fill_rect(-width / 2.0, half_gap, width, h);
        } else {
            ctx.fill_rect(x, 0.0, width, top);
            ctx.fill_rect(x, bottom, width, h - bottom);
        }
        if obstacle.kind == ObstacleKind::Laser {
            let cx = f64::from(obstacle.center_x());
            ctx.set_stroke_style_str(LASER);
            ctx.set_line_width(6.0);
            ctx.begin_path();
            ctx.move_to(cx, 0.0);
            ctx.line_to(cx, h);
            ctx.stroke();
        }
        ctx.restore();
        Ok(())
    }

    fn draw_power_up(&self, power_up: &PowerUp) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        let (x, y) = (f64::from(power_up.pos.x), f64::from(power_up.pos.y));
        ctx.set_fill_style_str(power_up.kind.color());
        ctx.begin_path();
        ctx.arc(x, y, f64::from(power_up.radius), 0.0, TAU)?;
        ctx.fill();

        let initial = power_up.kind.name().get(..1).unwrap_or("?");
        ctx.set_fill_style_str("rgba(255,255,255,0.8)");
        ctx.set_font("bold 16px 'Segoe UI'");
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        ctx.fill_text(initial, x, y + 1.0)
    }

    fn draw_glider(&self, glider: &Glider) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        let radius = f64::from(glider.radius);

        ctx.set_global_alpha(0.5);
        ctx.set_fill_style_str("#ffffff");
        for point in &glider.trail {
            ctx.begin_path();
            ctx.arc(f64::from(point.x), f64::from(point.y), 4.0, 0.0, TAU)?;
            ctx.fill();
        }
        ctx.set_global_alpha(1.0);

        ctx.save();
        ctx.translate(f64::from(glider.pos.x), f64::from(glider.pos.y))?;
        ctx.rotate(f64::from(glider.rotation))?;

        ctx.set_fill_style_str(GLIDER_BODY);
        ctx.begin_path();
        ctx.ellipse(0.0, 0.0, radius + 12.0, radius - 4.0, 0.0, 0.0, TAU)?;
        ctx.fill();

        ctx.set_fill_style_str(GLIDER_WING);
        ctx.begin_path();
        ctx.move_to(-10.0, 6.0);
        ctx.line_to(18.0, 14.0);
        ctx.line_to(-6.0, 18.0);
        ctx.close_path();
        ctx.fill();

        if glider.shielded {
            ctx.set_stroke_style_str(SHIELD_RING);
            ctx.set_line_width(4.0);
            ctx.begin_path();
            ctx.arc(0.0, 0.0, radius + 8.0, 0.0, TAU)?;
            ctx.stroke();
        }

        ctx.restore();
        Ok(())
    }
}

impl Renderer for CanvasRenderer {
    fn render(&mut self, frame: &FrameView<'_>) {
        if let Err(e) = self.draw(frame) {
            log::warn!("Render error: {:?}", e);
        }
    }
}
