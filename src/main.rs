//! Sky Glider entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, PointerEvent};

    use sky_glider::persistence::LocalStorageStore;
    use sky_glider::platform::{Hud, HudSnapshot, signal_for_key};
    use sky_glider::renderer::CanvasRenderer;
    use sky_glider::sim::{GamePhase, InputSignal};
    use sky_glider::{Game, Tuning};

    /// Writes HUD text into the page
    struct DomHud {
        document: Document,
        last: Option<HudSnapshot>,
    }

    impl DomHud {
        fn set_text(&self, id: &str, text: &str) {
            if let Some(el) = self.document.get_element_by_id(id) {
                el.set_text_content(Some(text));
            }
        }

        fn set_disabled(&self, id: &str, disabled: bool) {
            if let Some(el) = self.document.get_element_by_id(id) {
                let _ = if disabled {
                    el.set_attribute("disabled", "")
                } else {
                    el.remove_attribute("disabled")
                };
            }
        }
    }

    impl Hud for DomHud {
        fn update(&mut self, hud: &HudSnapshot) {
            // Skip DOM writes when nothing changed
            if self.last.as_ref() == Some(hud) {
                return;
            }
            self.set_text("score", &hud.score_text);
            self.set_text("best-score", &hud.best_text);
            self.set_text("powerup", &hud.power_up_text);

            if let Some(overlay) = self.document.get_element_by_id("overlay") {
                match &hud.overlay {
                    Some(text) => {
                        overlay.set_text_content(Some(text));
                        let _ = overlay.class_list().remove_1("hidden");
                    }
                    None => {
                        let _ = overlay.class_list().add_1("hidden");
                    }
                }
            }

            let playing = hud.phase == GamePhase::Playing;
            self.set_disabled("start-btn", playing || hud.phase == GamePhase::Paused);
            self.set_disabled("pause-btn", !playing);
            self.set_disabled("resume-btn", hud.phase != GamePhase::Paused);

            self.last = Some(hud.clone());
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Sky Glider starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<web_sys::CanvasRenderingContext2d>().ok())
            .expect("no 2d context");

        let tuning = Tuning {
            field_width: canvas.width() as f32,
            field_height: canvas.height() as f32,
            ..Default::default()
        };

        let seed = js_sys::Date::now() as u64;
        let hud = DomHud {
            document: document.clone(),
            last: None,
        };
        let game = Rc::new(RefCell::new(Game::new(
            seed,
            tuning,
            Box::new(LocalStorageStore::new()),
            Box::new(CanvasRenderer::new(ctx)),
            Box::new(hud),
        )));

        setup_input(game.clone());
        setup_buttons(game.clone(), &document);
        setup_auto_pause(game.clone(), &document);

        log::info!("Sky Glider running!");
        request_animation_frame(game);
    }

    fn setup_input(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                if event.code() == "KeyI" {
                    g.autopilot = !g.autopilot;
                    log::info!("Autopilot: {}", g.autopilot);
                    return;
                }
                if let Some(signal) = signal_for_key(&event.code()) {
                    event.prevent_default();
                    g.signal(signal);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: PointerEvent| {
            game.borrow_mut().signal(InputSignal::Flap);
        });
        let _ = window
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_buttons(game: Rc<RefCell<Game>>, document: &Document) {
        let buttons = [
            ("start-btn", InputSignal::Start),
            ("pause-btn", InputSignal::Pause),
            ("resume-btn", InputSignal::Resume),
        ];
        for (id, signal) in buttons {
            if let Some(btn) = document.get_element_by_id(id) {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                    game.borrow_mut().signal(signal);
                });
                let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    fn setup_auto_pause(game: Rc<RefCell<Game>>, document: &Document) {
        let document_clone = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                let mut g = game.borrow_mut();
                if g.phase() == GamePhase::Playing {
                    g.signal(InputSignal::Pause);
                    log::info!("Auto-paused (tab hidden)");
                }
            }
        });
        let _ = document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless native run: the autopilot flies until it crashes or time runs out.
///
/// Usage: `sky-glider [seed]`. `SKY_GLIDER_TUNING` names a JSON tuning file;
/// the best score persists under `SKY_GLIDER_DATA_DIR` or the XDG data dir.
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use sky_glider::persistence::FileStore;
    use sky_glider::platform::{Hud, HudSnapshot};
    use sky_glider::renderer::LogRenderer;
    use sky_glider::sim::GamePhase;
    use sky_glider::{Game, Tuning};

    /// Logs HUD text whenever it changes
    struct LogHud {
        last: Option<HudSnapshot>,
    }

    impl Hud for LogHud {
        fn update(&mut self, hud: &HudSnapshot) {
            let changed = self.last.as_ref().is_none_or(|last| {
                last.score != hud.score || last.power_up_text.split('(').next() != hud.power_up_text.split('(').next()
            });
            if changed {
                log::debug!("{} | {} | {}", hud.score_text, hud.best_text, hud.power_up_text);
            }
            self.last = Some(hud.clone());
        }
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Sky Glider (native) starting...");

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(0x5ca1ab1e);
    let tuning = match std::env::var("SKY_GLIDER_TUNING") {
        Ok(path) => match std::fs::read_to_string(&path) {
            Ok(json) => Tuning::from_json_or_default(&json),
            Err(e) => {
                log::warn!("Could not read tuning file {}: {}", path, e);
                Tuning::default()
            }
        },
        Err(_) => Tuning::default(),
    };

    let store = FileStore::in_data_dir();
    let mut game = Game::new(
        seed,
        tuning,
        Box::new(store),
        Box::new(LogRenderer::new()),
        Box::new(LogHud { last: None }),
    );
    game.autopilot = true;

    // Five simulated minutes at 60 Hz
    const MAX_FRAMES: u32 = 5 * 60 * 60;
    let frame_ms = f64::from(sky_glider::consts::FRAME_MS);
    for frame in 0..MAX_FRAMES {
        game.frame(f64::from(frame) * frame_ms);
        if game.phase() == GamePhase::GameOver {
            break;
        }
    }

    let state = game.state();
    log::info!(
        "Run finished: {:?}, score {}, best {}, {} ticks",
        state.phase,
        state.score,
        state.best_score,
        state.time_ticks
    );
}
