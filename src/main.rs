//! Fold Pong entry point
//!
//! Web: wires a 10ms interval and the arrow keys into the game fold and
//! renders into the SVG page. Native: runs a headless match with a simple
//! autopilot on the player paddle.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, KeyboardEvent, Window};

    use fold_pong::consts::TICK_MILLIS;
    use fold_pong::render::element_id;
    use fold_pong::sim::Role;
    use fold_pong::{Banner, Frame, Game, GameConfig, Key, KeyEvent, RenderSink};

    const SVG_NS: &str = "http://www.w3.org/2000/svg";

    /// Writes frames into the page's SVG elements
    struct DomSink {
        document: Document,
        /// Currently displayed end-of-game text, if any
        banner: Option<Element>,
    }

    impl DomSink {
        fn new(document: Document) -> Self {
            Self {
                document,
                banner: None,
            }
        }

        fn set_attr(&self, id: &str, name: &str, value: f32) {
            if let Some(el) = self.document.get_element_by_id(id) {
                let _ = el.set_attribute(name, &value.to_string());
            }
        }

        fn set_text(&self, id: &str, text: &str) {
            if let Some(el) = self.document.get_element_by_id(id) {
                el.set_text_content(Some(text));
            }
        }

        fn show_banner(&mut self, banner: &Banner) {
            if self.banner.is_some() {
                return;
            }
            let Some(svg) = self.document.get_element_by_id("canvas") else {
                return;
            };
            let ns = svg.namespace_uri().unwrap_or_else(|| SVG_NS.to_string());
            let Ok(text) = self.document.create_element_ns(Some(&ns), "text") else {
                log::warn!("Could not create end message element");
                return;
            };
            let _ = text.set_attribute("x", &banner.x.to_string());
            let _ = text.set_attribute("y", &banner.y.to_string());
            let _ = text.set_attribute("class", "end_message");
            text.set_text_content(Some(banner.text));
            if svg.append_child(&text).is_ok() {
                self.banner = Some(text);
            }
        }

        fn clear_banner(&mut self) {
            if let Some(text) = self.banner.take() {
                text.remove();
            }
        }
    }

    impl RenderSink for DomSink {
        fn render(&mut self, frame: &Frame) {
            self.set_attr(element_id(Role::Player), "y", frame.player_y);
            self.set_attr(element_id(Role::Enemy), "y", frame.enemy_y);
            self.set_attr(element_id(Role::Ball), "x", frame.ball_x);
            self.set_attr(element_id(Role::Ball), "y", frame.ball_y);

            self.set_text("player_score", &frame.player_score);
            self.set_text("enemy_score", &frame.enemy_score);
            self.set_text("player_wins", &frame.player_wins);
            self.set_text("enemy_wins", &frame.enemy_wins);

            match &frame.banner {
                Some(banner) => self.show_banner(banner),
                None => self.clear_banner(),
            }
        }
    }

    /// Optional inline override: <script id="pong-config" type="application/json">
    fn load_config(document: &Document) -> GameConfig {
        let Some(json) = document
            .get_element_by_id("pong-config")
            .and_then(|el| el.text_content())
        else {
            return GameConfig::default();
        };

        match GameConfig::from_json(&json) {
            Ok(config) => {
                log::info!("Loaded config override");
                config
            }
            Err(e) => {
                log::warn!("Ignoring config override: {}", e);
                GameConfig::default()
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Fold Pong starting...");

        let Some(window) = web_sys::window() else {
            log::error!("No window");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };

        let config = load_config(&document);
        let game = Rc::new(RefCell::new(Game::new(config, DomSink::new(document.clone()))));

        setup_key_handlers(&document, game.clone());
        setup_blur_handler(&window, game.clone());
        setup_key_highlight(&document);

        // Timer ticks
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut()>::new(move || {
                game.borrow_mut().on_tick();
            });
            if let Err(e) = window.set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                TICK_MILLIS,
            ) {
                log::error!("Failed to start tick timer: {:?}", e);
                return;
            }
            closure.forget();
        }

        log::info!("Fold Pong running!");
    }

    fn key_event(event: &KeyboardEvent, pressed: bool) -> Option<KeyEvent> {
        Key::from_code(&event.code()).map(|key| KeyEvent {
            key,
            pressed,
            repeat: event.repeat(),
        })
    }

    fn setup_key_handlers(document: &Document, game: Rc<RefCell<Game<DomSink>>>) {
        for (name, pressed) in [("keydown", true), ("keyup", false)] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = key_event(&event, pressed) {
                    game.borrow_mut().on_key(key);
                }
            });
            let _ = document
                .add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Keyups are lost while the page is unfocused, so stop the paddle on blur
    fn setup_blur_handler(window: &Window, game: Rc<RefCell<Game<DomSink>>>) {
        let closure = Closure::<dyn FnMut()>::new(move || {
            if game.borrow_mut().on_blur() {
                log::debug!("Focus lost, paddle stopped");
            }
        });
        let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Light up the on-page control hint for the key being held
    fn setup_key_highlight(document: &Document) {
        for (name, pressed) in [("keydown", true), ("keyup", false)] {
            let doc = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let Some(key) = Key::from_code(&event.code()) else {
                    return;
                };
                if let Some(el) = doc.get_element_by_id(key.code()) {
                    let classes = el.class_list();
                    let _ = if pressed {
                        classes.add_1("highlight")
                    } else {
                        classes.remove_1("highlight")
                    };
                }
            });
            let _ = document
                .add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

/// Upper bound for the headless match
#[cfg(not(target_arch = "wasm32"))]
const MAX_HEADLESS_TICKS: u64 = 200_000;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use fold_pong::sim::Phase;
    use fold_pong::{Game, GameConfig, LogSink};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Fold Pong (native) starting...");
    log::info!("Running a headless match - use `trunk serve` for the web version");

    let mut game = Game::new(GameConfig::default(), LogSink::new());
    let mut held = None;
    let mut game_finished = false;

    while game.ticks() < MAX_HEADLESS_TICKS {
        autopilot(&mut game, &mut held);
        game.on_tick();

        match game.state().phase() {
            Phase::BetweenGames => game_finished = true,
            Phase::Rallying if game_finished => break,
            _ => {}
        }
    }

    let state = game.state();
    log::info!(
        "Stopped after {} ticks, wins {}-{}",
        game.ticks(),
        state.player_wins,
        state.enemy_wins
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Presses and releases arrow keys to keep the player paddle under the ball.
/// Uses a dead zone so it only sends edges, like a person would.
#[cfg(not(target_arch = "wasm32"))]
fn autopilot(game: &mut fold_pong::Game<fold_pong::LogSink>, held: &mut Option<fold_pong::Key>) {
    use fold_pong::{Key, KeyEvent};

    const DEAD_ZONE: f32 = 10.0;

    let ball_y = game.state().ball.center().y;
    let paddle_y = game.state().player.center().y;
    let want = if ball_y < paddle_y - DEAD_ZONE {
        Some(Key::Up)
    } else if ball_y > paddle_y + DEAD_ZONE {
        Some(Key::Down)
    } else {
        None
    };

    if want != *held {
        if let Some(key) = held.take() {
            game.on_key(KeyEvent::release(key));
        }
        if let Some(key) = want {
            game.on_key(KeyEvent::press(key));
        }
        *held = want;
    }
}
