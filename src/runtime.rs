//! The event fold
//!
//! Timer ticks and key events arrive on one thread, one at a time. Each is
//! folded into the current state and the result is rendered before the next
//! event is looked at, so the sink never sees a half-updated game.

use crate::config::GameConfig;
use crate::input::{InputMapper, KeyEvent};
use crate::render::{Frame, RenderSink};
use crate::sim::{GameEvent, State, reduce};

/// Owner of the running game
pub struct Game<S: RenderSink> {
    config: GameConfig,
    state: State,
    /// Count of timer firings so far; never skips a value
    ticks: u64,
    input: InputMapper,
    sink: S,
}

impl<S: RenderSink> Game<S> {
    pub fn new(config: GameConfig, sink: S) -> Self {
        let state = State::new(&config);
        Self {
            config,
            state,
            ticks: 0,
            input: InputMapper::new(),
            sink,
        }
    }

    /// Timer fired: advance exactly one tick
    pub fn on_tick(&mut self) {
        self.ticks += 1;
        self.handle(GameEvent::Tick(self.ticks));
    }

    /// Key edge from the page. Returns whether it changed the player's intent.
    pub fn on_key(&mut self, event: KeyEvent) -> bool {
        match self.input.map(event) {
            Some(mv) => {
                self.handle(GameEvent::Move(mv));
                true
            }
            None => false,
        }
    }

    /// Page lost focus: stop the paddle if a key was down
    pub fn on_blur(&mut self) -> bool {
        match self.input.release_all() {
            Some(mv) => {
                self.handle(GameEvent::Move(mv));
                true
            }
            None => false,
        }
    }

    /// Fold one event and render the result
    pub fn handle(&mut self, event: GameEvent) {
        self.state = reduce(&self.state, event, &self.config);
        self.sink.render(&Frame::from_state(&self.state, &self.config));
    }

    /// Current snapshot
    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
