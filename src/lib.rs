//! Fold Pong - classic two-paddle Pong as a fold over ticks and key events
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, rebounds, scoring, round/game lifecycle)
//! - `input`: Keyboard edges to paddle intents
//! - `config`: Single parametrized engine configuration
//! - `render`: View model handed to the render sink
//! - `runtime`: The fold loop that owns the state between events

pub mod config;
pub mod input;
pub mod render;
pub mod runtime;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use input::{InputMapper, Key, KeyEvent, Move};
pub use render::{Banner, Frame, LogSink, RenderSink};
pub use runtime::Game;

/// Reference game constants (the defaults of [`GameConfig`])
pub mod consts {
    /// Square SVG canvas edge length
    pub const CANVAS_SIZE: f32 = 600.0;

    /// Paddle defaults - player sits PADDLE_X_POSITION from the left edge,
    /// the enemy mirrors it from the right edge
    pub const PADDLE_X_POSITION: f32 = 50.0;
    pub const PADDLE_Y_POSITION: f32 = 280.0;
    pub const PADDLE_WIDTH: f32 = 7.0;
    pub const PADDLE_HEIGHT: f32 = 40.0;
    /// Pixels per tick while a key is held
    pub const PADDLE_VELOCITY: f32 = 3.0;

    /// Ball defaults (square ball)
    pub const BALL_SIZE: f32 = 8.0;
    /// Pixels per tick, constant across rebounds
    pub const BALL_VELOCITY: f32 = 4.0;
    /// Serve angle in degrees, measured from straight up
    pub const BALL_START_ANGLE: f32 = 35.0;
    /// Extra serve rotation per round (degrees)
    pub const NEXT_BALL_ANGLE: f32 = 90.0;

    /// Points needed to win a game
    pub const MAX_SCORE: u32 = 7;
    /// Pause after a point (ticks)
    pub const ROUND_WAIT: u64 = 100;
    /// Pause after a game (ticks)
    pub const GAME_WAIT: u64 = 300;

    /// Opponent paddle runs at 9/10 of the player's speed so it can be beaten
    pub const ENEMY_SPEED_FACTOR: f32 = 0.9;

    /// Fixed logical tick period
    pub const TICK_MILLIS: i32 = 10;
}
