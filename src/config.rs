//! Engine configuration
//!
//! Every tunable of the game lives in one structure so that the engine is
//! never forked for a variant. The browser page may override any subset of
//! fields with an inline JSON block; nothing is ever written back.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Largest serve offset either side of the base angle, in degrees
pub const MAX_SERVE_JITTER: f32 = 180.0;

/// Longest pause between rounds or games: one day of 10ms ticks
pub const MAX_WAIT_TICKS: u64 = 8_640_000;

/// Errors produced while loading a configuration override
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Complete game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Arena ===
    pub canvas_size: f32,

    // === Paddles ===
    pub paddle_x_position: f32,
    pub paddle_y_position: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_velocity: f32,
    /// Opponent speed as a fraction of `paddle_velocity`
    pub enemy_speed_factor: f32,

    // === Ball ===
    pub ball_size: f32,
    pub ball_velocity: f32,
    /// Degrees from straight up
    pub ball_start_angle: f32,
    /// Degrees added to the serve per round played
    pub next_ball_angle: f32,
    /// Max random offset (degrees) applied to round serves; 0 disables
    pub serve_jitter_degrees: f32,
    /// Seed for serve jitter
    pub seed: u64,

    // === Rules ===
    pub max_score: u32,
    /// Ticks to wait before serving the next round
    pub round_wait: u64,
    /// Ticks to wait before starting the next game
    pub game_wait: u64,
    /// Count games won across restarts
    pub track_wins: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_size: CANVAS_SIZE,

            paddle_x_position: PADDLE_X_POSITION,
            paddle_y_position: PADDLE_Y_POSITION,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_velocity: PADDLE_VELOCITY,
            enemy_speed_factor: ENEMY_SPEED_FACTOR,

            ball_size: BALL_SIZE,
            ball_velocity: BALL_VELOCITY,
            ball_start_angle: BALL_START_ANGLE,
            next_ball_angle: NEXT_BALL_ANGLE,
            serve_jitter_degrees: 0.0,
            seed: 0,

            max_score: MAX_SCORE,
            round_wait: ROUND_WAIT,
            game_wait: GAME_WAIT,
            track_wins: true,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON override and validate the result
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the engine cannot run
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |field, reason| Err(ConfigError::Invalid { field, reason });

        if !(self.canvas_size > 0.0) {
            return invalid("canvas_size", "must be positive");
        }
        if !(self.paddle_width > 0.0) || !(self.paddle_height > 0.0) {
            return invalid("paddle_width", "paddle dimensions must be positive");
        }
        if self.paddle_height >= self.canvas_size {
            return invalid("paddle_height", "paddle must fit inside the canvas");
        }
        if self.paddle_x_position < 0.0
            || self.paddle_x_position + self.paddle_width >= self.canvas_size / 2.0
        {
            return invalid("paddle_x_position", "paddles must sit in their own half");
        }
        if self.paddle_y_position <= 0.0
            || self.paddle_y_position + self.paddle_height >= self.canvas_size
        {
            return invalid("paddle_y_position", "paddle must start inside the canvas");
        }
        if !(self.paddle_velocity > 0.0) {
            return invalid("paddle_velocity", "must be positive");
        }
        if !(self.enemy_speed_factor > 0.0 && self.enemy_speed_factor <= 1.0) {
            return invalid("enemy_speed_factor", "must be in (0, 1]");
        }
        if !(self.ball_size > 0.0) || self.ball_size * 3.0 >= self.canvas_size {
            return invalid("ball_size", "ball must be positive and fit the wall margin");
        }
        if !(self.ball_velocity > 0.0) {
            return invalid("ball_velocity", "must be positive");
        }
        if !self.ball_start_angle.is_finite() || !self.next_ball_angle.is_finite() {
            return invalid("ball_start_angle", "serve angles must be finite");
        }
        if !(self.serve_jitter_degrees >= 0.0 && self.serve_jitter_degrees <= MAX_SERVE_JITTER) {
            return invalid("serve_jitter_degrees", "must be between 0 and 180");
        }
        if self.max_score == 0 {
            return invalid("max_score", "must be at least 1");
        }
        if self.round_wait == 0 || self.round_wait > MAX_WAIT_TICKS {
            return invalid("round_wait", "must be between 1 and 8640000 ticks");
        }
        if self.game_wait == 0 || self.game_wait > MAX_WAIT_TICKS {
            return invalid("game_wait", "must be between 1 and 8640000 ticks");
        }
        Ok(())
    }

    /// Center of a paddle-sized or ball-sized body placed mid-canvas
    #[inline]
    pub fn centered(&self, size: f32) -> f32 {
        self.canvas_size / 2.0 - size / 2.0
    }

    /// Enemy paddle x position (mirror of the player's)
    #[inline]
    pub fn enemy_x_position(&self) -> f32 {
        self.canvas_size - self.paddle_x_position - self.paddle_width
    }

    /// Opponent paddle speed in pixels per tick
    #[inline]
    pub fn enemy_velocity(&self) -> f32 {
        self.paddle_velocity * self.enemy_speed_factor
    }
}
