//! Paddles and ball
//!
//! Bodies are small `Copy` records. The tick never edits one in place; every
//! stage builds a replacement with struct update syntax.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::vector::unit_in_direction;
use crate::config::GameConfig;

/// Which side of the game a body belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Player,
    Enemy,
    Ball,
}

/// Shape class, selects the wall clamp height
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyKind {
    Paddle,
    Ball,
}

/// An axis-aligned rectangle moving on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub role: Role,
    pub kind: BodyKind,
    pub width: f32,
    pub height: f32,
    /// Position before the last motion step (tells rebounds which way the ball was heading)
    pub prev_pos: Vec2,
    /// Top-left corner
    pub pos: Vec2,
    /// Pixels per tick
    pub vel: Vec2,
    /// Heading in degrees from straight up (ball only)
    pub angle: f32,
}

impl Body {
    /// Player paddle at its starting spot
    pub fn player(config: &GameConfig) -> Self {
        Self::paddle(
            Role::Player,
            Vec2::new(config.paddle_x_position, config.paddle_y_position),
            config,
        )
    }

    /// Enemy paddle, mirrored across the canvas
    pub fn enemy(config: &GameConfig) -> Self {
        Self::paddle(
            Role::Enemy,
            Vec2::new(config.enemy_x_position(), config.paddle_y_position),
            config,
        )
    }

    fn paddle(role: Role, pos: Vec2, config: &GameConfig) -> Self {
        Self {
            role,
            kind: BodyKind::Paddle,
            width: config.paddle_width,
            height: config.paddle_height,
            prev_pos: Vec2::ZERO,
            pos,
            vel: Vec2::ZERO,
            angle: 0.0,
        }
    }

    /// Ball at the canvas center served at `angle`
    pub fn served_ball(angle: f32, config: &GameConfig) -> Self {
        Self {
            vel: unit_in_direction(angle) * config.ball_velocity,
            angle,
            ..Self::held_ball(config)
        }
    }

    /// Ball at the canvas center with no velocity, waiting for a serve
    pub fn held_ball(config: &GameConfig) -> Self {
        let c = config.centered(config.ball_size);
        Self {
            role: Role::Ball,
            kind: BodyKind::Ball,
            width: config.ball_size,
            height: config.ball_size,
            prev_pos: Vec2::ZERO,
            pos: Vec2::new(c, c),
            vel: Vec2::ZERO,
            angle: config.ball_start_angle,
        }
    }

    /// Center point of the rectangle
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::new(self.width, self.height) / 2.0
    }

    /// Replacement with a new velocity
    #[inline]
    pub fn with_vel(self, vel: Vec2) -> Self {
        Self { vel, ..self }
    }

    /// One motion step: remember the old position, then move by `vel`
    /// unless the move would cross the top or bottom of the canvas.
    pub fn advance(self, canvas_size: f32) -> Self {
        let candidate = self.pos + self.vel;
        let out_of_bounds = candidate.y <= 0.0 || candidate.y + self.height >= canvas_size;
        Self {
            prev_pos: self.pos,
            pos: if out_of_bounds { self.pos } else { candidate },
            ..self
        }
    }

    /// Inclusive axis-aligned overlap test
    pub fn overlaps(&self, other: &Body) -> bool {
        self.pos.x + self.width >= other.pos.x
            && self.pos.x <= other.pos.x + other.width
            && self.pos.y + self.height >= other.pos.y
            && self.pos.y <= other.pos.y + other.height
    }

    /// Whether the ball dropped onto the screen since the last step
    #[inline]
    pub fn moving_down(&self) -> bool {
        self.prev_pos.y < self.pos.y
    }
}
