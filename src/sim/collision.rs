//! Collision detection and rebound geometry
//!
//! Only the ball ever rebounds. Paddles are checked before walls, and the
//! first hit wins: at most one rebound is applied per tick.

use serde::{Deserialize, Serialize};

use super::entity::Body;
use super::state::State;
use super::vector::unit_in_direction;
use crate::config::GameConfig;

/// What the ball bounced off this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rebound {
    Player,
    Enemy,
    Wall,
}

/// Find the single rebound that applies to the ball, in priority order
pub fn detect_rebound(state: &State, config: &GameConfig) -> Option<Rebound> {
    if state.player.overlaps(&state.ball) {
        Some(Rebound::Player)
    } else if state.ball.overlaps(&state.enemy) {
        Some(Rebound::Enemy)
    } else if ball_near_wall(&state.ball, config) {
        Some(Rebound::Wall)
    } else {
        None
    }
}

/// Ball within one ball-size of the top or bottom edge
#[inline]
pub fn ball_near_wall(ball: &Body, config: &GameConfig) -> bool {
    ball.pos.y <= config.ball_size
        || ball.pos.y + config.ball_size >= config.canvas_size - config.ball_size
}

/// Heading after a paddle hit.
///
/// Hitting the half of the paddle the ball is travelling towards (moving down
/// onto the top half, or up onto the bottom half) sends it back the way it
/// came; the other half reflects it like a mirror.
#[inline]
pub fn paddle_rebound_angle(moving_down: bool, top_half: bool, angle: f32) -> f32 {
    if moving_down == top_half {
        180.0 + angle
    } else {
        360.0 - angle
    }
}

/// Heading after a top/bottom wall hit
#[inline]
pub fn wall_rebound_angle(angle: f32) -> f32 {
    180.0 - angle
}

/// Ball leaving a rebound: fresh velocity at `angle`, already moved one step
pub fn rebound(ball: Body, angle: f32, speed: f32) -> Body {
    let vel = unit_in_direction(angle) * speed;
    Body {
        prev_pos: ball.pos,
        pos: ball.pos + vel,
        vel,
        angle,
        ..ball
    }
}

/// Bounce the ball off a paddle
pub fn rebound_off_paddle(ball: Body, paddle: &Body, config: &GameConfig) -> Body {
    let top_half = ball.center().y <= paddle.center().y;
    let angle = paddle_rebound_angle(ball.moving_down(), top_half, ball.angle);
    rebound(ball, angle, config.ball_velocity)
}

/// Apply this tick's rebound, if any. No hit leaves the state untouched.
pub fn resolve_collisions(state: State, config: &GameConfig) -> State {
    let ball = match detect_rebound(&state, config) {
        Some(Rebound::Player) => rebound_off_paddle(state.ball, &state.player, config),
        Some(Rebound::Enemy) => rebound_off_paddle(state.ball, &state.enemy, config),
        Some(Rebound::Wall) => rebound(
            state.ball,
            wall_rebound_angle(state.ball.angle),
            config.ball_velocity,
        ),
        None => return state,
    };
    State { ball, ..state }
}
