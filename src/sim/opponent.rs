//! Computer-controlled paddle
//!
//! Chases the ball's y coordinate at a fraction of the player's top speed.

use glam::Vec2;

use super::state::State;
use crate::config::GameConfig;

/// Enemy paddle velocity for the next tick
pub fn enemy_velocity(state: &State, config: &GameConfig) -> Vec2 {
    let ball_y = state.ball.pos.y;
    let top = state.enemy.pos.y;
    let bottom = top + state.enemy.height;

    if ball_y > top && ball_y < bottom {
        Vec2::ZERO
    } else if ball_y < top {
        Vec2::new(0.0, -config.enemy_velocity())
    } else {
        Vec2::new(0.0, config.enemy_velocity())
    }
}

/// Replace the enemy paddle's velocity with the controller's choice
pub fn steer_enemy(state: State, config: &GameConfig) -> State {
    State {
        enemy: state.enemy.with_vel(enemy_velocity(&state, config)),
        ..state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::Body;

    fn with_ball_y(y: f32, config: &GameConfig) -> State {
        let state = State::new(config);
        State {
            ball: Body {
                pos: Vec2::new(300.0, y),
                ..state.ball
            },
            ..state
        }
    }

    #[test]
    fn test_holds_when_ball_inside_span() {
        let config = GameConfig::default();
        assert_eq!(enemy_velocity(&with_ball_y(300.0, &config), &config), Vec2::ZERO);
    }

    #[test]
    fn test_chases_ball() {
        let config = GameConfig::default();
        let up = enemy_velocity(&with_ball_y(100.0, &config), &config);
        let down = enemy_velocity(&with_ball_y(500.0, &config), &config);
        assert!(up.y < 0.0);
        assert!(down.y > 0.0);
        assert!((up.y.abs() - 2.7).abs() < 1e-5);
        assert!((down.y - 2.7).abs() < 1e-5);
    }

    #[test]
    fn test_edges_of_span_still_move() {
        let config = GameConfig::default();
        // Exactly on the top edge is not "within"
        let edge = enemy_velocity(&with_ball_y(280.0, &config), &config);
        assert!(edge.y > 0.0);
    }

    #[test]
    fn test_slower_than_player() {
        let config = GameConfig::default();
        let v = enemy_velocity(&with_ball_y(0.0, &config), &config);
        assert!(v.length() < config.paddle_velocity);
    }
}
