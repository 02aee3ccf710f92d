//! Game state and round/game phase
//!
//! The whole game is one `Copy` snapshot. It is created once and then
//! replaced by [`super::tick`] or [`super::reduce`] on every event.

use serde::{Deserialize, Serialize};

use super::entity::Body;
use crate::config::GameConfig;

/// Where the game currently is, derived from the restart timestamps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Ball in play
    Rallying,
    /// A point was scored; ball held at center until the next serve
    BetweenRounds,
    /// A side reached the max score; final score on display until the next game
    BetweenGames,
}

/// Which side scored or won
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Player,
    Enemy,
}

/// Complete game state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct State {
    /// Tick count of the last processed timer event
    pub time: u64,
    pub player: Body,
    pub enemy: Body,
    pub ball: Body,
    pub player_score: u32,
    pub enemy_score: u32,
    pub player_wins: u32,
    pub enemy_wins: u32,
    /// 1-based; bumped once per point that does not end the game
    pub round: u32,
    /// Tick at which the next round is served (0 = none pending)
    pub restart_round_at: u64,
    /// Tick at which the next game starts (0 = none pending)
    pub restart_game_at: u64,
    pub game_over: bool,
}

impl State {
    /// Fresh game: both paddles home, ball served at the start angle
    pub fn new(config: &GameConfig) -> Self {
        Self {
            time: 0,
            player: Body::player(config),
            enemy: Body::enemy(config),
            ball: Body::served_ball(config.ball_start_angle, config),
            player_score: 0,
            enemy_score: 0,
            player_wins: 0,
            enemy_wins: 0,
            round: 1,
            restart_round_at: 0,
            restart_game_at: 0,
            game_over: false,
        }
    }

    /// Current phase. A finished game takes precedence over a pending round.
    pub fn phase(&self) -> Phase {
        if self.game_over || self.restart_game_at != 0 {
            Phase::BetweenGames
        } else if self.restart_round_at != 0 {
            Phase::BetweenRounds
        } else {
            Phase::Rallying
        }
    }

    /// Side that reached the max score, if the game is over
    pub fn winner(&self, config: &GameConfig) -> Option<Side> {
        if !self.game_over {
            None
        } else if self.player_score >= config.max_score {
            Some(Side::Player)
        } else {
            Some(Side::Enemy)
        }
    }

    /// Points scored in the current game
    #[inline]
    pub fn total_points(&self) -> u32 {
        self.player_score + self.enemy_score
    }
}
