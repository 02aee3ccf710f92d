//! Render sink contract
//!
//! The simulation never touches the page. After every folded state the
//! runtime builds a [`Frame`] and hands it to a [`RenderSink`]; the browser
//! sink writes SVG attributes, the headless sink writes log lines.

use crate::config::GameConfig;
use crate::sim::{Role, Side, State};

/// DOM id of the element that draws a body
pub fn element_id(role: Role) -> &'static str {
    match role {
        Role::Player => "player_paddle",
        Role::Enemy => "enemy_paddle",
        Role::Ball => "ball",
    }
}

/// End-of-game message
#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    pub text: &'static str,
    pub x: f32,
    pub y: f32,
}

/// Everything a view needs from one state
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub player_y: f32,
    pub enemy_y: f32,
    pub ball_x: f32,
    pub ball_y: f32,
    pub player_score: String,
    pub enemy_score: String,
    pub player_wins: String,
    pub enemy_wins: String,
    /// Present only while a finished game is on display
    pub banner: Option<Banner>,
}

impl Frame {
    pub fn from_state(state: &State, config: &GameConfig) -> Self {
        let banner = state.winner(config).map(|side| match side {
            // Shorter text, nudged right to stay centered
            Side::Player => Banner {
                text: "Player Won",
                x: config.canvas_size / 4.0,
                y: config.canvas_size / 2.0,
            },
            Side::Enemy => Banner {
                text: "Computer Won",
                x: config.canvas_size / 6.0,
                y: config.canvas_size / 2.0,
            },
        });

        Self {
            player_y: state.player.pos.y,
            enemy_y: state.enemy.pos.y,
            ball_x: state.ball.pos.x,
            ball_y: state.ball.pos.y,
            player_score: state.player_score.to_string(),
            enemy_score: state.enemy_score.to_string(),
            player_wins: state.player_wins.to_string(),
            enemy_wins: state.enemy_wins.to_string(),
            banner,
        }
    }
}

/// Consumer of read-only frames
pub trait RenderSink {
    fn render(&mut self, frame: &Frame);
}

/// Headless sink: logs the scoreboard whenever it changes
#[derive(Debug, Default)]
pub struct LogSink {
    last: Option<(String, String, String, String)>,
    banner_shown: bool,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderSink for LogSink {
    fn render(&mut self, frame: &Frame) {
        let board = (
            frame.player_score.clone(),
            frame.enemy_score.clone(),
            frame.player_wins.clone(),
            frame.enemy_wins.clone(),
        );
        if self.last.as_ref() != Some(&board) {
            log::info!(
                "Score {}-{} (wins {}-{})",
                board.0,
                board.1,
                board.2,
                board.3
            );
            self.last = Some(board);
        }

        match (&frame.banner, self.banner_shown) {
            (Some(banner), false) => {
                log::info!("{}", banner.text);
                self.banner_shown = true;
            }
            (None, true) => self.banner_shown = false,
            _ => {}
        }
    }
}
