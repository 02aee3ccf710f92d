//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One transition per event, no in-place mutation of a published snapshot
//! - Integer tick clock only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod opponent;
pub mod state;
pub mod tick;
pub mod vector;

pub use collision::{Rebound, detect_rebound, paddle_rebound_angle, resolve_collisions, wall_rebound_angle};
pub use entity::{Body, BodyKind, Role};
pub use opponent::enemy_velocity;
pub use state::{Phase, Side, State};
pub use tick::{GameEvent, apply_move, reduce, serve_angle, tick};
pub use vector::{rotate, unit_in_direction};
