//! 2D vector helpers
//!
//! `glam::Vec2` is a `Copy` value type, so `+` and `*` already return new
//! vectors without touching their operands. Angles in this game are degrees
//! measured from straight up, which is what the helpers below add.

use glam::Vec2;

/// Screen-space "up" (y grows downwards on the SVG canvas)
pub const UP: Vec2 = Vec2::new(0.0, -1.0);

/// Rotate `v` by `deg` degrees using the standard 2D rotation matrix
#[inline]
pub fn rotate(v: Vec2, deg: f32) -> Vec2 {
    let (sin, cos) = deg.to_radians().sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Unit vector pointing `deg` degrees away from straight up
#[inline]
pub fn unit_in_direction(deg: f32) -> Vec2 {
    rotate(UP, deg)
}
