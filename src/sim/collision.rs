//! Collision detection and response for axis-aligned bodies
//!
//! The ball is a square of side `BALL_WIDTH`. Walls are the screen edges,
//! the island and the paddle are rectangles. Response is always a sign flip
//! on one axis of the unit direction, so the direction stays normalized.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// Which direction component a bounce negates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BounceAxis {
    /// Side hit: negate `x`
    X,
    /// Top or bottom hit: negate `y`
    Y,
}

impl BounceAxis {
    /// Reflect a direction across this axis
    #[inline]
    pub fn reflect(self, dir: Vec2) -> Vec2 {
        match self {
            BounceAxis::X => Vec2::new(-dir.x, dir.y),
            BounceAxis::Y => Vec2::new(dir.x, -dir.y),
        }
    }
}

/// Ball's next square has passed the floor line
#[inline]
pub fn ball_floor_collision(next_pos: Vec2, screen_height: f32) -> bool {
    next_pos.y > screen_height - BALL_WIDTH
}

/// Ball's next square has passed the top of the screen
#[inline]
pub fn ball_ceiling_collision(next_pos: Vec2) -> bool {
    next_pos.y < 0.0
}

/// Ball's next square has passed the left or right edge
#[inline]
pub fn ball_side_wall_collision(next_pos: Vec2, screen_width: f32) -> bool {
    next_pos.x < 0.0 || next_pos.x > screen_width - BALL_WIDTH
}

/// Check the ball's next square against a rectangular body.
///
/// `current_x` is the ball's x before this tick moves it. If it lies outside
/// the body's horizontal extent the ball came in from the side and bounces
/// on x; otherwise it came from above or below and bounces on y.
pub fn ball_rect_collision(next_pos: Vec2, current_x: f32, body: &Rect) -> Option<BounceAxis> {
    if !Rect::ball_at(next_pos).overlaps(body) {
        return None;
    }

    if body.spans_x(current_x) {
        Some(BounceAxis::Y)
    } else {
        Some(BounceAxis::X)
    }
}
