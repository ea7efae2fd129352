//! Axis-aligned rectangle geometry
//!
//! Screen coordinates: origin at the top-left, y grows downward.
//! A rectangle is its top-left corner plus width and height.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// An axis-aligned box in screen space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// The ball's square when its top-left corner sits at `pos`
    pub fn ball_at(pos: Vec2) -> Self {
        Self {
            pos,
            size: Vec2::splat(BALL_WIDTH),
        }
    }

    /// The fixed island the ball must hit to score
    pub fn island() -> Self {
        Self::new(ISLAND_X, ISLAND_Y, ISLAND_W, ISLAND_H)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Strict overlap test; rectangles that only share an edge do not overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Whether `x` lies within `[left, right]`, edges included
    pub fn spans_x(&self, x: f32) -> bool {
        x >= self.left() && x <= self.right()
    }

    /// Center point
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }
}
