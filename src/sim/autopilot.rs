//! Demo mode input
//!
//! Stands in for the pointer: produces the finger x that would put the
//! paddle under the ball. Used by the headless runner.

use super::state::Snapshot;
use crate::consts::*;

#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    /// Horizontal offset from the ball center
    pub aim_offset: f32,
}

impl Autopilot {
    pub fn new(aim_offset: f32) -> Self {
        Self { aim_offset }
    }

    /// Pointer x to feed into `MotionEngine::set_paddle_from_pointer`
    pub fn pointer_x(&self, view: &Snapshot) -> f32 {
        // Lead the ball by one tick
        let lead = view.ball_dir.x * SPEED;
        view.ball_pos.x + BALL_WIDTH / 2.0 + lead + self.aim_offset
    }
}
