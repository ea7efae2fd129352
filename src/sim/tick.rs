//! Fixed timestep simulation tick
//!
//! One call moves the ball one step. Checks run in a fixed order and each
//! bounce reflects the direction the ball had at the start of the tick, so
//! when several fire in one tick the last one wins.

use super::collision::{
    BounceAxis, ball_ceiling_collision, ball_floor_collision, ball_rect_collision,
    ball_side_wall_collision,
};
use super::state::{GameEvent, GameState};
use crate::next_position;

/// What happened during one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    pub events: Vec<GameEvent>,
}

impl TickReport {
    pub fn scored(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, GameEvent::IslandHit { .. }))
    }
}

/// Advance the game state by one tick.
///
/// Does not look at `game_over`; the caller decides whether the game is
/// running. The tick that detects a miss still commits its move.
pub fn tick(state: &mut GameState) -> TickReport {
    let mut report = TickReport::default();
    let start = state.ball;

    let probe = next_position(start.pos, start.dir, start.speed);
    let mut dir = start.dir;

    if ball_floor_collision(probe, state.screen.y) {
        if !state.game_over {
            log::info!("Ball missed at x={:.1}, final score {}", probe.x, state.score);
        }
        state.game_over = true;
        report.events.push(GameEvent::Missed);
    }

    if ball_ceiling_collision(probe) {
        dir = BounceAxis::Y.reflect(start.dir);
        report.events.push(GameEvent::CeilingBounce);
    }

    if ball_side_wall_collision(probe, state.screen.x) {
        dir = BounceAxis::X.reflect(start.dir);
        report.events.push(GameEvent::WallBounce);
    }

    if let Some(axis) = ball_rect_collision(probe, start.pos.x, &state.island) {
        dir = axis.reflect(start.dir);
        state.score = state.score.saturating_add(1);
        log::debug!("Island hit ({:?}), score {}", axis, state.score);
        report.events.push(GameEvent::IslandHit { axis });
    }

    if let Some(axis) = ball_rect_collision(probe, start.pos.x, &state.paddle.as_rect()) {
        dir = axis.reflect(start.dir);
        log::debug!("Paddle hit ({:?})", axis);
        report.events.push(GameEvent::PaddleHit { axis });
    }

    // The new heading applies to this tick's move, from the pre-tick position
    state.ball.dir = dir;
    state.ball.pos = next_position(start.pos, dir, start.speed);
    state.time_ticks += 1;

    report
}
