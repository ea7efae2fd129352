//! Game state and core simulation types
//!
//! Everything the tick reads or writes lives in `GameState`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::BounceAxis;
use super::rect::Rect;
use crate::consts::*;

/// Something that happened during a tick, for sound or animation hooks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Bounced off the top of the screen
    CeilingBounce,
    /// Bounced off the left or right edge
    WallBounce,
    /// Hit the island (scores a point)
    IslandHit { axis: BounceAxis },
    /// Hit the paddle
    PaddleHit { axis: BounceAxis },
    /// Passed the floor; the run is over
    Missed,
}

/// The ball: a square moving at constant speed along a unit direction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner of the square
    pub pos: Vec2,
    /// Unit heading
    pub dir: Vec2,
    /// Displacement per tick
    pub speed: f32,
}

impl Ball {
    pub fn new(pos: Vec2, dir: Vec2) -> Self {
        Self {
            pos,
            dir,
            speed: SPEED,
        }
    }

    pub fn as_rect(&self) -> Rect {
        Rect::ball_at(self.pos)
    }
}

/// The player's paddle. Only `x` ever changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Paddle {
    /// Paddle for a screen: half the screen wide, a quarter in from the left,
    /// `PADDLE_FLOOR_OFFSET` above the bottom
    pub fn for_screen(screen: Vec2) -> Self {
        Self {
            pos: Vec2::new(screen.x / 4.0, screen.y - PADDLE_FLOOR_OFFSET),
            size: Vec2::new(screen.x / 2.0, PADDLE_HEIGHT),
        }
    }

    pub fn as_rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Screen width and height, fixed for the session
    pub screen: Vec2,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Static obstacle
    pub island: Rect,
    /// Island hits this run
    pub score: u32,
    /// True before the first start and after a miss
    pub game_over: bool,
    /// Ticks simulated this run
    pub time_ticks: u64,
}

impl GameState {
    /// New session in the pre-game (game over) state
    pub fn new(screen: Vec2, dir: Vec2) -> Self {
        Self {
            screen,
            ball: Ball::new(screen / 2.0, dir),
            paddle: Paddle::for_screen(screen),
            island: Rect::island(),
            score: 0,
            game_over: true,
            time_ticks: 0,
        }
    }

    /// Put the ball back at the center and start a fresh run.
    /// The ball keeps its current direction.
    pub fn reset_run(&mut self) {
        self.ball.pos = self.screen / 2.0;
        self.score = 0;
        self.game_over = false;
        self.time_ticks = 0;
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            ball_pos: self.ball.pos,
            ball_dir: self.ball.dir,
            paddle_pos: self.paddle.pos,
            score: self.score,
            game_over: self.game_over,
            time_ticks: self.time_ticks,
        }
    }
}

/// Read-only view handed to the renderer each frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub ball_pos: Vec2,
    pub ball_dir: Vec2,
    pub paddle_pos: Vec2,
    pub score: u32,
    pub game_over: bool,
    pub time_ticks: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_pre_game() {
        let state = GameState::new(Vec2::new(400.0, 800.0), Vec2::Y);
        assert!(state.game_over);
        assert_eq!(state.score, 0);
        assert_eq!(state.ball.pos, Vec2::new(200.0, 400.0));
        assert_eq!(state.ball.speed, SPEED);
    }

    #[test]
    fn test_paddle_layout() {
        let paddle = Paddle::for_screen(Vec2::new(400.0, 800.0));
        assert_eq!(paddle.pos, Vec2::new(100.0, 700.0));
        assert_eq!(paddle.size, Vec2::new(200.0, PADDLE_HEIGHT));
    }

    #[test]
    fn test_reset_run_keeps_direction() {
        let dir = Vec2::new(0.6, -0.8);
        let mut state = GameState::new(Vec2::new(400.0, 800.0), dir);
        state.ball.pos = Vec2::new(12.0, 790.0);
        state.score = 9;
        state.reset_run();
        assert!(!state.game_over);
        assert_eq!(state.score, 0);
        assert_eq!(state.ball.pos, Vec2::new(200.0, 400.0));
        assert_eq!(state.ball.dir, dir);
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = GameState::new(Vec2::new(400.0, 800.0), Vec2::X);
        let json = serde_json::to_string(&state.snapshot()).unwrap();
        assert!(json.contains("\"game_over\":true"));
        assert!(json.contains("\"score\":0"));
    }
}
