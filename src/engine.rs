//! The motion engine: one game session
//!
//! Owns the game state and is the only thing the presentation layer talks
//! to. The host drives `tick` from a fixed-rate timer while the game is
//! active, feeds pointer samples into the paddle, and reads the state back
//! each frame.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::settings::Settings;
use crate::sim::{GameState, Snapshot, TickReport, tick};
use crate::normalize_direction;

/// Heading used when a launch draw cannot be normalized
pub const FALLBACK_DIRECTION: Vec2 = Vec2::new(
    std::f32::consts::FRAC_1_SQRT_2,
    std::f32::consts::FRAC_1_SQRT_2,
);

/// Unit launch direction from a raw draw, or the fallback for a zero draw
pub fn launch_direction(raw: Vec2) -> Vec2 {
    normalize_direction(raw).unwrap_or_else(|| {
        log::warn!("Cannot normalize launch draw {:?}, using fallback", raw);
        FALLBACK_DIRECTION
    })
}

#[derive(Debug, Clone)]
pub struct MotionEngine {
    state: GameState,
    seed: u64,
}

impl MotionEngine {
    /// New session in the pre-game state, with a random launch direction.
    /// Both components are drawn from `[0, 1)`, so the ball starts out
    /// heading down and to the right.
    pub fn new(settings: &Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        let mut rng = Pcg32::seed_from_u64(seed);
        let raw = Vec2::new(rng.random::<f32>(), rng.random::<f32>());
        let dir = launch_direction(raw);

        log::info!(
            "New session {}x{} seed {} heading ({:.3}, {:.3})",
            settings.screen_width,
            settings.screen_height,
            seed,
            dir.x,
            dir.y
        );

        Self {
            state: GameState::new(settings.screen(), dir),
            seed,
        }
    }

    /// Session with an explicit launch direction (normalized here)
    pub fn with_direction(screen: Vec2, dir: Vec2) -> Self {
        Self {
            state: GameState::new(screen, launch_direction(dir)),
            seed: 0,
        }
    }

    /// Advance one tick if the game is active; no-op after a miss
    pub fn tick(&mut self) -> TickReport {
        if self.state.game_over {
            return TickReport::default();
        }
        tick(&mut self.state)
    }

    /// Move the paddle's left edge to `x`. Unclamped.
    pub fn set_paddle_x(&mut self, x: f32) {
        self.state.paddle.pos.x = x;
    }

    /// Center the paddle under a pointer sample
    pub fn set_paddle_from_pointer(&mut self, pointer_x: f32) {
        self.set_paddle_x(pointer_x - self.state.paddle.size.x / 2.0);
    }

    /// Start a new run: ball to the center, score to zero, game on.
    /// The ball keeps its previous direction.
    pub fn restart(&mut self) {
        self.state.reset_run();
        log::info!("Restarted");
    }

    pub fn is_active(&self) -> bool {
        !self.state.game_over
    }

    pub fn is_game_over(&self) -> bool {
        self.state.game_over
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn ball_position(&self) -> Vec2 {
        self.state.ball.pos
    }

    pub fn ball_direction(&self) -> Vec2 {
        self.state.ball.dir
    }

    pub fn paddle_position(&self) -> Vec2 {
        self.state.paddle.pos
    }

    pub fn paddle_size(&self) -> Vec2 {
        self.state.paddle.size
    }

    pub fn screen(&self) -> Vec2 {
        self.state.screen
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }
}
