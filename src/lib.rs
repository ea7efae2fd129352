//! Island Pong - a one-screen bounce game
//!
//! Core modules:
//! - `sim`: Fixed-tick motion, collisions, game state
//! - `engine`: `MotionEngine`, the facade the presentation layer talks to
//! - `settings`: Session configuration

pub mod engine;
pub mod settings;
pub mod sim;

pub use engine::MotionEngine;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Nominal frame rate of the tick timer
    pub const FPS: f32 = 60.0;
    /// Tick interval in milliseconds (the timer runs at 500/FPS, not 1000/FPS)
    pub const TICK_MS: f32 = 500.0 / FPS;
    /// Maximum ticks run per clock advance to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Ball displacement per tick
    pub const SPEED: f32 = 10.0;
    /// Side of the square ball
    pub const BALL_WIDTH: f32 = 25.0;

    /// Island (static obstacle) rectangle, top-left origin
    pub const ISLAND_X: f32 = 150.0;
    pub const ISLAND_Y: f32 = 11.0;
    pub const ISLAND_W: f32 = 127.0;
    pub const ISLAND_H: f32 = 37.0;

    /// Paddle height; width is half the screen width
    pub const PADDLE_HEIGHT: f32 = 37.0;
    /// Distance from the bottom of the screen to the paddle top
    pub const PADDLE_FLOOR_OFFSET: f32 = 100.0;

    /// Default screen (portrait phone)
    pub const DEFAULT_SCREEN_WIDTH: f32 = 400.0;
    pub const DEFAULT_SCREEN_HEIGHT: f32 = 800.0;
}

/// Scale a vector to unit length.
///
/// Returns `None` for the zero vector or non-finite input instead of
/// producing a NaN direction.
#[inline]
pub fn normalize_direction(v: Vec2) -> Option<Vec2> {
    v.try_normalize()
}

/// Position after one tick of travel: `pos + dir * speed`, unclamped.
#[inline]
pub fn next_position(pos: Vec2, dir: Vec2, speed: f32) -> Vec2 {
    pos + dir * speed
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_zero_is_none() {
        assert!(normalize_direction(Vec2::ZERO).is_none());
        assert!(normalize_direction(Vec2::new(f32::NAN, 1.0)).is_none());
    }

    #[test]
    fn test_normalize_axis() {
        let n = normalize_direction(Vec2::new(0.0, 3.0)).unwrap();
        assert!((n.x).abs() < 1e-6);
        assert!((n.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_next_position_unclamped() {
        let p = next_position(Vec2::new(-5.0, 2.0), Vec2::new(-1.0, 0.0), 10.0);
        assert_eq!(p, Vec2::new(-15.0, 2.0));
    }

    #[test]
    fn test_tick_interval() {
        assert!((consts::TICK_MS - 8.333_333).abs() < 1e-3);
    }

    proptest! {
        #[test]
        fn prop_normalized_has_unit_length(x in -1.0e4f32..1.0e4, y in -1.0e4f32..1.0e4) {
            prop_assume!(x.abs() > 1e-3 || y.abs() > 1e-3);
            let n = normalize_direction(Vec2::new(x, y)).unwrap();
            prop_assert!((n.length() - 1.0).abs() < 1e-4);
        }
    }
}
