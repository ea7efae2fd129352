//! Simulation module
//!
//! All gameplay logic lives here:
//! - Fixed tick only, constant speed
//! - Axis-aligned geometry in screen coordinates
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod clock;
pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use autopilot::Autopilot;
pub use clock::TickClock;
pub use collision::{BounceAxis, ball_rect_collision};
pub use rect::Rect;
pub use state::{Ball, GameEvent, GameState, Paddle, Snapshot};
pub use tick::{TickReport, tick};
