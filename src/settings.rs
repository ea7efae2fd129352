//! Session settings
//!
//! Screen size is supplied once at startup and never changes mid-session.
//! Stored as JSON.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Screen width in layout units
    pub screen_width: f32,
    /// Screen height in layout units
    pub screen_height: f32,
    /// Seed for the launch direction; entropy when unset
    pub seed: Option<u64>,

    // === Headless runner ===
    /// Stop after this many ticks even if the ball is still in play
    pub max_ticks: u64,
    /// Let the autopilot drive the paddle
    pub autopilot: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            seed: None,
            max_ticks: 60 * 120,
            autopilot: true,
        }
    }
}

impl Settings {
    pub fn screen(&self) -> Vec2 {
        Vec2::new(self.screen_width, self.screen_height)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Replace unusable screen dimensions with the defaults.
    /// The screen must at least fit the ball.
    pub fn validated(mut self) -> Self {
        if !self.screen_width.is_finite() || self.screen_width <= BALL_WIDTH {
            log::warn!(
                "Invalid screen width {}, using {}",
                self.screen_width,
                DEFAULT_SCREEN_WIDTH
            );
            self.screen_width = DEFAULT_SCREEN_WIDTH;
        }
        if !self.screen_height.is_finite() || self.screen_height <= BALL_WIDTH {
            log::warn!(
                "Invalid screen height {}, using {}",
                self.screen_height,
                DEFAULT_SCREEN_HEIGHT
            );
            self.screen_height = DEFAULT_SCREEN_HEIGHT;
        }
        self
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings.validated();
                }
                Err(e) => log::warn!("Malformed settings in {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Could not read {}: {}", path.display(), e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
