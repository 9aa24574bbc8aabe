//! Effect configuration.
//!
//! The host owns persistence and the preferences UI; this is the numeric
//! bundle the effects consume. Validation happens once, at effect
//! construction - the step loop has no NaN guard, so bad values are rejected
//! up front instead of propagating silently.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration rejected at effect construction.
#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("friction must be positive, got {0}")]
    Friction(f32),
    #[error("spring constant must be positive, got {0}")]
    SpringK(f32),
    #[error("speedup factor must be positive, got {0}")]
    SpeedupFactor(f32),
    #[error("mass must lie in (0, 100), got {0}")]
    Mass(f32),
    #[error("tile counts must be at least 1, got {x}x{y}")]
    Tiles { x: u32, y: u32 },
}

/// User-tunable effect settings.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Velocity damping coefficient.
    pub friction: f32,
    /// Spring stiffness. Also scales the resize pointer-delta accumulation.
    pub spring_k: f32,
    /// Elapsed time is divided by this to get the sub-step count, so larger
    /// values slow the wobble down.
    pub speedup_factor: f32,
    /// Configured mass in (0, 100). The simulation integrates with an
    /// effective mass of `100 - mass`, so heavier settings wobble faster.
    pub mass: f32,
    /// Horizontal tessellation density of the sampled surface.
    pub tiles_x: u32,
    /// Vertical tessellation density of the sampled surface.
    pub tiles_y: u32,
    /// Snap wobble when a window maximizes.
    pub maximize_effect: bool,
    /// Elastic bow while resizing.
    pub resize_effect: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            friction: 3.5,
            spring_k: 3.8,
            speedup_factor: 2.0,
            mass: 70.0,
            tiles_x: 6,
            tiles_y: 4,
            maximize_effect: true,
            resize_effect: true,
        }
    }
}

impl Settings {
    /// Check every field against its supported range.
    ///
    /// Comparisons are written so NaN fails them too.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.friction > 0.0) {
            return Err(SettingsError::Friction(self.friction));
        }
        if !(self.spring_k > 0.0) {
            return Err(SettingsError::SpringK(self.spring_k));
        }
        if !(self.speedup_factor > 0.0) {
            return Err(SettingsError::SpeedupFactor(self.speedup_factor));
        }
        if !(self.mass > 0.0 && self.mass < 100.0) {
            return Err(SettingsError::Mass(self.mass));
        }
        if self.tiles_x < 1 || self.tiles_y < 1 {
            return Err(SettingsError::Tiles {
                x: self.tiles_x,
                y: self.tiles_y,
            });
        }
        Ok(())
    }
}
