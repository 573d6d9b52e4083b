//! Render settings
//!
//! Everything is a compile-time constant; `RenderConfig` just gathers them into
//! one value so tests can shrink the screen or drop the frame delay.

use crate::{PALETTE_LEN, SCREEN_HEIGHT, SCREEN_WIDTH, SHADING_PALETTE};
use nalgebra::Vector3;
use std::time::Duration;

/// Rotation about the first axis per frame (radians)
pub const ROT_SPEED_A: f32 = 0.27;

/// Rotation about the second axis per frame (radians)
pub const ROT_SPEED_B: f32 = 0.18;

/// Pause between frames
pub const FRAME_DELAY: Duration = Duration::from_millis(12);

/// Projection focal length (K1)
pub const FOCAL_LENGTH: f32 = 80.0;

/// Distance added to every rotated depth before the divide
pub const CAMERA_OFFSET: f32 = 40.0;

/// Step around the ring (theta)
pub const THETA_STEP: f32 = 0.07;

/// Step around the tube (phi)
pub const PHI_STEP: f32 = 0.02;

#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub width: usize,
    pub height: usize,
    /// Light direction; used as given, not normalized
    pub light: Vector3<f32>,
    pub rot_speed_a: f32,
    pub rot_speed_b: f32,
    pub frame_delay: Duration,
    pub focal_length: f32,
    pub camera_offset: f32,
    pub theta_step: f32,
    pub phi_step: f32,
    pub palette: [char; PALETTE_LEN],
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            light: Vector3::new(0.0, 1.0, -1.0),
            rot_speed_a: ROT_SPEED_A,
            rot_speed_b: ROT_SPEED_B,
            frame_delay: FRAME_DELAY,
            focal_length: FOCAL_LENGTH,
            camera_offset: CAMERA_OFFSET,
            theta_step: THETA_STEP,
            phi_step: PHI_STEP,
            palette: SHADING_PALETTE,
        }
    }
}

impl RenderConfig {
    /// Check the settings can drive a render without degenerate loops or divides
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Validation(format!(
                "screen size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }

        for (name, step) in [("theta_step", self.theta_step), ("phi_step", self.phi_step)] {
            if !step.is_finite() || step <= 0.0 {
                return Err(ConfigError::Validation(format!(
                    "{} must be a positive number, got {}",
                    name, step
                )));
            }
        }

        for (name, value) in [("focal_length", self.focal_length), ("camera_offset", self.camera_offset)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Validation(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration validation error: {0}")]
    Validation(String),
}
