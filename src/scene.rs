//! The letter H, composed out of small tori

use crate::buffer::FrameBuffer;
use crate::config::RenderConfig;
use crate::torus::{Rotation, SurfaceSampler, TorusPlacement};
use nalgebra::Vector3;

/// Ring radius shared by every segment
pub const SEGMENT_MAJOR_RADIUS: f32 = 0.7;

/// Tube radius shared by every segment
pub const SEGMENT_MINOR_RADIUS: f32 = 0.5;

/// Horizontal offset of each leg from the center
const LEG_OFFSET: f32 = 5.0;

/// Tori per stroke
const STROKE_SEGMENTS: usize = 12;

/// A fixed set of tori drawn with one shared rotation
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphScene {
    pub placements: Vec<TorusPlacement>,
}

impl Default for GlyphScene {
    fn default() -> Self {
        Self::letter_h()
    }
}

impl GlyphScene {
    /// Two vertical legs of 12 tori each (y = -6 ..= 5) at x = -5 and x = 5,
    /// joined by a bar of 12 tori along y = 0 (x = -4 ..= 4.8, 0.8 apart)
    pub fn letter_h() -> Self {
        let segment = |x: f32, y: f32| {
            TorusPlacement::new(
                Vector3::new(x, y, 0.0),
                SEGMENT_MAJOR_RADIUS,
                SEGMENT_MINOR_RADIUS,
            )
        };

        let mut placements = Vec::with_capacity(STROKE_SEGMENTS * 3);

        for x in [-LEG_OFFSET, LEG_OFFSET] {
            placements.extend((0..STROKE_SEGMENTS).map(|i| segment(x, -6.0 + i as f32)));
        }

        placements.extend((0..STROKE_SEGMENTS).map(|i| segment(-4.0 + 0.8 * i as f32, 0.0)));

        Self { placements }
    }

    /// Draw every placement into `frame`. Returns the number of depth-test wins.
    pub fn render(&self, sampler: &SurfaceSampler, rotation: Rotation, frame: &mut FrameBuffer) -> usize {
        self.placements
            .iter()
            .map(|placement| sampler.render_torus(placement, rotation, frame))
            .sum()
    }
}

/// Rotation angles over time.
///
/// Angles are derived from the frame count rather than accumulated, so frame N
/// always uses exactly `start + N * step`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    pub start: Rotation,
    pub step_a: f32,
    pub step_b: f32,
    frames: u64,
}

impl RotationState {
    pub fn new(start: Rotation, step_a: f32, step_b: f32) -> Self {
        Self { start, step_a, step_b, frames: 0 }
    }

    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(Rotation::default(), config.rot_speed_a, config.rot_speed_b)
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Angles after `frames` advances from `start`
    pub fn at_frame(&self, frames: u64) -> Rotation {
        let n = frames as f32;
        Rotation::new(self.start.a + n * self.step_a, self.start.b + n * self.step_b)
    }

    pub fn current(&self) -> Rotation {
        self.at_frame(self.frames)
    }

    pub fn advance(&mut self) {
        self.frames += 1;
    }
}
