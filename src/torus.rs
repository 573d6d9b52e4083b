//! Torus surface sampler and shader
//!
//! Walks the parametric surface of one torus, rotates every sample, lights it
//! against a fixed direction and writes the shaded glyph through the depth test.

use crate::buffer::FrameBuffer;
use crate::config::RenderConfig;
use crate::PALETTE_LEN;
use nalgebra::{Rotation3, Vector3};
use std::f32::consts::TAU;

/// Cross products shorter than this are treated as having no normal
const NORMAL_EPSILON: f32 = 1e-6;

/// One torus instance: where it sits and how thick it is
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TorusPlacement {
    pub center: Vector3<f32>,
    /// Ring radius (R)
    pub major_radius: f32,
    /// Tube radius (r)
    pub minor_radius: f32,
}

impl TorusPlacement {
    pub fn new(center: Vector3<f32>, major_radius: f32, minor_radius: f32) -> Self {
        Self { center, major_radius, minor_radius }
    }

    /// World position and unit normal for the given (cos, sin) of theta and phi.
    ///
    /// The normal is the normalized cross product of the analytic tangents
    /// dP/dtheta and dP/dphi. Returns `None` when that cross product vanishes.
    pub fn sample(&self, theta: (f32, f32), phi: (f32, f32)) -> Option<(Vector3<f32>, Vector3<f32>)> {
        let (cos_t, sin_t) = theta;
        let (cos_p, sin_p) = phi;
        let r = self.minor_radius;
        let ring = self.major_radius + r * cos_p;

        let position = self.center + Vector3::new(ring * cos_t, ring * sin_t, r * sin_p);

        let d_theta = Vector3::new(-sin_t * ring, cos_t * ring, 0.0);
        let d_phi = Vector3::new(-sin_p * cos_t * r, -sin_p * sin_t * r, cos_p * r);
        let normal = d_theta.cross(&d_phi).try_normalize(NORMAL_EPSILON)?;

        Some((position, normal))
    }
}

/// Rotation by `a` about the Z axis followed by `b` about the X axis
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rotation {
    pub a: f32,
    pub b: f32,
}

impl Rotation {
    pub fn new(a: f32, b: f32) -> Self {
        Self { a, b }
    }

    pub fn matrix(&self) -> Rotation3<f32> {
        Rotation3::from_axis_angle(&Vector3::x_axis(), self.b)
            * Rotation3::from_axis_angle(&Vector3::z_axis(), self.a)
    }
}

/// Perspective projection onto the character grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub width: usize,
    pub height: usize,
    pub focal_length: f32,
    pub camera_offset: f32,
}

impl Projection {
    pub fn from_config(config: &RenderConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            focal_length: config.focal_length,
            camera_offset: config.camera_offset,
        }
    }

    /// Screen column, screen row and inverse depth of a rotated point.
    ///
    /// Coordinates are truncated toward zero and may land off screen; the frame
    /// buffer discards those. Points at or behind the camera yield `None`.
    pub fn project(&self, point: &Vector3<f32>) -> Option<(i32, i32, f32)> {
        let inv_depth = 1.0 / (point.z + self.camera_offset);
        if !inv_depth.is_finite() || inv_depth <= 0.0 {
            return None;
        }

        let scale = self.focal_length * inv_depth;
        let xp = ((self.width / 2) as f32 + scale * point.x) as i32;
        let yp = ((self.height / 2) as f32 - scale * point.y) as i32;
        Some((xp, yp, inv_depth))
    }
}

/// Map a light dot product to a palette index.
///
/// `[-1, 1]` maps linearly onto `[0, 11]`; anything outside is clamped.
pub fn shade_bucket(dot: f32) -> usize {
    let half = (PALETTE_LEN - 1) as f32 / 2.0;
    ((dot + 1.0) * half).round().clamp(0.0, (PALETTE_LEN - 1) as f32) as usize
}

/// Precomputed (cos, sin) for `0, step, 2*step, ...` while below a full turn
fn angle_table(step: f32) -> Vec<(f32, f32)> {
    (0u32..)
        .map(|i| i as f32 * step)
        .take_while(|&angle| angle < TAU)
        .map(|angle| (angle.cos(), angle.sin()))
        .collect()
}

/// Samples tori at a fixed angular resolution and composites them into a frame
#[derive(Debug, Clone)]
pub struct SurfaceSampler {
    theta: Vec<(f32, f32)>,
    phi: Vec<(f32, f32)>,
    projection: Projection,
    light: Vector3<f32>,
    palette: [char; PALETTE_LEN],
}

impl SurfaceSampler {
    /// Build a sampler from validated settings
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            theta: angle_table(config.theta_step),
            phi: angle_table(config.phi_step),
            projection: Projection::from_config(config),
            light: config.light,
            palette: config.palette,
        }
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Samples taken per torus per frame
    pub fn samples_per_torus(&self) -> usize {
        self.theta.len() * self.phi.len()
    }

    /// Glyph for a rotated unit normal
    pub fn shade(&self, normal: &Vector3<f32>) -> char {
        self.palette[shade_bucket(normal.dot(&self.light))]
    }

    /// Rasterize one torus into `frame`. Returns how many samples won the depth test.
    pub fn render_torus(
        &self,
        placement: &TorusPlacement,
        rotation: Rotation,
        frame: &mut FrameBuffer,
    ) -> usize {
        let rot = rotation.matrix();
        let mut written = 0;
        let mut degenerate = 0;

        for &theta in &self.theta {
            for &phi in &self.phi {
                let Some((position, normal)) = placement.sample(theta, phi) else {
                    degenerate += 1;
                    continue;
                };

                let position = rot * position;
                let normal = rot * normal;
                let glyph = self.shade(&normal);

                if let Some((xp, yp, inv_depth)) = self.projection.project(&position) {
                    if frame.plot(xp, yp, inv_depth, glyph) {
                        written += 1;
                    }
                }
            }
        }

        if degenerate > 0 {
            tracing::trace!(degenerate, ?placement, "Skipped samples without a normal");
        }
        written
    }
}
