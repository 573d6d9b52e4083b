//! ASCII "H" rasterizer
//!
//! Renders a rotating letter H, built out of small tori, to the terminal with a
//! software rasterizer: parametric surface sampling, analytic normals, Lambertian
//! lighting, perspective projection and a depth buffer.

pub mod buffer;
pub mod config;
pub mod driver;
pub mod scene;
pub mod terminal;
pub mod torus;

pub use buffer::{FrameBuffer, Grid};
pub use config::{ConfigError, RenderConfig};
pub use driver::Animation;
pub use scene::{GlyphScene, RotationState};
pub use terminal::TerminalSink;
pub use torus::{Projection, Rotation, SurfaceSampler, TorusPlacement};

/// Screen width in characters
pub const SCREEN_WIDTH: usize = 120;

/// Screen height in characters
pub const SCREEN_HEIGHT: usize = 40;

/// Number of shading levels
pub const PALETTE_LEN: usize = 12;

/// Shading characters from dimmest to brightest
pub const SHADING_PALETTE: [char; PALETTE_LEN] =
    ['.', ',', '-', '~', ':', ';', '=', '!', '*', '#', '$', '@'];

/// Glyph used for empty cells
pub const BLANK: char = ' ';

/// Errors surfaced by the animation
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Terminal write failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
