//! The graphics-context seam.
//!
//! Mirrors the small slice of fixed-function GL this crate needs: viewport,
//! the projection and model-view matrices, clearing, and display lists.
//! Implementations own all context-side resources; callers hold only
//! [`DisplayList`] handles.

mod headless;
mod list;
mod state;

pub use headless::{HeadlessContext, ReplayedList, DEFAULT_CLEAR_DEPTH};
pub use list::{DisplayList, ListId, ListRegistry};
pub use state::ContextState;

use crate::matrix::Mat4;
use crate::sphere::Face;
use glex_common::GlexError;

/// Errors surfaced by a graphics context.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContextError {
    #[error("graphics context is not current")]
    NotCurrent,

    #[error("display list {0} is unknown or already released")]
    UnknownList(u64),

    #[error("display list {0} belongs to a different context")]
    ForeignList(u64),

    #[error("surface error: {0}")]
    Surface(String),

    #[error("graphics context is out of memory")]
    OutOfMemory,
}

impl From<ContextError> for GlexError {
    fn from(e: ContextError) -> Self {
        GlexError::Context(e.to_string())
    }
}

/// Viewport rectangle in framebuffer pixels, origin at the bottom-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatrixMode {
    Projection,
    ModelView,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClearColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ClearColor {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// Which buffers a [`GraphicsContext::clear`] call resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearBuffers {
    pub color: bool,
    pub depth: bool,
}

impl ClearBuffers {
    pub const COLOR: Self = Self {
        color: true,
        depth: false,
    };
    pub const COLOR_AND_DEPTH: Self = Self {
        color: true,
        depth: true,
    };
}

/// A graphics context bound to the calling thread.
///
/// Readbacks are infallible; everything that issues a command reports
/// [`ContextError`] when the context cannot accept it.
pub trait GraphicsContext {
    fn set_viewport(&mut self, viewport: Viewport) -> Result<(), ContextError>;

    fn viewport(&self) -> Viewport;

    /// Replace the matrix selected by `mode` (glMatrixMode + glLoadMatrix).
    fn load_matrix(&mut self, mode: MatrixMode, matrix: &Mat4) -> Result<(), ContextError>;

    fn matrix(&self, mode: MatrixMode) -> Mat4;

    fn set_clear_color(&mut self, color: ClearColor) -> Result<(), ContextError>;

    fn clear(&mut self, buffers: ClearBuffers) -> Result<(), ContextError>;

    /// Upload `faces` once and return a handle that replays them.
    ///
    /// The context-side resource is released when the handle is dropped.
    fn create_list(&mut self, faces: &[Face]) -> Result<DisplayList, ContextError>;

    /// Replay a list under the current matrices and viewport.
    fn call_list(&mut self, list: &DisplayList) -> Result<(), ContextError>;
}
