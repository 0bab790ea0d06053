//! Immediate-mode style rendering over an explicit graphics context.
//!
//! Every operation takes the context it draws into; nothing here reaches
//! for ambient global state. [`HeadlessContext`] keeps everything in memory
//! and backs the tests, [`GpuContext`] drives a wgpu surface.

pub mod camera;
pub mod context;
pub mod gpu;
pub mod matrix;
pub mod projection;
pub mod sphere;

pub use camera::Camera;
pub use context::{
    ClearBuffers, ClearColor, ContextError, DisplayList, GraphicsContext, HeadlessContext,
    ListId, MatrixMode, Viewport,
};
pub use gpu::{GpuContext, PhysicalSize, RendererError};
pub use matrix::{Mat4, Orientation};
pub use projection::{ClipBounds, Projection};
pub use sphere::{Face, Polyhedron, Seed, Sphere, MAX_SUBDIVISION_DEPTH};
