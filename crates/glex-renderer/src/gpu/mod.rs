//! wgpu backend: surface setup, the list pipeline, and [`GpuContext`].

mod context;
mod pipeline;
mod types;
mod uniforms;

pub use context::GpuContext;
pub use pipeline::DEPTH_FORMAT;
pub use types::{list_vertices, ListVertex, PhysicalSize, RendererError};
pub use uniforms::{fit_viewport, DrawUniforms, FittedViewport, OPENGL_TO_WGPU_MATRIX};
