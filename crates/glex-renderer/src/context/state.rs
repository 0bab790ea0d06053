use crate::matrix::{Mat4, IDENTITY};

use super::{ClearColor, MatrixMode, Viewport};

/// Server-side state every context tracks between commands.
#[derive(Debug, Clone, PartialEq)]
pub struct ContextState {
    pub viewport: Viewport,
    pub projection: Mat4,
    pub model_view: Mat4,
    pub clear_color: ClearColor,
}

impl ContextState {
    /// Fresh GL defaults: identity matrices, transparent black clear color,
    /// and a viewport covering `width`×`height`.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            viewport: Viewport::new(0, 0, width as i32, height as i32),
            projection: IDENTITY,
            model_view: IDENTITY,
            clear_color: ClearColor::default(),
        }
    }

    pub fn matrix(&self, mode: MatrixMode) -> &Mat4 {
        match mode {
            MatrixMode::Projection => &self.projection,
            MatrixMode::ModelView => &self.model_view,
        }
    }

    pub fn matrix_mut(&mut self, mode: MatrixMode) -> &mut Mat4 {
        match mode {
            MatrixMode::Projection => &mut self.projection,
            MatrixMode::ModelView => &mut self.model_view,
        }
    }
}
