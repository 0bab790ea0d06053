//! Camera: eye position, orientation, and the active projection.

use crate::context::{ContextError, GraphicsContext, MatrixMode};
use crate::matrix::{self, Mat4, Orientation};
use crate::projection::Projection;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Camera {
    position: [f32; 3],
    orientation: Orientation,
    projection: Projection,
}

impl Camera {
    pub fn new(position: [f32; 3], projection: Projection) -> Self {
        Self {
            position,
            orientation: Orientation::default(),
            projection,
        }
    }

    pub fn position(&self) -> [f32; 3] {
        self.position
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Move to an absolute position. The orientation is reset, so the view
    /// becomes a pure translation.
    pub fn translate_to(&mut self, x: f32, y: f32, z: f32) {
        self.position = [x, y, z];
        self.orientation = Orientation::default();
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    pub fn set_projection(&mut self, projection: Projection) {
        self.projection = projection;
    }

    /// Rotation × translation. Exactly the translation when unrotated.
    pub fn view_matrix(&self) -> Mat4 {
        let [x, y, z] = self.position;
        let translation = matrix::translate(x, y, z);
        if self.orientation.is_identity() {
            translation
        } else {
            matrix::mul(&self.orientation.rotation_matrix(), &translation)
        }
    }

    /// Replace the context's model-view with this camera's view.
    pub fn apply_view<C: GraphicsContext + ?Sized>(&self, ctx: &mut C) -> Result<(), ContextError> {
        ctx.load_matrix(MatrixMode::ModelView, &self.view_matrix())
    }

    pub fn apply_projection<C: GraphicsContext + ?Sized>(
        &self,
        ctx: &mut C,
    ) -> Result<(), ContextError> {
        ctx.load_matrix(MatrixMode::Projection, &self.projection.matrix())
    }
}
