//! Per-draw uniforms and the GL-to-wgpu clip-space conversion.

use crate::context::Viewport;
use crate::matrix::{self, Mat4};

use super::PhysicalSize;

/// GL clip space has z in [-w, w]; wgpu wants [0, w].
#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Mat4 = [
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
];

/// Uniform block for one `call_list`, matching `DrawUniforms` in list.wgsl.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DrawUniforms {
    /// Clip-space transform (column-major).
    pub mvp: [f32; 16],
    /// Eye-space transform, for lighting normals.
    pub model_view: [f32; 16],
}

impl DrawUniforms {
    pub fn new(projection: &Mat4, model_view: &Mat4, correction: &Mat4) -> Self {
        let gl_clip = matrix::mul(correction, &matrix::mul(projection, model_view));
        Self {
            mvp: matrix::mul(&OPENGL_TO_WGPU_MATRIX, &gl_clip),
            model_view: *model_view,
        }
    }
}

/// A GL viewport mapped onto a wgpu render target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FittedViewport {
    /// `x, y, width, height` with the origin at the top-left.
    pub rect: [f32; 4],
    /// Clip-space fix-up so geometry lands where the unclamped viewport
    /// would have put it.
    pub correction: Mat4,
}

/// GL accepts viewports larger than the window and clips the result; wgpu
/// rejects them. Clamp to the target and compensate in clip space. Returns
/// `None` when nothing of the viewport is visible.
pub fn fit_viewport(viewport: Viewport, target: PhysicalSize) -> Option<FittedViewport> {
    if viewport.width <= 0 || viewport.height <= 0 {
        return None;
    }

    let (vx, vy) = (viewport.x as f32, viewport.y as f32);
    let (vw, vh) = (viewport.width as f32, viewport.height as f32);
    let (tw, th) = (target.width as f32, target.height as f32);

    let cx = vx.max(0.0);
    let cy = vy.max(0.0);
    let cw = (vx + vw).min(tw) - cx;
    let ch = (vy + vh).min(th) - cy;
    if cw <= 0.0 || ch <= 0.0 {
        return None;
    }

    let sx = vw / cw;
    let sy = vh / ch;
    let tx = (2.0 * (vx - cx) + vw) / cw - 1.0;
    let ty = (2.0 * (vy - cy) + vh) / ch - 1.0;

    #[rustfmt::skip]
    let correction = [
        sx,  0.0, 0.0, 0.0,
        0.0, sy,  0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        tx,  ty,  0.0, 1.0,
    ];

    Some(FittedViewport {
        rect: [cx, th - (cy + ch), cw, ch],
        correction,
    })
}
