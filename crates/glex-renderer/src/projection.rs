//! Projection parameters for the perspective and screen-space reshapes.

use crate::matrix::{self, Mat4};

/// Near clip plane of the perspective frustum.
pub const FRUSTUM_NEAR: f32 = 0.1;
/// Far clip plane of the perspective frustum.
pub const FRUSTUM_FAR: f32 = 500.0;
/// Half-width of the frustum at the near plane.
pub const FRUSTUM_HALF_WIDTH: f32 = FRUSTUM_NEAR * 0.5;
/// Depth extent of the screen-space box. The extra 0.1 keeps geometry at
/// exactly ±100 inside the clip volume.
pub const ORTHO_DEPTH: f32 = 100.1;

/// Clip-plane extents shared by both projection kinds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipBounds {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    pub near: f32,
    pub far: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Perspective frustum; `aspect` is the height/width ratio it was built for.
    Frustum { bounds: ClipBounds, aspect: f32 },
    Ortho { bounds: ClipBounds },
}

impl Projection {
    /// The fixed-plane perspective frustum for a framebuffer of
    /// `width`×`height` pixels. Callers guarantee both are positive.
    pub fn perspective_for(width: i32, height: i32) -> Self {
        let aspect = height as f32 / width as f32;
        let xmax = FRUSTUM_HALF_WIDTH;

        Projection::Frustum {
            bounds: ClipBounds {
                left: -xmax,
                right: xmax,
                bottom: -xmax * aspect,
                top: xmax * aspect,
                near: FRUSTUM_NEAR,
                far: FRUSTUM_FAR,
            },
            aspect,
        }
    }

    /// Pixel-space box `[0, width] × [0, height] × [-100.1, 100.1]`.
    pub fn screen_ortho(width: u32, height: u32) -> Self {
        Projection::Ortho {
            bounds: ClipBounds {
                left: 0.0,
                right: width as f32,
                bottom: 0.0,
                top: height as f32,
                near: -ORTHO_DEPTH,
                far: ORTHO_DEPTH,
            },
        }
    }

    pub fn bounds(&self) -> &ClipBounds {
        match self {
            Projection::Frustum { bounds, .. } | Projection::Ortho { bounds } => bounds,
        }
    }

    /// Height/width ratio of the projected area.
    pub fn aspect(&self) -> f32 {
        match self {
            Projection::Frustum { aspect, .. } => *aspect,
            Projection::Ortho { bounds } => {
                (bounds.top - bounds.bottom) / (bounds.right - bounds.left)
            }
        }
    }

    pub fn matrix(&self) -> Mat4 {
        match self {
            Projection::Frustum { bounds: b, .. } => {
                matrix::frustum(b.left, b.right, b.bottom, b.top, b.near, b.far)
            }
            Projection::Ortho { bounds: b } => {
                matrix::ortho(b.left, b.right, b.bottom, b.top, b.near, b.far)
            }
        }
    }
}

impl Default for Projection {
    fn default() -> Self {
        Projection::perspective_for(1, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perspective_uses_fixed_planes() {
        let p = Projection::perspective_for(1920, 1080);
        let b = p.bounds();
        assert_eq!(b.near, 0.1);
        assert_eq!(b.far, 500.0);
        assert_eq!(b.right, 0.05);
        assert_eq!(b.left, -0.05);
    }

    #[test]
    fn perspective_keeps_exact_aspect() {
        for (w, h) in [(1920, 1080), (800, 600), (333, 1000), (1, 7)] {
            let p = Projection::perspective_for(w, h);
            let expected = h as f32 / w as f32;
            assert_eq!(p.aspect(), expected);
            assert_eq!(p.bounds().top, FRUSTUM_HALF_WIDTH * expected);
            assert_eq!(p.bounds().bottom, -FRUSTUM_HALF_WIDTH * expected);
        }
    }

    #[test]
    fn screen_ortho_bounds() {
        let p = Projection::screen_ortho(640, 480);
        assert_eq!(
            *p.bounds(),
            ClipBounds {
                left: 0.0,
                right: 640.0,
                bottom: 0.0,
                top: 480.0,
                near: -100.1,
                far: 100.1,
            }
        );
        assert_eq!(p.aspect(), 0.75);
    }

    #[test]
    fn matrix_matches_kind() {
        let f = Projection::perspective_for(4, 3);
        assert_eq!(f.matrix()[11], -1.0);
        let o = Projection::screen_ortho(4, 3);
        assert_eq!(o.matrix()[15], 1.0);
    }
}
