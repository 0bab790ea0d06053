//! 4×4 matrix math for projection and model-view transforms.
//!
//! Column-major layout matching WGSL `mat4x4<f32>` and the GL fixed-function
//! matrix stack: element `(row, col)` lives at `col * 4 + row`.

/// 4×4 column-major matrix stored as `[f32; 16]`.
pub type Mat4 = [f32; 16];

/// Identity matrix.
pub const IDENTITY: Mat4 = [
    1.0, 0.0, 0.0, 0.0, // col 0
    0.0, 1.0, 0.0, 0.0, // col 1
    0.0, 0.0, 1.0, 0.0, // col 2
    0.0, 0.0, 0.0, 1.0, // col 3
];

/// Perspective projection from explicit clip-plane extents (glFrustum).
///
/// `near` and `far` are distances to the clip planes and must be > 0.
pub fn frustum(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
    let width = right - left;
    let height = top - bottom;
    let depth = far - near;

    [
        2.0 * near / width,
        0.0,
        0.0,
        0.0,
        0.0,
        2.0 * near / height,
        0.0,
        0.0,
        (right + left) / width,
        (top + bottom) / height,
        -(far + near) / depth,
        -1.0,
        0.0,
        0.0,
        -2.0 * far * near / depth,
        0.0,
    ]
}

/// Orthographic projection mapping the given box onto clip space (glOrtho).
pub fn ortho(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
    let width = right - left;
    let height = top - bottom;
    let depth = far - near;

    [
        2.0 / width,
        0.0,
        0.0,
        0.0,
        0.0,
        2.0 / height,
        0.0,
        0.0,
        0.0,
        0.0,
        -2.0 / depth,
        0.0,
        -(right + left) / width,
        -(top + bottom) / height,
        -(far + near) / depth,
        1.0,
    ]
}

/// Rotation around the X axis.
pub fn rotate_x(angle: f32) -> Mat4 {
    let c = angle.cos();
    let s = angle.sin();
    [
        1.0, 0.0, 0.0, 0.0, 0.0, c, s, 0.0, 0.0, -s, c, 0.0, 0.0, 0.0, 0.0, 1.0,
    ]
}

/// Rotation around the Y axis.
pub fn rotate_y(angle: f32) -> Mat4 {
    let c = angle.cos();
    let s = angle.sin();
    [
        c, 0.0, -s, 0.0, 0.0, 1.0, 0.0, 0.0, s, 0.0, c, 0.0, 0.0, 0.0, 0.0, 1.0,
    ]
}

/// Rotation around the Z axis.
pub fn rotate_z(angle: f32) -> Mat4 {
    let c = angle.cos();
    let s = angle.sin();
    [
        c, s, 0.0, 0.0, -s, c, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0,
    ]
}

/// Translation matrix.
pub fn translate(x: f32, y: f32, z: f32) -> Mat4 {
    [
        1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, x, y, z, 1.0,
    ]
}

/// Multiply two 4×4 column-major matrices: result = a × b.
pub fn mul(a: &Mat4, b: &Mat4) -> Mat4 {
    let mut out = [0.0f32; 16];
    for col in 0..4 {
        for row in 0..4 {
            let mut sum = 0.0;
            for k in 0..4 {
                sum += a[k * 4 + row] * b[col * 4 + k];
            }
            out[col * 4 + row] = sum;
        }
    }
    out
}

/// Transform the point `(x, y, z, 1)`, returning homogeneous coordinates.
pub fn transform_point(m: &Mat4, p: [f32; 3]) -> [f32; 4] {
    let mut out = [0.0f32; 4];
    for (row, value) in out.iter_mut().enumerate() {
        *value = m[row] * p[0] + m[4 + row] * p[1] + m[8 + row] * p[2] + m[12 + row];
    }
    out
}

/// Euler angles in degrees, applied about X, then Y, then Z.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Orientation {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Orientation {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn is_identity(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    /// `Rx * Ry * Rz`, the product glRotate calls in X, Y, Z order would build.
    pub fn rotation_matrix(&self) -> Mat4 {
        let rx = rotate_x(self.x.to_radians());
        let ry = rotate_y(self.y.to_radians());
        let rz = rotate_z(self.z.to_radians());
        mul(&rx, &mul(&ry, &rz))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: &Mat4, b: &Mat4, eps: f32) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < eps)
    }

    #[test]
    fn identity_mul_identity() {
        let result = mul(&IDENTITY, &IDENTITY);
        assert!(approx_eq(&result, &IDENTITY, 1e-6));
    }

    #[test]
    fn translate_then_identity() {
        let t = translate(1.0, 2.0, 3.0);
        let result = mul(&t, &IDENTITY);
        assert!(approx_eq(&result, &t, 1e-6));
    }

    #[test]
    fn translate_moves_point() {
        let p = transform_point(&translate(1.0, -2.0, 0.5), [1.0, 1.0, 1.0]);
        assert_eq!(p, [2.0, -1.0, 1.5, 1.0]);
    }

    #[test]
    fn rotate_z_90_degrees() {
        let p = transform_point(&rotate_z(std::f32::consts::FRAC_PI_2), [1.0, 0.0, 0.0]);
        assert!(p[0].abs() < 1e-6);
        assert!((p[1] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn rotate_x_90_degrees() {
        let r = rotate_x(std::f32::consts::FRAC_PI_2);
        // Y axis maps to Z axis
        assert!((r[5] - 0.0).abs() < 1e-5);
        assert!((r[6] - 1.0).abs() < 1e-5);
    }

    #[test]
    fn frustum_maps_near_corners_to_ndc_corners() {
        let m = frustum(-0.05, 0.05, -0.03, 0.03, 0.1, 500.0);
        let p = transform_point(&m, [0.05, 0.03, -0.1]);
        let ndc = [p[0] / p[3], p[1] / p[3], p[2] / p[3]];
        assert!((ndc[0] - 1.0).abs() < 1e-5);
        assert!((ndc[1] - 1.0).abs() < 1e-5);
        assert!((ndc[2] - (-1.0)).abs() < 1e-4);
        // Perspective divide term
        assert_eq!(m[11], -1.0);
    }

    #[test]
    fn frustum_far_plane_maps_to_one() {
        let m = frustum(-1.0, 1.0, -1.0, 1.0, 1.0, 10.0);
        let p = transform_point(&m, [0.0, 0.0, -10.0]);
        assert!((p[2] / p[3] - 1.0).abs() < 1e-5);
    }

    #[test]
    fn ortho_maps_box_to_unit_cube() {
        let m = ortho(0.0, 800.0, 0.0, 600.0, -100.1, 100.1);
        let lo = transform_point(&m, [0.0, 0.0, 100.1]);
        let hi = transform_point(&m, [800.0, 600.0, -100.1]);
        assert!((lo[0] + 1.0).abs() < 1e-5);
        assert!((lo[1] + 1.0).abs() < 1e-5);
        assert!((lo[2] + 1.0).abs() < 1e-5);
        assert!((hi[0] - 1.0).abs() < 1e-5);
        assert!((hi[1] - 1.0).abs() < 1e-5);
        assert!((hi[2] - 1.0).abs() < 1e-5);
        assert_eq!(lo[3], 1.0);
    }

    #[test]
    fn zero_orientation_is_identity_rotation() {
        let o = Orientation::default();
        assert!(o.is_identity());
        assert!(approx_eq(&o.rotation_matrix(), &IDENTITY, 1e-6));
    }

    #[test]
    fn orientation_applies_about_each_axis() {
        let o = Orientation::new(0.0, 90.0, 0.0);
        let p = transform_point(&o.rotation_matrix(), [0.0, 0.0, 1.0]);
        assert!((p[0] - 1.0).abs() < 1e-5);
        assert!(p[2].abs() < 1e-5);
    }
}
