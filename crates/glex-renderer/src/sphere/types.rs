//! Triangle and vector primitives for sphere tessellation.

/// A point or direction in double precision.
pub type Vec3 = [f64; 3];

/// A triangle, counter-clockwise when seen from the side its normal faces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    pub a: Vec3,
    pub b: Vec3,
    pub c: Vec3,
}

impl Face {
    pub fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self { a, b, c }
    }

    pub fn vertices(&self) -> [Vec3; 3] {
        [self.a, self.b, self.c]
    }

    /// Unnormalized geometric normal `(b - a) × (c - a)`.
    pub fn normal(&self) -> Vec3 {
        cross(sub(self.b, self.a), sub(self.c, self.a))
    }

    pub fn centroid(&self) -> Vec3 {
        scale(add(add(self.a, self.b), self.c), 1.0 / 3.0)
    }

    /// Whether the winding faces away from the origin.
    pub fn faces_outward(&self) -> bool {
        dot(self.normal(), self.centroid()) > 0.0
    }
}

pub(crate) fn add(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

pub(crate) fn sub(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

pub(crate) fn scale(v: Vec3, s: f64) -> Vec3 {
    [v[0] * s, v[1] * s, v[2] * s]
}

pub(crate) fn dot(a: Vec3, b: Vec3) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

pub(crate) fn cross(a: Vec3, b: Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

pub(crate) fn length(v: Vec3) -> f64 {
    dot(v, v).sqrt()
}

/// Scale `v` onto the sphere of the given radius. `v` must be non-zero.
pub(crate) fn project_to_radius(v: Vec3, radius: f64) -> Vec3 {
    scale(v, radius / length(v))
}
