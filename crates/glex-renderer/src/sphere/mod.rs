//! Sphere primitive: recursive subdivision of a seed polyhedron, cached in
//! a display list on first draw.

mod seed;
mod types;


pub use seed::{Polyhedron, Seed};
pub use types::{Face, Vec3};

use glex_common::GlexError;

use crate::context::{ContextError, DisplayList, GraphicsContext, MatrixMode};
use crate::matrix::{self, Orientation};

use types::{add, project_to_radius, scale};

/// Deepest subdivision accepted. An octahedron at this depth is already
/// 524288 triangles.
pub const MAX_SUBDIVISION_DEPTH: u32 = 8;

pub const DEFAULT_SUBDIVISION_DEPTH: u32 = 3;

enum ListCache {
    Uninitialized,
    Cached(DisplayList),
}

pub struct Sphere {
    radius: f64,
    depth: u32,
    seed: Polyhedron,
    orientation: Orientation,
    cache: ListCache,
}

impl Sphere {
    /// Octahedron-seeded sphere at the default subdivision depth.
    pub fn new(radius: f64) -> Result<Self, GlexError> {
        Self::with_seed(radius, Seed::Octahedron, DEFAULT_SUBDIVISION_DEPTH)
    }

    pub fn with_seed(radius: f64, seed: Seed, depth: u32) -> Result<Self, GlexError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(GlexError::InvalidRadius(radius));
        }
        if depth > MAX_SUBDIVISION_DEPTH {
            return Err(GlexError::SubdivisionTooDeep {
                depth,
                max: MAX_SUBDIVISION_DEPTH,
            });
        }

        let seed = seed.into_polyhedron();
        seed.validate()?;

        Ok(Self {
            radius,
            depth,
            seed,
            orientation: Orientation::default(),
            cache: ListCache::Uninitialized,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Rotation applied on top of the current model-view at draw time.
    /// Does not invalidate the cached list.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    pub fn is_cached(&self) -> bool {
        matches!(self.cache, ListCache::Cached(_))
    }

    /// Number of triangles `faces()` produces.
    pub fn face_count(&self) -> usize {
        self.seed.faces.len() * 4usize.pow(self.depth)
    }

    /// Tessellate the seed down to `depth` levels of subdivision.
    pub fn faces(&self) -> Vec<Face> {
        let mut out = Vec::with_capacity(self.face_count());
        for face in self.seed.faces_on_sphere(self.radius) {
            subdivide_face(self.radius, self.depth, face.a, face.b, face.c, &mut out);
        }
        out
    }

    /// Replay the sphere under the current model-view, building the list on
    /// first use. The model-view is restored before returning, even on error.
    pub fn draw<C: GraphicsContext + ?Sized>(&mut self, ctx: &mut C) -> Result<(), ContextError> {
        if self.orientation.is_identity() {
            return self.draw_list(ctx);
        }

        let saved = ctx.matrix(MatrixMode::ModelView);
        let rotated = matrix::mul(&saved, &self.orientation.rotation_matrix());
        ctx.load_matrix(MatrixMode::ModelView, &rotated)?;

        let drawn = self.draw_list(ctx);
        let restored = ctx.load_matrix(MatrixMode::ModelView, &saved);
        drawn.and(restored)
    }

    fn draw_list<C: GraphicsContext + ?Sized>(&mut self, ctx: &mut C) -> Result<(), ContextError> {
        if let ListCache::Uninitialized = self.cache {
            let faces = self.faces();
            let list = ctx.create_list(&faces)?;
            tracing::debug!(
                radius = self.radius,
                depth = self.depth,
                faces = faces.len(),
                "cached sphere tessellation"
            );
            self.cache = ListCache::Cached(list);
        }

        match &self.cache {
            ListCache::Cached(list) => ctx.call_list(list),
            ListCache::Uninitialized => Ok(()),
        }
    }
}

impl std::fmt::Debug for Sphere {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sphere")
            .field("radius", &self.radius)
            .field("depth", &self.depth)
            .field("seed_faces", &self.seed.faces.len())
            .field("orientation", &self.orientation)
            .field("cached", &self.is_cached())
            .finish()
    }
}

/// Emit (a, b, c) once `recurse` reaches zero, otherwise split it into four
/// children through the edge midpoints. Children keep the parent's winding.
fn subdivide_face(radius: f64, recurse: u32, a: Vec3, b: Vec3, c: Vec3, out: &mut Vec<Face>) {
    if recurse == 0 {
        out.push(Face::new(a, b, c));
        return;
    }

    let ab = midpoint_on_sphere(a, b, radius);
    let bc = midpoint_on_sphere(b, c, radius);
    let ca = midpoint_on_sphere(c, a, radius);

    let next = recurse - 1;
    subdivide_face(radius, next, a, ab, ca, out);
    subdivide_face(radius, next, ab, b, bc, out);
    subdivide_face(radius, next, ca, bc, c, out);
    subdivide_face(radius, next, ab, bc, ca, out);
}

fn midpoint_on_sphere(p: Vec3, q: Vec3, radius: f64) -> Vec3 {
    project_to_radius(scale(add(p, q), 0.5), radius)
}
