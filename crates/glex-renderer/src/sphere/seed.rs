//! Seed polyhedra that recursive subdivision starts from.

use glex_common::GlexError;

use super::types::{dot, length, project_to_radius, Face, Vec3};

/// Below this, a projected seed face is treated as degenerate.
const MIN_FACE_AREA: f64 = 1e-9;

/// Minimum cosine between a face normal and its centroid direction. Faces at
/// or below it are edge-on to the origin and would subdivide through it.
const MIN_OUTWARD_COSINE: f64 = 1e-6;

/// Vertices plus counter-clockwise (seen from outside) index triples.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyhedron {
    pub vertices: Vec<Vec3>,
    pub faces: Vec<[usize; 3]>,
}

impl Polyhedron {
    /// Regular octahedron: six axis vertices, eight faces.
    pub fn octahedron() -> Self {
        Self {
            vertices: vec![
                [1.0, 0.0, 0.0],
                [-1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [0.0, -1.0, 0.0],
                [0.0, 0.0, 1.0],
                [0.0, 0.0, -1.0],
            ],
            faces: vec![
                [0, 2, 4],
                [1, 4, 2],
                [0, 4, 3],
                [1, 3, 4],
                [0, 5, 2],
                [1, 2, 5],
                [0, 3, 5],
                [1, 5, 3],
            ],
        }
    }

    /// Regular icosahedron: twelve vertices, twenty faces.
    pub fn icosahedron() -> Self {
        let t = (1.0 + 5.0f64.sqrt()) / 2.0;
        Self {
            vertices: vec![
                [-1.0, t, 0.0],
                [1.0, t, 0.0],
                [-1.0, -t, 0.0],
                [1.0, -t, 0.0],
                [0.0, -1.0, t],
                [0.0, 1.0, t],
                [0.0, -1.0, -t],
                [0.0, 1.0, -t],
                [t, 0.0, -1.0],
                [t, 0.0, 1.0],
                [-t, 0.0, -1.0],
                [-t, 0.0, 1.0],
            ],
            faces: vec![
                [0, 11, 5],
                [0, 5, 1],
                [0, 1, 7],
                [0, 7, 10],
                [0, 10, 11],
                [1, 5, 9],
                [5, 11, 4],
                [11, 10, 2],
                [10, 7, 6],
                [7, 1, 8],
                [3, 9, 4],
                [3, 4, 2],
                [3, 2, 6],
                [3, 6, 8],
                [3, 8, 9],
                [4, 9, 5],
                [2, 4, 11],
                [6, 2, 10],
                [8, 6, 7],
                [9, 8, 1],
            ],
        }
    }

    /// Reject seeds that would recurse into degenerate or inverted geometry.
    pub fn validate(&self) -> Result<(), GlexError> {
        if self.faces.is_empty() {
            return Err(GlexError::MalformedSeed("seed has no faces".into()));
        }

        for (i, v) in self.vertices.iter().enumerate() {
            if !v.iter().all(|c| c.is_finite()) || length(*v) == 0.0 {
                return Err(GlexError::MalformedSeed(format!(
                    "vertex {i} must be finite and non-zero, got {v:?}"
                )));
            }
        }

        for (i, face) in self.faces.iter().enumerate() {
            if let Some(&bad) = face.iter().find(|&&index| index >= self.vertices.len()) {
                return Err(GlexError::MalformedSeed(format!(
                    "face {i} references vertex {bad}, but there are only {}",
                    self.vertices.len()
                )));
            }

            let projected = self.face_on_sphere(face, 1.0);
            let normal = projected.normal();
            let centroid = projected.centroid();
            if length(normal) < MIN_FACE_AREA || length(centroid) < MIN_FACE_AREA {
                return Err(GlexError::MalformedSeed(format!("face {i} is degenerate")));
            }
            let cosine = dot(normal, centroid) / (length(normal) * length(centroid));
            if cosine <= MIN_OUTWARD_COSINE {
                return Err(GlexError::MalformedSeed(format!(
                    "face {i} is not wound counter-clockwise from outside"
                )));
            }
        }

        Ok(())
    }

    /// Seed faces with every vertex projected onto the sphere of `radius`.
    pub fn faces_on_sphere(&self, radius: f64) -> Vec<Face> {
        self.faces
            .iter()
            .map(|face| self.face_on_sphere(face, radius))
            .collect()
    }

    fn face_on_sphere(&self, face: &[usize; 3], radius: f64) -> Face {
        let [a, b, c] = face.map(|i| project_to_radius(self.vertices[i], radius));
        Face::new(a, b, c)
    }
}

/// Which polyhedron a sphere is subdivided from.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Seed {
    #[default]
    Octahedron,
    Icosahedron,
    Custom(Polyhedron),
}

impl Seed {
    pub fn into_polyhedron(self) -> Polyhedron {
        match self {
            Seed::Octahedron => Polyhedron::octahedron(),
            Seed::Icosahedron => Polyhedron::icosahedron(),
            Seed::Custom(polyhedron) => polyhedron,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_seeds_are_valid() {
        assert!(Polyhedron::octahedron().validate().is_ok());
        assert!(Polyhedron::icosahedron().validate().is_ok());
    }

    #[test]
    fn built_in_face_counts() {
        assert_eq!(Polyhedron::octahedron().faces.len(), 8);
        assert_eq!(Polyhedron::icosahedron().faces.len(), 20);
    }

    #[test]
    fn empty_seed_is_rejected() {
        let seed = Polyhedron {
            vertices: vec![[1.0, 0.0, 0.0]],
            faces: vec![],
        };
        assert!(matches!(seed.validate(), Err(GlexError::MalformedSeed(_))));
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let mut seed = Polyhedron::octahedron();
        seed.faces[3] = [0, 1, 6];
        let err = seed.validate().unwrap_err().to_string();
        assert!(err.contains("face 3 references vertex 6"));
    }

    #[test]
    fn zero_vertex_is_rejected() {
        let mut seed = Polyhedron::octahedron();
        seed.vertices[2] = [0.0, 0.0, 0.0];
        assert!(seed.validate().is_err());
    }

    #[test]
    fn nan_vertex_is_rejected() {
        let mut seed = Polyhedron::icosahedron();
        seed.vertices[0][1] = f64::NAN;
        assert!(seed.validate().is_err());
    }

    #[test]
    fn inverted_face_is_rejected() {
        let mut seed = Polyhedron::octahedron();
        seed.faces[0] = [0, 4, 2];
        let err = seed.validate().unwrap_err().to_string();
        assert!(err.contains("counter-clockwise"));
    }

    #[test]
    fn face_spanning_antipodes_is_rejected() {
        let seed = Polyhedron {
            vertices: vec![[1.0, 0.0, 0.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            faces: vec![[0, 1, 2]],
        };
        assert!(seed.validate().is_err());
    }

    #[test]
    fn seed_variants_map_to_polyhedra() {
        assert_eq!(Seed::Octahedron.into_polyhedron(), Polyhedron::octahedron());
        assert_eq!(Seed::Icosahedron.into_polyhedron(), Polyhedron::icosahedron());
        let custom = Polyhedron::octahedron();
        assert_eq!(Seed::Custom(custom.clone()).into_polyhedron(), custom);
    }
}
