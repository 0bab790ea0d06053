//! Sphere primitive configuration.

use serde::{Deserialize, Serialize};

/// Seed polyhedron subdivided to approximate the sphere.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum SeedKind {
    #[default]
    Octahedron,
    Icosahedron,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereConfig {
    /// Sphere radius in world units, pixels in ortho mode (valid range: (0, 10000]).
    pub radius: f64,
    /// Recursion depth for face subdivision (valid range: 0-8).
    pub subdivision: u32,
    pub seed: SeedKind,
    /// Spin around the Y axis in degrees per second (valid range: -720-720).
    pub rotation_speed: f32,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            radius: 1.0,
            subdivision: 3,
            seed: SeedKind::Octahedron,
            rotation_speed: 30.0,
        }
    }
}
