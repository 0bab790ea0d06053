//! Configuration schema types for glex.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod camera;
mod projection;
mod sphere;
mod system;
mod window;

pub use camera::*;
pub use projection::*;
pub use sphere::*;
pub use system::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for glex.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct GlexConfig {
    pub window: WindowConfig,
    pub projection: ProjectionConfig,
    pub camera: CameraConfig,
    pub sphere: SphereConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config: GlexConfig = toml::from_str("").unwrap();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.window.height, 800);
        assert_eq!(config.projection.mode, ProjectionMode::Frustum);
        assert_eq!(config.sphere.seed, SeedKind::Octahedron);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn partial_toml_keeps_other_sections() {
        let toml_str = r#"
[projection]
mode = "ortho"
ortho_scale = 0.5

[sphere]
seed = "icosahedron"
subdivision = 2
"#;
        let config: GlexConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.projection.mode, ProjectionMode::Ortho);
        assert!((config.projection.ortho_scale - 0.5).abs() < f32::EPSILON);
        assert_eq!(config.sphere.seed, SeedKind::Icosahedron);
        assert_eq!(config.sphere.subdivision, 2);
        assert!((config.sphere.radius - 1.0).abs() < f64::EPSILON);
        assert_eq!(config.window.title, "glex");
    }
}
