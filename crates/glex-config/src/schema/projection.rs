//! Projection selection.

use serde::{Deserialize, Serialize};

/// Which projection the demo loop installs each frame.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum ProjectionMode {
    #[default]
    Frustum,
    Ortho,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    pub mode: ProjectionMode,
    /// Horizontal viewport factor passed to the ortho reshape (valid range: 0.1-4.0).
    pub ortho_scale: f32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            mode: ProjectionMode::Frustum,
            ortho_scale: 1.0,
        }
    }
}
