use serde::{Deserialize, Serialize};

/// Initial camera translation applied to the model-view matrix.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: -3.0,
        }
    }
}
