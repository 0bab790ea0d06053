//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Initial window geometry and pixel scaling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Logical width in pixels (valid range: 200-16384).
    pub width: u32,
    /// Logical height in pixels (valid range: 200-16384).
    pub height: u32,
    /// Multiplier from window units to framebuffer pixels (valid range: 0.25-8.0).
    pub screen_scale: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "glex".into(),
            width: 1280,
            height: 800,
            screen_scale: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_config_defaults() {
        let config = WindowConfig::default();
        assert_eq!(config.title, "glex");
        assert_eq!(config.width, 1280);
        assert_eq!(config.height, 800);
        assert!((config.screen_scale - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn window_config_partial_toml() {
        let config: WindowConfig = toml::from_str("screen_scale = 2.0\ntitle = \"demo\"").unwrap();
        assert_eq!(config.title, "demo");
        assert!((config.screen_scale - 2.0).abs() < f32::EPSILON);
        assert_eq!(config.width, 1280);
    }
}
