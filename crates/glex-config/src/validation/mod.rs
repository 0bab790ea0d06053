//! Full configuration validation.
//!
//! Validates every numeric range and collects all errors into a single
//! `ConfigError`.

mod helpers;


use crate::schema::GlexConfig;
use glex_common::ConfigError;

use helpers::{validate_range, validate_range_f64};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &GlexConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_window(&mut errors, config);
    validate_projection(&mut errors, config);
    validate_camera(&mut errors, config);
    validate_sphere(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_window(errors: &mut Vec<String>, config: &GlexConfig) {
    validate_range(errors, "window.width", config.window.width, 200, 16384);
    validate_range(errors, "window.height", config.window.height, 200, 16384);
    validate_range_f64(
        errors,
        "window.screen_scale",
        config.window.screen_scale as f64,
        0.25,
        8.0,
    );
}

fn validate_projection(errors: &mut Vec<String>, config: &GlexConfig) {
    validate_range_f64(
        errors,
        "projection.ortho_scale",
        config.projection.ortho_scale as f64,
        0.1,
        4.0,
    );
}

fn validate_camera(errors: &mut Vec<String>, config: &GlexConfig) {
    let camera = &config.camera;
    for (name, value) in [("camera.x", camera.x), ("camera.y", camera.y), ("camera.z", camera.z)] {
        if !value.is_finite() {
            errors.push(format!("{name} = {value} must be finite"));
        }
    }
}

fn validate_sphere(errors: &mut Vec<String>, config: &GlexConfig) {
    let radius = config.sphere.radius;
    if !(radius > 0.0 && radius <= 10_000.0) {
        errors.push(format!("sphere.radius = {radius} is out of range (0, 10000]"));
    }
    validate_range(errors, "sphere.subdivision", config.sphere.subdivision, 0, 8);
    validate_range_f64(
        errors,
        "sphere.rotation_speed",
        config.sphere.rotation_speed as f64,
        -720.0,
        720.0,
    );
}
