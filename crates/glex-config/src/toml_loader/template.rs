//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# glex configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "glex"
# width = 1280           # 200-16384
# height = 800           # 200-16384
# screen_scale = 1.0     # 0.25-8.0, framebuffer pixels per window unit

[projection]
# mode = "frustum"       # frustum, ortho
# ortho_scale = 1.0      # 0.1-4.0

[camera]
# x = 0.0
# y = 0.0
# z = -3.0

[sphere]
# radius = 1.0           # (0, 10000], pixels in ortho mode
# subdivision = 3        # 0-8
# seed = "octahedron"    # octahedron, icosahedron
# rotation_speed = 30.0  # degrees per second, -720-720

[logging]
# level = "info"         # trace, debug, info, warn, error
"##
    .to_string()
}
