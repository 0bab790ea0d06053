use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum GlexError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("sphere radius must be finite and positive, got {0}")]
    InvalidRadius(f64),

    #[error("window size must be non-zero, got {width}x{height}")]
    InvalidWindowSize { width: i64, height: i64 },

    #[error("scale must be finite and positive, got {0}")]
    InvalidScale(f32),

    #[error("malformed seed polyhedron: {0}")]
    MalformedSeed(String),

    #[error("subdivision depth {depth} exceeds maximum of {max}")]
    SubdivisionTooDeep { depth: u32, max: u32 },

    #[error("graphics context error: {0}")]
    Context(String),

    #[error("renderer error: {0}")]
    Renderer(String),
}
