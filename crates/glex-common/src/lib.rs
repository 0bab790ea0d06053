pub mod errors;

pub use errors::{ConfigError, GlexError};

pub type Result<T> = std::result::Result<T, GlexError>;
