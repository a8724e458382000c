pub mod errors;
pub mod types;

pub use errors::{ColorError, ConfigError, GvmError};
pub use types::{Color, Palette};

pub type Result<T> = std::result::Result<T, GvmError>;
