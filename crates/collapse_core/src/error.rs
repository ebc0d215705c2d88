//! Collapse engine error types

use thiserror::Error;

/// Errors raised by the collapse engine itself
///
/// Failures coming from the host toolkit are not wrapped here; they surface
/// as the host's own [`ViewHost::Error`](crate::host::ViewHost::Error).
#[derive(Error, Debug)]
pub enum CollapseError {
    /// Fade-out ratio outside `[0, 1]`
    #[error("Fade-out ratio {0} is outside [0, 1]")]
    FadeRatioOutOfRange(f32),

    /// Minimum header height is negative or not finite
    #[error("Invalid minimum header height: {0}")]
    InvalidMinimumHeight(f32),

    /// Configuration could not be parsed or failed validation
    #[error("Invalid collapse configuration: {0}")]
    Config(String),
}

impl From<toml::de::Error> for CollapseError {
    fn from(err: toml::de::Error) -> Self {
        CollapseError::Config(err.to_string())
    }
}

/// Result type for collapse engine operations
pub type Result<T> = std::result::Result<T, CollapseError>;
