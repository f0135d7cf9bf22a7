/// Convenience result type used across hexwipe.
pub type HexwipeResult<T> = Result<T, HexwipeError>;

/// Error taxonomy for the transition engine.
///
/// Only construction-time APIs return these. Runtime paths (ticks, timeouts, exit requests)
/// degrade to "skip the effect, keep the callback contract" instead of failing.
#[derive(thiserror::Error, Debug)]
pub enum HexwipeError {
    /// Configuration values that cannot be degraded into a no-op effect.
    #[error("validation error: {0}")]
    Validation(String),

    /// Drawing surface failures (detached target, raster errors, size limits).
    #[error("surface error: {0}")]
    Surface(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HexwipeError {
    /// Build a [`HexwipeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`HexwipeError::Surface`] value.
    pub fn surface(msg: impl Into<String>) -> Self {
        Self::Surface(msg.into())
    }

    /// Build a [`HexwipeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
