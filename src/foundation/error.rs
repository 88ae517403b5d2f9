/// Convenience result type used across sortstep.
pub type SortstepResult<T> = Result<T, SortstepError>;

/// Error taxonomy for the fallible edges of the engine.
///
/// Playback commands themselves never fail; errors only arise when raw input (integers, names,
/// permutations, configuration documents) is turned into the engine's typed domain.
#[derive(thiserror::Error, Debug)]
pub enum SortstepError {
    /// Invalid user-provided value (speed level, permutation, algorithm name).
    #[error("validation error: {0}")]
    Validation(String),

    /// Configuration that parsed but does not describe a usable session.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SortstepError {
    /// Build a [`SortstepError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SortstepError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`SortstepError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
