/// Convenience result type used across the crate.
pub type UnveilResult<T> = Result<T, UnveilError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum UnveilError {
    /// Invalid strategy or partition configuration, rejected at construction.
    #[error("config error: {0}")]
    Config(String),

    /// API contract violation, e.g. compositing before `prepare`.
    #[error("contract error: {0}")]
    Contract(String),

    /// Errors while compositing a frame or delivering it to a sink.
    #[error("compute error: {0}")]
    Compute(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl UnveilError {
    /// Build a [`UnveilError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`UnveilError::Contract`] value.
    pub fn contract(msg: impl Into<String>) -> Self {
        Self::Contract(msg.into())
    }

    /// Build a [`UnveilError::Compute`] value.
    pub fn compute(msg: impl Into<String>) -> Self {
        Self::Compute(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
