/// Convenience result type used across railcam.
pub type RailcamResult<T> = Result<T, RailcamError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Per-frame evaluation never produces geometric errors (degenerate input is clamped or
/// collapsed instead); errors surface while validating a [`crate::Journey`] or while a
/// [`crate::RouteSource`] resolves segment routes before rendering.
#[derive(thiserror::Error, Debug)]
pub enum RailcamError {
    /// Invalid user-provided journey or timeline configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// A route source could not produce a route for a segment.
    #[error("route error: {0}")]
    Route(String),

    /// Errors while evaluating a frame or a frame range.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RailcamError {
    /// Build a [`RailcamError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RailcamError::Route`] value.
    pub fn route(msg: impl Into<String>) -> Self {
        Self::Route(msg.into())
    }

    /// Build a [`RailcamError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`RailcamError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for RailcamError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
