/// Convenience result type used across footprint.
pub type FootprintResult<T> = Result<T, FootprintError>;

/// Top-level error taxonomy used by the pipeline APIs.
///
/// A flat pressure range and an empty foot mask are not errors; they are reported
/// through [`crate::RenderOutcome`].
#[derive(thiserror::Error, Debug)]
pub enum FootprintError {
    /// Invalid caller-provided data or settings.
    #[error("validation error: {0}")]
    Validation(String),

    /// The source bitmap could not be obtained (decode failure, zero-sized image).
    #[error("input unavailable: {0}")]
    InputUnavailable(String),

    /// The rendered bitmap could not be encoded.
    #[error("encode error: {0}")]
    Encode(String),

    /// Processing was stopped through a [`crate::CancelToken`].
    #[error("pressure map rendering was cancelled")]
    Cancelled,

    /// Errors when serializing or deserializing settings.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FootprintError {
    /// Build a [`FootprintError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FootprintError::InputUnavailable`] value.
    pub fn input_unavailable(msg: impl Into<String>) -> Self {
        Self::InputUnavailable(msg.into())
    }

    /// Build a [`FootprintError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`FootprintError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// True for errors that abort a render because the input could not be read.
    pub fn is_input_unavailable(&self) -> bool {
        matches!(self, Self::InputUnavailable(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
