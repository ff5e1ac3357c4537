/// Convenience result type used across spritec.
pub type SpriteResult<T> = Result<T, SpriteError>;

/// Top-level error taxonomy used by the boundary APIs.
///
/// The encoder core never fails; these errors come from grid construction, image decoding,
/// emission and thread pool setup.
#[derive(thiserror::Error, Debug)]
pub enum SpriteError {
    /// Precondition violations: bad dimensions, grid length mismatch, malformed run lists.
    #[error("validation error: {0}")]
    Validation(String),

    /// The input image could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// Errors when serializing or deserializing sprites.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SpriteError {
    /// Build a [`SpriteError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SpriteError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`SpriteError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for SpriteError {
    fn from(e: serde_json::Error) -> Self {
        Self::serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
