/// Convenience result type used across qrstyle.
pub type QrStyleResult<T> = Result<T, QrStyleError>;

/// Top-level error taxonomy used by the render pipeline and its UI boundary.
///
/// None of these are fatal: [`crate::generate`] turns every one of them into a user-visible
/// warning instead of aborting.
#[derive(thiserror::Error, Debug)]
pub enum QrStyleError {
    /// The text to encode is empty.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Out-of-range or malformed style parameter.
    #[error("validation error: {0}")]
    Validation(String),

    /// An uploaded file is not a decodable raster image.
    #[error("decode error: {0}")]
    Decode(String),

    /// The QR encoder rejected the data (usually: too long for any version).
    #[error("encode error: {0}")]
    Encode(String),

    /// Layer dimensions disagree at composite time. Always a bug in layer construction.
    #[error("composite error: {0}")]
    Composite(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl QrStyleError {
    /// Build a [`QrStyleError::InvalidInput`] value.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Build a [`QrStyleError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`QrStyleError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`QrStyleError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`QrStyleError::Composite`] value.
    pub fn composite(msg: impl Into<String>) -> Self {
        Self::Composite(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
