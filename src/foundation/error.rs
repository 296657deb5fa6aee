/// Result alias used across the crate.
pub type GlyphResult<T> = Result<T, GlyphError>;

/// Errors produced at the fallible edges of the crate (surfaces, rasterization, options IO).
///
/// Glyph and stream updates themselves never fail; see [`crate::Cipher::update`].
#[derive(thiserror::Error, Debug)]
pub enum GlyphError {
    /// Invalid user-supplied value (options, sizes, words).
    #[error("validation error: {0}")]
    Validation(String),

    /// A drawing surface could not be created or used.
    #[error("surface error: {0}")]
    Surface(String),

    /// Rasterization or frame composition failed.
    #[error("render error: {0}")]
    Render(String),

    /// JSON parse or encode failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Filesystem failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Anything else, with its source preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GlyphError {
    /// Build a [`GlyphError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GlyphError::Surface`].
    pub fn surface(msg: impl Into<String>) -> Self {
        Self::Surface(msg.into())
    }

    /// Build a [`GlyphError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`GlyphError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
