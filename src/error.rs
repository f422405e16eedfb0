//! Error types for tessellation and rendering.

use thiserror::Error;

/// Errors raised while building geometry, before anything is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TessellationError {
    /// A curve needs at least one segment.
    #[error("invalid curve resolution {0}, at least one segment is required")]
    InvalidResolution(i64),
    /// No glyph template exists for this character.
    #[error("no glyph available for {0:?}")]
    UnsupportedGlyph(char),
}

/// Errors raised by a [`Renderer`](crate::Renderer) on behalf of a drawing surface of error type `E`.
#[derive(Debug, Error)]
pub enum RenderError<E>
where
    E: std::error::Error + 'static,
{
    #[error("invalid curve resolution {0}, at least one segment is required")]
    InvalidResolution(i64),
    #[error("unknown slide index {0}")]
    InvalidSlideIndex(i64),
    #[error("no glyph available for {0:?}")]
    UnsupportedGlyph(char),
    #[error("drawing surface failed")]
    Surface(#[source] E),
}

impl<E> From<TessellationError> for RenderError<E>
where
    E: std::error::Error + 'static,
{
    fn from(err: TessellationError) -> Self {
        match err {
            TessellationError::InvalidResolution(n) => RenderError::InvalidResolution(n),
            TessellationError::UnsupportedGlyph(c) => RenderError::UnsupportedGlyph(c),
        }
    }
}
