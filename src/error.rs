//! Crate-level error types.

use std::fmt;

use crate::gpu::render_context::RenderContextError;

/// Errors produced by the astroview crate.
#[derive(Debug)]
pub enum ViewerError {
    /// Degenerate mesh-generation arguments (too few segments, non-positive
    /// radius, ...). Fatal to the primitive being constructed.
    InvalidParameter {
        /// Which shape rejected the arguments.
        shape: &'static str,
        /// Human-readable description of the offending value.
        reason: String,
    },
    /// GPU context initialization failure.
    Gpu(RenderContextError),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// A texture image could not be decoded.
    Texture(image::ImageError),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl ViewerError {
    /// Shorthand for an [`InvalidParameter`](Self::InvalidParameter) error.
    pub(crate) fn invalid(shape: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            shape,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ViewerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter { shape, reason } => {
                write!(f, "invalid {shape} parameter: {reason}")
            }
            Self::Gpu(e) => write!(f, "GPU error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Texture(e) => write!(f, "texture error: {e}"),
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for ViewerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Gpu(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::Texture(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RenderContextError> for ViewerError {
    fn from(e: RenderContextError) -> Self {
        Self::Gpu(e)
    }
}

impl From<std::io::Error> for ViewerError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<image::ImageError> for ViewerError {
    fn from(e: image::ImageError) -> Self {
        Self::Texture(e)
    }
}
