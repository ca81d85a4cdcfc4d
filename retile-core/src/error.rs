use thiserror::Error;

/// Errors that can occur while remapping texture data.
///
/// All errors are local to a single call: a malformed call fails on its
/// own and has no effect on any other transform, because no shared state
/// exists. There is no retry path — remapping is deterministic, so a
/// retry without fixing the inputs would fail identically.
#[derive(Debug, Error)]
pub enum RemapError {
    /// The image geometry is malformed (zero dimension, impossible
    /// bits-per-pixel, degenerate block shape).
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// The supplied buffer does not match the geometry/block product.
    #[error("Buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// An unrecognized tile mode, bits-per-pixel, or swizzle variant for
    /// the selected platform. There is no silent fallback — a wrong
    /// fallback would produce plausible-looking but corrupt pixel data.
    #[error("Unsupported parameter: {0}")]
    UnsupportedParameter(String),
}

impl RemapError {
    pub fn invalid_geometry(msg: impl Into<String>) -> Self {
        Self::InvalidGeometry(msg.into())
    }

    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::UnsupportedParameter(msg.into())
    }

    pub fn size_mismatch(expected: usize, actual: usize) -> Self {
        Self::BufferSizeMismatch { expected, actual }
    }
}
