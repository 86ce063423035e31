use alloc::string::String;
use enough::StopReason;

/// Errors from TGA decoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TgaError {
    /// Reading the source stream failed.
    #[cfg(feature = "std")]
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("short read at offset {offset}: need {needed} bytes, {available} available")]
    ShortRead {
        offset: u64,
        needed: usize,
        available: usize,
    },

    #[error("seek to {position} is outside a {len}-byte stream")]
    SeekOutOfRange { position: i64, len: usize },

    #[error("malformed {structure}: need {needed} bytes, got {actual}")]
    MalformedStructure {
        structure: &'static str,
        needed: usize,
        actual: usize,
    },

    #[error("unsupported image type {0}")]
    UnsupportedImageType(u8),

    #[error("unsupported pixel depth: {0} bits")]
    UnsupportedBitDepth(u8),

    /// A mapped source coordinate fell outside the pixel data.
    #[error("source pixel ({x}, {y}) is out of range")]
    PixelOutOfRange { x: u32, y: u32 },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("pixel layout mismatch: expected {expected:?}, got {actual:?}")]
    LayoutMismatch {
        expected: crate::PixelLayout,
        actual: crate::PixelLayout,
    },

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for TgaError {
    fn from(r: StopReason) -> Self {
        TgaError::Cancelled(r)
    }
}
