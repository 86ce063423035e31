//! # zentga
//!
//! Decoder for uncompressed true-color TGA (Targa) images.
//!
//! Decoding reads the 26-byte footer and 18-byte header, locates the image
//! ID, color-map and pixel-data sections by offset, and assembles a
//! top-down RGBA8 raster honoring the stored scan origin.
//!
//! ## Supported Input
//!
//! - Image type 2 (uncompressed true-color) at 16, 24 and 32 bits per pixel
//! - All four scan origins (see [`OriginMapping`] for the right-anchored ones)
//! - TGA 1.0 and 2.0 files; the footer signature selects [`TgaVersion`]
//!
//! Stored alpha is not propagated: every output pixel is opaque.
//!
//! ## Non-Goals
//!
//! - RLE-compressed and color-mapped images (rejected with
//!   [`TgaError::UnsupportedImageType`])
//! - Encoding
//! - Extension-area and developer-directory parsing
//!
//! ## Usage
//!
//! ```no_run
//! use zentga::{DecodeRequest, ImageInfo};
//! use enough::Unstoppable;
//!
//! let data: &[u8] = &[]; // your TGA bytes
//!
//! // Probe without decoding
//! let info = ImageInfo::from_bytes(data)?;
//! println!("{}x{} {:?} {}", info.width, info.height, info.image_type, info.origin);
//!
//! let decoded = DecodeRequest::new(data).decode(Unstoppable)?;
//! assert_eq!(decoded.pixels().len(), decoded.width as usize * decoded.height as usize * 4);
//! # Ok::<(), zentga::TgaError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod assemble;
mod decode;
mod error;
mod file;
mod footer;
mod header;
mod info;
mod limits;
mod pixel;
mod source;

// Re-exports
pub use decode::{DecodeOutput, DecodeRequest};
pub use enough::{Stop, Unstoppable};
pub use error::TgaError;
pub use file::TgaFile;
pub use footer::{Footer, SIGNATURE, TgaVersion};
pub use header::{Header, ImageDescriptor, ImageType, OriginMapping, Rect, ScanOrigin};
pub use info::ImageInfo;
pub use limits::Limits;
#[cfg(feature = "rgb")]
pub use pixel::DecodePixel;
pub use pixel::{PixelLayout, pixel_at};
pub use source::{ByteSource, Section, SectionOrigin};

/// Decode a TGA image with default settings.
pub fn decode(data: &[u8], stop: impl Stop) -> Result<DecodeOutput, TgaError> {
    DecodeRequest::new(data).decode(stop)
}

/// Read `reader` to the end, then decode it with default settings.
#[cfg(feature = "std")]
pub fn decode_reader<R: std::io::Read>(
    reader: R,
    stop: impl Stop,
) -> Result<DecodeOutput, TgaError> {
    let data = source::read_all(reader)?;
    DecodeRequest::new(&data).decode(stop)
}
