use crate::header::ImageType;

/// Pixel memory layout.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelLayout {
    /// Single channel, 8-bit grayscale.
    Gray8,
    /// 2 bytes, little-endian `A1R5G5B5`.
    Bgra5551,
    /// 3 channels, 8-bit BGR.
    Bgr8,
    /// 4 channels, 8-bit BGRA.
    Bgra8,
    /// 4 channels, 8-bit RGBA.
    Rgba8,
}

impl PixelLayout {
    /// Bytes per pixel for this layout.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            Self::Gray8 => 1,
            Self::Bgra5551 => 2,
            Self::Bgr8 => 3,
            Self::Bgra8 | Self::Rgba8 => 4,
        }
    }

    /// Number of channels.
    pub fn channels(&self) -> usize {
        match self {
            Self::Gray8 => 1,
            Self::Bgr8 => 3,
            Self::Bgra5551 | Self::Bgra8 | Self::Rgba8 => 4,
        }
    }

    /// On-disk layout of an uncompressed image, if it has a direct one.
    pub(crate) fn stored(image_type: ImageType, bits_per_pixel: u8) -> Option<Self> {
        match (image_type, bits_per_pixel) {
            (ImageType::TrueColor, 16) => Some(Self::Bgra5551),
            (ImageType::TrueColor, 24) => Some(Self::Bgr8),
            (ImageType::TrueColor, 32) => Some(Self::Bgra8),
            (ImageType::Grayscale, 8) => Some(Self::Gray8),
            _ => None,
        }
    }
}

/// Locate the stored pixel at `(x, y)` in a row-major pixel block.
///
/// Coordinates are in storage order, not output order. Returns `None` when
/// the coordinate is outside `width × height` or the block is too short to
/// hold it.
pub fn pixel_at(
    data: &[u8],
    width: u32,
    height: u32,
    bytes_per_pixel: usize,
    x: u32,
    y: u32,
) -> Option<&[u8]> {
    if x >= width || y >= height {
        return None;
    }
    let row = (y as usize).checked_mul(width as usize)?;
    let begin = row.checked_add(x as usize)?.checked_mul(bytes_per_pixel)?;
    data.get(begin..begin.checked_add(bytes_per_pixel)?)
}

/// Typed pixels a decoded RGBA8 raster can be viewed as.
#[cfg(feature = "rgb")]
pub trait DecodePixel: Copy + 'static {
    fn layout() -> PixelLayout;
}

#[cfg(feature = "rgb")]
impl DecodePixel for rgb::RGBA8 {
    fn layout() -> PixelLayout {
        PixelLayout::Rgba8
    }
}
