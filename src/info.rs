use crate::error::TgaError;
use crate::file::read_structures;
use crate::footer::TgaVersion;
use crate::header::{ImageType, ScanOrigin};
use crate::pixel::PixelLayout;
use crate::source::ByteSource;

/// Image metadata from probing the header and footer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub image_type: ImageType,
    pub bits_per_pixel: u8,
    pub origin: ScanOrigin,
    pub version: TgaVersion,
    /// Layout of the stored pixels, `None` for compressed, color-mapped or
    /// unusual depths.
    pub native_layout: Option<PixelLayout>,
}

impl ImageInfo {
    /// Probe image metadata without touching pixel data.
    pub fn from_bytes(data: &[u8]) -> Result<Self, TgaError> {
        let mut src = ByteSource::new(data);
        let (footer, header) = read_structures(&mut src)?;
        Ok(Self {
            width: header.width.into(),
            height: header.height.into(),
            image_type: header.image_type,
            bits_per_pixel: header.bits_per_pixel,
            origin: header.origin(),
            version: footer.version(),
            native_layout: PixelLayout::stored(header.image_type, header.bits_per_pixel),
        })
    }
}
