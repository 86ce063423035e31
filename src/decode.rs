use alloc::vec::Vec;

#[cfg(feature = "rgb")]
use rgb::AsPixels as _;

use enough::Stop;

use crate::assemble;
use crate::error::TgaError;
use crate::file::{Sections, read_structures};
use crate::footer::{Footer, TgaVersion};
use crate::header::{Header, OriginMapping};
use crate::limits::Limits;
use crate::pixel::PixelLayout;
use crate::source::ByteSource;

/// Decoded image: a top-down RGBA8 raster plus the parsed header and footer.
#[derive(Clone, Debug)]
pub struct DecodeOutput {
    pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// Always [`PixelLayout::Rgba8`].
    pub layout: PixelLayout,
    pub header: Header,
    pub footer: Footer,
}

impl DecodeOutput {
    /// Access the pixel data.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Take ownership of the pixel data.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    pub fn version(&self) -> TgaVersion {
        self.footer.version()
    }

    /// RGBA sample at output coordinates `(x, y)`.
    pub fn rgba_at(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let off = (y as usize * self.width as usize + x as usize) * 4;
        let p = self.pixels.get(off..off + 4)?;
        Some([p[0], p[1], p[2], p[3]])
    }

    /// Reinterpret pixel data as typed pixel slice.
    ///
    /// Returns [`TgaError::LayoutMismatch`] if the pixel layout doesn't match `P`.
    #[cfg(feature = "rgb")]
    pub fn as_pixels<P: crate::DecodePixel>(&self) -> Result<&[P], TgaError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        if self.layout != P::layout() {
            return Err(TgaError::LayoutMismatch {
                expected: P::layout(),
                actual: self.layout,
            });
        }
        Ok(self.pixels().as_pixels())
    }

    /// Zero-copy view as an [`imgref::ImgRef`] of typed pixels.
    #[cfg(feature = "imgref")]
    pub fn as_imgref<P: crate::DecodePixel>(&self) -> Result<imgref::ImgRef<'_, P>, TgaError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        let pixels: &[P] = self.as_pixels()?;
        Ok(imgref::ImgRef::new(
            pixels,
            self.width as usize,
            self.height as usize,
        ))
    }

    /// Convert to an [`imgref::ImgVec`] of typed pixels.
    #[cfg(feature = "imgref")]
    pub fn to_imgvec<P: crate::DecodePixel>(&self) -> Result<imgref::ImgVec<P>, TgaError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        let pixels: &[P] = self.as_pixels()?;
        Ok(imgref::ImgVec::new(
            pixels.to_vec(),
            self.width as usize,
            self.height as usize,
        ))
    }
}

/// Decode configuration for one TGA stream.
///
/// ```no_run
/// use zentga::{DecodeRequest, Limits, OriginMapping};
/// use enough::Unstoppable;
///
/// let data: &[u8] = &[]; // your TGA bytes
/// let limits = Limits {
///     max_pixels: Some(16_000_000),
///     ..Default::default()
/// };
/// let decoded = DecodeRequest::new(data)
///     .with_limits(&limits)
///     .with_origin_mapping(OriginMapping::Exact)
///     .decode(Unstoppable)?;
/// # Ok::<(), zentga::TgaError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
    mapping: OriginMapping,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            limits: None,
            mapping: OriginMapping::default(),
        }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Choose how right- and bottom-anchored scan origins are mapped.
    /// Defaults to [`OriginMapping::Legacy`].
    pub fn with_origin_mapping(mut self, mapping: OriginMapping) -> Self {
        self.mapping = mapping;
        self
    }

    pub fn decode(self, stop: impl Stop) -> Result<DecodeOutput, TgaError> {
        let stop: &dyn Stop = &stop;
        let mut src = ByteSource::new(self.data);
        let (footer, header) = read_structures(&mut src)?;

        assemble::check_supported(&header)?;
        let width = u32::from(header.width);
        let height = u32::from(header.height);
        if let Some(limits) = self.limits {
            limits.check(width, height)?;
            let out_bytes = (width as usize)
                .saturating_mul(height as usize)
                .saturating_mul(4);
            limits.check_memory(out_bytes)?;
        }
        stop.check()?;

        let sections = Sections::locate(&header)?;
        // The ID and color-map blocks are not used, but must be present.
        src.read_section(sections.id)?;
        src.read_section(sections.color_map)?;
        let data = src.read_section(sections.pixels)?;

        let pixels = assemble::assemble(&header, data, self.mapping, stop)?;
        Ok(DecodeOutput {
            pixels,
            width,
            height,
            layout: PixelLayout::Rgba8,
            header,
            footer,
        })
    }
}
