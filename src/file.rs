//! Raw, unassembled view of a TGA stream.

use core::slice::ChunksExact;

use crate::error::TgaError;
use crate::footer::{Footer, TgaVersion};
use crate::header::Header;
use crate::pixel::pixel_at;
use crate::source::{ByteSource, HEADER_LEN, Section};

/// Header, footer and the three variable-length sections of a TGA stream,
/// borrowed from the input.
///
/// Reading does not interpret the pixel data, so any image type is accepted
/// as long as its sections fit in the stream. RLE payloads are returned as
/// the first `width × height × bytes_per_pixel` raw bytes.
#[derive(Clone, Debug)]
pub struct TgaFile<'a> {
    pub header: Header,
    pub footer: Footer,
    /// Image ID block (`id_length` bytes).
    pub id: &'a [u8],
    /// Color-map block, empty when the header declares no color map.
    pub color_map: &'a [u8],
    /// Stored pixel block, in storage order.
    pub data: &'a [u8],
}

impl<'a> TgaFile<'a> {
    /// Read every section of `data`.
    pub fn read(data: &'a [u8]) -> Result<Self, TgaError> {
        let mut src = ByteSource::new(data);
        let (footer, header) = read_structures(&mut src)?;
        let sections = Sections::locate(&header)?;
        Ok(Self {
            id: src.read_section(sections.id)?,
            color_map: src.read_section(sections.color_map)?,
            data: src.read_section(sections.pixels)?,
            header,
            footer,
        })
    }

    pub fn version(&self) -> TgaVersion {
        self.footer.version()
    }

    /// Stored pixels in storage order, one slice per pixel.
    ///
    /// Empty when the depth is below 8 bits.
    pub fn pixels(&self) -> ChunksExact<'a, u8> {
        let bpp = self.header.bytes_per_pixel();
        let data = if bpp == 0 { &[][..] } else { self.data };
        data.chunks_exact(bpp.max(1))
    }

    /// Stored pixel at storage coordinates `(x, y)`.
    pub fn pixel_at(&self, x: u32, y: u32) -> Option<&'a [u8]> {
        pixel_at(
            self.data,
            self.header.width.into(),
            self.header.height.into(),
            self.header.bytes_per_pixel(),
            x,
            y,
        )
    }
}

/// Read the footer, then the header, in that order.
pub(crate) fn read_structures(src: &mut ByteSource<'_>) -> Result<(Footer, Header), TgaError> {
    let footer = Footer::parse(src.read_section(Section::FOOTER)?)?;
    let header = Header::parse(src.read_section(Section::HEADER)?)?;
    Ok((footer, header))
}

/// Where the variable-length sections sit, given a header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Sections {
    pub id: Section,
    pub color_map: Section,
    pub pixels: Section,
}

impl Sections {
    pub(crate) fn locate(header: &Header) -> Result<Self, TgaError> {
        let id_len = usize::from(header.id_length);
        let color_map_len = header.color_map_byte_count();
        let color_map_offset = HEADER_LEN + id_len;
        let pixel_offset = color_map_offset + color_map_len;
        Ok(Self {
            id: Section::from_start(id_len, HEADER_LEN),
            color_map: Section::from_start(color_map_len, color_map_offset),
            pixels: Section::from_start(header.image_byte_count()?, pixel_offset),
        })
    }
}
