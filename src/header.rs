//! TGA file header (18 bytes, little-endian).

use crate::error::TgaError;
use crate::source::{HEADER_LEN, LeReader};

/// Image type code stored at header byte 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageType {
    /// 0: no image data present.
    NoImage,
    /// 1: uncompressed, color-mapped.
    ColorMapped,
    /// 2: uncompressed, true-color.
    TrueColor,
    /// 3: uncompressed, grayscale.
    Grayscale,
    /// 9: run-length encoded, color-mapped.
    RleColorMapped,
    /// 10: run-length encoded, true-color.
    RleTrueColor,
    /// 11: run-length encoded, grayscale.
    RleGrayscale,
    /// Any code outside the TGA 2.0 table.
    Unknown(u8),
}

impl ImageType {
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Self::NoImage,
            1 => Self::ColorMapped,
            2 => Self::TrueColor,
            3 => Self::Grayscale,
            9 => Self::RleColorMapped,
            10 => Self::RleTrueColor,
            11 => Self::RleGrayscale,
            other => Self::Unknown(other),
        }
    }

    /// The raw header byte.
    pub fn code(self) -> u8 {
        match self {
            Self::NoImage => 0,
            Self::ColorMapped => 1,
            Self::TrueColor => 2,
            Self::Grayscale => 3,
            Self::RleColorMapped => 9,
            Self::RleTrueColor => 10,
            Self::RleGrayscale => 11,
            Self::Unknown(code) => code,
        }
    }

    pub fn is_rle(self) -> bool {
        matches!(
            self,
            Self::RleColorMapped | Self::RleTrueColor | Self::RleGrayscale
        )
    }
}

/// Which corner of the image the first stored row and column belong to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ScanOrigin {
    #[default]
    BottomLeft,
    BottomRight,
    TopLeft,
    TopRight,
}

/// How right- and bottom-anchored origins map output coordinates back to
/// the stored pixel grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OriginMapping {
    /// `width - x` / `height - y` for right- and bottom-anchored origins.
    ///
    /// These land one column (or row) past the stored grid on the first
    /// output column (or row), so TopRight and BottomRight images fail with
    /// [`TgaError::PixelOutOfRange`].
    #[default]
    Legacy,
    /// `width - x - 1` / `height - y - 1`: a true mirror.
    Exact,
}

impl ScanOrigin {
    /// Map output (top-down, left-to-right) coordinates to stored
    /// coordinates.
    ///
    /// `ox < width` and `oy < height` are assumed. The result may fall
    /// outside the stored grid under [`OriginMapping::Legacy`].
    pub fn source_coords(
        self,
        ox: u32,
        oy: u32,
        width: u32,
        height: u32,
        mapping: OriginMapping,
    ) -> (u32, u32) {
        let edge = match mapping {
            OriginMapping::Legacy => 0,
            OriginMapping::Exact => 1,
        };
        match self {
            Self::BottomLeft => (ox, height - oy - 1),
            Self::TopLeft => (ox, oy),
            Self::TopRight => (width - ox - edge, oy),
            Self::BottomRight => (width - ox - edge, height - oy - edge),
        }
    }
}

impl core::fmt::Display for ScanOrigin {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Self::BottomLeft => "BottomLeft",
            Self::BottomRight => "BottomRight",
            Self::TopLeft => "TopLeft",
            Self::TopRight => "TopRight",
        };
        f.write_str(name)
    }
}

/// Header byte 17: alpha depth in bits 0-3, scan origin in bits 4-5.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct ImageDescriptor(pub u8);

impl ImageDescriptor {
    const RIGHT_TO_LEFT: u8 = 0b0001_0000;
    const TOP_TO_BOTTOM: u8 = 0b0010_0000;

    pub fn origin(self) -> ScanOrigin {
        let right = self.0 & Self::RIGHT_TO_LEFT != 0;
        let top = self.0 & Self::TOP_TO_BOTTOM != 0;
        match (top, right) {
            (true, true) => ScanOrigin::TopRight,
            (true, false) => ScanOrigin::TopLeft,
            (false, true) => ScanOrigin::BottomRight,
            (false, false) => ScanOrigin::BottomLeft,
        }
    }

    /// Attribute (alpha) bits per pixel.
    pub fn alpha_bits(self) -> u8 {
        self.0 & 0x0F
    }
}

/// Axis-aligned bounds of the image in device coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && y >= self.y && x - self.x < self.width && y - self.y < self.height
    }
}

/// Parsed TGA header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Header {
    pub id_length: u8,
    pub color_map_type: u8,
    pub image_type: ImageType,
    pub color_map_origin: u16,
    pub color_map_length: u16,
    pub color_map_depth: u8,
    pub x_origin: u16,
    pub y_origin: u16,
    pub width: u16,
    pub height: u16,
    pub bits_per_pixel: u8,
    pub descriptor: ImageDescriptor,
}

impl Header {
    /// Decode a header from the first 18 bytes of `data`.
    pub fn parse(data: &[u8]) -> Result<Self, TgaError> {
        let mut r = LeReader::new(data, "header", HEADER_LEN)?;
        Ok(Self {
            id_length: r.u8()?,
            color_map_type: r.u8()?,
            image_type: ImageType::from_code(r.u8()?),
            color_map_origin: r.u16()?,
            color_map_length: r.u16()?,
            color_map_depth: r.u8()?,
            x_origin: r.u16()?,
            y_origin: r.u16()?,
            width: r.u16()?,
            height: r.u16()?,
            bits_per_pixel: r.u8()?,
            descriptor: ImageDescriptor(r.u8()?),
        })
    }

    pub fn has_image_id(&self) -> bool {
        self.id_length > 0
    }

    pub fn has_color_map(&self) -> bool {
        self.color_map_type == 1
    }

    pub fn bytes_per_pixel(&self) -> usize {
        usize::from(self.bits_per_pixel / 8)
    }

    /// Size of the raw pixel-data block.
    pub fn image_byte_count(&self) -> Result<usize, TgaError> {
        usize::from(self.width)
            .checked_mul(usize::from(self.height))
            .and_then(|px| px.checked_mul(self.bytes_per_pixel()))
            .ok_or(TgaError::DimensionsTooLarge {
                width: self.width.into(),
                height: self.height.into(),
            })
    }

    /// Size of the color-map block, zero when no color map is present.
    ///
    /// Entries narrower than a whole byte count (15-bit) round up.
    pub fn color_map_byte_count(&self) -> usize {
        if !self.has_color_map() {
            return 0;
        }
        usize::from(self.color_map_length) * usize::from(self.color_map_depth).div_ceil(8)
    }

    pub fn bounds(&self) -> Rect {
        Rect {
            x: 0,
            y: 0,
            width: self.width.into(),
            height: self.height.into(),
        }
    }

    pub fn origin(&self) -> ScanOrigin {
        self.descriptor.origin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_bytes(width: u16, height: u16, bpp: u8, descriptor: u8) -> [u8; 18] {
        let mut h = [0u8; 18];
        h[2] = 2;
        h[12..14].copy_from_slice(&width.to_le_bytes());
        h[14..16].copy_from_slice(&height.to_le_bytes());
        h[16] = bpp;
        h[17] = descriptor;
        h
    }

    #[test]
    fn parses_every_field() {
        let bytes = [
            5, 1, 1, 0x02, 0x01, 0x10, 0x00, 24, 0x0A, 0x00, 0x14, 0x00, 0x00, 0x01, 0x80, 0x00,
            32, 0x28,
        ];
        let h = Header::parse(&bytes).unwrap();
        assert_eq!(h.id_length, 5);
        assert_eq!(h.color_map_type, 1);
        assert_eq!(h.image_type, ImageType::ColorMapped);
        assert_eq!(h.color_map_origin, 0x0102);
        assert_eq!(h.color_map_length, 16);
        assert_eq!(h.color_map_depth, 24);
        assert_eq!(h.x_origin, 10);
        assert_eq!(h.y_origin, 20);
        assert_eq!(h.width, 256);
        assert_eq!(h.height, 128);
        assert_eq!(h.bits_per_pixel, 32);
        assert_eq!(h.descriptor, ImageDescriptor(0x28));
        assert_eq!(h.descriptor.alpha_bits(), 8);
        assert_eq!(h.origin(), ScanOrigin::TopLeft);
        assert!(h.has_image_id());
        assert!(h.has_color_map());
        assert_eq!(h.color_map_byte_count(), 48);
    }

    #[test]
    fn derived_sizes() {
        let h = Header::parse(&header_bytes(256, 256, 32, 0)).unwrap();
        assert_eq!(h.width, 256);
        assert_eq!(h.height, 256);
        assert_eq!(h.bits_per_pixel, 32);
        assert_eq!(h.bytes_per_pixel(), 4);
        assert_eq!(h.image_byte_count().unwrap(), 256 * 256 * 4);
        assert_eq!(h.color_map_byte_count(), 0);
        assert_eq!(
            h.bounds(),
            Rect {
                x: 0,
                y: 0,
                width: 256,
                height: 256
            }
        );

        let h = Header::parse(&header_bytes(3, 2, 15, 0)).unwrap();
        assert_eq!(h.bytes_per_pixel(), 1);
        assert_eq!(h.image_byte_count().unwrap(), 6);
    }

    #[test]
    fn fifteen_bit_color_map_entries_take_two_bytes() {
        let mut bytes = header_bytes(1, 1, 8, 0);
        bytes[1] = 1;
        bytes[5..7].copy_from_slice(&4u16.to_le_bytes());
        bytes[7] = 15;
        let h = Header::parse(&bytes).unwrap();
        assert_eq!(h.color_map_byte_count(), 8);

        // Length fields are ignored without a color map.
        bytes[1] = 0;
        let h = Header::parse(&bytes).unwrap();
        assert_eq!(h.color_map_byte_count(), 0);
    }

    #[test]
    fn short_header_is_malformed() {
        assert!(matches!(
            Header::parse(&[0u8; 10]),
            Err(TgaError::MalformedStructure {
                structure: "header",
                needed: 18,
                actual: 10
            })
        ));
    }

    #[test]
    fn image_type_codes() {
        for code in 0..=255u8 {
            assert_eq!(ImageType::from_code(code).code(), code);
        }
        assert_eq!(ImageType::from_code(2), ImageType::TrueColor);
        assert_eq!(ImageType::from_code(3), ImageType::Grayscale);
        assert_eq!(ImageType::from_code(4), ImageType::Unknown(4));
        assert!(ImageType::from_code(10).is_rle());
        assert!(!ImageType::TrueColor.is_rle());
    }

    #[test]
    fn origin_classification() {
        let cases = [
            (0, ScanOrigin::BottomLeft),
            (16, ScanOrigin::BottomRight),
            (32, ScanOrigin::TopLeft),
            (48, ScanOrigin::TopRight),
            (15, ScanOrigin::BottomLeft),
            (37, ScanOrigin::TopLeft),
            (53, ScanOrigin::TopRight),
            (127, ScanOrigin::TopRight),
        ];
        for (byte, expected) in cases {
            assert_eq!(ImageDescriptor(byte).origin(), expected, "descriptor {byte}");
            assert_eq!(
                ImageDescriptor(byte).origin(),
                ImageDescriptor(byte & 0x30).origin()
            );
        }
    }

    #[test]
    fn legacy_mapping() {
        let m = OriginMapping::Legacy;
        assert_eq!(ScanOrigin::BottomLeft.source_coords(0, 0, 4, 3, m), (0, 2));
        assert_eq!(ScanOrigin::BottomLeft.source_coords(3, 2, 4, 3, m), (3, 0));
        assert_eq!(ScanOrigin::TopLeft.source_coords(1, 2, 4, 3, m), (1, 2));
        assert_eq!(ScanOrigin::TopRight.source_coords(0, 0, 4, 3, m), (4, 0));
        assert_eq!(ScanOrigin::TopRight.source_coords(3, 1, 4, 3, m), (1, 1));
        assert_eq!(ScanOrigin::BottomRight.source_coords(0, 0, 4, 3, m), (4, 3));
        assert_eq!(ScanOrigin::BottomRight.source_coords(3, 2, 4, 3, m), (1, 1));
    }

    #[test]
    fn exact_mapping_mirrors() {
        let m = OriginMapping::Exact;
        assert_eq!(ScanOrigin::BottomLeft.source_coords(0, 0, 4, 3, m), (0, 2));
        assert_eq!(ScanOrigin::TopLeft.source_coords(1, 2, 4, 3, m), (1, 2));
        assert_eq!(ScanOrigin::TopRight.source_coords(0, 0, 4, 3, m), (3, 0));
        assert_eq!(ScanOrigin::TopRight.source_coords(3, 1, 4, 3, m), (0, 1));
        assert_eq!(ScanOrigin::BottomRight.source_coords(0, 0, 4, 3, m), (3, 2));
        assert_eq!(ScanOrigin::BottomRight.source_coords(3, 2, 4, 3, m), (0, 0));
    }

    #[test]
    fn rect_contains() {
        let r = Rect {
            x: 0,
            y: 0,
            width: 2,
            height: 3,
        };
        assert!(r.contains(1, 2));
        assert!(!r.contains(2, 0));
        assert!(!r.contains(0, 3));
    }
}
