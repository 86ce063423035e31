//! Raw pixel block → top-down RGBA8 raster.

use alloc::vec;
use alloc::vec::Vec;

use enough::Stop;

use crate::error::TgaError;
use crate::header::{Header, ImageType, OriginMapping};
use crate::pixel::pixel_at;

type ConvertFn = fn(&[u8]) -> [u8; 4];

/// BGR or BGRA → RGBA. A stored alpha byte is ignored.
fn bgr_to_rgba(p: &[u8]) -> [u8; 4] {
    [p[2], p[1], p[0], 255]
}

/// Little-endian `A1R5G5B5` → RGBA. The attribute bit is ignored.
fn bgra5551_to_rgba(p: &[u8]) -> [u8; 4] {
    let v = u16::from_le_bytes([p[0], p[1]]);
    let expand = |c: u16| ((c << 3) | (c >> 2)) as u8;
    [
        expand((v >> 10) & 0x1F),
        expand((v >> 5) & 0x1F),
        expand(v & 0x1F),
        255,
    ]
}

fn converter(header: &Header) -> Result<ConvertFn, TgaError> {
    match header.image_type {
        ImageType::TrueColor => {}
        other => return Err(TgaError::UnsupportedImageType(other.code())),
    }
    match header.bits_per_pixel {
        16 => Ok(bgra5551_to_rgba as ConvertFn),
        24 | 32 => Ok(bgr_to_rgba as ConvertFn),
        bits => Err(TgaError::UnsupportedBitDepth(bits)),
    }
}

/// Fail early on headers the assembler cannot handle.
pub(crate) fn check_supported(header: &Header) -> Result<(), TgaError> {
    converter(header).map(|_| ())
}

/// Build the output raster from the raw pixel block.
///
/// Output rows run top to bottom; each output coordinate is mapped back to
/// a stored coordinate through the header's scan origin.
pub(crate) fn assemble(
    header: &Header,
    data: &[u8],
    mapping: OriginMapping,
    stop: &dyn Stop,
) -> Result<Vec<u8>, TgaError> {
    let convert = converter(header)?;

    let width = u32::from(header.width);
    let height = u32::from(header.height);
    let bpp = header.bytes_per_pixel();
    let origin = header.origin();

    let row_bytes = (width as usize)
        .checked_mul(4)
        .ok_or(TgaError::DimensionsTooLarge { width, height })?;
    let out_bytes = row_bytes
        .checked_mul(height as usize)
        .ok_or(TgaError::DimensionsTooLarge { width, height })?;
    if out_bytes == 0 {
        return Ok(Vec::new());
    }

    let mut out = vec![0u8; out_bytes];
    for (oy, row) in out.chunks_exact_mut(row_bytes).enumerate() {
        if oy % 16 == 0 {
            stop.check()?;
        }
        let oy = oy as u32;
        for (ox, dst) in row.chunks_exact_mut(4).enumerate() {
            let (sx, sy) = origin.source_coords(ox as u32, oy, width, height, mapping);
            let pixel = pixel_at(data, width, height, bpp, sx, sy)
                .ok_or(TgaError::PixelOutOfRange { x: sx, y: sy })?;
            dst.copy_from_slice(&convert(pixel));
        }
    }
    Ok(out)
}
