//! TGA 2.0 footer (last 26 bytes of the stream).

use crate::error::TgaError;
use crate::source::{FOOTER_LEN, LeReader};

/// Footer signature identifying a TGA 2.0 file.
pub const SIGNATURE: [u8; 16] = *b"TRUEVISION-XFILE";

/// TGA format revision, from the footer signature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum TgaVersion {
    /// No TGA 2.0 signature; the trailing bytes are pixel data or garbage.
    #[default]
    Original,
    /// TGA 2.0, footer signature present.
    New,
}

impl core::fmt::Display for TgaVersion {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::Original => "OriginalTGA",
            Self::New => "NewTGA",
        })
    }
}

/// The trailing 26 bytes, decoded structurally whether or not they are a
/// real footer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Footer {
    pub extension_area_offset: u32,
    pub developer_directory_offset: u32,
    pub signature: [u8; 16],
    /// Expected to be `.`.
    pub dot: u8,
    /// Expected to be `0`.
    pub terminator: u8,
}

impl Footer {
    pub fn parse(data: &[u8]) -> Result<Self, TgaError> {
        let mut r = LeReader::new(data, "footer", FOOTER_LEN)?;
        Ok(Self {
            extension_area_offset: r.u32()?,
            developer_directory_offset: r.u32()?,
            signature: r.bytes()?,
            dot: r.u8()?,
            terminator: r.u8()?,
        })
    }

    pub fn version(&self) -> TgaVersion {
        if self.signature == SIGNATURE {
            TgaVersion::New
        } else {
            TgaVersion::Original
        }
    }
}
