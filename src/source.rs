//! In-memory byte source and section reader.
//!
//! Every TGA section is addressed as `(length, offset, origin)`: the header,
//! image ID, color map and pixel data relative to the start of the stream,
//! the footer relative to its end.

#[cfg(feature = "std")]
use alloc::vec::Vec;

use crate::error::TgaError;

/// Header size in bytes.
pub(crate) const HEADER_LEN: usize = 18;
/// Footer size in bytes.
pub(crate) const FOOTER_LEN: usize = 26;

/// Where a section offset is measured from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionOrigin {
    /// Offset from the first byte of the stream.
    Start,
    /// Offset from one past the last byte (offsets are usually negative).
    End,
}

/// A byte range within a TGA stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub length: usize,
    pub offset: i64,
    pub origin: SectionOrigin,
}

impl Section {
    pub const fn new(length: usize, offset: i64, origin: SectionOrigin) -> Self {
        Self {
            length,
            offset,
            origin,
        }
    }

    /// The fixed 18-byte header at the start of the stream.
    pub const HEADER: Section = Section::new(HEADER_LEN, 0, SectionOrigin::Start);

    /// The fixed 26-byte footer at the end of the stream.
    pub const FOOTER: Section = Section::new(FOOTER_LEN, -(FOOTER_LEN as i64), SectionOrigin::End);

    /// A section starting `offset` bytes into the stream.
    pub(crate) fn from_start(length: usize, offset: usize) -> Self {
        Section::new(length, offset as i64, SectionOrigin::Start)
    }
}

/// Seekable view over a fully buffered TGA stream.
///
/// The cursor is always back at the start of the stream after
/// [`read_section`](Self::read_section) returns, so callers never track it.
#[derive(Debug)]
pub struct ByteSource<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteSource<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Total stream length.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Current cursor position.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Move the cursor to `offset` relative to `origin`.
    pub fn seek(&mut self, offset: i64, origin: SectionOrigin) -> Result<usize, TgaError> {
        let base = match origin {
            SectionOrigin::Start => 0i64,
            SectionOrigin::End => self.data.len() as i64,
        };
        let position = base.checked_add(offset).ok_or(TgaError::SeekOutOfRange {
            position: offset,
            len: self.data.len(),
        })?;
        if position < 0 || position as u64 > self.data.len() as u64 {
            return Err(TgaError::SeekOutOfRange {
                position,
                len: self.data.len(),
            });
        }
        self.pos = position as usize;
        Ok(self.pos)
    }

    /// Read exactly `len` bytes at the cursor and advance past them.
    pub fn read_exact(&mut self, len: usize) -> Result<&'a [u8], TgaError> {
        let available = self.data.len() - self.pos;
        if len > available {
            return Err(TgaError::ShortRead {
                offset: self.pos as u64,
                needed: len,
                available,
            });
        }
        let out = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(out)
    }

    /// Seek to `section`, read exactly its length, and rewind to the start.
    pub fn read_section(&mut self, section: Section) -> Result<&'a [u8], TgaError> {
        let result = self
            .seek(section.offset, section.origin)
            .and_then(|_| self.read_exact(section.length));
        self.pos = 0;
        result
    }
}

/// Read an entire stream into memory.
#[cfg(feature = "std")]
pub(crate) fn read_all<R: std::io::Read>(mut reader: R) -> Result<Vec<u8>, TgaError> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    Ok(buf)
}

/// Little-endian field reader over a fixed-layout structure.
///
/// Each accessor checks the remaining length first and reports the
/// structure by name when the slice runs out.
pub(crate) struct LeReader<'a> {
    data: &'a [u8],
    pos: usize,
    structure: &'static str,
    size: usize,
}

impl<'a> LeReader<'a> {
    /// Start decoding `structure`, which occupies exactly `size` bytes.
    pub(crate) fn new(
        data: &'a [u8],
        structure: &'static str,
        size: usize,
    ) -> Result<Self, TgaError> {
        if data.len() < size {
            return Err(TgaError::MalformedStructure {
                structure,
                needed: size,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            pos: 0,
            structure,
            size,
        })
    }

    fn take<const N: usize>(&mut self) -> Result<[u8; N], TgaError> {
        let end = self.pos + N;
        let bytes = self
            .data
            .get(self.pos..end)
            .ok_or(TgaError::MalformedStructure {
                structure: self.structure,
                needed: self.size.max(end),
                actual: self.data.len(),
            })?;
        let mut buf = [0u8; N];
        buf.copy_from_slice(bytes);
        self.pos = end;
        Ok(buf)
    }

    pub(crate) fn u8(&mut self) -> Result<u8, TgaError> {
        Ok(self.take::<1>()?[0])
    }

    pub(crate) fn u16(&mut self) -> Result<u16, TgaError> {
        Ok(u16::from_le_bytes(self.take()?))
    }

    pub(crate) fn u32(&mut self) -> Result<u32, TgaError> {
        Ok(u32::from_le_bytes(self.take()?))
    }

    pub(crate) fn bytes<const N: usize>(&mut self) -> Result<[u8; N], TgaError> {
        self.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream() -> [u8; 40] {
        let mut data = [0u8; 40];
        for (i, b) in data.iter_mut().enumerate() {
            *b = i as u8;
        }
        data
    }

    #[test]
    fn reads_from_start_and_rewinds() {
        let data = stream();
        let mut src = ByteSource::new(&data);
        let bytes = src.read_section(Section::from_start(4, 18)).unwrap();
        assert_eq!(bytes, &[18, 19, 20, 21]);
        assert_eq!(src.position(), 0);
    }

    #[test]
    fn reads_footer_from_end() {
        let data = stream();
        let mut src = ByteSource::new(&data);
        let footer = src.read_section(Section::FOOTER).unwrap();
        assert_eq!(footer.len(), FOOTER_LEN);
        assert_eq!(footer[0], 14);
        assert_eq!(footer[25], 39);
        assert_eq!(src.position(), 0);
    }

    #[test]
    fn short_read_is_an_error() {
        let data = stream();
        let mut src = ByteSource::new(&data);
        match src.read_section(Section::from_start(10, 35)) {
            Err(TgaError::ShortRead {
                offset,
                needed,
                available,
            }) => {
                assert_eq!(offset, 35);
                assert_eq!(needed, 10);
                assert_eq!(available, 5);
            }
            other => panic!("expected ShortRead, got {other:?}"),
        }
        assert_eq!(src.position(), 0);
    }

    #[test]
    fn negative_position_is_a_seek_error() {
        let data = [0u8; 10];
        let mut src = ByteSource::new(&data);
        match src.read_section(Section::FOOTER) {
            Err(TgaError::SeekOutOfRange { position, len }) => {
                assert_eq!(position, -16);
                assert_eq!(len, 10);
            }
            other => panic!("expected SeekOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn seek_past_end_is_a_seek_error() {
        let data = [0u8; 10];
        let mut src = ByteSource::new(&data);
        assert!(matches!(
            src.seek(11, SectionOrigin::Start),
            Err(TgaError::SeekOutOfRange { .. })
        ));
        // Seeking exactly to the end is allowed; a zero-length read there succeeds.
        let empty = src.read_section(Section::from_start(0, 10)).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn le_reader_decodes_fields() {
        let data = [0x01, 0x34, 0x12, 0x78, 0x56, 0x34, 0x12, b'a', b'b'];
        let mut r = LeReader::new(&data, "test", data.len()).unwrap();
        assert_eq!(r.u8().unwrap(), 1);
        assert_eq!(r.u16().unwrap(), 0x1234);
        assert_eq!(r.u32().unwrap(), 0x1234_5678);
        assert_eq!(r.bytes::<2>().unwrap(), *b"ab");
        assert!(matches!(
            r.u8(),
            Err(TgaError::MalformedStructure { structure: "test", .. })
        ));
    }

    #[test]
    fn le_reader_rejects_short_structure() {
        let data = [0u8; 17];
        match LeReader::new(&data, "header", HEADER_LEN) {
            Err(TgaError::MalformedStructure {
                structure,
                needed,
                actual,
            }) => {
                assert_eq!(structure, "header");
                assert_eq!(needed, 18);
                assert_eq!(actual, 17);
            }
            other => panic!("expected MalformedStructure, got {:?}", other.err()),
        }
    }
}
