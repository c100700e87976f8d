use crate::error::MpffError;
use crate::header::{MAGIC, MpffHeader};
use crate::pixel::PixelLayout;

/// Header-level facts about an MPFF stream, without decoding pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    /// Row count (absolute value of the wire height).
    pub height: u32,
    /// Bits per pixel as declared in the header (always 8 for a stream
    /// that parses).
    pub depth: u16,
    /// Whether the wire height was positive — bottom-up storage in the
    /// parent format family. Purely informational: rows decode in stored
    /// order either way.
    pub bottom_up: bool,
    pub native_layout: PixelLayout,
    /// Effective total stream size: the declared field after the
    /// truncation clamp and misdeclared-size normalization.
    pub file_size: u64,
    /// Offset of the first pixel row.
    pub header_size: u32,
    /// Declared info-header size. Validated against `header_size` but
    /// never used to locate pixel data.
    pub info_header_size: u32,
}

impl ImageInfo {
    /// Probe a byte stream by parsing and validating its header only.
    pub fn from_bytes(data: &[u8]) -> Result<Self, MpffError> {
        let header = MpffHeader::parse(data)?;
        Ok(ImageInfo {
            width: header.width_u32(),
            height: header.abs_height(),
            depth: header.depth,
            bottom_up: header.bottom_up(),
            native_layout: PixelLayout::Rgb332,
            file_size: header.file_size,
            header_size: header.header_size,
            info_header_size: header.info_header_size,
        })
    }
}

/// Cheap sniff: do these bytes start with the MPFF magic?
pub fn probe_mpff(bytes: &[u8]) -> bool {
    bytes.get(0..4) == Some(MAGIC.as_slice())
}
