//! MPFF decoder.
//!
//! Validates the header, then copies 4-byte-aligned pixel rows out of the
//! input into an owned, stride-aware buffer. Each call is a single-shot
//! transform: it either returns a complete image or fails without output.

use alloc::vec::Vec;
use enough::Stop;

use crate::error::MpffError;
use crate::header::{self, MpffHeader};
use crate::limits::Limits;
use crate::pixel::PixelLayout;

/// Decoded image. Owns its pixel buffer; ownership transfers to the
/// caller, the decoder retains nothing.
///
/// Rows are stored in the order they appear on the wire (the height sign
/// in the header is metadata only, never a reordering instruction), at a
/// stride of [`stride`](Self::stride) bytes. The stride preserves the
/// format's 4-byte row alignment, so it can exceed the packed row width.
#[derive(Clone, Debug)]
pub struct DecodeOutput {
    pixels: Vec<u8>,
    pub width: u32,
    /// Row count (absolute value of the wire height).
    pub height: u32,
    /// Bytes between the starts of consecutive rows.
    pub stride: usize,
    pub layout: PixelLayout,
}

impl DecodeOutput {
    /// Access the full pixel buffer, row padding included.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Take ownership of the pixel buffer.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Iterate rows at their packed width, skipping the alignment padding.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        let packed = self.width as usize * self.layout.bytes_per_pixel();
        self.pixels.chunks_exact(self.stride).map(move |r| &r[..packed])
    }

    /// Zero-copy [`imgref::ImgRef`] view over the decoded samples.
    ///
    /// The view carries the buffer's stride, so padding bytes stay out of
    /// the image without a repack.
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, u8> {
        imgref::ImgRef::new_stride(
            self.pixels.as_slice(),
            self.width as usize,
            self.height as usize,
            self.stride,
        )
    }
}

/// Builder for decode calls.
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    /// Apply resource ceilings before the output buffer is allocated.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn decode(self, stop: impl Stop) -> Result<DecodeOutput, MpffError> {
        decode_mpff(self.data, self.limits, &stop)
    }
}

/// Decode an MPFF byte stream.
///
/// Convenience wrapper over [`DecodeRequest`] with no limits.
pub fn decode(data: &[u8], stop: impl Stop) -> Result<DecodeOutput, MpffError> {
    decode_mpff(data, None, &stop)
}

pub(crate) fn decode_mpff(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<DecodeOutput, MpffError> {
    let header = MpffHeader::parse(data)?;

    let width = header.width_u32();
    let rows = header.abs_height();
    let too_large = || MpffError::DimensionsTooLarge {
        width,
        height: rows,
    };
    let wire_row = header::wire_row_size(width, header.depth).ok_or_else(too_large)?;

    if let Some(limits) = limits {
        limits.check(width, rows)?;
    }
    let total = wire_row
        .checked_mul(rows as usize)
        .ok_or_else(too_large)?;
    if let Some(limits) = limits {
        limits.check_memory(total)?;
    }

    // Pixel data sits at header_size, full stop. info_header_size is
    // validated but plays no part in locating it; existing files depend
    // on this.
    let data_start = header.header_size as usize;
    let needed = data_start.checked_add(total).ok_or_else(too_large)?;
    if needed > data.len() {
        return Err(MpffError::Truncated {
            needed,
            available: data.len(),
        });
    }

    stop.check()?;

    let mut out = Vec::new();
    out.try_reserve_exact(total)
        .map_err(|_| MpffError::OutOfMemory { bytes: total })?;

    for (row_idx, row) in data[data_start..needed].chunks_exact(wire_row).enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        out.extend_from_slice(row);
    }

    Ok(DecodeOutput {
        pixels: out,
        width,
        height: rows,
        stride: wire_row,
        layout: PixelLayout::Rgb332,
    })
}
