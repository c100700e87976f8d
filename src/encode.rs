//! MPFF encoder.
//!
//! Writes the 26-byte header and then the pixel rows, each padded to a
//! 4-byte boundary, top row first. The output is always a complete,
//! independently decodable image.

use alloc::vec::Vec;
use core::iter::repeat_n;
use enough::Stop;

use crate::error::MpffError;
use crate::header::{self, HEADER_SIZE, INFO_HEADER_SIZE, MAGIC};

const DEPTH: u16 = 8;

/// Builder for encode calls.
#[derive(Clone, Debug, Default)]
pub struct EncodeRequest {
    stride: Option<usize>,
}

impl EncodeRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Byte distance between consecutive source rows.
    ///
    /// Defaults to the packed row size (`width` bytes at 8 bits per
    /// pixel). Set this when the source buffer carries its own row
    /// padding; only the packed leading bytes of each row are encoded.
    pub fn with_stride(mut self, stride: usize) -> Self {
        self.stride = Some(stride);
        self
    }

    /// Encode `abs(height)` rows of `width` samples into an MPFF stream.
    ///
    /// A negative `height` is stored as given; it does not reorder rows.
    /// Row 0 of `pixels` is always written first.
    pub fn encode(
        &self,
        pixels: &[u8],
        width: u32,
        height: i32,
        stop: impl Stop,
    ) -> Result<Vec<u8>, MpffError> {
        encode_mpff(pixels, width, height, self.stride, &stop)
    }
}

/// Encode a packed pixel buffer as MPFF.
///
/// Convenience wrapper over [`EncodeRequest`] with the default stride.
pub fn encode(
    pixels: &[u8],
    width: u32,
    height: i32,
    stop: impl Stop,
) -> Result<Vec<u8>, MpffError> {
    encode_mpff(pixels, width, height, None, &stop)
}

pub(crate) fn encode_mpff(
    pixels: &[u8],
    width: u32,
    height: i32,
    stride: Option<usize>,
    stop: &dyn Stop,
) -> Result<Vec<u8>, MpffError> {
    if width == 0 || height == 0 {
        return Err(MpffError::InvalidDimensions {
            width: i64::from(width),
            height: i64::from(height),
        });
    }
    let rows = height.unsigned_abs() as usize;
    if width > i32::MAX as u32 {
        // The wire stores width as i32.
        return Err(MpffError::DimensionsTooLarge {
            width,
            height: height.unsigned_abs(),
        });
    }

    let too_large = || MpffError::DimensionsTooLarge {
        width,
        height: height.unsigned_abs(),
    };

    let packed = header::packed_row_size(width, DEPTH).ok_or_else(too_large)?;
    let padding = (4 - (packed & 3)) & 3;
    let wire_row = packed + padding;

    let image_size = wire_row.checked_mul(rows).ok_or_else(too_large)?;
    let file_size = image_size
        .checked_add(HEADER_SIZE as usize)
        .ok_or_else(too_large)?;
    // file_size is a u32 wire field.
    let file_size_u32 = u32::try_from(file_size).map_err(|_| too_large())?;

    let stride = stride.unwrap_or(packed);
    if stride < packed {
        return Err(MpffError::StrideTooSmall {
            stride,
            packed_row_size: packed,
        });
    }
    let needed = (rows - 1)
        .checked_mul(stride)
        .and_then(|n| n.checked_add(packed))
        .ok_or_else(too_large)?;
    if pixels.len() < needed {
        return Err(MpffError::BufferTooSmall {
            needed,
            actual: pixels.len(),
        });
    }

    stop.check()?;

    let mut out = Vec::new();
    out.try_reserve_exact(file_size)
        .map_err(|_| MpffError::OutOfMemory { bytes: file_size })?;

    // File header, then info header. The field order is the wire
    // contract.
    out.extend_from_slice(MAGIC);
    out.extend_from_slice(&file_size_u32.to_le_bytes());
    out.extend_from_slice(&HEADER_SIZE.to_le_bytes());
    out.extend_from_slice(&INFO_HEADER_SIZE.to_le_bytes());
    out.extend_from_slice(&(width as i32).to_le_bytes());
    out.extend_from_slice(&height.to_le_bytes());
    out.extend_from_slice(&DEPTH.to_le_bytes());
    debug_assert_eq!(out.len(), HEADER_SIZE as usize);

    for row_idx in 0..rows {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        let row_start = row_idx * stride;
        out.extend_from_slice(&pixels[row_start..row_start + packed]);
        out.extend(repeat_n(0u8, padding));
    }

    debug_assert_eq!(out.len(), file_size);
    Ok(out)
}
