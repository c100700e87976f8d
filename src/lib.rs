//! # zenmpff
//!
//! MPFF bitmap container decoder and encoder.
//!
//! MPFF is a minimal single-image container in the spirit of a stripped
//! BMP: a 12-byte file header (`"MPFF"` magic, file size, header size), a
//! 14-byte info header (info header size, width, height, depth), then
//! uncompressed 8-bit pixel rows padded to 4-byte boundaries. All
//! multi-byte fields are little-endian. Every stream holds exactly one
//! complete, independently decodable image.
//!
//! Both operations are stateless, allocation-transferring transforms: the
//! decoder hands the caller an owned pixel buffer, the encoder an owned
//! byte vector, and neither keeps any state between calls, so concurrent
//! use needs no coordination.
//!
//! ## Tolerated wire anomalies
//!
//! Two deviations seen in the wild are accepted rather than rejected:
//! a declared file size larger than the actual input is clamped to the
//! input length (warned about under the `log` feature), and a file size
//! field holding a header size is replaced with a size derived from the
//! input. Everything else that violates the header invariants is a hard
//! error.
//!
//! ## Non-Goals
//!
//! - Compression, color-space conversion, palette handling
//! - Multi-frame or animated streams
//! - Pixel depths other than 8 bits per pixel
//!
//! ## Usage
//!
//! ```no_run
//! use zenmpff::{DecodeRequest, EncodeRequest, ImageInfo, Unstoppable};
//!
//! let data: &[u8] = &[]; // your MPFF bytes
//!
//! // Probe without decoding
//! let info = ImageInfo::from_bytes(data)?;
//! println!("{}x{}", info.width, info.height);
//!
//! // Decode
//! let decoded = DecodeRequest::new(data).decode(Unstoppable)?;
//! for row in decoded.rows() {
//!     // width bytes per row, alignment padding already skipped
//!     let _ = row;
//! }
//!
//! // Re-encode
//! let encoded = EncodeRequest::new()
//!     .with_stride(decoded.stride)
//!     .encode(decoded.pixels(), decoded.width, decoded.height as i32, Unstoppable)?;
//! # Ok::<(), zenmpff::MpffError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod decode;
mod encode;
mod error;
mod header;
mod info;
mod limits;
mod pixel;

// Re-exports
pub use decode::{DecodeOutput, DecodeRequest, decode};
pub use encode::{EncodeRequest, encode};
pub use enough::{Stop, Unstoppable};
pub use error::MpffError;
pub use info::{ImageInfo, probe_mpff};
pub use limits::Limits;
pub use pixel::PixelLayout;
