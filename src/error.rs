use enough::StopReason;

/// Errors from MPFF decoding and encoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum MpffError {
    #[error("input too small for an MPFF file header: {size} bytes")]
    TooSmall { size: usize },

    #[error("magic bytes are not \"MPFF\"")]
    InvalidMagic,

    #[error("info header size {info_header_size} does not fit in header size {header_size}")]
    InvalidHeader {
        header_size: u32,
        info_header_size: u32,
    },

    #[error("header size {header_size} reaches past declared file size {file_size}")]
    HeaderExceedsFile { file_size: u64, header_size: u32 },

    #[error("unsupported pixel depth: {depth} bits (only 8 is defined)")]
    UnsupportedDepth { depth: u16 },

    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: i64, height: i64 },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("input truncated: need {needed} bytes, have {available}")]
    Truncated { needed: usize, available: usize },

    #[error("source stride {stride} is smaller than the packed row size {packed_row_size}")]
    StrideTooSmall {
        stride: usize,
        packed_row_size: usize,
    },

    #[error("source buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("limit exceeded: {0}")]
    LimitExceeded(alloc::string::String),

    #[error("failed to allocate {bytes} bytes for output")]
    OutOfMemory { bytes: usize },

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for MpffError {
    fn from(r: StopReason) -> Self {
        MpffError::Cancelled(r)
    }
}
