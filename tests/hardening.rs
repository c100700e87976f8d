//! Malformed-input handling: every header invariant, the tolerated
//! anomalies, and the resource ceilings.

use zenmpff::*;

/// Hand-build a header with full control over every field.
fn raw_header(
    file_size: u32,
    header_size: u32,
    info_header_size: u32,
    w: i32,
    h: i32,
    depth: u16,
) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(b"MPFF");
    out.extend_from_slice(&file_size.to_le_bytes());
    out.extend_from_slice(&header_size.to_le_bytes());
    out.extend_from_slice(&info_header_size.to_le_bytes());
    out.extend_from_slice(&w.to_le_bytes());
    out.extend_from_slice(&h.to_le_bytes());
    out.extend_from_slice(&depth.to_le_bytes());
    out
}

/// Header + zero pixel rows sized exactly for (w, h).
fn valid_file(w: i32, h: i32) -> Vec<u8> {
    let wire_row = ((w as usize) + 3) & !3;
    let file_size = 26 + wire_row * h.unsigned_abs() as usize;
    let mut out = raw_header(file_size as u32, 26, 14, w, h, 8);
    out.resize(file_size, 0);
    out
}

#[test]
fn empty_and_short_inputs() {
    for len in 0..12 {
        let data = vec![b'M'; len];
        assert!(
            matches!(decode(&data, Unstoppable), Err(MpffError::TooSmall { size }) if size == len),
            "len {len}"
        );
    }
}

#[test]
fn wrong_magic_is_rejected() {
    let mut data = valid_file(4, 4);
    data[0..4].copy_from_slice(b"BMFF");
    assert!(matches!(
        decode(&data, Unstoppable),
        Err(MpffError::InvalidMagic)
    ));
    assert!(matches!(
        ImageInfo::from_bytes(&data),
        Err(MpffError::InvalidMagic)
    ));
}

#[test]
fn info_header_size_boundary() {
    // info_header_size + 12 == header_size: accepted.
    let data = valid_file(4, 2);
    assert!(decode(&data, Unstoppable).is_ok());

    // One past the boundary: rejected, regardless of pixel data.
    let mut data = raw_header(34, 26, 15, 4, 2, 8);
    data.resize(34, 0);
    match decode(&data, Unstoppable) {
        Err(MpffError::InvalidHeader {
            header_size,
            info_header_size,
        }) => {
            assert_eq!(header_size, 26);
            assert_eq!(info_header_size, 15);
        }
        other => panic!("expected InvalidHeader, got {other:?}"),
    }
}

#[test]
fn oversized_info_header_rejected_even_when_huge() {
    let mut data = raw_header(1000, 26, u32::MAX, 4, 2, 8);
    data.resize(1000, 0);
    // u32::MAX + 12 must not wrap around the comparison.
    assert!(matches!(
        decode(&data, Unstoppable),
        Err(MpffError::InvalidHeader { .. })
    ));
}

#[test]
fn file_size_quirk_normalization() {
    // file_size mis-declared as header_size: effective size becomes
    // input length - 2, and the stream decodes.
    let mut data = raw_header(26, 26, 14, 4, 100, 8);
    data.resize(1000, 7);
    let info = ImageInfo::from_bytes(&data).unwrap();
    assert_eq!(info.file_size, 998);
    let decoded = decode(&data, Unstoppable).unwrap();
    assert_eq!(decoded.height, 100);

    // Same for file_size == 12.
    let mut data = raw_header(12, 26, 14, 4, 100, 8);
    data.resize(1000, 7);
    assert!(decode(&data, Unstoppable).is_ok());
}

#[test]
fn quirk_without_enough_data_is_rejected() {
    // After normalization the effective size is 28 - 2 = 26, which does
    // not clear the 26-byte header.
    let mut data = raw_header(26, 26, 14, 4, 1, 8);
    data.resize(28, 0);
    match decode(&data, Unstoppable) {
        Err(MpffError::HeaderExceedsFile {
            file_size,
            header_size,
        }) => {
            assert_eq!(file_size, 26);
            assert_eq!(header_size, 26);
        }
        other => panic!("expected HeaderExceedsFile, got {other:?}"),
    }
}

#[test]
fn declared_size_beyond_input_is_clamped() {
    // Declares 5000 bytes, supplies 500. Header parsing tolerates the
    // mismatch; the rows present still decode.
    let mut data = raw_header(5000, 26, 14, 4, 100, 8);
    data.resize(500, 3);
    let info = ImageInfo::from_bytes(&data).unwrap();
    assert_eq!(info.file_size, 500);
    let decoded = decode(&data, Unstoppable).unwrap();
    assert_eq!(decoded.width, 4);
    assert_eq!(decoded.height, 100);
}

#[test]
fn missing_pixel_rows_is_truncated() {
    // Header promises 100 rows of 4 bytes but the input stops short.
    let mut data = raw_header(426, 26, 14, 4, 100, 8);
    data.resize(200, 0);
    match decode(&data, Unstoppable) {
        Err(MpffError::Truncated { needed, available }) => {
            assert_eq!(needed, 26 + 4 * 100);
            assert_eq!(available, 200);
        }
        other => panic!("expected Truncated, got {other:?}"),
    }
}

#[test]
fn header_only_input_cannot_supply_dimensions() {
    // 20 bytes passes the 12-byte gate but ends inside the info header.
    // The declared sizes keep it from getting as far as the field reads.
    let mut data = raw_header(5000, 26, 14, 4, 4, 8);
    data.truncate(20);
    assert!(decode(&data, Unstoppable).is_err());
}

#[test]
fn unsupported_depths() {
    for depth in [0u16, 1, 4, 16, 24, 32] {
        let mut data = raw_header(426, 26, 14, 4, 100, 8);
        data[24..26].copy_from_slice(&depth.to_le_bytes());
        data.resize(426, 0);
        assert!(
            matches!(
                decode(&data, Unstoppable),
                Err(MpffError::UnsupportedDepth { depth: d }) if d == depth
            ),
            "depth {depth}"
        );
    }
}

#[test]
fn bad_dimensions_are_rejected() {
    for (w, h) in [(0i32, 4i32), (-1, 4), (i32::MIN, 4), (4, 0)] {
        let mut data = raw_header(426, 26, 14, w, h, 8);
        data.resize(426, 0);
        assert!(
            matches!(
                decode(&data, Unstoppable),
                Err(MpffError::InvalidDimensions { .. })
            ),
            "{w}x{h}"
        );
    }
}

#[test]
fn pixel_data_always_starts_at_header_size() {
    // A header_size beyond 26 shifts the pixel data, info_header_size
    // stays 14 and is not consulted for the offset.
    let header_size = 40u32;
    let file_size = 40 + 4;
    let mut data = raw_header(file_size, header_size, 14, 4, 1, 8);
    data.resize(header_size as usize, 0); // reserved header tail
    data.extend_from_slice(&[9, 8, 7, 6]);
    let decoded = decode(&data, Unstoppable).unwrap();
    assert_eq!(decoded.pixels(), &[9, 8, 7, 6]);
}

#[test]
fn limits_are_enforced() {
    let data = valid_file(64, 64);

    let limits = Limits {
        max_pixels: Some(1000),
        ..Default::default()
    };
    let result = DecodeRequest::new(&data).with_limits(&limits).decode(Unstoppable);
    assert!(matches!(result, Err(MpffError::LimitExceeded(_))));

    let limits = Limits {
        max_memory_bytes: Some(100),
        ..Default::default()
    };
    let result = DecodeRequest::new(&data).with_limits(&limits).decode(Unstoppable);
    assert!(matches!(result, Err(MpffError::LimitExceeded(_))));

    // Generous limits pass.
    let limits = Limits {
        max_width: Some(64),
        max_height: Some(64),
        max_pixels: Some(64 * 64),
        max_memory_bytes: Some(64 * 64),
    };
    assert!(
        DecodeRequest::new(&data)
            .with_limits(&limits)
            .decode(Unstoppable)
            .is_ok()
    );
}

#[test]
fn encoder_rejects_bad_arguments() {
    assert!(matches!(
        encode(&[], 0, 4, Unstoppable),
        Err(MpffError::InvalidDimensions { .. })
    ));
    assert!(matches!(
        encode(&[], 4, 0, Unstoppable),
        Err(MpffError::InvalidDimensions { .. })
    ));

    // Source slice shorter than width * rows.
    assert!(matches!(
        encode(&[0u8; 7], 4, 2, Unstoppable),
        Err(MpffError::BufferTooSmall { needed: 8, actual: 7 })
    ));

    // Stride below the packed row width.
    let result = EncodeRequest::new()
        .with_stride(3)
        .encode(&[0u8; 16], 4, 2, Unstoppable);
    assert!(matches!(
        result,
        Err(MpffError::StrideTooSmall {
            stride: 3,
            packed_row_size: 4
        })
    ));
}

#[test]
fn decode_is_atomic_on_failure() {
    // A stream that fails halfway through its rows returns an error and
    // no buffer, not a partial image.
    let mut data = raw_header(426, 26, 14, 4, 100, 8);
    data.resize(300, 1);
    assert!(decode(&data, Unstoppable).is_err());
}

#[test]
fn trailing_garbage_is_ignored() {
    // Extra bytes after the declared image do not disturb decoding.
    let mut data = valid_file(4, 2);
    let decoded_clean = decode(&data, Unstoppable).unwrap();
    data.extend_from_slice(b"trailing junk");
    let decoded = decode(&data, Unstoppable).unwrap();
    assert_eq!(decoded.pixels(), decoded_clean.pixels());
}
