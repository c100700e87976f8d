#![no_main]
use libfuzzer_sys::fuzz_target;
use zenmpff::*;

fuzz_target!(|data: &[u8]| {
    // If it decodes, re-encoding and decoding again must produce the
    // same image
    let Ok(decoded) = decode(data, enough::Unstoppable) else {
        return;
    };

    let reencoded = EncodeRequest::new()
        .with_stride(decoded.stride)
        .encode(
            decoded.pixels(),
            decoded.width,
            decoded.height as i32,
            enough::Unstoppable,
        )
        .expect("decoded image failed to re-encode");

    let decoded2 = decode(&reencoded, enough::Unstoppable).expect("re-encoded data failed to decode");

    assert_eq!(decoded.width, decoded2.width);
    assert_eq!(decoded.height, decoded2.height);
    let rows: Vec<&[u8]> = decoded.rows().collect();
    let rows2: Vec<&[u8]> = decoded2.rows().collect();
    assert_eq!(rows, rows2, "roundtrip pixel mismatch");
});
