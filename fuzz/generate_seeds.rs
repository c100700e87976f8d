#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // Minimal 1x1: 26-byte header + one row padded to 4
    let mut minimal = Vec::new();
    minimal.extend_from_slice(b"MPFF");
    minimal.extend_from_slice(&30u32.to_le_bytes()); // file size
    minimal.extend_from_slice(&26u32.to_le_bytes()); // header size
    minimal.extend_from_slice(&14u32.to_le_bytes()); // info header size
    minimal.extend_from_slice(&1i32.to_le_bytes()); // width
    minimal.extend_from_slice(&1i32.to_le_bytes()); // height
    minimal.extend_from_slice(&8u16.to_le_bytes()); // depth
    minimal.extend_from_slice(&[0x5A, 0, 0, 0]);
    fs::write(format!("{dir}/mpff_1x1.mpff"), &minimal).unwrap();

    // 5x3 with row padding and a negative height
    let mut padded = Vec::new();
    padded.extend_from_slice(b"MPFF");
    padded.extend_from_slice(&50u32.to_le_bytes());
    padded.extend_from_slice(&26u32.to_le_bytes());
    padded.extend_from_slice(&14u32.to_le_bytes());
    padded.extend_from_slice(&5i32.to_le_bytes());
    padded.extend_from_slice(&(-3i32).to_le_bytes());
    padded.extend_from_slice(&8u16.to_le_bytes());
    for row in 0u8..3 {
        padded.extend_from_slice(&[row, row, row, row, row, 0, 0, 0]);
    }
    fs::write(format!("{dir}/mpff_5x3_negh.mpff"), &padded).unwrap();

    // Misdeclared file size (the normalization path)
    let mut quirk = minimal.clone();
    quirk[4..8].copy_from_slice(&26u32.to_le_bytes());
    quirk.extend_from_slice(&[0u8; 32]);
    fs::write(format!("{dir}/mpff_quirk_size.mpff"), &quirk).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/just_magic.bin"), b"MPFF").unwrap();
    fs::write(format!("{dir}/header_only.bin"), &minimal[..26]).unwrap();

    println!("Generated seed corpus in {dir}/");
}
