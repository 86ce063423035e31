#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn tga(image_type: u8, width: u16, height: u16, bits: u8, descriptor: u8, body: &[u8]) -> Vec<u8> {
    let mut out = vec![0u8; 18];
    out[2] = image_type;
    out[12..14].copy_from_slice(&width.to_le_bytes());
    out[14..16].copy_from_slice(&height.to_le_bytes());
    out[16] = bits;
    out[17] = descriptor;
    out.extend_from_slice(body);
    out.extend_from_slice(&[0u8; 8]);
    out.extend_from_slice(b"TRUEVISION-XFILE.\0");
    out
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // True-color 2x2, one per depth and origin
    fs::write(format!("{dir}/bgr_2x2_bl.tga"), tga(2, 2, 2, 24, 0x00, &[0x40; 12])).unwrap();
    fs::write(format!("{dir}/bgra_2x2_tl.tga"), tga(2, 2, 2, 32, 0x28, &[0x80; 16])).unwrap();
    fs::write(format!("{dir}/bgra_2x2_tr.tga"), tga(2, 2, 2, 32, 0x38, &[0x80; 16])).unwrap();
    fs::write(format!("{dir}/bgr555_2x2_br.tga"), tga(2, 2, 2, 16, 0x10, &[0x1F; 8])).unwrap();

    // Rejected types
    fs::write(format!("{dir}/rle_1x1.tga"), tga(10, 1, 1, 24, 0, &[0x80, 1, 2, 3])).unwrap();
    fs::write(format!("{dir}/gray_1x1.tga"), tga(3, 1, 1, 8, 0, &[0x7F])).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/header_only.bin"), &tga(2, 1, 1, 24, 0, &[])[..18]).unwrap();
    fs::write(format!("{dir}/short_pixels.tga"), tga(2, 8, 8, 32, 0, &[0; 7])).unwrap();

    println!("Generated seed corpus in {dir}/");
}
