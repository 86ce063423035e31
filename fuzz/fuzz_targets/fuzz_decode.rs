#![no_main]
use libfuzzer_sys::fuzz_target;
use zentga::{DecodeRequest, ImageInfo, OriginMapping, TgaFile};

fuzz_target!(|data: &[u8]| {
    // Probe, raw read and both origin mappings — must never panic
    let _ = ImageInfo::from_bytes(data);
    let _ = TgaFile::read(data);
    let _ = zentga::decode(data, enough::Unstoppable);

    let Ok(decoded) = DecodeRequest::new(data)
        .with_origin_mapping(OriginMapping::Exact)
        .decode(enough::Unstoppable)
    else {
        return;
    };
    assert_eq!(
        decoded.pixels().len(),
        decoded.width as usize * decoded.height as usize * 4
    );
});
