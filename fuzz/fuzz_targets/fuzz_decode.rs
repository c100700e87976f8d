#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Probe and decode must never panic, whatever the input
    let _ = zenmpff::ImageInfo::from_bytes(data);
    let _ = zenmpff::decode(data, enough::Unstoppable);
});
