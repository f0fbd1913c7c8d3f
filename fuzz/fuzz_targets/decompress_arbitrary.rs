#![no_main]
use libfuzzer_sys::fuzz_target;
use lzfsekit::{Compressor, Strategy};

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes: None is fine, panics and UB are not.
    let _ = Compressor::new(Strategy::Direct).decompress(data);
    // Probing scratch buffers grow to 32x the input; cap the input so the
    // fuzzer does not spend its time allocating.
    if data.len() <= 1 << 16 {
        let _ = Compressor::new(Strategy::Probing).decompress(data);
    }
});
