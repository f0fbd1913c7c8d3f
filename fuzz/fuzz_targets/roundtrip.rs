#![no_main]
use libfuzzer_sys::fuzz_target;
use lzfsekit::{Compressor, Strategy};

fuzz_target!(|data: &[u8]| {
    // Direct compression accepts anything and must round-trip exactly.
    let direct = Compressor::new(Strategy::Direct);
    let packed = direct.compress(data).expect("direct compress");
    assert_eq!(direct.decompress(&packed).as_deref(), Some(data));

    // Probing may refuse, but whatever it produces must round-trip too.
    let probing = Compressor::new(Strategy::Probing);
    if let Some(packed) = probing.compress(data) {
        assert_eq!(direct.decompress(&packed).as_deref(), Some(data));
    }
});
