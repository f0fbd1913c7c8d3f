// e2e/interop.rs — cross-implementation stream compatibility
//
// Streams produced by the direct encoder (lzfse_rust) must decode through
// every buffer backend, and backend-produced streams must decode through the
// direct decoder. Sizes straddle the 4 KiB point where encoders switch
// between LZVN and full LZFSE blocks.

use lzfsekit::backend::{default_backend, Backend, Reference};
use lzfsekit::{direct, probe};

const SIZES: &[usize] = &[1, 7, 100, 4_095, 4_096, 4_097, 65_536, 300_000];

fn sample(len: usize) -> Vec<u8> {
    let words: [&[u8]; 6] = [b"alpha ", b"beta ", b"gamma ", b"delta ", b"epsilon ", b"zeta\n"];
    let mut state = len as u32 ^ 0x9E37_79B9;
    let mut out = Vec::with_capacity(len + 8);
    while out.len() < len {
        state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        out.extend_from_slice(words[(state >> 29) as usize % words.len()]);
    }
    out.truncate(len);
    out
}

fn backends() -> Vec<&'static dyn Backend> {
    let mut v: Vec<&'static dyn Backend> = Vec::new();
    v.push(&Reference);
    if default_backend().name() != Reference.name() {
        v.push(default_backend());
    }
    v
}

#[test]
fn direct_streams_decode_through_backends() {
    for &len in SIZES {
        let src = sample(len);
        let packed = direct::compress(&src).unwrap();
        for b in backends() {
            let mut dst = vec![0u8; len + 1];
            let n = b
                .decode_buffer(&mut dst, &packed)
                .unwrap_or_else(|| panic!("{} failed to decode {len} bytes", b.name()));
            assert_eq!(&dst[..n], &src[..], "{} len {len}", b.name());
        }
    }
}

#[test]
fn backend_streams_decode_directly() {
    for &len in SIZES {
        let src = sample(len);
        for b in backends() {
            // Generous buffer so even incompressible sizes encode.
            let mut enc = vec![0u8; len + 1024];
            let n = b.encode_buffer(&mut enc, &src).unwrap();
            assert_eq!(direct::decompress(&enc[..n]).unwrap(), src, "{} len {len}", b.name());
        }
    }
}

#[test]
fn probing_matches_direct_where_it_fits() {
    for &len in &SIZES[3..] {
        let src = sample(len);
        for b in backends() {
            let packed = probe::compress(b, &src).unwrap();
            assert_eq!(probe::decompress(b, &packed).unwrap(), src);
            assert_eq!(direct::decompress(&packed).unwrap(), src);
        }
    }
}
