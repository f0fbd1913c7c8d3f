//! Probing path: caller-sized scratch buffers over a [`Backend`] primitive.
//!
//! The buffer primitive cannot report how much room it needed, so the size is
//! guessed up front:
//!
//! - compression gets exactly one attempt with a buffer as large as the
//!   input; data that does not shrink therefore fails;
//! - decompression tries `len * DECODE_SCRATCH_FACTOR * i` for
//!   `i = 1..=DECODE_PROBE_ATTEMPTS` and keeps the first success.
//!
//! Each attempt owns its scratch buffer, which is dropped on every exit path.
//! Failures carry no detail; the Option-returning callers stay silent about
//! them.

use crate::backend::Backend;
use crate::config::{DECODE_PROBE_ATTEMPTS, DECODE_SCRATCH_FACTOR};
use crate::displaylevel;
use crate::error::CodecError;

/// Which primitive [`perform`] runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Encode,
    Decode,
}

/// Run one primitive call with a scratch buffer of `buffer_size` bytes.
///
/// Returns the produced bytes, or `None` when the backend fails, produces
/// nothing, or (for decoding) fills the scratch buffer completely, which
/// means the output may have been cut short.
pub fn perform(
    op: Op,
    backend: &dyn Backend,
    src: &[u8],
    buffer_size: usize,
) -> Option<Vec<u8>> {
    if buffer_size == 0 {
        return None;
    }
    let mut scratch = vec![0u8; buffer_size];
    let produced = match op {
        Op::Encode => backend.encode_buffer(&mut scratch, src)?,
        Op::Decode => {
            let n = backend.decode_buffer(&mut scratch, src)?;
            if n >= buffer_size {
                displaylevel!(
                    4,
                    "{}: decode filled {} byte scratch buffer\n",
                    backend.name(),
                    buffer_size
                );
                return None;
            }
            n
        }
    };
    if produced == 0 {
        return None;
    }
    scratch.truncate(produced);
    scratch.shrink_to_fit();
    Some(scratch)
}

/// Compress `src` into a scratch buffer of `src.len()` bytes.
///
/// Empty input is returned unchanged. Fails with
/// [`CodecError::ProbeExhausted`] when the stream does not fit.
pub fn compress(backend: &dyn Backend, src: &[u8]) -> Result<Vec<u8>, CodecError> {
    if src.is_empty() {
        return Ok(Vec::new());
    }
    perform(Op::Encode, backend, src, src.len())
        .ok_or(CodecError::ProbeExhausted { attempts: 1 })
}

/// Decompress `src`, growing the scratch buffer on each failed attempt.
///
/// Empty input is returned unchanged. Fails with
/// [`CodecError::ProbeExhausted`] once every attempt has been rejected, or
/// earlier if the next buffer size would overflow `usize`.
pub fn decompress(backend: &dyn Backend, src: &[u8]) -> Result<Vec<u8>, CodecError> {
    if src.is_empty() {
        return Ok(Vec::new());
    }
    let Some(base) = src.len().checked_mul(DECODE_SCRATCH_FACTOR) else {
        return Err(CodecError::ProbeExhausted { attempts: 0 });
    };
    for attempt in 1..=DECODE_PROBE_ATTEMPTS {
        let Some(size) = base.checked_mul(attempt) else {
            return Err(CodecError::ProbeExhausted { attempts: attempt - 1 });
        };
        displaylevel!(4, "{}: decode attempt {} with {} bytes\n", backend.name(), attempt, size);
        if let Some(out) = perform(Op::Decode, backend, src, size) {
            return Ok(out);
        }
    }
    Err(CodecError::ProbeExhausted { attempts: DECODE_PROBE_ATTEMPTS })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Backend that records every scratch size it is handed and fails until
    /// the buffer reaches `needed` bytes.
    struct Recording {
        needed: usize,
        sizes: Mutex<Vec<usize>>,
        calls: AtomicUsize,
    }

    impl Recording {
        fn new(needed: usize) -> Self {
            Recording { needed, sizes: Mutex::new(Vec::new()), calls: AtomicUsize::new(0) }
        }
    }

    impl Backend for Recording {
        fn name(&self) -> &'static str {
            "recording"
        }

        fn encode_buffer(&self, dst: &mut [u8], _src: &[u8]) -> Option<usize> {
            self.calls.fetch_add(1, Ordering::Relaxed);
            self.sizes.lock().unwrap().push(dst.len());
            (dst.len() >= self.needed).then(|| {
                dst[..self.needed].fill(0xAB);
                self.needed
            })
        }

        fn decode_buffer(&self, dst: &mut [u8], src: &[u8]) -> Option<usize> {
            self.encode_buffer(dst, src)
        }
    }

    #[test]
    fn decode_sizes_grow_linearly() {
        let b = Recording::new(usize::MAX);
        let src = [1u8; 10];
        assert_eq!(decompress(&b, &src), Err(CodecError::ProbeExhausted { attempts: 4 }));
        assert_eq!(*b.sizes.lock().unwrap(), vec![80, 160, 240, 320]);
    }

    #[test]
    fn decode_stops_at_first_success() {
        let b = Recording::new(150);
        let out = decompress(&b, &[0u8; 10]).unwrap();
        assert_eq!(out.len(), 150);
        assert_eq!(b.calls.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn decode_full_buffer_counts_as_miss() {
        // 160 bytes fit exactly into attempt 2, so only attempt 3 is accepted.
        let b = Recording::new(160);
        let out = decompress(&b, &[0u8; 10]).unwrap();
        assert_eq!(out.len(), 160);
        assert_eq!(*b.sizes.lock().unwrap(), vec![80, 160, 240]);
    }

    #[test]
    fn encode_uses_input_sized_buffer_once() {
        let b = Recording::new(11);
        assert_eq!(compress(&b, &[0u8; 10]), Err(CodecError::ProbeExhausted { attempts: 1 }));
        assert_eq!(*b.sizes.lock().unwrap(), vec![10]);
    }

    #[test]
    fn empty_input_skips_backend() {
        let b = Recording::new(1);
        assert_eq!(compress(&b, &[]), Ok(Vec::new()));
        assert_eq!(decompress(&b, &[]), Ok(Vec::new()));
        assert_eq!(b.calls.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn zero_sized_scratch_is_rejected() {
        let b = Recording::new(0);
        assert_eq!(perform(Op::Encode, &b, b"x", 0), None);
        assert_eq!(b.calls.load(Ordering::Relaxed), 0);
    }
}
