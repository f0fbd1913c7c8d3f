//! Reference LZFSE library backend.
//!
//! Wraps `lzfse::encode_buffer` / `lzfse::decode_buffer`, which link the
//! reference C implementation. Errors for a too-small output buffer and for
//! malformed input both collapse to `None`; the probing path retries on
//! either.

use super::Backend;
use crate::displaylevel;

/// The reference LZFSE C library.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reference;

impl Backend for Reference {
    fn name(&self) -> &'static str {
        "reference"
    }

    fn encode_buffer(&self, dst: &mut [u8], src: &[u8]) -> Option<usize> {
        match lzfse::encode_buffer(src, dst) {
            Ok(n) if n > 0 => Some(n),
            Ok(_) => None,
            Err(e) => {
                displaylevel!(4, "reference encode into {} bytes: {:?}\n", dst.len(), e);
                None
            }
        }
    }

    fn decode_buffer(&self, dst: &mut [u8], src: &[u8]) -> Option<usize> {
        match lzfse::decode_buffer(src, dst) {
            Ok(n) if n > 0 => Some(n),
            Ok(_) => None,
            Err(e) => {
                displaylevel!(4, "reference decode into {} bytes: {:?}\n", dst.len(), e);
                None
            }
        }
    }
}
