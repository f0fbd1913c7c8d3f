//! libcompression backend (Apple targets).
//!
//! Binds `compression_encode_buffer` / `compression_decode_buffer` from the
//! OS-provided `libcompression` with `COMPRESSION_LZFSE`. A null scratch
//! pointer lets the library allocate its own working memory per call.

use core::ptr;

use libc::{c_int, c_void, size_t};

use super::Backend;
use crate::displaylevel;

/// `COMPRESSION_LZFSE` from `<compression.h>`.
const COMPRESSION_LZFSE: c_int = 0x801;

#[link(name = "compression")]
extern "C" {
    fn compression_encode_buffer(
        dst_buffer: *mut u8,
        dst_size: size_t,
        src_buffer: *const u8,
        src_size: size_t,
        scratch_buffer: *mut c_void,
        algorithm: c_int,
    ) -> size_t;

    fn compression_decode_buffer(
        dst_buffer: *mut u8,
        dst_size: size_t,
        src_buffer: *const u8,
        src_size: size_t,
        scratch_buffer: *mut c_void,
        algorithm: c_int,
    ) -> size_t;
}

/// The host platform's LZFSE implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct System;

impl Backend for System {
    fn name(&self) -> &'static str {
        "system"
    }

    fn encode_buffer(&self, dst: &mut [u8], src: &[u8]) -> Option<usize> {
        // SAFETY: both slices are valid for their full length and do not
        // overlap; the library writes at most `dst.len()` bytes.
        let n = unsafe {
            compression_encode_buffer(
                dst.as_mut_ptr(),
                dst.len(),
                src.as_ptr(),
                src.len(),
                ptr::null_mut(),
                COMPRESSION_LZFSE,
            )
        };
        displaylevel!(4, "system encode into {} bytes -> {}\n", dst.len(), n);
        (n > 0).then_some(n)
    }

    fn decode_buffer(&self, dst: &mut [u8], src: &[u8]) -> Option<usize> {
        // SAFETY: as for `encode_buffer`.
        let n = unsafe {
            compression_decode_buffer(
                dst.as_mut_ptr(),
                dst.len(),
                src.as_ptr(),
                src.len(),
                ptr::null_mut(),
                COMPRESSION_LZFSE,
            )
        };
        displaylevel!(4, "system decode into {} bytes -> {}\n", dst.len(), n);
        (n > 0).then_some(n)
    }
}
