//! Buffer-level LZFSE primitives.
//!
//! A [`Backend`] encodes or decodes into a caller-provided scratch buffer and
//! reports how many bytes it produced. This is the contract of libcompression's
//! `compression_encode_buffer` / `compression_decode_buffer` and of the
//! reference library's `lzfse_encode_buffer` / `lzfse_decode_buffer`, with the
//! C convention "0 means failure" replaced by `None`.
//!
//! - [`Reference`] — reference LZFSE C library (`lzfse` crate), every target.
//! - [`System`] — the OS's libcompression, Apple targets only.
//!
//! [`default_backend`] picks the system library when the target has one.

pub mod reference;
#[cfg(has_system_lzfse)]
pub mod system;

pub use reference::Reference;
#[cfg(has_system_lzfse)]
pub use system::System;

/// A one-shot LZFSE buffer primitive.
pub trait Backend: Send + Sync {
    /// Short identifier used in diagnostics.
    fn name(&self) -> &'static str;

    /// Encode all of `src` into `dst`.
    ///
    /// Returns the number of bytes written, or `None` if the encoder failed
    /// or the whole stream did not fit in `dst`.
    fn encode_buffer(&self, dst: &mut [u8], src: &[u8]) -> Option<usize>;

    /// Decode all of `src` into `dst`.
    ///
    /// Returns the number of bytes written, or `None` if `src` is malformed.
    /// A return value equal to `dst.len()` means the output may have been
    /// truncated; callers decide how to treat it.
    fn decode_buffer(&self, dst: &mut [u8], src: &[u8]) -> Option<usize>;
}

/// The preferred backend for this target.
#[cfg(has_system_lzfse)]
pub fn default_backend() -> &'static dyn Backend {
    &System
}

/// The preferred backend for this target.
#[cfg(not(has_system_lzfse))]
pub fn default_backend() -> &'static dyn Backend {
    &Reference
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_backend_has_a_name() {
        let name = default_backend().name();
        assert!(name == "reference" || name == "system");
    }
}
