//! Direct path: one-shot calls into a codec that sizes its own output.
//!
//! Backed by `lzfse_rust`, whose `encode_bytes` / `decode_bytes` append to a
//! growable `Vec<u8>` and report malformed input as an error. No scratch
//! buffer sizing happens here.

use crate::displaylevel;
use crate::error::CodecError;

/// Compress `src` into a new LZFSE stream.
///
/// Empty input is returned as an empty buffer without calling the encoder.
pub fn compress(src: &[u8]) -> Result<Vec<u8>, CodecError> {
    if src.is_empty() {
        return Ok(Vec::new());
    }
    let mut dst = Vec::with_capacity(src.len() / 2 + 64);
    match lzfse_rust::encode_bytes(src, &mut dst) {
        Ok(_) if !dst.is_empty() => Ok(dst),
        Ok(_) => Err(CodecError::EncodeFailed),
        Err(e) => {
            displaylevel!(4, "direct encode of {} bytes: {:?}\n", src.len(), e);
            Err(CodecError::EncodeFailed)
        }
    }
}

/// Decompress a complete LZFSE stream.
///
/// Empty input is returned as an empty buffer without calling the decoder.
/// Truncated, corrupted or foreign data yields
/// [`CodecError::MalformedInput`], as does a non-empty stream that decodes
/// to nothing (a bare end-of-stream block), which the probing path also
/// rejects.
pub fn decompress(src: &[u8]) -> Result<Vec<u8>, CodecError> {
    if src.is_empty() {
        return Ok(Vec::new());
    }
    let mut dst = Vec::with_capacity(src.len().saturating_mul(4));
    match lzfse_rust::decode_bytes(src, &mut dst) {
        Ok(_) if !dst.is_empty() => Ok(dst),
        Ok(_) => Err(CodecError::MalformedInput),
        Err(e) => {
            displaylevel!(4, "direct decode of {} bytes: {:?}\n", src.len(), e);
            Err(CodecError::MalformedInput)
        }
    }
}
