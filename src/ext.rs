//! `compressed()` / `decompressed()` on byte buffers.

use crate::compressor::Compressor;

/// LZFSE helpers for any contiguous byte buffer.
///
/// Both methods use [`Compressor::global`]. Empty input returns an empty
/// buffer; failure returns `None`.
///
/// ```
/// use lzfsekit::LzfseExt;
///
/// let text = b"to be or not to be, to be or not to be".repeat(8);
/// let packed = text.compressed().unwrap();
/// assert_eq!(packed.decompressed().unwrap(), text);
/// assert_eq!(b"".compressed(), Some(Vec::new()));
/// ```
pub trait LzfseExt {
    fn compressed(&self) -> Option<Vec<u8>>;
    fn decompressed(&self) -> Option<Vec<u8>>;
}

impl LzfseExt for [u8] {
    #[inline]
    fn compressed(&self) -> Option<Vec<u8>> {
        Compressor::global().compress(self)
    }

    #[inline]
    fn decompressed(&self) -> Option<Vec<u8>> {
        Compressor::global().decompress(self)
    }
}
