//! LZFSE compression helpers for byte buffers.
//!
//! The crate adds [`LzfseExt::compressed`] and [`LzfseExt::decompressed`] to
//! `[u8]`, plus the [`Compressor`] they delegate to. No codec lives here: the
//! direct strategy calls `lzfse_rust`, and the probing strategy hands
//! caller-sized scratch buffers to a [`Backend`] (the OS's libcompression on
//! Apple targets, the reference LZFSE library elsewhere).
//!
//! ```
//! use lzfsekit::{Compressor, Strategy};
//!
//! let c = Compressor::new(Strategy::Direct);
//! let data = b"hello hello hello hello hello".to_vec();
//! let packed = c.compress(&data).unwrap();
//! assert_eq!(c.decompress(&packed).unwrap(), data);
//! assert_eq!(c.decompress(b"not lzfse"), None);
//!
//! // Probing needs the stream to come out smaller than the input.
//! assert_eq!(Compressor::new(Strategy::Probing).compress(b"tiny"), None);
//! ```

pub mod display;
pub mod error;
pub mod config;
pub mod observer;
pub mod backend;
pub mod direct;
pub mod probe;
pub mod compressor;
pub mod ext;
pub mod batch;
pub mod util;
pub mod file;
pub mod cli;

// ── Version constants ─────────────────────────────────────────────────────────
pub const VERSION_STRING: &str = env!("CARGO_PKG_VERSION");

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use backend::{default_backend, Backend, Reference};
#[cfg(has_system_lzfse)]
pub use backend::System;
pub use compressor::Compressor;
pub use config::Strategy;
pub use error::CodecError;
pub use ext::LzfseExt;
pub use observer::{clear_observer, set_observer};
