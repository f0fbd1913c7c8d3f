//! Strategy selection and the compress / decompress entry points.
//!
//! A [`Compressor`] pairs a [`Strategy`] with the [`Backend`] used by the
//! probing path. It is `Copy`, holds no buffers, and can be shared freely
//! across threads.
//!
//! Two API layers exist:
//!
//! - `try_compress` / `try_decompress` return a [`CodecError`] on failure;
//! - `compress` / `decompress` return `Option`, reporting direct-path errors
//!   to the first-chance [`observer`](crate::observer) before discarding
//!   them. Probing failures are discarded silently.

use std::fmt;
use std::sync::OnceLock;

use crate::backend::{default_backend, Backend};
use crate::config::{init_strategy, Strategy};
use crate::error::CodecError;
use crate::{direct, observer, probe};

/// Compress / decompress front end.
#[derive(Clone, Copy)]
pub struct Compressor {
    strategy: Strategy,
    backend: &'static dyn Backend,
}

static GLOBAL: OnceLock<Compressor> = OnceLock::new();

impl Compressor {
    /// A compressor using `strategy` and this target's default backend.
    pub fn new(strategy: Strategy) -> Self {
        Self::with_backend(strategy, default_backend())
    }

    /// A compressor using an explicit probing backend.
    pub fn with_backend(strategy: Strategy, backend: &'static dyn Backend) -> Self {
        Compressor { strategy, backend }
    }

    /// The process-wide default, configured from `LZFSEKIT_PATH` on first use.
    pub fn global() -> &'static Compressor {
        GLOBAL.get_or_init(|| Compressor::new(init_strategy()))
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn backend(&self) -> &'static dyn Backend {
        self.backend
    }

    pub fn try_compress(&self, src: &[u8]) -> Result<Vec<u8>, CodecError> {
        match self.strategy {
            Strategy::Direct => direct::compress(src),
            Strategy::Probing => probe::compress(self.backend, src),
        }
    }

    pub fn try_decompress(&self, src: &[u8]) -> Result<Vec<u8>, CodecError> {
        match self.strategy {
            Strategy::Direct => direct::decompress(src),
            Strategy::Probing => probe::decompress(self.backend, src),
        }
    }

    /// Compress `src`. Empty input yields `Some(vec![])`.
    pub fn compress(&self, src: &[u8]) -> Option<Vec<u8>> {
        self.settle(self.try_compress(src))
    }

    /// Decompress `src`. Empty input yields `Some(vec![])`; malformed input
    /// yields `None`.
    pub fn decompress(&self, src: &[u8]) -> Option<Vec<u8>> {
        self.settle(self.try_decompress(src))
    }

    fn settle(&self, result: Result<Vec<u8>, CodecError>) -> Option<Vec<u8>> {
        match result {
            Ok(out) => Some(out),
            Err(err) => {
                if self.strategy == Strategy::Direct {
                    observer::notify(&err);
                }
                None
            }
        }
    }
}

impl Default for Compressor {
    fn default() -> Self {
        Compressor::new(Strategy::default())
    }
}

impl fmt::Debug for Compressor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Compressor")
            .field("strategy", &self.strategy)
            .field("backend", &self.backend.name())
            .finish()
    }
}
