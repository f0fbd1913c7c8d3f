//! Parallel compress / decompress over many independent buffers.
//!
//! Each buffer is handled exactly like a single [`Compressor`] call; results
//! come back in input order. Work runs on a dedicated rayon pool so the
//! worker count is honoured even when the caller already uses rayon's global
//! pool.

use rayon::prelude::*;

use crate::compressor::Compressor;
use crate::displaylevel;
use crate::error::CodecError;

/// Resolve a requested worker count: `0` means one per logical core.
pub fn resolve_workers(nb_workers: usize) -> usize {
    if nb_workers == 0 {
        num_cpus::get().max(1)
    } else {
        nb_workers
    }
}

/// Apply `f` to every item on `nb_workers` threads, keeping input order.
///
/// Items are visited independently; only the results are collected, so a
/// caller that does its own I/O inside `f` holds one item per worker.
pub fn map_ordered<T, R, F>(items: &[T], nb_workers: usize, f: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Send + Sync,
{
    let threads = resolve_workers(nb_workers);
    if threads == 1 || items.len() <= 1 {
        return items.iter().map(&f).collect();
    }
    match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
        Ok(pool) => pool.install(|| items.par_iter().map(&f).collect()),
        Err(e) => {
            displaylevel!(
                2,
                "warning: cannot start {} workers ({}); running serially\n",
                threads,
                e
            );
            items.iter().map(&f).collect()
        }
    }
}

/// Compress every buffer in `inputs` using `compressor`.
pub fn compress_all(
    compressor: &Compressor,
    inputs: &[&[u8]],
    nb_workers: usize,
) -> Vec<Option<Vec<u8>>> {
    map_ordered(inputs, nb_workers, |src| compressor.compress(src))
}

/// Decompress every buffer in `inputs` using `compressor`.
pub fn decompress_all(
    compressor: &Compressor,
    inputs: &[&[u8]],
    nb_workers: usize,
) -> Vec<Option<Vec<u8>>> {
    map_ordered(inputs, nb_workers, |src| compressor.decompress(src))
}

/// Like [`compress_all`], but keeps each failure's cause and never notifies
/// the first-chance observer.
pub fn try_compress_all(
    compressor: &Compressor,
    inputs: &[&[u8]],
    nb_workers: usize,
) -> Vec<Result<Vec<u8>, CodecError>> {
    map_ordered(inputs, nb_workers, |src| compressor.try_compress(src))
}

/// Like [`decompress_all`], but keeps each failure's cause and never notifies
/// the first-chance observer.
pub fn try_decompress_all(
    compressor: &Compressor,
    inputs: &[&[u8]],
    nb_workers: usize,
) -> Vec<Result<Vec<u8>, CodecError>> {
    map_ordered(inputs, nb_workers, |src| compressor.try_decompress(src))
}
