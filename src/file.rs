//! Whole-file compress / decompress / test.
//!
//! Files are read fully into memory, transformed with a [`Compressor`], and
//! written in one go; there is no streaming. The `stdin` / `stdout`
//! sentinels select the standard streams.
//!
//! After a successful regular-file operation the destination inherits the
//! source's modification time, and the source is optionally removed.

use std::fs::{self, OpenOptions};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context};

use crate::batch;
use crate::compressor::Compressor;
use crate::config::LZFSE_EXTENSION;
use crate::displaylevel;
use crate::util::{copy_mtime, is_directory, is_reg_file};

// ── Sentinels ────────────────────────────────────────────────────────────────

/// Read from standard input.
pub const STDIN_MARK: &str = "stdin";

/// Write to standard output.
pub const STDOUT_MARK: &str = "stdout";

// ── Options and results ──────────────────────────────────────────────────────

/// What to do with each file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOp {
    Compress,
    Decompress,
    /// Decompress and discard, reporting only success or failure.
    Test,
}

/// Per-run file handling policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileOptions {
    /// Replace an existing destination file.
    pub overwrite: bool,
    /// Delete the source after a successful operation.
    pub remove_src: bool,
}

/// Byte counts for one processed file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileStats {
    pub bytes_in: u64,
    pub bytes_out: u64,
}

impl FileStats {
    /// Output size as a percentage of input size (0 for empty input).
    pub fn ratio_percent(&self) -> f64 {
        if self.bytes_in == 0 {
            0.0
        } else {
            self.bytes_out as f64 * 100.0 / self.bytes_in as f64
        }
    }
}

// ── Naming ───────────────────────────────────────────────────────────────────

/// Default destination for `src` under `op`.
///
/// Compression appends `.lzfse`. Decompression strips it and returns `None`
/// when `src` lacks the extension. Test mode has no destination.
pub fn output_name(op: FileOp, src: &str) -> Option<String> {
    match op {
        FileOp::Compress => Some(format!("{src}{LZFSE_EXTENSION}")),
        FileOp::Decompress => src
            .strip_suffix(LZFSE_EXTENSION)
            .filter(|stem| !stem.is_empty())
            .map(str::to_owned),
        FileOp::Test => None,
    }
}

// ── I/O primitives ───────────────────────────────────────────────────────────

fn read_src(src: &str) -> anyhow::Result<Vec<u8>> {
    if src == STDIN_MARK {
        displaylevel!(4, "Using stdin for input\n");
        let mut buf = Vec::new();
        io::stdin().lock().read_to_end(&mut buf).context("reading stdin")?;
        return Ok(buf);
    }
    if is_directory(Path::new(src)) {
        bail!("{src}: is a directory");
    }
    fs::read(src).with_context(|| format!("{src}: cannot read"))
}

fn write_dst(dst: &str, data: &[u8], opts: &FileOptions) -> anyhow::Result<()> {
    if dst == STDOUT_MARK {
        let mut out = io::stdout().lock();
        out.write_all(data).context("writing stdout")?;
        out.flush().context("flushing stdout")?;
        return Ok(());
    }
    let mut open = OpenOptions::new();
    open.write(true);
    if opts.overwrite {
        open.create(true).truncate(true);
    } else {
        open.create_new(true);
    }
    let mut file = open.open(dst).map_err(|e| match e.kind() {
        io::ErrorKind::AlreadyExists => anyhow!("{dst} already exists; use -f to overwrite"),
        _ => anyhow::Error::new(e).context(format!("{dst}: cannot create")),
    })?;
    file.write_all(data).with_context(|| format!("{dst}: write failed"))?;
    Ok(())
}

fn finish(src: &str, dst: Option<&str>, opts: &FileOptions) -> anyhow::Result<()> {
    // Metadata and removal only apply to regular files (not stdin, pipes or devices).
    if src == STDIN_MARK || !is_reg_file(Path::new(src)) {
        return Ok(());
    }
    if let Some(dst) = dst.filter(|d| *d != STDOUT_MARK) {
        if let Err(e) = copy_mtime(Path::new(src), Path::new(dst)) {
            displaylevel!(2, "warning: {}: cannot copy modification time: {}\n", dst, e);
        }
    }
    if opts.remove_src {
        fs::remove_file(src).with_context(|| format!("{src}: cannot remove"))?;
    }
    Ok(())
}

fn transform(
    op: FileOp,
    compressor: &Compressor,
    src: &str,
    data: &[u8],
) -> anyhow::Result<Vec<u8>> {
    let out = match op {
        FileOp::Compress => compressor.try_compress(data),
        FileOp::Decompress | FileOp::Test => compressor.try_decompress(data),
    };
    out.with_context(|| format!("{src}: {} failed", op_verb(op)))
}

fn op_verb(op: FileOp) -> &'static str {
    match op {
        FileOp::Compress => "compression",
        FileOp::Decompress => "decompression",
        FileOp::Test => "integrity test",
    }
}

// ── Single file ──────────────────────────────────────────────────────────────

/// Run `op` on one file.
///
/// `dst` is ignored in test mode. Nothing is written when the codec fails,
/// and the source is only removed after the destination is complete.
pub fn process_file(
    op: FileOp,
    compressor: &Compressor,
    src: &str,
    dst: Option<&str>,
    opts: &FileOptions,
) -> anyhow::Result<FileStats> {
    let data = read_src(src)?;
    let out = transform(op, compressor, src, &data)?;
    let stats = FileStats {
        bytes_in: data.len() as u64,
        bytes_out: out.len() as u64,
    };
    if op == FileOp::Test {
        return Ok(stats);
    }
    let dst = dst.ok_or_else(|| anyhow!("{src}: no destination"))?;
    if dst != STDOUT_MARK && dst == src {
        bail!("{src}: source and destination are the same file");
    }
    write_dst(dst, &out, opts)?;
    finish(src, Some(dst), opts)?;
    Ok(stats)
}

/// Compress `src` into `dst`.
pub fn compress_file(
    compressor: &Compressor,
    src: &str,
    dst: &str,
    opts: &FileOptions,
) -> anyhow::Result<FileStats> {
    process_file(FileOp::Compress, compressor, src, Some(dst), opts)
}

/// Decompress `src` into `dst`.
pub fn decompress_file(
    compressor: &Compressor,
    src: &str,
    dst: &str,
    opts: &FileOptions,
) -> anyhow::Result<FileStats> {
    process_file(FileOp::Decompress, compressor, src, Some(dst), opts)
}

/// Check that `src` decodes, without writing anything.
pub fn test_file(compressor: &Compressor, src: &str) -> anyhow::Result<FileStats> {
    process_file(FileOp::Test, compressor, src, None, &FileOptions::default())
}

// ── Multiple files ───────────────────────────────────────────────────────────

/// Outcome of one entry in [`process_files`].
#[derive(Debug)]
pub struct FileReport {
    pub src: PathBuf,
    pub result: anyhow::Result<FileStats>,
}

fn process_entry(
    op: FileOp,
    compressor: &Compressor,
    src: &Path,
    opts: &FileOptions,
) -> anyhow::Result<FileStats> {
    let name = src.to_string_lossy();
    let dst = match op {
        FileOp::Test => None,
        _ => match output_name(op, &name) {
            Some(dst) => Some(dst),
            None => bail!("{name}: unknown suffix -- ignored"),
        },
    };
    process_file(op, compressor, &name, dst.as_deref(), opts)
}

/// Run `op` on every file in `srcs`, naming outputs with [`output_name`].
///
/// Files are processed independently on `nb_workers` threads (0 = one per
/// core): each worker reads, transforms and writes one file before taking
/// the next, so only the files in flight are held in memory. Reports come
/// back in input order. One failing file does not stop the others.
pub fn process_files(
    op: FileOp,
    compressor: &Compressor,
    srcs: &[PathBuf],
    opts: &FileOptions,
    nb_workers: usize,
) -> Vec<FileReport> {
    batch::map_ordered(srcs, nb_workers, |src| FileReport {
        src: src.clone(),
        result: process_entry(op, compressor, src, opts),
    })
}
