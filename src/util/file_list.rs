//! Expansion of mixed file / directory arguments into a flat file list.
//!
//! Directories are walked with [`walkdir`] without following symlinks, so
//! cyclic links cannot loop and symlink entries are left out. Non-directory
//! arguments pass through untouched, including ones that do not exist; the
//! caller reports those when it tries to open them.

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::LZFSE_EXTENSION;

/// Which files a directory walk keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Select {
    /// Every regular file.
    All,
    /// Only files ending in `.lzfse`.
    Compressed,
    /// Only files not ending in `.lzfse`.
    Uncompressed,
}

impl Select {
    fn keeps(self, path: &Path) -> bool {
        let compressed = path
            .to_str()
            .is_some_and(|s| s.ends_with(LZFSE_EXTENSION));
        match self {
            Select::All => true,
            Select::Compressed => compressed,
            Select::Uncompressed => !compressed,
        }
    }
}

/// Expand `inputs` into regular files.
///
/// The `select` filter applies only to files discovered inside directories.
/// A directory entry that cannot be read aborts the walk with its
/// `io::Error`.
pub fn create_file_list(inputs: &[&Path], select: Select) -> io::Result<Vec<PathBuf>> {
    let mut result = Vec::new();
    for input in inputs {
        if !input.is_dir() {
            result.push(input.to_path_buf());
            continue;
        }
        for entry in WalkDir::new(input).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                e.io_error()
                    .map(|io| io::Error::new(io.kind(), io.to_string()))
                    .unwrap_or_else(|| io::Error::other(e.to_string()))
            })?;
            if entry.file_type().is_file() && select.keeps(entry.path()) {
                result.push(entry.into_path());
            }
        }
    }
    Ok(result)
}
