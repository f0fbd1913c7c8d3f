//! File status helpers.

use std::fs;
use std::io;
use std::path::Path;

use filetime::FileTime;

/// `true` if `path` exists and is a regular file (symlinks are followed).
pub fn is_reg_file(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}

/// `true` if `path` exists and is a directory.
pub fn is_directory(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
}

/// Give `dst` the modification time of `src`. Access time is set to now.
pub fn copy_mtime(src: &Path, dst: &Path) -> io::Result<()> {
    let meta = fs::metadata(src)?;
    let mtime = FileTime::from_last_modification_time(&meta);
    filetime::set_file_times(dst, FileTime::now(), mtime)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn regular_file_and_directory() {
        let dir = TempDir::new().unwrap();
        let f = dir.path().join("f");
        fs::write(&f, b"x").unwrap();
        assert!(is_reg_file(&f));
        assert!(!is_directory(&f));
        assert!(is_directory(dir.path()));
        assert!(!is_reg_file(dir.path()));
        assert!(!is_reg_file(&dir.path().join("missing")));
    }

    #[test]
    fn mtime_is_copied() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        fs::write(&a, b"a").unwrap();
        fs::write(&b, b"b").unwrap();
        let old = FileTime::from_unix_time(1_000_000_000, 0);
        filetime::set_file_mtime(&a, old).unwrap();

        copy_mtime(&a, &b).unwrap();
        let got = FileTime::from_last_modification_time(&fs::metadata(&b).unwrap());
        assert_eq!(got, old);
    }
}
