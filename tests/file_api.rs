// Integration tests for whole-file operations.
//
// Coverage:
//   - compress_file / decompress_file round-trip through real files
//   - existing destinations are refused unless overwrite is set
//   - remove_src deletes the source only after success
//   - modification time carries over to the output
//   - test_file accepts valid streams and rejects others
//   - process_files names outputs automatically and isolates failures
//   - process_files handles many files in order and keeps codec error causes

mod common;

use std::fs;
use std::path::PathBuf;

use filetime::FileTime;
use lzfsekit::file::{
    compress_file, decompress_file, process_files, test_file, FileOp, FileOptions,
};
use lzfsekit::{Compressor, Strategy};
use tempfile::TempDir;

use common::{low_entropy_text, prose};

fn setup(content: &[u8]) -> (TempDir, String) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("input.txt");
    fs::write(&path, content).unwrap();
    let name = path.to_str().unwrap().to_owned();
    (dir, name)
}

fn sibling(dir: &TempDir, name: &str) -> String {
    dir.path().join(name).to_str().unwrap().to_owned()
}

// ─────────────────────────────────────────────────────────────────────────────
// Single file
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn roundtrip_through_files() {
    let content = prose(40_000);
    let (dir, input) = setup(&content);
    let packed = sibling(&dir, "input.txt.lzfse");
    let restored = sibling(&dir, "restored.txt");
    let c = Compressor::new(Strategy::Direct);

    let stats = compress_file(&c, &input, &packed, &FileOptions::default()).unwrap();
    assert_eq!(stats.bytes_in, content.len() as u64);
    assert!(stats.bytes_out < stats.bytes_in);

    let stats = decompress_file(&c, &packed, &restored, &FileOptions::default()).unwrap();
    assert_eq!(stats.bytes_out, content.len() as u64);
    assert_eq!(fs::read(&restored).unwrap(), content);
}

#[test]
fn refuses_to_overwrite_without_force() {
    let (dir, input) = setup(&prose(1_000));
    let out = sibling(&dir, "out.lzfse");
    fs::write(&out, b"precious").unwrap();
    let c = Compressor::default();

    let err = compress_file(&c, &input, &out, &FileOptions::default()).unwrap_err();
    assert!(err.to_string().contains("already exists"), "{err:#}");
    assert_eq!(fs::read(&out).unwrap(), b"precious");

    let force = FileOptions { overwrite: true, ..FileOptions::default() };
    compress_file(&c, &input, &out, &force).unwrap();
    assert_ne!(fs::read(&out).unwrap(), b"precious");
}

#[test]
fn remove_src_after_success_only() {
    let (dir, input) = setup(&prose(2_000));
    let out = sibling(&dir, "out.lzfse");
    let opts = FileOptions { remove_src: true, ..FileOptions::default() };
    let c = Compressor::default();

    compress_file(&c, &input, &out, &opts).unwrap();
    assert!(!PathBuf::from(&input).exists());

    // A failed decode must leave the source in place.
    let junk = sibling(&dir, "junk.lzfse");
    fs::write(&junk, b"not a stream").unwrap();
    assert!(decompress_file(&c, &junk, &sibling(&dir, "junk"), &opts).is_err());
    assert!(PathBuf::from(&junk).exists());
    assert!(!dir.path().join("junk").exists());
}

#[test]
fn mtime_is_preserved() {
    let (dir, input) = setup(&prose(2_000));
    let stamp = FileTime::from_unix_time(1_234_567_890, 0);
    filetime::set_file_mtime(&input, stamp).unwrap();
    let out = sibling(&dir, "out.lzfse");

    compress_file(&Compressor::default(), &input, &out, &FileOptions::default()).unwrap();
    let meta = fs::metadata(&out).unwrap();
    assert_eq!(FileTime::from_last_modification_time(&meta), stamp);
}

#[test]
fn test_file_checks_integrity() {
    let (dir, input) = setup(&prose(5_000));
    let out = sibling(&dir, "out.lzfse");
    let c = Compressor::default();
    compress_file(&c, &input, &out, &FileOptions::default()).unwrap();

    let stats = test_file(&c, &out).unwrap();
    assert_eq!(stats.bytes_out, 5_000);
    assert!(test_file(&c, &input).is_err());
}

#[test]
fn directory_input_is_rejected() {
    let dir = TempDir::new().unwrap();
    let err = test_file(&Compressor::default(), dir.path().to_str().unwrap()).unwrap_err();
    assert!(err.to_string().contains("is a directory"), "{err:#}");
}

// ─────────────────────────────────────────────────────────────────────────────
// Multiple files
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn process_files_names_outputs_and_isolates_failures() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    let missing = dir.path().join("missing.txt");
    fs::write(&a, low_entropy_text(5_000, 1)).unwrap();
    fs::write(&b, low_entropy_text(9_000, 2)).unwrap();
    let c = Compressor::new(Strategy::Probing);
    let opts = FileOptions::default();

    let srcs = [a.clone(), missing.clone(), b.clone()];
    let reports = process_files(FileOp::Compress, &c, &srcs, &opts, 2);
    assert_eq!(reports.len(), 3);
    assert!(reports[0].result.is_ok());
    assert!(reports[1].result.is_err());
    assert_eq!(reports[1].src, missing);
    assert!(reports[2].result.is_ok());

    let packed = [dir.path().join("a.txt.lzfse"), dir.path().join("b.txt.lzfse")];
    assert!(packed.iter().all(|p| p.exists()));

    fs::remove_file(&a).unwrap();
    fs::remove_file(&b).unwrap();
    let reports = process_files(FileOp::Decompress, &c, &packed, &opts, 0);
    assert!(reports.iter().all(|r| r.result.is_ok()));
    assert_eq!(fs::read(&a).unwrap(), low_entropy_text(5_000, 1));
    assert_eq!(fs::read(&b).unwrap(), low_entropy_text(9_000, 2));
}

#[test]
fn process_files_rejects_unknown_suffix_on_decompress() {
    let dir = TempDir::new().unwrap();
    let plain = dir.path().join("plain.bin");
    fs::write(&plain, b"data").unwrap();

    let reports = process_files(
        FileOp::Decompress,
        &Compressor::default(),
        &[plain],
        &FileOptions::default(),
        1,
    );
    let err = reports[0].result.as_ref().unwrap_err();
    assert!(err.to_string().contains("unknown suffix"), "{err:#}");
}

#[test]
fn process_files_many_files_in_order() {
    let dir = TempDir::new().unwrap();
    let srcs: Vec<PathBuf> = (0..64)
        .map(|i| {
            let p = dir.path().join(format!("f{i:02}.txt"));
            fs::write(&p, low_entropy_text(1_000 + i * 37, i as u32)).unwrap();
            p
        })
        .collect();
    let c = Compressor::new(Strategy::Direct);
    let opts = FileOptions { remove_src: true, ..FileOptions::default() };

    let reports = process_files(FileOp::Compress, &c, &srcs, &opts, 4);
    assert_eq!(reports.len(), srcs.len());
    for (i, (r, src)) in reports.iter().zip(&srcs).enumerate() {
        assert_eq!(&r.src, src);
        let stats = r.result.as_ref().unwrap();
        assert_eq!(stats.bytes_in, (1_000 + i * 37) as u64);
        assert!(!src.exists());
    }

    let packed: Vec<PathBuf> = srcs.iter().map(|p| p.with_extension("txt.lzfse")).collect();
    let reports = process_files(FileOp::Decompress, &c, &packed, &opts, 0);
    assert!(reports.iter().all(|r| r.result.is_ok()));
    for (i, src) in srcs.iter().enumerate() {
        assert_eq!(fs::read(src).unwrap(), low_entropy_text(1_000 + i * 37, i as u32));
    }
}

#[test]
fn process_files_reports_codec_cause() {
    let dir = TempDir::new().unwrap();
    let junk = dir.path().join("junk.lzfse");
    fs::write(&junk, b"not a stream at all").unwrap();

    let reports = process_files(
        FileOp::Decompress,
        &Compressor::new(Strategy::Direct),
        &[junk.clone()],
        &FileOptions::default(),
        1,
    );
    let err = reports[0].result.as_ref().unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("decompression failed"), "{msg}");
    assert!(msg.contains("not a valid LZFSE stream"), "{msg}");
    assert!(junk.exists());
    assert!(!dir.path().join("junk").exists());
}
