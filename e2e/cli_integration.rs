// e2e/cli_integration.rs — CLI integration tests
//
// Tests the `lzfsekit` binary as a black box using std::process::Command.
// Covers compress/decompress dispatch, automatic naming, stdin/stdout
// piping, exit codes, test mode, multiple and recursive inputs, and the
// --strategy switch.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tempfile::TempDir;

/// Locate the `lzfsekit` binary produced by Cargo.
fn bin() -> PathBuf {
    if let Some(p) = option_env!("CARGO_BIN_EXE_lzfsekit") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop();
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("lzfsekit");
    p
}

/// A command with environment overrides cleared.
fn cmd() -> Command {
    let mut c = Command::new(bin());
    c.env_remove("LZFSEKIT_PATH").env_remove("LZFSEKIT_NBWORKERS");
    c
}

/// Create a TempDir containing a text file with ~8 KB of content.
fn make_temp_input() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let input_path = dir.path().join("input.txt");
    let content = "Hello, LZFSE! ".repeat(600);
    fs::write(&input_path, content).unwrap();
    (dir, input_path)
}

fn s(p: &std::path::Path) -> &str {
    p.to_str().unwrap()
}

// ── 1. Explicit compress / decompress roundtrip ──────────────────────────────

#[test]
fn test_cli_compress_decompress_roundtrip() {
    let (dir, input) = make_temp_input();
    let original = fs::read(&input).unwrap();
    let compressed = dir.path().join("output.lzfse");
    let roundtrip = dir.path().join("roundtrip.txt");

    let status = cmd().args(["-z", s(&input), s(&compressed)]).status().unwrap();
    assert!(status.success(), "compress step should exit 0");
    assert!(fs::metadata(&compressed).unwrap().len() < original.len() as u64);

    let status = cmd().args(["-d", s(&compressed), s(&roundtrip)]).status().unwrap();
    assert!(status.success(), "decompress step should exit 0");
    assert_eq!(fs::read(&roundtrip).unwrap(), original);
}

// ── 2. Automatic mode and naming ─────────────────────────────────────────────

#[test]
fn test_cli_auto_mode_and_names() {
    let (dir, input) = make_temp_input();
    let original = fs::read(&input).unwrap();
    let packed = dir.path().join("input.txt.lzfse");

    assert!(cmd().arg(s(&input)).status().unwrap().success());
    assert!(packed.exists(), "compress should append .lzfse");

    fs::remove_file(&input).unwrap();
    assert!(cmd().arg(s(&packed)).status().unwrap().success());
    assert_eq!(fs::read(&input).unwrap(), original, "decompress should strip .lzfse");
}

// ── 3. Overwrite protection and --rm ─────────────────────────────────────────

#[test]
fn test_cli_force_and_rm() {
    let (dir, input) = make_temp_input();
    let packed = dir.path().join("input.txt.lzfse");
    fs::write(&packed, b"keep me").unwrap();

    let status = cmd().arg(s(&input)).status().unwrap();
    assert!(!status.success(), "existing output without -f must fail");
    assert_eq!(fs::read(&packed).unwrap(), b"keep me");

    let status = cmd().args(["-f", "--rm", s(&input)]).status().unwrap();
    assert!(status.success());
    assert!(!input.exists(), "--rm should delete the source");
    assert_ne!(fs::read(&packed).unwrap(), b"keep me");
}

// ── 4. stdin → stdout pipeline ───────────────────────────────────────────────

fn pipe(args: &[&str], input: &[u8]) -> (bool, Vec<u8>) {
    let mut child = cmd()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(input).unwrap();
    let out = child.wait_with_output().unwrap();
    (out.status.success(), out.stdout)
}

#[test]
fn test_cli_stdin_stdout_roundtrip() {
    let data = b"piped through standard streams. ".repeat(300);
    let (ok, packed) = pipe(&["-z"], &data);
    assert!(ok);
    assert!(packed.len() < data.len());

    let (ok, unpacked) = pipe(&["-d", "-", "-"], &packed);
    assert!(ok);
    assert_eq!(unpacked, data);
}

#[test]
fn test_cli_stdout_flag() {
    let (_dir, input) = make_temp_input();
    let original = fs::read(&input).unwrap();
    let out = cmd().args(["-c", s(&input)]).output().unwrap();
    assert!(out.status.success());
    let (ok, unpacked) = pipe(&["-d"], &out.stdout);
    assert!(ok);
    assert_eq!(unpacked, original);
}

// ── 5. Test mode ─────────────────────────────────────────────────────────────

#[test]
fn test_cli_test_mode() {
    let (dir, input) = make_temp_input();
    let packed = dir.path().join("input.txt.lzfse");
    assert!(cmd().arg(s(&input)).status().unwrap().success());

    assert!(cmd().args(["-t", s(&packed)]).status().unwrap().success());

    let bogus = dir.path().join("bogus.lzfse");
    fs::write(&bogus, b"definitely not lzfse").unwrap();
    let status = cmd().args(["-t", s(&bogus)]).status().unwrap();
    assert!(!status.success(), "-t on garbage must fail");
}

// ── 6. Strategy switch ───────────────────────────────────────────────────────

/// Text that compresses to about half: probing decodes it on the first try.
fn low_entropy_text(len: usize) -> Vec<u8> {
    const ALPHABET: &[u8; 16] = b"etaoinshrdlucmfw";
    let mut state = 0x1234_5678u32;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            ALPHABET[(state >> 28) as usize]
        })
        .collect()
}

#[test]
fn test_cli_probing_strategy() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.txt");
    let original = low_entropy_text(20_000);
    fs::write(&input, &original).unwrap();
    let packed = dir.path().join("p.lzfse");
    let back = dir.path().join("p.txt");

    let status = cmd().args(["--strategy", "probing", s(&input), s(&packed)]).status().unwrap();
    assert!(status.success());
    let status = cmd()
        .env("LZFSEKIT_PATH", "probing")
        .args(["-d", s(&packed), s(&back)])
        .status()
        .unwrap();
    assert!(status.success());
    assert_eq!(fs::read(&back).unwrap(), original);
}

#[test]
fn test_cli_probing_rejects_incompressible() {
    let dir = TempDir::new().unwrap();
    let tiny = dir.path().join("tiny.bin");
    fs::write(&tiny, b"xy").unwrap();
    let status = cmd().args(["--strategy", "probing", s(&tiny)]).status().unwrap();
    assert!(!status.success());
    assert!(!dir.path().join("tiny.bin.lzfse").exists());
}

// ── 7. Multiple and recursive inputs ─────────────────────────────────────────

#[test]
fn test_cli_multiple_inputs() {
    let dir = TempDir::new().unwrap();
    let names = ["one.txt", "two.txt", "three.txt"];
    for (i, n) in names.iter().enumerate() {
        fs::write(dir.path().join(n), format!("file number {i}. ").repeat(500)).unwrap();
    }
    let mut args = vec!["-m".to_owned(), "-T2".to_owned()];
    args.extend(names.iter().map(|n| s(&dir.path().join(n)).to_owned()));
    assert!(cmd().args(&args).status().unwrap().success());
    for n in names {
        assert!(dir.path().join(format!("{n}.lzfse")).exists(), "{n}.lzfse missing");
    }
}

#[test]
fn test_cli_recursive_decompress() {
    let dir = TempDir::new().unwrap();
    let sub = dir.path().join("nested");
    fs::create_dir(&sub).unwrap();
    let file = sub.join("deep.txt");
    let content = "deep content ".repeat(400);
    fs::write(&file, &content).unwrap();

    assert!(cmd().args(["-r", "-z", s(dir.path())]).status().unwrap().success());
    assert!(sub.join("deep.txt.lzfse").exists());

    fs::remove_file(&file).unwrap();
    assert!(cmd().args(["-r", "-d", s(dir.path())]).status().unwrap().success());
    assert_eq!(fs::read_to_string(&file).unwrap(), content);
}

// ── 8. Usage errors and metadata ─────────────────────────────────────────────

#[test]
fn test_cli_usage_errors() {
    assert!(!cmd().args(["a", "b", "c"]).status().unwrap().success());
    assert!(!cmd().args(["-z", "-d", "x"]).status().unwrap().success());
    assert!(!cmd().args(["--strategy", "bogus", "x"]).status().unwrap().success());
}

#[test]
fn test_cli_unknown_suffix_on_decompress() {
    let (dir, input) = make_temp_input();
    let status = cmd().args(["-d", s(&input)]).current_dir(dir.path()).status().unwrap();
    assert!(!status.success(), "-d without .lzfse and no output name must fail");
}

#[test]
fn test_cli_version() {
    let output = cmd().arg("--version").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")), "got: {stdout}");
}
