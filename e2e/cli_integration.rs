// e2e/cli_integration.rs: `lz4-bench` binary tests
//
// Runs the benchmark binary as a black box using std::process::Command.
// Covers argument parsing, the report format, exit codes, and the width and
// recursion flags.

use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Locate the `lz4-bench` binary produced by Cargo.
fn bench_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_lz4-bench"))
}

/// A TempDir holding a compressible text file and a binary file.
fn make_corpus() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("text.txt"), "Hello, LZ4 block benchmark!\n".repeat(400)).unwrap();
    let bin: Vec<u8> = (0..20_000u32).map(|i| (i.wrapping_mul(2_654_435_761) >> 24) as u8).collect();
    fs::write(dir.path().join("data.bin"), bin).unwrap();
    dir
}

// ── 1. Successful run ────────────────────────────────────────────────────────

#[test]
fn test_cli_reports_ratio_and_throughput() {
    let dir = make_corpus();
    let output = Command::new(bench_bin())
        .arg(dir.path())
        .args(["--passes", "2"])
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Ratio = "), "stdout: {}", stdout);
    assert!(stdout.contains("Compression (MB / sec) = "));
    assert!(stdout.contains("Decompression (MB / sec) = "));
}

#[test]
fn test_cli_quiet_prints_nothing() {
    let dir = make_corpus();
    let output = Command::new(bench_bin())
        .arg(dir.path())
        .args(["--passes", "1", "-q", "-q"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_cli_small_chunks_with_narrow_table() {
    let dir = make_corpus();
    let status = Command::new(bench_bin())
        .arg(dir.path())
        .args(["--passes", "1", "--chunk-size", "4096", "--width", "narrow"])
        .status()
        .unwrap();
    assert!(status.success());
}

#[test]
fn test_cli_recursive_finds_nested_files() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();
    fs::write(dir.path().join("nested/only.txt"), "nested ".repeat(100)).unwrap();

    // Without -r the top level holds no files.
    let status = Command::new(bench_bin()).arg(dir.path()).args(["--passes", "1"]).status().unwrap();
    assert!(!status.success());

    let status = Command::new(bench_bin())
        .arg(dir.path())
        .args(["--passes", "1", "-r"])
        .status()
        .unwrap();
    assert!(status.success());
}

// ── 2. Failures ──────────────────────────────────────────────────────────────

#[test]
fn test_cli_missing_directory_argument() {
    let status = Command::new(bench_bin()).status().unwrap();
    assert!(!status.success());
}

#[test]
fn test_cli_nonexistent_directory() {
    let dir = TempDir::new().unwrap();
    let output = Command::new(bench_bin())
        .arg(dir.path().join("does-not-exist"))
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("lz4-bench:"));
}

#[test]
fn test_cli_narrow_table_rejects_large_chunks() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("big.bin"), vec![7u8; 100_000]).unwrap();
    let status = Command::new(bench_bin())
        .arg(dir.path())
        .args(["--passes", "1", "--width", "narrow"])
        .status()
        .unwrap();
    assert!(!status.success());
}

#[test]
fn test_cli_help() {
    let output = Command::new(bench_bin()).arg("--help").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--passes"));
    assert!(stdout.contains("--width"));
}
