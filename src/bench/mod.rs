//! Directory benchmark harness.
//!
//! [`bench_files`] is the entry point: it expands the inputs into a file list,
//! loads the files as chunks, round-trips a warm-up block and then times the
//! codec over every chunk for the configured number of passes.  Work is split
//! across:
//!
//! - [`runner::load_chunks`]: reads files into memory in `chunk_size` pieces.
//! - [`runner::bench_chunks`]: the timed compress / decompress / verify loop.
//!
//! [`config::BenchConfig`] controls pass count, chunk size, table width and
//! directory recursion.

pub mod config;
pub mod runner;

// Re-export public types so callers can use `bench::BenchConfig` directly.
pub use config::BenchConfig;
pub use runner::BenchReport;

use std::io;
use std::path::Path;

use crate::util::create_file_list;
use runner::{bench_chunks, load_chunks, sanity_check};

/// Benchmark every regular file reachable from `inputs`.
///
/// Fails if no file could be found, if a file cannot be read, or if any chunk
/// does not survive the round trip.
pub fn bench_files(inputs: &[&Path], config: &BenchConfig) -> io::Result<BenchReport> {
    let files = create_file_list(inputs, config.recursive)?;
    if files.is_empty() {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "no files to bench"));
    }
    for file in &files {
        crate::displaylevel!(4, "  {}\n", file.display());
    }

    let chunks = load_chunks(&files, config)?;
    crate::displaylevel!(
        3,
        "Loaded {} files as {} chunks ({} bytes), table width: {}\n",
        files.len(),
        chunks.len(),
        chunks.iter().map(|c| c.len()).sum::<usize>(),
        config.width_label()
    );

    sanity_check()?;
    bench_chunks(&chunks, config)
}

/// Format `report` as the three result lines printed by `lz4-bench`.
pub fn format_report(report: &BenchReport) -> String {
    format!(
        "Ratio = {:.4}\nCompression (MB / sec) = {:.2}\nDecompression (MB / sec) = {:.2}\n",
        report.ratio(),
        report.compress_mb_per_sec(),
        report.decompress_mb_per_sec()
    )
}
