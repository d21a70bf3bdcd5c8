//! Binary entry point for `lz4-bench`.
//!
//! Times LZ4 block compression and decompression over every file in a
//! directory, ignoring file read time, and prints the compression ratio and
//! both throughputs.
//!
//! # Control flow
//!
//! 1. [`Cli`] is parsed by `clap`.
//! 2. [`bench_config`] folds the flags into a [`BenchConfig`] and sets the
//!    process display level.
//! 3. [`run`] benchmarks the directory and prints the report.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use lz4_block::bench::{bench_files, format_report, BenchConfig};
use lz4_block::config::{CHUNK_SIZE_DEFAULT, DISPLAY_LEVEL_DEFAULT, PASSES_DEFAULT};
use lz4_block::display::{display_level, set_display_level};
use lz4_block::TableWidth;

// ── Command line ──────────────────────────────────────────────────────────────

/// Hash-table width selection on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum WidthArg {
    /// Narrow table for chunks under 64 KB, wide table otherwise.
    Auto,
    /// Always the wide table.
    Wide,
    /// Always the narrow table (chunks must stay under 64 KB).
    Narrow,
}

impl WidthArg {
    fn to_width(self) -> Option<TableWidth> {
        match self {
            WidthArg::Auto => None,
            WidthArg::Wide => Some(TableWidth::Wide),
            WidthArg::Narrow => Some(TableWidth::Narrow),
        }
    }
}

/// LZ4 block codec performance test.
///
/// Times compressing and decompressing all the files in DIR, ignoring file
/// read time.
#[derive(Debug, Parser)]
#[command(name = "lz4-bench", version, about, long_about = None)]
struct Cli {
    /// Directory (or file) to benchmark
    dir: PathBuf,

    /// Passes over the whole corpus
    #[arg(long, default_value_t = PASSES_DEFAULT)]
    passes: u32,

    /// Largest block compressed in one call, in bytes
    #[arg(long, default_value_t = CHUNK_SIZE_DEFAULT)]
    chunk_size: usize,

    /// Hash-table width
    #[arg(long, value_enum, default_value_t = WidthArg::Auto)]
    width: WidthArg,

    /// Walk subdirectories
    #[arg(short, long)]
    recursive: bool,

    /// More output (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Less output (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    quiet: u8,
}

/// Fold the parsed flags into a harness configuration and set the process
/// display level, which gates everything the harness prints.
fn bench_config(cli: &Cli) -> BenchConfig {
    let level = (DISPLAY_LEVEL_DEFAULT + cli.verbose as u32).saturating_sub(cli.quiet as u32);
    set_display_level(level);

    let mut config = BenchConfig::default();
    config
        .set_passes(cli.passes)
        .set_chunk_size(cli.chunk_size)
        .set_width(cli.width.to_width())
        .set_recursive(cli.recursive);
    config
}

// ── Dispatch ──────────────────────────────────────────────────────────────────

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = bench_config(&cli);

    lz4_block::displaylevel!(
        3,
        "*** lz4-bench v{} {}-bit ***\n",
        lz4_block::version_string(),
        usize::BITS
    );
    lz4_block::displaylevel!(
        3,
        "passes: {}, chunk size: {} KB, table width: {}\n",
        config.passes,
        config.chunk_size >> 10,
        config.width_label()
    );

    let report = bench_files(&[cli.dir.as_path()], &config)
        .with_context(|| format!("benchmark of {} failed", cli.dir.display()))?;

    if display_level() >= 2 {
        lz4_block::displayout!("{}", format_report(&report));
    }
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            lz4_block::displaylevel!(1, "lz4-bench: {:#}\n", e);
            ExitCode::FAILURE
        }
    }
}
