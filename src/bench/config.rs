//! Benchmark configuration: size constants and runtime parameters for the
//! `bench` subsystem.
//!
//! [`BenchConfig`] holds every tuneable setting of a harness run.  Its
//! builder-style setters let callers construct a configuration incrementally
//! before passing it to [`super::bench_files`].  Verbosity is not part of it:
//! harness progress goes through `displaylevel!` like the rest of the crate.

use crate::block::TableWidth;
use crate::config::{CHUNK_SIZE_DEFAULT, PASSES_DEFAULT};

// ── Size multiplier constants ───────────────────────────────────────────────

pub const KB: usize = 1 << 10;
pub const MB: usize = 1 << 20;

/// Size of the all-zero block compressed and decompressed before timing starts.
pub const SANITY_CHECK_LEN: usize = 50;

// ── BenchConfig struct ────────────────────────────────────────────────────────

/// Runtime parameters controlling one benchmark session.
///
/// Construct via [`Default`] and then adjust with the builder-style setters,
/// or set fields directly.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Number of passes over the whole corpus (default: [`PASSES_DEFAULT`]).
    pub passes: u32,

    /// Largest block handed to the codec in one call; longer files are split
    /// (default: [`CHUNK_SIZE_DEFAULT`]).
    pub chunk_size: usize,

    /// Hash-table width to force, or `None` to select it per chunk from the
    /// chunk length.
    pub width: Option<TableWidth>,

    /// Walk subdirectories of directory inputs.  Default: `false`.
    pub recursive: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            passes: PASSES_DEFAULT,
            chunk_size: CHUNK_SIZE_DEFAULT,
            width: None,
            recursive: false,
        }
    }
}

impl BenchConfig {
    // ── Setters ───────────────────────────────────────────────────────────────

    /// Set the number of passes over the corpus.  Zero passes times nothing
    /// and reports zero throughput.
    pub fn set_passes(&mut self, passes: u32) -> &mut Self {
        self.passes = passes;
        self
    }

    /// Set the largest chunk handed to the codec.  Values below 1 are raised
    /// to 1.
    pub fn set_chunk_size(&mut self, chunk_size: usize) -> &mut Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// Force a hash-table width, or `None` for automatic selection.
    pub fn set_width(&mut self, width: Option<TableWidth>) -> &mut Self {
        self.width = width;
        self
    }

    /// Set whether directory inputs are walked recursively.
    pub fn set_recursive(&mut self, recursive: bool) -> &mut Self {
        self.recursive = recursive;
        self
    }

    /// Label for the width setting, as printed in reports.
    pub fn width_label(&self) -> String {
        match self.width {
            Some(width) => width.to_string(),
            None => "auto".to_string(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
