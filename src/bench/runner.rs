//! Benchmark runner: chunk loading, the warm-up check, and the timed passes.
//!
//! 1. **Chunk loading** ([`load_chunks`]): reads every file into memory once,
//!    split into pieces of at most `chunk_size` bytes, so file I/O stays out of
//!    the timed region.
//! 2. **Sanity check** ([`sanity_check`]): one tiny compress/decompress round
//!    trip before any timing starts.
//! 3. **Timed passes** ([`bench_chunks`]): compresses and decompresses every
//!    chunk `passes` times, verifying each decoded chunk byte for byte.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use super::config::{BenchConfig, MB, SANITY_CHECK_LEN};
use crate::block::{
    compress, compress_into, compress_with_width, decompress, decompress_known_size,
    max_compressed_length, NARROW_TABLE_LIMIT,
};
use crate::timefn::{timed, DurationNs};

// ── Report ────────────────────────────────────────────────────────────────────

/// Totals accumulated over every pass of a benchmark run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BenchReport {
    /// Chunks benchmarked per pass.
    pub chunks: usize,
    /// Bytes fed to the compressor, summed over all passes.
    pub uncompressed_total: u64,
    /// Bytes produced by the compressor, summed over all passes.
    pub compressed_total: u64,
    /// Time spent inside compression calls.
    pub compress_ns: DurationNs,
    /// Time spent inside decompression calls.
    pub decompress_ns: DurationNs,
}

impl BenchReport {
    /// Compressed size over uncompressed size; 0 for an empty corpus.
    pub fn ratio(&self) -> f64 {
        if self.uncompressed_total == 0 {
            return 0.0;
        }
        self.compressed_total as f64 / self.uncompressed_total as f64
    }

    /// Compression throughput in MiB of input per second.
    pub fn compress_mb_per_sec(&self) -> f64 {
        throughput(self.uncompressed_total, self.compress_ns)
    }

    /// Decompression throughput in MiB of output per second.
    pub fn decompress_mb_per_sec(&self) -> f64 {
        throughput(self.uncompressed_total, self.decompress_ns)
    }
}

fn throughput(bytes: u64, ns: DurationNs) -> f64 {
    if bytes == 0 || ns == 0 {
        return 0.0;
    }
    (bytes as f64 / MB as f64) / (ns as f64 / 1_000_000_000.0)
}

// ── Chunk loading ─────────────────────────────────────────────────────────────

/// Read `paths` into memory as chunks of at most `config.chunk_size` bytes.
///
/// Each file contributes `ceil(len / chunk_size)` chunks, in order; an empty
/// file contributes none.
pub fn load_chunks(paths: &[PathBuf], config: &BenchConfig) -> io::Result<Vec<Vec<u8>>> {
    let chunk_size = config.chunk_size.max(1);
    let mut chunks = Vec::new();

    for path in paths {
        crate::displaylevel!(3, "Loading {}...       \r", path.display());
        let mut f = fs::File::open(path).map_err(|e| {
            io::Error::new(e.kind(), format!("impossible to open file {}: {}", path.display(), e))
        })?;

        loop {
            let mut chunk = Vec::with_capacity(chunk_size);
            let n = (&mut f)
                .take(chunk_size as u64)
                .read_to_end(&mut chunk)
                .map_err(|e| io::Error::new(e.kind(), format!("could not read {}: {}", path.display(), e)))?;
            if n == 0 {
                break;
            }
            chunks.push(chunk);
            if n < chunk_size {
                break;
            }
        }
    }
    Ok(chunks)
}

// ── Sanity check ──────────────────────────────────────────────────────────────

/// Round-trip a small all-zero block through the codec.
///
/// Catches a broken build before the corpus is loaded into the timed loop.
pub fn sanity_check() -> io::Result<()> {
    let zeros = [0u8; SANITY_CHECK_LEN];
    let compressed = compress(&zeros);
    let restored = decompress(&compressed).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    if restored[..] != zeros[..] {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "sanity check: all-zero block did not round-trip",
        ));
    }
    Ok(())
}

// ── Timed passes ──────────────────────────────────────────────────────────────

/// Index of the first byte at which `a` and `b` differ, if any.
fn first_difference(a: &[u8], b: &[u8]) -> Option<usize> {
    a.iter()
        .zip(b.iter())
        .position(|(x, y)| x != y)
        .or_else(|| (a.len() != b.len()).then(|| a.len().min(b.len())))
}

/// Compress and decompress every chunk `config.passes` times.
///
/// Only the codec calls are timed; buffer allocation and verification are
/// not.  A chunk that does not decode to its original bytes aborts the run.
pub fn bench_chunks(chunks: &[Vec<u8>], config: &BenchConfig) -> io::Result<BenchReport> {
    if let Some(width) = config.width {
        if let Some(chunk) = chunks.iter().find(|c| !width.supports_len(c.len())) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "{} table needs chunks shorter than {} bytes, got {}",
                    width,
                    NARROW_TABLE_LIMIT,
                    chunk.len()
                ),
            ));
        }
    }

    let mut report = BenchReport {
        chunks: chunks.len(),
        ..BenchReport::default()
    };

    for pass in 0..config.passes {
        crate::displaylevel!(3, "pass {}/{}\r", pass + 1, config.passes);
        for chunk in chunks {
            report.uncompressed_total += chunk.len() as u64;

            let mut compressed = vec![0u8; max_compressed_length(chunk.len())];
            let compressed_len = timed(&mut report.compress_ns, || match config.width {
                Some(width) => compress_with_width(chunk, &mut compressed, width),
                None => compress_into(chunk, &mut compressed),
            })
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            report.compressed_total += compressed_len as u64;

            let mut restored = vec![0u8; chunk.len()];
            timed(&mut report.decompress_ns, || {
                decompress_known_size(&compressed[..compressed_len], &mut restored, chunk.len())
            })
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

            if let Some(i) = first_difference(chunk, &restored) {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("original and decompressed bytes differ starting at byte {}", i),
                ));
            }
        }
    }
    crate::displaylevel!(3, "\n");

    Ok(report)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
