// lz4-block: LZ4 block-format codec with a directory benchmark harness

pub mod timefn;
pub mod config;
pub mod display;
pub mod util;
pub mod bench;
pub mod block;

// ── Version constants ─────────────────────────────────────────────────────────
pub const VERSION_STRING: &str = env!("CARGO_PKG_VERSION");

/// Returns the crate version string.
pub fn version_string() -> &'static str {
    VERSION_STRING
}

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use block::{
    compress, compress_into, compress_with_width, decompress, decompress_into,
    decompress_known_size, decompressed_len, max_compressed_length, DecompressError, Lz4Error,
    TableWidth, NARROW_TABLE_LIMIT,
};
