// config.rs: Compile-time configuration constants.
//
// Values that tune the codec or the benchmark harness but are not part of the
// block format itself.  Runtime overrides for the harness live in
// `bench::BenchConfig` and the `lz4-bench` command line.

// Log₂ of the wide hash table's bucket count.
// The narrow table uses HASH_LOG + 1 bits, keeping both tables at 16 KiB on
// 32-bit targets and the narrow one at 16 KiB everywhere.
pub const HASH_LOG: u32 = 12;

// Largest piece of a file handed to the codec in one call by the harness.
// Files larger than this are benchmarked as several independent blocks.
pub const CHUNK_SIZE_DEFAULT: usize = 8 << 20;

// Number of times the harness walks the whole corpus.
// Can be overridden with the --passes command-line flag.
pub const PASSES_DEFAULT: u32 = 10;

// Default verbosity: 2 prints results, 3 adds progress, 4 adds per-file detail.
// Can be raised with -v and lowered with -q.
pub const DISPLAY_LEVEL_DEFAULT: u32 = 2;
