//! LZ4 block codec.
//!
//! - [`types`]: format constants and copy primitives
//! - [`hash_table`]: match-finder tables and width selection
//! - [`compress`]: the encoder
//! - [`decompress`]: the decoders

pub mod types;
pub mod hash_table;
pub mod compress;
pub mod decompress;

pub use compress::{compress, compress_into, compress_with_width, max_compressed_length, Lz4Error};
pub use decompress::{
    decompress, decompress_into, decompress_known_size, decompressed_len, DecompressError,
};
pub use hash_table::{TableWidth, NARROW_TABLE_LIMIT};
