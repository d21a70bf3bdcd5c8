#![no_main]
use libfuzzer_sys::fuzz_target;

use lz4_block::{
    compress, compress_with_width, decompress, decompress_known_size, max_compressed_length,
    TableWidth,
};

fuzz_target!(|data: &[u8]| {
    let compressed = compress(data);
    assert!(compressed.len() <= max_compressed_length(data.len()));

    // Streaming decode sizes its own output.
    let recovered = decompress(&compressed).expect("valid block must decode");
    assert_eq!(recovered, data, "streaming round-trip mismatch");

    // Known-size decode consumes the whole block.
    let mut dst = vec![0u8; data.len()];
    let consumed = decompress_known_size(&compressed, &mut dst, data.len())
        .expect("valid block must decode at its known size");
    assert_eq!(consumed, compressed.len());
    assert_eq!(dst, data, "known-size round-trip mismatch");

    // The wide table must agree on the decoded bytes.
    let mut wide = vec![0u8; max_compressed_length(data.len())];
    let n = compress_with_width(data, &mut wide, TableWidth::Wide).unwrap();
    assert_eq!(decompress(&wide[..n]).unwrap(), data);
});
