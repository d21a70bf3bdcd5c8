//! E2E Test Suite 02: Streaming Block Decoder
//!
//! Exercises decompress_into(), which stops when the compressed input is
//! exhausted and treats the destination only as an upper bound, on a
//! sequence of independently compressed chunks (the layout the benchmark
//! harness produces for large files).

use lz4_block::{compress, decompress_into, decompressed_len, max_compressed_length, DecompressError};

fn chunked_corpus() -> Vec<Vec<u8>> {
    let text = b"Chunked streaming input with repeated phrases. ".repeat(2000);
    text.chunks(10_000).map(|c| c.to_vec()).collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 1: chunks decode back to back into one buffer
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_chunks_decode_into_shared_buffer() {
    let chunks = chunked_corpus();
    let blocks: Vec<Vec<u8>> = chunks.iter().map(|c| compress(c)).collect();

    let total: usize = chunks.iter().map(|c| c.len()).sum();
    let mut out = vec![0u8; total];
    let mut pos = 0;
    for block in &blocks {
        let n = decompress_into(block, &mut out[pos..]).unwrap();
        pos += n;
    }
    assert_eq!(pos, total);
    assert_eq!(out, chunks.concat());
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 2: destination larger than needed
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_oversized_destination_reports_exact_length() {
    for chunk in chunked_corpus().iter().take(3) {
        let block = compress(chunk);
        let mut dst = vec![0xEEu8; max_compressed_length(chunk.len()) * 2];
        let n = decompress_into(&block, &mut dst).unwrap();
        assert_eq!(n, chunk.len());
        assert_eq!(&dst[..n], &chunk[..]);
        assert_eq!(decompressed_len(&block).unwrap(), n);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 3: destination one byte short
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_short_destination_fails_with_negative_sentinel() {
    let chunk = &chunked_corpus()[0];
    let block = compress(chunk);
    let mut dst = vec![0u8; chunk.len() - 1];
    let err = decompress_into(&block, &mut dst).unwrap_err();
    assert!(matches!(err, DecompressError::OutputOverflow { .. }));
    assert!(err.sentinel() < 0);
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 4: literal-only final sequence
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_block_may_end_after_literals() {
    // Every encoder output ends with a literal-only sequence.
    let chunk = b"abcabcabcabcabcabcabcabcabcabcXYZ12";
    let block = compress(chunk);
    assert_eq!(block[block.len() - 6] & 0x0F, 0, "last token carries no match");
    let mut dst = vec![0u8; 64];
    let n = decompress_into(&block, &mut dst).unwrap();
    assert_eq!(&dst[..n], &chunk[..]);
}
