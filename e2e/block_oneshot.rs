//! E2E Test Suite 01: Block One-Shot API
//!
//! Round-trips whole buffers through the public crate-root API:
//! - compress / compress_into / compress_with_width
//! - decompress / decompress_known_size
//! - max_compressed_length
//!
//! Inputs range from empty to several megabytes and cover all-zero,
//! pseudo-random and highly repetitive content, plus concurrent use from
//! independent threads.

extern crate lz4_block;

use lz4_block::{
    compress, compress_into, compress_with_width, decompress, decompress_known_size,
    max_compressed_length, TableWidth, NARROW_TABLE_LIMIT,
};
use rayon::prelude::*;

fn lcg_bytes(seed: u32, len: usize) -> Vec<u8> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (state >> 24) as u8
        })
        .collect()
}

/// Round-trip `input` through both decoders and check the size bound.
fn assert_round_trip(input: &[u8]) {
    let compressed = compress(input);
    assert!(
        compressed.len() <= max_compressed_length(input.len()),
        "compressed size {} exceeds bound {}",
        compressed.len(),
        max_compressed_length(input.len())
    );

    let restored = decompress(&compressed).expect("streaming decode should succeed");
    assert_eq!(restored.len(), input.len());
    assert!(restored == input, "streaming round-trip mismatch for {} bytes", input.len());

    let mut dst = vec![0u8; input.len()];
    let consumed =
        decompress_known_size(&compressed, &mut dst, input.len()).expect("known-size decode should succeed");
    assert_eq!(consumed, compressed.len());
    assert!(dst == input, "known-size round-trip mismatch for {} bytes", input.len());
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 1: empty input
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_empty_input_round_trip() {
    assert_eq!(compress(&[]), vec![0x00]);
    assert_round_trip(&[]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 2: all-zero input
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_all_zero_round_trip() {
    for len in [1usize, 17, 18, 64, 1000, 65_536, 1 << 20] {
        assert_round_trip(&vec![0u8; len]);
    }
}

#[test]
fn test_all_zero_compresses_well() {
    let input = vec![0u8; 1 << 20];
    let compressed = compress(&input);
    assert!(
        compressed.len() < input.len() / 200,
        "1 MiB of zeros compressed to {} bytes",
        compressed.len()
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 3: pseudo-random input
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_random_round_trip() {
    for (seed, len) in [(1u32, 1usize), (2, 16), (3, 17), (4, 100), (5, 4096), (6, 100_000)] {
        assert_round_trip(&lcg_bytes(seed, len));
    }
}

#[test]
fn test_random_input_expands_only_slightly() {
    let input = lcg_bytes(99, 50_000);
    let compressed = compress(&input);
    assert!(compressed.len() >= input.len() - 64);
    assert!(compressed.len() <= max_compressed_length(input.len()));
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 4: repetitive input
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_repetitive_text_round_trip() {
    let input = b"The quick brown fox jumps over the lazy dog. ".repeat(500);
    let compressed = compress(&input);
    assert!(compressed.len() < input.len() / 10);
    assert_round_trip(&input);
}

#[test]
fn test_short_period_patterns_round_trip() {
    // Periods below 4 exercise the overlapping match copy.
    for period in 1..=9usize {
        let input: Vec<u8> = (0..5000).map(|i| b'a' + (i % period) as u8).collect();
        assert_round_trip(&input);
    }
}

#[test]
fn test_run_of_twenty_bytes() {
    let input = [b'a'; 20];
    let compressed = compress(&input);
    assert_eq!(compressed.len(), 10);
    assert_eq!(decompress(&compressed).unwrap(), input.to_vec());
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 5: multi-megabyte mixed input
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_multi_megabyte_round_trip() {
    let mut input = Vec::with_capacity(4 << 20);
    let mut seed = 0u32;
    while input.len() < 4 << 20 {
        seed += 1;
        input.extend_from_slice(&lcg_bytes(seed, 3000));
        input.extend(std::iter::repeat(seed as u8).take(2000));
        input.extend_from_slice(&b"lorem ipsum dolor sit amet ".repeat(40));
    }
    assert_round_trip(&input);
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 6: 64 KB threshold
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_threshold_lengths_round_trip() {
    for len in [NARROW_TABLE_LIMIT - 2, NARROW_TABLE_LIMIT - 1, NARROW_TABLE_LIMIT, NARROW_TABLE_LIMIT + 1] {
        let input: Vec<u8> = lcg_bytes(len as u32, len / 3)
            .into_iter()
            .cycle()
            .take(len)
            .collect();
        assert_round_trip(&input);
    }
}

#[test]
fn test_forced_wide_table_round_trip() {
    let input = b"wide table ".repeat(1000);
    let mut dst = vec![0u8; max_compressed_length(input.len())];
    let n = compress_with_width(&input, &mut dst, TableWidth::Wide).unwrap();
    assert_eq!(decompress(&dst[..n]).unwrap(), input);
}

#[test]
fn test_compress_into_reuses_destination() {
    let a = b"first block first block first block".to_vec();
    let b = lcg_bytes(8, 300);
    let mut dst = vec![0u8; max_compressed_length(300)];
    let na = compress_into(&a, &mut dst).unwrap();
    assert_eq!(decompress(&dst[..na]).unwrap(), a);
    let nb = compress_into(&b, &mut dst).unwrap();
    assert_eq!(decompress(&dst[..nb]).unwrap(), b);
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 7: concurrent use
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_concurrent_calls_are_independent() {
    let inputs: Vec<Vec<u8>> = (0..64u32)
        .map(|i| {
            let mut v = lcg_bytes(i, 2000 + i as usize * 997);
            v.extend_from_slice(&b"shared tail ".repeat(i as usize + 1));
            v
        })
        .collect();

    let sequential: Vec<Vec<u8>> = inputs.iter().map(|v| compress(v)).collect();
    let parallel: Vec<Vec<u8>> = inputs.par_iter().map(|v| compress(v)).collect();
    assert_eq!(sequential, parallel);

    parallel.par_iter().zip(inputs.par_iter()).for_each(|(c, original)| {
        assert_eq!(&decompress(c).unwrap(), original);
    });
}
