//! E2E Test Suite 03: Error Handling and Boundary Safety
//!
//! Truncated or corrupted compressed blocks must fail with a negative
//! sentinel and must never write outside the declared destination.  The
//! destination is surrounded by canary bytes that are checked after every
//! call.

use lz4_block::{compress, decompress_into, decompress_known_size, DecompressError};

const CANARY: u8 = 0xA5;
const GUARD: usize = 32;

fn sample_input() -> Vec<u8> {
    let mut state: u32 = 12_345;
    let mut input = Vec::new();
    for i in 0..40 {
        input.extend_from_slice(b"boundary safety sample text ");
        for _ in 0..(i % 7) * 9 {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            input.push((state >> 16) as u8);
        }
        input.extend(std::iter::repeat(b'z').take(i % 5));
    }
    input
}

/// A buffer of `GUARD` canaries, `len` canaries of destination, `GUARD` canaries.
fn guarded(len: usize) -> Vec<u8> {
    vec![CANARY; GUARD + len + GUARD]
}

fn guards_intact(buf: &[u8], len: usize) -> bool {
    buf[..GUARD].iter().all(|&b| b == CANARY) && buf[GUARD + len..].iter().all(|&b| b == CANARY)
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 1: every truncation of a valid block fails
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_truncated_blocks_fail_without_overrun() {
    let input = sample_input();
    let compressed = compress(&input);
    let len = input.len();

    for cut in 0..compressed.len() {
        let mut buf = guarded(len);
        let result = decompress_known_size(&compressed[..cut], &mut buf[GUARD..GUARD + len], len);
        let err = result.expect_err("truncated block must not decode");
        assert!(err.sentinel() < 0, "cut {}: sentinel {}", cut, err.sentinel());
        assert!(guards_intact(&buf, len), "cut {}: canary overwritten", cut);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 2: corrupted blocks never write out of bounds
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_corrupted_blocks_stay_in_bounds() {
    let input = sample_input();
    let compressed = compress(&input);
    let len = input.len();

    for pos in 0..compressed.len() {
        for flip in [0x01u8, 0x0F, 0x80, 0xFF] {
            let mut corrupt = compressed.clone();
            corrupt[pos] ^= flip;

            let mut buf = guarded(len);
            let _ = decompress_known_size(&corrupt, &mut buf[GUARD..GUARD + len], len);
            assert!(guards_intact(&buf, len), "known-size: byte {} ^ {:#x}", pos, flip);

            let mut buf = guarded(len);
            let _ = decompress_into(&corrupt, &mut buf[GUARD..GUARD + len]);
            assert!(guards_intact(&buf, len), "streaming: byte {} ^ {:#x}", pos, flip);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 3: declared size smaller than the real one
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_short_declared_size_fails() {
    let input = sample_input();
    let compressed = compress(&input);
    let declared = input.len() / 2;
    let mut buf = guarded(input.len());
    let err = decompress_known_size(&compressed, &mut buf[GUARD..GUARD + input.len()], declared)
        .unwrap_err();
    assert!(err.sentinel() < 0, "{:?}", err);
    // Nothing at or past the declared end was touched.
    assert!(buf[GUARD + declared..].iter().all(|&b| b == CANARY));
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 4: sentinel magnitude
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_sentinel_is_negated_input_position() {
    assert_eq!(DecompressError::OutputOverflow { input_pos: 17 }.sentinel(), -17);
    assert_eq!(DecompressError::TruncatedInput { input_pos: 0 }.sentinel(), -1);
    assert_eq!(
        DecompressError::InvalidOffset {
            input_pos: 40,
            offset: 0
        }
        .sentinel(),
        -40
    );
}

#[test]
fn test_errors_implement_std_error() {
    fn as_error(e: &dyn std::error::Error) -> String {
        e.to_string()
    }
    let msg = as_error(&DecompressError::TruncatedInput { input_pos: 3 });
    assert_eq!(msg, "compressed block truncated at byte 3");
}
