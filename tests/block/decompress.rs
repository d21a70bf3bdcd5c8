// Integration tests for the block decoders.
//
//   - decompress_known_size(): exact-length decoding, consumed-byte count
//   - decompress_into(): streaming decoding bounded by the destination
//   - decompressed_len() / decompress(): exact pre-scan and allocation
//   - Malformed input: every error variant and its negative sentinel

use lz4_block::block::compress::compress;
use lz4_block::block::decompress::{
    decompress, decompress_into, decompress_known_size, decompressed_len, DecompressError,
};

/// Literal-only block for `data` (same layout the encoder emits for short
/// inputs).
fn literal_block(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    if data.len() >= 15 {
        out.push(0xF0);
        let mut rest = data.len() - 15;
        while rest >= 255 {
            out.push(255);
            rest -= 255;
        }
        out.push(rest as u8);
    } else {
        out.push((data.len() as u8) << 4);
    }
    out.extend_from_slice(data);
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// Known-size decoding
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn known_size_round_trip_reports_consumed_bytes() {
    let input = b"abcdefgh".repeat(100);
    let compressed = compress(&input);
    let mut dst = vec![0u8; input.len()];
    let consumed = decompress_known_size(&compressed, &mut dst, input.len()).unwrap();
    assert_eq!(consumed, compressed.len());
    assert_eq!(dst, input);
}

#[test]
fn known_size_leaves_bytes_past_original_size_alone() {
    let input = vec![42u8; 300];
    let compressed = compress(&input);
    let mut dst = vec![0xCCu8; 400];
    decompress_known_size(&compressed, &mut dst, 300).unwrap();
    assert_eq!(&dst[..300], &input[..]);
    assert!(dst[300..].iter().all(|&b| b == 0xCC));
}

#[test]
fn known_size_larger_than_destination_is_overflow() {
    let mut dst = [0u8; 4];
    assert_eq!(
        decompress_known_size(&[0x00], &mut dst, 5),
        Err(DecompressError::OutputOverflow { input_pos: 0 })
    );
}

#[test]
fn known_size_too_small_is_overflow() {
    let input = vec![9u8; 100];
    let compressed = compress(&input);
    let mut dst = vec![0u8; 100];
    let err = decompress_known_size(&compressed, &mut dst, 60).unwrap_err();
    assert!(matches!(err, DecompressError::OutputOverflow { .. }), "{:?}", err);
    assert!(err.sentinel() < 0);
}

#[test]
fn known_size_slightly_too_large_is_length_mismatch() {
    let input = b"0123456789".repeat(10);
    let compressed = compress(&input);
    let mut dst = vec![0u8; 103];
    assert_eq!(
        decompress_known_size(&compressed, &mut dst, 103),
        Err(DecompressError::LengthMismatch {
            expected: 103,
            actual: 100
        })
    );
}

#[test]
fn known_size_empty_input_is_truncated() {
    let mut dst = [0u8; 8];
    let err = decompress_known_size(&[], &mut dst, 8).unwrap_err();
    assert_eq!(err, DecompressError::TruncatedInput { input_pos: 0 });
    assert_eq!(err.sentinel(), -1);
}

// ─────────────────────────────────────────────────────────────────────────────
// Streaming decoding
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn streaming_with_spare_room_returns_decoded_length() {
    let input = b"streaming decode ".repeat(40);
    let compressed = compress(&input);
    let mut dst = vec![0u8; input.len() + 1000];
    let n = decompress_into(&compressed, &mut dst).unwrap();
    assert_eq!(n, input.len());
    assert_eq!(&dst[..n], &input[..]);
}

#[test]
fn streaming_into_short_buffer_is_overflow() {
    let input = vec![5u8; 500];
    let compressed = compress(&input);
    let mut dst = vec![0u8; 499];
    let err = decompress_into(&compressed, &mut dst).unwrap_err();
    assert!(matches!(err, DecompressError::OutputOverflow { .. }), "{:?}", err);
}

#[test]
fn streaming_accepts_hand_built_literal_blocks() {
    for len in [0usize, 1, 14, 15, 16, 269, 270, 600] {
        let data: Vec<u8> = (0..len).map(|i| (i * 7) as u8).collect();
        let block = literal_block(&data);
        assert_eq!(decompressed_len(&block).unwrap(), len);
        assert_eq!(decompress(&block).unwrap(), data, "len {}", len);
    }
}

#[test]
fn empty_slice_decodes_to_nothing() {
    assert_eq!(decompress(&[]).unwrap(), Vec::<u8>::new());
}

// ─────────────────────────────────────────────────────────────────────────────
// Pre-scan
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn decompressed_len_matches_input_for_compressible_data() {
    // A 4x guess would be far too small for this block.
    let input = vec![0u8; 1 << 20];
    let compressed = compress(&input);
    assert!(compressed.len() * 4 < input.len());
    assert_eq!(decompressed_len(&compressed).unwrap(), input.len());
    assert_eq!(decompress(&compressed).unwrap(), input);
}

// ─────────────────────────────────────────────────────────────────────────────
// Malformed input
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn offset_before_output_start_is_rejected() {
    // 8 literals, then offset 9 (one byte before the start).
    let mut block = vec![0x80];
    block.extend_from_slice(b"ABCDEFGH");
    block.extend_from_slice(&[0x09, 0x00]);
    block.extend_from_slice(&[0x50, 1, 2, 3, 4, 5]);
    assert_eq!(
        decompressed_len(&block),
        Err(DecompressError::InvalidOffset {
            input_pos: 11,
            offset: 9
        })
    );
    let mut dst = vec![0u8; 64];
    assert!(matches!(
        decompress_into(&block, &mut dst),
        Err(DecompressError::InvalidOffset { offset: 9, .. })
    ));
}

#[test]
fn missing_offset_is_truncated() {
    let mut block = vec![0x84];
    block.extend_from_slice(b"ABCDEFGH");
    block.push(0x01);
    let mut dst = vec![0u8; 64];
    assert_eq!(
        decompress_known_size(&block, &mut dst, 64),
        Err(DecompressError::TruncatedInput { input_pos: 9 })
    );
}

#[test]
fn literal_run_past_input_end_is_truncated() {
    let block = [0x50, b'a', b'b'];
    assert_eq!(
        decompress(&block),
        Err(DecompressError::TruncatedInput { input_pos: 1 })
    );
}

#[test]
fn error_messages() {
    assert_eq!(
        DecompressError::OutputOverflow { input_pos: 12 }.to_string(),
        "output buffer overflow at compressed byte 12"
    );
    assert_eq!(
        DecompressError::LengthMismatch {
            expected: 10,
            actual: 8
        }
        .to_string(),
        "decompressed length 8 does not match expected 10"
    );
}
