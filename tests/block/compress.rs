// Integration tests for the block encoder.
//
// Covers the public compression entry points:
//   - max_compressed_length() worst-case bound
//   - compress() / compress_into() / compress_with_width()
//   - Error paths: Lz4Error::OutputTooSmall, Lz4Error::NarrowTableLimit
//   - Short inputs bypass the match finder (single literal run)
//   - Exact encodings for empty input and a run of one repeated byte

use lz4_block::block::compress::{
    compress, compress_into, compress_with_width, max_compressed_length, Lz4Error,
};
use lz4_block::block::hash_table::{TableWidth, NARROW_TABLE_LIMIT};
use lz4_block::block::decompress::decompress;
use lz4_block::block::types::MINLENGTH;

fn lcg_bytes(seed: u32, len: usize) -> Vec<u8> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (state >> 24) as u8
        })
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// max_compressed_length
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn bound_formula() {
    assert_eq!(max_compressed_length(0), 16);
    assert_eq!(max_compressed_length(254), 254 + 16);
    assert_eq!(max_compressed_length(255), 255 + 1 + 16);
    assert_eq!(max_compressed_length(1 << 20), (1 << 20) + (1 << 20) / 255 + 16);
}

#[test]
fn output_never_exceeds_bound() {
    for len in [0usize, 1, 13, 16, 17, 100, 4096, 70_000] {
        for input in [lcg_bytes(len as u32, len), vec![0u8; len]] {
            let out = compress(&input);
            assert!(
                out.len() <= max_compressed_length(len),
                "len {}: {} > {}",
                len,
                out.len(),
                max_compressed_length(len)
            );
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Exact encodings
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn empty_input_is_single_zero_token() {
    assert_eq!(compress(&[]), vec![0x00]);
}

#[test]
fn inputs_below_minlength_are_one_literal_run() {
    for len in 0..MINLENGTH {
        let input = vec![b'x'; len];
        let out = compress(&input);
        if len < 15 {
            assert_eq!(out[0], (len as u8) << 4, "len {}", len);
            assert_eq!(&out[1..], &input[..]);
        } else {
            assert_eq!(out[0], 0xF0, "len {}", len);
            assert_eq!(out[1], (len - 15) as u8);
            assert_eq!(&out[2..], &input[..]);
        }
    }
}

#[test]
fn short_random_input_costs_one_token_byte() {
    let input = lcg_bytes(7, 14);
    assert_eq!(compress(&input).len(), input.len() + 1);
}

#[test]
fn sixteen_random_bytes_need_a_length_extension() {
    // 16 >= 15 saturates the literal nibble, so one extension byte follows.
    let input = lcg_bytes(11, 16);
    let out = compress(&input);
    assert_eq!(out.len(), input.len() + 2);
    assert_eq!(&out[..2], &[0xF0, 0x01]);
}

#[test]
fn run_of_one_byte_encodes_overlapping_match() {
    let input = [b'a'; 20];
    let out = compress(&input);
    // One literal, offset 1, match of 14 (code 10), then 5 last literals.
    assert_eq!(out, vec![0x1A, b'a', 0x01, 0x00, 0x50, b'a', b'a', b'a', b'a', b'a']);
}

#[test]
fn last_five_bytes_are_literals() {
    let input = vec![0u8; 1000];
    let out = compress(&input);
    assert_eq!(&out[out.len() - 6..], &[0x50, 0, 0, 0, 0, 0]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Caller-sized entry points
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn compress_into_matches_compress() {
    let input = b"The quick brown fox jumps over the lazy dog. ".repeat(50);
    let mut dst = vec![0u8; max_compressed_length(input.len())];
    let n = compress_into(&input, &mut dst).unwrap();
    assert_eq!(&dst[..n], &compress(&input)[..]);
}

#[test]
fn destination_below_bound_is_rejected() {
    let input = vec![1u8; 100];
    let required = max_compressed_length(100);
    let mut dst = vec![0u8; required - 1];
    assert_eq!(
        compress_into(&input, &mut dst),
        Err(Lz4Error::OutputTooSmall {
            required,
            available: required - 1
        })
    );
}

#[test]
fn narrow_table_refuses_long_input() {
    let input = vec![0u8; NARROW_TABLE_LIMIT];
    let mut dst = vec![0u8; max_compressed_length(input.len())];
    assert_eq!(
        compress_with_width(&input, &mut dst, TableWidth::Narrow),
        Err(Lz4Error::NarrowTableLimit { len: NARROW_TABLE_LIMIT })
    );
    assert!(compress_with_width(&input, &mut dst, TableWidth::Wide).is_ok());
}

/// Pseudo-random text over a four-letter alphabet.  Short repeats are common,
/// so the match finder's hash collisions (and with them the encoding) depend
/// on the table width.
fn four_letter_text(seed: u32, len: usize) -> Vec<u8> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            b'a' + ((state >> 24) % 4) as u8
        })
        .collect()
}

fn compress_forced(input: &[u8], width: TableWidth) -> Result<Vec<u8>, Lz4Error> {
    let mut out = vec![0u8; max_compressed_length(input.len())];
    let n = compress_with_width(input, &mut out, width)?;
    out.truncate(n);
    Ok(out)
}

fn compress_auto(input: &[u8]) -> Vec<u8> {
    let mut out = vec![0u8; max_compressed_length(input.len())];
    let n = compress_into(input, &mut out).unwrap();
    out.truncate(n);
    out
}

#[test]
fn compress_into_picks_narrow_just_below_limit() {
    let input = four_letter_text(9, NARROW_TABLE_LIMIT - 1);
    assert_eq!(input.len(), 65_545);
    let narrow = compress_forced(&input, TableWidth::Narrow).unwrap();
    let wide = compress_forced(&input, TableWidth::Wide).unwrap();
    assert_ne!(narrow, wide, "widths must encode this input differently");

    assert_eq!(compress_auto(&input), narrow);
    assert_eq!(decompress(&narrow).unwrap(), input);
}

#[test]
fn compress_into_picks_wide_at_limit() {
    let input = four_letter_text(9, NARROW_TABLE_LIMIT);
    assert_eq!(input.len(), 65_546);
    let wide = compress_forced(&input, TableWidth::Wide).unwrap();
    assert_eq!(
        compress_forced(&input, TableWidth::Narrow),
        Err(Lz4Error::NarrowTableLimit { len: NARROW_TABLE_LIMIT })
    );

    assert_eq!(compress_auto(&input), wide);
    assert_eq!(decompress(&wide).unwrap(), input);
}

#[test]
fn error_display() {
    let e = Lz4Error::OutputTooSmall {
        required: 32,
        available: 8,
    };
    assert_eq!(e.to_string(), "destination too small: 32 bytes required, 8 available");
    let e = Lz4Error::NarrowTableLimit { len: 70_000 };
    assert!(e.to_string().contains("70000"));
}
