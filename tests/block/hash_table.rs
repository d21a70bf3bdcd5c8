// Integration tests for hash-table width selection.
//
// The narrow table is chosen for inputs shorter than NARROW_TABLE_LIMIT
// (65536 + MFLIMIT - 2 bytes); both widths must produce decodable blocks.

use lz4_block::block::compress::{compress, compress_with_width, max_compressed_length};
use lz4_block::block::decompress::decompress;
use lz4_block::block::hash_table::{TableWidth, NARROW_TABLE_LIMIT};
use lz4_block::block::types::MFLIMIT;

fn mixed_input(len: usize) -> Vec<u8> {
    let mut state: u32 = 0xC0FF_EE00;
    (0..len)
        .map(|i| {
            if (i / 512) % 2 == 0 {
                (i % 61) as u8
            } else {
                state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
                (state >> 24) as u8
            }
        })
        .collect()
}

#[test]
fn threshold_is_64k_plus_mflimit_minus_two() {
    assert_eq!(NARROW_TABLE_LIMIT, 65_536 + MFLIMIT - 2);
}

#[test]
fn exact_threshold_selects_wide_table() {
    assert_eq!(TableWidth::for_input_len(NARROW_TABLE_LIMIT), TableWidth::Wide);
    assert_eq!(TableWidth::for_input_len(NARROW_TABLE_LIMIT - 1), TableWidth::Narrow);
}

#[test]
fn both_sides_of_threshold_round_trip() {
    for len in [NARROW_TABLE_LIMIT - 1, NARROW_TABLE_LIMIT] {
        let input = mixed_input(len);
        assert_eq!(decompress(&compress(&input)).unwrap(), input, "len {}", len);
    }
}

#[test]
fn forced_widths_round_trip_below_threshold() {
    let input = mixed_input(NARROW_TABLE_LIMIT - 1);
    for width in [TableWidth::Wide, TableWidth::Narrow] {
        let mut dst = vec![0u8; max_compressed_length(input.len())];
        let n = compress_with_width(&input, &mut dst, width).unwrap();
        assert_eq!(decompress(&dst[..n]).unwrap(), input, "width {}", width);
    }
}

#[test]
fn wide_table_respects_max_distance() {
    // A repeat 70000 bytes back is out of reach; the block must still decode.
    let head = mixed_input(70_000);
    let mut input = head.clone();
    input.extend_from_slice(&head[..1000]);
    assert_eq!(decompress(&compress(&input)).unwrap(), input);
}
