// Integration tests for the block constants and copy primitives.

use lz4_block::block::types::{
    fast_copy, read_le16, read_le32, write_le16, COPYLENGTH, LASTLITERALS, MAX_DISTANCE, MFLIMIT,
    MINLENGTH, MINMATCH, SKIPSTRENGTH,
};

#[test]
fn format_constants() {
    assert_eq!(MINMATCH, 4);
    assert_eq!(COPYLENGTH, 8);
    assert_eq!(LASTLITERALS, 5);
    assert_eq!(MFLIMIT, 12);
    assert_eq!(MINLENGTH, 17);
    assert_eq!(SKIPSTRENGTH, 6);
    assert_eq!(MAX_DISTANCE, 65_535);
}

#[test]
fn le16_round_trip_at_offset() {
    let mut buf = [0u8; 6];
    write_le16(&mut buf, 3, 0x1234);
    assert_eq!(buf[3], 0x34);
    assert_eq!(buf[4], 0x12);
    assert_eq!(read_le16(&buf, 3), 0x1234);
}

#[test]
fn le32_reads_low_byte_first() {
    assert_eq!(read_le32(&[0xAA, 0xBB, 0xCC, 0xDD, 0xEE], 1), 0xEEDD_CCBB);
}

#[test]
fn fast_copy_large_buffer() {
    let src: Vec<u8> = (0..1000u32).map(|i| (i * 31) as u8).collect();
    let mut dst = vec![0u8; 1000];
    fast_copy(&mut dst, &src);
    assert_eq!(dst, src);
}
