//! LZ4 block constants, little-endian field helpers, and copy primitives.
//!
//!   - Format constants (MINMATCH, COPYLENGTH, LASTLITERALS, MFLIMIT, …)
//!   - Little-endian 16/32-bit field access over byte slices
//!   - `fast_copy` (exact, strided) and the wildcopy helpers
//!   - `DEC_TABLE`, the back-offset table for overlapping match copies
//!   - `nb_common_bytes` (match-length helper)
//!
//! Every helper here operates on slice indices rather than raw pointers.  A
//! helper that may write past the logical end of a copy documents the headroom
//! its caller must prove; violating it panics on the slice bound instead of
//! corrupting memory.

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Minimum match length encoded in an LZ4 block.  The match-length nibble
/// stores `actual_length - MINMATCH`.
pub const MINMATCH: usize = 4;

/// Controls how quickly the match search accelerates over data that resists
/// compression: the probe step is `attempts >> SKIPSTRENGTH`.
pub const SKIPSTRENGTH: u32 = 6;

/// Offsets smaller than this overlap the first 4-byte match copy and are
/// replicated one byte at a time.
pub const COPYTOKEN: usize = 4;

/// Wildcopy granularity.  A wildcopy may write up to `COPYLENGTH - 1` bytes
/// past the logical end of the copy.
pub const COPYLENGTH: usize = 8;

/// The last `LASTLITERALS` bytes of a block are always literals.
pub const LASTLITERALS: usize = 5;

/// Minimum bytes left at the input tail for the match finder to start a search.
pub const MFLIMIT: usize = COPYLENGTH + MINMATCH;

/// Inputs shorter than this skip the match finder and are emitted as a single
/// literal run.
pub const MINLENGTH: usize = 17;

/// Log₂ of the largest back-reference distance.
pub const MAXD_LOG: u32 = 16;

/// Largest backward offset a match may reference.
pub const MAX_DISTANCE: usize = (1 << MAXD_LOG) - 1;

pub const ML_BITS: u32 = 4;
pub const ML_MASK: usize = (1 << ML_BITS) - 1;
pub const RUN_BITS: u32 = 8 - ML_BITS;
pub const RUN_MASK: usize = (1 << RUN_BITS) - 1;

/// Knuth multiplicative constant used by the 4-byte hash.
pub const HASH_PRIME: u32 = 2_654_435_761;

// ─────────────────────────────────────────────────────────────────────────────
// Lookup table
// ─────────────────────────────────────────────────────────────────────────────

/// Back-offsets applied to the match source after the first four bytes of an
/// overlapping copy, indexed by the gap between destination and source.
///
/// After the adjustment the gap is a multiple of the original period and at
/// least 4, so the rest of the match can be copied in 4-byte steps.
pub static DEC_TABLE: [usize; 4] = [0, 3, 2, 3];

// ─────────────────────────────────────────────────────────────────────────────
// Little-endian field helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Read a little-endian `u16` at `pos`.
#[inline(always)]
pub fn read_le16(buf: &[u8], pos: usize) -> u16 {
    u16::from_le_bytes([buf[pos], buf[pos + 1]])
}

/// Read a little-endian `u32` at `pos`.
///
/// The encoder hashes and compares 4-byte prefixes through this view.
#[inline(always)]
pub fn read_le32(buf: &[u8], pos: usize) -> u32 {
    let mut word = [0u8; 4];
    word.copy_from_slice(&buf[pos..pos + 4]);
    u32::from_le_bytes(word)
}

/// Write a little-endian `u16` at `pos`.
#[inline(always)]
pub fn write_le16(buf: &mut [u8], pos: usize, value: u16) {
    buf[pos..pos + 2].copy_from_slice(&value.to_le_bytes());
}

// ─────────────────────────────────────────────────────────────────────────────
// Copy primitives
// ─────────────────────────────────────────────────────────────────────────────

/// Copy `src` into `dst` (which must have the same length) using the largest
/// stride that fits: 16-byte pairs, then 8, 4, 2 and a final single byte.
///
/// Equivalent to a forward byte-for-byte copy; `src` and `dst` never overlap
/// since they are distinct borrows.
#[inline]
pub fn fast_copy(dst: &mut [u8], src: &[u8]) {
    debug_assert_eq!(dst.len(), src.len());
    let mut pos = 0;
    let mut remaining = src.len();

    while remaining >= 16 {
        dst[pos..pos + 8].copy_from_slice(&src[pos..pos + 8]);
        dst[pos + 8..pos + 16].copy_from_slice(&src[pos + 8..pos + 16]);
        pos += 16;
        remaining -= 16;
    }
    while remaining >= 8 {
        dst[pos..pos + 8].copy_from_slice(&src[pos..pos + 8]);
        pos += 8;
        remaining -= 8;
    }
    if remaining >= 4 {
        dst[pos..pos + 4].copy_from_slice(&src[pos..pos + 4]);
        pos += 4;
        remaining -= 4;
    }
    if remaining >= 2 {
        dst[pos..pos + 2].copy_from_slice(&src[pos..pos + 2]);
        pos += 2;
        remaining -= 2;
    }
    if remaining != 0 {
        dst[pos] = src[pos];
    }
}

/// Copy `len` bytes from `src[src_pos..]` to `dst[dst_pos..]` in 8-byte strides.
///
/// Writes up to `COPYLENGTH - 1` bytes past `dst_pos + len` and reads the same
/// amount past `src_pos + len`.  The caller must prove both slices have that
/// headroom; the overrun bytes are overwritten by the next sequence.
#[inline(always)]
pub fn wild_copy(dst: &mut [u8], mut dst_pos: usize, src: &[u8], mut src_pos: usize, len: usize) {
    let dst_end = dst_pos + len;
    while dst_pos < dst_end {
        dst[dst_pos..dst_pos + COPYLENGTH].copy_from_slice(&src[src_pos..src_pos + COPYLENGTH]);
        dst_pos += COPYLENGTH;
        src_pos += COPYLENGTH;
    }
}

/// Copy one 8-byte packet inside `buf` as two sequential 4-byte steps.
///
/// `dst - src` must be at least 4, so each step reads bytes that are already
/// final even when the packet overlaps its own source.
#[inline(always)]
pub fn copy_packet_within(buf: &mut [u8], src: usize, dst: usize) {
    debug_assert!(dst >= src + COPYTOKEN);
    buf.copy_within(src..src + 4, dst);
    buf.copy_within(src + 4..src + 8, dst + 4);
}

/// Wildcopy inside one buffer: copy packets from `src` to `dst` until `dst`
/// reaches `dst_end`.  May write up to `COPYLENGTH - 1` bytes past `dst_end`.
///
/// Returns the advanced `(src, dst)` cursors.
#[inline(always)]
pub fn wild_copy_within(
    buf: &mut [u8],
    mut src: usize,
    mut dst: usize,
    dst_end: usize,
) -> (usize, usize) {
    while dst < dst_end {
        copy_packet_within(buf, src, dst);
        src += COPYLENGTH;
        dst += COPYLENGTH;
    }
    (src, dst)
}

// ─────────────────────────────────────────────────────────────────────────────
// Common-byte counting
// ─────────────────────────────────────────────────────────────────────────────

/// Number of equal low-order bytes of two little-endian words whose XOR is
/// `diff`.  `diff` must be non-zero.
#[inline(always)]
pub fn nb_common_bytes(diff: u32) -> usize {
    debug_assert!(diff != 0);
    (diff.trailing_zeros() >> 3) as usize
}
