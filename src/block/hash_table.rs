//! Match-finder hash tables.
//!
//! Each table maps the multiplicative hash of the 4 bytes at a position to the
//! most recent position with that hash.  Buckets are overwritten in place (no
//! chaining), so memory is fixed regardless of input size.  Collisions are
//! expected: callers verify the 4-byte prefix before trusting a candidate.
//!
//! Two widths exist:
//!
//! | Variant        | Slot type | Hash log        | Buckets | Valid inputs                |
//! |----------------|-----------|-----------------|---------|-----------------------------|
//! | [`WideTable`]  | `usize`   | `HASH_LOG`      | 4096    | any length                  |
//! | [`NarrowTable`]| `u16`     | `HASH_LOG + 1`  | 8192    | `< NARROW_TABLE_LIMIT`      |
//!
//! Positions are indices into the block being compressed, so the narrow
//! table's 16-bit slots are offsets from the block base.  Choosing a width
//! never changes the wire format.

use core::fmt;

use super::types::{read_le32, HASH_PRIME, MAX_DISTANCE, MFLIMIT};
use crate::config::HASH_LOG;

/// Inputs shorter than this may use the narrow (16-bit) table.
///
/// Every position the narrow table stores is at most
/// `NARROW_TABLE_LIMIT - 1 - MFLIMIT`, which fits in a `u16` and is never more
/// than `MAX_DISTANCE` bytes behind any scan position.
pub const NARROW_TABLE_LIMIT: usize = MAX_DISTANCE + MFLIMIT - 1;

/// Number of buckets in the wide table.
pub const WIDE_TABLE_SIZE: usize = 1 << HASH_LOG;

/// Number of buckets in the narrow table.
pub const NARROW_TABLE_SIZE: usize = 1 << (HASH_LOG + 1);

// ─────────────────────────────────────────────────────────────────────────────
// Table trait
// ─────────────────────────────────────────────────────────────────────────────

/// A direct-indexed table of recent positions, keyed by a 4-byte hash.
///
/// Implementations are allocated fresh for each compression call and dropped
/// at the end of it.
pub trait HashTable {
    /// Number of hash bits kept; the table has `1 << HASH_BITS` buckets.
    const HASH_BITS: u32;

    /// Whether a candidate must be checked against `MAX_DISTANCE`.  The narrow
    /// table only ever holds in-range positions.
    const CHECKS_DISTANCE: bool;

    /// Allocate a zeroed table.
    fn new() -> Self;

    /// Position stored in bucket `h`.  Untouched buckets hold position 0.
    fn lookup(&self, h: usize) -> usize;

    /// Overwrite bucket `h` with `position`.
    fn insert(&mut self, h: usize, position: usize);

    /// Hash of a little-endian 4-byte word.
    #[inline(always)]
    fn hash(word: u32) -> usize {
        (word.wrapping_mul(HASH_PRIME) >> (32 - Self::HASH_BITS)) as usize
    }

    /// Hash of the 4 bytes of `src` starting at `pos`.
    #[inline(always)]
    fn hash_at(src: &[u8], pos: usize) -> usize {
        Self::hash(read_le32(src, pos))
    }

    /// Whether `candidate` is close enough behind `ip` to be encoded.
    #[inline(always)]
    fn in_range(candidate: usize, ip: usize) -> bool {
        debug_assert!(candidate < ip);
        !Self::CHECKS_DISTANCE || ip - candidate <= MAX_DISTANCE
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Wide table
// ─────────────────────────────────────────────────────────────────────────────

/// Full-width table storing absolute positions; valid for inputs of any size.
pub struct WideTable {
    slots: Box<[usize]>,
}

impl HashTable for WideTable {
    const HASH_BITS: u32 = HASH_LOG;
    const CHECKS_DISTANCE: bool = true;

    fn new() -> Self {
        Self {
            slots: vec![0usize; WIDE_TABLE_SIZE].into_boxed_slice(),
        }
    }

    #[inline(always)]
    fn lookup(&self, h: usize) -> usize {
        self.slots[h]
    }

    #[inline(always)]
    fn insert(&mut self, h: usize, position: usize) {
        self.slots[h] = position;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Narrow table
// ─────────────────────────────────────────────────────────────────────────────

/// Half-size table storing 16-bit offsets from the block base; valid only for
/// inputs shorter than [`NARROW_TABLE_LIMIT`].
pub struct NarrowTable {
    slots: Box<[u16]>,
}

impl HashTable for NarrowTable {
    const HASH_BITS: u32 = HASH_LOG + 1;
    const CHECKS_DISTANCE: bool = false;

    fn new() -> Self {
        Self {
            slots: vec![0u16; NARROW_TABLE_SIZE].into_boxed_slice(),
        }
    }

    #[inline(always)]
    fn lookup(&self, h: usize) -> usize {
        self.slots[h] as usize
    }

    #[inline(always)]
    fn insert(&mut self, h: usize, position: usize) {
        debug_assert!(position <= u16::MAX as usize, "narrow table position overflows u16");
        self.slots[h] = position as u16;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Width selection
// ─────────────────────────────────────────────────────────────────────────────

/// Which hash-table variant the encoder runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableWidth {
    /// [`WideTable`]: absolute positions, any input length.
    Wide,
    /// [`NarrowTable`]: 16-bit offsets, inputs below [`NARROW_TABLE_LIMIT`].
    Narrow,
}

impl TableWidth {
    /// The width selected automatically for an input of `len` bytes.
    #[inline]
    pub fn for_input_len(len: usize) -> Self {
        if len < NARROW_TABLE_LIMIT {
            TableWidth::Narrow
        } else {
            TableWidth::Wide
        }
    }

    /// Whether this width can compress an input of `len` bytes.
    #[inline]
    pub fn supports_len(self, len: usize) -> bool {
        match self {
            TableWidth::Wide => true,
            TableWidth::Narrow => len < NARROW_TABLE_LIMIT,
        }
    }
}

impl fmt::Display for TableWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TableWidth::Wide => "wide",
            TableWidth::Narrow => "narrow",
        })
    }
}
