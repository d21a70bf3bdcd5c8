//! LZ4 block compression.
//!
//! A single greedy pass over the input: a hash table of recently seen 4-byte
//! prefixes proposes back-references, which are verified, extended backwards
//! over pending literals, extended forwards, and emitted as
//! `(literal run, offset, match length)` sequences.  The block always ends
//! with a literal-only sequence covering at least the last [`LASTLITERALS`]
//! bytes.
//!
//! | Function                       | Table width                          |
//! |--------------------------------|--------------------------------------|
//! | [`compress`]                   | chosen by input length, allocates    |
//! | [`compress_into`]              | chosen by input length               |
//! | [`compress_with_width`]        | forced by the caller                 |
//!
//! Both widths run the same generic encoder, [`compress_generic`], so the two
//! variants cannot drift apart.
//!
//! See the [LZ4 block format documentation] for the on-wire layout.
//!
//! [LZ4 block format documentation]: https://github.com/lz4/lz4/blob/dev/doc/lz4_Block_format.md

use core::fmt;

use super::hash_table::{HashTable, NarrowTable, TableWidth, WideTable, NARROW_TABLE_LIMIT};
use super::types::{
    fast_copy, nb_common_bytes, read_le16, read_le32, write_le16, LASTLITERALS, MFLIMIT,
    MINLENGTH, MINMATCH, ML_BITS, ML_MASK, RUN_MASK, SKIPSTRENGTH,
};

// ─────────────────────────────────────────────────────────────────────────────
// Error type
// ─────────────────────────────────────────────────────────────────────────────

/// Errors returned by the caller-sized compression entry points.
///
/// With a destination of at least [`max_compressed_length`] bytes and the
/// automatically selected table width, compression cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lz4Error {
    /// The destination is shorter than `max_compressed_length(src.len())`.
    OutputTooSmall { required: usize, available: usize },
    /// The narrow table was forced for an input of `NARROW_TABLE_LIMIT` bytes
    /// or more.
    NarrowTableLimit { len: usize },
}

impl fmt::Display for Lz4Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Lz4Error::OutputTooSmall { required, available } => write!(
                f,
                "destination too small: {} bytes required, {} available",
                required, available
            ),
            Lz4Error::NarrowTableLimit { len } => write!(
                f,
                "narrow hash table cannot compress {} bytes (limit {})",
                len, NARROW_TABLE_LIMIT
            ),
        }
    }
}

impl std::error::Error for Lz4Error {}

// ─────────────────────────────────────────────────────────────────────────────
// Utility
// ─────────────────────────────────────────────────────────────────────────────

/// Worst-case compressed size for an input of `source_len` bytes.
///
/// Covers an all-literal encoding: one token, one extension byte per 255
/// literals, and the literals themselves.
#[inline]
pub fn max_compressed_length(source_len: usize) -> usize {
    source_len + source_len / 255 + 16
}

/// Write the extension bytes for a length whose nibble saturated.
///
/// `rest` is the length minus the nibble mask.  Each full 255 is one byte; the
/// final byte (< 255) terminates the run.  Returns the advanced output cursor.
#[inline(always)]
fn write_length_extension(dst: &mut [u8], mut op: usize, mut rest: usize) -> usize {
    while rest >= 255 {
        dst[op] = 255;
        op += 1;
        rest -= 255;
    }
    dst[op] = rest as u8;
    op + 1
}

/// Advance `ip` over the bytes shared by `ip` and `candidate`, never passing
/// `matchlimit`.
///
/// Compares 4 bytes at a time while at least 4 bytes remain before the limit,
/// then narrows to 2-byte and 1-byte tail checks.  Both cursors only read
/// below `matchlimit`.
#[inline(always)]
fn extend_forward(src: &[u8], mut ip: usize, mut candidate: usize, matchlimit: usize) -> usize {
    while ip + 3 < matchlimit {
        let diff = read_le32(src, candidate) ^ read_le32(src, ip);
        if diff == 0 {
            ip += 4;
            candidate += 4;
            continue;
        }
        return ip + nb_common_bytes(diff);
    }
    if ip + 1 < matchlimit && read_le16(src, candidate) == read_le16(src, ip) {
        ip += 2;
        candidate += 2;
    }
    if ip < matchlimit && src[candidate] == src[ip] {
        ip += 1;
    }
    ip
}

// ─────────────────────────────────────────────────────────────────────────────
// Core compression loop
// ─────────────────────────────────────────────────────────────────────────────

/// Compress `src` into `dst` with hash table `T`, returning the compressed
/// length.
///
/// Preconditions (checked by the public entry points):
/// - `dst.len() >= max_compressed_length(src.len())`.
/// - `T` supports `src.len()` (see [`TableWidth::supports_len`]).
pub fn compress_generic<T: HashTable>(src: &[u8], dst: &mut [u8]) -> usize {
    debug_assert!(dst.len() >= max_compressed_length(src.len()));

    let iend = src.len();
    let mut anchor: usize = 0;
    let mut op: usize = 0;

    // ── Main compression body ────────────────────────────────────────────────
    // Breaking out of 'compress skips to the trailing-literals epilogue.
    'compress: {
        if iend < MINLENGTH {
            break 'compress;
        }

        let mut table = T::new();
        let mflimit = iend - MFLIMIT;
        let matchlimit = iend - LASTLITERALS;

        // ── First byte ───────────────────────────────────────────────────────
        let mut ip: usize = 0;
        table.insert(T::hash_at(src, ip), ip);
        ip += 1;
        let mut forward_h = T::hash_at(src, ip);

        'main: loop {
            let mut attempts: usize = (1 << SKIPSTRENGTH) + 3;
            let mut forward_ip = ip;
            let mut candidate: usize;

            // ── Find a match ─────────────────────────────────────────────────
            // The step grows with every failed probe so that data which resists
            // compression is skipped over quickly.
            loop {
                let h = forward_h;
                let step = attempts >> SKIPSTRENGTH;
                attempts += 1;
                ip = forward_ip;
                forward_ip = ip + step;

                if forward_ip > mflimit {
                    break 'compress; // not enough room for a match + last literals
                }

                forward_h = T::hash_at(src, forward_ip);
                candidate = table.lookup(h);
                table.insert(h, ip);

                if candidate < ip
                    && T::in_range(candidate, ip)
                    && read_le32(src, candidate) == read_le32(src, ip)
                {
                    break;
                }
            }

            // ── Catch up: extend the match backwards over pending literals ──
            while ip > anchor && candidate > 0 && src[ip - 1] == src[candidate - 1] {
                ip -= 1;
                candidate -= 1;
            }

            // ── Encode literal run ───────────────────────────────────────────
            let lit_length = ip - anchor;
            let mut token = op;
            op += 1;
            if lit_length >= RUN_MASK {
                dst[token] = (RUN_MASK << ML_BITS) as u8;
                op = write_length_extension(dst, op, lit_length - RUN_MASK);
            } else {
                dst[token] = (lit_length << ML_BITS) as u8;
            }
            fast_copy(&mut dst[op..op + lit_length], &src[anchor..ip]);
            op += lit_length;

            // ── Encode match, then test the next position for a new one ─────
            // A match found straight after the previous one is emitted with a
            // zero-length literal run without returning to the search loop.
            loop {
                debug_assert!(ip - candidate >= 1 && T::in_range(candidate, ip));
                write_le16(dst, op, (ip - candidate) as u16);
                op += 2;

                // The first MINMATCH bytes are already verified.
                ip += MINMATCH;
                candidate += MINMATCH;
                anchor = ip;
                ip = extend_forward(src, ip, candidate, matchlimit);

                let match_code = ip - anchor;
                if match_code >= ML_MASK {
                    dst[token] += ML_MASK as u8;
                    op = write_length_extension(dst, op, match_code - ML_MASK);
                } else {
                    dst[token] += match_code as u8;
                }

                anchor = ip;

                // ── Test end of chunk ────────────────────────────────────────
                if ip > mflimit {
                    break 'compress;
                }

                // ── Fill table ───────────────────────────────────────────────
                table.insert(T::hash_at(src, ip - 2), ip - 2);

                // ── Test next position ───────────────────────────────────────
                let h = T::hash_at(src, ip);
                candidate = table.lookup(h);
                table.insert(h, ip);
                if candidate < ip
                    && T::in_range(candidate, ip)
                    && read_le32(src, candidate) == read_le32(src, ip)
                {
                    token = op;
                    dst[token] = 0;
                    op += 1;
                    continue;
                }
                break;
            }

            // ── Prepare next search ──────────────────────────────────────────
            ip += 1;
            forward_h = T::hash_at(src, ip);
            continue 'main;
        }
    }

    // ── Last literals ────────────────────────────────────────────────────────
    let last_run = iend - anchor;
    if last_run >= RUN_MASK {
        dst[op] = (RUN_MASK << ML_BITS) as u8;
        op = write_length_extension(dst, op + 1, last_run - RUN_MASK);
    } else {
        dst[op] = (last_run << ML_BITS) as u8;
        op += 1;
    }
    fast_copy(&mut dst[op..op + last_run], &src[anchor..]);
    op + last_run
}

// ─────────────────────────────────────────────────────────────────────────────
// Public API
// ─────────────────────────────────────────────────────────────────────────────

/// Compress `src` into `dst` with an explicitly chosen table width.
///
/// Returns the number of bytes written to `dst`.
pub fn compress_with_width(src: &[u8], dst: &mut [u8], width: TableWidth) -> Result<usize, Lz4Error> {
    if !width.supports_len(src.len()) {
        return Err(Lz4Error::NarrowTableLimit { len: src.len() });
    }
    let required = max_compressed_length(src.len());
    if dst.len() < required {
        return Err(Lz4Error::OutputTooSmall {
            required,
            available: dst.len(),
        });
    }
    Ok(match width {
        TableWidth::Wide => compress_generic::<WideTable>(src, dst),
        TableWidth::Narrow => compress_generic::<NarrowTable>(src, dst),
    })
}

/// Compress `src` into a caller-sized `dst`.
///
/// The narrow table is used for inputs shorter than [`NARROW_TABLE_LIMIT`] and
/// the wide table otherwise.  Fails only when `dst` is shorter than
/// [`max_compressed_length`].
pub fn compress_into(src: &[u8], dst: &mut [u8]) -> Result<usize, Lz4Error> {
    compress_with_width(src, dst, TableWidth::for_input_len(src.len()))
}

/// Compress `src` into a newly allocated vector of exactly the compressed
/// length.
pub fn compress(src: &[u8]) -> Vec<u8> {
    let mut dst = vec![0u8; max_compressed_length(src.len())];
    let written = match TableWidth::for_input_len(src.len()) {
        TableWidth::Wide => compress_generic::<WideTable>(src, &mut dst),
        TableWidth::Narrow => compress_generic::<NarrowTable>(src, &mut dst),
    };
    dst.truncate(written);
    dst
}
