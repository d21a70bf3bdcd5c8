//! LZ4 block decompression.
//!
//! Two decode loops share the same sequence helpers:
//!   - [`decompress_known_size`]: the caller knows the exact decoded length;
//!     decoding ends when the output reaches it.
//!   - [`decompress_into`]: decoding ends when the input is exhausted; the
//!     output buffer is only an upper bound.
//!
//! # Safety boundary
//!
//! No write ever lands at or past the declared output end, and no read leaves
//! the compressed slice.  Every length is checked against the remaining output
//! *before* the copy it guards.  Malformed input (a truncated stream, a zero
//! offset, an offset reaching before the output start) is reported as an error
//! instead of being trusted.
//!
//! Wide-stride copies are only taken when both buffers are proven to have
//! `COPYLENGTH` bytes of headroom past the logical end of the copy; near the
//! tail every copy is exact.

use core::fmt;

use super::types::{
    read_le16, wild_copy, wild_copy_within, COPYLENGTH, COPYTOKEN, DEC_TABLE, MINMATCH, ML_BITS,
    ML_MASK, RUN_MASK,
};

// ─────────────────────────────────────────────────────────────────────────────
// Error type
// ─────────────────────────────────────────────────────────────────────────────

/// Errors returned by LZ4 block decompression.
///
/// `input_pos` is the number of compressed bytes consumed when the error was
/// detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecompressError {
    /// Decoding would write past the declared end of the output.
    OutputOverflow { input_pos: usize },
    /// The compressed stream ends in the middle of a sequence.
    TruncatedInput { input_pos: usize },
    /// A match offset of zero, or one reaching before the start of the output.
    InvalidOffset { input_pos: usize, offset: usize },
    /// Known-size decoding finished at a length other than the declared one.
    LengthMismatch { expected: usize, actual: usize },
}

impl DecompressError {
    /// The error as a negative integer: minus the number of compressed bytes
    /// consumed before the failure (never zero, so it cannot be mistaken for a
    /// successful empty decode).
    pub fn sentinel(&self) -> isize {
        let pos = match *self {
            DecompressError::OutputOverflow { input_pos }
            | DecompressError::TruncatedInput { input_pos }
            | DecompressError::InvalidOffset { input_pos, .. } => input_pos,
            DecompressError::LengthMismatch { actual, .. } => actual,
        };
        -(pos.max(1).min(isize::MAX as usize) as isize)
    }
}

impl fmt::Display for DecompressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            DecompressError::OutputOverflow { input_pos } => write!(
                f,
                "output buffer overflow at compressed byte {}",
                input_pos
            ),
            DecompressError::TruncatedInput { input_pos } => write!(
                f,
                "compressed block truncated at byte {}",
                input_pos
            ),
            DecompressError::InvalidOffset { input_pos, offset } => write!(
                f,
                "invalid match offset {} at compressed byte {}",
                offset, input_pos
            ),
            DecompressError::LengthMismatch { expected, actual } => write!(
                f,
                "decompressed length {} does not match expected {}",
                actual, expected
            ),
        }
    }
}

impl std::error::Error for DecompressError {}

// ─────────────────────────────────────────────────────────────────────────────
// Sequence helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Read one byte, failing with `TruncatedInput` at the end of `src`.
#[inline(always)]
fn read_byte(src: &[u8], ip: &mut usize) -> Result<u8, DecompressError> {
    match src.get(*ip) {
        Some(&b) => {
            *ip += 1;
            Ok(b)
        }
        None => Err(DecompressError::TruncatedInput { input_pos: *ip }),
    }
}

/// Add the extension bytes that follow a saturated nibble to `length`.
///
/// Each 255 byte adds 255 and continues; the first byte below 255 adds its
/// value and ends the run.
#[inline(always)]
fn read_length_extension(src: &[u8], ip: &mut usize, mut length: usize) -> Result<usize, DecompressError> {
    loop {
        let b = read_byte(src, ip)?;
        length = length.saturating_add(b as usize);
        if b != 255 {
            return Ok(length);
        }
    }
}

/// Decode the literal-run length of `token`, consuming any extension bytes.
#[inline(always)]
fn literal_length(src: &[u8], ip: &mut usize, token: u8) -> Result<usize, DecompressError> {
    let length = (token >> ML_BITS) as usize;
    if length == RUN_MASK {
        read_length_extension(src, ip, length)
    } else {
        Ok(length)
    }
}

/// Decode the match offset and full match length (including `MINMATCH`).
#[inline(always)]
fn match_header(
    src: &[u8],
    ip: &mut usize,
    token: u8,
    op: usize,
) -> Result<(usize, usize), DecompressError> {
    if *ip + 2 > src.len() {
        return Err(DecompressError::TruncatedInput { input_pos: *ip });
    }
    let offset = read_le16(src, *ip) as usize;
    *ip += 2;
    if offset == 0 || offset > op {
        return Err(DecompressError::InvalidOffset { input_pos: *ip, offset });
    }

    let mut length = token as usize & ML_MASK;
    if length == ML_MASK {
        length = read_length_extension(src, ip, length)?;
    }
    Ok((offset, length.saturating_add(MINMATCH)))
}

/// Copy `length` literal bytes from `src[ip..]` to `dst[op..]`.
///
/// Uses the 8-byte wildcopy when `wide` is set and the source has the
/// read-ahead headroom; otherwise copies exactly.  The caller proves the
/// destination headroom before setting `wide`.
#[inline(always)]
fn copy_literals(dst: &mut [u8], op: usize, src: &[u8], ip: usize, length: usize, wide: bool) {
    if wide && ip + length + COPYLENGTH <= src.len() {
        wild_copy(dst, op, src, ip, length);
    } else {
        dst[op..op + length].copy_from_slice(&src[ip..ip + length]);
    }
}

/// Replay a back-reference of `length` bytes, `offset` bytes behind `op`.
///
/// The caller has already checked that `op + length <= oend` and
/// `offset <= op`.  Returns the advanced output cursor.
#[inline(always)]
fn copy_match(dst: &mut [u8], mut op: usize, offset: usize, length: usize, oend: usize) -> usize {
    let end = op + length;
    let mut r = op - offset;

    if offset < COPYTOKEN {
        // Overlapping: the first bytes depend on bytes written just before.
        for _ in 0..COPYTOKEN {
            dst[op] = dst[r];
            op += 1;
            r += 1;
        }
        r -= DEC_TABLE[offset];
    } else {
        dst.copy_within(r..r + COPYTOKEN, op);
        op += COPYTOKEN;
        r += COPYTOKEN;
    }

    // From here on op - r >= COPYTOKEN.
    if end + COPYLENGTH <= oend {
        wild_copy_within(dst, r, op, end);
    } else {
        while op < end {
            dst[op] = dst[r];
            op += 1;
            r += 1;
        }
    }
    end
}

// ─────────────────────────────────────────────────────────────────────────────
// Known-size decoding
// ─────────────────────────────────────────────────────────────────────────────

/// Decompress `src` into `dst[..original_size]`, where `original_size` is the
/// exact decoded length.
///
/// Returns the number of compressed bytes consumed.  Bytes of `dst` at or past
/// `original_size` are never touched.
pub fn decompress_known_size(
    src: &[u8],
    dst: &mut [u8],
    original_size: usize,
) -> Result<usize, DecompressError> {
    if original_size > dst.len() {
        return Err(DecompressError::OutputOverflow { input_pos: 0 });
    }
    let oend = original_size;
    let mut ip: usize = 0;
    let mut op: usize = 0;

    loop {
        // ── Literals ─────────────────────────────────────────────────────────
        let token = read_byte(src, &mut ip)?;
        let length = literal_length(src, &mut ip, token)?;

        if length > oend - op {
            return Err(DecompressError::OutputOverflow { input_pos: ip });
        }
        if length > src.len() - ip {
            return Err(DecompressError::TruncatedInput { input_pos: ip });
        }
        if oend - op - length < COPYLENGTH {
            // Necessarily the last run.
            copy_literals(dst, op, src, ip, length, false);
            ip += length;
            op += length;
            break;
        }
        copy_literals(dst, op, src, ip, length, true);
        ip += length;
        op += length;

        // ── Match ────────────────────────────────────────────────────────────
        let (offset, length) = match_header(src, &mut ip, token, op)?;
        if length > oend - op {
            return Err(DecompressError::OutputOverflow { input_pos: ip });
        }
        op = copy_match(dst, op, offset, length, oend);
        if op == oend {
            break;
        }
    }

    if op != original_size {
        return Err(DecompressError::LengthMismatch {
            expected: original_size,
            actual: op,
        });
    }
    Ok(ip)
}

// ─────────────────────────────────────────────────────────────────────────────
// Streaming decoding
// ─────────────────────────────────────────────────────────────────────────────

/// Decompress the whole of `src` into `dst`, which only bounds the output.
///
/// Decoding stops when the input is exhausted, which allows the final
/// sequence to carry literals only.  Returns the number of bytes written.
pub fn decompress_into(src: &[u8], dst: &mut [u8]) -> Result<usize, DecompressError> {
    let iend = src.len();
    let oend = dst.len();
    let mut ip: usize = 0;
    let mut op: usize = 0;

    while ip < iend {
        // ── Literals ─────────────────────────────────────────────────────────
        let token = read_byte(src, &mut ip)?;
        let length = literal_length(src, &mut ip, token)?;

        if length > oend - op {
            return Err(DecompressError::OutputOverflow { input_pos: ip });
        }
        if length > iend - ip {
            return Err(DecompressError::TruncatedInput { input_pos: ip });
        }
        if oend - op - length < COPYLENGTH {
            copy_literals(dst, op, src, ip, length, false);
            op += length;
            break;
        }
        copy_literals(dst, op, src, ip, length, true);
        ip += length;
        op += length;
        if ip >= iend {
            break;
        }

        // ── Match ────────────────────────────────────────────────────────────
        let (offset, length) = match_header(src, &mut ip, token, op)?;
        if length > oend - op {
            return Err(DecompressError::OutputOverflow { input_pos: ip });
        }
        op = copy_match(dst, op, offset, length, oend);
        if op == oend {
            break;
        }
    }

    Ok(op)
}

/// Exact decoded length of the block `src`, computed without writing output.
///
/// Applies the same structural checks as [`decompress_into`].
pub fn decompressed_len(src: &[u8]) -> Result<usize, DecompressError> {
    let iend = src.len();
    let mut ip: usize = 0;
    let mut total: usize = 0;

    while ip < iend {
        let token = read_byte(src, &mut ip)?;
        let length = literal_length(src, &mut ip, token)?;
        if length > iend - ip {
            return Err(DecompressError::TruncatedInput { input_pos: ip });
        }
        ip += length;
        total = total.saturating_add(length);
        if ip >= iend {
            break;
        }

        let (_, length) = match_header(src, &mut ip, token, total)?;
        total = total.saturating_add(length);
    }

    Ok(total)
}

/// Decompress `src` into a newly allocated vector of exactly the decoded
/// length.
pub fn decompress(src: &[u8]) -> Result<Vec<u8>, DecompressError> {
    let expected = decompressed_len(src)?;
    let mut dst = vec![0u8; expected];
    let written = decompress_into(src, &mut dst)?;
    if written != expected {
        return Err(DecompressError::LengthMismatch {
            expected,
            actual: written,
        });
    }
    Ok(dst)
}
