//! Elementary read, write, fill, copy, move and reverse primitives over
//! caller-owned byte buffers.
//!
//! The unchecked functions mirror direct indexing: keeping indices and
//! lengths inside the buffer is the caller's obligation, and a violation
//! panics instead of touching memory outside the buffer. The `try_`
//! variants check their arguments first and report
//! [`U8KitError::IndexOutOfBounds`] or [`U8KitError::RegionOutOfBounds`].
//!
//! Region functions return the buffer they wrote to so calls can be chained.

use crate::error::U8KitError;

/// Reads the byte at `index`.
///
/// # Panics
///
/// Panics if `index >= buf.len()`.
#[must_use]
#[allow(clippy::indexing_slicing)]
pub fn read(buf: &[u8], index: usize) -> u8 {
    buf[index]
}

/// Writes `value` at `index`.
///
/// # Panics
///
/// Panics if `index >= buf.len()`.
#[allow(clippy::indexing_slicing)]
pub fn write(buf: &mut [u8], index: usize, value: u8) {
    buf[index] = value;
}

/// Sets the byte at `index` to zero.
///
/// # Panics
///
/// Panics if `index >= buf.len()`.
pub fn clear(buf: &mut [u8], index: usize) {
    write(buf, index, 0);
}

/// Sets the first `size` bytes to `value`.
///
/// # Panics
///
/// Panics if `size > buf.len()`.
pub fn fill(buf: &mut [u8], value: u8, size: usize) {
    for index in 0..size {
        write(buf, index, value);
    }
}

/// Sets the first `size` bytes to zero.
///
/// # Panics
///
/// Panics if `size > buf.len()`.
pub fn zero(buf: &mut [u8], size: usize) {
    fill(buf, 0, size);
}

/// Copies `length` bytes from `src` to `dst`.
///
/// # Panics
///
/// Panics if either buffer is shorter than `length`.
#[allow(clippy::indexing_slicing)]
pub fn copy<'d>(src: &[u8], dst: &'d mut [u8], length: usize) -> &'d mut [u8] {
    dst[..length].copy_from_slice(&src[..length]);
    dst
}

/// Relocates `length` bytes from `src` to `dst`.
///
/// Two distinct borrows can never overlap, so this is a plain copy; use
/// [`move_within`] to relocate inside one buffer.
///
/// # Panics
///
/// Panics if either buffer is shorter than `length`.
pub fn move_bytes<'d>(src: &[u8], dst: &'d mut [u8], length: usize) -> &'d mut [u8] {
    copy(src, dst, length)
}

/// Copies `length` bytes inside `buf` from offset `src` to offset `dst`,
/// one byte at a time from the front.
///
/// When `dst` lies inside `(src, src + length)` the source is overwritten
/// before it is read and the destination ends up holding a repeated
/// prefix of the source. Use [`move_within`] for overlapping regions.
///
/// # Panics
///
/// Panics if either region extends past the end of `buf`.
#[allow(clippy::indexing_slicing)]
pub fn copy_forward(buf: &mut [u8], src: usize, dst: usize, length: usize) -> &mut [u8] {
    for i in 0..length {
        buf[dst + i] = buf[src + i];
    }
    buf
}

/// Relocates `length` bytes inside `buf` from offset `src` to offset
/// `dst`. The result is correct for overlapping regions.
///
/// # Panics
///
/// Panics if either region extends past the end of `buf`.
#[allow(clippy::indexing_slicing)]
pub fn move_within(buf: &mut [u8], src: usize, dst: usize, length: usize) -> &mut [u8] {
    if dst <= src {
        return copy_forward(buf, src, dst, length);
    }
    // Destination after source: copy from the back so no source byte is
    // overwritten before it is read.
    let mut i = length;
    while i > 0 {
        i -= 1;
        buf[dst + i] = buf[src + i];
    }
    buf
}

/// Overwrites the first `length` bytes with `value`.
///
/// # Panics
///
/// Panics if `length > buf.len()`.
#[allow(clippy::indexing_slicing)]
pub fn set_pattern(buf: &mut [u8], length: usize, value: u8) -> &mut [u8] {
    buf[..length].fill(value);
    buf
}

/// Overwrites the first `length` bytes with zero.
///
/// # Panics
///
/// Panics if `length > buf.len()`.
pub fn zero_region(buf: &mut [u8], length: usize) -> &mut [u8] {
    set_pattern(buf, length, 0)
}

/// Reverses the first `length` bytes in place.
///
/// # Panics
///
/// Panics if `length > buf.len()`.
#[allow(clippy::indexing_slicing)]
pub fn reverse(buf: &mut [u8], length: usize) -> &mut [u8] {
    let region = &mut buf[..length];
    if length > 1 {
        // Fingers move towards each other until they meet.
        let (mut left, mut right) = (0, length - 1);
        while left < right {
            region.swap(left, right);
            left += 1;
            right -= 1;
        }
    }
    buf
}

fn check_index(buf: &[u8], index: usize) -> Result<(), U8KitError> {
    if index >= buf.len() {
        return Err(U8KitError::IndexOutOfBounds {
            index,
            length: buf.len(),
        });
    }
    Ok(())
}

fn check_region(buf: &[u8], offset: usize, length: usize) -> Result<(), U8KitError> {
    let fits = offset
        .checked_add(length)
        .is_some_and(|end| end <= buf.len());
    if !fits {
        return Err(U8KitError::RegionOutOfBounds {
            offset,
            length,
            available: buf.len(),
        });
    }
    Ok(())
}

/// Checked [`read`].
///
/// # Errors
///
/// Returns `U8KitError::IndexOutOfBounds` if `index >= buf.len()`.
pub fn try_read(buf: &[u8], index: usize) -> Result<u8, U8KitError> {
    check_index(buf, index)?;
    Ok(read(buf, index))
}

/// Checked [`write`].
///
/// # Errors
///
/// Returns `U8KitError::IndexOutOfBounds` if `index >= buf.len()`.
pub fn try_write(buf: &mut [u8], index: usize, value: u8) -> Result<(), U8KitError> {
    check_index(buf, index)?;
    write(buf, index, value);
    Ok(())
}

/// Checked [`copy`].
///
/// # Errors
///
/// Returns `U8KitError::RegionOutOfBounds` if either buffer is shorter
/// than `length`. Nothing is written in that case.
pub fn try_copy<'d>(
    src: &[u8],
    dst: &'d mut [u8],
    length: usize,
) -> Result<&'d mut [u8], U8KitError> {
    check_region(src, 0, length)?;
    check_region(dst, 0, length)?;
    Ok(copy(src, dst, length))
}

/// Checked [`move_within`].
///
/// # Errors
///
/// Returns `U8KitError::RegionOutOfBounds` if the source or destination
/// region extends past the end of `buf`. Nothing is written in that case.
pub fn try_move_within(
    buf: &mut [u8],
    src: usize,
    dst: usize,
    length: usize,
) -> Result<&mut [u8], U8KitError> {
    check_region(buf, src, length)?;
    check_region(buf, dst, length)?;
    Ok(move_within(buf, src, dst, length))
}

/// Checked [`reverse`].
///
/// # Errors
///
/// Returns `U8KitError::RegionOutOfBounds` if `length > buf.len()`.
pub fn try_reverse(buf: &mut [u8], length: usize) -> Result<&mut [u8], U8KitError> {
    check_region(buf, 0, length)?;
    Ok(reverse(buf, length))
}
