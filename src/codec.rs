//! Conversion between `i32` and NUL-terminated base-N digit strings.
//!
//! An encoding is an optional `-`, the digits most significant first, then
//! a NUL terminator. Lengths exchanged between [`encode`] and [`decode`]
//! count all three parts, so the value returned by `encode` can be handed
//! to `decode` unchanged:
//!
//! ```
//! # use u8kit::codec::{decode, encode, MAX_ENCODED_LEN};
//! let mut text = [0u8; MAX_ENCODED_LEN];
//! let len = encode(-255, 16, &mut text).unwrap();
//! assert_eq!(&text[..len], b"-FF\0");
//! assert_eq!(decode(&text, len, 16), Ok(-255));
//! ```

use core::fmt;

use crate::error::U8KitError;
use crate::memory;

/// Smallest supported base (binary).
pub const MIN_BASE: u32 = 2;
/// Largest supported base: ten digits and 26 letters.
pub const MAX_BASE: u32 = 36;

/// Longest encoding: `i32::MIN` in base 2 is a sign, 32 digits and the
/// terminator.
pub const MAX_ENCODED_LEN: usize = 34;

const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const TERMINATOR: u8 = 0;
const SIGN: u8 = b'-';

fn check_base(base: u32) -> Result<(), U8KitError> {
    if (MIN_BASE..=MAX_BASE).contains(&base) {
        Ok(())
    } else {
        Err(U8KitError::InvalidBase { base })
    }
}

/// Character for digit `value` in `base`: `0`-`9`, then `A`-`Z`.
///
/// Returns `None` if `base` is not in `[2, 36]` or `value >= base`.
#[must_use]
pub fn digit_to_char(value: u32, base: u32) -> Option<u8> {
    if check_base(base).is_err() || value >= base {
        return None;
    }
    DIGITS.get(value as usize).copied()
}

/// Digit value of `byte` in `base`. Letters are accepted in either case.
///
/// Returns `None` if `byte` is not a digit of `base`.
#[must_use]
pub fn char_to_digit(byte: u8, base: u32) -> Option<u32> {
    let value = match byte {
        b'0'..=b'9' => byte - b'0',
        b'A'..=b'Z' => byte - b'A' + 10,
        b'a'..=b'z' => byte - b'a' + 10,
        _ => return None,
    };
    let value = u32::from(value);
    (value < base).then_some(value)
}

/// Writes the digits of `magnitude` least significant first and returns
/// how many were written. Zero produces the single digit `0`.
#[allow(clippy::indexing_slicing)]
fn write_digits_reversed(mut magnitude: u32, base: u32, digits: &mut [u8]) -> usize {
    let mut count = 0;
    loop {
        digits[count] = DIGITS[(magnitude % base) as usize];
        count += 1;
        magnitude /= base;
        if magnitude == 0 {
            return count;
        }
    }
}

/// Encodes `value` in `base` into `out` and returns the encoded length,
/// sign and terminator included.
///
/// # Errors
///
/// - `U8KitError::InvalidBase` if `base` is not in `[2, 36]`
/// - `U8KitError::BufferTooSmall` if `out` cannot hold the encoding;
///   `out` is left untouched. A buffer of [`MAX_ENCODED_LEN`] bytes always
///   suffices.
#[allow(clippy::indexing_slicing)]
pub fn encode(value: i32, base: u32, out: &mut [u8]) -> Result<usize, U8KitError> {
    check_base(base)?;

    let mut digits = [0u8; MAX_ENCODED_LEN];
    let count = write_digits_reversed(value.unsigned_abs(), base, &mut digits);

    let sign = usize::from(value < 0);
    let required = sign + count + 1;
    if out.len() < required {
        return Err(U8KitError::BufferTooSmall {
            required,
            provided: out.len(),
        });
    }

    memory::reverse(&mut digits, count);
    if value < 0 {
        out[0] = SIGN;
    }
    memory::copy(&digits, &mut out[sign..], count);
    out[sign + count] = TERMINATOR;

    Ok(required)
}

/// Decodes the first `digit_count` bytes of `text`, an encoding as written
/// by [`encode`] whose last byte is the NUL terminator.
///
/// # Errors
///
/// - `U8KitError::InvalidBase` if `base` is not in `[2, 36]`
/// - `U8KitError::RegionOutOfBounds` if `digit_count > text.len()`
/// - `U8KitError::EmptyDigits` if there are no digits
/// - `U8KitError::MissingTerminator` if `text[digit_count - 1]` is not NUL
/// - any error of [`decode_digits`]
#[allow(clippy::indexing_slicing)]
pub fn decode(text: &[u8], digit_count: usize, base: u32) -> Result<i32, U8KitError> {
    check_base(base)?;
    if digit_count > text.len() {
        return Err(U8KitError::RegionOutOfBounds {
            offset: 0,
            length: digit_count,
            available: text.len(),
        });
    }
    let Some(end) = digit_count.checked_sub(1) else {
        return Err(U8KitError::EmptyDigits);
    };
    if text[end] != TERMINATOR {
        return Err(U8KitError::MissingTerminator { position: end });
    }
    decode_digits(&text[..end], base)
}

/// Decodes an unterminated digit string with an optional leading `-`.
///
/// Digits are accumulated from the least significant position up, each
/// weighted by the next power of `base`.
///
/// # Errors
///
/// - `U8KitError::InvalidBase` if `base` is not in `[2, 36]`
/// - `U8KitError::EmptyDigits` if no digit follows the optional sign
/// - `U8KitError::InvalidDigit` for the least significant byte that is
///   not a digit of `base`
/// - `U8KitError::DecodeOverflow` if the value does not fit `i32`
pub fn decode_digits(digits: &[u8], base: u32) -> Result<i32, U8KitError> {
    check_base(base)?;

    let (negative, body, offset) = match digits.split_first() {
        Some((&SIGN, rest)) => (true, rest, 1),
        _ => (false, digits, 0),
    };
    if body.is_empty() {
        return Err(U8KitError::EmptyDigits);
    }

    let mut magnitude: u32 = 0;
    let mut place: Option<u32> = Some(1);
    let mut overflowed = false;
    for (position, &byte) in body.iter().enumerate().rev() {
        let digit = char_to_digit(byte, base).ok_or(U8KitError::InvalidDigit {
            byte,
            position: position + offset,
            base,
        })?;
        // Leading zeros may push `place` past u32 without changing the value.
        if digit != 0 {
            match place
                .and_then(|place| digit.checked_mul(place))
                .and_then(|term| magnitude.checked_add(term))
            {
                Some(sum) => magnitude = sum,
                None => overflowed = true,
            }
        }
        place = place.and_then(|place| place.checked_mul(base));
    }
    if overflowed {
        return Err(U8KitError::DecodeOverflow);
    }

    let signed = if negative {
        -i64::from(magnitude)
    } else {
        i64::from(magnitude)
    };
    i32::try_from(signed).map_err(|_| U8KitError::DecodeOverflow)
}

/// One encoded integer held on the stack.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct EncodedInt {
    bytes: [u8; MAX_ENCODED_LEN],
    len: usize,
}

impl EncodedInt {
    /// Encodes `value` in `base`.
    ///
    /// # Errors
    ///
    /// Returns `U8KitError::InvalidBase` if `base` is not in `[2, 36]`.
    pub fn new(value: i32, base: u32) -> Result<Self, U8KitError> {
        let mut bytes = [0u8; MAX_ENCODED_LEN];
        let len = encode(value, base, &mut bytes)?;
        Ok(Self { bytes, len })
    }

    /// Encoded length as returned by [`encode`], terminator included.
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        self.len
    }

    /// Sign and digits, without the terminator.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.bytes.get(..self.len - 1).unwrap_or_default()
    }

    /// Sign, digits and terminator.
    #[must_use]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        self.bytes.get(..self.len).unwrap_or_default()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        // Only ASCII digits and '-' are ever written.
        core::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }
}

impl fmt::Display for EncodedInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for EncodedInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EncodedInt").field(&self.as_str()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_mapping_bounds() {
        assert_eq!(digit_to_char(0, 2), Some(b'0'));
        assert_eq!(digit_to_char(9, 10), Some(b'9'));
        assert_eq!(digit_to_char(10, 16), Some(b'A'));
        assert_eq!(digit_to_char(35, 36), Some(b'Z'));
        assert_eq!(digit_to_char(10, 10), None);
        assert_eq!(digit_to_char(0, 1), None);
        assert_eq!(digit_to_char(0, 37), None);
    }

    #[test]
    fn test_char_to_digit_inverts_mapping() {
        for base in MIN_BASE..=MAX_BASE {
            for value in 0..base {
                let byte = digit_to_char(value, base).unwrap();
                assert_eq!(char_to_digit(byte, base), Some(value));
                assert_eq!(char_to_digit(byte.to_ascii_lowercase(), base), Some(value));
            }
        }
    }

    #[test]
    fn test_char_to_digit_rejects_out_of_base() {
        assert_eq!(char_to_digit(b'2', 2), None);
        assert_eq!(char_to_digit(b'G', 16), None);
        assert_eq!(char_to_digit(b'-', 10), None);
        assert_eq!(char_to_digit(b' ', 36), None);
    }

    #[test]
    fn test_write_digits_reversed_zero() {
        let mut digits = [0u8; MAX_ENCODED_LEN];
        assert_eq!(write_digits_reversed(0, 10, &mut digits), 1);
        assert_eq!(digits[0], b'0');
    }

    #[test]
    fn test_write_digits_reversed_order() {
        let mut digits = [0u8; MAX_ENCODED_LEN];
        let count = write_digits_reversed(1234, 10, &mut digits);
        assert_eq!(&digits[..count], b"4321");
    }
}
