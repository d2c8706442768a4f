use thiserror::Error;

/// Error types for `u8kit` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum U8KitError {
    /// Statistics query on an array without elements
    #[error("Empty array: statistics need at least one element")]
    EmptyArray,
    /// Single-element access beyond the buffer
    #[error("Index out of bounds: index {index} is beyond buffer length {length}")]
    IndexOutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Length of the buffer
        length: usize,
    },
    /// Region `[offset, offset + length)` does not fit the buffer
    #[error("Region out of bounds: {length} bytes at offset {offset}, but only {available} bytes available")]
    RegionOutOfBounds {
        /// Start of the region
        offset: usize,
        /// Length of the region
        length: usize,
        /// Length of the buffer
        available: usize,
    },
    /// Numeric base outside `[2, 36]`
    #[error("Invalid base: {base} is not in 2..=36")]
    InvalidBase {
        /// Base that was requested
        base: u32,
    },
    /// Character is not a digit of the base
    #[error("Invalid digit: byte {byte:#04x} at position {position} is not a base-{base} digit")]
    InvalidDigit {
        /// Offending byte
        byte: u8,
        /// Position of the byte in the input
        position: usize,
        /// Base of the encoding
        base: u32,
    },
    /// Encoding has a sign but no digits, or nothing at all
    #[error("Empty digits: encoding contains no digits")]
    EmptyDigits,
    /// Encoding is not NUL-terminated where its length says it ends
    #[error("Missing terminator: expected NUL at position {position}")]
    MissingTerminator {
        /// Position where the terminator was expected
        position: usize,
    },
    /// Decoded value does not fit a signed 32-bit integer
    #[error("Decode overflow: value does not fit in i32")]
    DecodeOverflow,
    /// Output buffer cannot hold the encoding
    #[error("Buffer too small: required {required} bytes, but only {provided} bytes provided")]
    BufferTooSmall {
        /// Bytes needed, terminator included
        required: usize,
        /// Bytes provided
        provided: usize,
    },
}
