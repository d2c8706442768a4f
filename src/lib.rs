#![no_std]

//! `u8kit`: byte-array statistics, raw buffer primitives and a base-N
//! integer codec for embedded targets.
//!
//! Every operation works in place on memory owned by the caller. There is
//! no global state, and apart from the optional word buffers nothing is
//! allocated.
//!
//! This crate is `no_std` compatible. The default features pull in `alloc`
//! for [`words`] and enable the [`report`] formatting helpers:
//! ```toml
//! [dependencies]
//! u8kit = { version = "0.1", default-features = false }
//! ```
//!
//! # Statistics
//!
//! [`stats::sort_descending`] orders an array from largest to smallest with
//! an in-place quicksort. [`stats::median`], [`stats::maximum`] and
//! [`stats::minimum`] expect that order and do not check it;
//! [`stats::mean`] works on any order. [`Statistics::compute`] does both
//! steps at once:
//!
//! ```
//! # use u8kit::Statistics;
//! let mut data = [34u8, 201, 190, 154, 8, 194, 2, 6];
//! let stats = Statistics::compute(&mut data).unwrap();
//!
//! assert_eq!(data, [201, 194, 190, 154, 34, 8, 6, 2]);
//! assert_eq!(stats.median, 94);
//! assert_eq!(stats.mean, 98);
//! assert_eq!(stats.maximum, 201);
//! assert_eq!(stats.minimum, 2);
//! ```
//!
//! Empty arrays have no statistics and yield [`U8KitError::EmptyArray`].
//!
//! # Buffer Operations
//!
//! [`memory`] provides single-byte access, fills, copies, moves and
//! reversal. Overlapping regions can only live in one buffer, so overlap is
//! expressed with offsets: [`memory::move_within`] is overlap-safe while
//! [`memory::copy_forward`] is not.
//!
//! ```
//! # use u8kit::memory;
//! let mut buf = *b"abcdef";
//! memory::move_within(&mut buf, 0, 1, 5);
//! assert_eq!(&buf, b"aabcde");
//!
//! let mut buf = *b"abcdef";
//! memory::copy_forward(&mut buf, 0, 1, 5);
//! assert_eq!(&buf, b"aaaaaa");
//! ```
//!
//! # Codec
//!
//! [`codec::encode`] and [`codec::decode`] convert between `i32` and
//! NUL-terminated digit strings in any base from 2 to 36:
//!
//! ```
//! # use u8kit::codec::{decode, encode, MAX_ENCODED_LEN};
//! let mut text = [0u8; MAX_ENCODED_LEN];
//! let len = encode(i32::MIN, 2, &mut text).unwrap();
//! assert_eq!(len, MAX_ENCODED_LEN);
//! assert_eq!(decode(&text, len, 2), Ok(i32::MIN));
//! ```

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod codec;
mod error;
pub mod memory;
#[cfg(feature = "display")]
pub mod report;
pub mod stats;
#[cfg(feature = "alloc")]
pub mod words;

// Re-export public types
pub use codec::EncodedInt;
pub use error::U8KitError;
#[cfg(feature = "display")]
pub use report::ArrayDisplay;
pub use stats::Statistics;
#[cfg(feature = "alloc")]
pub use words::{allocate_words, release, WordBuffer};
