use alloc::vec::Vec;
use core::ops::{Deref, DerefMut};

/// A heap region of 32-bit words, zero-initialised.
///
/// The region is released when the buffer is dropped or passed to
/// [`release`], so it can neither leak nor be released twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBuffer {
    words: Vec<u32>,
}

impl WordBuffer {
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Size of the region in bytes.
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.words.len() * core::mem::size_of::<u32>()
    }

    /// Views the words as raw bytes, in native byte order.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.words)
    }

    /// Views the words as mutable raw bytes, in native byte order.
    #[must_use]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        bytemuck::cast_slice_mut(&mut self.words)
    }
}

impl Deref for WordBuffer {
    type Target = [u32];

    fn deref(&self) -> &[u32] {
        &self.words
    }
}

impl DerefMut for WordBuffer {
    fn deref_mut(&mut self) -> &mut [u32] {
        &mut self.words
    }
}

/// Allocates room for `count` 32-bit words.
///
/// Returns `None` if the request cannot be satisfied, either because its
/// size overflows or because the allocator refuses it. Never aborts.
#[must_use]
pub fn allocate_words(count: usize) -> Option<WordBuffer> {
    let mut words = Vec::new();
    if let Err(err) = words.try_reserve_exact(count) {
        log::trace!("allocation of {count} words failed: {err}");
        return None;
    }
    words.resize(count, 0);
    log::trace!("allocated {count} words");
    Some(WordBuffer { words })
}

/// Releases a buffer obtained from [`allocate_words`].
pub fn release(buffer: WordBuffer) {
    log::trace!("released {} words", buffer.len());
    drop(buffer);
}
