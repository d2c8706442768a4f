use crate::error::U8KitError;

/// Summary of a byte array: median, mean, maximum and minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    /// Middle element, or floor average of the two middle elements
    pub median: u8,
    /// Floor of the arithmetic mean
    pub mean: u8,
    /// Largest element
    pub maximum: u8,
    /// Smallest element
    pub minimum: u8,
}

impl Statistics {
    /// Sorts `arr` descending in place and evaluates all four queries on it.
    ///
    /// # Errors
    ///
    /// Returns `U8KitError::EmptyArray` if `arr` has no elements.
    pub fn compute(arr: &mut [u8]) -> Result<Self, U8KitError> {
        sort_descending(arr);
        let stats = Self {
            median: median(arr)?,
            mean: mean(arr)?,
            maximum: maximum(arr)?,
            minimum: minimum(arr)?,
        };
        log::debug!("statistics over {} elements: {:?}", arr.len(), stats);
        Ok(stats)
    }
}

/// Sorts `arr` in place from largest to smallest.
///
/// Quicksort with the last element as pivot. Not stable, which is
/// unobservable for plain bytes. Recursion only descends into the smaller
/// partition, so the stack depth stays logarithmic even on sorted input.
pub fn sort_descending(arr: &mut [u8]) {
    let mut rest = arr;
    while rest.len() > 1 {
        let current = core::mem::take(&mut rest);
        let pivot = partition(current);
        let (high, low) = current.split_at_mut(pivot);
        let (_, low) = low.split_at_mut(1);
        if high.len() < low.len() {
            sort_descending(high);
            rest = low;
        } else {
            sort_descending(low);
            rest = high;
        }
    }
}

/// Moves every element `>= pivot` to the front, places the pivot right
/// after them and returns its index. `arr` must not be empty.
#[allow(clippy::indexing_slicing)]
fn partition(arr: &mut [u8]) -> usize {
    let high = arr.len() - 1;
    let pivot = arr[high];
    let mut boundary = 0;

    for j in 0..high {
        if arr[j] >= pivot {
            arr.swap(boundary, j);
            boundary += 1;
        }
    }
    arr.swap(boundary, high);

    boundary
}

/// Whether `arr` is non-increasing, the precondition of
/// [`median`], [`maximum`] and [`minimum`].
#[must_use]
pub fn is_sorted_descending(arr: &[u8]) -> bool {
    arr.windows(2).all(|pair| pair[0] >= pair[1])
}

/// Median of an array sorted descending.
///
/// For an even length the two central elements are averaged with floor
/// division.
///
/// # Errors
///
/// Returns `U8KitError::EmptyArray` if `arr` has no elements.
#[allow(clippy::indexing_slicing, clippy::cast_possible_truncation)]
pub fn median(arr: &[u8]) -> Result<u8, U8KitError> {
    if arr.is_empty() {
        return Err(U8KitError::EmptyArray);
    }
    let middle = arr.len() / 2;
    if arr.len() % 2 != 0 {
        Ok(arr[middle])
    } else {
        let sum = u16::from(arr[middle - 1]) + u16::from(arr[middle]);
        Ok((sum / 2) as u8)
    }
}

/// Mean of an array, floor-divided.
///
/// The sum is accumulated in `u64` and the quotient truncated to `u8`.
/// A mean of bytes never exceeds `u8::MAX`, so nothing is lost.
///
/// # Errors
///
/// Returns `U8KitError::EmptyArray` if `arr` has no elements.
#[allow(clippy::cast_possible_truncation)]
pub fn mean(arr: &[u8]) -> Result<u8, U8KitError> {
    if arr.is_empty() {
        return Err(U8KitError::EmptyArray);
    }
    let sum: u64 = arr.iter().map(|&value| u64::from(value)).sum();
    Ok((sum / arr.len() as u64) as u8)
}

/// Largest element of an array sorted descending: its first element.
///
/// The order is not checked. On an unsorted array the result is simply
/// the first element.
///
/// # Errors
///
/// Returns `U8KitError::EmptyArray` if `arr` has no elements.
pub fn maximum(arr: &[u8]) -> Result<u8, U8KitError> {
    arr.first().copied().ok_or(U8KitError::EmptyArray)
}

/// Smallest element of an array sorted descending: its last element.
///
/// # Errors
///
/// Returns `U8KitError::EmptyArray` if `arr` has no elements.
pub fn minimum(arr: &[u8]) -> Result<u8, U8KitError> {
    arr.last().copied().ok_or(U8KitError::EmptyArray)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_places_pivot_at_boundary() {
        let mut arr = [3, 9, 1, 7, 5];
        let pivot = partition(&mut arr);

        assert_eq!(pivot, 2);
        assert_eq!(arr[pivot], 5);
        assert!(arr[..pivot].iter().all(|&v| v >= 5));
        assert!(arr[pivot + 1..].iter().all(|&v| v < 5));
    }

    #[test]
    fn test_partition_all_equal() {
        let mut arr = [4, 4, 4, 4];
        assert_eq!(partition(&mut arr), 3);
        assert_eq!(arr, [4, 4, 4, 4]);
    }

    #[test]
    fn test_partition_single_element() {
        let mut arr = [42];
        assert_eq!(partition(&mut arr), 0);
    }
}
