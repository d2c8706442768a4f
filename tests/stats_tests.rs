use u8kit::stats::{is_sorted_descending, maximum, mean, median, minimum, sort_descending};
use u8kit::{Statistics, U8KitError};

const FIXTURE: [u8; 40] = [
    34, 201, 190, 154, 8, 194, 2, 6, 114, 88, 45, 76, 123, 87, 25, 23, 200, 122, 150, 90, 92, 87,
    177, 244, 201, 6, 12, 60, 8, 2, 5, 67, 7, 87, 250, 230, 99, 3, 100, 90,
];

const FIXTURE_SORTED: [u8; 40] = [
    250, 244, 230, 201, 201, 200, 194, 190, 177, 154, 150, 123, 122, 114, 100, 99, 92, 90, 90, 88,
    87, 87, 87, 76, 67, 60, 45, 34, 25, 23, 12, 8, 8, 7, 6, 6, 5, 3, 2, 2,
];

/// Deterministic byte generator for permutation checks.
fn pseudo_random(len: usize, seed: u32) -> Vec<u8> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            (state >> 16) as u8
        })
        .collect()
}

fn histogram(arr: &[u8]) -> [usize; 256] {
    let mut counts = [0usize; 256];
    for &value in arr {
        counts[value as usize] += 1;
    }
    counts
}

#[test]
fn test_sort_fixture() {
    let mut data = FIXTURE;
    sort_descending(&mut data);
    assert_eq!(data, FIXTURE_SORTED);
}

#[test]
fn test_sort_empty_and_single() {
    let mut empty: [u8; 0] = [];
    sort_descending(&mut empty);
    assert!(empty.is_empty());

    let mut single = [7u8];
    sort_descending(&mut single);
    assert_eq!(single, [7]);
}

#[test]
fn test_sort_is_permutation_and_non_increasing() {
    for (len, seed) in [(2, 1), (3, 2), (17, 3), (128, 4), (1000, 5)] {
        let original = pseudo_random(len, seed);
        let mut data = original.clone();
        sort_descending(&mut data);

        assert!(is_sorted_descending(&data), "len {len} not sorted");
        assert_eq!(histogram(&data), histogram(&original));
    }
}

#[test]
fn test_sort_idempotent() {
    let mut data = pseudo_random(257, 42);
    sort_descending(&mut data);
    let once = data.clone();
    sort_descending(&mut data);
    assert_eq!(data, once);
}

#[test]
fn test_sort_already_ordered_inputs() {
    let mut ascending: Vec<u8> = (0..=255).collect();
    sort_descending(&mut ascending);
    let expected: Vec<u8> = (0..=255).rev().collect();
    assert_eq!(ascending, expected);

    let mut descending = expected.clone();
    sort_descending(&mut descending);
    assert_eq!(descending, expected);

    let mut constant = vec![9u8; 4096];
    sort_descending(&mut constant);
    assert!(constant.iter().all(|&v| v == 9));
}

#[test]
fn test_sort_only_touches_given_slice() {
    let mut data = [1u8, 5, 3, 9, 0];
    sort_descending(&mut data[1..4]);
    assert_eq!(data, [1, 9, 5, 3, 0]);
}

#[test]
fn test_fixture_statistics() {
    assert_eq!(median(&FIXTURE_SORTED), Ok(87));
    assert_eq!(mean(&FIXTURE_SORTED), Ok(93));
    assert_eq!(maximum(&FIXTURE_SORTED), Ok(250));
    assert_eq!(minimum(&FIXTURE_SORTED), Ok(2));
}

#[test]
fn test_compute_sorts_and_summarises() {
    let mut data = FIXTURE;
    let stats = Statistics::compute(&mut data).unwrap();

    assert_eq!(data, FIXTURE_SORTED);
    assert_eq!(
        stats,
        Statistics {
            median: 87,
            mean: 93,
            maximum: 250,
            minimum: 2,
        }
    );
}

#[test]
fn test_median_odd_and_even() {
    assert_eq!(median(&[9, 5, 1]), Ok(5));
    assert_eq!(median(&[9, 6, 5, 1]), Ok(5));
    assert_eq!(median(&[4]), Ok(4));
}

#[test]
fn test_median_even_does_not_overflow() {
    assert_eq!(median(&[255, 255]), Ok(255));
    assert_eq!(median(&[255, 254]), Ok(254));
}

#[test]
fn test_mean_floor_division() {
    assert_eq!(mean(&[1, 2, 3, 4]), Ok(2));
    assert_eq!(mean(&[4, 3, 2, 1]), Ok(2));
    assert_eq!(mean(&[255; 1000]), Ok(255));
}

#[test]
fn test_max_min_follow_position() {
    // Unsorted input is the caller's problem: first and last are reported.
    assert_eq!(maximum(&[3, 9, 1]), Ok(3));
    assert_eq!(minimum(&[3, 9, 7]), Ok(7));
}

#[test]
fn test_empty_queries_fail() {
    assert_eq!(median(&[]), Err(U8KitError::EmptyArray));
    assert_eq!(mean(&[]), Err(U8KitError::EmptyArray));
    assert_eq!(maximum(&[]), Err(U8KitError::EmptyArray));
    assert_eq!(minimum(&[]), Err(U8KitError::EmptyArray));

    let mut empty: [u8; 0] = [];
    assert_eq!(Statistics::compute(&mut empty), Err(U8KitError::EmptyArray));
}

#[test]
fn test_is_sorted_descending() {
    assert!(is_sorted_descending(&[]));
    assert!(is_sorted_descending(&[1]));
    assert!(is_sorted_descending(&[3, 3, 2]));
    assert!(!is_sorted_descending(&[1, 2]));
}
