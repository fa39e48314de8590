//! Splitting an input into contiguous partitions.

use std::ops::Range;
use wordhuff_core::{Result, WordHuffError};

/// Split `0..len` into `partitions` contiguous ranges.
///
/// Range `i` starts at `len * i / partitions`; the last range always ends at
/// `len`, so the ranges tile the input with no gaps or overlaps. When `len`
/// is smaller than `partitions` some ranges are empty.
///
/// Fails with [`WordHuffError::InvalidInput`] if `partitions` is zero.
///
/// # Example
///
/// ```
/// use wordhuff_count::partition_ranges;
///
/// assert_eq!(partition_ranges(10, 3).unwrap(), vec![0..3, 3..6, 6..10]);
/// assert!(partition_ranges(10, 0).is_err());
/// ```
pub fn partition_ranges(len: usize, partitions: usize) -> Result<Vec<Range<usize>>> {
    if partitions == 0 {
        return Err(WordHuffError::invalid_input("partition count must be at least 1"));
    }

    let ranges = (0..partitions)
        .map(|i| {
            let start = split_point(len, i, partitions);
            let end = if i == partitions - 1 {
                len
            } else {
                split_point(len, i + 1, partitions)
            };
            start..end
        })
        .collect();
    Ok(ranges)
}

/// `len * i / partitions` without overflowing for large inputs.
#[inline]
fn split_point(len: usize, i: usize, partitions: usize) -> usize {
    ((len as u128 * i as u128) / partitions as u128) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_split() {
        assert_eq!(partition_ranges(6, 3).unwrap(), vec![0..2, 2..4, 4..6]);
    }

    #[test]
    fn test_remainder_goes_to_later_ranges() {
        let ranges = partition_ranges(11, 4).unwrap();
        assert_eq!(ranges, vec![0..2, 2..5, 5..8, 8..11]);
    }

    #[test]
    fn test_more_partitions_than_items() {
        let ranges = partition_ranges(3, 10).unwrap();
        assert_eq!(ranges.len(), 10);
        assert_eq!(ranges.iter().map(|r| r.len()).sum::<usize>(), 3);
        assert_eq!(ranges.last().unwrap().end, 3);
    }

    #[test]
    fn test_empty_input() {
        let ranges = partition_ranges(0, 4).unwrap();
        assert!(ranges.iter().all(|r| r.is_empty()));
    }

    #[test]
    fn test_ranges_tile_input() {
        for len in 0..50 {
            for partitions in 1..12 {
                let ranges = partition_ranges(len, partitions).unwrap();
                assert_eq!(ranges[0].start, 0);
                assert_eq!(ranges[partitions - 1].end, len);
                for pair in ranges.windows(2) {
                    assert_eq!(pair[0].end, pair[1].start);
                }

                let shortest = ranges.iter().map(|r| r.len()).min().unwrap();
                let longest = ranges.iter().map(|r| r.len()).max().unwrap();
                assert!(
                    longest - shortest <= 1,
                    "len = {len}, partitions = {partitions}: {ranges:?}"
                );
            }
        }
    }

    #[test]
    fn test_zero_partitions_rejected() {
        assert!(matches!(
            partition_ranges(5, 0),
            Err(WordHuffError::InvalidInput { .. })
        ));
    }
}
