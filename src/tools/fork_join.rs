//! Divide-and-conquer helper used by the frequency counter and the encoder.
//!
//! A range longer than the threshold is split at its midpoint. The left half is
//! offered to rayon as a stealable job while the current thread works the right
//! half, and both results are joined before combining. Ranges at or below the
//! threshold run inline on the calling thread.

use log::trace;
use std::ops::Range;

/// Run `leaf` over every sub-range of `range` no longer than `threshold` and
/// fold the results back together with `combine(left, right)`.
///
/// `combine` always receives the lower range first, so order sensitive results
/// (like concatenated codewords) come out in input order. A threshold of zero is
/// treated as one.
pub fn bisect<T, L, C>(range: Range<usize>, threshold: usize, leaf: &L, combine: &C) -> T
where
    T: Send,
    L: Fn(Range<usize>) -> T + Sync,
    C: Fn(T, T) -> T + Sync,
{
    let threshold = threshold.max(1);
    if range.len() > threshold {
        let mid = range.start + range.len() / 2;
        trace!("fork {:?} at {}", range, mid);
        // rayon runs the first closure here and makes the second available to
        // other workers, so the right half stays inline.
        let (right, left) = rayon::join(
            || bisect(mid..range.end, threshold, leaf, combine),
            || bisect(range.start..mid, threshold, leaf, combine),
        );
        return combine(left, right);
    }
    leaf(range)
}

/// Number of sequential chunks `bisect` will produce for a range of `len`.
/// Useful for sizing and for logging fan-out.
pub fn chunk_count(len: usize, threshold: usize) -> usize {
    let threshold = threshold.max(1);
    if len > threshold {
        let half = len / 2;
        chunk_count(half, threshold) + chunk_count(len - half, threshold)
    } else {
        1
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn sums_match_sequential() {
        let data: Vec<u64> = (1..=1000).collect();
        let total = bisect(
            0..data.len(),
            7,
            &|r: Range<usize>| data[r].iter().sum::<u64>(),
            &|a, b| a + b,
        );
        assert_eq!(total, 500_500);
    }

    #[test]
    fn keeps_range_order() {
        let data: Vec<char> = "the quick brown fox".chars().collect();
        let joined = bisect(
            0..data.len(),
            2,
            &|r: Range<usize>| data[r].iter().collect::<String>(),
            &|a, b| a + &b,
        );
        assert_eq!(joined, "the quick brown fox");
    }

    #[test]
    fn leaves_respect_threshold() {
        let sizes = bisect(
            0..103,
            10,
            &|r: Range<usize>| vec![r.len()],
            &|mut a, b| {
                a.extend(b);
                a
            },
        );
        assert!(sizes.iter().all(|&s| s <= 10));
        assert_eq!(sizes.iter().sum::<usize>(), 103);
        assert_eq!(sizes.len(), chunk_count(103, 10));
    }

    #[test]
    fn zero_threshold_terminates() {
        let n = bisect(0..5, 0, &|r: Range<usize>| r.len(), &|a, b| a + b);
        assert_eq!(n, 5);
    }

    #[test]
    fn empty_range_runs_leaf_once() {
        let calls = bisect(0..0, 4, &|_r: Range<usize>| 1, &|a, b| a + b);
        assert_eq!(calls, 1);
    }
}
