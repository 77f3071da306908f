use log::debug;
use std::ops::Range;
use std::sync::{Mutex, PoisonError};

use super::fork_join::{bisect, chunk_count};
use crate::huffman_coding::symbol_table::{FrequencyTable, SymbolLookup};

/// How concurrent chunks share the table while counting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CountMode {
    /// One table behind a mutex. Each chunk holds the lock for its whole scan.
    Locked,
    /// Every chunk counts into its own table; tables merge left to right on join.
    #[default]
    Merged,
}

/// Returns a frequency table of the input data, forking above `threshold` symbols.
/// The table is in first-occurrence order and is not yet sorted by count.
pub fn freqs(
    data: &[char],
    threshold: usize,
    mode: CountMode,
    lookup: SymbolLookup,
) -> FrequencyTable {
    debug!(
        "Counting {} symbols in {} chunks ({:?})",
        data.len(),
        chunk_count(data.len(), threshold),
        mode
    );
    match mode {
        CountMode::Locked => locked(data, threshold, lookup),
        CountMode::Merged => merged(data, threshold, lookup),
    }
}

/// Scan one chunk into `table`. Positions are absolute input indices.
fn scan(data: &[char], range: Range<usize>, table: &mut FrequencyTable) {
    for i in range {
        table.record(data[i], i);
    }
}

fn locked(data: &[char], threshold: usize, lookup: SymbolLookup) -> FrequencyTable {
    let shared = Mutex::new(FrequencyTable::new(lookup));
    bisect(
        0..data.len(),
        threshold,
        &|range: Range<usize>| {
            // record() never leaves a partial entry, so a poisoned table is consistent.
            let mut table = shared.lock().unwrap_or_else(PoisonError::into_inner);
            scan(data, range, &mut table);
        },
        &|_, _| (),
    );
    shared.into_inner().unwrap_or_else(PoisonError::into_inner)
}

fn merged(data: &[char], threshold: usize, lookup: SymbolLookup) -> FrequencyTable {
    bisect(
        0..data.len(),
        threshold,
        &|range: Range<usize>| {
            let mut table = FrequencyTable::new(lookup);
            scan(data, range, &mut table);
            table
        },
        &|mut left: FrequencyTable, right| {
            left.merge(right);
            left
        },
    )
}

#[cfg(test)]
mod test {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn empty_input_gives_empty_table() {
        for mode in [CountMode::Locked, CountMode::Merged] {
            assert!(freqs(&[], 4, mode, SymbolLookup::Scan).is_empty());
        }
    }

    #[test]
    fn counts_match_literal_occurrences() {
        let text = "What if the confident courage ate the win?";
        let data = chars(text);
        for mode in [CountMode::Locked, CountMode::Merged] {
            for threshold in [1, 3, 4, 100] {
                let table = freqs(&data, threshold, mode, SymbolLookup::Hashed);
                for entry in table.iter() {
                    let literal = text.chars().filter(|&c| c == entry.symbol).count() as u64;
                    assert_eq!(entry.count, literal, "{:?} t={}", mode, threshold);
                }
                assert_eq!(table.total(), data.len() as u64);
            }
        }
    }

    #[test]
    fn merged_keeps_first_occurrence_order() {
        let table = freqs(&chars("banana split"), 2, CountMode::Merged, SymbolLookup::Scan);
        let order: String = table.iter().map(|e| e.symbol).collect();
        assert_eq!(order, "ban split");
    }

    #[test]
    fn modes_agree_after_sorting() {
        let data = chars("mississippi river banks");
        let mut a = freqs(&data, 3, CountMode::Locked, SymbolLookup::Scan);
        let mut b = freqs(&data, 3, CountMode::Merged, SymbolLookup::Scan);
        a.sort_by_count();
        b.sort_by_count();
        assert_eq!(a.entries(), b.entries());
    }
}
