//! Random pseudo-text for exercising the codec.
//!
//! Letters are generated in runs of at most `WORD_LEN` and runs are joined with
//! a single space, so the output looks like a paragraph of short random words.
//! Generation is split with the same fork-join helper as the codec; every run
//! seeds its own generator from the paragraph seed and its position, so a given
//! seed always gives the same paragraph regardless of scheduling.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;

use super::fork_join::bisect;

/// Longest run of letters between spaces.
pub const WORD_LEN: usize = 5;
const ALPHABET: u8 = 26;

/// A paragraph built from `size` random letters plus the spaces between words.
pub fn random_paragraph(size: usize, capitals: bool, seed: u64) -> String {
    let base = if capitals { b'A' } else { b'a' };
    bisect(
        0..size,
        WORD_LEN,
        &|range: Range<usize>| word(range, base, seed),
        &|left: String, right: String| {
            if left.is_empty() {
                return right;
            }
            let mut out = left;
            out.push(' ');
            out.push_str(&right);
            out
        },
    )
}

fn word(range: Range<usize>, base: u8, seed: u64) -> String {
    let mut rng = StdRng::seed_from_u64(seed ^ (range.start as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15));
    range
        .map(|_| (base + rng.gen_range(0..ALPHABET)) as char)
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn letter_count_matches_size() {
        let text = random_paragraph(123, false, 7);
        assert_eq!(text.chars().filter(|c| c.is_ascii_lowercase()).count(), 123);
        assert!(text.chars().all(|c| c == ' ' || c.is_ascii_lowercase()));
    }

    #[test]
    fn words_are_short() {
        let text = random_paragraph(500, true, 1);
        assert!(text.split(' ').all(|w| !w.is_empty() && w.len() <= WORD_LEN));
        assert!(text.chars().all(|c| c == ' ' || c.is_ascii_uppercase()));
    }

    #[test]
    fn same_seed_same_text() {
        assert_eq!(random_paragraph(300, false, 42), random_paragraph(300, false, 42));
        assert_ne!(random_paragraph(300, false, 42), random_paragraph(300, false, 43));
    }

    #[test]
    fn zero_size_is_empty() {
        assert_eq!(random_paragraph(0, false, 0), "");
    }
}
