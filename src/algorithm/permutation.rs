//! Exhaustive rearrangement search over a multiset of letters
//!
//! Used as the last resort when no direct combination of two fragments is
//! a word. The search is factorial in the number of letters, which is
//! acceptable only for the handful of letters in a puzzle fragment; callers
//! bound the length before starting it.

use crate::io::corpus::Corpus;
use bitvec::vec::BitVec;
use std::collections::BTreeSet;

/// Visit every distinct ordering of the characters in `letters`
///
/// Repeated characters are treated as indistinguishable, so `"ee"` yields a
/// single ordering. Orderings are visited in lexicographic order.
pub fn for_each_permutation<F>(letters: &str, mut visit: F)
where
    F: FnMut(&str),
{
    let mut pool: Vec<char> = letters.chars().collect();
    pool.sort_unstable();

    let mut used: BitVec = BitVec::repeat(false, pool.len());
    let mut current = String::with_capacity(letters.len());
    extend_permutation(&pool, &mut used, 0, &mut current, &mut visit);
}

fn extend_permutation<F>(
    pool: &[char],
    used: &mut BitVec,
    placed: usize,
    current: &mut String,
    visit: &mut F,
) where
    F: FnMut(&str),
{
    if placed == pool.len() {
        visit(current.as_str());
        return;
    }

    let mut previous: Option<char> = None;
    for (index, &letter) in pool.iter().enumerate() {
        if used.get(index).is_some_and(|bit| *bit) || previous == Some(letter) {
            continue;
        }
        previous = Some(letter);

        used.set(index, true);
        current.push(letter);
        extend_permutation(pool, used, placed + 1, current, visit);
        current.pop();
        used.set(index, false);
    }
}

/// All corpus words formed by rearranging `word` and `add` together
pub fn word_permutations<C: Corpus + ?Sized>(corpus: &C, word: &str, add: &str) -> BTreeSet<String> {
    let letters = format!("{word}{add}");
    let mut found = BTreeSet::new();
    for_each_permutation(&letters, |candidate| {
        if corpus.contains(candidate) {
            found.insert(candidate.to_string());
        }
    });
    found
}
