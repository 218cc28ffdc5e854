#![allow(dead_code)]

use rand::{Rng, SeedableRng, rngs::StdRng};
use textindex::OutputElement;

pub fn random_texts(seed: u64, count: usize, max_len: usize, alphabet_size: u8) -> Vec<Vec<u8>> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|_| {
            let len = rng.random_range(0..=max_len);
            (0..len)
                .map(|_| b'a' + rng.random_range(0..alphabet_size))
                .collect()
        })
        .collect()
}

pub fn naive_suffix_array<S: Ord>(text: &[S]) -> Vec<usize> {
    let mut suffix_array: Vec<usize> = (0..text.len()).collect();
    suffix_array.sort_by(|&a, &b| text[a..].cmp(&text[b..]));
    suffix_array
}

pub fn is_suffix_array<S: Ord, O: OutputElement>(text: &[S], maybe_suffix_array: &[O]) -> bool {
    if text.len() != maybe_suffix_array.len() {
        return false;
    }

    let mut seen = vec![false; text.len()];
    for entry in maybe_suffix_array {
        let offset = entry.index();
        if offset >= text.len() || seen[offset] {
            return false;
        }
        seen[offset] = true;
    }

    for indices in maybe_suffix_array.windows(2) {
        let previous = indices[0].index();
        let current = indices[1].index();

        if text[previous..] > text[current..] {
            return false;
        }
    }

    true
}

pub fn longest_common_prefix<S: Eq>(t1: &[S], t2: &[S]) -> usize {
    std::iter::zip(t1, t2).take_while(|(c1, c2)| c1 == c2).count()
}

pub fn is_lcp<S: Eq, O: OutputElement>(text: &[S], suffix_array: &[O], lcp: &[O]) -> bool {
    if lcp.len() != suffix_array.len().saturating_sub(1) {
        return false;
    }

    suffix_array.windows(2).zip(lcp).all(|(indices, value)| {
        let first = indices[0].index();
        let second = indices[1].index();

        longest_common_prefix(&text[first..], &text[second..]) == value.index()
    })
}

pub fn naive_z_array<S: Eq>(text: &[S]) -> Vec<usize> {
    (0..text.len())
        .map(|i| longest_common_prefix(&text[i..], text))
        .collect()
}

pub fn naive_occurrences<S: Eq>(text: &[S], pattern: &[S]) -> Vec<usize> {
    if pattern.is_empty() || pattern.len() > text.len() {
        return Vec::new();
    }

    text.windows(pattern.len())
        .enumerate()
        .filter(|(_, window)| *window == pattern)
        .map(|(offset, _)| offset)
        .collect()
}

pub fn occurs_at_least_twice<S: Eq>(text: &[S], needle: &[S]) -> bool {
    naive_occurrences(text, needle).len() >= 2
}
