//! The longest repeated substring, read off the maximum of the LCP array.

use std::ops::Range;

use crate::{Symbol, lcp::build_lcp, lcp::max_lcp_position, suffix_array::build_suffix_array};

/// A substring of length `len` that occurs at both `start` and `other_start`.
///
/// `start` belongs to the lexicographically smaller of the two suffixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Repeat {
    pub start: usize,
    pub other_start: usize,
    pub len: usize,
}

impl Repeat {
    pub fn range(&self) -> Range<usize> {
        self.start..self.start + self.len
    }

    pub fn other_range(&self) -> Range<usize> {
        self.other_start..self.other_start + self.len
    }
}

/// The range of the longest substring that occurs at least twice in the text.
///
/// The occurrences may overlap. Among several repeats of maximum length, the one that comes first in
/// suffix array order is returned. If no symbol occurs twice, the result is `None`.
///
/// ```
/// let text = b"aabaabaa";
/// let range = textindex::longest_repeated_substring(text).unwrap();
///
/// assert_eq!(&text[range], b"aabaa");
/// ```
pub fn longest_repeated_substring<S: Symbol>(text: &[S]) -> Option<Range<usize>> {
    let suffix_array = build_suffix_array(text);
    let lcp = match build_lcp(text, &suffix_array) {
        Ok(lcp) => lcp,
        Err(e) => unreachable!("suffix array construction produced an invalid suffix array: {e}"),
    };

    let (position, len) = max_lcp_position(&lcp)?;
    let start = suffix_array[position];

    Some(start..start + len)
}
