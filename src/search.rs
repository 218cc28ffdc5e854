//! Exact pattern search with the Z-array.
//!
//! The pattern, a separator and the text are joined and the Z-array of the result is computed. An
//! offset in the text part whose Z-value equals the pattern length is the end of a full match. The
//! separator must not be equal to any symbol, so the symbols are wrapped into `Some` and the separator
//! is `None`. This way no symbol value has to be reserved.

use std::iter;

use tracing::debug;

use crate::{IndexError, z_array::build_z_array};

/// Iterator over the start offsets of all occurrences of a pattern, in ascending order.
///
/// The Z-array is computed eagerly, the matches are extracted lazily. Clone the iterator (or call
/// [`PatternMatches::rewind`]) to scan the matches again without recomputing anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatches {
    z_array: Vec<usize>,
    pattern_len: usize,
    next: usize,
}

impl PatternMatches {
    pub fn pattern_len(&self) -> usize {
        self.pattern_len
    }

    pub fn rewind(&mut self) {
        self.next = self.pattern_len + 1;
    }
}

impl Iterator for PatternMatches {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while let Some(&value) = self.z_array.get(self.next) {
            let position = self.next;
            self.next += 1;

            if value == self.pattern_len {
                return Some(position - self.pattern_len - 1);
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.z_array.len().saturating_sub(self.next)))
    }
}

impl iter::FusedIterator for PatternMatches {}

/// Find all (possibly overlapping) occurrences of `pattern` in `text`.
///
/// ```
/// let matches: Vec<_> = textindex::search_pattern(b"AGAGAGA", b"AGA").unwrap().collect();
///
/// assert_eq!(matches, vec![0, 2, 4]);
/// ```
///
/// # Errors
///
/// If the pattern is empty or longer than the text.
pub fn search_pattern<S: PartialEq>(
    text: &[S],
    pattern: &[S],
) -> Result<PatternMatches, IndexError> {
    if pattern.is_empty() {
        return Err(IndexError::EmptyPattern);
    }

    if pattern.len() > text.len() {
        return Err(IndexError::PatternLongerThanText {
            pattern_len: pattern.len(),
            text_len: text.len(),
        });
    }

    let joined: Vec<Option<&S>> = pattern
        .iter()
        .map(Some)
        .chain(iter::once(None))
        .chain(text.iter().map(Some))
        .collect();

    let z_array = build_z_array(&joined);

    debug!(
        pattern_len = pattern.len(),
        text_len = text.len(),
        "computed z-array for pattern search"
    );

    let mut matches = PatternMatches {
        z_array,
        pattern_len: pattern.len(),
        next: 0,
    };
    matches.rewind();

    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewind_restarts() {
        let mut matches = search_pattern(b"abababab", b"abab").unwrap();

        assert_eq!(matches.by_ref().collect::<Vec<_>>(), vec![0, 2, 4]);
        assert_eq!(matches.next(), None);

        matches.rewind();
        assert_eq!(matches.next(), Some(0));
    }

    #[test]
    fn separator_stops_matches() {
        // without a separator, the pattern would continue matching into the text
        let matches: Vec<_> = search_pattern(b"aaa", b"aa").unwrap().collect();

        assert_eq!(matches, vec![0, 1]);
    }
}
