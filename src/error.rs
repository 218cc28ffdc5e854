use std::fmt;

/// Precondition violations reported by the constructions and queries of this crate.
///
/// Internal invariant violations are not represented here, they panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexError {
    /// The text has more positions than the chosen output element type can address.
    TextTooLong { len: usize, max: u64 },
    /// A borrowed output buffer does not have the length required by the construction.
    BufferLengthMismatch { expected: usize, actual: usize },
    /// The suffix array is not a permutation of the offsets of the text.
    InvalidSuffixArray,
    EmptyPattern,
    PatternLongerThanText { pattern_len: usize, text_len: usize },
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::TextTooLong { len, max } => write!(
                f,
                "the text is too long for the chosen output type. Text len: {len}, Max allowed len: {max}"
            ),
            Self::BufferLengthMismatch { expected, actual } => write!(
                f,
                "the output buffer has length {actual}, but the construction requires length {expected}"
            ),
            Self::InvalidSuffixArray => {
                f.write_str("the suffix array is not a permutation of the text offsets")
            }
            Self::EmptyPattern => f.write_str("cannot search for an empty pattern"),
            Self::PatternLongerThanText {
                pattern_len,
                text_len,
            } => write!(
                f,
                "the pattern (len {pattern_len}) is longer than the text (len {text_len})"
            ),
        }
    }
}

impl std::error::Error for IndexError {}

pub(crate) fn check_buffer_len(expected: usize, actual: usize) -> Result<(), IndexError> {
    if expected == actual {
        Ok(())
    } else {
        Err(IndexError::BufferLengthMismatch { expected, actual })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_lengths() {
        let message = IndexError::PatternLongerThanText {
            pattern_len: 7,
            text_len: 3,
        }
        .to_string();

        assert!(message.contains('7'));
        assert!(message.contains('3'));
    }

    #[test]
    fn buffer_len_check() {
        assert_eq!(check_buffer_len(4, 4), Ok(()));
        assert_eq!(
            check_buffer_len(4, 5),
            Err(IndexError::BufferLengthMismatch {
                expected: 4,
                actual: 5
            })
        );
    }
}
