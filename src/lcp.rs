/*!
 * Construct the [longest common prefix array] (LCP) for a suffix array and its text.
 *
 * [`LcpConstruction`] provides a builder-like API for constructing the LCP array. It can only be obtained from
 * a [`SuffixArrayWithText`](super::suffix_array::SuffixArrayWithText), which is in turn obtained from a
 * suffix array construction or by using its validating constructor. A suffix array from elsewhere can also
 * be passed to [`build_lcp`].
 *
 * ```
 * use textindex::SuffixArrayConstruction;
 *
 * let text = b"abracadabra".as_slice();
 *
 * let res = SuffixArrayConstruction::for_text(text)
 *     .in_owned_buffer32()
 *     .run()
 *     .unwrap();
 *
 * let res_with_lcp = res.lcp_construction()
 *     .run()
 *     .unwrap();
 *
 * assert_eq!(res_with_lcp.lcp(), &[1, 4, 1, 1, 0, 3, 0, 0, 0, 2]);
 * ```
 *
 * # Output Convention
 *
 * The LCP array has one entry less than the suffix array. The entry at position `i` is the length of the
 * longest common prefix of the suffixes at positions `i` and `i + 1` of the suffix array. For texts
 * of length zero or one, it is empty.
 *
 * # Algorithm
 *
 * The values are computed with Kasai's algorithm. Suffixes are visited in text order instead of suffix array
 * order, because the common prefix of the suffix at offset `i + 1` with its successor is at most one shorter
 * than that of the suffix at offset `i`. Each comparison can therefore start where the previous one ended,
 * which gives linear time overall.
 *
 * [longest common prefix array]: https://en.wikipedia.org/wiki/LCP_array
 */

use std::marker::PhantomData;

use tracing::debug;

use crate::{
    IndexError, OutputElement, Symbol,
    index_buffer::IndexBuffer,
    repeats::Repeat,
    suffix_array::inverse_suffix_array,
    typestate::{BorrowedBuffer, BufferMode, OwnedBuffer},
};

/// Construct the longest common prefix array for a suffix array and its text.
///
/// See [`lcp`](self) for details.
#[derive(Debug)]
pub struct LcpConstruction<
    'l,
    's,
    't,
    S: Symbol,
    O: OutputElement,
    SaB: BufferMode,
    LcpB: BufferMode,
> {
    suffix_array: IndexBuffer<'s, O, SaB>,
    text: &'t [S],
    lcp_buffer: Option<&'l mut [O]>,
    _lcp_buffer_mode_marker: PhantomData<LcpB>,
}

impl<'s, 't, S: Symbol, O: OutputElement, SaB: BufferMode>
    LcpConstruction<'static, 's, 't, S, O, SaB, OwnedBuffer>
{
    pub(crate) fn new(suffix_array: IndexBuffer<'s, O, SaB>, text: &'t [S]) -> Self {
        Self {
            suffix_array,
            text,
            lcp_buffer: None,
            _lcp_buffer_mode_marker: PhantomData,
        }
    }

    /// Construct the LCP array in a borrowed buffer instead of allocating an owned [`Vec`].
    ///
    /// The buffer must be one shorter than the suffix array (or empty, for an empty text).
    pub fn in_borrowed_buffer<'l>(
        self,
        lcp_buffer: &'l mut [O],
    ) -> LcpConstruction<'l, 's, 't, S, O, SaB, BorrowedBuffer> {
        LcpConstruction {
            suffix_array: self.suffix_array,
            text: self.text,
            lcp_buffer: Some(lcp_buffer),
            _lcp_buffer_mode_marker: PhantomData,
        }
    }
}

impl<'l, 's, 't, S: Symbol, O: OutputElement, SaB: BufferMode, LcpB: BufferMode>
    LcpConstruction<'l, 's, 't, S, O, SaB, LcpB>
{
    /// Construct the LCP array for the given suffix array and text.
    ///
    /// # Errors
    ///
    /// If a borrowed buffer has the wrong length.
    ///
    /// # Returns
    ///
    /// A type that bundles the suffix array with the LCP array and the inverse suffix array.
    pub fn run(mut self) -> Result<SuffixArrayWithLcp<'l, 's, 't, S, O, SaB, LcpB>, IndexError> {
        let lcp_len = self.text.len().saturating_sub(1);

        let rank = inverse_suffix_array(self.text.len(), &self.suffix_array)?;

        let mut lcp = IndexBuffer::<O, LcpB>::prepare(self.lcp_buffer.take(), lcp_len)?;

        kasai(self.text, &self.suffix_array, &rank, &mut lcp);

        Ok(SuffixArrayWithLcp {
            suffix_array: self.suffix_array,
            lcp,
            rank,
            text: self.text,
        })
    }
}

/// The read-only return type of an LCP construction.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct SuffixArrayWithLcp<
    'l,
    's,
    't,
    S: Symbol,
    O: OutputElement,
    SaB: BufferMode,
    LcpB: BufferMode,
> {
    suffix_array: IndexBuffer<'s, O, SaB>,
    lcp: IndexBuffer<'l, O, LcpB>,
    rank: Vec<usize>,
    text: &'t [S],
}

impl<'l, 's, 't, S: Symbol, O: OutputElement, SaB: BufferMode, LcpB: BufferMode>
    SuffixArrayWithLcp<'l, 's, 't, S, O, SaB, LcpB>
{
    pub fn suffix_array(&self) -> &[O] {
        &self.suffix_array
    }

    pub fn lcp(&self) -> &[O] {
        &self.lcp
    }

    /// The inverse suffix array: `rank()[suffix_array()[i]] == i`.
    pub fn rank(&self) -> &[usize] {
        &self.rank
    }

    pub fn text(&self) -> &'t [S] {
        self.text
    }

    /// The longest substring that occurs at least twice in the text, if any symbol repeats.
    ///
    /// When several repeats have the maximum length, the one whose first occurrence comes first
    /// in suffix array order is returned.
    pub fn longest_repeated_substring(&self) -> Option<Repeat> {
        let (position, len) = max_lcp_position(self.lcp())?;
        let suffix_array = self.suffix_array();

        Some(Repeat {
            start: suffix_array[position].index(),
            other_start: suffix_array[position + 1].index(),
            len,
        })
    }

    pub fn into_parts(self) -> (SaB::Buffer<'s, O>, LcpB::Buffer<'l, O>, Vec<usize>, &'t [S]) {
        (
            self.suffix_array.into_buffer(),
            self.lcp.into_buffer(),
            self.rank,
            self.text,
        )
    }
}

/// Build the LCP array (convention: length `n - 1`) for a text and its suffix array.
///
/// ```
/// let text = b"banana";
/// let suffix_array = textindex::build_suffix_array(text);
///
/// assert_eq!(textindex::build_lcp(text, &suffix_array), Ok(vec![1, 3, 0, 0, 2]));
/// ```
///
/// # Errors
///
/// If the suffix array is not a permutation of the offsets of the text.
#[tracing::instrument(level = "debug", skip_all, fields(text_len = text.len()))]
pub fn build_lcp<S: Symbol>(text: &[S], suffix_array: &[usize]) -> Result<Vec<usize>, IndexError> {
    let rank = inverse_suffix_array(text.len(), suffix_array)?;
    let mut lcp = vec![0; text.len().saturating_sub(1)];

    kasai(text, suffix_array, &rank, &mut lcp);

    Ok(lcp)
}

fn kasai<S: Symbol, O: OutputElement>(
    text: &[S],
    suffix_array: &[O],
    rank: &[usize],
    lcp: &mut [O],
) {
    let n = text.len();
    let mut common = 0usize;
    let mut compared = 0usize;

    for (offset, &position) in rank.iter().enumerate() {
        if position + 1 == n {
            common = 0;
            continue;
        }

        let successor = suffix_array[position + 1].index();
        while offset + common < n
            && successor + common < n
            && text[offset + common] == text[successor + common]
        {
            common += 1;
            compared += 1;
        }

        lcp[position] = O::from_index(common);
        common = common.saturating_sub(1);
    }

    debug!(text_len = n, compared, "computed lcp array");
}

// Returns the first position with the maximum LCP value, if that value is not zero.
pub(crate) fn max_lcp_position<O: OutputElement>(lcp: &[O]) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;

    for (position, value) in lcp.iter().enumerate() {
        let value = value.index();
        if value > best.map_or(0, |(_, len)| len) {
            best = Some((position, value));
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kasai_banana() {
        let text = b"banana";
        let suffix_array = [5u64, 3, 1, 0, 4, 2];
        let rank = inverse_suffix_array(text.len(), &suffix_array).unwrap();
        let mut lcp = [0u64; 5];

        kasai(text, &suffix_array, &rank, &mut lcp);

        assert_eq!(lcp, [1, 3, 0, 0, 2]);
    }

    #[test]
    fn first_maximum_wins() {
        assert_eq!(max_lcp_position(&[1u32, 3, 0, 3]), Some((1, 3)));
        assert_eq!(max_lcp_position(&[0u32, 0]), None);
        assert_eq!(max_lcp_position::<u32>(&[]), None);
    }
}
