/*!
 * Construct the [suffix array] for a text using [`SuffixArrayConstruction`].
 *
 * The suffix array is built by prefix doubling: every suffix is ranked by its first symbol, and
 * then, in rounds, by the pair of its rank and the rank of the suffix `k` positions later, for
 * `k = 1, 2, 4, ...`. Each round sorts these rank pairs with a linear-time radix sort, which gives
 * `O(n log n)` time overall. Only the equality and the order of symbols are used, so texts can be
 * made of bytes, `char`s or any other `Copy + Ord` tokens.
 *
 * The entry point to the API is the [`SuffixArrayConstruction`] builder-like struct. It is always
 * required to pass the input text and register the output element type, optionally together with a
 * borrowed output buffer:
 * ```
 * use textindex::SuffixArrayConstruction;
 *
 * let text = b"abracadabra".as_slice();
 * let mut my_suffix_array_buffer = vec![0u32; text.len()];
 *
 * let res = SuffixArrayConstruction::for_text(text)
 *     .in_borrowed_buffer(&mut my_suffix_array_buffer)
 *     .run()
 *     .unwrap();
 *
 * assert_eq!(res.suffix_array(), &[10, 7, 0, 3, 5, 8, 1, 4, 6, 9, 2]);
 * ```
 *
 * # Sentinel Convention and Suffix Array Length
 *
 * In the literature, texts are often assumed to be terminated by a unique, lexicographically smallest
 * character. This library does not require it, but sorts suffixes as if such a character were present:
 * a suffix that is a proper prefix of another suffix is the smaller one. Therefore, the suffix array
 * has the same length as the text and no two offsets are ever tied.
 *
 * # Return Type and LCP
 *
 * The read-only return type of [`SuffixArrayConstruction::run`] bundles the suffix array
 * and a reference to the input text. It can be destructured into parts, used to look up occurrences
 * of a pattern or used to compute the longest common prefix array (see [`lcp`](super::lcp)).
 *
 * [suffix array]: https://en.wikipedia.org/wiki/Suffix_array
 */

use std::marker::PhantomData;

use tracing::debug;

use crate::{
    IndexError, OutputElement, Symbol,
    index_buffer::IndexBuffer,
    lcp::LcpConstruction,
    rank,
    type_model::check_text_len,
    typestate::{
        BorrowedBuffer, BufferMode, BufferModeOrUndecided, OutputElementOrUndecided, OwnedBuffer,
        Undecided,
    },
};

/// One of the main entry points of this library, for constructing suffix arrays.
///
/// See [`suffix_array`](self) for details.
#[derive(Debug)]
pub struct SuffixArrayConstruction<
    's,
    't,
    S: Symbol,
    O: OutputElementOrUndecided,
    B: BufferModeOrUndecided,
> {
    text: &'t [S],
    suffix_array_buffer: Option<&'s mut [O]>,
    _buffer_mode_marker: PhantomData<B>,
}

impl<'t, S: Symbol> SuffixArrayConstruction<'static, 't, S, Undecided, Undecided> {
    /// The first method to call.
    pub fn for_text(text: &'t [S]) -> Self {
        Self {
            text,
            suffix_array_buffer: None,
            _buffer_mode_marker: PhantomData,
        }
    }

    /// Provide a buffer in which the suffix array will be stored.
    ///
    /// The buffer must have exactly the length of the text.
    pub fn in_borrowed_buffer<'s, O: OutputElement>(
        self,
        suffix_array_buffer: &'s mut [O],
    ) -> SuffixArrayConstruction<'s, 't, S, O, BorrowedBuffer> {
        SuffixArrayConstruction {
            text: self.text,
            suffix_array_buffer: Some(suffix_array_buffer),
            _buffer_mode_marker: PhantomData,
        }
    }

    /// Inform the library of your desired output element type,
    /// if you want to obtain the suffix array in a [`Vec`].
    pub fn in_owned_buffer<O: OutputElement>(
        self,
    ) -> SuffixArrayConstruction<'static, 't, S, O, OwnedBuffer> {
        SuffixArrayConstruction {
            text: self.text,
            suffix_array_buffer: None,
            _buffer_mode_marker: PhantomData,
        }
    }

    /// Inform the library that you want to obtain the suffix array in a [`Vec<u32>`].
    pub fn in_owned_buffer32(self) -> SuffixArrayConstruction<'static, 't, S, u32, OwnedBuffer> {
        self.in_owned_buffer()
    }

    /// Inform the library that you want to obtain the suffix array in a [`Vec<u64>`].
    pub fn in_owned_buffer64(self) -> SuffixArrayConstruction<'static, 't, S, u64, OwnedBuffer> {
        self.in_owned_buffer()
    }
}

impl<'s, 't, S: Symbol, O: OutputElement, B: BufferMode> SuffixArrayConstruction<'s, 't, S, O, B> {
    /// Construct the suffix array for the given text.
    ///
    /// # Errors
    ///
    /// If the text is too long for the output element type or a borrowed buffer does not
    /// have the length of the text. Both are checked before any work is done.
    ///
    /// # Returns
    ///
    /// A type that bundles the suffix array with a reference to the text.
    /// See [`suffix_array`](self#return-type-and-lcp) for details.
    pub fn run(mut self) -> Result<SuffixArrayWithText<'s, 't, S, O, B>, IndexError> {
        let text_len = self.text.len();
        check_text_len::<O>(text_len)?;

        let mut suffix_array =
            IndexBuffer::<O, B>::prepare(self.suffix_array_buffer.take(), text_len)?;

        let order = rank::sort_suffixes(self.text);

        for (entry, offset) in suffix_array.iter_mut().zip(order) {
            *entry = O::from_index(offset);
        }

        debug!(text_len, "constructed suffix array");

        Ok(SuffixArrayWithText {
            suffix_array,
            text: self.text,
        })
    }
}

/// The read-only return type of a suffix array construction.
///
/// It keeps a reference to the text to allow LCP array construction and pattern lookups.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct SuffixArrayWithText<'s, 't, S: Symbol, O: OutputElement, B: BufferMode> {
    pub(crate) suffix_array: IndexBuffer<'s, O, B>,
    pub(crate) text: &'t [S],
}

impl<'s, 't, S: Symbol, O: OutputElement, B: BufferMode> SuffixArrayWithText<'s, 't, S, O, B> {
    pub fn suffix_array(&self) -> &[O] {
        &self.suffix_array
    }

    pub fn text(&self) -> &'t [S] {
        self.text
    }

    /// The suffix array as raw bytes in native endianness.
    pub fn as_bytes(&self) -> &[u8] {
        self.suffix_array.as_bytes()
    }

    pub fn into_parts(self) -> (B::Buffer<'s, O>, &'t [S]) {
        (self.suffix_array.into_buffer(), self.text)
    }

    /// Bundle a suffix array that was obtained elsewhere with its text, e.g. by using
    /// the parts obtained by [`Self::into_parts`].
    ///
    /// The suffix array is checked to be a permutation of the offsets of the text. That it is
    /// sorted is not checked, an unsorted array leads to meaningless (but memory safe) results
    /// in the operations of this type.
    pub fn from_parts(suffix_array: B::Buffer<'s, O>, text: &'t [S]) -> Result<Self, IndexError> {
        let suffix_array = IndexBuffer::<O, B>::from_buffer(suffix_array);
        inverse_suffix_array(text.len(), &suffix_array)?;

        Ok(Self { suffix_array, text })
    }

    /// All offsets at which `pattern` occurs in the text, in suffix array order.
    ///
    /// Both ends of the block of suffixes that start with the pattern are found by binary search,
    /// so this takes `O(m log n)` time for a pattern of length `m`. The empty pattern occurs at every offset.
    pub fn occurrences(&self, pattern: &[S]) -> &[O] {
        let suffix_array = self.suffix_array();
        let head = |entry: &O| {
            let suffix = &self.text[entry.index()..];
            &suffix[..pattern.len().min(suffix.len())]
        };

        let start = suffix_array.partition_point(|entry| head(entry) < pattern);
        let end = suffix_array.partition_point(|entry| head(entry) <= pattern);

        &suffix_array[start..end]
    }

    pub fn lcp_construction(self) -> LcpConstruction<'static, 's, 't, S, O, B, OwnedBuffer> {
        LcpConstruction::new(self.suffix_array, self.text)
    }
}

impl<'t, S: Symbol, O: OutputElement> SuffixArrayWithText<'static, 't, S, O, OwnedBuffer> {
    pub fn into_vec(self) -> Vec<O> {
        self.suffix_array.into_buffer()
    }
}

/// Build the suffix array of a text, as offsets of type `usize`.
///
/// ```
/// assert_eq!(textindex::build_suffix_array(b"banana"), vec![5, 3, 1, 0, 4, 2]);
/// ```
pub fn build_suffix_array<S: Symbol>(text: &[S]) -> Vec<usize> {
    rank::sort_suffixes(text)
}

// Computes `rank[SA[i]] = i`, which also verifies that the suffix array is a permutation of [0, text_len).
pub(crate) fn inverse_suffix_array<O: OutputElement>(
    text_len: usize,
    suffix_array: &[O],
) -> Result<Vec<usize>, IndexError> {
    if suffix_array.len() != text_len {
        return Err(IndexError::InvalidSuffixArray);
    }

    const UNSET: usize = usize::MAX;
    let mut rank = vec![UNSET; text_len];

    for (position, entry) in suffix_array.iter().enumerate() {
        let slot = entry
            .try_index()
            .and_then(|offset| rank.get_mut(offset))
            .ok_or(IndexError::InvalidSuffixArray)?;

        if *slot != UNSET {
            return Err(IndexError::InvalidSuffixArray);
        }
        *slot = position;
    }

    Ok(rank)
}
