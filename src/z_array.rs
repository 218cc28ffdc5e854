/*!
 * Construct the Z-array of a text using [`ZArrayConstruction`].
 *
 * The entry at position `i` of the Z-array is the length of the longest substring starting at `i`
 * that is also a prefix of the text. By convention, the entry at position 0 is the length of the text.
 *
 * The array is computed in linear time by keeping the Z-box: the window `[left, right)` of the
 * prefix match that reaches furthest to the right among all matches found so far. A position inside
 * the Z-box mirrors the position `i - left` of the prefix, whose value is already known. Only when that
 * value reaches the end of the Z-box do symbols have to be compared, and then only from `right` onwards.
 * Because `right` never decreases, at most `2n` comparisons happen.
 *
 * ```
 * use textindex::ZArrayConstruction;
 *
 * let res = ZArrayConstruction::for_text(b"aabxaab".as_slice())
 *     .in_owned_buffer32()
 *     .run()
 *     .unwrap();
 *
 * assert_eq!(res.z_array(), &[7, 1, 0, 0, 3, 1, 0]);
 * ```
 */

use std::marker::PhantomData;

use crate::{
    IndexError, OutputElement,
    index_buffer::IndexBuffer,
    type_model::check_text_len,
    typestate::{
        BorrowedBuffer, BufferMode, BufferModeOrUndecided, OutputElementOrUndecided, OwnedBuffer,
        Undecided,
    },
};

/// Entry point for constructing Z-arrays.
///
/// See [`z_array`](self) for details. Unlike suffix arrays, Z-arrays only need symbols that can be
/// compared for equality.
#[derive(Debug)]
pub struct ZArrayConstruction<
    'z,
    't,
    S: PartialEq,
    O: OutputElementOrUndecided,
    B: BufferModeOrUndecided,
> {
    text: &'t [S],
    z_array_buffer: Option<&'z mut [O]>,
    _buffer_mode_marker: PhantomData<B>,
}

impl<'t, S: PartialEq> ZArrayConstruction<'static, 't, S, Undecided, Undecided> {
    pub fn for_text(text: &'t [S]) -> Self {
        Self {
            text,
            z_array_buffer: None,
            _buffer_mode_marker: PhantomData,
        }
    }

    /// Provide a buffer with the length of the text, in which the Z-array will be stored.
    pub fn in_borrowed_buffer<'z, O: OutputElement>(
        self,
        z_array_buffer: &'z mut [O],
    ) -> ZArrayConstruction<'z, 't, S, O, BorrowedBuffer> {
        ZArrayConstruction {
            text: self.text,
            z_array_buffer: Some(z_array_buffer),
            _buffer_mode_marker: PhantomData,
        }
    }

    pub fn in_owned_buffer<O: OutputElement>(
        self,
    ) -> ZArrayConstruction<'static, 't, S, O, OwnedBuffer> {
        ZArrayConstruction {
            text: self.text,
            z_array_buffer: None,
            _buffer_mode_marker: PhantomData,
        }
    }

    pub fn in_owned_buffer32(self) -> ZArrayConstruction<'static, 't, S, u32, OwnedBuffer> {
        self.in_owned_buffer()
    }

    pub fn in_owned_buffer64(self) -> ZArrayConstruction<'static, 't, S, u64, OwnedBuffer> {
        self.in_owned_buffer()
    }
}

impl<'z, 't, S: PartialEq, O: OutputElement, B: BufferMode> ZArrayConstruction<'z, 't, S, O, B> {
    /// Construct the Z-array for the given text.
    ///
    /// # Errors
    ///
    /// If the text length does not fit into the output element type or a borrowed buffer
    /// does not have the length of the text.
    pub fn run(mut self) -> Result<ZArrayWithText<'z, 't, S, O, B>, IndexError> {
        let text_len = self.text.len();
        check_text_len::<O>(text_len)?;

        let mut z_array = IndexBuffer::<O, B>::prepare(self.z_array_buffer.take(), text_len)?;

        fill_z_array(self.text, &mut z_array);

        Ok(ZArrayWithText {
            z_array,
            text: self.text,
        })
    }
}

/// The read-only return type of a Z-array construction.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct ZArrayWithText<'z, 't, S: PartialEq, O: OutputElement, B: BufferMode> {
    z_array: IndexBuffer<'z, O, B>,
    text: &'t [S],
}

impl<'z, 't, S: PartialEq, O: OutputElement, B: BufferMode> ZArrayWithText<'z, 't, S, O, B> {
    pub fn z_array(&self) -> &[O] {
        &self.z_array
    }

    pub fn text(&self) -> &'t [S] {
        self.text
    }

    /// Offsets at which the whole prefix of length `len` occurs again, excluding offset 0.
    pub fn prefix_occurrences(&self, len: usize) -> impl Iterator<Item = usize> + '_ {
        self.z_array()
            .iter()
            .enumerate()
            .skip(1)
            .filter(move |(_, value)| value.index() >= len)
            .map(|(offset, _)| offset)
    }

    pub fn into_parts(self) -> (B::Buffer<'z, O>, &'t [S]) {
        (self.z_array.into_buffer(), self.text)
    }
}

impl<'t, S: PartialEq, O: OutputElement> ZArrayWithText<'static, 't, S, O, OwnedBuffer> {
    pub fn into_vec(self) -> Vec<O> {
        self.z_array.into_buffer()
    }
}

/// Build the Z-array of a text.
///
/// ```
/// assert_eq!(textindex::build_z_array(b"aaaa"), vec![4, 3, 2, 1]);
/// ```
pub fn build_z_array<S: PartialEq>(text: &[S]) -> Vec<usize> {
    let mut z_array = vec![0; text.len()];
    fill_z_array(text, &mut z_array);
    z_array
}

pub(crate) fn fill_z_array<S: PartialEq, O: OutputElement>(text: &[S], z_array: &mut [O]) {
    let n = text.len();
    debug_assert_eq!(n, z_array.len());

    let Some(first) = z_array.first_mut() else {
        return;
    };
    *first = O::from_index(n);

    let mut left = 0;
    let mut right = 0;

    for i in 1..n {
        let mut len = 0;

        if i < right {
            let mirrored = z_array[i - left].index();
            if mirrored < right - i {
                z_array[i] = O::from_index(mirrored);
                continue;
            }
            len = right - i;
        }

        while i + len < n && text[len] == text[i + len] {
            len += 1;
        }

        z_array[i] = O::from_index(len);

        if i + len > right {
            left = i;
            right = i + len;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive_z_array(text: &[u8]) -> Vec<usize> {
        (0..text.len())
            .map(|i| {
                text[i..]
                    .iter()
                    .zip(text)
                    .take_while(|(a, b)| a == b)
                    .count()
            })
            .collect()
    }

    #[test]
    fn small_texts() {
        assert_eq!(build_z_array::<u8>(&[]), Vec::<usize>::new());
        assert_eq!(build_z_array(b"x"), vec![1]);
        assert_eq!(build_z_array(b"banana"), vec![6, 0, 0, 0, 0, 0]);
        assert_eq!(build_z_array(b"abacaba"), vec![7, 0, 1, 0, 3, 0, 1]);
    }

    #[test]
    fn matches_naive() {
        for text in [
            b"atatata_and_atatata".as_slice(),
            b"tentekotenten",
            b"atatatatatatatatatata",
            b"okayamaken_okayamashi",
            b"aabaabaabaaab",
        ] {
            assert_eq!(build_z_array(text), naive_z_array(text), "{text:?}");
        }
    }
}
