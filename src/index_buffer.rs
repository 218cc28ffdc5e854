use std::{
    marker::PhantomData,
    ops::{Deref, DerefMut},
};

use either::Either;

use crate::{IndexError, OutputElement, typestate::BufferMode};

// An index array that lives either in a Vec owned by this library or in a slice of the caller.
// `B` records which one it is at the type level, so that `into_buffer` can hand back the caller's type.
#[derive(Debug, PartialEq, Eq, Hash)]
pub(crate) struct IndexBuffer<'a, O, B> {
    storage: Either<Vec<O>, &'a mut [O]>,
    _buffer_mode_marker: PhantomData<B>,
}

impl<'a, O, B: BufferMode> IndexBuffer<'a, O, B> {
    pub(crate) fn from_buffer(buffer: B::Buffer<'a, O>) -> Self {
        Self {
            storage: B::into_either(buffer),
            _buffer_mode_marker: PhantomData,
        }
    }

    pub(crate) fn into_buffer(self) -> B::Buffer<'a, O> {
        B::from_either(self.storage)
    }
}

impl<'a, O: OutputElement, B: BufferMode> IndexBuffer<'a, O, B> {
    /// The output buffer of a construction with length `len`, zeroed if it is allocated here.
    pub(crate) fn prepare(supplied: Option<&'a mut [O]>, len: usize) -> Result<Self, IndexError> {
        B::provide(supplied, len).map(Self::from_buffer)
    }

    /// The entries as raw bytes in native endianness.
    pub(crate) fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self[..])
    }
}

impl<O, B> Deref for IndexBuffer<'_, O, B> {
    type Target = [O];

    fn deref(&self) -> &[O] {
        &self.storage
    }
}

impl<O, B> DerefMut for IndexBuffer<'_, O, B> {
    fn deref_mut(&mut self) -> &mut [O] {
        &mut self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typestate::{BorrowedBuffer, OwnedBuffer};

    #[test]
    fn owned_is_allocated() {
        let mut owned = IndexBuffer::<u32, OwnedBuffer>::prepare(None, 3).unwrap();
        owned[1] = 5;

        assert_eq!(owned.as_bytes().len(), 12);
        assert_eq!(owned.into_buffer(), vec![0, 5, 0]);
    }

    #[test]
    fn borrowed_writes_through() {
        let mut backing = [1u32, 2, 3];
        {
            let mut borrowed =
                IndexBuffer::<u32, BorrowedBuffer>::prepare(Some(&mut backing[..]), 3).unwrap();
            borrowed[0] = 9;
            assert_eq!(&borrowed[..], &[9, 2, 3]);
        }

        assert_eq!(backing, [9, 2, 3]);
    }
}
