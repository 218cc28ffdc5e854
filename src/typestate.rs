/*!
 * Typestate model for builder APIs, most likely not relevant to you.
 *
 * A construction starts with its output element type and buffer mode [`Undecided`]. Choosing an owned or
 * borrowed buffer fixes both, and only then does `run` become available.
 */

use either::Either;

use crate::{IndexError, OutputElement, error::check_buffer_len, sealed::Sealed};

pub enum Undecided {}

impl Sealed for Undecided {}

pub trait OutputElementOrUndecided: Sealed {}

impl OutputElementOrUndecided for Undecided {}

impl<O: OutputElement> OutputElementOrUndecided for O {}

pub trait BufferModeOrUndecided: Sealed {}

impl BufferModeOrUndecided for Undecided {}

impl<B: BufferMode> BufferModeOrUndecided for B {}

/// Decision about whether an index array is written to an owned [`Vec`] or to a slice supplied by the caller.
pub trait BufferMode: Sealed {
    type Buffer<'a, T: 'a>;

    fn into_either<'a, T>(buffer: Self::Buffer<'a, T>) -> Either<Vec<T>, &'a mut [T]>;

    fn from_either<'a, T>(either_: Either<Vec<T>, &'a mut [T]>) -> Self::Buffer<'a, T>;

    /// Obtain the output buffer of length `len` for a construction.
    ///
    /// `supplied` is the buffer that was passed to `in_borrowed_buffer`, if any.
    fn provide<'a, O: OutputElement>(
        supplied: Option<&'a mut [O]>,
        len: usize,
    ) -> Result<Self::Buffer<'a, O>, IndexError>;
}

pub struct BorrowedBuffer {}

impl Sealed for BorrowedBuffer {}

impl BufferMode for BorrowedBuffer {
    type Buffer<'a, T: 'a> = &'a mut [T];

    fn into_either<'a, T>(buffer: Self::Buffer<'a, T>) -> Either<Vec<T>, &'a mut [T]> {
        Either::Right(buffer)
    }

    fn from_either<'a, T>(either_: Either<Vec<T>, &'a mut [T]>) -> Self::Buffer<'a, T> {
        match either_ {
            Either::Right(borrowed) => borrowed,
            Either::Left(_) => unreachable!("a borrowed index buffer never holds a Vec"),
        }
    }

    fn provide<'a, O: OutputElement>(
        supplied: Option<&'a mut [O]>,
        len: usize,
    ) -> Result<Self::Buffer<'a, O>, IndexError> {
        let Some(buffer) = supplied else {
            unreachable!("the borrowed buffer mode is only entered by supplying a buffer")
        };

        check_buffer_len(len, buffer.len())?;

        Ok(buffer)
    }
}

pub struct OwnedBuffer {}

impl Sealed for OwnedBuffer {}

impl BufferMode for OwnedBuffer {
    type Buffer<'a, T: 'a> = Vec<T>;

    fn into_either<'a, T>(buffer: Self::Buffer<'a, T>) -> Either<Vec<T>, &'a mut [T]> {
        Either::Left(buffer)
    }

    fn from_either<'a, T>(either_: Either<Vec<T>, &'a mut [T]>) -> Self::Buffer<'a, T> {
        match either_ {
            Either::Left(owned) => owned,
            Either::Right(_) => unreachable!("an owned index buffer never holds a slice"),
        }
    }

    fn provide<'a, O: OutputElement>(
        _supplied: Option<&'a mut [O]>,
        len: usize,
    ) -> Result<Self::Buffer<'a, O>, IndexError> {
        Ok(vec![O::ZERO; len])
    }
}
