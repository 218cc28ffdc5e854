/*!
 * The element types of texts and of the index arrays built from them.
 *
 * Texts are slices of any [`Symbol`], which is every `Copy + Ord + Debug` type: bytes, `char`s,
 * integers or your own tokens. Only equality and the total order of the symbols are used, never
 * their numeric values.
 *
 * Suffix arrays, LCP arrays and Z-arrays are stored in an [`OutputElement`] of your choice. Smaller
 * output types save memory, but limit the length of the text, because every text offset (and for the
 * Z-array, the text length itself) has to be representable.
 */

use num_traits::{NumCast, PrimInt};

use crate::{IndexError, sealed::Sealed};

pub trait Symbol: std::fmt::Debug + Copy + Ord {}

impl<T: std::fmt::Debug + Copy + Ord> Symbol for T {}

pub trait OutputElement:
    Sealed + std::fmt::Debug + std::fmt::Display + PrimInt + bytemuck::Pod + Send + Sync + 'static
{
    const ZERO: Self;
    const MAX: Self;

    // values stored in index arrays are offsets or lengths of a text that was checked
    // with `check_text_len`, so these conversions cannot fail
    #[inline]
    fn from_index(index: usize) -> Self {
        <Self as NumCast>::from(index).expect("index exceeds the checked output element range")
    }

    #[inline]
    fn index(self) -> usize {
        self.try_index()
            .expect("output element does not fit into usize")
    }

    #[inline]
    fn try_index(self) -> Option<usize> {
        <usize as NumCast>::from(self)
    }
}

macro_rules! output_element_impl {
    ($($output_type:ty),*) => {
        $(
            impl Sealed for $output_type {}

            impl OutputElement for $output_type {
                const ZERO: Self = 0;
                const MAX: Self = <$output_type>::MAX;
            }
        )*
    };
}

output_element_impl!(u32, u64, usize);

pub(crate) fn check_text_len<O: OutputElement>(text_len: usize) -> Result<(), IndexError> {
    let fits = <O as NumCast>::from(text_len).is_some();

    if fits {
        Ok(())
    } else {
        Err(IndexError::TextTooLong {
            len: text_len,
            max: O::MAX.to_u64().unwrap_or(u64::MAX),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions() {
        assert_eq!(u32::from_index(17), 17u32);
        assert_eq!(17u64.index(), 17);
        assert_eq!(u32::MAX.try_index(), usize::try_from(u32::MAX).ok());
    }

    #[test]
    fn text_len_limits() {
        assert_eq!(check_text_len::<u32>(0), Ok(()));
        assert_eq!(check_text_len::<u32>(u32::MAX as usize), Ok(()));
        assert_eq!(check_text_len::<usize>(usize::MAX), Ok(()));

        #[cfg(target_pointer_width = "64")]
        assert_eq!(
            check_text_len::<u32>(u32::MAX as usize + 1),
            Err(IndexError::TextTooLong {
                len: u32::MAX as usize + 1,
                max: u32::MAX as u64
            })
        );
    }
}
