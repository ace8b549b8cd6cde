// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Flattening
//!
//! Rank reduction: every leaf element of a [`Ragged`] array, in row-major
//! order, written into one contiguous rank-1 array. Null rows contribute
//! nothing. Other crates lean on this whenever a rank-N operation can be
//! expressed as a rank-1 one (the byte codec encodes nested arrays this way,
//! the chunked buffer materializes through [`allocate`]).
//!
//! ```rust
//! use tessera_array::{flatten::flatten, Ragged};
//!
//! let a = Ragged::from_rows(vec![Some(vec![1, 2]), None, Some(vec![3])]);
//! assert_eq!(flatten(&a, 0), Ok(vec![1, 2, 3]));
//! assert_eq!(flatten(&a, 2), Ok(vec![0, 0, 1, 2, 3]));
//! ```

use crate::{
    erased::{AnyArray, ArrayElement, NumericVec},
    error::ArrayError,
    ragged::Ragged,
};
use tessera_core::{Element, NumericKind};

/// Allocates a zero-filled rank-1 array of `T`.
#[inline]
pub fn allocate<T: Element>(len: usize) -> Vec<T> {
    vec![T::zero(); len]
}

/// Allocates a zero-filled rank-1 array of `kind`.
#[inline]
pub fn allocate_kind(kind: NumericKind, len: usize) -> NumericVec {
    NumericVec::zeroed(kind, len)
}

/// Writes every leaf element of `array` into `out` starting at `offset`.
///
/// Returns the number of elements written.
///
/// # Errors
///
/// Returns [`ArrayError::OutOfBounds`] if the elements do not fit; `out` is
/// left untouched in that case.
pub fn flatten_into<T: Copy>(
    array: &Ragged<T>,
    out: &mut [T],
    offset: usize,
) -> Result<usize, ArrayError> {
    let total = array.element_count();
    let end = offset
        .checked_add(total)
        .filter(|&end| end <= out.len())
        .ok_or(ArrayError::OutOfBounds {
            offset,
            length: total,
            bound: out.len(),
        })?;

    if let Some(values) = array.as_flat() {
        out[offset..end].copy_from_slice(values);
        return Ok(total);
    }

    let mut cursor = offset;
    for leaf in array.leaves() {
        out[cursor..cursor + leaf.len()].copy_from_slice(leaf);
        cursor += leaf.len();
    }
    debug_assert_eq!(cursor, end);
    Ok(total)
}

/// Flattens `array` into a freshly allocated rank-1 array of
/// `offset + element_count` elements; the first `offset` slots are zero.
///
/// # Errors
///
/// Returns [`ArrayError::OutOfBounds`] if `offset + element_count` is not
/// representable.
pub fn flatten<T: Element>(array: &Ragged<T>, offset: usize) -> Result<Vec<T>, ArrayError> {
    let total = array.element_count();
    let len = offset.checked_add(total).ok_or(ArrayError::OutOfBounds {
        offset,
        length: total,
        bound: usize::MAX,
    })?;
    let mut out = Vec::with_capacity(len);
    out.resize(offset, T::zero());
    for leaf in array.leaves() {
        out.extend_from_slice(leaf);
    }
    Ok(out)
}

/// Flattens a kind-tagged array into a new [`NumericVec`] of the same kind.
///
/// # Errors
///
/// See [`flatten`].
pub fn flatten_any(array: &AnyArray, offset: usize) -> Result<NumericVec, ArrayError> {
    crate::dispatch_array!(array, a => flatten(a, offset).map(ArrayElement::into_vec))
}

/// Flattens a kind-tagged array into a kind-tagged output.
///
/// # Errors
///
/// Returns [`ArrayError::KindMismatch`] if `out` holds a different kind, or
/// [`ArrayError::OutOfBounds`] if the elements do not fit.
pub fn flatten_any_into(
    array: &AnyArray,
    out: &mut NumericVec,
    offset: usize,
) -> Result<usize, ArrayError> {
    match (array, out) {
        (AnyArray::Int8(a), NumericVec::Int8(o)) => flatten_into(a, o, offset),
        (AnyArray::Int16(a), NumericVec::Int16(o)) => flatten_into(a, o, offset),
        (AnyArray::Int32(a), NumericVec::Int32(o)) => flatten_into(a, o, offset),
        (AnyArray::Int64(a), NumericVec::Int64(o)) => flatten_into(a, o, offset),
        (AnyArray::Float32(a), NumericVec::Float32(o)) => flatten_into(a, o, offset),
        (AnyArray::Float64(a), NumericVec::Float64(o)) => flatten_into(a, o, offset),
        (a, o) => Err(ArrayError::KindMismatch {
            expected: a.kind(),
            found: o.kind(),
        }),
    }
}

impl<T: Element> Ragged<T> {
    /// Flattens this array into a new rank-1 array.
    ///
    /// Equivalent to [`flatten(self, 0)`](flatten), which cannot fail.
    pub fn to_flat(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.element_count());
        for leaf in self.leaves() {
            out.extend_from_slice(leaf);
        }
        out
    }
}

impl AnyArray {
    /// Flattens this array into a new [`NumericVec`].
    #[inline]
    pub fn flatten(&self) -> NumericVec {
        crate::dispatch_array!(self, a => ArrayElement::into_vec(a.to_flat()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_rows_are_skipped() {
        let a = Ragged::from_rows(vec![Some(vec![1, 2]), None, Some(vec![3])]);
        assert_eq!(flatten(&a, 0), Ok(vec![1, 2, 3]));
    }

    #[test]
    fn test_flatten_offset_overflow() {
        let a = Ragged::from_rows(vec![Some(vec![1i16]), None]);
        assert_eq!(
            flatten(&a, usize::MAX),
            Err(ArrayError::OutOfBounds {
                offset: usize::MAX,
                length: 1,
                bound: usize::MAX
            })
        );
        let any = AnyArray::from(a);
        assert!(flatten_any(&any, usize::MAX).is_err());
        assert_eq!(flatten_any(&any, 1), Ok(NumericVec::from(vec![0i16, 1])));
    }

    #[test]
    fn test_rank3_row_major() {
        let a = Ragged::from_planes(vec![
            Some(vec![Some(vec![1.0f32]), Some(vec![2.0, 3.0])]),
            None,
            Some(vec![None, Some(vec![4.0])]),
        ]);
        assert_eq!(a.to_flat(), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_flatten_into_at_offset() {
        let a = Ragged::from_rows(vec![Some(vec![7i16, 8]), Some(vec![9])]);
        let mut out = [0i16; 6];
        assert_eq!(flatten_into(&a, &mut out, 2), Ok(3));
        assert_eq!(out, [0, 0, 7, 8, 9, 0]);
    }

    #[test]
    fn test_flatten_into_rank1_fast_path() {
        let a = Ragged::flat(vec![1i64, 2, 3]);
        let mut out = [5i64; 3];
        assert_eq!(flatten_into(&a, &mut out, 0), Ok(3));
        assert_eq!(out, [1, 2, 3]);
    }

    #[test]
    fn test_flatten_into_overflow_leaves_output_untouched() {
        let a = Ragged::from_rows(vec![Some(vec![1i8, 2, 3])]);
        let mut out = [9i8; 4];
        assert_eq!(
            flatten_into(&a, &mut out, 2),
            Err(ArrayError::OutOfBounds {
                offset: 2,
                length: 3,
                bound: 4
            })
        );
        assert_eq!(out, [9; 4]);

        assert!(flatten_into(&a, &mut out, usize::MAX).is_err());
    }

    #[test]
    fn test_flatten_any_and_kind_mismatch() {
        let a = AnyArray::from(Ragged::from_rows(vec![Some(vec![1i32]), None, Some(vec![2, 3])]));
        assert_eq!(a.flatten(), NumericVec::from(vec![1i32, 2, 3]));

        let mut out = allocate_kind(NumericKind::Int32, 4);
        assert_eq!(flatten_any_into(&a, &mut out, 1), Ok(3));
        assert_eq!(out, NumericVec::from(vec![0i32, 1, 2, 3]));

        let mut wrong = allocate_kind(NumericKind::Float32, 4);
        assert_eq!(
            flatten_any_into(&a, &mut wrong, 0),
            Err(ArrayError::KindMismatch {
                expected: NumericKind::Int32,
                found: NumericKind::Float32
            })
        );
    }

    #[test]
    fn test_allocate() {
        assert_eq!(allocate::<f64>(3), vec![0.0; 3]);
        assert_eq!(allocate_kind(NumericKind::Int16, 2).len(), 2);
    }

    #[test]
    fn test_empty_arrays() {
        let a: Ragged<u8> = Ragged::from_rows(vec![None, None]);
        let mut out: [u8; 0] = [];
        assert_eq!(flatten_into(&a, &mut out, 0), Ok(0));
    }
}
