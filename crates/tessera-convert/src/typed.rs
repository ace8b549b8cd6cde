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

//! # Typed Conversion
//!
//! The generic core of the converter. Source and destination element types
//! are known at compile time; the [`ConversionPolicy`] decides the numeric
//! rule. Everything in [`dispatch`](crate::dispatch) monomorphizes down to
//! these functions.
//!
//! ## Rank
//!
//! Ragged arrays are converted row by row, never through a flattened
//! buffer, so the row structure of the input survives. Offsets and lengths
//! of a [`Span`] index the outermost level. Null input rows become null
//! output rows; a present input row is converted into the matching output
//! row if one exists, or into a freshly allocated row otherwise.

use crate::{
    error::{ConvertError, Result},
    policy::{Clamp, ConversionPolicy, Truncate},
    span::Span,
};
use tessera_array::{ArrayError, Ragged};
use tessera_core::Element;

/// Converts the elements named by `span` from `src` into `dst`.
///
/// Returns the number of elements converted.
///
/// # Errors
///
/// Returns [`ConvertError::OutOfBounds`] if `span` does not fit; `dst` is
/// left untouched in that case.
pub fn convert_slice_with<S, D, P>(src: &[S], dst: &mut [D], span: Span, policy: P) -> Result<usize>
where
    S: Element,
    D: Element,
    P: ConversionPolicy,
{
    let n = span.resolve(src.len(), dst.len())?;
    policy.convert_slice(
        &src[span.src_offset..span.src_offset + n],
        &mut dst[span.dst_offset..span.dst_offset + n],
    );
    Ok(n)
}

/// Truncating slice conversion.
///
/// ```rust
/// use tessera_convert::{span::Span, typed::convert_slice};
///
/// let mut out = [0i8; 3];
/// assert_eq!(convert_slice(&[1i32, 200, -129], &mut out, Span::ALL, true), Ok(3));
/// assert_eq!(out, [1, -56, 127]);
/// ```
#[inline]
pub fn convert_slice<S: Element, D: Element>(
    src: &[S],
    dst: &mut [D],
    span: Span,
    src_signed: bool,
) -> Result<usize> {
    convert_slice_with(src, dst, span, Truncate::new(src_signed))
}

/// Clamping slice conversion.
///
/// ```rust
/// use tessera_convert::{span::Span, typed::convert_slice_safe};
///
/// let mut out = [0i8; 3];
/// assert_eq!(convert_slice_safe(&[1i32, 200, -129], &mut out, Span::ALL, true, true), Ok(3));
/// assert_eq!(out, [1, 127, -128]);
/// ```
#[inline]
pub fn convert_slice_safe<S: Element, D: Element>(
    src: &[S],
    dst: &mut [D],
    span: Span,
    src_signed: bool,
    dst_signed: bool,
) -> Result<usize> {
    convert_slice_with(src, dst, span, Clamp::new(src_signed, dst_signed))
}

/// Converts the outermost entries named by `span` from `src` into `dst`,
/// which must have the same rank.
///
/// Returns the number of outermost entries converted.
///
/// # Errors
///
/// Returns [`ConvertError::RankMismatch`] or [`ConvertError::OutOfBounds`]
/// before anything is written.
pub fn convert_ragged_into<S, D, P>(
    src: &Ragged<S>,
    dst: &mut Ragged<D>,
    span: Span,
    policy: P,
) -> Result<usize>
where
    S: Element,
    D: Element,
    P: ConversionPolicy,
{
    if src.rank() != dst.rank() {
        return Err(ConvertError::RankMismatch {
            expected: src.rank(),
            found: dst.rank(),
        });
    }

    if let (Some(s), Some(d)) = (src.as_flat(), dst.as_flat_mut()) {
        return convert_slice_with(s, d, span, policy);
    }

    let s_rows = src.rows().unwrap_or_default();
    let n = span.resolve(s_rows.len(), dst.len())?;
    for (i, s_row) in s_rows[span.src_offset..span.src_offset + n].iter().enumerate() {
        let index = span.dst_offset + i;
        let row = convert_row(s_row.as_ref(), dst.take_row(index), policy)?;
        dst.set_row(index, row).map_err(|e| rank_error(&e, src.rank()))?;
    }
    Ok(n)
}

fn convert_row<S, D, P>(
    src: Option<&Ragged<S>>,
    dst: Option<Ragged<D>>,
    policy: P,
) -> Result<Option<Ragged<D>>>
where
    S: Element,
    D: Element,
    P: ConversionPolicy,
{
    match (src, dst) {
        (None, _) => Ok(None),
        (Some(s), Some(mut d)) if d.rank() == s.rank() => {
            convert_ragged_into(s, &mut d, Span::ALL, policy)?;
            Ok(Some(d))
        }
        (Some(s), _) => convert_ragged(s, Span::ALL, policy).map(Some),
    }
}

fn rank_error(error: &ArrayError, expected: usize) -> ConvertError {
    match *error {
        ArrayError::RankMismatch { expected, found, .. } => {
            ConvertError::RankMismatch { expected, found }
        }
        ArrayError::OutOfBounds {
            offset,
            length,
            bound,
        } => ConvertError::OutOfBounds {
            offset,
            length,
            bound,
        },
        _ => ConvertError::RankMismatch {
            expected,
            found: 1,
        },
    }
}

/// Converts `src` into a freshly allocated array of the same rank.
///
/// The output has `span.dst_offset` leading entries (zeros at rank 1, null
/// rows above) followed by the converted entries.
///
/// # Errors
///
/// Returns [`ConvertError::OutOfBounds`] if `span` does not fit `src`.
pub fn convert_ragged<S, D, P>(src: &Ragged<S>, span: Span, policy: P) -> Result<Ragged<D>>
where
    S: Element,
    D: Element,
    P: ConversionPolicy,
{
    let n = span.resolve_source(src.len())?;
    let len = span
        .dst_offset
        .checked_add(n)
        .ok_or(ConvertError::OutOfBounds {
            offset: span.dst_offset,
            length: n,
            bound: usize::MAX,
        })?;

    let mut dst = if src.is_flat() {
        Ragged::flat(vec![D::zero(); len])
    } else {
        let mut rows = Ragged::empty(src.rank()).map_err(|e| rank_error(&e, src.rank()))?;
        rows.resize_rows(len);
        rows
    };
    convert_ragged_into(src, &mut dst, Span { length: Some(n), ..span }, policy)?;
    Ok(dst)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_with_offsets() {
        let src = [10i16, 20, 30, 40];
        let mut dst = [0.0f64; 5];
        let n = convert_slice(&src, &mut dst, Span::new(1, 2, Some(2)), true).unwrap();
        assert_eq!(n, 2);
        assert_eq!(dst, [0.0, 0.0, 20.0, 30.0, 0.0]);
    }

    #[test]
    fn test_slice_fit_length() {
        let src = [1i8, 2, 3, 4, 5];
        let mut dst = [0i64; 3];
        assert_eq!(convert_slice(&src, &mut dst, Span::new(3, 0, None), true), Ok(2));
        assert_eq!(dst, [4, 5, 0]);
    }

    #[test]
    fn test_slice_out_of_bounds_writes_nothing() {
        let mut dst = [7i32; 2];
        let err = convert_slice(&[1i32, 2, 3], &mut dst, Span::new(0, 0, Some(3)), true);
        assert!(matches!(err, Err(ConvertError::OutOfBounds { .. })));
        assert_eq!(dst, [7, 7]);
    }

    #[test]
    fn test_slice_unsigned_source() {
        let mut dst = [0i32; 2];
        convert_slice(&[-1i8, -128], &mut dst, Span::ALL, false).unwrap();
        assert_eq!(dst, [255, 128]);
    }

    #[test]
    fn test_slice_safe_unsigned_destination() {
        let mut dst = [0i16; 3];
        convert_slice_safe(&[-5.0f32, 1e9, 12.9], &mut dst, Span::ALL, true, false).unwrap();
        assert_eq!(dst, [0, -1, 12]);
    }

    #[test]
    fn test_ragged_preserves_structure_and_nulls() {
        let src = Ragged::from_rows(vec![Some(vec![1i32, 300]), None, Some(vec![-1])]);
        let out: Ragged<i8> = convert_ragged(&src, Span::ALL, Truncate::signed()).unwrap();
        assert_eq!(out, Ragged::from_rows(vec![Some(vec![1, 44]), None, Some(vec![-1])]));
    }

    #[test]
    fn test_ragged_rank3() {
        let src = Ragged::from_planes(vec![Some(vec![Some(vec![1.5f64]), None]), None]);
        let out: Ragged<i16> = convert_ragged(&src, Span::ALL, Clamp::signed()).unwrap();
        assert_eq!(out, Ragged::from_planes(vec![Some(vec![Some(vec![1]), None]), None]));
    }

    #[test]
    fn test_ragged_allocating_with_offsets() {
        let src = Ragged::from_rows(vec![Some(vec![1i8]), Some(vec![2, 3]), Some(vec![4])]);
        let out: Ragged<i32> = convert_ragged(&src, Span::new(1, 2, Some(1)), Truncate::signed()).unwrap();
        assert_eq!(out, Ragged::from_rows(vec![None, None, Some(vec![2, 3])]));
    }

    #[test]
    fn test_ragged_into_existing_rows() {
        let src = Ragged::from_rows(vec![Some(vec![1i32, 2, 3]), Some(vec![4]), None]);
        let mut dst: Ragged<i64> =
            Ragged::from_rows(vec![Some(vec![0, 0]), None, Some(vec![9, 9])]);
        let n = convert_ragged_into(&src, &mut dst, Span::ALL, Truncate::signed()).unwrap();
        assert_eq!(n, 3);
        // The existing two-element row receives what fits; the missing row is
        // allocated; the null input row clears the output row.
        assert_eq!(dst, Ragged::from_rows(vec![Some(vec![1, 2]), Some(vec![4]), None]));
    }

    #[test]
    fn test_ragged_rank_mismatch() {
        let src = Ragged::from_rows(vec![Some(vec![1i32])]);
        let mut dst: Ragged<i32> = Ragged::flat(vec![0; 4]);
        assert_eq!(
            convert_ragged_into(&src, &mut dst, Span::ALL, Truncate::signed()),
            Err(ConvertError::RankMismatch {
                expected: 2,
                found: 1
            })
        );
        assert_eq!(dst, Ragged::flat(vec![0; 4]));
    }

    #[test]
    fn test_ragged_deep_empty_rank() {
        let src = Ragged::<i32>::empty(64).unwrap();
        let out: Ragged<f32> = convert_ragged(&src, Span::new(0, 2, None), Truncate::signed()).unwrap();
        assert_eq!(out.rank(), 64);
        assert_eq!(out.len(), 2);
        assert_eq!(out.element_count(), 0);
    }
}
