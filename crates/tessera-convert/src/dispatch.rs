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

//! # Kind Dispatch
//!
//! Conversion of kind-tagged values. A nested match over the source and
//! destination tags forms the 6×6 dispatch table; each of its 36 cells is a
//! monomorphized call into [`typed`](crate::typed). The table is consulted
//! once per call, never per element.

use crate::{
    error::{ConvertError, Result},
    policy::ConversionPolicy,
    span::Span,
    typed::{convert_ragged_into, convert_slice_with},
};
use tessera_array::{AnyArray, NumericVec, dispatch_array, dispatch_vec};
use tessera_core::NumericKind;

/// Converts the elements named by `span` between two rank-1 tagged arrays.
///
/// Returns the number of elements converted.
///
/// # Errors
///
/// Returns [`ConvertError::OutOfBounds`] if `span` does not fit.
pub fn convert_vec_into<P: ConversionPolicy>(
    src: &NumericVec,
    dst: &mut NumericVec,
    span: Span,
    policy: P,
) -> Result<usize> {
    dispatch_vec!(src, s => dispatch_vec!(&mut *dst, d => convert_slice_with(s, d, span, policy)))
}

/// Converts a rank-1 tagged array into a new one of `dst_kind`.
///
/// # Errors
///
/// Returns [`ConvertError::OutOfBounds`] if `span` does not fit `src`.
pub fn convert_vec<P: ConversionPolicy>(
    src: &NumericVec,
    dst_kind: NumericKind,
    span: Span,
    policy: P,
) -> Result<NumericVec> {
    let n = span.resolve_source(src.len())?;
    let mut dst = NumericVec::zeroed(dst_kind, output_len(span, n)?);
    convert_vec_into(src, &mut dst, Span { length: Some(n), ..span }, policy)?;
    Ok(dst)
}

/// Converts the outermost entries named by `span` between two tagged arrays
/// of equal rank.
///
/// # Errors
///
/// Returns [`ConvertError::RankMismatch`] or [`ConvertError::OutOfBounds`]
/// before anything is written.
pub fn convert_array_into<P: ConversionPolicy>(
    src: &AnyArray,
    dst: &mut AnyArray,
    span: Span,
    policy: P,
) -> Result<usize> {
    dispatch_array!(src, s => dispatch_array!(&mut *dst, d => convert_ragged_into(s, d, span, policy)))
}

/// Converts a tagged array into a new one of `dst_kind` and the same rank.
///
/// # Errors
///
/// Returns [`ConvertError::OutOfBounds`] if `span` does not fit `src`.
pub fn convert_array<P: ConversionPolicy>(
    src: &AnyArray,
    dst_kind: NumericKind,
    span: Span,
    policy: P,
) -> Result<AnyArray> {
    let n = span.resolve_source(src.len())?;
    let mut dst = src
        .descriptor()
        .with_kind(dst_kind)
        .zeroed_array(output_len(span, n)?);
    convert_array_into(src, &mut dst, Span { length: Some(n), ..span }, policy)?;
    Ok(dst)
}

#[inline]
fn output_len(span: Span, n: usize) -> Result<usize> {
    span.dst_offset
        .checked_add(n)
        .ok_or(ConvertError::OutOfBounds {
            offset: span.dst_offset,
            length: n,
            bound: usize::MAX,
        })
}
