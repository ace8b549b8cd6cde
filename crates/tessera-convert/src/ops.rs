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

//! # Conversion Operations
//!
//! The converter's public entry points, one pair per policy:
//!
//! - [`convert`] / [`convert_into`]: truncating conversion under a source
//!   signedness flag.
//! - [`convert_safe`] / [`convert_safe_into`]: clamping conversion under a
//!   source and a destination signedness flag.
//! - [`convert_value`] / [`convert_value_safe`]: the same rules for a
//!   single value.
//!
//! The allocating variants build a new array of the requested kind with the
//! rank of the input; the `_into` variants write into a caller-supplied
//! array and return the number of outermost entries converted.

use crate::{
    dispatch::{convert_array, convert_array_into},
    error::Result,
    policy::{Clamp, ConversionPolicy, Truncate},
    span::Span,
};
use tessera_array::AnyArray;
use tessera_core::{Element, NumericKind};

/// Truncating conversion into a new array of `dst_kind`.
///
/// ```rust
/// use tessera_array::AnyArray;
/// use tessera_convert::{convert, Span};
/// use tessera_core::NumericKind;
///
/// let src = AnyArray::from(vec![1i32, 200, -129]);
/// let out = convert(&src, NumericKind::Int8, Span::ALL, true).unwrap();
/// assert_eq!(out, AnyArray::from(vec![1i8, -56, 127]));
/// ```
#[inline]
pub fn convert(src: &AnyArray, dst_kind: NumericKind, span: Span, src_signed: bool) -> Result<AnyArray> {
    convert_array(src, dst_kind, span, Truncate::new(src_signed))
}

/// Truncating conversion into `dst`.
#[inline]
pub fn convert_into(src: &AnyArray, dst: &mut AnyArray, span: Span, src_signed: bool) -> Result<usize> {
    convert_array_into(src, dst, span, Truncate::new(src_signed))
}

/// Clamping conversion into a new array of `dst_kind`.
///
/// ```rust
/// use tessera_array::AnyArray;
/// use tessera_convert::{convert_safe, Span};
/// use tessera_core::NumericKind;
///
/// let src = AnyArray::from(vec![1i32, 200, -129]);
/// let out = convert_safe(&src, NumericKind::Int8, Span::ALL, true, true).unwrap();
/// assert_eq!(out, AnyArray::from(vec![1i8, 127, -128]));
/// ```
#[inline]
pub fn convert_safe(
    src: &AnyArray,
    dst_kind: NumericKind,
    span: Span,
    src_signed: bool,
    dst_signed: bool,
) -> Result<AnyArray> {
    convert_array(src, dst_kind, span, Clamp::new(src_signed, dst_signed))
}

/// Clamping conversion into `dst`.
#[inline]
pub fn convert_safe_into(
    src: &AnyArray,
    dst: &mut AnyArray,
    span: Span,
    src_signed: bool,
    dst_signed: bool,
) -> Result<usize> {
    convert_array_into(src, dst, span, Clamp::new(src_signed, dst_signed))
}

/// Truncating conversion of one value.
#[inline(always)]
pub fn convert_value<S: Element, D: Element>(value: S, src_signed: bool) -> D {
    Truncate::new(src_signed).convert(value)
}

/// Clamping conversion of one value.
#[inline(always)]
pub fn convert_value_safe<S: Element, D: Element>(value: S, src_signed: bool, dst_signed: bool) -> D {
    Clamp::new(src_signed, dst_signed).convert(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_array::Ragged;

    #[test]
    fn test_identity_conversion() {
        let src = AnyArray::from(Ragged::from_rows(vec![Some(vec![i64::MIN, -1, i64::MAX]), None]));
        assert_eq!(convert(&src, NumericKind::Int64, Span::ALL, true).unwrap(), src);
        assert_eq!(convert(&src, NumericKind::Int64, Span::ALL, false).unwrap(), src);
        assert_eq!(
            convert_safe(&src, NumericKind::Int64, Span::ALL, true, true).unwrap(),
            src
        );
    }

    #[test]
    fn test_into_partial_span() {
        let src = AnyArray::from(vec![1.5f64, 2.5, 3.5]);
        let mut dst = AnyArray::from(vec![9i32; 4]);
        assert_eq!(convert_into(&src, &mut dst, Span::new(1, 0, Some(2)), true), Ok(2));
        assert_eq!(dst, AnyArray::from(vec![2i32, 3, 9, 9]));
    }

    #[test]
    fn test_safe_into_unsigned() {
        let src = AnyArray::from(vec![-1i16, 300]);
        let mut dst = AnyArray::from(vec![0i8; 2]);
        convert_safe_into(&src, &mut dst, Span::ALL, false, false).unwrap();
        // 65535 and 300 both saturate to 255, the i8 pattern -1.
        assert_eq!(dst, AnyArray::from(vec![-1i8, -1]));
    }

    #[test]
    fn test_values() {
        assert_eq!(convert_value::<i16, i8>(-129, true), 127);
        assert_eq!(convert_value::<i8, f32>(-1, false), 255.0);
        assert_eq!(convert_value_safe::<i16, i8>(-129, true, true), -128);
        assert_eq!(convert_value_safe::<i8, i8>(-1, true, false), 0);
    }
}
