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

//! # Kind-Tagged Arrays
//!
//! Callers that do not know an array's element type at compile time hold it
//! as a tagged value: [`NumericVec`] for rank-1 data and [`AnyArray`] for any
//! rank. The tag replaces runtime type inspection; a single `match` selects
//! the typed payload, after which everything is ordinary generic code.
//!
//! ## Dispatch
//!
//! [`dispatch_vec!`](crate::dispatch_vec) and
//! [`dispatch_array!`](crate::dispatch_array) expand one expression once per
//! kind with the payload bound to a typed identifier:
//!
//! ```rust
//! use tessera_array::{dispatch_vec, NumericVec};
//!
//! let v = NumericVec::from(vec![1.5f32, 2.5]);
//! let total: f64 = dispatch_vec!(&v, values => values.iter().map(|&x| x as f64).sum());
//! assert_eq!(total, 4.0);
//! ```
//!
//! [`ArrayElement`] goes the other way, from a primitive type to its variant.

use crate::ragged::Ragged;
use tessera_core::{Element, NumericKind, Scalar};

/// A rank-1 array tagged with its kind.
#[derive(Clone, Debug, PartialEq)]
pub enum NumericVec {
    Int8(Vec<i8>),
    Int16(Vec<i16>),
    Int32(Vec<i32>),
    Int64(Vec<i64>),
    Float32(Vec<f32>),
    Float64(Vec<f64>),
}

/// An array of any rank tagged with its kind.
#[derive(Clone, Debug, PartialEq)]
pub enum AnyArray {
    Int8(Ragged<i8>),
    Int16(Ragged<i16>),
    Int32(Ragged<i32>),
    Int64(Ragged<i64>),
    Float32(Ragged<f32>),
    Float64(Ragged<f64>),
}

/// Evaluates an expression against the typed payload of a [`NumericVec`].
///
/// The expression is expanded once per kind, so it must type-check for
/// every element type.
#[macro_export]
macro_rules! dispatch_vec {
    ($value:expr, $v:ident => $body:expr) => {
        match $value {
            $crate::NumericVec::Int8($v) => $body,
            $crate::NumericVec::Int16($v) => $body,
            $crate::NumericVec::Int32($v) => $body,
            $crate::NumericVec::Int64($v) => $body,
            $crate::NumericVec::Float32($v) => $body,
            $crate::NumericVec::Float64($v) => $body,
        }
    };
}

/// Evaluates an expression against the typed payload of an [`AnyArray`].
#[macro_export]
macro_rules! dispatch_array {
    ($value:expr, $v:ident => $body:expr) => {
        match $value {
            $crate::AnyArray::Int8($v) => $body,
            $crate::AnyArray::Int16($v) => $body,
            $crate::AnyArray::Int32($v) => $body,
            $crate::AnyArray::Int64($v) => $body,
            $crate::AnyArray::Float32($v) => $body,
            $crate::AnyArray::Float64($v) => $body,
        }
    };
}

/// Maps a native primitive to its variants in [`NumericVec`] and [`AnyArray`].
pub trait ArrayElement: Element {
    fn into_vec(values: Vec<Self>) -> NumericVec;
    fn vec_ref(values: &NumericVec) -> Option<&Vec<Self>>;
    fn vec_mut(values: &mut NumericVec) -> Option<&mut Vec<Self>>;
    fn into_array(array: Ragged<Self>) -> AnyArray;
    fn array_ref(array: &AnyArray) -> Option<&Ragged<Self>>;
    fn array_mut(array: &mut AnyArray) -> Option<&mut Ragged<Self>>;
}

macro_rules! impl_array_element {
    ($t:ty, $variant:ident) => {
        impl ArrayElement for $t {
            #[inline(always)]
            fn into_vec(values: Vec<Self>) -> NumericVec {
                NumericVec::$variant(values)
            }

            #[inline(always)]
            fn vec_ref(values: &NumericVec) -> Option<&Vec<Self>> {
                match values {
                    NumericVec::$variant(v) => Some(v),
                    _ => None,
                }
            }

            #[inline(always)]
            fn vec_mut(values: &mut NumericVec) -> Option<&mut Vec<Self>> {
                match values {
                    NumericVec::$variant(v) => Some(v),
                    _ => None,
                }
            }

            #[inline(always)]
            fn into_array(array: Ragged<Self>) -> AnyArray {
                AnyArray::$variant(array)
            }

            #[inline(always)]
            fn array_ref(array: &AnyArray) -> Option<&Ragged<Self>> {
                match array {
                    AnyArray::$variant(a) => Some(a),
                    _ => None,
                }
            }

            #[inline(always)]
            fn array_mut(array: &mut AnyArray) -> Option<&mut Ragged<Self>> {
                match array {
                    AnyArray::$variant(a) => Some(a),
                    _ => None,
                }
            }
        }

        impl From<Vec<$t>> for NumericVec {
            #[inline]
            fn from(values: Vec<$t>) -> Self {
                NumericVec::$variant(values)
            }
        }

        impl From<Ragged<$t>> for AnyArray {
            #[inline]
            fn from(array: Ragged<$t>) -> Self {
                AnyArray::$variant(array)
            }
        }

        impl From<Vec<$t>> for AnyArray {
            #[inline]
            fn from(values: Vec<$t>) -> Self {
                AnyArray::$variant(Ragged::flat(values))
            }
        }
    };
}

impl_array_element!(i8, Int8);
impl_array_element!(i16, Int16);
impl_array_element!(i32, Int32);
impl_array_element!(i64, Int64);
impl_array_element!(f32, Float32);
impl_array_element!(f64, Float64);

impl NumericVec {
    /// Allocates a zero-filled rank-1 array of `kind`.
    pub fn zeroed(kind: NumericKind, len: usize) -> Self {
        match kind {
            NumericKind::Int8 => NumericVec::Int8(vec![0; len]),
            NumericKind::Int16 => NumericVec::Int16(vec![0; len]),
            NumericKind::Int32 => NumericVec::Int32(vec![0; len]),
            NumericKind::Int64 => NumericVec::Int64(vec![0; len]),
            NumericKind::Float32 => NumericVec::Float32(vec![0.0; len]),
            NumericKind::Float64 => NumericVec::Float64(vec![0.0; len]),
        }
    }

    #[inline]
    pub fn kind(&self) -> NumericKind {
        match self {
            NumericVec::Int8(_) => NumericKind::Int8,
            NumericVec::Int16(_) => NumericKind::Int16,
            NumericVec::Int32(_) => NumericKind::Int32,
            NumericVec::Int64(_) => NumericKind::Int64,
            NumericVec::Float32(_) => NumericKind::Float32,
            NumericVec::Float64(_) => NumericKind::Float64,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        dispatch_vec!(self, v => v.len())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the payload if it holds `T`.
    #[inline]
    pub fn as_slice<T: ArrayElement>(&self) -> Option<&[T]> {
        T::vec_ref(self).map(Vec::as_slice)
    }

    /// Returns the payload mutably if it holds `T`.
    #[inline]
    pub fn as_mut_slice<T: ArrayElement>(&mut self) -> Option<&mut [T]> {
        T::vec_mut(self).map(Vec::as_mut_slice)
    }

    /// Reads element `index` widened under `signed`.
    pub fn get(&self, index: usize, signed: bool) -> Option<Scalar> {
        dispatch_vec!(self, v => v.get(index).map(|x| x.to_scalar(signed)))
    }

    /// Wraps the values as a rank-1 [`AnyArray`].
    pub fn into_array(self) -> AnyArray {
        dispatch_vec!(self, v => ArrayElement::into_array(Ragged::flat(v)))
    }
}

impl std::fmt::Display for NumericVec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NumericVec(kind: {}, len: {})", self.kind(), self.len())
    }
}

impl AnyArray {
    /// Allocates a zero-filled rank-1 array of `kind`.
    #[inline]
    pub fn zeroed(kind: NumericKind, len: usize) -> Self {
        NumericVec::zeroed(kind, len).into_array()
    }

    #[inline]
    pub fn kind(&self) -> NumericKind {
        match self {
            AnyArray::Int8(_) => NumericKind::Int8,
            AnyArray::Int16(_) => NumericKind::Int16,
            AnyArray::Int32(_) => NumericKind::Int32,
            AnyArray::Int64(_) => NumericKind::Int64,
            AnyArray::Float32(_) => NumericKind::Float32,
            AnyArray::Float64(_) => NumericKind::Float64,
        }
    }

    #[inline]
    pub fn rank(&self) -> usize {
        dispatch_array!(self, a => a.rank())
    }

    /// Length of the outermost level.
    #[inline]
    pub fn len(&self) -> usize {
        dispatch_array!(self, a => a.len())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn element_count(&self) -> usize {
        dispatch_array!(self, a => a.element_count())
    }

    /// Returns the typed payload if it holds `T`.
    #[inline]
    pub fn as_ragged<T: ArrayElement>(&self) -> Option<&Ragged<T>> {
        T::array_ref(self)
    }

    #[inline]
    pub fn as_ragged_mut<T: ArrayElement>(&mut self) -> Option<&mut Ragged<T>> {
        T::array_mut(self)
    }

    /// Returns the payload of a rank-1 array as a [`NumericVec`].
    pub fn to_flat_vec(&self) -> Option<NumericVec> {
        dispatch_array!(self, a => a.as_flat().map(|v| ArrayElement::into_vec(v.to_vec())))
    }
}

impl From<NumericVec> for AnyArray {
    #[inline]
    fn from(values: NumericVec) -> Self {
        values.into_array()
    }
}

impl std::fmt::Display for AnyArray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "AnyArray(kind: {}, rank: {}, elements: {})",
            self.kind(),
            self.rank(),
            self.element_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeroed_has_kind_and_len() {
        for kind in NumericKind::ALL {
            let v = NumericVec::zeroed(kind, 3);
            assert_eq!(v.kind(), kind);
            assert_eq!(v.len(), 3);
            let zero = if kind.is_float() {
                Scalar::Float(0.0)
            } else {
                Scalar::Int(0)
            };
            assert_eq!(v.get(2, true), Some(zero));
            assert_eq!(v.get(3, true), None);
        }
    }

    #[test]
    fn test_typed_access() {
        let mut v = NumericVec::from(vec![1i16, -2]);
        assert_eq!(v.as_slice::<i16>(), Some(&[1, -2][..]));
        assert!(v.as_slice::<i32>().is_none());
        v.as_mut_slice::<i16>().unwrap()[0] = 9;
        assert_eq!(v.get(0, true), Some(Scalar::Int(9)));
        assert_eq!(v.get(1, false), Some(Scalar::Int(65534)));
    }

    #[test]
    fn test_any_array_accessors() {
        let a = AnyArray::from(Ragged::from_rows(vec![Some(vec![1.0f64, 2.0]), None]));
        assert_eq!(a.kind(), NumericKind::Float64);
        assert_eq!(a.rank(), 2);
        assert_eq!(a.len(), 2);
        assert_eq!(a.element_count(), 2);
        assert!(a.as_ragged::<f64>().is_some());
        assert!(a.as_ragged::<f32>().is_none());
        assert!(a.to_flat_vec().is_none());
    }

    #[test]
    fn test_vec_into_array_round_trip() {
        let v = NumericVec::from(vec![5i64, 6]);
        let a: AnyArray = v.clone().into();
        assert_eq!(a.rank(), 1);
        assert_eq!(a.to_flat_vec(), Some(v));
    }

    #[test]
    fn test_dispatch_macros_bind_typed_payloads() {
        let v = NumericVec::from(vec![3i8, 4]);
        let doubled: Vec<f64> = dispatch_vec!(&v, xs => xs.iter().map(|&x| x as f64 * 2.0).collect());
        assert_eq!(doubled, vec![6.0, 8.0]);

        let a = AnyArray::from(vec![1i8; 4]);
        let leaves = dispatch_array!(&a, r => r.leaves().count());
        assert_eq!(leaves, 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            format!("{}", NumericVec::zeroed(NumericKind::Int32, 2)),
            "NumericVec(kind: int32, len: 2)"
        );
        assert_eq!(
            format!("{}", AnyArray::zeroed(NumericKind::Float32, 4)),
            "AnyArray(kind: float32, rank: 1, elements: 4)"
        );
    }
}
