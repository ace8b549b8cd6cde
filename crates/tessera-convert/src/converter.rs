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

//! # Configured Converter
//!
//! `Converter` bundles a policy family with its signedness flags so that a
//! conversion rule chosen once (typically from settings) can be applied to
//! arrays, slices, single values and widened scalars alike.

use crate::{
    dispatch::{convert_array, convert_array_into, convert_vec},
    error::Result,
    policy::{Clamp, ConversionPolicy, PolicyKind, Truncate, narrow_scalar},
    span::Span,
};
use tessera_array::{AnyArray, NumericVec};
use tessera_core::{Element, NumericKind, Scalar};

/// A conversion policy together with its signedness flags.
///
/// The default is signed truncation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Converter {
    policy: PolicyKind,
    src_signed: bool,
    dst_signed: bool,
}

macro_rules! with_policy {
    ($converter:expr, $p:ident => $body:expr) => {
        match $converter.policy {
            PolicyKind::Truncate => {
                let $p = Truncate::new($converter.src_signed);
                $body
            }
            PolicyKind::Clamp => {
                let $p = Clamp::new($converter.src_signed, $converter.dst_signed);
                $body
            }
        }
    };
}

impl Converter {
    #[inline]
    pub const fn new(policy: PolicyKind, src_signed: bool, dst_signed: bool) -> Self {
        Self {
            policy,
            src_signed,
            dst_signed,
        }
    }

    /// A truncating converter; the destination flag only affects
    /// [`convert_scalar`](Self::convert_scalar) read-back.
    #[inline]
    pub const fn truncating(src_signed: bool) -> Self {
        Self::new(PolicyKind::Truncate, src_signed, true)
    }

    #[inline]
    pub const fn clamping(src_signed: bool, dst_signed: bool) -> Self {
        Self::new(PolicyKind::Clamp, src_signed, dst_signed)
    }

    #[inline(always)]
    pub const fn policy(&self) -> PolicyKind {
        self.policy
    }

    #[inline(always)]
    pub const fn src_signed(&self) -> bool {
        self.src_signed
    }

    #[inline(always)]
    pub const fn dst_signed(&self) -> bool {
        self.dst_signed
    }

    /// Converts all of `src` into a new array of `dst_kind`.
    #[inline]
    pub fn convert(&self, src: &AnyArray, dst_kind: NumericKind) -> Result<AnyArray> {
        self.convert_span(src, dst_kind, Span::ALL)
    }

    pub fn convert_span(&self, src: &AnyArray, dst_kind: NumericKind, span: Span) -> Result<AnyArray> {
        with_policy!(self, p => convert_array(src, dst_kind, span, p))
    }

    pub fn convert_into(&self, src: &AnyArray, dst: &mut AnyArray, span: Span) -> Result<usize> {
        with_policy!(self, p => convert_array_into(src, dst, span, p))
    }

    pub fn convert_vec(&self, src: &NumericVec, dst_kind: NumericKind) -> Result<NumericVec> {
        with_policy!(self, p => convert_vec(src, dst_kind, Span::ALL, p))
    }

    /// Converts as many leading elements as both slices hold.
    pub fn convert_slice<S: Element, D: Element>(&self, src: &[S], dst: &mut [D]) -> usize {
        let n = src.len().min(dst.len());
        with_policy!(self, p => p.convert_slice(&src[..n], &mut dst[..n]));
        n
    }

    #[inline]
    pub fn convert_value<S: Element, D: Element>(&self, value: S) -> D {
        with_policy!(self, p => p.convert(value))
    }

    /// Converts a widened value as if it were stored in `dst_kind`, and
    /// reads the stored result back under the destination signedness.
    ///
    /// ```rust
    /// use tessera_convert::Converter;
    /// use tessera_core::{NumericKind, Scalar};
    ///
    /// let clamp = Converter::clamping(true, false);
    /// assert_eq!(clamp.convert_scalar(Scalar::Int(-4), NumericKind::Int8), Scalar::Int(0));
    /// assert_eq!(clamp.convert_scalar(Scalar::Int(999), NumericKind::Int8), Scalar::Int(255));
    /// ```
    pub fn convert_scalar(&self, value: Scalar, dst_kind: NumericKind) -> Scalar {
        match dst_kind {
            NumericKind::Int8 => self.scalar_as::<i8>(value),
            NumericKind::Int16 => self.scalar_as::<i16>(value),
            NumericKind::Int32 => self.scalar_as::<i32>(value),
            NumericKind::Int64 => self.scalar_as::<i64>(value),
            NumericKind::Float32 => self.scalar_as::<f32>(value),
            NumericKind::Float64 => self.scalar_as::<f64>(value),
        }
    }

    #[inline]
    fn scalar_as<D: Element>(&self, value: Scalar) -> Scalar {
        narrow_scalar::<D>(value, self.dst_signed, self.policy).to_scalar(self.dst_signed)
    }
}

impl Default for Converter {
    #[inline]
    fn default() -> Self {
        Self::truncating(true)
    }
}

impl std::fmt::Display for Converter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Converter(policy: {}, src_signed: {}, dst_signed: {})",
            self.policy, self.src_signed, self.dst_signed
        )
    }
}
