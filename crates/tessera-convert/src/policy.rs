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

//! # Conversion Policies
//!
//! A policy decides how one element of a source kind becomes one element of
//! a destination kind. Every array routine in this crate is generic over a
//! [`ConversionPolicy`], so the 6×6 kind matrix collapses into one generic
//! loop per policy.
//!
//! ## Policies
//!
//! - [`Truncate`]: fixed-width cast with no range check. Integers wrap as
//!   two's complement, floats truncate toward zero through the JVM
//!   two-step cast.
//! - [`Clamp`]: saturates the true magnitude of the source into the
//!   destination range under the destination's signedness.
//!
//! ```rust
//! use tessera_convert::policy::{Clamp, ConversionPolicy, Truncate};
//!
//! assert_eq!(Truncate::signed().convert::<i16, i8>(300), 44);
//! assert_eq!(Clamp::signed().convert::<i16, i8>(300), 127);
//!
//! // -1 read as unsigned 8-bit is 255, which fits an unsigned 16-bit target.
//! assert_eq!(Clamp::new(false, false).convert::<i8, i16>(-1), 255);
//! ```

use tessera_core::{Element, Scalar};

/// Element-wise conversion rule between two native kinds.
pub trait ConversionPolicy: Copy {
    /// Converts one element.
    fn convert<S: Element, D: Element>(&self, value: S) -> D;

    /// Converts `src` into `dst` element by element.
    ///
    /// Both slices must have the same length.
    #[inline]
    fn convert_slice<S: Element, D: Element>(&self, src: &[S], dst: &mut [D]) {
        debug_assert_eq!(src.len(), dst.len());
        for (d, &s) in dst.iter_mut().zip(src) {
            *d = self.convert(s);
        }
    }
}

/// Fixed-width cast without range checking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Truncate {
    /// Read integer sources as signed; unsigned sources are zero-extended.
    pub src_signed: bool,
}

impl Truncate {
    #[inline(always)]
    pub const fn new(src_signed: bool) -> Self {
        Self { src_signed }
    }

    #[inline(always)]
    pub const fn signed() -> Self {
        Self::new(true)
    }
}

impl Default for Truncate {
    #[inline]
    fn default() -> Self {
        Self::signed()
    }
}

impl ConversionPolicy for Truncate {
    #[inline(always)]
    fn convert<S: Element, D: Element>(&self, value: S) -> D {
        D::from_scalar(value.to_scalar(self.src_signed))
    }
}

/// Saturating cast into the destination range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Clamp {
    pub src_signed: bool,
    pub dst_signed: bool,
}

impl Clamp {
    #[inline(always)]
    pub const fn new(src_signed: bool, dst_signed: bool) -> Self {
        Self {
            src_signed,
            dst_signed,
        }
    }

    #[inline(always)]
    pub const fn signed() -> Self {
        Self::new(true, true)
    }

    /// Returns `true` if every `S` read under `src_signed` already lies in
    /// the range of `D` under `dst_signed`, so no value ever needs clamping.
    #[inline]
    pub fn is_lossless<S: Element, D: Element>(&self) -> bool {
        let (src, dst) = (S::KIND, D::KIND);
        match (src.is_float(), dst.is_float()) {
            (false, false) => {
                (self.src_signed == self.dst_signed && dst.width() >= src.width())
                    || (!self.src_signed && self.dst_signed && dst.width() > src.width())
            }
            (false, true) => true,
            // Infinities still saturate to the finite extent.
            (true, _) => false,
        }
    }
}

impl Default for Clamp {
    #[inline]
    fn default() -> Self {
        Self::signed()
    }
}

impl ConversionPolicy for Clamp {
    #[inline]
    fn convert<S: Element, D: Element>(&self, value: S) -> D {
        let same_width_cross_sign = S::KIND.is_integer()
            && D::KIND.is_integer()
            && S::WIDTH == D::WIDTH
            && self.src_signed != self.dst_signed;

        if same_width_cross_sign {
            // Both sides share the container, so only the top bit decides.
            return if !value.has_sign_bit() {
                D::from_scalar(value.to_scalar(true))
            } else if self.src_signed {
                D::zero()
            } else {
                D::max_value()
            };
        }

        D::from_scalar_saturating(value.to_scalar(self.src_signed), self.dst_signed)
    }

    #[inline]
    fn convert_slice<S: Element, D: Element>(&self, src: &[S], dst: &mut [D]) {
        debug_assert_eq!(src.len(), dst.len());
        if self.is_lossless::<S, D>() {
            return Truncate::new(self.src_signed).convert_slice(src, dst);
        }
        for (d, &s) in dst.iter_mut().zip(src) {
            *d = self.convert(s);
        }
    }
}

/// The policy family, as named in configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum PolicyKind {
    #[default]
    Truncate,
    Clamp,
}

impl std::fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PolicyKind::Truncate => f.write_str("truncate"),
            PolicyKind::Clamp => f.write_str("clamp"),
        }
    }
}

/// Narrows a widened value into `D` under a policy family.
///
/// Used where callers hold a [`Scalar`] rather than a typed element.
#[inline]
pub fn narrow_scalar<D: Element>(value: Scalar, dst_signed: bool, kind: PolicyKind) -> D {
    match kind {
        PolicyKind::Truncate => D::from_scalar(value),
        PolicyKind::Clamp => D::from_scalar_saturating(value, dst_signed),
    }
}
