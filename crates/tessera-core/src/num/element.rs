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

//! # Native Elements
//!
//! `Element` ties a Rust primitive to one of the six native kinds and
//! provides the three primitive moves every array routine is built from:
//!
//! - widening an element into a [`Scalar`] under a signedness flag,
//! - narrowing a [`Scalar`] back into the container with fixed-width
//!   truncation (two's-complement wrap for integers),
//! - reading and writing the element's byte image in either byte order.
//!
//! ## Highlights
//!
//! - Implemented for exactly `i8`, `i16`, `i32`, `i64`, `f32`, `f64`.
//! - Unsigned views zero-extend through the same-width unsigned primitive,
//!   so `-1i8` read unsigned is `255`.
//! - Float to integer narrowing follows the JVM cast rules: truncate toward
//!   zero into `i32` (or `i64` for 64-bit destinations), saturating at that
//!   width and mapping NaN to zero, then wrap to the destination width.
//! - Float byte images go through the integer bit pattern (`to_bits` /
//!   `from_bits`), never through a value cast.
//!
//! ```rust
//! use tessera_core::num::{element::Element, scalar::Scalar};
//!
//! assert_eq!((-1i8).to_scalar(false), Scalar::Int(255));
//! assert_eq!(i8::from_scalar(Scalar::Int(300)), 44);
//! assert_eq!(i16::from_scalar(Scalar::Float(-2.9)), -2);
//! ```

use crate::num::{kind::NumericKind, order::ByteOrder, scalar::Scalar};
use num_traits::{AsPrimitive, Bounded, Num, NumCast};

/// A primitive that is the storage container of a [`NumericKind`].
pub trait Element:
    Copy
    + Default
    + PartialEq
    + PartialOrd
    + std::fmt::Debug
    + std::fmt::Display
    + Send
    + Sync
    + 'static
    + Num
    + Bounded
    + NumCast
    + AsPrimitive<f64>
{
    /// The kind this primitive stores.
    const KIND: NumericKind;

    /// Width of the container in bytes.
    const WIDTH: usize;

    /// Widens the element into its true magnitude.
    ///
    /// `signed` is ignored for floats.
    fn to_scalar(self, signed: bool) -> Scalar;

    /// Narrows a widened value into this container without range checks.
    fn from_scalar(value: Scalar) -> Self;

    /// Narrows a widened value after saturating it into this kind's range
    /// under `signed`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tessera_core::num::{element::Element, scalar::Scalar};
    /// assert_eq!(i8::from_scalar_saturating(Scalar::Int(300), true), 127);
    /// // 255 stored unsigned in an i8 container is the bit pattern -1.
    /// assert_eq!(i8::from_scalar_saturating(Scalar::Int(300), false), -1);
    /// ```
    #[inline]
    fn from_scalar_saturating(value: Scalar, signed: bool) -> Self {
        Self::from_scalar(Self::KIND.range(signed).clamp(value))
    }

    /// Returns `true` if the top bit of the stored pattern is set.
    fn has_sign_bit(self) -> bool;

    /// Decodes an element from the first `WIDTH` bytes of `bytes`.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is shorter than `WIDTH`.
    fn read_from(bytes: &[u8], order: ByteOrder) -> Self;

    /// Encodes the element into the first `WIDTH` bytes of `out`.
    ///
    /// # Panics
    ///
    /// Panics if `out` is shorter than `WIDTH`.
    fn write_to(self, out: &mut [u8], order: ByteOrder);
}

macro_rules! impl_element_int {
    ($t:ty, $unsigned:ty, $kind:ident, $via:ty) => {
        impl Element for $t {
            const KIND: NumericKind = NumericKind::$kind;
            const WIDTH: usize = std::mem::size_of::<$t>();

            #[inline(always)]
            fn to_scalar(self, signed: bool) -> Scalar {
                if signed {
                    Scalar::Int(self as i128)
                } else {
                    Scalar::Int((self as $unsigned) as i128)
                }
            }

            #[inline(always)]
            fn from_scalar(value: Scalar) -> Self {
                match value {
                    Scalar::Int(v) => v as $t,
                    Scalar::Float(f) => (f as $via) as $t,
                }
            }

            #[inline(always)]
            fn has_sign_bit(self) -> bool {
                self < 0
            }

            #[inline(always)]
            fn read_from(bytes: &[u8], order: ByteOrder) -> Self {
                let mut raw = [0u8; std::mem::size_of::<$t>()];
                raw.copy_from_slice(&bytes[..std::mem::size_of::<$t>()]);
                match order {
                    ByteOrder::Little => <$t>::from_le_bytes(raw),
                    ByteOrder::Big => <$t>::from_be_bytes(raw),
                }
            }

            #[inline(always)]
            fn write_to(self, out: &mut [u8], order: ByteOrder) {
                let raw = match order {
                    ByteOrder::Little => self.to_le_bytes(),
                    ByteOrder::Big => self.to_be_bytes(),
                };
                out[..std::mem::size_of::<$t>()].copy_from_slice(&raw);
            }
        }
    };
}

macro_rules! impl_element_float {
    ($t:ty, $bits:ty, $kind:ident) => {
        impl Element for $t {
            const KIND: NumericKind = NumericKind::$kind;
            const WIDTH: usize = std::mem::size_of::<$t>();

            #[inline(always)]
            fn to_scalar(self, _signed: bool) -> Scalar {
                Scalar::Float(self.as_())
            }

            #[inline(always)]
            fn from_scalar(value: Scalar) -> Self {
                match value {
                    Scalar::Int(v) => v as $t,
                    Scalar::Float(f) => f as $t,
                }
            }

            #[inline(always)]
            fn has_sign_bit(self) -> bool {
                self.is_sign_negative()
            }

            #[inline(always)]
            fn read_from(bytes: &[u8], order: ByteOrder) -> Self {
                let mut raw = [0u8; std::mem::size_of::<$bits>()];
                raw.copy_from_slice(&bytes[..std::mem::size_of::<$bits>()]);
                let bits = match order {
                    ByteOrder::Little => <$bits>::from_le_bytes(raw),
                    ByteOrder::Big => <$bits>::from_be_bytes(raw),
                };
                <$t>::from_bits(bits)
            }

            #[inline(always)]
            fn write_to(self, out: &mut [u8], order: ByteOrder) {
                let bits = self.to_bits();
                let raw = match order {
                    ByteOrder::Little => bits.to_le_bytes(),
                    ByteOrder::Big => bits.to_be_bytes(),
                };
                out[..std::mem::size_of::<$bits>()].copy_from_slice(&raw);
            }
        }
    };
}

impl_element_int!(i8, u8, Int8, i32);
impl_element_int!(i16, u16, Int16, i32);
impl_element_int!(i32, u32, Int32, i32);
impl_element_int!(i64, u64, Int64, i64);

impl_element_float!(f32, u32, Float32);
impl_element_float!(f64, u64, Float64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_and_widths() {
        assert_eq!(i8::KIND, NumericKind::Int8);
        assert_eq!(i16::KIND, NumericKind::Int16);
        assert_eq!(i32::KIND, NumericKind::Int32);
        assert_eq!(i64::KIND, NumericKind::Int64);
        assert_eq!(f32::KIND, NumericKind::Float32);
        assert_eq!(f64::KIND, NumericKind::Float64);
        assert_eq!(i16::WIDTH, NumericKind::Int16.width());
        assert_eq!(f64::WIDTH, NumericKind::Float64.width());
    }

    #[test]
    fn test_unsigned_view_zero_extends() {
        assert_eq!((-1i8).to_scalar(false), Scalar::Int(255));
        assert_eq!((-1i16).to_scalar(false), Scalar::Int(65535));
        assert_eq!(i32::MIN.to_scalar(false), Scalar::Int(1 << 31));
        assert_eq!((-1i64).to_scalar(false), Scalar::Int(u64::MAX as i128));
        assert_eq!((-1i64).to_scalar(true), Scalar::Int(-1));
        assert_eq!((-2.5f32).to_scalar(false), Scalar::Float(-2.5));
    }

    #[test]
    fn test_from_scalar_wraps_integers() {
        assert_eq!(i8::from_scalar(Scalar::Int(255)), -1);
        assert_eq!(i8::from_scalar(Scalar::Int(256)), 0);
        assert_eq!(i16::from_scalar(Scalar::Int(70000)), 4464);
        assert_eq!(i64::from_scalar(Scalar::Int(u64::MAX as i128)), -1);
    }

    #[test]
    fn test_from_scalar_float_to_integer_follows_two_step_cast() {
        // Truncate toward zero.
        assert_eq!(i32::from_scalar(Scalar::Float(3.99)), 3);
        assert_eq!(i32::from_scalar(Scalar::Float(-3.99)), -3);
        // Saturate at the i32 intermediate, then wrap to i8.
        assert_eq!(i8::from_scalar(Scalar::Float(1e10)), -1);
        assert_eq!(i8::from_scalar(Scalar::Float(200.0)), -56);
        assert_eq!(i32::from_scalar(Scalar::Float(1e10)), i32::MAX);
        assert_eq!(i64::from_scalar(Scalar::Float(1e10)), 10_000_000_000);
        assert_eq!(i16::from_scalar(Scalar::Float(f64::NAN)), 0);
    }

    #[test]
    fn test_from_scalar_into_floats() {
        assert_eq!(f32::from_scalar(Scalar::Int(16_777_217)), 16_777_216.0);
        assert_eq!(f64::from_scalar(Scalar::Int(u64::MAX as i128)), u64::MAX as f64);
        assert_eq!(f32::from_scalar(Scalar::Float(1e300)), f32::INFINITY);
    }

    #[test]
    fn test_saturating_narrowing() {
        assert_eq!(i16::from_scalar_saturating(Scalar::Int(-40000), true), i16::MIN);
        assert_eq!(i16::from_scalar_saturating(Scalar::Int(-40000), false), 0);
        assert_eq!(i16::from_scalar_saturating(Scalar::Int(70000), false), -1);
        assert_eq!(f32::from_scalar_saturating(Scalar::Float(1e300), true), f32::MAX);
        assert_eq!(i32::from_scalar_saturating(Scalar::Float(-1e20), true), i32::MIN);
    }

    #[test]
    fn test_sign_bit() {
        assert!((-1i8).has_sign_bit());
        assert!(!0i64.has_sign_bit());
        assert!((-0.0f64).has_sign_bit());
        assert!(!1.0f32.has_sign_bit());
    }

    #[test]
    fn test_byte_images_respect_order() {
        let mut buf = [0u8; 4];
        0x0102_0304i32.write_to(&mut buf, ByteOrder::Big);
        assert_eq!(buf, [1, 2, 3, 4]);
        0x0102_0304i32.write_to(&mut buf, ByteOrder::Little);
        assert_eq!(buf, [4, 3, 2, 1]);
        assert_eq!(i32::read_from(&[4, 3, 2, 1], ByteOrder::Little), 0x0102_0304);
        assert_eq!(i16::read_from(&[0xFF, 0xFE], ByteOrder::Big), -2);
    }

    #[test]
    fn test_float_byte_images_are_bit_patterns() {
        let mut buf = [0u8; 8];
        1.0f64.write_to(&mut buf, ByteOrder::Big);
        assert_eq!(buf, [0x3F, 0xF0, 0, 0, 0, 0, 0, 0]);

        let nan_bits = 0x7FC0_0001u32;
        let bytes = nan_bits.to_le_bytes();
        let v = f32::read_from(&bytes, ByteOrder::Little);
        assert_eq!(v.to_bits(), nan_bits);
    }

    #[test]
    fn test_read_ignores_trailing_bytes() {
        assert_eq!(i8::read_from(&[7, 8, 9], ByteOrder::Big), 7);
    }
}
