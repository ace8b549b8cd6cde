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

//! # Kind Ranges
//!
//! The range model answers one question: given a kind and a signedness flag,
//! which values can the container represent? Integer ranges are expressed
//! in `i128` so the unsigned 64-bit maximum is exact; float ranges are the
//! finite extent of the IEEE type expressed in `f64`. Signedness is ignored
//! for float kinds.
//!
//! ```rust
//! use tessera_core::num::{kind::NumericKind, range::KindRange};
//!
//! assert_eq!(
//!     NumericKind::Int8.range(false),
//!     KindRange::Integer { min: 0, max: 255 }
//! );
//! assert_eq!(
//!     NumericKind::Int16.range(true),
//!     KindRange::Integer { min: -32768, max: 32767 }
//! );
//! ```

use crate::num::{kind::NumericKind, scalar::Scalar};

/// Inclusive `[min, max]` bounds of a kind under a signedness interpretation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KindRange {
    Integer { min: i128, max: i128 },
    Float { min: f64, max: f64 },
}

impl NumericKind {
    /// Returns the representable range of this kind.
    ///
    /// For integer kinds `signed` selects between `[-2^(n-1), 2^(n-1) - 1]`
    /// and `[0, 2^n - 1]`; for float kinds it is ignored.
    #[inline]
    pub const fn range(self, signed: bool) -> KindRange {
        match self {
            NumericKind::Float32 => KindRange::Float {
                min: -(f32::MAX as f64),
                max: f32::MAX as f64,
            },
            NumericKind::Float64 => KindRange::Float {
                min: -f64::MAX,
                max: f64::MAX,
            },
            _ => {
                let bits = self.bits();
                if signed {
                    let half = 1i128 << (bits - 1);
                    KindRange::Integer {
                        min: -half,
                        max: half - 1,
                    }
                } else {
                    KindRange::Integer {
                        min: 0,
                        max: (1i128 << bits) - 1,
                    }
                }
            }
        }
    }
}

impl KindRange {
    /// Lower bound as `f64`.
    #[inline]
    pub fn min_f64(&self) -> f64 {
        match *self {
            KindRange::Integer { min, .. } => min as f64,
            KindRange::Float { min, .. } => min,
        }
    }

    /// Upper bound as `f64`.
    #[inline]
    pub fn max_f64(&self) -> f64 {
        match *self {
            KindRange::Integer { max, .. } => max as f64,
            KindRange::Float { max, .. } => max,
        }
    }

    /// Returns `true` if converting `value` into this range needs no clamping.
    ///
    /// Floats checked against an integer range are judged by their integer
    /// part, since that is what a conversion keeps. NaN is never contained.
    pub fn contains(&self, value: Scalar) -> bool {
        match *self {
            KindRange::Integer { min, max } => match value.trunc_int() {
                Some(v) => min <= v && v <= max,
                None => false,
            },
            KindRange::Float { min, max } => {
                let v = value.to_f64();
                min <= v && v <= max
            }
        }
    }

    /// Saturates `value` into this range.
    ///
    /// The result is an `Int` for integer ranges and a `Float` for float
    /// ranges. Integer results of float inputs are truncated toward zero and
    /// NaN becomes zero. A NaN clamped into a float range stays NaN.
    pub fn clamp(&self, value: Scalar) -> Scalar {
        match (*self, value) {
            (KindRange::Integer { min, max }, Scalar::Int(v)) => Scalar::Int(v.clamp(min, max)),
            (KindRange::Integer { min, max }, Scalar::Float(f)) => {
                if f.is_nan() {
                    Scalar::Int(0)
                } else if f >= max as f64 {
                    Scalar::Int(max)
                } else if f <= min as f64 {
                    Scalar::Int(min)
                } else {
                    Scalar::Int(f.trunc() as i128)
                }
            }
            (KindRange::Float { min, max }, v) => {
                let f = v.to_f64();
                if f.is_nan() {
                    Scalar::Float(f)
                } else {
                    Scalar::Float(f.clamp(min, max))
                }
            }
        }
    }
}

impl std::fmt::Display for KindRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KindRange::Integer { min, max } => write!(f, "[{}, {}]", min, max),
            KindRange::Float { min, max } => write!(f, "[{:e}, {:e}]", min, max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int_range(kind: NumericKind, signed: bool) -> (i128, i128) {
        match kind.range(signed) {
            KindRange::Integer { min, max } => (min, max),
            KindRange::Float { .. } => panic!("expected integer range for {kind}"),
        }
    }

    #[test]
    fn test_signed_ranges_match_primitives() {
        assert_eq!(int_range(NumericKind::Int8, true), (i8::MIN as i128, i8::MAX as i128));
        assert_eq!(int_range(NumericKind::Int16, true), (i16::MIN as i128, i16::MAX as i128));
        assert_eq!(int_range(NumericKind::Int32, true), (i32::MIN as i128, i32::MAX as i128));
        assert_eq!(int_range(NumericKind::Int64, true), (i64::MIN as i128, i64::MAX as i128));
    }

    #[test]
    fn test_unsigned_ranges_match_primitives() {
        assert_eq!(int_range(NumericKind::Int8, false), (0, u8::MAX as i128));
        assert_eq!(int_range(NumericKind::Int16, false), (0, u16::MAX as i128));
        assert_eq!(int_range(NumericKind::Int32, false), (0, u32::MAX as i128));
        assert_eq!(int_range(NumericKind::Int64, false), (0, u64::MAX as i128));
    }

    #[test]
    fn test_float_ranges_ignore_signedness() {
        assert_eq!(NumericKind::Float32.range(true), NumericKind::Float32.range(false));
        assert_eq!(NumericKind::Float64.range(false).max_f64(), f64::MAX);
        assert_eq!(NumericKind::Float32.range(true).min_f64(), -(f32::MAX as f64));
    }

    #[test]
    fn test_contains() {
        let r = NumericKind::Int8.range(false);
        assert!(r.contains(Scalar::Int(0)));
        assert!(r.contains(Scalar::Int(255)));
        assert!(!r.contains(Scalar::Int(256)));
        assert!(!r.contains(Scalar::Int(-1)));
        assert!(r.contains(Scalar::Float(255.9)));
        assert!(r.contains(Scalar::Float(-0.9)));
        assert!(!r.contains(Scalar::Float(f64::NAN)));

        let f = NumericKind::Float32.range(true);
        assert!(f.contains(Scalar::Float(1.0e38)));
        assert!(!f.contains(Scalar::Float(1.0e39)));
        assert!(f.contains(Scalar::Int(i64::MIN as i128)));
    }

    #[test]
    fn test_clamp_integer_range() {
        let r = NumericKind::Int8.range(true);
        assert_eq!(r.clamp(Scalar::Int(300)), Scalar::Int(127));
        assert_eq!(r.clamp(Scalar::Int(-300)), Scalar::Int(-128));
        assert_eq!(r.clamp(Scalar::Int(5)), Scalar::Int(5));
        assert_eq!(r.clamp(Scalar::Float(-7.8)), Scalar::Int(-7));
        assert_eq!(r.clamp(Scalar::Float(1e10)), Scalar::Int(127));
        assert_eq!(r.clamp(Scalar::Float(f64::NEG_INFINITY)), Scalar::Int(-128));
        assert_eq!(r.clamp(Scalar::Float(f64::NAN)), Scalar::Int(0));
    }

    #[test]
    fn test_clamp_unsigned_64_is_exact() {
        let r = NumericKind::Int64.range(false);
        assert_eq!(r.clamp(Scalar::Float(1e30)), Scalar::Int(u64::MAX as i128));
        assert_eq!(r.clamp(Scalar::Int(-5)), Scalar::Int(0));
        assert_eq!(r.clamp(Scalar::Int(u64::MAX as i128)), Scalar::Int(u64::MAX as i128));
    }

    #[test]
    fn test_clamp_float_range() {
        let r = NumericKind::Float32.range(true);
        assert_eq!(r.clamp(Scalar::Float(1e300)), Scalar::Float(f32::MAX as f64));
        assert_eq!(r.clamp(Scalar::Float(f64::NEG_INFINITY)), Scalar::Float(-(f32::MAX as f64)));
        assert_eq!(r.clamp(Scalar::Int(42)), Scalar::Float(42.0));
        assert!(r.clamp(Scalar::Float(f64::NAN)).is_nan());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", NumericKind::Int8.range(true)), "[-128, 127]");
    }
}
