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

//! # Widened Values
//!
//! `Scalar` is the common currency of element conversion. Reading an element
//! under a signedness flag yields its true numeric magnitude as either an
//! `i128` (every signed or unsigned 64-bit value fits exactly) or an `f64`
//! (every `f32` fits exactly). Range checks and clamping happen on this
//! widened value, never on the narrow container.

/// A numeric value widened so that any two native kinds compare exactly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scalar {
    /// An integer magnitude, already interpreted under its signedness flag.
    Int(i128),
    /// A floating-point value.
    Float(f64),
}

impl Scalar {
    /// Returns `true` if this is an integer magnitude.
    #[inline(always)]
    pub const fn is_int(&self) -> bool {
        matches!(self, Scalar::Int(_))
    }

    /// Returns `true` if this is a NaN float.
    #[inline(always)]
    pub fn is_nan(&self) -> bool {
        match self {
            Scalar::Int(_) => false,
            Scalar::Float(f) => f.is_nan(),
        }
    }

    /// Returns the value as `f64`, rounding large integers to nearest.
    #[inline(always)]
    pub fn to_f64(self) -> f64 {
        match self {
            Scalar::Int(v) => v as f64,
            Scalar::Float(f) => f,
        }
    }

    /// Returns the integer part of the value, if it is finite and fits `i128`.
    ///
    /// Floats are truncated toward zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tessera_core::num::scalar::Scalar;
    /// assert_eq!(Scalar::Float(-3.9).trunc_int(), Some(-3));
    /// assert_eq!(Scalar::Float(f64::NAN).trunc_int(), None);
    /// assert_eq!(Scalar::Int(7).trunc_int(), Some(7));
    /// ```
    #[inline]
    pub fn trunc_int(self) -> Option<i128> {
        match self {
            Scalar::Int(v) => Some(v),
            Scalar::Float(f) => {
                let t = f.trunc();
                // 2^127: the first magnitude `i128` cannot hold.
                if t.is_finite() && t.abs() < 170_141_183_460_469_231_731_687_303_715_884_105_728.0 {
                    Some(t as i128)
                } else {
                    None
                }
            }
        }
    }
}

impl From<i64> for Scalar {
    #[inline]
    fn from(v: i64) -> Self {
        Scalar::Int(v as i128)
    }
}

impl From<u64> for Scalar {
    #[inline]
    fn from(v: u64) -> Self {
        Scalar::Int(v as i128)
    }
}

impl From<f64> for Scalar {
    #[inline]
    fn from(v: f64) -> Self {
        Scalar::Float(v)
    }
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Int(v) => write!(f, "{}", v),
            Scalar::Float(v) => write!(f, "{}", v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trunc_int_bounds() {
        assert_eq!(Scalar::Float(2.5).trunc_int(), Some(2));
        assert_eq!(Scalar::Float(-0.5).trunc_int(), Some(0));
        assert_eq!(Scalar::Float(f64::INFINITY).trunc_int(), None);
        assert_eq!(Scalar::Float(1e40).trunc_int(), None);
        assert_eq!(Scalar::Float(1e30).trunc_int(), Some(1e30 as i128));
    }

    #[test]
    fn test_conversions_and_display() {
        assert_eq!(Scalar::from(-1i64), Scalar::Int(-1));
        assert_eq!(Scalar::from(u64::MAX), Scalar::Int(u64::MAX as i128));
        assert_eq!(format!("{}", Scalar::Int(-12)), "-12");
        assert_eq!(format!("{}", Scalar::Float(1.5)), "1.5");
        assert!(Scalar::Float(f64::NAN).is_nan());
        assert!(!Scalar::Int(0).is_nan());
        assert_eq!(Scalar::Int(3).to_f64(), 3.0);
    }
}
