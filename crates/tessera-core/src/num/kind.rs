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

//! # Native Numeric Kinds
//!
//! `NumericKind` enumerates the six storage containers an array element can
//! live in. A kind fixes the byte width and whether the container holds an
//! IEEE-754 float; it says nothing about signedness, which is supplied per
//! operation.
//!
//! ## Names
//!
//! Kinds can be recovered from names at runtime boundaries (settings files,
//! textual array descriptors). Every kind has a canonical name (`int8`,
//! `int16`, `int32`, `int64`, `float32`, `float64`) and a handful of
//! aliases. Unsigned integer spellings such as `uint16` or `u16` resolve to
//! the same container as their signed twin and are reported through
//! [`KindSpec::signed`]. Anything else fails with
//! [`KindError::UnsupportedKind`].
//!
//! ```rust
//! use tessera_core::num::kind::{KindSpec, NumericKind};
//!
//! let spec: KindSpec = "uint16".parse().unwrap();
//! assert_eq!(spec.kind, NumericKind::Int16);
//! assert!(!spec.signed);
//!
//! assert!("bool".parse::<NumericKind>().is_err());
//! ```

use crate::error::KindError;
use std::str::FromStr;

/// One of the six native numeric storage representations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum NumericKind {
    Int8,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
}

impl NumericKind {
    /// All kinds, ordered by family and then by width.
    pub const ALL: [NumericKind; 6] = [
        NumericKind::Int8,
        NumericKind::Int16,
        NumericKind::Int32,
        NumericKind::Int64,
        NumericKind::Float32,
        NumericKind::Float64,
    ];

    /// Returns the container width in bytes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tessera_core::num::kind::NumericKind;
    /// assert_eq!(NumericKind::Int8.width(), 1);
    /// assert_eq!(NumericKind::Float32.width(), 4);
    /// assert_eq!(NumericKind::Int64.width(), 8);
    /// ```
    #[inline(always)]
    pub const fn width(self) -> usize {
        match self {
            NumericKind::Int8 => 1,
            NumericKind::Int16 => 2,
            NumericKind::Int32 | NumericKind::Float32 => 4,
            NumericKind::Int64 | NumericKind::Float64 => 8,
        }
    }

    /// Returns the container width in bits.
    #[inline(always)]
    pub const fn bits(self) -> u32 {
        (self.width() * 8) as u32
    }

    /// Returns `true` for `Float32` and `Float64`.
    #[inline(always)]
    pub const fn is_float(self) -> bool {
        matches!(self, NumericKind::Float32 | NumericKind::Float64)
    }

    /// Returns `true` for the four integer containers.
    #[inline(always)]
    pub const fn is_integer(self) -> bool {
        !self.is_float()
    }

    /// The canonical lowercase name of the kind.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            NumericKind::Int8 => "int8",
            NumericKind::Int16 => "int16",
            NumericKind::Int32 => "int32",
            NumericKind::Int64 => "int64",
            NumericKind::Float32 => "float32",
            NumericKind::Float64 => "float64",
        }
    }

    /// Returns the integer kind with the given width in bytes, if any.
    #[inline]
    pub const fn integer_of_width(width: usize) -> Option<NumericKind> {
        match width {
            1 => Some(NumericKind::Int8),
            2 => Some(NumericKind::Int16),
            4 => Some(NumericKind::Int32),
            8 => Some(NumericKind::Int64),
            _ => None,
        }
    }
}

impl std::fmt::Display for NumericKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NumericKind {
    type Err = KindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<KindSpec>().map(|spec| spec.kind)
    }
}

/// A kind together with the signedness its name implies.
///
/// `"int16"` parses to `Int16` signed, `"uint16"` to `Int16` unsigned.
/// Float names always report `signed = true`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KindSpec {
    pub kind: NumericKind,
    pub signed: bool,
}

impl KindSpec {
    #[inline]
    pub const fn new(kind: NumericKind, signed: bool) -> Self {
        Self { kind, signed }
    }

    #[inline]
    pub const fn signed(kind: NumericKind) -> Self {
        Self::new(kind, true)
    }

    #[inline]
    pub const fn unsigned(kind: NumericKind) -> Self {
        Self::new(kind, false)
    }
}

impl std::fmt::Display for KindSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.signed && self.kind.is_integer() {
            write!(f, "u{}", self.kind.name())
        } else {
            f.write_str(self.kind.name())
        }
    }
}

impl FromStr for KindSpec {
    type Err = KindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use NumericKind::*;

        let lowered = s.trim().to_ascii_lowercase();
        let spec = match lowered.as_str() {
            "int8" | "i8" | "byte" => KindSpec::signed(Int8),
            "int16" | "i16" | "short" => KindSpec::signed(Int16),
            "int32" | "i32" | "int" => KindSpec::signed(Int32),
            "int64" | "i64" | "long" => KindSpec::signed(Int64),
            "uint8" | "u8" | "ubyte" => KindSpec::unsigned(Int8),
            "uint16" | "u16" | "ushort" => KindSpec::unsigned(Int16),
            "uint32" | "u32" | "uint" => KindSpec::unsigned(Int32),
            "uint64" | "u64" | "ulong" => KindSpec::unsigned(Int64),
            "float32" | "f32" | "float" => KindSpec::signed(Float32),
            "float64" | "f64" | "double" => KindSpec::signed(Float64),
            _ => return Err(KindError::unsupported(s.trim())),
        };
        Ok(spec)
    }
}
