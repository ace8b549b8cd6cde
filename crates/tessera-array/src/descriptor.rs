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

//! # Array Descriptors
//!
//! An `ArrayDescriptor` is the `(kind, rank)` identity of an array: enough to
//! pick a code path without touching a single element. Descriptors are plain
//! values, derived fresh from an array whenever they are needed.
//!
//! ## Textual form
//!
//! Descriptors print as the kind name followed by one `[]` per rank, the
//! form used wherever an array type is named in text (settings, logs):
//!
//! ```rust
//! use tessera_array::ArrayDescriptor;
//! use tessera_core::NumericKind;
//!
//! let d: ArrayDescriptor = "int16[][]".parse().unwrap();
//! assert_eq!(d, ArrayDescriptor::new(NumericKind::Int16, 2).unwrap());
//! assert_eq!(d.to_string(), "int16[][]");
//!
//! assert!("bool[]".parse::<ArrayDescriptor>().unwrap_err().is_unsupported_kind());
//! ```

use crate::{
    erased::{AnyArray, NumericVec},
    error::ArrayError,
    ragged::Ragged,
};
use std::str::FromStr;
use tessera_core::{Element, KindSpec, NumericKind};

/// The storage kind and nesting depth of an array.
///
/// Serialized in its textual form (`"float32[][]"`), so a deserialized
/// descriptor passes the same rank check as a parsed one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct ArrayDescriptor {
    kind: NumericKind,
    rank: usize,
}

impl ArrayDescriptor {
    /// Creates a descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::InvalidRank`] if `rank == 0`.
    #[inline]
    pub fn new(kind: NumericKind, rank: usize) -> Result<Self, ArrayError> {
        if rank == 0 {
            return Err(ArrayError::InvalidRank { rank });
        }
        Ok(Self { kind, rank })
    }

    /// The descriptor of a rank-1 array of `kind`.
    #[inline]
    pub const fn flat(kind: NumericKind) -> Self {
        Self { kind, rank: 1 }
    }

    /// The descriptor of a rank-1 array of `T`.
    #[inline]
    pub const fn of<T: Element>() -> Self {
        Self::flat(T::KIND)
    }

    #[inline]
    pub const fn kind(&self) -> NumericKind {
        self.kind
    }

    #[inline]
    pub const fn rank(&self) -> usize {
        self.rank
    }

    /// Returns the descriptor of this array's rows (`rank - 1`), or `None`
    /// for rank 1.
    #[inline]
    pub const fn row(&self) -> Option<Self> {
        if self.rank > 1 {
            Some(Self {
                kind: self.kind,
                rank: self.rank - 1,
            })
        } else {
            None
        }
    }

    /// Returns the same rank with a different kind.
    #[inline]
    pub const fn with_kind(&self, kind: NumericKind) -> Self {
        Self {
            kind,
            rank: self.rank,
        }
    }

    /// Allocates an empty array matching this descriptor.
    pub fn empty_array(&self) -> AnyArray {
        match self.kind {
            NumericKind::Int8 => AnyArray::Int8(empty_ragged(self.rank)),
            NumericKind::Int16 => AnyArray::Int16(empty_ragged(self.rank)),
            NumericKind::Int32 => AnyArray::Int32(empty_ragged(self.rank)),
            NumericKind::Int64 => AnyArray::Int64(empty_ragged(self.rank)),
            NumericKind::Float32 => AnyArray::Float32(empty_ragged(self.rank)),
            NumericKind::Float64 => AnyArray::Float64(empty_ragged(self.rank)),
        }
    }

    /// Allocates an array matching this descriptor whose outermost level has
    /// `len` entries: zeros at rank 1, null rows above.
    pub fn zeroed_array(&self, len: usize) -> AnyArray {
        if self.rank == 1 {
            return AnyArray::zeroed(self.kind, len);
        }
        let mut array = self.empty_array();
        crate::dispatch_array!(&mut array, a => a.resize_rows(len));
        array
    }

    /// Parses the textual form and also reports the signedness implied by
    /// the kind name (`uint16[]` is an `Int16` array read unsigned).
    pub fn parse_with_signedness(text: &str) -> Result<(Self, bool), ArrayError> {
        let trimmed = text.trim();
        let base_end = trimmed.find('[').unwrap_or(trimmed.len());
        let (base, mut brackets) = trimmed.split_at(base_end);

        let mut rank = 0usize;
        while !brackets.is_empty() {
            match brackets.strip_prefix("[]") {
                Some(rest) => {
                    rank += 1;
                    brackets = rest;
                }
                None => {
                    return Err(ArrayError::MalformedDescriptor {
                        text: text.to_string(),
                    });
                }
            }
        }

        let spec: KindSpec = base.parse()?;
        let descriptor = Self::new(spec.kind, rank)?;
        Ok((descriptor, spec.signed))
    }
}

fn empty_ragged<T>(rank: usize) -> Ragged<T> {
    Ragged::empty(rank).unwrap_or_else(|_| Ragged::flat(Vec::new()))
}

impl std::fmt::Display for ArrayDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.kind.name())?;
        for _ in 0..self.rank {
            f.write_str("[]")?;
        }
        Ok(())
    }
}

impl FromStr for ArrayDescriptor {
    type Err = ArrayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with_signedness(s).map(|(descriptor, _)| descriptor)
    }
}

impl TryFrom<String> for ArrayDescriptor {
    type Error = ArrayError;

    #[inline]
    fn try_from(text: String) -> Result<Self, Self::Error> {
        text.parse()
    }
}

impl From<ArrayDescriptor> for String {
    #[inline]
    fn from(descriptor: ArrayDescriptor) -> Self {
        descriptor.to_string()
    }
}

/// Values whose [`ArrayDescriptor`] can be derived by inspection.
pub trait Describe {
    fn descriptor(&self) -> ArrayDescriptor;
}

/// Returns the descriptor of `array`.
#[inline]
pub fn describe<A>(array: &A) -> ArrayDescriptor
where
    A: Describe + ?Sized,
{
    array.descriptor()
}

impl<T: Element> Describe for Ragged<T> {
    #[inline]
    fn descriptor(&self) -> ArrayDescriptor {
        ArrayDescriptor {
            kind: T::KIND,
            rank: self.rank(),
        }
    }
}

impl<T: Element> Describe for [T] {
    #[inline]
    fn descriptor(&self) -> ArrayDescriptor {
        ArrayDescriptor::flat(T::KIND)
    }
}

impl<T: Element> Describe for Vec<T> {
    #[inline]
    fn descriptor(&self) -> ArrayDescriptor {
        ArrayDescriptor::flat(T::KIND)
    }
}

impl Describe for NumericVec {
    #[inline]
    fn descriptor(&self) -> ArrayDescriptor {
        ArrayDescriptor::flat(self.kind())
    }
}

impl Describe for AnyArray {
    #[inline]
    fn descriptor(&self) -> ArrayDescriptor {
        ArrayDescriptor {
            kind: self.kind(),
            rank: self.rank(),
        }
    }
}

impl AnyArray {
    /// Returns the `(kind, rank)` descriptor of this array.
    #[inline]
    pub fn descriptor(&self) -> ArrayDescriptor {
        Describe::descriptor(self)
    }
}
