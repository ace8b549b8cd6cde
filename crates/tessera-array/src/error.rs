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

use tessera_core::{KindError, NumericKind};
use thiserror::Error;

/// Errors raised at the array boundary.
///
/// These are raised before any element is written; a failed operation
/// leaves its output untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArrayError {
    /// An element kind could not be identified as one of the native kinds.
    #[error(transparent)]
    Kind(#[from] KindError),

    /// A textual array descriptor is malformed.
    #[error("malformed array descriptor '{text}'")]
    MalformedDescriptor { text: String },

    /// Ranks start at one.
    #[error("invalid rank {rank}: arrays have rank 1 or above")]
    InvalidRank { rank: usize },

    /// A row of a nested array does not have the rank its parent implies.
    #[error("row {row} has rank {found}, expected {expected}")]
    RankMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Two arrays that must share a kind do not.
    #[error("kind mismatch: expected {expected}, found {found}")]
    KindMismatch {
        expected: NumericKind,
        found: NumericKind,
    },

    /// A range of `length` elements at `offset` exceeds an array of `bound`.
    #[error("range {offset}..{offset}+{length} exceeds array length {bound}")]
    OutOfBounds {
        offset: usize,
        length: usize,
        bound: usize,
    },
}

impl ArrayError {
    /// Returns `true` if this error stems from an unrecognised kind.
    #[inline]
    pub fn is_unsupported_kind(&self) -> bool {
        matches!(self, ArrayError::Kind(KindError::UnsupportedKind { .. }))
    }
}
