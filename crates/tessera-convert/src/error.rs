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

use thiserror::Error;

/// Errors raised while resolving the element range of a conversion.
///
/// Numeric overflow is never an error: it wraps or saturates according to
/// the policy. Errors are reserved for ranges and shapes that cannot be
/// honoured, and are raised before any element is written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// A range of `length` elements at `offset` exceeds an array of `bound`.
    #[error("range {offset}..{offset}+{length} exceeds array length {bound}")]
    OutOfBounds {
        offset: usize,
        length: usize,
        bound: usize,
    },

    /// The supplied output array does not have the rank of the input.
    #[error("rank mismatch: input has rank {expected}, output has rank {found}")]
    RankMismatch { expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, ConvertError>;
