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

use tessera_core::NumericKind;
use thiserror::Error;

/// Errors raised by chunked buffers.
///
/// Index checks run before any block is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    /// Block sizes are non-zero powers of two.
    #[error("invalid block size {size}: must be a non-zero power of two")]
    InvalidBlockSize { size: usize },

    /// A range of `length` elements at `offset` exceeds a buffer or slice of `bound`.
    #[error("range {offset}..{offset}+{length} exceeds length {bound}")]
    IndexOutOfRange {
        offset: usize,
        length: usize,
        bound: usize,
    },

    /// Values of one kind were offered to a buffer of another.
    #[error("kind mismatch: buffer holds {expected}, found {found}")]
    KindMismatch {
        expected: NumericKind,
        found: NumericKind,
    },
}

pub type Result<T> = std::result::Result<T, BufferError>;

/// Checks that `offset..offset + length` lies within `bound`.
#[inline]
pub(crate) fn check_range(offset: usize, length: usize, bound: usize) -> Result<()> {
    match offset.checked_add(length) {
        Some(end) if end <= bound => Ok(()),
        _ => Err(BufferError::IndexOutOfRange {
            offset,
            length,
            bound,
        }),
    }
}
