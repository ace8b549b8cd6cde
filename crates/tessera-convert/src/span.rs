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

//! # Element Spans
//!
//! A [`Span`] names the part of a conversion that is actually copied: where
//! reading starts in the input, where writing starts in the output and how
//! many elements (or outermost rows) move. A `length` of `None` means the
//! largest length both arrays allow.

use crate::error::{ConvertError, Result};

/// Input offset, output offset and element count of a conversion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub src_offset: usize,
    pub dst_offset: usize,
    pub length: Option<usize>,
}

impl Span {
    /// Everything from the start of the input to the start of the output.
    pub const ALL: Span = Span {
        src_offset: 0,
        dst_offset: 0,
        length: None,
    };

    #[inline(always)]
    pub const fn new(src_offset: usize, dst_offset: usize, length: Option<usize>) -> Self {
        Self {
            src_offset,
            dst_offset,
            length,
        }
    }

    /// Resolves the element count against an input of `src_len` and an
    /// output of `dst_len`.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::OutOfBounds`] if an offset lies past its
    /// array or an explicit length does not fit either side.
    pub fn resolve(&self, src_len: usize, dst_len: usize) -> Result<usize> {
        let src_room = room(self.src_offset, src_len)?;
        let dst_room = room(self.dst_offset, dst_len)?;
        match self.length {
            None => Ok(src_room.min(dst_room)),
            Some(length) if length > src_room => Err(ConvertError::OutOfBounds {
                offset: self.src_offset,
                length,
                bound: src_len,
            }),
            Some(length) if length > dst_room => Err(ConvertError::OutOfBounds {
                offset: self.dst_offset,
                length,
                bound: dst_len,
            }),
            Some(length) => Ok(length),
        }
    }

    /// Resolves the element count against an input of `src_len` when the
    /// output is allocated to fit.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::OutOfBounds`] if the input side does not fit.
    pub fn resolve_source(&self, src_len: usize) -> Result<usize> {
        let src_room = room(self.src_offset, src_len)?;
        match self.length {
            None => Ok(src_room),
            Some(length) if length > src_room => Err(ConvertError::OutOfBounds {
                offset: self.src_offset,
                length,
                bound: src_len,
            }),
            Some(length) => Ok(length),
        }
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.length {
            Some(length) => write!(
                f,
                "Span(src_offset: {}, dst_offset: {}, length: {})",
                self.src_offset, self.dst_offset, length
            ),
            None => write!(
                f,
                "Span(src_offset: {}, dst_offset: {}, length: fit)",
                self.src_offset, self.dst_offset
            ),
        }
    }
}

#[inline]
fn room(offset: usize, len: usize) -> Result<usize> {
    len.checked_sub(offset).ok_or(ConvertError::OutOfBounds {
        offset,
        length: 0,
        bound: len,
    })
}
