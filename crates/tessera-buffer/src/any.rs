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

//! # Kind-Selected Buffers
//!
//! `AnyChunkedBuffer` picks its element type from a runtime
//! [`NumericKind`], for callers that learn the kind of the data they store
//! only from a descriptor or a setting.

use crate::{
    chunked::ChunkedBuffer,
    error::{BufferError, Result},
};
use tessera_array::{AnyArray, NumericVec};
use tessera_core::{Element, NumericKind, Scalar};

/// A [`ChunkedBuffer`] of one of the six native kinds.
#[derive(Clone, Debug)]
pub enum AnyChunkedBuffer {
    Int8(ChunkedBuffer<i8>),
    Int16(ChunkedBuffer<i16>),
    Int32(ChunkedBuffer<i32>),
    Int64(ChunkedBuffer<i64>),
    Float32(ChunkedBuffer<f32>),
    Float64(ChunkedBuffer<f64>),
}

macro_rules! dispatch_buffer {
    ($value:expr, $b:ident => $body:expr) => {
        match $value {
            AnyChunkedBuffer::Int8($b) => $body,
            AnyChunkedBuffer::Int16($b) => $body,
            AnyChunkedBuffer::Int32($b) => $body,
            AnyChunkedBuffer::Int64($b) => $body,
            AnyChunkedBuffer::Float32($b) => $body,
            AnyChunkedBuffer::Float64($b) => $body,
        }
    };
}

impl AnyChunkedBuffer {
    /// Creates an empty buffer of `kind` with blocks of `block_size` elements.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidBlockSize`] unless `block_size` is a
    /// non-zero power of two.
    pub fn new(kind: NumericKind, block_size: usize) -> Result<Self> {
        Ok(match kind {
            NumericKind::Int8 => Self::Int8(ChunkedBuffer::new(block_size)?),
            NumericKind::Int16 => Self::Int16(ChunkedBuffer::new(block_size)?),
            NumericKind::Int32 => Self::Int32(ChunkedBuffer::new(block_size)?),
            NumericKind::Int64 => Self::Int64(ChunkedBuffer::new(block_size)?),
            NumericKind::Float32 => Self::Float32(ChunkedBuffer::new(block_size)?),
            NumericKind::Float64 => Self::Float64(ChunkedBuffer::new(block_size)?),
        })
    }

    pub fn with_default_block_size(kind: NumericKind) -> Self {
        match kind {
            NumericKind::Int8 => Self::Int8(ChunkedBuffer::with_default_block_size()),
            NumericKind::Int16 => Self::Int16(ChunkedBuffer::with_default_block_size()),
            NumericKind::Int32 => Self::Int32(ChunkedBuffer::with_default_block_size()),
            NumericKind::Int64 => Self::Int64(ChunkedBuffer::with_default_block_size()),
            NumericKind::Float32 => Self::Float32(ChunkedBuffer::with_default_block_size()),
            NumericKind::Float64 => Self::Float64(ChunkedBuffer::with_default_block_size()),
        }
    }

    #[inline]
    pub fn kind(&self) -> NumericKind {
        dispatch_buffer!(self, b => b.kind())
    }

    #[inline]
    pub fn len(&self) -> usize {
        dispatch_buffer!(self, b => b.len())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        dispatch_buffer!(self, b => b.capacity())
    }

    #[inline]
    pub fn block_size(&self) -> usize {
        dispatch_buffer!(self, b => b.block_size())
    }

    /// Appends a rank-1 array of the buffer's kind.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::KindMismatch`] if `values` holds another kind.
    pub fn append_any(&mut self, values: &NumericVec) -> Result<()> {
        dispatch_buffer!(self, b => {
            let slice = values.as_slice().ok_or(BufferError::KindMismatch {
                expected: b.kind(),
                found: values.kind(),
            })?;
            b.append(slice);
            Ok(())
        })
    }

    /// Reads element `index` as a widened value.
    #[inline]
    pub fn get(&self, index: usize, signed: bool) -> Option<Scalar> {
        dispatch_buffer!(self, b => b.get(index).map(|v| v.to_scalar(signed)))
    }

    #[inline]
    pub fn set_length(&mut self, n: usize) {
        dispatch_buffer!(self, b => b.set_length(n))
    }

    #[inline]
    pub fn clear(&mut self) {
        dispatch_buffer!(self, b => b.clear())
    }

    pub fn materialize(&self) -> AnyArray {
        dispatch_buffer!(self, b => b.materialize_any())
    }

    pub fn materialize_vec(&self) -> NumericVec {
        dispatch_buffer!(self, b => NumericVec::from(b.materialize()))
    }
}

impl std::fmt::Display for AnyChunkedBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        dispatch_buffer!(self, b => std::fmt::Display::fmt(b, f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_from_kind() {
        for kind in NumericKind::ALL {
            let b = AnyChunkedBuffer::new(kind, 16).unwrap();
            assert_eq!(b.kind(), kind);
            assert_eq!(b.block_size(), 16);
            assert!(b.is_empty());
        }
        assert!(matches!(
            AnyChunkedBuffer::new(NumericKind::Int8, 3),
            Err(BufferError::InvalidBlockSize { size: 3 })
        ));
    }

    #[test]
    fn test_append_any_kind_mismatch() {
        let mut b = AnyChunkedBuffer::new(NumericKind::Int16, 4).unwrap();
        assert_eq!(
            b.append_any(&NumericVec::from(vec![1i32])),
            Err(BufferError::KindMismatch {
                expected: NumericKind::Int16,
                found: NumericKind::Int32
            })
        );
        assert!(b.is_empty());
    }

    #[test]
    fn test_append_and_materialize() {
        let mut b = AnyChunkedBuffer::new(NumericKind::Int8, 2).unwrap();
        b.append_any(&NumericVec::from(vec![1i8, -1, 3])).unwrap();
        assert_eq!(b.len(), 3);
        assert_eq!(b.capacity(), 4);
        assert_eq!(b.get(1, false), Some(Scalar::Int(255)));
        assert_eq!(b.get(1, true), Some(Scalar::Int(-1)));
        assert_eq!(b.materialize(), AnyArray::from(vec![1i8, -1, 3]));

        b.set_length(1);
        assert_eq!(b.materialize_vec(), NumericVec::from(vec![1i8]));
        b.clear();
        assert_eq!(b.capacity(), 0);
    }

    #[test]
    fn test_display_forwards() {
        let b = AnyChunkedBuffer::with_default_block_size(NumericKind::Float32);
        assert_eq!(
            b.to_string(),
            "ChunkedBuffer<float32>(len: 0, capacity: 0, block_size: 65536)"
        );
    }
}
