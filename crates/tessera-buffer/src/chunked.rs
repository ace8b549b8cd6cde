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

//! # Chunked Buffer
//!
//! `ChunkedBuffer<T>` stores a growing sequence of elements in a list of
//! equally sized blocks. Every block except the last is full; the last one
//! holds `len - (num_blocks - 1) * block_size` elements. Appending fills
//! the tail block and then allocates fresh ones, so stored elements never
//! move. The block size is a power of two and positions are split into a
//! block index and an in-block offset with a shift and a mask.
//!
//! ```rust
//! use tessera_buffer::ChunkedBuffer;
//!
//! let mut buffer = ChunkedBuffer::<i32>::new(4).unwrap();
//! buffer.append(&[1, 2, 3, 4, 5, 6]);
//! assert_eq!(buffer.num_blocks(), 2);
//! assert_eq!(buffer.capacity(), 8);
//!
//! buffer.set_length(3);
//! assert_eq!(buffer.materialize(), vec![1, 2, 3]);
//! ```

use crate::error::{BufferError, Result, check_range};
use log::{debug, trace};
use tessera_array::{AnyArray, ArrayElement, Ragged, flatten::allocate};
use tessera_core::NumericKind;

/// The block size used by [`ChunkedBuffer::with_default_block_size`].
pub const DEFAULT_BLOCK_SIZE: usize = 1 << 16;

#[derive(Clone, Debug)]
struct Block<T> {
    storage: Box<[T]>,
    used: usize,
}

impl<T: ArrayElement> Block<T> {
    #[inline]
    fn zeroed(size: usize) -> Self {
        Self {
            storage: allocate::<T>(size).into_boxed_slice(),
            used: 0,
        }
    }

    #[inline(always)]
    fn filled(&self) -> &[T] {
        &self.storage[..self.used]
    }

    #[inline(always)]
    fn free(&self) -> usize {
        self.storage.len() - self.used
    }
}

/// A growable, block-chunked sequence of `T`.
#[derive(Clone, Debug)]
pub struct ChunkedBuffer<T> {
    blocks: Vec<Block<T>>,
    /// `log2(block_size)`.
    shift: u32,
    len: usize,
}

impl<T: ArrayElement> ChunkedBuffer<T> {
    /// Creates an empty buffer with blocks of `block_size` elements.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidBlockSize`] unless `block_size` is a
    /// non-zero power of two.
    pub fn new(block_size: usize) -> Result<Self> {
        if !block_size.is_power_of_two() {
            return Err(BufferError::InvalidBlockSize { size: block_size });
        }
        Ok(Self {
            blocks: Vec::new(),
            shift: block_size.trailing_zeros(),
            len: 0,
        })
    }

    /// Creates an empty buffer with blocks of [`DEFAULT_BLOCK_SIZE`] elements.
    #[inline]
    pub fn with_default_block_size() -> Self {
        Self {
            blocks: Vec::new(),
            shift: DEFAULT_BLOCK_SIZE.trailing_zeros(),
            len: 0,
        }
    }

    #[inline(always)]
    pub fn kind(&self) -> NumericKind {
        T::KIND
    }

    /// Returns the number of stored elements.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the allocated blocks hold.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.blocks.len() << self.shift
    }

    #[inline(always)]
    pub fn block_size(&self) -> usize {
        1 << self.shift
    }

    #[inline(always)]
    pub fn num_blocks(&self) -> usize {
        self.blocks.len()
    }

    /// Returns the used portion of block `index`.
    #[inline]
    pub fn block(&self, index: usize) -> Option<&[T]> {
        self.blocks.get(index).map(Block::filled)
    }

    #[inline(always)]
    fn locate(&self, index: usize) -> (usize, usize) {
        (index >> self.shift, index & (self.block_size() - 1))
    }

    fn push_block(&mut self) {
        trace!(
            "allocating {} block {} ({} elements)",
            T::KIND,
            self.blocks.len(),
            self.block_size()
        );
        let size = self.block_size();
        self.blocks.push(Block::zeroed(size));
    }

    /// Appends all of `values`.
    pub fn append(&mut self, mut values: &[T]) {
        while !values.is_empty() {
            if self.blocks.last().is_none_or(|b| b.free() == 0) {
                self.push_block();
            }
            if let Some(block) = self.blocks.last_mut() {
                let n = block.free().min(values.len());
                block.storage[block.used..block.used + n].copy_from_slice(&values[..n]);
                block.used += n;
                self.len += n;
                values = &values[n..];
            }
        }
    }

    /// Appends `length` elements of `values` starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::IndexOutOfRange`] if the range exceeds `values`.
    pub fn append_range(&mut self, values: &[T], offset: usize, length: usize) -> Result<()> {
        check_range(offset, length, values.len())?;
        self.append(&values[offset..offset + length]);
        Ok(())
    }

    /// Copies `length` stored elements starting at `src_offset` into `out`
    /// starting at `dst_offset`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::IndexOutOfRange`] if either range does not fit.
    pub fn read(&self, out: &mut [T], src_offset: usize, dst_offset: usize, length: usize) -> Result<()> {
        check_range(src_offset, length, self.len)?;
        check_range(dst_offset, length, out.len())?;

        let mut done = 0;
        while done < length {
            let (block, within) = self.locate(src_offset + done);
            let n = (self.block_size() - within).min(length - done);
            let at = dst_offset + done;
            out[at..at + n].copy_from_slice(&self.blocks[block].storage[within..within + n]);
            done += n;
        }
        Ok(())
    }

    /// Copies `length` elements of `values` starting at `src_offset` into the
    /// buffer starting at `dst_offset`.
    ///
    /// A write ending past the current length first grows the buffer with
    /// [`set_length`](Self::set_length); any gap is zero-filled.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::IndexOutOfRange`] if the source range exceeds
    /// `values`.
    pub fn write(&mut self, values: &[T], src_offset: usize, dst_offset: usize, length: usize) -> Result<()> {
        check_range(src_offset, length, values.len())?;
        let end = dst_offset
            .checked_add(length)
            .ok_or(BufferError::IndexOutOfRange {
                offset: dst_offset,
                length,
                bound: usize::MAX,
            })?;
        if end > self.len {
            self.set_length(end);
        }

        let mut done = 0;
        while done < length {
            let (block, within) = self.locate(dst_offset + done);
            let n = (self.block_size() - within).min(length - done);
            let at = src_offset + done;
            self.blocks[block].storage[within..within + n].copy_from_slice(&values[at..at + n]);
            done += n;
        }
        Ok(())
    }

    /// Grows or shrinks the buffer to `n` elements.
    ///
    /// Growing zero-fills the new elements. Shrinking drops trailing blocks
    /// until only the blocks needed for `n` remain; `set_length(0)` drops
    /// them all.
    pub fn set_length(&mut self, n: usize) {
        if n == 0 {
            self.clear();
            return;
        }
        if n == self.len {
            return;
        }

        let bs = self.block_size();
        if n < self.len {
            let keep = (n + bs - 1) >> self.shift;
            debug!(
                "shrinking {} buffer from {} to {} elements ({} -> {} blocks)",
                T::KIND,
                self.len,
                n,
                self.blocks.len(),
                keep
            );
            self.blocks.truncate(keep);
        } else {
            if let Some(last) = self.blocks.last_mut() {
                let used = last.used;
                last.storage[used..].fill(T::zero());
                last.used = bs;
            }
            while self.capacity() < n {
                self.push_block();
                if let Some(last) = self.blocks.last_mut() {
                    last.used = bs;
                }
            }
        }

        let tail = n - ((self.blocks.len() - 1) << self.shift);
        if let Some(last) = self.blocks.last_mut() {
            last.used = tail;
        }
        self.len = n;
        debug_assert!(self.capacity() - bs < self.len && self.len <= self.capacity());
    }

    /// Drops every block.
    pub fn clear(&mut self) {
        if !self.blocks.is_empty() {
            debug!(
                "clearing {} buffer of {} elements in {} blocks",
                T::KIND,
                self.len,
                self.blocks.len()
            );
        }
        self.blocks.clear();
        self.len = 0;
    }

    /// Copies the stored elements, in order, into one contiguous array.
    pub fn materialize(&self) -> Vec<T> {
        let mut out = allocate::<T>(self.len);
        let mut at = 0;
        for block in &self.blocks {
            out[at..at + block.used].copy_from_slice(block.filled());
            at += block.used;
        }
        out
    }

    /// [`materialize`](Self::materialize) as a tagged rank-1 array.
    #[inline]
    pub fn materialize_any(&self) -> AnyArray {
        T::into_array(Ragged::flat(self.materialize()))
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        let (block, within) = self.locate(index);
        Some(self.blocks[block].storage[within])
    }

    /// Overwrites the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::IndexOutOfRange`] if `index >= len()`.
    #[inline]
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        check_range(index, 1, self.len)?;
        let (block, within) = self.locate(index);
        self.blocks[block].storage[within] = value;
        Ok(())
    }

    /// Iterates the stored elements in order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.blocks
            .iter()
            .flat_map(|block| block.filled().iter().copied())
    }
}

impl<T: ArrayElement> Default for ChunkedBuffer<T> {
    #[inline]
    fn default() -> Self {
        Self::with_default_block_size()
    }
}

impl<T: ArrayElement> std::fmt::Display for ChunkedBuffer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ChunkedBuffer<{}>(len: {}, capacity: {}, block_size: {})",
            T::KIND,
            self.len,
            self.capacity(),
            self.block_size()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_size_must_be_power_of_two() {
        assert!(ChunkedBuffer::<i8>::new(1).is_ok());
        assert!(ChunkedBuffer::<i8>::new(64).is_ok());
        assert_eq!(
            ChunkedBuffer::<i8>::new(0).unwrap_err(),
            BufferError::InvalidBlockSize { size: 0 }
        );
        assert_eq!(
            ChunkedBuffer::<i8>::new(12).unwrap_err(),
            BufferError::InvalidBlockSize { size: 12 }
        );
        assert_eq!(
            ChunkedBuffer::<f64>::with_default_block_size().block_size(),
            DEFAULT_BLOCK_SIZE
        );
    }

    #[test]
    fn test_append_then_shrink_scenario() {
        let mut b = ChunkedBuffer::<i32>::new(4).unwrap();
        b.append_range(&[1, 2, 3, 4, 5, 6], 0, 6).unwrap();
        assert_eq!(b.num_blocks(), 2);
        assert_eq!(b.block(0), Some(&[1, 2, 3, 4][..]));
        assert_eq!(b.block(1), Some(&[5, 6][..]));
        assert_eq!(b.len(), 6);
        assert_eq!(b.capacity(), 8);
        assert_eq!(b.materialize(), vec![1, 2, 3, 4, 5, 6]);

        b.set_length(3);
        assert_eq!(b.num_blocks(), 1);
        assert_eq!(b.block(0), Some(&[1, 2, 3][..]));
        assert_eq!(b.materialize(), vec![1, 2, 3]);
    }

    #[test]
    fn test_append_fills_tail_block_first() {
        let mut b = ChunkedBuffer::<i16>::new(4).unwrap();
        b.append(&[1, 2, 3]);
        b.append(&[4, 5]);
        assert_eq!(b.block(0), Some(&[1, 2, 3, 4][..]));
        assert_eq!(b.block(1), Some(&[5][..]));
        b.append(&[]);
        assert_eq!(b.num_blocks(), 2);
    }

    #[test]
    fn test_append_range_out_of_range() {
        let mut b = ChunkedBuffer::<i8>::new(2).unwrap();
        assert_eq!(
            b.append_range(&[1, 2, 3], 2, 2),
            Err(BufferError::IndexOutOfRange {
                offset: 2,
                length: 2,
                bound: 3
            })
        );
        assert!(b.is_empty());
        assert_eq!(b.num_blocks(), 0);
    }

    #[test]
    fn test_read_across_blocks() {
        let mut b = ChunkedBuffer::<i64>::new(2).unwrap();
        b.append(&[10, 11, 12, 13, 14]);
        let mut out = [0i64; 5];
        b.read(&mut out, 1, 1, 3).unwrap();
        assert_eq!(out, [0, 11, 12, 13, 0]);
    }

    #[test]
    fn test_read_out_of_range_leaves_output() {
        let mut b = ChunkedBuffer::<i64>::new(2).unwrap();
        b.append(&[1, 2, 3]);
        let mut out = [9i64; 2];
        assert_eq!(
            b.read(&mut out, 2, 0, 2),
            Err(BufferError::IndexOutOfRange {
                offset: 2,
                length: 2,
                bound: 3
            })
        );
        assert_eq!(
            b.read(&mut out, 0, 1, 2),
            Err(BufferError::IndexOutOfRange {
                offset: 1,
                length: 2,
                bound: 2
            })
        );
        assert_eq!(out, [9, 9]);
    }

    #[test]
    fn test_write_in_place_and_growing() {
        let mut b = ChunkedBuffer::<f32>::new(4).unwrap();
        b.append(&[1.0, 2.0, 3.0]);
        b.write(&[7.0, 8.0], 0, 1, 2).unwrap();
        assert_eq!(b.materialize(), vec![1.0, 7.0, 8.0]);

        // Past the end: the gap at index 3..6 is zero-filled.
        b.write(&[0.5, 9.0, 9.5], 1, 6, 2).unwrap();
        assert_eq!(b.len(), 8);
        assert_eq!(b.num_blocks(), 2);
        assert_eq!(
            b.materialize(),
            vec![1.0, 7.0, 8.0, 0.0, 0.0, 0.0, 9.0, 9.5]
        );
    }

    #[test]
    fn test_shrink_then_grow_zeroes() {
        let mut b = ChunkedBuffer::<i32>::new(4).unwrap();
        b.append(&[1, 2, 3, 4, 5, 6, 7]);
        b.set_length(2);
        b.set_length(6);
        assert_eq!(b.materialize(), vec![1, 2, 0, 0, 0, 0]);
        assert_eq!(b.capacity(), 8);
    }

    #[test]
    fn test_set_length_zero_and_clear() {
        let mut b = ChunkedBuffer::<i8>::new(4).unwrap();
        b.append(&[1, 2, 3, 4, 5]);
        b.set_length(0);
        assert!(b.is_empty());
        assert_eq!(b.capacity(), 0);
        b.append(&[1]);
        b.clear();
        assert_eq!(b.num_blocks(), 0);
        assert!(b.materialize().is_empty());
    }

    #[test]
    fn test_get_set_iter() {
        let mut b = ChunkedBuffer::<i16>::new(2).unwrap();
        b.append(&[1, 2, 3]);
        assert_eq!(b.get(2), Some(3));
        assert_eq!(b.get(3), None);
        b.set(1, -2).unwrap();
        assert!(b.set(3, 0).is_err());
        assert_eq!(b.iter().collect::<Vec<_>>(), vec![1, -2, 3]);
    }

    #[test]
    fn test_materialize_any() {
        let mut b = ChunkedBuffer::<f64>::new(8).unwrap();
        b.append(&[0.25, 0.5]);
        assert_eq!(b.materialize_any(), AnyArray::from(vec![0.25f64, 0.5]));
        assert_eq!(b.kind(), NumericKind::Float64);
    }

    #[test]
    fn test_display() {
        let mut b = ChunkedBuffer::<i32>::new(4).unwrap();
        b.append(&[1, 2, 3, 4, 5]);
        assert_eq!(
            b.to_string(),
            "ChunkedBuffer<int32>(len: 5, capacity: 8, block_size: 4)"
        );
    }
}
