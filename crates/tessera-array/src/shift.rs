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

//! # Overlap-Safe Shifting
//!
//! `memmove` within a single array: `count` elements starting at `from` are
//! copied so they start at `to`, with the source read as it was before the
//! copy began, however the two ranges overlap.
//!
//! The count is clamped so that neither the source nor the destination range
//! runs off the end. An out-of-range `from` or `to` and `from == to` are
//! no-ops. Every function returns the number of elements actually moved.
//!
//! ```rust
//! use tessera_array::shift::shift_copy;
//!
//! let mut a: Vec<i32> = (0..10).collect();
//! assert_eq!(shift_copy(&mut a, 2, 4, 4), 4);
//! assert_eq!(a, vec![0, 1, 2, 3, 2, 3, 4, 5, 8, 9]);
//! ```

use crate::{erased::AnyArray, ragged::Ragged};

/// Returns the number of elements a shift of `count` from `from` to `to`
/// within `len` elements actually moves.
#[inline]
pub fn effective_count(len: usize, from: usize, to: usize, count: usize) -> usize {
    if from == to || from >= len || to >= len {
        return 0;
    }
    count.min(len - from).min(len - to)
}

/// Shifts `count` elements from `from` to `to` within `values`.
#[inline]
pub fn shift_copy<T: Copy>(values: &mut [T], from: usize, to: usize, count: usize) -> usize {
    let n = effective_count(values.len(), from, to, count);
    if n > 0 {
        values.copy_within(from..from + n, to);
    }
    n
}

/// Shifts `count` elements from `from` to `to` for element types that are
/// only `Clone`.
///
/// A forward shift copies back to front, a backward shift front to back.
pub fn shift_copy_cloned<T: Clone>(values: &mut [T], from: usize, to: usize, count: usize) -> usize {
    let n = effective_count(values.len(), from, to, count);
    if to > from {
        for i in (0..n).rev() {
            values[to + i] = values[from + i].clone();
        }
    } else {
        for i in 0..n {
            values[to + i] = values[from + i].clone();
        }
    }
    n
}

/// Shifts outermost entries of `array`: elements of a flat array, whole
/// rows (null rows included) of a nested one.
pub fn shift_rows<T: Clone>(array: &mut Ragged<T>, from: usize, to: usize, count: usize) -> usize {
    if let Some(values) = array.as_flat_mut() {
        return shift_copy_cloned(values, from, to, count);
    }
    array
        .rows_mut()
        .map_or(0, |rows| shift_copy_cloned(rows, from, to, count))
}

/// Shifts outermost entries of a kind-tagged array.
pub fn shift_any(array: &mut AnyArray, from: usize, to: usize, count: usize) -> usize {
    crate::dispatch_array!(array, a => {
        if let Some(values) = a.as_flat_mut() {
            return shift_copy(values, from, to, count);
        }
        a.rows_mut()
            .map_or(0, |rows| shift_copy_cloned(rows, from, to, count))
    })
}
