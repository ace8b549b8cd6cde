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

//! # Ragged Arrays
//!
//! `Ragged<T>` models an array of rank one or above where every row at every
//! level may have its own length or be absent altogether. Rank 1 is a plain
//! `Vec<T>`; rank N is a list of optional rank N-1 rows.
//!
//! ## Invariants
//!
//! - A nested array has rank 2 or above.
//! - Every present row of a nested array of rank N has rank N-1.
//!
//! The representation is private. [`Ragged::nested`] and
//! [`Ragged::set_row`] check both invariants; the typed constructors
//! [`Ragged::from_rows`] and [`Ragged::from_planes`] uphold them by
//! construction, so converters never see a malformed rank.
//!
//! ## Traversal
//!
//! [`Ragged::leaves`] yields the rank-1 leaf slices in row-major order,
//! skipping null rows. It is the one traversal every rank-reducing
//! operation is built on.
//!
//! ```rust
//! use tessera_array::Ragged;
//!
//! let a = Ragged::from_rows(vec![Some(vec![1, 2]), None, Some(vec![3])]);
//! assert_eq!(a.rank(), 2);
//! assert_eq!(a.element_count(), 3);
//! let leaves: Vec<&[i32]> = a.leaves().collect();
//! assert_eq!(leaves, vec![&[1, 2][..], &[3][..]]);
//! ```

use crate::error::ArrayError;

/// A rank-N array with independently sized, possibly absent rows.
#[derive(Clone, Debug, PartialEq)]
pub struct Ragged<T> {
    repr: Repr<T>,
}

#[derive(Clone, Debug, PartialEq)]
enum Repr<T> {
    Flat(Vec<T>),
    /// `rank >= 2`; every present row has rank `rank - 1`.
    Nested {
        rank: usize,
        rows: Vec<Option<Ragged<T>>>,
    },
}

impl<T> Ragged<T> {
    /// Creates a rank-1 array.
    #[inline]
    pub fn flat(values: Vec<T>) -> Self {
        Self {
            repr: Repr::Flat(values),
        }
    }

    #[inline]
    fn nested_unchecked(rank: usize, rows: Vec<Option<Ragged<T>>>) -> Self {
        debug_assert!(rank >= 2);
        Self {
            repr: Repr::Nested { rank, rows },
        }
    }

    /// Creates a nested array of the given rank, validating every present row.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::InvalidRank`] if `rank < 2` and
    /// [`ArrayError::RankMismatch`] if a present row does not have rank
    /// `rank - 1`.
    pub fn nested(rank: usize, rows: Vec<Option<Ragged<T>>>) -> Result<Self, ArrayError> {
        if rank < 2 {
            return Err(ArrayError::InvalidRank { rank });
        }
        for (row, value) in rows.iter().enumerate() {
            check_row_rank(row, rank, value.as_ref())?;
        }
        Ok(Self::nested_unchecked(rank, rows))
    }

    /// Creates a rank-2 array from optional rows.
    pub fn from_rows(rows: Vec<Option<Vec<T>>>) -> Self {
        Self::nested_unchecked(2, rows.into_iter().map(|r| r.map(Ragged::flat)).collect())
    }

    /// Creates a rank-3 array from optional planes of optional rows.
    pub fn from_planes(planes: Vec<Option<Vec<Option<Vec<T>>>>>) -> Self {
        Self::nested_unchecked(
            3,
            planes
                .into_iter()
                .map(|p| p.map(Ragged::from_rows))
                .collect(),
        )
    }

    /// Creates an empty array of the given rank.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::InvalidRank`] if `rank == 0`.
    pub fn empty(rank: usize) -> Result<Self, ArrayError> {
        match rank {
            0 => Err(ArrayError::InvalidRank { rank }),
            1 => Ok(Self::flat(Vec::new())),
            _ => Ok(Self::nested_unchecked(rank, Vec::new())),
        }
    }

    /// Returns the nesting depth; 1 for flat arrays.
    #[inline]
    pub fn rank(&self) -> usize {
        match &self.repr {
            Repr::Flat(_) => 1,
            Repr::Nested { rank, .. } => *rank,
        }
    }

    /// Returns `true` for rank-1 arrays.
    #[inline]
    pub fn is_flat(&self) -> bool {
        matches!(self.repr, Repr::Flat(_))
    }

    /// Returns the length of the outermost level.
    #[inline]
    pub fn len(&self) -> usize {
        match &self.repr {
            Repr::Flat(v) => v.len(),
            Repr::Nested { rows, .. } => rows.len(),
        }
    }

    /// Returns `true` if the outermost level is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the total number of leaf elements, skipping null rows.
    pub fn element_count(&self) -> usize {
        self.leaves().map(<[T]>::len).sum()
    }

    #[inline]
    pub fn as_flat(&self) -> Option<&[T]> {
        match &self.repr {
            Repr::Flat(v) => Some(v),
            Repr::Nested { .. } => None,
        }
    }

    #[inline]
    pub fn as_flat_mut(&mut self) -> Option<&mut Vec<T>> {
        match &mut self.repr {
            Repr::Flat(v) => Some(v),
            Repr::Nested { .. } => None,
        }
    }

    #[inline]
    pub fn rows(&self) -> Option<&[Option<Ragged<T>>]> {
        match &self.repr {
            Repr::Flat(_) => None,
            Repr::Nested { rows, .. } => Some(rows),
        }
    }

    /// Mutable rows, for moves that keep every row inside the same array.
    #[inline]
    pub(crate) fn rows_mut(&mut self) -> Option<&mut [Option<Ragged<T>>]> {
        match &mut self.repr {
            Repr::Flat(_) => None,
            Repr::Nested { rows, .. } => Some(rows),
        }
    }

    /// Returns row `index` of a nested array, or `None` for flat arrays,
    /// null rows and out-of-range indices.
    #[inline]
    pub fn row(&self, index: usize) -> Option<&Ragged<T>> {
        self.rows()?.get(index)?.as_ref()
    }

    /// Replaces row `index` and returns the previous one.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::InvalidRank`] for flat arrays, which have no
    /// rows, [`ArrayError::OutOfBounds`] if `index >= len()`, and
    /// [`ArrayError::RankMismatch`] if `row` does not have rank `rank() - 1`.
    pub fn set_row(
        &mut self,
        index: usize,
        row: Option<Ragged<T>>,
    ) -> Result<Option<Ragged<T>>, ArrayError> {
        let rank = self.rank();
        let rows = match &mut self.repr {
            Repr::Flat(_) => return Err(ArrayError::InvalidRank { rank: 1 }),
            Repr::Nested { rows, .. } => rows,
        };
        let bound = rows.len();
        let slot = rows.get_mut(index).ok_or(ArrayError::OutOfBounds {
            offset: index,
            length: 1,
            bound,
        })?;
        check_row_rank(index, rank, row.as_ref())?;
        Ok(std::mem::replace(slot, row))
    }

    /// Takes row `index` out of a nested array, leaving a null row.
    #[inline]
    pub fn take_row(&mut self, index: usize) -> Option<Ragged<T>> {
        self.rows_mut()?.get_mut(index)?.take()
    }

    /// Resizes the outermost level of a nested array, padding with null
    /// rows. Does nothing to flat arrays.
    pub fn resize_rows(&mut self, len: usize) {
        if let Repr::Nested { rows, .. } = &mut self.repr {
            rows.resize_with(len, || None);
        }
    }

    /// Consumes a flat array into its values.
    pub fn into_flat(self) -> Option<Vec<T>> {
        match self.repr {
            Repr::Flat(v) => Some(v),
            Repr::Nested { .. } => None,
        }
    }

    /// Iterates the leaf slices in row-major order.
    #[inline]
    pub fn leaves(&self) -> Leaves<'_, T> {
        Leaves::new(self)
    }

    /// Calls `f` on every leaf slice in row-major order.
    pub fn for_each_leaf_mut<F>(&mut self, f: &mut F)
    where
        F: FnMut(&mut [T]),
    {
        match &mut self.repr {
            Repr::Flat(v) => f(v),
            Repr::Nested { rows, .. } => {
                for row in rows.iter_mut().flatten() {
                    row.for_each_leaf_mut(f);
                }
            }
        }
    }

    /// Builds an array of identical structure whose leaves are produced by `f`.
    ///
    /// Null rows stay null.
    pub fn map_leaves<U, F>(&self, f: &mut F) -> Ragged<U>
    where
        F: FnMut(&[T]) -> Vec<U>,
    {
        match &self.repr {
            Repr::Flat(v) => Ragged::flat(f(v)),
            Repr::Nested { rank, rows } => Ragged::nested_unchecked(
                *rank,
                rows.iter()
                    .map(|r| r.as_ref().map(|r| r.map_leaves(f)))
                    .collect(),
            ),
        }
    }
}

#[inline]
fn check_row_rank<T>(
    row: usize,
    rank: usize,
    value: Option<&Ragged<T>>,
) -> Result<(), ArrayError> {
    match value {
        Some(value) if value.rank() != rank - 1 => Err(ArrayError::RankMismatch {
            row,
            expected: rank - 1,
            found: value.rank(),
        }),
        _ => Ok(()),
    }
}

impl<T> From<Vec<T>> for Ragged<T> {
    #[inline]
    fn from(values: Vec<T>) -> Self {
        Ragged::flat(values)
    }
}

impl<T> std::fmt::Display for Ragged<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Ragged(rank: {}, len: {}, elements: {})",
            self.rank(),
            self.len(),
            self.element_count()
        )
    }
}

/// Row-major iterator over the leaf slices of a [`Ragged`] array.
///
/// Null rows and their would-be descendants are skipped.
#[derive(Clone, Debug)]
pub struct Leaves<'a, T> {
    root: Option<&'a [T]>,
    stack: Vec<std::slice::Iter<'a, Option<Ragged<T>>>>,
}

impl<'a, T> Leaves<'a, T> {
    fn new(array: &'a Ragged<T>) -> Self {
        match &array.repr {
            Repr::Flat(v) => Self {
                root: Some(v),
                stack: Vec::new(),
            },
            Repr::Nested { rows, .. } => Self {
                root: None,
                stack: vec![rows.iter()],
            },
        }
    }
}

impl<'a, T> Iterator for Leaves<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(root) = self.root.take() {
            return Some(root);
        }
        while let Some(top) = self.stack.last_mut() {
            match top.next() {
                Some(Some(row)) => match &row.repr {
                    Repr::Flat(v) => return Some(v.as_slice()),
                    Repr::Nested { rows, .. } => self.stack.push(rows.iter()),
                },
                Some(None) => {}
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

impl<T> std::iter::FusedIterator for Leaves<'_, T> {}
