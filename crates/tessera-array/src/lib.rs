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

//! # Tessera Arrays
//!
//! Array values of one of the six native kinds, at any rank, and the
//! structural operations that do not change element kinds.
//!
//! ## Modules
//!
//! - `ragged`: `Ragged<T>`, a rank-N array whose rows may be independently
//!   sized or absent (null rows), with a row-major leaf iterator.
//! - `erased`: The tagged values `NumericVec` (rank 1) and `AnyArray`
//!   (any rank) that carry their kind at runtime, plus the `ArrayElement`
//!   bridge from a primitive to its variant and the `dispatch_vec!` /
//!   `dispatch_array!` macros that bind the typed payload of either.
//! - `descriptor`: `ArrayDescriptor`, the `(kind, rank)` identity of an
//!   array, its textual form (`int16[][]`) and the `Describe` trait.
//! - `flatten`: Rank reduction into a contiguous rank-1 array and the
//!   allocation primitive shared with the rest of the workspace.
//! - `shift`: `memmove`-style copies within one array.
//! - `error`: `ArrayError`.
//!
//! ## Null rows
//!
//! A `None` row at rank > 1 is treated as zero-length everywhere: it
//! contributes no elements when flattening and stays `None` when an array is
//! converted. It is never an error.

pub mod descriptor;
pub mod erased;
pub mod error;
pub mod flatten;
pub mod ragged;
pub mod shift;

pub use descriptor::{ArrayDescriptor, Describe};
pub use erased::{AnyArray, ArrayElement, NumericVec};
pub use error::ArrayError;
pub use ragged::Ragged;
