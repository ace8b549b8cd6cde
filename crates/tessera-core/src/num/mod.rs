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

//! # Numeric Foundations
//!
//! The type model of the workspace. A value is always stored in one of six
//! native containers; everything else (unsigned views, widened comparisons,
//! byte images) is derived from the container and an explicit flag.
//!
//! ## Submodules
//!
//! - `kind`: `NumericKind` with byte widths and name parsing, and `KindSpec`
//!   which pairs a kind with the signedness a name implies.
//! - `range`: `KindRange`, the inclusive `[min, max]` a kind covers under a
//!   signedness flag.
//! - `scalar`: `Scalar`, a value widened to `i128` or `f64` so any two kinds
//!   can be compared exactly.
//! - `order`: `ByteOrder` for byte images of elements.
//! - `element`: The `Element` trait tying a Rust primitive to its kind.
//!
//! ## Motivation
//!
//! Conversion code is combinatorial: six sources times six destinations
//! times two signedness flags. Funnelling every element through `Scalar`
//! and a `KindRange` keeps the numeric rules in one place and lets the
//! conversion routines stay generic.

pub mod element;
pub mod kind;
pub mod order;
pub mod range;
pub mod scalar;
