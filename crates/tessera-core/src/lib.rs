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

//! # Tessera Core
//!
//! Foundational numeric vocabulary for the tessera array conversion
//! workspace. Every other crate speaks in terms of the types defined here:
//! which storage kinds exist, what range a kind covers under a signed or
//! unsigned interpretation, and how a single native element is widened,
//! narrowed and turned into bytes.
//!
//! ## Modules
//!
//! - `num`: The six native storage kinds (`NumericKind`), their value ranges
//!   (`KindRange`), the widened comparison value (`Scalar`), byte order
//!   selection (`ByteOrder`), and the `Element` trait implemented for
//!   `i8`, `i16`, `i32`, `i64`, `f32` and `f64`.
//! - `error`: The `KindError` raised when a kind name does not identify one
//!   of the native kinds.
//!
//! ## Signedness
//!
//! Signedness is not a storage kind. An unsigned 16-bit value lives in an
//! `i16` container and is only read as unsigned when an operation is told
//! to do so. All range and conversion helpers take that flag explicitly.

pub mod error;
pub mod num;

pub use error::KindError;
pub use num::{
    element::Element,
    kind::{KindSpec, NumericKind},
    order::ByteOrder,
    range::KindRange,
    scalar::Scalar,
};
