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

//! # Tessera Convert
//!
//! Element-kind conversion for tessera arrays. Values move between any two
//! of the six native kinds under one of two policies, at any rank, with the
//! row structure of ragged arrays preserved.
//!
//! ## Modules
//!
//! - `policy`: The `ConversionPolicy` trait and its two implementations,
//!   `Truncate` (fixed-width cast, wraps) and `Clamp` (saturates into the
//!   destination range).
//! - `span`: `Span`, the input offset, output offset and optional length of
//!   a conversion.
//! - `typed`: Generic slice and ragged-array conversion over known element
//!   types.
//! - `dispatch`: Conversion of kind-tagged `NumericVec` and `AnyArray`
//!   values through the kind×kind table.
//! - `ops`: The public `convert*` entry points.
//! - `converter`: `Converter`, a policy plus signedness flags chosen once
//!   and applied repeatedly.
//! - `error`: `ConvertError`.
//!
//! ## Motivation
//!
//! Every pairing of source and destination kind shares one numeric rule per
//! policy. Writing that rule once, generically, and selecting the pairing
//! once per call keeps the 36 combinations from turning into 36 loops.
//!
//! ## Overflow
//!
//! Numeric overflow is never an error. Truncating conversion wraps and
//! clamping conversion saturates; callers choose the policy to choose the
//! behaviour.

pub mod converter;
pub mod dispatch;
pub mod error;
pub mod ops;
pub mod policy;
pub mod span;
pub mod typed;

pub use converter::Converter;
pub use error::ConvertError;
pub use ops::{convert, convert_into, convert_safe, convert_safe_into, convert_value, convert_value_safe};
pub use policy::{Clamp, ConversionPolicy, PolicyKind, Truncate};
pub use span::Span;
