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

//! # Tessera Codec
//!
//! Serialization of tessera arrays to and from raw byte buffers. The wire
//! form is deliberately bare: consecutive element-sized byte groups in a
//! chosen byte order, nothing else. Lengths are supplied by the caller or
//! inferred from buffer sizes.
//!
//! ## Modules
//!
//! - `layout`: `Strided`, the offset and stride of elements inside a buffer,
//!   and `TailPolicy`, what to do with input that ends inside a group.
//! - `codec`: `ByteCodec`, the typed and kind-tagged encode and decode
//!   operations.
//! - `error`: `CodecError`.
//!
//! ## Channels
//!
//! Strides let a caller pull one channel out of an interleaved stream or
//! write one channel into it. The codec has no notion of channels itself;
//! a stride is just a distance between elements.

pub mod codec;
pub mod error;
pub mod layout;

pub use codec::ByteCodec;
pub use error::CodecError;
pub use layout::{Strided, TailPolicy};
