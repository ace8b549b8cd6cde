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

//! # Tessera Buffers
//!
//! Growable storage for elements of one native kind, held as a list of
//! fixed-size blocks so that growing never copies what is already stored.
//!
//! ## Modules
//!
//! - `chunked`: `ChunkedBuffer<T>`, the typed block list with append,
//!   random-access read and write, resizing and materialization into one
//!   contiguous array.
//! - `any`: `AnyChunkedBuffer`, the same buffer selected by a runtime
//!   `NumericKind`.
//! - `error`: `BufferError`.
//!
//! A buffer is a plain owned value. It does no internal locking; share it
//! across threads behind a mutex.

pub mod any;
pub mod chunked;
pub mod error;

pub use any::AnyChunkedBuffer;
pub use chunked::{ChunkedBuffer, DEFAULT_BLOCK_SIZE};
pub use error::BufferError;
