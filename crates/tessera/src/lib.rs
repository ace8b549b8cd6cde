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

//! # Tessera
//!
//! Conversion, byte encoding and chunked storage of numeric arrays of the
//! six native kinds (`int8`, `int16`, `int32`, `int64`, `float32`,
//! `float64`), at any rank, with unsigned interpretation as a per-call flag.
//!
//! This crate re-exports the workspace and adds [`Settings`], a TOML
//! configuration that builds a configured [`ByteCodec`], [`ChunkedBuffer`]
//! and [`Converter`].
//!
//! ```rust
//! use tessera::{AnyArray, NumericKind, Settings};
//!
//! let settings = Settings::from_toml_str(
//!     r#"
//!     [convert]
//!     policy = "clamp"
//!     "#,
//! )
//! .unwrap();
//!
//! let pixels = AnyArray::from(vec![-3i32, 70, 300]);
//! let bytes = settings.converter().convert(&pixels, NumericKind::Int8).unwrap();
//! assert_eq!(bytes, AnyArray::from(vec![-3i8, 70, 127]));
//! ```
//!
//! ## Crates
//!
//! - `tessera_core`: kinds, ranges, byte orders and the `Element` trait.
//! - `tessera_array`: ragged arrays, descriptors, flattening, shifting.
//! - `tessera_convert`: truncating and clamping conversion.
//! - `tessera_codec`: strided, endian-aware byte encoding.
//! - `tessera_buffer`: block-chunked growable storage.

pub mod settings;

pub use settings::{BufferSettings, CodecSettings, ConvertSettings, Settings, SettingsError};

pub use tessera_array::{AnyArray, ArrayDescriptor, ArrayElement, ArrayError, Describe, NumericVec, Ragged};
pub use tessera_buffer::{AnyChunkedBuffer, BufferError, ChunkedBuffer, DEFAULT_BLOCK_SIZE};
pub use tessera_codec::{ByteCodec, CodecError, Strided, TailPolicy};
pub use tessera_convert::{ConvertError, Converter, PolicyKind, Span};
pub use tessera_core::{ByteOrder, Element, KindError, NumericKind, Scalar};

pub use tessera_array;
pub use tessera_buffer;
pub use tessera_codec;
pub use tessera_convert;
pub use tessera_core;
