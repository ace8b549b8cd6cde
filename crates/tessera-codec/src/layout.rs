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

//! # Layouts
//!
//! Where elements sit inside a buffer. A [`Strided`] layout starts at an
//! offset and advances a fixed distance between elements. Both are counted
//! in the units of the buffer they describe: elements on the element side,
//! bytes on the byte side. A byte-side stride must be at least the element
//! width, so groups never overlap; [`Strided::packed`] is the layout with
//! no gap between groups.
//!
//! ```rust
//! use tessera_codec::layout::Strided;
//!
//! // Second channel of an interleaved 3-channel stream of 2-byte elements:
//! // one pixel is 6 bytes, the channel starts 2 bytes in.
//! let green = Strided::new(2, 6);
//! assert_eq!(green.slots(18, 2), 3);
//! assert_eq!(green.position(1), Some(8));
//! ```

/// A start offset and the distance between consecutive elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Strided {
    /// Start offset, in buffer units.
    pub offset: usize,
    /// Distance between the starts of consecutive elements, in buffer units.
    pub stride: usize,
}

impl Strided {
    /// A unit-stride layout starting at the beginning of the buffer.
    ///
    /// Contiguous on the element side, and on the byte side for one-byte
    /// kinds. Wider kinds use [`Strided::packed`].
    pub const CONTIGUOUS: Strided = Strided {
        offset: 0,
        stride: 1,
    };

    #[inline(always)]
    pub const fn new(offset: usize, stride: usize) -> Self {
        Self { offset, stride }
    }

    /// A unit-stride layout starting at `offset`.
    #[inline(always)]
    pub const fn at(offset: usize) -> Self {
        Self { offset, stride: 1 }
    }

    /// Back-to-back `width`-byte groups starting at byte 0.
    #[inline(always)]
    pub const fn packed(width: usize) -> Self {
        Self {
            offset: 0,
            stride: width,
        }
    }

    /// Back-to-back `width`-byte groups starting at byte `offset`.
    #[inline(always)]
    pub const fn packed_at(offset: usize, width: usize) -> Self {
        Self {
            offset,
            stride: width,
        }
    }

    #[inline(always)]
    pub const fn is_contiguous(&self) -> bool {
        self.stride == 1
    }

    /// Returns `true` if consecutive `width`-unit elements touch.
    #[inline(always)]
    pub const fn is_packed(&self, width: usize) -> bool {
        self.stride == width
    }

    /// Position of element `index`, or `None` if it is not representable.
    #[inline]
    pub const fn position(&self, index: usize) -> Option<usize> {
        match index.checked_mul(self.stride) {
            Some(step) => self.offset.checked_add(step),
            None => None,
        }
    }

    /// Positions of the first `count` elements.
    ///
    /// `count` must not exceed the [`slots`](Self::slots) of the buffer the
    /// positions index, which keeps every position in range.
    #[inline]
    pub(crate) fn positions(&self, count: usize) -> impl Iterator<Item = usize> {
        let Strided { offset, stride } = *self;
        (0..count).map(move |i| offset + i * stride)
    }

    /// Number of whole `width`-unit elements that fit in `len` units.
    ///
    /// Returns 0 when the offset lies at or past the end, or when the
    /// stride is zero.
    #[inline]
    pub const fn slots(&self, len: usize, width: usize) -> usize {
        if self.offset >= len || self.stride == 0 {
            return 0;
        }
        let room = len - self.offset;
        if room < width {
            0
        } else {
            (room - width) / self.stride + 1
        }
    }

    /// Number of units `count` elements span, from the offset to the end of
    /// the last element, or `None` if that is not representable.
    #[inline]
    pub const fn extent(&self, count: usize, width: usize) -> Option<usize> {
        if count == 0 {
            return Some(0);
        }
        match (count - 1).checked_mul(self.stride) {
            Some(span) => span.checked_add(width),
            None => None,
        }
    }
}

impl Default for Strided {
    #[inline]
    fn default() -> Self {
        Self::CONTIGUOUS
    }
}

impl std::fmt::Display for Strided {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Strided(offset: {}, stride: {})", self.offset, self.stride)
    }
}

/// What the decoder does with input that ends inside an element group.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum TailPolicy {
    /// Transfer the whole groups that fit and ignore the rest.
    #[default]
    Shorten,
    /// Fail with [`CodecError::TruncatedInput`](crate::error::CodecError::TruncatedInput).
    Reject,
}

impl std::fmt::Display for TailPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TailPolicy::Shorten => f.write_str("shorten"),
            TailPolicy::Reject => f.write_str("reject"),
        }
    }
}
