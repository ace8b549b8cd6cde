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

//! # Byte Codec
//!
//! [`ByteCodec`] moves elements between typed arrays and raw byte buffers.
//! A byte image is a flat run of `width(kind)`-byte groups in the codec's
//! [`ByteOrder`], with no header and no length prefix. Float groups carry
//! the IEEE-754 bit pattern.
//!
//! ## Layouts
//!
//! Byte-side layouts count offset and stride in bytes; a stride of
//! `width(kind)` is packed, a larger one skips the bytes in between.
//! Element-side layouts count in elements.
//!
//! ## Lengths
//!
//! Decoding reads from `byte_offset` up to `byte_length` bytes (`None`: to
//! the end of the buffer) and transfers as many whole groups as fit there,
//! capped by the room left in the destination layout. Input that ends
//! inside a group is shortened silently under [`TailPolicy::Shorten`] and
//! rejected under [`TailPolicy::Reject`].
//!
//! Encoding transfers `length` elements (`None`: as many as both sides
//! allow) into the byte layout.
//!
//! ```rust
//! use tessera_codec::{ByteCodec, layout::Strided};
//! use tessera_core::ByteOrder;
//!
//! let codec = ByteCodec::new(ByteOrder::Little);
//! let bytes = codec.encode(&[1i16, -2], Strided::CONTIGUOUS, None).unwrap();
//! assert_eq!(bytes, vec![0x01, 0x00, 0xfe, 0xff]);
//!
//! let back: Vec<i16> = codec.decode(&bytes, Strided::packed(2), None).unwrap();
//! assert_eq!(back, vec![1, -2]);
//! ```

use crate::{
    error::{CodecError, Result},
    layout::{Strided, TailPolicy},
};
use log::debug;
use tessera_array::{
    AnyArray, NumericVec, dispatch_vec,
    flatten::allocate,
};
use tessera_core::{ByteOrder, Element, NumericKind};

/// Byte order and tail handling for encoding and decoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ByteCodec {
    order: ByteOrder,
    tail: TailPolicy,
}

impl ByteCodec {
    #[inline]
    pub const fn new(order: ByteOrder) -> Self {
        Self {
            order,
            tail: TailPolicy::Shorten,
        }
    }

    #[inline]
    pub const fn with_tail(order: ByteOrder, tail: TailPolicy) -> Self {
        Self { order, tail }
    }

    /// A codec for the `little_endian` flag.
    #[inline]
    pub const fn from_little_endian(little_endian: bool) -> Self {
        Self::new(ByteOrder::from_little_endian(little_endian))
    }

    #[inline(always)]
    pub const fn order(&self) -> ByteOrder {
        self.order
    }

    #[inline(always)]
    pub const fn tail(&self) -> TailPolicy {
        self.tail
    }

    /// Resolves the number of groups a decode reads from `bytes`.
    fn source_groups(
        &self,
        bytes: &[u8],
        src: Strided,
        byte_length: Option<usize>,
        width: usize,
    ) -> Result<usize> {
        check_stride(src, width)?;
        let available = bytes.len().checked_sub(src.offset).ok_or(CodecError::OutOfBounds {
            offset: src.offset,
            length: byte_length.unwrap_or(0),
            bound: bytes.len(),
        })?;

        let region = match byte_length {
            Some(requested) if requested > available => match self.tail {
                TailPolicy::Reject => {
                    return Err(CodecError::TruncatedInput {
                        needed: requested,
                        available,
                    });
                }
                TailPolicy::Shorten => {
                    debug!(
                        "byte length {} at offset {} exceeds buffer of {} bytes, reading {}",
                        requested,
                        src.offset,
                        bytes.len(),
                        available
                    );
                    available
                }
            },
            Some(requested) => requested,
            None => available,
        };

        let groups = Strided::new(0, src.stride).slots(region, width);
        if let Some(next) = groups.checked_mul(src.stride).filter(|&next| next < region) {
            let needed = next + width;
            match self.tail {
                TailPolicy::Reject => {
                    return Err(CodecError::TruncatedInput {
                        needed,
                        available: region,
                    });
                }
                TailPolicy::Shorten => debug!(
                    "partial trailing group: {} of {} bytes, decoding {} elements",
                    region - next,
                    width,
                    groups
                ),
            }
        }
        Ok(groups)
    }

    /// Decodes elements from `bytes` into `out`.
    ///
    /// Returns the number of elements decoded.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidStride`] for a zero stride or a byte
    /// stride below the element width, [`CodecError::OutOfBounds`] for an
    /// offset past its buffer, and
    /// [`CodecError::TruncatedInput`] for a short input under
    /// [`TailPolicy::Reject`].
    pub fn decode_into<T: Element>(
        &self,
        bytes: &[u8],
        src: Strided,
        byte_length: Option<usize>,
        out: &mut [T],
        dst: Strided,
    ) -> Result<usize> {
        let groups = self.source_groups(bytes, src, byte_length, T::WIDTH)?;
        let room = destination_slots(out.len(), dst)?;
        let count = groups.min(room);

        if src.is_packed(T::WIDTH) && dst.is_contiguous() {
            let start = src.offset;
            let chunks = bytes[start..start + count * T::WIDTH].chunks_exact(T::WIDTH);
            for (slot, chunk) in out[dst.offset..dst.offset + count].iter_mut().zip(chunks) {
                *slot = T::read_from(chunk, self.order);
            }
        } else {
            for (at, to) in src.positions(count).zip(dst.positions(count)) {
                out[to] = T::read_from(&bytes[at..at + T::WIDTH], self.order);
            }
        }
        Ok(count)
    }

    /// Decodes every whole group in the source layout into a new contiguous
    /// array.
    pub fn decode<T: Element>(&self, bytes: &[u8], src: Strided, byte_length: Option<usize>) -> Result<Vec<T>> {
        let groups = self.source_groups(bytes, src, byte_length, T::WIDTH)?;
        let mut out = allocate::<T>(groups);
        let n = self.decode_into(bytes, src, byte_length, &mut out, Strided::CONTIGUOUS)?;
        debug_assert_eq!(n, groups);
        Ok(out)
    }

    /// Decodes into a new array of `kind`.
    pub fn decode_kind(
        &self,
        kind: NumericKind,
        bytes: &[u8],
        src: Strided,
        byte_length: Option<usize>,
    ) -> Result<NumericVec> {
        Ok(match kind {
            NumericKind::Int8 => self.decode::<i8>(bytes, src, byte_length)?.into(),
            NumericKind::Int16 => self.decode::<i16>(bytes, src, byte_length)?.into(),
            NumericKind::Int32 => self.decode::<i32>(bytes, src, byte_length)?.into(),
            NumericKind::Int64 => self.decode::<i64>(bytes, src, byte_length)?.into(),
            NumericKind::Float32 => self.decode::<f32>(bytes, src, byte_length)?.into(),
            NumericKind::Float64 => self.decode::<f64>(bytes, src, byte_length)?.into(),
        })
    }

    /// Decodes into a kind-tagged output, using its kind.
    pub fn decode_any_into(
        &self,
        bytes: &[u8],
        src: Strided,
        byte_length: Option<usize>,
        out: &mut NumericVec,
        dst: Strided,
    ) -> Result<usize> {
        dispatch_vec!(out, o => self.decode_into(bytes, src, byte_length, o, dst))
    }

    /// Decodes a whole contiguous buffer into a rank-1 array of `kind`.
    pub fn decode_array(&self, kind: NumericKind, bytes: &[u8]) -> Result<AnyArray> {
        self.decode_kind(kind, bytes, Strided::packed(kind.width()), None)
            .map(NumericVec::into_array)
    }

    /// Encodes elements of `values` into `bytes`.
    ///
    /// Returns the number of elements encoded.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidStride`] for a zero stride or a byte
    /// stride below the element width, [`CodecError::OutOfBounds`] when
    /// `length` exceeds the elements
    /// available, and [`CodecError::TruncatedInput`] under
    /// [`TailPolicy::Reject`] when `length` exceeds the bytes available.
    pub fn encode_into<T: Element>(
        &self,
        values: &[T],
        src: Strided,
        length: Option<usize>,
        bytes: &mut [u8],
        dst: Strided,
    ) -> Result<usize> {
        check_stride(src, 1)?;
        check_stride(dst, T::WIDTH)?;
        let have = src.slots(values.len(), 1);
        if src.offset > values.len() {
            return Err(CodecError::OutOfBounds {
                offset: src.offset,
                length: length.unwrap_or(0),
                bound: values.len(),
            });
        }
        if dst.offset > bytes.len() {
            return Err(CodecError::OutOfBounds {
                offset: dst.offset,
                length: length.unwrap_or(0).saturating_mul(T::WIDTH),
                bound: bytes.len(),
            });
        }
        let room = dst.slots(bytes.len(), T::WIDTH);

        let count = match length {
            None => have.min(room),
            Some(n) if n > have => {
                return Err(CodecError::OutOfBounds {
                    offset: src.offset,
                    length: n,
                    bound: values.len(),
                });
            }
            Some(n) if n > room => match self.tail {
                TailPolicy::Reject => {
                    return Err(CodecError::TruncatedInput {
                        needed: dst.extent(n, T::WIDTH).unwrap_or(usize::MAX),
                        available: bytes.len() - dst.offset,
                    });
                }
                TailPolicy::Shorten => {
                    debug!("encoding {} of {} requested elements: output holds {}", room, n, room);
                    room
                }
            },
            Some(n) => n,
        };

        if src.is_contiguous() && dst.is_packed(T::WIDTH) {
            let start = dst.offset;
            let chunks = bytes[start..start + count * T::WIDTH].chunks_exact_mut(T::WIDTH);
            for (chunk, &value) in chunks.zip(&values[src.offset..src.offset + count]) {
                value.write_to(chunk, self.order);
            }
        } else {
            for (from, at) in src.positions(count).zip(dst.positions(count)) {
                values[from].write_to(&mut bytes[at..at + T::WIDTH], self.order);
            }
        }
        Ok(count)
    }

    /// Encodes elements of `values` into a new packed byte buffer.
    pub fn encode<T: Element>(&self, values: &[T], src: Strided, length: Option<usize>) -> Result<Vec<u8>> {
        check_stride(src, 1)?;
        let have = src.slots(values.len(), 1);
        let count = length.unwrap_or(have);
        if count > have || src.offset > values.len() {
            return Err(CodecError::OutOfBounds {
                offset: src.offset,
                length: count,
                bound: values.len(),
            });
        }
        let mut bytes = vec![0u8; count * T::WIDTH];
        let n = self.encode_into(values, src, length, &mut bytes, Strided::packed(T::WIDTH))?;
        debug_assert_eq!(n, count);
        Ok(bytes)
    }

    /// Encodes a kind-tagged rank-1 array into a new byte buffer.
    pub fn encode_any(&self, values: &NumericVec) -> Result<Vec<u8>> {
        dispatch_vec!(values, v => self.encode(v, Strided::CONTIGUOUS, None))
    }

    /// Encodes a kind-tagged rank-1 array into `bytes`.
    pub fn encode_any_into(
        &self,
        values: &NumericVec,
        src: Strided,
        length: Option<usize>,
        bytes: &mut [u8],
        dst: Strided,
    ) -> Result<usize> {
        dispatch_vec!(values, v => self.encode_into(v, src, length, bytes, dst))
    }

    /// Encodes an array of any rank, row-major, with null rows skipped.
    pub fn encode_array(&self, array: &AnyArray) -> Result<Vec<u8>> {
        match array.to_flat_vec() {
            Some(flat) => self.encode_any(&flat),
            None => self.encode_any(&array.flatten()),
        }
    }
}

impl std::fmt::Display for ByteCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ByteCodec(order: {}, tail: {})", self.order, self.tail)
    }
}

/// Rejects strides that are zero or would overlap `width`-unit elements.
#[inline]
fn check_stride(layout: Strided, width: usize) -> Result<()> {
    if layout.stride == 0 || layout.stride < width {
        return Err(CodecError::InvalidStride {
            stride: layout.stride,
            width,
        });
    }
    Ok(())
}

#[inline]
fn destination_slots(len: usize, dst: Strided) -> Result<usize> {
    check_stride(dst, 1)?;
    if dst.offset > len {
        return Err(CodecError::OutOfBounds {
            offset: dst.offset,
            length: 0,
            bound: len,
        });
    }
    Ok(dst.slots(len, 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_array::Ragged;

    #[test]
    fn test_big_endian_int32() {
        let codec = ByteCodec::new(ByteOrder::Big);
        let bytes = codec.encode(&[0x0102_0304i32], Strided::CONTIGUOUS, None).unwrap();
        assert_eq!(bytes, vec![1, 2, 3, 4]);
        let back: Vec<i32> = codec.decode(&bytes, Strided::packed(4), None).unwrap();
        assert_eq!(back, vec![0x0102_0304]);
    }

    #[test]
    fn test_float_bit_patterns() {
        let codec = ByteCodec::new(ByteOrder::Little);
        let bytes = codec.encode(&[1.0f32], Strided::CONTIGUOUS, None).unwrap();
        assert_eq!(bytes, 1.0f32.to_bits().to_le_bytes().to_vec());

        let nan = f64::from_bits(0x7ff8_0000_dead_beef);
        let bytes = codec.encode(&[nan], Strided::CONTIGUOUS, None).unwrap();
        let back: Vec<f64> = codec.decode(&bytes, Strided::packed(8), None).unwrap();
        assert_eq!(back[0].to_bits(), nan.to_bits());
    }

    #[test]
    fn test_deinterleave_channel() {
        // R G B R G B R G B
        let bytes = [10u8, 20, 30, 11, 21, 31, 12, 22, 32];
        let codec = ByteCodec::default();
        let green: Vec<i8> = codec.decode(&bytes, Strided::new(1, 3), None).unwrap();
        assert_eq!(green, vec![20, 21, 22]);
    }

    #[test]
    fn test_interleave_channel_with_output_stride() {
        let codec = ByteCodec::new(ByteOrder::Little);
        let mut out = [0u8; 12];
        let n = codec
            .encode_into(&[0x0201i16, 0x0403], Strided::CONTIGUOUS, None, &mut out, Strided::new(2, 6))
            .unwrap();
        assert_eq!(n, 2);
        assert_eq!(out, [0, 0, 1, 2, 0, 0, 0, 0, 3, 4, 0, 0]);
    }

    #[test]
    fn test_decode_into_strided_output() {
        let codec = ByteCodec::new(ByteOrder::Big);
        let mut out = [0i16; 5];
        let n = codec
            .decode_into(&[0, 1, 0, 2, 0, 3], Strided::packed(2), None, &mut out, Strided::new(0, 2))
            .unwrap();
        assert_eq!(n, 3);
        assert_eq!(out, [1, 0, 2, 0, 3]);
    }

    #[test]
    fn test_partial_tail_shortens() {
        let codec = ByteCodec::new(ByteOrder::Big);
        let v: Vec<i32> = codec.decode(&[0, 0, 0, 7, 1, 2], Strided::packed(4), None).unwrap();
        assert_eq!(v, vec![7]);
    }

    #[test]
    fn test_partial_tail_rejects() {
        let codec = ByteCodec::with_tail(ByteOrder::Big, TailPolicy::Reject);
        assert_eq!(
            codec.decode::<i32>(&[0, 0, 0, 7, 1, 2], Strided::packed(4), None),
            Err(CodecError::TruncatedInput {
                needed: 8,
                available: 6
            })
        );
    }

    #[test]
    fn test_byte_length_past_end() {
        let bytes = [0u8, 1, 0, 2];
        let shorten = ByteCodec::new(ByteOrder::Big);
        assert_eq!(shorten.decode::<i16>(&bytes, Strided::packed(2), Some(10)).unwrap(), vec![1, 2]);

        let reject = ByteCodec::with_tail(ByteOrder::Big, TailPolicy::Reject);
        assert_eq!(
            reject.decode::<i16>(&bytes, Strided::packed_at(2, 2), Some(4)),
            Err(CodecError::TruncatedInput {
                needed: 4,
                available: 2
            })
        );
    }

    #[test]
    fn test_byte_length_limits_decode() {
        let codec = ByteCodec::new(ByteOrder::Big);
        let v: Vec<i16> = codec.decode(&[0, 1, 0, 2, 0, 3], Strided::packed_at(2, 2), Some(2)).unwrap();
        assert_eq!(v, vec![2]);
    }

    #[test]
    fn test_destination_caps_count() {
        let codec = ByteCodec::new(ByteOrder::Big);
        let mut out = [0i8; 2];
        assert_eq!(
            codec.decode_into(&[1, 2, 3, 4], Strided::CONTIGUOUS, None, &mut out, Strided::CONTIGUOUS),
            Ok(2)
        );
        assert_eq!(out, [1, 2]);
    }

    #[test]
    fn test_zero_stride_rejected() {
        let codec = ByteCodec::default();
        assert_eq!(
            codec.decode::<i8>(&[1, 2], Strided::new(0, 0), None),
            Err(CodecError::InvalidStride { stride: 0, width: 1 })
        );
        let mut out = [0u8; 4];
        assert_eq!(
            codec.encode_into(&[1i8], Strided::CONTIGUOUS, None, &mut out, Strided::new(0, 0)),
            Err(CodecError::InvalidStride { stride: 0, width: 1 })
        );
    }

    #[test]
    fn test_overlapping_byte_stride_rejected() {
        let codec = ByteCodec::default();
        assert_eq!(
            codec.decode::<i32>(&[0; 16], Strided::new(0, 2), None),
            Err(CodecError::InvalidStride { stride: 2, width: 4 })
        );
        let mut out = [0u8; 8];
        assert_eq!(
            codec.encode_into(&[1i16, 2], Strided::CONTIGUOUS, None, &mut out, Strided::CONTIGUOUS),
            Err(CodecError::InvalidStride { stride: 1, width: 2 })
        );
        assert_eq!(out, [0; 8]);
    }

    #[test]
    fn test_byte_stride_not_a_multiple_of_width() {
        // Three 2-byte values, each followed by one padding byte.
        let bytes = [0u8, 1, 9, 0, 2, 9, 0, 3, 9];
        let codec = ByteCodec::new(ByteOrder::Big);
        let values: Vec<i16> = codec.decode(&bytes, Strided::new(0, 3), None).unwrap();
        assert_eq!(values, vec![1, 2, 3]);
        let padding: Vec<i8> = codec.decode(&bytes, Strided::new(2, 3), None).unwrap();
        assert_eq!(padding, vec![9, 9, 9]);

        let mut out = [9u8; 9];
        let n = codec
            .encode_into(&values, Strided::CONTIGUOUS, None, &mut out, Strided::new(0, 3))
            .unwrap();
        assert_eq!(n, 3);
        assert_eq!(out, bytes);

        // The last group is cut short by one byte.
        let strict = ByteCodec::with_tail(ByteOrder::Big, TailPolicy::Reject);
        assert_eq!(
            strict.decode::<i16>(&bytes[..7], Strided::new(0, 3), None),
            Err(CodecError::TruncatedInput {
                needed: 8,
                available: 7
            })
        );
        assert_eq!(codec.decode::<i16>(&bytes[..8], Strided::new(0, 3), None), Ok(vec![1, 2, 3]));
    }

    #[test]
    fn test_huge_stride_reads_first_group_only() {
        let codec = ByteCodec::new(ByteOrder::Little);
        assert_eq!(codec.decode::<i32>(&[0u8; 16], Strided::new(0, usize::MAX), None), Ok(vec![0]));

        let mut plane = [0i64; 4];
        let n = codec
            .decode_into(&[1u8; 16], Strided::packed(8), None, &mut plane, Strided::new(1, usize::MAX))
            .unwrap();
        assert_eq!(n, 1);
        assert_eq!(plane, [0, 0x0101_0101_0101_0101, 0, 0]);

        let mut out = [0u8; 16];
        let n = codec
            .encode_into(&[7i32, 8], Strided::CONTIGUOUS, Some(1), &mut out, Strided::new(4, usize::MAX))
            .unwrap();
        assert_eq!(n, 1);
        assert_eq!(out[4..8], [7u8, 0, 0, 0]);

        let strict = ByteCodec::with_tail(ByteOrder::Little, TailPolicy::Reject);
        assert_eq!(
            strict.encode_into(&[7i32, 8], Strided::CONTIGUOUS, Some(2), &mut out, Strided::new(0, usize::MAX)),
            Err(CodecError::TruncatedInput {
                needed: usize::MAX,
                available: 16
            })
        );
    }

    #[test]
    fn test_offsets_past_end() {
        let codec = ByteCodec::default();
        assert!(matches!(
            codec.decode::<i8>(&[1, 2], Strided::at(3), None),
            Err(CodecError::OutOfBounds { .. })
        ));
        assert_eq!(codec.decode::<i8>(&[1, 2], Strided::at(2), None), Ok(vec![]));
    }

    #[test]
    fn test_encode_length_checks() {
        let values = [1i16, 2, 3];
        let shorten = ByteCodec::new(ByteOrder::Little);
        let mut out = [0u8; 4];
        assert_eq!(
            shorten.encode_into(&values, Strided::CONTIGUOUS, Some(3), &mut out, Strided::packed(2)),
            Ok(2)
        );
        assert_eq!(out, [1, 0, 2, 0]);

        let reject = ByteCodec::with_tail(ByteOrder::Little, TailPolicy::Reject);
        let mut out = [0u8; 4];
        assert_eq!(
            reject.encode_into(&values, Strided::CONTIGUOUS, Some(3), &mut out, Strided::packed(2)),
            Err(CodecError::TruncatedInput {
                needed: 6,
                available: 4
            })
        );
        assert_eq!(out, [0; 4]);

        assert!(matches!(
            shorten.encode(&values, Strided::at(1), Some(3)),
            Err(CodecError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_encode_strided_source() {
        let codec = ByteCodec::new(ByteOrder::Big);
        let bytes = codec.encode(&[1i8, 2, 3, 4, 5], Strided::new(1, 2), None).unwrap();
        assert_eq!(bytes, vec![2, 4]);
    }

    #[test]
    fn test_kind_tagged_paths() {
        let codec = ByteCodec::new(ByteOrder::Little);
        let v = NumericVec::from(vec![1.5f64, -2.0]);
        let bytes = codec.encode_any(&v).unwrap();
        assert_eq!(bytes.len(), 16);
        assert_eq!(codec.decode_kind(NumericKind::Float64, &bytes, Strided::packed(8), None).unwrap(), v);

        let mut out = NumericVec::zeroed(NumericKind::Int64, 2);
        assert_eq!(
            codec.decode_any_into(&bytes, Strided::packed(8), None, &mut out, Strided::CONTIGUOUS),
            Ok(2)
        );
        assert_eq!(out.as_slice::<i64>().unwrap()[0], 1.5f64.to_bits() as i64);
    }

    #[test]
    fn test_encode_array_flattens_rows() {
        let codec = ByteCodec::new(ByteOrder::Big);
        let array = AnyArray::from(Ragged::from_rows(vec![Some(vec![1i16, 2]), None, Some(vec![3])]));
        let bytes = codec.encode_array(&array).unwrap();
        assert_eq!(bytes, vec![0, 1, 0, 2, 0, 3]);
        assert_eq!(
            codec.decode_array(NumericKind::Int16, &bytes).unwrap(),
            AnyArray::from(vec![1i16, 2, 3])
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ByteCodec::default().to_string(),
            "ByteCodec(order: big, tail: shorten)"
        );
    }
}
