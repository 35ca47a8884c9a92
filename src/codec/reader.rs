//! 从字节缓冲区读取整数的校验入口.
//!
//! 所有读取在访问缓冲区之前完成边界检查, 失败时不会触碰任何数据.

use byteorder::{BigEndian, ByteOrder as _, LittleEndian};

use crate::codec::bounds;
use crate::codec::endian::ByteOrder;
use crate::codec::error::{Error, Result};

impl ByteOrder {
    /// 从 `source` 的 `offset` 处读取 2 个字节并按本字节序装配 i16.
    ///
    /// # 错误
    ///
    /// 当 `offset + 2 > source.len()` 时返回 [`Error::OutOfBounds`].
    #[inline]
    pub fn i16_from(self, source: &[u8], offset: usize) -> Result<i16> {
        bounds::ensure_capacity(source.len(), offset, 2)?;
        let bytes = &source[offset..offset + 2];
        Ok(match self {
            ByteOrder::Big => BigEndian::read_i16(bytes),
            ByteOrder::Little => LittleEndian::read_i16(bytes),
        })
    }

    /// 从 `source` 的 `offset` 处读取 4 个字节并按本字节序装配 i32.
    #[inline]
    pub fn i32_from(self, source: &[u8], offset: usize) -> Result<i32> {
        bounds::ensure_capacity(source.len(), offset, 4)?;
        let bytes = &source[offset..offset + 4];
        Ok(match self {
            ByteOrder::Big => BigEndian::read_i32(bytes),
            ByteOrder::Little => LittleEndian::read_i32(bytes),
        })
    }

    /// 从 `source` 的 `offset` 处读取 8 个字节并按本字节序装配 i64.
    #[inline]
    pub fn i64_from(self, source: &[u8], offset: usize) -> Result<i64> {
        bounds::ensure_capacity(source.len(), offset, 8)?;
        let bytes = &source[offset..offset + 8];
        Ok(match self {
            ByteOrder::Big => BigEndian::read_i64(bytes),
            ByteOrder::Little => LittleEndian::read_i64(bytes),
        })
    }

    /// 批量解包: 把 `source[start..end)` 解码为连续的 i16 元素,
    /// 写入 `dest` 从 `dest_offset` 开始的位置.
    ///
    /// # 错误
    ///
    /// * [`Error::InvalidRange`]: `start > end`.
    /// * [`Error::RangeOutOfBounds`]: 字节范围逃逸出 `source`.
    /// * [`Error::Misaligned`]: 范围长度不是 2 的整数倍 (不允许部分元素).
    /// * [`Error::OutOfBounds`]: `dest` 容纳不下解出的元素.
    pub fn unpack_i16s(
        self,
        source: &[u8],
        start: usize,
        end: usize,
        dest: &mut [i16],
        dest_offset: usize,
    ) -> Result<()> {
        let count = self.check_bulk(source.len(), start, end, 2, dest.len(), dest_offset)?;
        let bytes = &source[start..end];
        let out = &mut dest[dest_offset..dest_offset + count];
        match self {
            ByteOrder::Big => BigEndian::read_i16_into(bytes, out),
            ByteOrder::Little => LittleEndian::read_i16_into(bytes, out),
        }
        Ok(())
    }

    /// 批量解包 i32 元素, 语义同 [`unpack_i16s`](Self::unpack_i16s).
    pub fn unpack_i32s(
        self,
        source: &[u8],
        start: usize,
        end: usize,
        dest: &mut [i32],
        dest_offset: usize,
    ) -> Result<()> {
        let count = self.check_bulk(source.len(), start, end, 4, dest.len(), dest_offset)?;
        let bytes = &source[start..end];
        let out = &mut dest[dest_offset..dest_offset + count];
        match self {
            ByteOrder::Big => BigEndian::read_i32_into(bytes, out),
            ByteOrder::Little => LittleEndian::read_i32_into(bytes, out),
        }
        Ok(())
    }

    /// 批量解包 i64 元素, 语义同 [`unpack_i16s`](Self::unpack_i16s).
    pub fn unpack_i64s(
        self,
        source: &[u8],
        start: usize,
        end: usize,
        dest: &mut [i64],
        dest_offset: usize,
    ) -> Result<()> {
        let count = self.check_bulk(source.len(), start, end, 8, dest.len(), dest_offset)?;
        let bytes = &source[start..end];
        let out = &mut dest[dest_offset..dest_offset + count];
        match self {
            ByteOrder::Big => BigEndian::read_i64_into(bytes, out),
            ByteOrder::Little => LittleEndian::read_i64_into(bytes, out),
        }
        Ok(())
    }

    /// 批量解包共用的校验: 返回范围内的元素个数.
    fn check_bulk(
        self,
        source_len: usize,
        start: usize,
        end: usize,
        width: usize,
        dest_len: usize,
        dest_offset: usize,
    ) -> Result<usize> {
        bounds::ensure_range(start, end, source_len)?;
        let len = end - start;
        if len % width != 0 {
            return Err(Error::Misaligned { len, width });
        }
        let count = len / width;
        bounds::ensure_capacity(dest_len, dest_offset, count)?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_i32_from_with_known_bytes_returns_reference_value() {
        let big = [0xFB, 0x63, 0x8B, 0xFB];
        let little = [0xFB, 0x8B, 0x63, 0xFB];
        assert_eq!(ByteOrder::Big.i32_from(&big, 0).unwrap(), -77362181);
        assert_eq!(ByteOrder::Little.i32_from(&little, 0).unwrap(), -77362181);
    }

    #[test]
    fn test_i16_from_with_offset_reads_at_correct_position() {
        let data = [0x00, 0x00, 0x7F, 0xFF];
        assert_eq!(ByteOrder::Big.i16_from(&data, 2).unwrap(), i16::MAX);
        assert_eq!(ByteOrder::Little.i16_from(&data, 2).unwrap(), -129);
    }

    #[test]
    fn test_i64_from_with_truncated_buffer_returns_out_of_bounds() {
        let data = [0u8; 7];
        assert_eq!(
            ByteOrder::Big.i64_from(&data, 0),
            Err(Error::OutOfBounds {
                offset: 0,
                needed: 8,
                len: 7
            })
        );
        // offset 加宽度刚好越界一个字节
        let data = [0u8; 16];
        assert_eq!(
            ByteOrder::Little.i64_from(&data, 9),
            Err(Error::OutOfBounds {
                offset: 9,
                needed: 8,
                len: 16
            })
        );
    }

    #[test]
    fn test_unpack_i32s_with_aligned_range_decodes_elements() {
        let bytes = [0x00, 0x00, 0x00, 0x01, 0xFF, 0xFF, 0xFF, 0xFF];
        let mut out = [0i32; 2];
        ByteOrder::Big.unpack_i32s(&bytes, 0, 8, &mut out, 0).unwrap();
        assert_eq!(out, [1, -1]);

        let mut out = [0i32; 3];
        ByteOrder::Little
            .unpack_i32s(&bytes, 4, 8, &mut out, 1)
            .unwrap();
        assert_eq!(out, [0, -1, 0]);
    }

    #[test]
    fn test_unpack_i32s_with_partial_element_range_returns_misaligned() {
        let bytes = [0u8; 8];
        let mut out = [0i32; 2];
        assert_eq!(
            ByteOrder::Big.unpack_i32s(&bytes, 0, 6, &mut out, 0),
            Err(Error::Misaligned { len: 6, width: 4 })
        );
    }

    #[test]
    fn test_unpack_i16s_with_inverted_range_returns_invalid_range() {
        let bytes = [0u8; 4];
        let mut out = [0i16; 2];
        assert_eq!(
            ByteOrder::Little.unpack_i16s(&bytes, 4, 2, &mut out, 0),
            Err(Error::InvalidRange { start: 4, end: 2 })
        );
    }

    #[test]
    fn test_unpack_i64s_with_small_dest_returns_out_of_bounds() {
        let bytes = [0u8; 16];
        let mut out = [0i64; 1];
        assert_eq!(
            ByteOrder::Big.unpack_i64s(&bytes, 0, 16, &mut out, 0),
            Err(Error::OutOfBounds {
                offset: 0,
                needed: 2,
                len: 1
            })
        );
    }

    proptest! {
        #[test]
        fn test_reads_with_random_offsets_are_panic_free(
            data in proptest::collection::vec(any::<u8>(), 0..32),
            offset in 0usize..40,
        ) {
            for order in [ByteOrder::Big, ByteOrder::Little] {
                let _ = order.i16_from(&data, offset);
                let _ = order.i32_from(&data, offset);
                let _ = order.i64_from(&data, offset);
            }
        }
    }
}
