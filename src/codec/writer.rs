//! 向字节缓冲区写入整数的 pack 族操作.
//!
//! 校验入口在任何写入发生前完成全部边界检查, 保证失败时目标缓冲区
//! 原封不动. 免校验入口 (`*_unchecked`) 跳过预校验, 越界时在非法
//! 访问点 panic, 且不保证没有部分写入.

use byteorder::{BigEndian, ByteOrder as _, LittleEndian};
use bytes::BufMut;

use crate::codec::bounds;
use crate::codec::endian::ByteOrder;
use crate::codec::error::Result;

impl ByteOrder {
    /// 把 `value` 的 2 个字节按本字节序写入 `dest` 的 `offset` 处.
    ///
    /// # 错误
    ///
    /// 当 `dest` 在 `offset` 处容纳不下 2 个字节时返回
    /// [`Error::OutOfBounds`](crate::codec::Error::OutOfBounds),
    /// 此时 `dest` 未被触碰.
    #[inline]
    pub fn pack_i16(self, value: i16, dest: &mut [u8], offset: usize) -> Result<()> {
        bounds::ensure_capacity(dest.len(), offset, 2)?;
        self.pack_i16_unchecked(value, dest, offset);
        Ok(())
    }

    /// 同 [`pack_i16`](Self::pack_i16), 宽度为 4 字节.
    #[inline]
    pub fn pack_i32(self, value: i32, dest: &mut [u8], offset: usize) -> Result<()> {
        bounds::ensure_capacity(dest.len(), offset, 4)?;
        self.pack_i32_unchecked(value, dest, offset);
        Ok(())
    }

    /// 同 [`pack_i16`](Self::pack_i16), 宽度为 8 字节.
    #[inline]
    pub fn pack_i64(self, value: i64, dest: &mut [u8], offset: usize) -> Result<()> {
        bounds::ensure_capacity(dest.len(), offset, 8)?;
        self.pack_i64_unchecked(value, dest, offset);
        Ok(())
    }

    /// [`pack_i16`](Self::pack_i16) 的免校验变体.
    #[inline]
    pub fn pack_i16_unchecked(self, value: i16, dest: &mut [u8], offset: usize) {
        let buf = &mut dest[offset..offset + 2];
        match self {
            ByteOrder::Big => BigEndian::write_i16(buf, value),
            ByteOrder::Little => LittleEndian::write_i16(buf, value),
        }
    }

    /// [`pack_i32`](Self::pack_i32) 的免校验变体.
    #[inline]
    pub fn pack_i32_unchecked(self, value: i32, dest: &mut [u8], offset: usize) {
        let buf = &mut dest[offset..offset + 4];
        match self {
            ByteOrder::Big => BigEndian::write_i32(buf, value),
            ByteOrder::Little => LittleEndian::write_i32(buf, value),
        }
    }

    /// [`pack_i64`](Self::pack_i64) 的免校验变体.
    #[inline]
    pub fn pack_i64_unchecked(self, value: i64, dest: &mut [u8], offset: usize) {
        let buf = &mut dest[offset..offset + 8];
        match self {
            ByteOrder::Big => BigEndian::write_i64(buf, value),
            ByteOrder::Little => LittleEndian::write_i64(buf, value),
        }
    }

    /// 只写入 `value` 概念字节序列的子范围 `[start, end)`.
    ///
    /// 概念字节序列指 `value` 按本字节序排成的 2 个字节;
    /// `start == 0 && end == 2` 时与完整 [`pack_i16`](Self::pack_i16)
    /// 行为完全一致.
    ///
    /// # 错误
    ///
    /// * [`Error::InvalidRange`](crate::codec::Error::InvalidRange):
    ///   `start > end`.
    /// * [`Error::RangeOutOfBounds`](crate::codec::Error::RangeOutOfBounds):
    ///   `end > 2`.
    /// * [`Error::OutOfBounds`](crate::codec::Error::OutOfBounds):
    ///   `dest` 在 `offset` 处容纳不下 `end - start` 个字节.
    pub fn pack_i16_range(
        self,
        value: i16,
        dest: &mut [u8],
        offset: usize,
        start: usize,
        end: usize,
    ) -> Result<()> {
        bounds::ensure_range(start, end, 2)?;
        if start == 0 && end == 2 {
            return self.pack_i16(value, dest, offset);
        }
        bounds::ensure_capacity(dest.len(), offset, end - start)?;
        self.pack_i16_range_unchecked(value, dest, offset, start, end);
        Ok(())
    }

    /// 同 [`pack_i16_range`](Self::pack_i16_range), 宽度为 4 字节.
    pub fn pack_i32_range(
        self,
        value: i32,
        dest: &mut [u8],
        offset: usize,
        start: usize,
        end: usize,
    ) -> Result<()> {
        bounds::ensure_range(start, end, 4)?;
        if start == 0 && end == 4 {
            return self.pack_i32(value, dest, offset);
        }
        bounds::ensure_capacity(dest.len(), offset, end - start)?;
        self.pack_i32_range_unchecked(value, dest, offset, start, end);
        Ok(())
    }

    /// 同 [`pack_i16_range`](Self::pack_i16_range), 宽度为 8 字节.
    pub fn pack_i64_range(
        self,
        value: i64,
        dest: &mut [u8],
        offset: usize,
        start: usize,
        end: usize,
    ) -> Result<()> {
        bounds::ensure_range(start, end, 8)?;
        if start == 0 && end == 8 {
            return self.pack_i64(value, dest, offset);
        }
        bounds::ensure_capacity(dest.len(), offset, end - start)?;
        self.pack_i64_range_unchecked(value, dest, offset, start, end);
        Ok(())
    }

    /// [`pack_i16_range`](Self::pack_i16_range) 的免校验变体.
    ///
    /// 部分写入按 `(value >> (8 * i)) & 0xFF` (小端) 或
    /// `(value >> (8 * (N-1-i))) & 0xFF` (大端) 逐字节分解,
    /// 按目标索引升序写出.
    #[inline]
    pub fn pack_i16_range_unchecked(
        self,
        value: i16,
        dest: &mut [u8],
        offset: usize,
        start: usize,
        end: usize,
    ) {
        debug_assert!(start <= end && end <= 2);
        match self {
            ByteOrder::Big => {
                for (i, idx) in (start..end).enumerate() {
                    dest[offset + i] = (value >> (8 * (1 - idx))) as u8;
                }
            }
            ByteOrder::Little => {
                for (i, idx) in (start..end).enumerate() {
                    dest[offset + i] = (value >> (8 * idx)) as u8;
                }
            }
        }
    }

    /// [`pack_i32_range`](Self::pack_i32_range) 的免校验变体.
    #[inline]
    pub fn pack_i32_range_unchecked(
        self,
        value: i32,
        dest: &mut [u8],
        offset: usize,
        start: usize,
        end: usize,
    ) {
        debug_assert!(start <= end && end <= 4);
        match self {
            ByteOrder::Big => {
                for (i, idx) in (start..end).enumerate() {
                    dest[offset + i] = (value >> (8 * (3 - idx))) as u8;
                }
            }
            ByteOrder::Little => {
                for (i, idx) in (start..end).enumerate() {
                    dest[offset + i] = (value >> (8 * idx)) as u8;
                }
            }
        }
    }

    /// [`pack_i64_range`](Self::pack_i64_range) 的免校验变体.
    #[inline]
    pub fn pack_i64_range_unchecked(
        self,
        value: i64,
        dest: &mut [u8],
        offset: usize,
        start: usize,
        end: usize,
    ) {
        debug_assert!(start <= end && end <= 8);
        match self {
            ByteOrder::Big => {
                for (i, idx) in (start..end).enumerate() {
                    dest[offset + i] = (value >> (8 * (7 - idx))) as u8;
                }
            }
            ByteOrder::Little => {
                for (i, idx) in (start..end).enumerate() {
                    dest[offset + i] = (value >> (8 * idx)) as u8;
                }
            }
        }
    }

    /// 批量打包: 把 `source[start..end)` 的元素连续编码进 `dest`
    /// 从 `dest_offset` 开始的位置.
    ///
    /// # 错误
    ///
    /// * [`Error::InvalidRange`](crate::codec::Error::InvalidRange):
    ///   `start > end`.
    /// * [`Error::RangeOutOfBounds`](crate::codec::Error::RangeOutOfBounds):
    ///   元素范围逃逸出 `source`.
    /// * [`Error::OutOfBounds`](crate::codec::Error::OutOfBounds):
    ///   `dest` 容纳不下 `2 * (end - start)` 个字节.
    pub fn pack_i16s(
        self,
        source: &[i16],
        start: usize,
        end: usize,
        dest: &mut [u8],
        dest_offset: usize,
    ) -> Result<()> {
        bounds::ensure_range(start, end, source.len())?;
        let byte_len = (end - start) * 2;
        bounds::ensure_capacity(dest.len(), dest_offset, byte_len)?;
        let out = &mut dest[dest_offset..dest_offset + byte_len];
        match self {
            ByteOrder::Big => BigEndian::write_i16_into(&source[start..end], out),
            ByteOrder::Little => LittleEndian::write_i16_into(&source[start..end], out),
        }
        Ok(())
    }

    /// 批量打包 i32 元素, 语义同 [`pack_i16s`](Self::pack_i16s).
    pub fn pack_i32s(
        self,
        source: &[i32],
        start: usize,
        end: usize,
        dest: &mut [u8],
        dest_offset: usize,
    ) -> Result<()> {
        bounds::ensure_range(start, end, source.len())?;
        let byte_len = (end - start) * 4;
        bounds::ensure_capacity(dest.len(), dest_offset, byte_len)?;
        let out = &mut dest[dest_offset..dest_offset + byte_len];
        match self {
            ByteOrder::Big => BigEndian::write_i32_into(&source[start..end], out),
            ByteOrder::Little => LittleEndian::write_i32_into(&source[start..end], out),
        }
        Ok(())
    }

    /// 批量打包 i64 元素, 语义同 [`pack_i16s`](Self::pack_i16s).
    pub fn pack_i64s(
        self,
        source: &[i64],
        start: usize,
        end: usize,
        dest: &mut [u8],
        dest_offset: usize,
    ) -> Result<()> {
        bounds::ensure_range(start, end, source.len())?;
        let byte_len = (end - start) * 8;
        bounds::ensure_capacity(dest.len(), dest_offset, byte_len)?;
        let out = &mut dest[dest_offset..dest_offset + byte_len];
        match self {
            ByteOrder::Big => BigEndian::write_i64_into(&source[start..end], out),
            ByteOrder::Little => LittleEndian::write_i64_into(&source[start..end], out),
        }
        Ok(())
    }

    /// 追加式写入: 把 `value` 按本字节序追加到 `buf` 末尾.
    ///
    /// 缓冲区自动增长, 不会失败. 供构建填充块一类的调用方使用.
    #[inline]
    pub fn put_i16<B: BufMut>(self, buf: &mut B, value: i16) {
        match self {
            ByteOrder::Big => buf.put_i16(value),
            ByteOrder::Little => buf.put_i16_le(value),
        }
    }

    /// 追加式写入 i32, 语义同 [`put_i16`](Self::put_i16).
    #[inline]
    pub fn put_i32<B: BufMut>(self, buf: &mut B, value: i32) {
        match self {
            ByteOrder::Big => buf.put_i32(value),
            ByteOrder::Little => buf.put_i32_le(value),
        }
    }

    /// 追加式写入 i64, 语义同 [`put_i16`](Self::put_i16).
    #[inline]
    pub fn put_i64<B: BufMut>(self, buf: &mut B, value: i64) {
        match self {
            ByteOrder::Big => buf.put_i64(value),
            ByteOrder::Little => buf.put_i64_le(value),
        }
    }
}
