//! 字节序标签及定元数装配操作.

/// 字节序标签.
///
/// 选择编解码过程中使用的字节有效位映射:
/// [`Big`](ByteOrder::Big) 把最高有效字节放在最低的缓冲区索引,
/// [`Little`](ByteOrder::Little) 把最低有效字节放在最低的缓冲区索引.
///
/// 仅有这两个变体; 所有操作都通过 `match` 在二者之间分派.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// 大端序.
    Big,
    /// 小端序.
    Little,
}

impl ByteOrder {
    /// 由 2 个字节直接装配 i16.
    ///
    /// 字节按缓冲区索引升序给出: 大端时 `b0` 为最高有效字节,
    /// 小端时 `b0` 为最低有效字节. 定元数, 无边界可查.
    #[inline]
    pub fn i16_of(self, b0: u8, b1: u8) -> i16 {
        match self {
            ByteOrder::Big => i16::from_be_bytes([b0, b1]),
            ByteOrder::Little => i16::from_le_bytes([b0, b1]),
        }
    }

    /// 由 4 个字节直接装配 i32.
    #[inline]
    pub fn i32_of(self, b0: u8, b1: u8, b2: u8, b3: u8) -> i32 {
        match self {
            ByteOrder::Big => i32::from_be_bytes([b0, b1, b2, b3]),
            ByteOrder::Little => i32::from_le_bytes([b0, b1, b2, b3]),
        }
    }

    /// 由 8 个字节直接装配 i64.
    #[inline]
    pub fn i64_of(self, b0: u8, b1: u8, b2: u8, b3: u8, b4: u8, b5: u8, b6: u8, b7: u8) -> i64 {
        match self {
            ByteOrder::Big => i64::from_be_bytes([b0, b1, b2, b3, b4, b5, b6, b7]),
            ByteOrder::Little => i64::from_le_bytes([b0, b1, b2, b3, b4, b5, b6, b7]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_i16_of_with_both_orders_maps_byte_significance() {
        assert_eq!(ByteOrder::Big.i16_of(0x12, 0x34), 0x1234);
        assert_eq!(ByteOrder::Little.i16_of(0x34, 0x12), 0x1234);
    }

    #[test]
    fn test_i32_of_with_reversed_bytes_swaps_order() {
        // 非回文字节序列: 两种字节序装配出不同值, 反转后互换
        assert_eq!(ByteOrder::Big.i32_of(0x01, 0x02, 0x03, 0x04), 0x01020304);
        assert_eq!(ByteOrder::Little.i32_of(0x01, 0x02, 0x03, 0x04), 0x04030201);
        assert_eq!(
            ByteOrder::Big.i32_of(0x01, 0x02, 0x03, 0x04),
            ByteOrder::Little.i32_of(0x04, 0x03, 0x02, 0x01)
        );
    }

    #[test]
    fn test_i32_of_with_known_negative_value_matches_reference_bytes() {
        // -77362181 == 0xFB638BFB
        assert_eq!(ByteOrder::Big.i32_of(0xFB, 0x63, 0x8B, 0xFB), -77362181);
        assert_eq!(ByteOrder::Little.i32_of(0xFB, 0x8B, 0x63, 0xFB), -77362181);
    }

    #[test]
    fn test_i64_of_with_extreme_values_round_trips() {
        let b = i64::MIN.to_be_bytes();
        assert_eq!(
            ByteOrder::Big.i64_of(b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]),
            i64::MIN
        );
        let b = i64::MAX.to_le_bytes();
        assert_eq!(
            ByteOrder::Little.i64_of(b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]),
            i64::MAX
        );
    }
}
