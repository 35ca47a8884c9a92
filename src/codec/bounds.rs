//! 校验入口共用的边界检查辅助函数.

use crate::codec::error::{Error, Result};

/// 校验长度为 `len` 的缓冲区能否在 `offset` 处提供 `needed` 个单元.
///
/// 必须在任何读写发生之前调用; 失败意味着对应操作不得产生部分写入.
#[inline]
pub(crate) fn ensure_capacity(len: usize, offset: usize, needed: usize) -> Result<()> {
    if offset > len || len - offset < needed {
        return Err(Error::OutOfBounds {
            offset,
            needed,
            len,
        });
    }
    Ok(())
}

/// 校验范围 `[start, end)` 的顺序及其上界 `max`.
///
/// 起点越过终点属于非法参数, 范围逃逸上界属于越界, 二者按此顺序检查.
#[inline]
pub(crate) fn ensure_range(start: usize, end: usize, max: usize) -> Result<()> {
    if start > end {
        return Err(Error::InvalidRange { start, end });
    }
    if end > max {
        return Err(Error::RangeOutOfBounds { start, end, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_capacity_with_exact_fit_returns_ok() {
        assert_eq!(ensure_capacity(8, 4, 4), Ok(()));
        assert_eq!(ensure_capacity(8, 8, 0), Ok(()));
    }

    #[test]
    fn test_ensure_capacity_with_offset_past_end_returns_out_of_bounds() {
        assert_eq!(
            ensure_capacity(8, 9, 0),
            Err(Error::OutOfBounds {
                offset: 9,
                needed: 0,
                len: 8
            })
        );
        assert_eq!(
            ensure_capacity(8, 5, 4),
            Err(Error::OutOfBounds {
                offset: 5,
                needed: 4,
                len: 8
            })
        );
    }

    #[test]
    fn test_ensure_range_with_inverted_range_returns_invalid_range() {
        assert_eq!(
            ensure_range(3, 2, 4),
            Err(Error::InvalidRange { start: 3, end: 2 })
        );
    }

    #[test]
    fn test_ensure_range_with_end_past_max_returns_range_out_of_bounds() {
        assert_eq!(
            ensure_range(0, 5, 4),
            Err(Error::RangeOutOfBounds {
                start: 0,
                end: 5,
                max: 4
            })
        );
        assert_eq!(ensure_range(0, 4, 4), Ok(()));
    }
}
