use thiserror::Error;

/// 编解码错误枚举.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Out of bounds at offset {offset}: {needed} required, buffer length {len}")]
    /// 缓冲区越界: 在 `offset` 处无法提供 `needed` 个单元.
    OutOfBounds {
        offset: usize,
        needed: usize,
        len: usize,
    },

    #[error("Invalid range: start {start} > end {end}")]
    /// 非法参数: 范围起点越过终点.
    InvalidRange { start: usize, end: usize },

    #[error("Range {start}..{end} exceeds bound {max}")]
    /// 范围越界: `[start, end)` 超出了值的字节宽度或源缓冲区.
    RangeOutOfBounds {
        start: usize,
        end: usize,
        max: usize,
    },

    #[error("Range length {len} is not a multiple of element width {width}")]
    /// 批量操作的字节范围长度不是元素宽度的整数倍.
    Misaligned { len: usize, width: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
