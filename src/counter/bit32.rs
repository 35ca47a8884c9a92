//! 32 位通道宽度的计数器与快照.

use crate::counter::check_increment;
use crate::counter::error::{Error, Result};

/// 32 位双通道计数器.
///
/// `(lo, hi)` 共同表示一个 64 位无符号计数 `hi * 2^32 + lo`, 两个通道
/// 以有符号 i32 存储, 进位逻辑作用于其补码位模式. 每次
/// [`increment`](Self::increment) 把固定步长加进 `lo`, 回绕归零时向
/// `hi` 进位.
///
/// 计数器是活的可变状态, 不提供结构相等比较; `clone()` 派生一个
/// 不共享存储的独立副本.
#[derive(Debug, Clone, PartialEq)]
pub struct Counter32 {
    increment_by: i32,
    lo: i32,
    hi: i32,
}

impl Counter32 {
    /// 步长上限 (1024^2). 该常量只增不减.
    pub const MAX_INCREMENT: i32 = 1_048_576;

    /// 以 `(0, 0)` 初始状态创建计数器.
    ///
    /// # 错误
    ///
    /// 步长不变量校验失败时返回对应的 [`Error`] 变体:
    /// 步长必须为正, 不超过 [`MAX_INCREMENT`](Self::MAX_INCREMENT),
    /// 是 8 的倍数, 且整除 `2^31`.
    pub fn new(increment_by: i32) -> Result<Self> {
        check_increment(
            increment_by as i64,
            Self::MAX_INCREMENT as i64,
            i32::MIN as i64,
            31,
        )?;
        Ok(Self {
            increment_by,
            lo: 0,
            hi: 0,
        })
    }

    /// 以显式的 `(lo, hi)` 状态创建计数器.
    ///
    /// 除 [`new`](Self::new) 的全部校验外, 还要求 `lo` 是步长的倍数
    /// (否则该状态无法由 `increment` 从 0 到达, 进位信号失效).
    pub fn with_state(lo: i32, hi: i32, increment_by: i32) -> Result<Self> {
        check_increment(
            increment_by as i64,
            Self::MAX_INCREMENT as i64,
            i32::MIN as i64,
            31,
        )?;
        if (lo as i64) % (increment_by as i64) != 0 {
            return Err(Error::UnalignedLo {
                lo: lo as i64,
                increment_by: increment_by as i64,
            });
        }
        Ok(Self {
            increment_by,
            lo,
            hi,
        })
    }

    /// 每次 `increment` 累加的步长.
    #[inline]
    pub fn increment_by(&self) -> i32 {
        self.increment_by
    }

    /// 低位通道的当前位模式.
    #[inline]
    pub fn lo(&self) -> i32 {
        self.lo
    }

    /// 高位通道的当前位模式.
    #[inline]
    pub fn hi(&self) -> i32 {
        self.hi
    }

    /// 把步长累加进 `lo` (32 位回绕); 结果恰为 0 时向 `hi` 进位.
    ///
    /// 构造不变量保证 `lo` 只会在走完整个 2^32 区间时回到 0,
    /// 因此归零即溢出, 无需无符号比较.
    #[inline]
    pub fn increment(&mut self) {
        self.lo = self.lo.wrapping_add(self.increment_by);
        if self.lo == 0 {
            self.hi = self.hi.wrapping_add(1);
        }
    }

    /// 产生计数快照而不改动计数器本身.
    ///
    /// `additional` 是尚未通过 `increment` 折算进 `lo` 的小额残量
    /// (如仍在缓冲区里的尾部字节数). 若加上残量后 `lo` 的符号位由
    /// 1 变 0, 说明发生了无符号进位, 快照的 `hi` 加 1.
    /// 计数器若要复用, 调用方需另行 [`reset`](Self::reset).
    pub fn finalize(&self, additional: i32) -> Final32 {
        let was_negative = self.lo < 0;
        let lo = self.lo.wrapping_add(additional);
        let hi = if was_negative && lo >= 0 {
            self.hi.wrapping_add(1)
        } else {
            self.hi
        };
        Final32 {
            lo,
            hi,
            is_bits: false,
        }
    }

    /// 回到 `(0, 0)`; 步长不变.
    #[inline]
    pub fn reset(&mut self) {
        self.lo = 0;
        self.hi = 0;
    }
}

/// [`Counter32`] 的不可变计数快照.
///
/// `is_bits == false` 表示 `(lo, hi)` 计的是字节数, `true` 表示位数.
/// 相等与哈希定义在 `(lo, hi, is_bits)` 三元组上.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Final32 {
    lo: i32,
    hi: i32,
    is_bits: bool,
}

impl Final32 {
    /// 由字节计数的 `(lo, hi)` 创建快照.
    pub fn new(lo: i32, hi: i32) -> Self {
        Self {
            lo,
            hi,
            is_bits: false,
        }
    }

    /// 低位通道.
    #[inline]
    pub fn lo(&self) -> i32 {
        self.lo
    }

    /// 高位通道.
    #[inline]
    pub fn hi(&self) -> i32 {
        self.hi
    }

    /// 该快照计的是位数还是字节数.
    #[inline]
    pub fn is_bits(&self) -> bool {
        self.is_bits
    }

    /// 把字节计数换算成位计数 (乘 8), 跨通道带进位地左移 3 位:
    /// `lo` 移出的高 3 位成为 `hi` 的低 3 位. 已是位计数时原样返回.
    pub fn as_bits(self) -> Self {
        if self.is_bits {
            return self;
        }
        Self {
            lo: self.lo << 3,
            hi: (self.hi << 3) | (((self.lo as u32) >> 29) as i32),
            is_bits: true,
        }
    }
}
