//! 64 位通道宽度的计数器与快照.

use crate::counter::check_increment;
use crate::counter::error::{Error, Result};

/// 64 位双通道计数器.
///
/// `(lo, hi)` 共同表示一个 128 位无符号计数 `hi * 2^64 + lo`.
/// 进位机制与 [`Counter32`](crate::counter::Counter32) 相同,
/// 只是通道与步长都放大到 i64.
#[derive(Debug, Clone, PartialEq)]
pub struct Counter64 {
    increment_by: i64,
    lo: i64,
    hi: i64,
}

impl Counter64 {
    /// 步长上限 (1024^4). 该常量只增不减.
    pub const MAX_INCREMENT: i64 = 1_099_511_627_776;

    /// 以 `(0, 0)` 初始状态创建计数器.
    ///
    /// # 错误
    ///
    /// 步长必须为正, 不超过 [`MAX_INCREMENT`](Self::MAX_INCREMENT),
    /// 是 8 的倍数, 且整除 `2^63`; 违反任一条返回对应的 [`Error`] 变体.
    pub fn new(increment_by: i64) -> Result<Self> {
        check_increment(increment_by, Self::MAX_INCREMENT, i64::MIN, 63)?;
        Ok(Self {
            increment_by,
            lo: 0,
            hi: 0,
        })
    }

    /// 以显式的 `(lo, hi)` 状态创建计数器.
    ///
    /// 除 [`new`](Self::new) 的全部校验外, 还要求 `lo` 是步长的倍数.
    pub fn with_state(lo: i64, hi: i64, increment_by: i64) -> Result<Self> {
        check_increment(increment_by, Self::MAX_INCREMENT, i64::MIN, 63)?;
        if lo % increment_by != 0 {
            return Err(Error::UnalignedLo { lo, increment_by });
        }
        Ok(Self {
            increment_by,
            lo,
            hi,
        })
    }

    /// 每次 `increment` 累加的步长.
    #[inline]
    pub fn increment_by(&self) -> i64 {
        self.increment_by
    }

    /// 低位通道的当前位模式.
    #[inline]
    pub fn lo(&self) -> i64 {
        self.lo
    }

    /// 高位通道的当前位模式.
    #[inline]
    pub fn hi(&self) -> i64 {
        self.hi
    }

    /// 把步长累加进 `lo` (64 位回绕); 结果恰为 0 时向 `hi` 进位.
    #[inline]
    pub fn increment(&mut self) {
        self.lo = self.lo.wrapping_add(self.increment_by);
        if self.lo == 0 {
            self.hi = self.hi.wrapping_add(1);
        }
    }

    /// 产生计数快照而不改动计数器本身.
    ///
    /// 语义同 [`Counter32::finalize`](crate::counter::Counter32::finalize);
    /// `additional` 先拓宽到 i64 再参与运算.
    pub fn finalize(&self, additional: i32) -> Final64 {
        let was_negative = self.lo < 0;
        let lo = self.lo.wrapping_add(additional as i64);
        let hi = if was_negative && lo >= 0 {
            self.hi.wrapping_add(1)
        } else {
            self.hi
        };
        Final64 {
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

/// [`Counter64`] 的不可变计数快照.
///
/// 相等与哈希定义在 `(lo, hi, is_bits)` 三元组上.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Final64 {
    lo: i64,
    hi: i64,
    is_bits: bool,
}

impl Final64 {
    /// 由字节计数的 `(lo, hi)` 创建快照.
    pub fn new(lo: i64, hi: i64) -> Self {
        Self {
            lo,
            hi,
            is_bits: false,
        }
    }

    /// 低位通道.
    #[inline]
    pub fn lo(&self) -> i64 {
        self.lo
    }

    /// 高位通道.
    #[inline]
    pub fn hi(&self) -> i64 {
        self.hi
    }

    /// 该快照计的是位数还是字节数.
    #[inline]
    pub fn is_bits(&self) -> bool {
        self.is_bits
    }

    /// 把字节计数换算成位计数: `lo` 左移 3 位, 移出的高 3 位
    /// 作为低 3 位并进 `hi`. 已是位计数时原样返回.
    pub fn as_bits(self) -> Self {
        if self.is_bits {
            return self;
        }
        Self {
            lo: self.lo << 3,
            hi: (self.hi << 3) | (((self.lo as u64) >> 61) as i64),
            is_bits: true,
        }
    }
}
