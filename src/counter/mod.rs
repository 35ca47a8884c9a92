//! 溢出安全的双通道计数器模块.
//!
//! 以两个定宽有符号通道 (`lo`, `hi`) 表示一个 `2·W` 位的无符号计数,
//! 供流式哈希追踪已吸收的输入总量. 进位逻辑作用于补码位模式而不是
//! 算术值, 其正确性依赖构造时校验的步长不变量, 详见各类型文档.
//!
//! 计数器是单一所有者的可变累加器, 不做任何内部同步; 需要把独立的
//! 计数交给另一个所有者时 (比如哈希状态本身被克隆), 用 `clone()`
//! 派生一个不共享存储的新实例.

pub mod error;

mod bit32;
mod bit64;

pub use bit32::{Counter32, Final32};
pub use bit64::{Counter64, Final64};
pub use error::{Error, Result};

/// 两种宽度共用的步长不变量校验.
///
/// `min_value` 是通道类型的最小值 (`-2^(W-1)`), `exponent` 为 `W-1`,
/// 仅用于错误信息.
pub(crate) fn check_increment(
    increment_by: i64,
    max: i64,
    min_value: i64,
    exponent: u32,
) -> Result<()> {
    if increment_by <= 0 {
        return Err(Error::NonPositiveIncrement { increment_by });
    }
    if increment_by > max {
        return Err(Error::IncrementTooLarge { increment_by, max });
    }
    if increment_by % 8 != 0 {
        return Err(Error::UnalignedIncrement { increment_by });
    }
    // 步长必须整除 2^(W-1): 只有这样, 从 0 开始反复加步长的 W 位
    // 回绕才会恰好在走完整个 2^W 区间时回到 0, "lo 归零" 才是
    // 可靠的进位信号.
    if min_value % increment_by != 0 {
        return Err(Error::IndivisibleIncrement {
            increment_by,
            exponent,
        });
    }
    Ok(())
}
