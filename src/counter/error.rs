use thiserror::Error;

/// 计数器构造错误枚举.
///
/// 仅构造入口会失败; `increment`/`finalize`/`reset`/`clone` 永不失败.
/// 每个变体指明被违反的不变量并携带违规值.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("increment_by must be greater than 0, got {increment_by}")]
    /// 步长必须为正.
    NonPositiveIncrement { increment_by: i64 },

    #[error("increment_by must not exceed {max}, got {increment_by}")]
    /// 步长超过该宽度允许的上限.
    IncrementTooLarge { increment_by: i64, max: i64 },

    #[error("increment_by must be a multiple of 8, got {increment_by}")]
    /// 步长必须是 8 的倍数.
    UnalignedIncrement { increment_by: i64 },

    #[error("increment_by must evenly divide 2^{exponent}, got {increment_by}")]
    /// 步长必须整除 `2^(W-1)`, 否则溢出检测不成立.
    IndivisibleIncrement { increment_by: i64, exponent: u32 },

    #[error("lo must be a multiple of increment_by {increment_by}, got {lo}")]
    /// 显式提供的 `lo` 必须是步长的倍数.
    UnalignedLo { lo: i64, increment_by: i64 },
}

pub type Result<T> = std::result::Result<T, Error>;
