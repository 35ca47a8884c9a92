//! 字节序编解码底层实现模块.
//!
//! 提供定宽有符号整数 (16/32/64 位) 与字节缓冲区之间的大端/小端转换.
//! 所有操作都是其输入的纯函数, 没有内部状态, 可在任意线程并发调用.
//!
//! 每种操作分为两类入口:
//!
//! - 校验入口: 在触碰目标缓冲区之前完成全部边界检查, 失败返回 [`Error`];
//! - 免校验入口 (`*_unchecked`): 不做预校验, 越界时在非法访问点 panic,
//!   仅供调用方自己维护了缓冲区不变量的热路径使用.

mod bounds;
pub mod endian;
pub mod error;
mod reader;
mod writer;

pub use endian::ByteOrder;
pub use error::{Error, Result};
