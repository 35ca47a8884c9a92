//! 供哈希/MAC 实现使用的底层原语库.
//!
//! 包含两个互不依赖的组件:
//!
//! - [`codec`]: 字节序编解码器, 在定宽有符号整数 (16/32/64 位) 与
//!   大端/小端字节序列之间做位精确转换, 提供带边界校验与免校验两类入口.
//! - [`counter`]: 溢出安全的双通道计数器, 用于追踪流式哈希已吸收的
//!   输入总量, 以便在填充阶段输出正确的长度字段.
//!
//! 哈希实现通常用 [`counter`] 累计已处理的块数, 结束时将计数快照
//! 交给 [`codec`] 序列化进填充块. 本库自身不包含任何哈希算法逻辑.

pub mod codec;
pub mod counter;
