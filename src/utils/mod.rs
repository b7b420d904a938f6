//! # 工具函数模块
//!
//! 提供终端美化输出工具。
//!
//! ## 依赖关系
//! - 被 `main.rs`、`batch/` 使用
//! - 子模块: output

pub mod output;
