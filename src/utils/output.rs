//! # 美化输出工具
//!
//! 提供统一的终端输出样式。仅用于面向操作者的控制台消息；
//! 文档诊断与摘要走配置里的错误输出目的地，不经过这里。
//!
//! ## 依赖关系
//! - 被 `main.rs`、`batch/mod.rs` 使用
//! - 使用 `colored` crate

use colored::Colorize;

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", "[WARN]".yellow().bold(), msg);
}
