//! # 统一错误处理模块
//!
//! 定义 Docmend 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// Docmend 统一错误类型
#[derive(Error, Debug)]
pub enum DocmendError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to open input: {path}")]
    InputOpenError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open output: {path}")]
    OutputOpenError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 配置错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read config file: {path}")]
    ConfigReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Invalid value for option '{key}': {value}")]
    InvalidOptionValue { key: String, value: String },
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, DocmendError>;
