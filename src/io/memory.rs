//! # 内存字节流适配器
//!
//! 将 `ByteSource` / `ByteSink` 绑定到内存缓冲区。主要用于测试，
//! 也是抽象层第二个多态变体（文件之外）的参考实现。
//!
//! ## 依赖关系
//! - 被 `engine/`、`batch/` 的测试使用
//! - 实现 `io/mod.rs` 中的 trait

use super::{ByteSink, ByteSource};

/// 内存字节来源
pub struct MemByteSource {
    data: Vec<u8>,
    pos: usize,
    pushback: Vec<u8>,
}

impl MemByteSource {
    /// 以一段字节缓冲区作为来源
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            pos: 0,
            pushback: Vec::new(),
        }
    }
}

impl ByteSource for MemByteSource {
    fn next_byte(&mut self) -> Option<u8> {
        if let Some(byte) = self.pushback.pop() {
            return Some(byte);
        }
        let byte = self.data.get(self.pos).copied()?;
        self.pos += 1;
        Some(byte)
    }

    fn at_eof(&mut self) -> bool {
        self.pushback.is_empty() && self.pos >= self.data.len()
    }

    fn push_back(&mut self, byte: u8) {
        self.pushback.push(byte);
    }
}

/// 内存字节去向，累积写入的字节供检查
#[derive(Default)]
pub struct MemByteSink {
    data: Vec<u8>,
}

impl MemByteSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// 目前累积的全部字节
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// 取出累积的全部字节
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

impl ByteSink for MemByteSink {
    fn put_byte(&mut self, byte: u8) {
        self.data.push(byte);
    }
}
