//! # 可插拔字节流模块
//!
//! 定义引擎与物理存储之间唯一的接缝：`ByteSource` / `ByteSink`。
//! 引擎只面对这两个 trait，字节可以来自文件、内存缓冲区或未来的
//! 其他传输方式，而引擎本身无需修改。
//!
//! ## 功能
//! - 逐字节读取，支持无上限的 LIFO 回推（pushback）
//! - 逐字节写入，不附加介质之外的缓冲约定
//!
//! ## 依赖关系
//! - 被 `engine/`、`batch/` 使用
//! - 子模块: file, memory

pub mod file;
pub mod memory;

pub use file::{FileByteSink, FileByteSource};
pub use memory::{MemByteSink, MemByteSource};

/// 字节来源
///
/// 产出一个有限的惰性字节序列。流结束以 `None` 表示，抽象层不区分
/// 介质故障与 EOF；介质能否打开由调用方在构造来源之前检查。
pub trait ByteSource {
    /// 读取组合字节流（回推栈 + 介质）中的下一个字节
    ///
    /// 回推栈非空时按 LIFO 顺序弹出，否则才从介质读取。
    /// 真正的流结束之后始终返回 `None`。
    fn next_byte(&mut self) -> Option<u8>;

    /// 组合字节流是否已到末尾
    ///
    /// 回推栈非空时必须返回 `false`，即使介质已经耗尽——流结束是
    /// 组合序列的属性，不是介质单独的属性。
    fn at_eof(&mut self) -> bool;

    /// 回推一个字节，留待下一次 `next_byte` 返回
    ///
    /// 回推栈没有固定容量上限，解析器可以预读任意深度后按
    /// 相反顺序逐字节推回，恢复原始顺序。
    fn push_back(&mut self, byte: u8);
}

/// 字节去向
pub trait ByteSink {
    /// 写出一个字节
    fn put_byte(&mut self, byte: u8);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pushback_lifo_order() {
        let mut source = MemByteSource::new(b"xyz".to_vec());
        source.push_back(b'3');
        source.push_back(b'2');
        source.push_back(b'1');

        // LIFO：后推先出，且先于任何介质字节
        assert_eq!(source.next_byte(), Some(b'1'));
        assert_eq!(source.next_byte(), Some(b'2'));
        assert_eq!(source.next_byte(), Some(b'3'));
        assert_eq!(source.next_byte(), Some(b'x'));
    }

    #[test]
    fn test_pushback_restores_lookahead() {
        let mut source = MemByteSource::new(b"abc".to_vec());

        // 预读两个字节后按相反顺序推回，应恢复原始顺序
        let first = source.next_byte().unwrap();
        let second = source.next_byte().unwrap();
        source.push_back(second);
        source.push_back(first);

        assert_eq!(source.next_byte(), Some(b'a'));
        assert_eq!(source.next_byte(), Some(b'b'));
        assert_eq!(source.next_byte(), Some(b'c'));
        assert_eq!(source.next_byte(), None);
    }

    #[test]
    fn test_at_eof_false_while_pushback_pending() {
        let mut source = MemByteSource::new(b"a".to_vec());
        assert_eq!(source.next_byte(), Some(b'a'));
        assert!(source.at_eof());

        // 介质已耗尽，但回推字节尚未消费
        source.push_back(b'z');
        assert!(!source.at_eof());
        assert_eq!(source.next_byte(), Some(b'z'));
        assert!(source.at_eof());
    }

    #[test]
    fn test_read_past_eof_keeps_returning_none() {
        let mut source = MemByteSource::new(Vec::new());
        assert_eq!(source.next_byte(), None);
        assert_eq!(source.next_byte(), None);
        assert!(source.at_eof());
    }
}
