//! # 处理引擎契约
//!
//! 定义批量驱动器消费的外部引擎接口：四个阶段操作加计数器读取。
//! 解析、修复、诊断、输出排版的内部逻辑属于引擎实现，不在本 crate
//! 中重现；`PassthroughEngine` 提供一个端到端可用的参考实现。
//!
//! ## 依赖关系
//! - 被 `batch/driver.rs` 驱动
//! - 使用 `io/` 的字节流 trait

use crate::config::Newline;
use crate::io::{ByteSink, ByteSource};

/// 阶段结果的严重度序
///
/// 排序即严重度：`Success < Warnings < Errors < Fatal`。
/// 驱动器只区分「fatal / 可继续」以及是否达到 `Errors`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Status {
    /// 顺利完成
    Success,
    /// 产生了警告
    Warnings,
    /// 产生了内容错误
    Errors,
    /// 致命失败，本文档的后续阶段不再执行
    Fatal,
}

impl Status {
    /// 是否为致命状态
    pub fn is_fatal(self) -> bool {
        matches!(self, Status::Fatal)
    }

    /// 两个状态中较严重的一个
    pub fn worst(self, other: Status) -> Status {
        self.max(other)
    }
}

/// 文档处理引擎
///
/// 每个文档使用一个新的引擎实例；计数器记录该实例经手的
/// 错误 / 警告 / 无障碍警告，由驱动器读取而非重新计算。
pub trait DocumentEngine {
    /// 从字节来源解析文档
    fn parse(&mut self, source: &mut dyn ByteSource) -> Status;

    /// 清理并修复已解析的文档
    fn clean_and_repair(&mut self) -> Status;

    /// 运行诊断，填充计数器
    fn run_diagnostics(&mut self) -> Status;

    /// 将文档写出到字节去向
    fn save(&mut self, sink: &mut dyn ByteSink) -> Status;

    /// 内容错误计数
    fn errors(&self) -> usize;

    /// 警告计数
    fn warnings(&self) -> usize;

    /// 无障碍警告计数
    fn access_warnings(&self) -> usize;
}

/// 透传参考引擎
///
/// 解析时吞下整个来源，保存时重放，只按配置转换换行风格，
/// 不产生任何诊断。让二进制在没有真实引擎时也是一个可工作的
/// 重写器，真实引擎通过 `DocumentEngine` 接入。
pub struct PassthroughEngine {
    buffer: Vec<u8>,
    newline: Newline,
}

impl PassthroughEngine {
    pub fn new() -> Self {
        Self::with_newline(Newline::Lf)
    }

    /// 指定输出换行风格
    pub fn with_newline(newline: Newline) -> Self {
        Self {
            buffer: Vec::new(),
            newline,
        }
    }
}

impl Default for PassthroughEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentEngine for PassthroughEngine {
    fn parse(&mut self, source: &mut dyn ByteSource) -> Status {
        while let Some(byte) = source.next_byte() {
            self.buffer.push(byte);
        }
        Status::Success
    }

    fn clean_and_repair(&mut self) -> Status {
        Status::Success
    }

    fn run_diagnostics(&mut self) -> Status {
        Status::Success
    }

    fn save(&mut self, sink: &mut dyn ByteSink) -> Status {
        let newline: &[u8] = match self.newline {
            Newline::Lf => b"\n",
            Newline::Crlf => b"\r\n",
            Newline::Cr => b"\r",
        };
        let mut i = 0;
        while i < self.buffer.len() {
            match self.buffer[i] {
                b'\r' => {
                    // CRLF 算一个换行
                    if self.buffer.get(i + 1) == Some(&b'\n') {
                        i += 1;
                    }
                    for &b in newline {
                        sink.put_byte(b);
                    }
                }
                b'\n' => {
                    for &b in newline {
                        sink.put_byte(b);
                    }
                }
                byte => sink.put_byte(byte),
            }
            i += 1;
        }
        Status::Success
    }

    fn errors(&self) -> usize {
        0
    }

    fn warnings(&self) -> usize {
        0
    }

    fn access_warnings(&self) -> usize {
        0
    }
}
