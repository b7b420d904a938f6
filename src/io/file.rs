//! # 文件字节流适配器
//!
//! 将 `ByteSource` / `ByteSink` 绑定到已打开的文件句柄，
//! 也覆盖标准输入 / 标准输出。默认且参考性的具体实现。
//!
//! ## 功能
//! - `FileByteSource`: 带回推栈的逐字节读取
//! - `FileByteSink`: 逐字节写出，drop 时冲刷缓冲
//!
//! ## 依赖关系
//! - 被 `batch/driver.rs` 构造
//! - 实现 `io/mod.rs` 中的 trait

use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::Path;

use super::{ByteSink, ByteSource};
use crate::error::{DocmendError, Result};

/// 文件字节来源
///
/// 句柄的生命周期由所有权决定：持有 `File` 时随 drop 关闭，
/// 持有 `io::stdin()` 时不关闭进程的标准输入。回推栈始终归
/// 来源独占，随来源一起释放。
pub struct FileByteSource {
    reader: BufReader<Box<dyn Read>>,
    pushback: Vec<u8>,
    exhausted: bool,
}

impl std::fmt::Debug for FileByteSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileByteSource")
            .field("pushback", &self.pushback)
            .field("exhausted", &self.exhausted)
            .finish_non_exhaustive()
    }
}

impl FileByteSource {
    /// 打开命名文件作为字节来源
    ///
    /// 打开失败是调用方层面的错误；来源一旦构造成功，之后的读取
    /// 只会以 EOF 结束，不再产生错误。
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| DocmendError::InputOpenError {
            path: path.display().to_string(),
            source: e,
        })?;
        Ok(Self::from_reader(Box::new(file)))
    }

    /// 以标准输入作为字节来源
    pub fn stdin() -> Self {
        Self::from_reader(Box::new(std::io::stdin()))
    }

    /// 包装任意已打开的读取句柄
    pub fn from_reader(reader: Box<dyn Read>) -> Self {
        Self {
            reader: BufReader::new(reader),
            pushback: Vec::new(),
            exhausted: false,
        }
    }

    /// 绕过回推栈，从介质读取一个字节；介质故障视同 EOF
    fn read_raw(&mut self) -> Option<u8> {
        if self.exhausted {
            return None;
        }
        let mut buf = [0u8; 1];
        loop {
            match self.reader.read(&mut buf) {
                Ok(0) => {
                    self.exhausted = true;
                    return None;
                }
                Ok(_) => return Some(buf[0]),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(_) => {
                    self.exhausted = true;
                    return None;
                }
            }
        }
    }
}

impl ByteSource for FileByteSource {
    fn next_byte(&mut self) -> Option<u8> {
        if let Some(byte) = self.pushback.pop() {
            return Some(byte);
        }
        self.read_raw()
    }

    fn at_eof(&mut self) -> bool {
        if !self.pushback.is_empty() {
            return false;
        }
        // 需要向介质预读一个字节才能回答；读到的字节进回推栈
        match self.read_raw() {
            Some(byte) => {
                self.pushback.push(byte);
                false
            }
            None => true,
        }
    }

    fn push_back(&mut self, byte: u8) {
        self.pushback.push(byte);
    }
}

/// 文件字节去向
pub struct FileByteSink {
    writer: BufWriter<Box<dyn Write>>,
}

impl std::fmt::Debug for FileByteSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileByteSink").finish_non_exhaustive()
    }
}

impl FileByteSink {
    /// 创建（或截断）命名文件作为字节去向
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|e| DocmendError::OutputOpenError {
            path: path.display().to_string(),
            source: e,
        })?;
        Ok(Self::from_writer(Box::new(file)))
    }

    /// 以标准输出作为字节去向
    pub fn stdout() -> Self {
        Self::from_writer(Box::new(std::io::stdout()))
    }

    /// 包装任意已打开的写入句柄
    pub fn from_writer(writer: Box<dyn Write>) -> Self {
        Self {
            writer: BufWriter::new(writer),
        }
    }

    /// 冲刷缓冲；drop 时也会自动冲刷
    pub fn flush(&mut self) {
        self.writer.flush().ok();
    }
}

impl ByteSink for FileByteSink {
    fn put_byte(&mut self, byte: u8) {
        // 写入故障与打开故障不同，在此抽象层内没有独立的表达，
        // 与介质层 put 操作的语义保持一致
        self.writer.write_all(&[byte]).ok();
    }
}
