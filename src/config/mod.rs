//! # 选项注册表模块
//!
//! 持有一次调用期间共享的全部配置值：布尔、整数、字符串与枚举
//! 四类。配置文件通过 `set_by_key` 按键名赋值；未知键或非法值
//! 报告到当前错误输出后忽略，保留原值继续。
//!
//! 错误输出目的地是 `Options` 上的显式字段而非进程级全局状态，
//! 每次可能改动 `error-file` 的赋值之后立即重新解析。
//!
//! ## 依赖关系
//! - 被 `cli/`、`batch/` 读取
//! - 被 `config/file.rs` 写入
//! - 子模块: file

pub mod file;

use std::fs::File;
use std::io::Write;
use std::str::FromStr;

use clap::ValueEnum;

use crate::error::DocmendError;

/// 输出文档的换行风格
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Newline {
    /// Unix 风格 (LF)
    Lf,
    /// Windows 风格 (CRLF)
    Crlf,
    /// 旧 Mac 风格 (CR)
    Cr,
}

impl FromStr for Newline {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, ()> {
        match s.to_ascii_lowercase().as_str() {
            "lf" => Ok(Newline::Lf),
            "crlf" => Ok(Newline::Crlf),
            "cr" => Ok(Newline::Cr),
            _ => Err(()),
        }
    }
}

/// 选项注册表
pub struct Options {
    /// 抑制末尾摘要
    pub quiet: bool,
    /// 将输出写回各输入文件
    pub modify: bool,
    /// 诊断出错误时仍然产出输出
    pub force_output: bool,
    /// 是否产出文档输出（false 时只报告诊断）
    pub emit_output: bool,
    /// 显式输出文件路径
    pub output_file: Option<String>,
    /// 错误输出文件路径；None 表示标准错误
    pub error_file: Option<String>,
    /// 输出折行列宽，0 为不折行
    pub wrap: u32,
    /// 输出换行风格
    pub newline: Newline,
    /// 当前错误输出目的地
    err_writer: Box<dyn Write>,
}

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}

impl Options {
    /// 默认配置：输出到标准输出，错误到标准错误
    pub fn new() -> Self {
        Self {
            quiet: false,
            modify: false,
            force_output: false,
            emit_output: true,
            output_file: None,
            error_file: None,
            wrap: 68,
            newline: Newline::Lf,
            err_writer: Box::new(std::io::stderr()),
        }
    }

    /// 替换错误输出目的地（测试用内存缓冲等）
    pub fn set_error_sink(&mut self, writer: Box<dyn Write>) {
        self.err_writer = writer;
    }

    /// 向当前错误输出写一行
    pub fn report(&mut self, msg: &str) {
        writeln!(self.err_writer, "{}", msg).ok();
    }

    /// 按键名赋值
    ///
    /// 来自配置文件与注册表消费方的统一入口。未知键和解析失败
    /// 的值只报告不中断，原值保持不变。
    pub fn set_by_key(&mut self, key: &str, value: &str) {
        match key {
            "quiet" => self.set_bool(key, value, |o, v| o.quiet = v),
            "modify" => self.set_bool(key, value, |o, v| o.modify = v),
            "force-output" => self.set_bool(key, value, |o, v| o.force_output = v),
            "emit-output" => self.set_bool(key, value, |o, v| o.emit_output = v),
            "output-file" => self.output_file = Some(value.to_string()),
            "error-file" => {
                self.error_file = Some(value.to_string());
                self.refresh_error_destination();
            }
            "wrap" => match value.parse::<u32>() {
                Ok(n) => self.wrap = n,
                Err(_) => self.report_bad_value(key, value),
            },
            "newline" => match <Newline as FromStr>::from_str(value) {
                Ok(n) => self.newline = n,
                Err(_) => self.report_bad_value(key, value),
            },
            _ => {
                let err = DocmendError::UnknownOption(key.to_string());
                self.report(&err.to_string());
            }
        }
    }

    /// 根据 `error-file` 重新打开错误输出目的地
    ///
    /// 打开失败报告到现有目的地并沿用之；`error-file` 未设置时
    /// 落回标准错误。
    pub fn refresh_error_destination(&mut self) {
        let Some(path) = self.error_file.clone() else {
            self.err_writer = Box::new(std::io::stderr());
            return;
        };
        match File::create(&path) {
            Ok(file) => self.err_writer = Box::new(file),
            Err(e) => {
                let err = DocmendError::OutputOpenError { path, source: e };
                self.report(&err.to_string());
            }
        }
    }

    fn set_bool(&mut self, key: &str, value: &str, assign: fn(&mut Self, bool)) {
        match parse_bool(value) {
            Some(v) => assign(self, v),
            None => self.report_bad_value(key, value),
        }
    }

    fn report_bad_value(&mut self, key: &str, value: &str) {
        let err = DocmendError::InvalidOptionValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        self.report(&err.to_string());
    }
}

/// 解析布尔选项值，接受 yes/no、true/false、1/0
fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "yes" | "true" | "1" => Some(true),
        "no" | "false" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// 可回读的共享错误输出
    #[derive(Clone, Default)]
    struct SharedSink(Arc<Mutex<Vec<u8>>>);

    impl SharedSink {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedSink {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn quiet_options() -> (Options, SharedSink) {
        let sink = SharedSink::default();
        let mut options = Options::new();
        options.set_error_sink(Box::new(sink.clone()));
        (options, sink)
    }

    #[test]
    fn test_set_by_key_typed_values() {
        let (mut options, _sink) = quiet_options();
        options.set_by_key("quiet", "yes");
        options.set_by_key("wrap", "120");
        options.set_by_key("newline", "crlf");
        options.set_by_key("output-file", "out.txt");

        assert!(options.quiet);
        assert_eq!(options.wrap, 120);
        assert_eq!(options.newline, Newline::Crlf);
        assert_eq!(options.output_file.as_deref(), Some("out.txt"));
    }

    #[test]
    fn test_unknown_key_reported_and_ignored() {
        let (mut options, sink) = quiet_options();
        options.set_by_key("no-such-option", "yes");
        assert!(sink.contents().contains("Unknown option: no-such-option"));
        // 后续赋值仍然生效
        options.set_by_key("modify", "yes");
        assert!(options.modify);
    }

    #[test]
    fn test_bad_value_keeps_prior_value() {
        let (mut options, sink) = quiet_options();
        options.set_by_key("wrap", "80");
        options.set_by_key("wrap", "not-a-number");
        assert_eq!(options.wrap, 80);
        assert!(sink.contents().contains("Invalid value for option 'wrap'"));

        options.set_by_key("force-output", "maybe");
        assert!(!options.force_output);
    }

    #[test]
    fn test_error_file_switches_destination() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("errors.log");
        let (mut options, _sink) = quiet_options();

        options.set_by_key("error-file", path.to_str().unwrap());
        options.report("boom");
        drop(options);

        let logged = std::fs::read_to_string(&path).unwrap();
        assert_eq!(logged, "boom\n");
    }

    #[test]
    fn test_unopenable_error_file_reported_to_prior_destination() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("errors.log");
        let (mut options, sink) = quiet_options();

        options.set_by_key("error-file", path.to_str().unwrap());
        assert!(sink.contents().contains("Failed to open output"));

        // 原目的地继续可用
        options.report("still here");
        assert!(sink.contents().contains("still here"));
    }
}
