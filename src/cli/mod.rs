//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。docmend 是平铺式命令：若干选项
//! 加零或多个输入文档，没有子命令。
//!
//! 参数叠加在配置链之上，优先级最高；`--config` 文件本身在
//! `batch/mod.rs` 中按出现顺序先行加载。
//!
//! ## 依赖关系
//! - 被 `main.rs` 解析
//! - `apply` 写入 `config/mod.rs` 的 `Options`

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Newline, Options};

/// Docmend - 批量文档整理与重写工具
#[derive(Parser, Debug)]
#[command(name = "docmend")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Tidy and rewrite documents in batch", long_about = None)]
pub struct Cli {
    /// Input documents; reads standard input when none are given ("-" also means stdin)
    #[arg(value_name = "FILE")]
    pub inputs: Vec<String>,

    /// Load an extra config file; may repeat, applied left to right
    #[arg(long = "config", value_name = "FILE")]
    pub config: Vec<PathBuf>,

    /// Write the rewritten document back over each input file
    #[arg(short, long)]
    pub modify: bool,

    /// Write output to FILE instead of standard output
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,

    /// Write errors and the summary to FILE instead of standard error
    #[arg(short = 'f', long = "error-file", value_name = "FILE")]
    pub error_file: Option<String>,

    /// Emit output even when content errors were found
    #[arg(long = "force-output")]
    pub force_output: bool,

    /// Report errors and warnings only, emit no document output
    #[arg(short = 'e', long = "errors-only")]
    pub errors_only: bool,

    /// Suppress the end-of-run summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Wrap emitted text at this column (0 disables wrapping)
    #[arg(long, value_name = "COLUMN")]
    pub wrap: Option<u32>,

    /// Newline style for emitted documents
    #[arg(long, value_enum, value_name = "STYLE")]
    pub newline: Option<Newline>,
}

impl Cli {
    /// 将命令行参数叠加到配置上
    pub fn apply(&self, options: &mut Options) {
        if self.modify {
            options.modify = true;
        }
        if let Some(path) = &self.output {
            options.output_file = Some(path.clone());
        }
        if self.force_output {
            options.force_output = true;
        }
        if self.errors_only {
            options.emit_output = false;
        }
        if self.quiet {
            options.quiet = true;
        }
        if let Some(wrap) = self.wrap {
            options.wrap = wrap;
        }
        if let Some(newline) = self.newline {
            options.newline = newline;
        }
        if let Some(path) = &self.error_file {
            options.error_file = Some(path.clone());
            options.refresh_error_destination();
        }
    }
}
