//! # Docmend - 批量文档整理与重写工具
//!
//! 接收一批输入文档和一套共享配置，把每个文档依次推过外部引擎的
//! 四阶段流水线（解析 → 修复 → 诊断 → 输出），并把各文档的部分
//! 结果汇总成一个进程级退出码。
//!
//! ## 退出码
//! - `0` - 所有文档无错误无警告
//! - `1` - 无错误，但至少一个警告
//! - `2` - 至少一个错误
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── batch/      (批量编排与单文档状态机)
//!   │     ├── config/  (选项注册表与配置链)
//!   │     ├── engine/  (引擎契约与透传参考实现)
//!   │     └── io/      (可插拔字节流)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod config;
mod engine;
mod error;
mod io;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    match batch::execute(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            utils::output::print_error(&format!("{}", e));
            std::process::exit(2);
        }
    }
}
