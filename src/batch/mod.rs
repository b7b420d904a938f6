//! # 批量处理模块
//!
//! 一次调用的编排层：先把配置链和命令行参数叠加成最终配置，
//! 再用驱动器把全部输入推过引擎流水线，最后换算退出码。
//!
//! ## 功能
//! - 配置加载优先级（系统 → 环境变量 → 用户 rc → `--config` → 参数）
//! - 逐文档串行处理与计数合计
//! - 退出码策略：错误 2 > 警告 1 > 干净 0
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `config/`, `engine/`, `utils/output.rs`
//! - 子模块: driver

pub mod driver;

pub use driver::{BatchDriver, BatchTotals, DocumentJob};

use crate::cli::Cli;
use crate::config::{self, Options};
use crate::engine::PassthroughEngine;
use crate::error::Result;
use crate::utils::output;

/// 执行一次完整调用，返回进程退出码
pub fn execute(cli: Cli) -> Result<i32> {
    let mut options = Options::new();

    // 配置链：后加载者覆盖先加载者，命令行参数最后叠加
    config::file::load_default_configs(&mut options);
    for path in &cli.config {
        config::file::load_config_file(&mut options, path);
    }
    cli.apply(&mut options);

    if cli.modify && cli.output.is_some() {
        output::print_warning("--output is ignored when --modify is set; writing back to each input.");
    }

    let newline = options.newline;
    let mut driver = BatchDriver::new(move || PassthroughEngine::with_newline(newline));
    let totals = driver.run(&cli.inputs, &mut options);

    Ok(totals.exit_code())
}
