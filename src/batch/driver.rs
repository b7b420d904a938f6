//! # 批量驱动器
//!
//! 将零或多个文档依次推过固定的四阶段流水线：
//! Parse → CleanAndRepair → RunDiagnostics → 条件 Save。
//! 文档之间彼此独立，严格按参数顺序串行处理；单个文档的致命
//! 失败不中断批次。每个文档结束后其计数器无条件并入合计，
//! 循环结束后由合计得出进程退出码。
//!
//! ## 依赖关系
//! - 被 `batch/mod.rs` 调用
//! - 驱动 `engine/` 的 `DocumentEngine`
//! - 构造 `io/file.rs` 的来源与去向

use std::path::Path;

use crate::config::Options;
use crate::engine::{DocumentEngine, Status};
use crate::error::Result;
use crate::io::{FileByteSink, FileByteSource};

/// 单个文档作业
///
/// 输入标识、本文档的计数器与流水线终态。每次循环迭代创建，
/// 计数并入合计后即丢弃。
#[derive(Debug)]
pub struct DocumentJob {
    /// 输入文件路径；None 表示标准输入
    pub input: Option<String>,
    /// 内容错误计数
    pub errors: usize,
    /// 警告计数
    pub warnings: usize,
    /// 无障碍警告计数
    pub access_warnings: usize,
    /// 流水线终态
    pub status: Status,
}

impl DocumentJob {
    fn new(input: Option<String>) -> Self {
        Self {
            input,
            errors: 0,
            warnings: 0,
            access_warnings: 0,
            status: Status::Success,
        }
    }
}

/// 批量合计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchTotals {
    /// 内容错误合计
    pub errors: usize,
    /// 警告合计
    pub warnings: usize,
    /// 无障碍警告合计
    pub access_warnings: usize,
    /// 以致命状态结束的文档数
    pub fatal_documents: usize,
}

impl BatchTotals {
    /// 并入一个已完成作业的计数
    ///
    /// 无条件调用：在 Parse 就中止的文档并入零值，保证空批次
    /// 或全失败批次的合计依然定义良好。
    pub fn fold(&mut self, job: &DocumentJob) {
        self.errors += job.errors;
        self.warnings += job.warnings;
        self.access_warnings += job.access_warnings;
        if job.status.is_fatal() {
            self.fatal_documents += 1;
        }
    }

    /// 进程退出码
    ///
    /// 错误压倒警告，与数量无关；无障碍警告只报告，不参与排序。
    pub fn exit_code(&self) -> i32 {
        if self.errors > 0 {
            2
        } else if self.warnings > 0 {
            1
        } else {
            0
        }
    }
}

/// 批量驱动器
///
/// 对引擎类型泛型；每个文档向工厂要一个新的引擎实例。
pub struct BatchDriver<F> {
    make_engine: F,
}

impl<F, E> BatchDriver<F>
where
    F: FnMut() -> E,
    E: DocumentEngine,
{
    pub fn new(make_engine: F) -> Self {
        Self { make_engine }
    }

    /// 顺序处理全部输入并打印摘要，返回合计
    ///
    /// 输入列表为空时处理一个隐式的标准输入文档。
    pub fn run(&mut self, inputs: &[String], options: &mut Options) -> BatchTotals {
        let mut totals = BatchTotals::default();

        if inputs.is_empty() {
            let job = self.run_document(None, options);
            totals.fold(&job);
        } else {
            for input in inputs {
                let id = if input == "-" {
                    None
                } else {
                    Some(input.clone())
                };
                let job = self.run_document(id, options);
                totals.fold(&job);
            }
        }

        self.report_summary(&totals, options);
        totals
    }

    /// 单文档状态机，阶段严格顺序，致命状态后不再进入下一阶段
    fn run_document(&mut self, input: Option<String>, options: &mut Options) -> DocumentJob {
        let mut job = DocumentJob::new(input);
        let mut engine = (self.make_engine)();

        // Parse：打开失败只中止本文档
        let mut source = match &job.input {
            Some(path) => match FileByteSource::open(Path::new(path)) {
                Ok(source) => source,
                Err(e) => {
                    options.report(&e.to_string());
                    job.status = Status::Fatal;
                    return job;
                }
            },
            None => FileByteSource::stdin(),
        };
        job.status = engine.parse(&mut source);
        drop(source);
        if job.status.is_fatal() {
            return job;
        }

        // CleanAndRepair
        job.status = job.status.worst(engine.clean_and_repair());
        if job.status.is_fatal() {
            return job;
        }

        // RunDiagnostics：计数器读自引擎，驱动器不重新计算
        job.status = job.status.worst(engine.run_diagnostics());
        job.errors = engine.errors();
        job.warnings = engine.warnings();
        job.access_warnings = engine.access_warnings();
        if job.status.is_fatal() {
            return job;
        }

        // 条件 Save：有错误时仅在 force-output 下产出
        if options.emit_output && (job.status < Status::Errors || options.force_output) {
            match self.open_sink(&job, options) {
                Ok(mut sink) => {
                    job.status = job.status.worst(engine.save(&mut sink));
                }
                Err(e) => {
                    options.report(&e.to_string());
                    job.status = Status::Fatal;
                }
            }
        }

        job
    }

    /// 输出目标决议：写回原文件 > 显式输出文件 > 标准输出
    fn open_sink(&self, job: &DocumentJob, options: &Options) -> Result<FileByteSink> {
        if options.modify {
            if let Some(path) = &job.input {
                return FileByteSink::create(Path::new(path));
            }
        }
        if let Some(path) = &options.output_file {
            return FileByteSink::create(Path::new(path));
        }
        Ok(FileByteSink::stdout())
    }

    /// 批次摘要，写往错误输出目的地
    fn report_summary(&self, totals: &BatchTotals, options: &mut Options) {
        if options.quiet {
            return;
        }

        if totals.errors == 0 && totals.warnings == 0 {
            options.report("No warnings or errors were found.");
        } else {
            options.report(&format!(
                "{} warnings, {} errors were found!",
                totals.warnings, totals.errors
            ));
        }
        if totals.access_warnings > 0 {
            options.report(&format!(
                "{} accessibility warnings were found.",
                totals.access_warnings
            ));
        }
        if totals.fatal_documents > 0 {
            options.report(&format!(
                "{} documents could not be processed.",
                totals.fatal_documents
            ));
        }
        // 无内容错误时以空行收尾，纯属摘要排版，不影响退出码
        if totals.errors == 0 {
            options.report("");
        }
    }
}
