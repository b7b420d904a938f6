//! # 配置文件加载
//!
//! 在处理任何文档之前应用一次的配置链，后加载者覆盖先加载者：
//! 编译期内置系统路径 → `DOCMEND_CONF` 环境变量指向的文件 →
//! （仅当前两者都不存在时）用户主目录下的 rc 文件 → 命令行上的
//! `--config` 参数按从左到右的顺序。
//!
//! rc 文件语法：每行一个 `key: value`，空行与 `//` 注释行跳过，
//! 畸形行报告后跳过。`error-file` 的赋值在扫描途中即切换错误
//! 输出目的地。
//!
//! ## 依赖关系
//! - 被 `batch/mod.rs` 在批处理开始前调用
//! - 写入 `config/mod.rs` 的 `Options`
//! - 使用 `regex` 匹配配置行

use std::env;
use std::fs;
use std::path::Path;

use regex::Regex;

use super::Options;
use crate::error::DocmendError;

/// 编译期内置的系统配置路径
pub const SYSTEM_CONFIG_PATH: Option<&str> = if cfg!(unix) {
    Some("/etc/docmendrc")
} else {
    None
};

/// 指向配置文件的环境变量
pub const CONFIG_ENV_VAR: &str = "DOCMEND_CONF";

/// 用户主目录下的 rc 文件名
pub const USER_RC_NAME: &str = ".docmendrc";

/// 按优先级加载默认配置链（`--config` 参数之前的部分）
pub fn load_default_configs(options: &mut Options) {
    let mut found = false;

    if let Some(path) = SYSTEM_CONFIG_PATH {
        let path = Path::new(path);
        if path.is_file() {
            load_config_file(options, path);
            found = true;
        }
    }

    if let Ok(path) = env::var(CONFIG_ENV_VAR) {
        if !path.is_empty() {
            load_config_file(options, Path::new(&path));
            found = true;
        }
    }

    // 系统与环境变量配置都缺席时才读用户 rc
    if !found {
        if let Ok(home) = env::var("HOME") {
            let rc = Path::new(&home).join(USER_RC_NAME);
            if rc.is_file() {
                load_config_file(options, &rc);
            }
        }
    }
}

/// 加载单个配置文件
///
/// 读不到文件或行解析失败都只报告，处理以现有值继续。
pub fn load_config_file(options: &mut Options, path: &Path) {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let err = DocmendError::ConfigReadError {
                path: path.display().to_string(),
                source: e,
            };
            options.report(&err.to_string());
            return;
        }
    };
    // `error-file` 赋值在 set_by_key 内立即切换目的地，
    // 同一文件里后续的报告已经写往新目的地
    parse_config(options, &content, &path.display().to_string());
}

/// 逐行解析配置文本
fn parse_config(options: &mut Options, content: &str, origin: &str) {
    let line_re = Regex::new(r"^([A-Za-z][A-Za-z0-9-]*)\s*:\s*(.*?)\s*$").unwrap();

    for (lineno, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with("//") {
            continue;
        }
        match line_re.captures(line) {
            Some(caps) => options.set_by_key(&caps[1], &caps[2]),
            None => options.report(&format!(
                "{}:{}: malformed config line: {}",
                origin,
                lineno + 1,
                line
            )),
        }
    }
}
