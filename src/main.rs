//! # orcanizer - 批量 ORCA 性质提取
//!
//! 对 SMILES 列表逐个生成 ORCA 输入、运行 ORCA、从输出中提取
//! 前线轨道能量、偶极矩、极化率、热化学量和转动常数，汇总为 CSV 表。
//!
//! ## 子命令
//! - `run`      - 批量计算并生成结果表、done.log、undone.log
//! - `parse`    - 解析单个 ORCA 输出
//! - `collect`  - 重新解析目录中已有的输出并重建结果表
//! - `generate` - 只生成 ORCA 输入文件
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/     (批处理驱动、日志、结果表)
//!   │     ├── jobs/      (输入生成、ORCA 调用)
//!   │     ├── parsers/   (ORCA 输出、SMILES、XYZ 解析)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod jobs;
mod models;
mod parsers;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        log::debug!("{:?}", e);
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
