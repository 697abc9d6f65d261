//! # collect 子命令 CLI 定义
//!
//! 重新解析已完成的 ORCA 输出并重建结果表
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/collect.rs`

use super::ReportArgs;
use clap::Args;
use std::path::PathBuf;

/// collect 子命令参数
#[derive(Args, Debug)]
pub struct CollectArgs {
    /// Directory containing {handle}.out files
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// File name pattern(s), comma-separated
    #[arg(long, default_value = "*.out")]
    pub pattern: String,

    /// Search subdirectories
    #[arg(long, short, default_value_t = false)]
    pub recursive: bool,

    /// Molecule list used for the earlier run (handle = line position);
    /// without it identifiers come from done.log / undone.log
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub report: ReportArgs,

    /// Output CSV file
    #[arg(long, default_value = crate::batch::TABLE_FILE)]
    pub output: PathBuf,
}
