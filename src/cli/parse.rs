//! # parse 子命令 CLI 定义
//!
//! 解析单个 ORCA 输出文件
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/parse.rs`

use super::ReportArgs;
use clap::Args;
use std::path::PathBuf;

/// parse 子命令参数
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// ORCA output file
    pub report: PathBuf,

    /// Identifier stored with the properties (defaults to the file stem)
    #[arg(long)]
    pub smiles: Option<String>,

    #[command(flatten)]
    pub report_args: ReportArgs,

    /// Also write the properties as a one-row CSV
    #[arg(long)]
    pub output_csv: Option<PathBuf>,
}
