//! # run 子命令 CLI 定义
//!
//! 批量生成输入、运行 ORCA、解析输出
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/run.rs`

use super::ReportArgs;
use clap::Args;
use std::path::PathBuf;

/// run 子命令参数
#[derive(Args, Debug)]
pub struct RunArgs {
    /// File with one SMILES per line (first column of a CSV also works)
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// SMILES to process (repeatable, appended after --input)
    #[arg(long = "smiles", short = 's')]
    pub smiles: Vec<String>,

    /// Working directory for .inp/.out files, logs and the result table
    #[arg(long, default_value = ".")]
    pub workdir: PathBuf,

    /// ORCA executable
    #[arg(long, default_value = "orca", env = "ORCA_EXECUTABLE")]
    pub orca: String,

    /// Open Babel executable used for 3D embedding
    #[arg(long, default_value = "obabel", env = "ORCANIZER_EMBEDDER")]
    pub obabel: String,

    #[command(flatten)]
    pub report: ReportArgs,

    /// Result table file name (relative to --workdir)
    #[arg(long, default_value = crate::batch::TABLE_FILE)]
    pub table: PathBuf,

    /// Do not write the result table
    #[arg(long, default_value_t = false)]
    pub no_save: bool,

    /// Append a reason code as third column of undone.log
    #[arg(long, default_value_t = false)]
    pub log_reasons: bool,

    /// Number of result rows to print at the end
    #[arg(long, default_value_t = 20)]
    pub top_n: usize,
}
