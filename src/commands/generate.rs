//! # generate 命令实现
//!
//! 为单个 SMILES 写出 `{handle}.inp`，便于手动检查或提交。
//!
//! ## 依赖关系
//! - 使用 `cli/generate.rs` 定义的参数
//! - 使用 `jobs/input.rs`, `jobs/embed.rs`

use crate::cli::generate::GenerateArgs;
use crate::error::{OrcanizerError, Result};
use crate::jobs::{InputBuilder, OpenBabelEmbedder};
use crate::models::JobHandle;
use crate::utils::{output, progress};

use std::fs;

/// 执行 generate 命令
pub fn execute(args: GenerateArgs) -> Result<()> {
    fs::create_dir_all(&args.workdir).map_err(|e| OrcanizerError::FileWriteError {
        path: args.workdir.display().to_string(),
        source: e,
    })?;

    let builder = InputBuilder::new(OpenBabelEmbedder::new(&args.obabel));

    let spinner = progress::create_spinner(&format!("Embedding {}", args.smiles));
    let result = builder.build(&args.workdir, JobHandle(args.handle), &args.smiles);
    spinner.finish_and_clear();

    let path = result?;
    output::print_conversion(&args.smiles, &path.display().to_string());

    Ok(())
}
