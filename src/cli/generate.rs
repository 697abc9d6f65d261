//! # generate 子命令 CLI 定义
//!
//! 为单个 SMILES 生成 ORCA 输入文件，不运行 ORCA
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/generate.rs`

use clap::Args;
use std::path::PathBuf;

/// generate 子命令参数
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// SMILES of the molecule
    pub smiles: String,

    /// Job handle, used as the input file name ({handle}.inp)
    #[arg(long, default_value_t = 0)]
    pub handle: usize,

    /// Directory to write the input file into
    #[arg(long, default_value = ".")]
    pub workdir: PathBuf,

    /// Open Babel executable used for 3D embedding
    #[arg(long, default_value = "obabel", env = "ORCANIZER_EMBEDDER")]
    pub obabel: String,
}
