//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `run`: 批量计算 SMILES 列表
//! - `parse`: 解析单个 ORCA 输出
//! - `collect`: 重新解析目录中已有的 ORCA 输出
//! - `generate`: 为单个 SMILES 生成 ORCA 输入
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: run, parse, collect, generate

pub mod collect;
pub mod generate;
pub mod parse;
pub mod run;

use clap::{Args, Parser, Subcommand};

/// orcanizer - 批量 ORCA 性质提取
#[derive(Parser)]
#[command(name = "orcanizer")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Batch ORCA property extraction from SMILES", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Run ORCA for a list of SMILES and collect their properties
    Run(run::RunArgs),

    /// Parse a single ORCA output file
    Parse(parse::ParseArgs),

    /// Re-parse existing ORCA outputs and rebuild the result table
    Collect(collect::CollectArgs),

    /// Write the ORCA input file for a single SMILES
    Generate(generate::GenerateArgs),
}

/// ORCA 输出解析选项（多个子命令共用）
#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// Text encoding of ORCA output files (BOM takes precedence)
    #[arg(long, default_value = "utf-16", env = "ORCANIZER_ENCODING")]
    pub encoding: String,

    /// Accept reports with missing sections as long as one property was found
    #[arg(long, default_value_t = false)]
    pub lenient: bool,
}
