//! # run 命令实现
//!
//! 串行处理 SMILES 列表：生成输入 → ORCA → 解析 → 结果表。
//!
//! ## 功能
//! - 读取分子列表文件和/或命令行 SMILES
//! - 每个分子的结果写入 done.log / undone.log
//! - 每成功一个分子就把结果行写入 CSV
//! - 结束时打印结果表格和统计
//!
//! ## 依赖关系
//! - 使用 `cli/run.rs` 定义的参数
//! - 使用 `batch/`, `jobs/`
//! - 使用 `utils/output.rs`

use crate::batch::{read_molecule_list, BatchDriver, OutcomeLogs, Orchestrator};
use crate::cli::run::RunArgs;
use crate::commands::{parse_options, summary};
use crate::error::{OrcanizerError, Result};
use crate::jobs::{InputBuilder, OpenBabelEmbedder, OrcaRunner};
use crate::utils::output;

use std::fs;

/// 执行 run 命令
pub fn execute(args: RunArgs) -> Result<()> {
    output::print_header("ORCA Batch Run");

    let molecules = gather_molecules(&args)?;
    output::print_info(&format!("Loaded {} molecules", molecules.len()));

    fs::create_dir_all(&args.workdir).map_err(|e| OrcanizerError::FileWriteError {
        path: args.workdir.display().to_string(),
        source: e,
    })?;

    let options = parse_options(&args.report)?;
    let logs = OutcomeLogs::in_dir(&args.workdir, args.log_reasons);
    let undone_path = logs.undone_path().to_path_buf();
    let orchestrator = Orchestrator::new(
        InputBuilder::new(OpenBabelEmbedder::new(&args.obabel)),
        OrcaRunner::new(&args.orca),
        &args.workdir,
        options,
        logs,
    );

    let table_path = if args.no_save {
        None
    } else {
        Some(args.workdir.join(&args.table))
    };

    output::print_info(&format!(
        "Working directory '{}', ORCA executable '{}'",
        args.workdir.display(),
        args.orca
    ));

    let summary = BatchDriver::new(orchestrator)
        .save_to(table_path.clone())
        .run(&molecules)?;

    summary::print_property_table(&summary.rows, args.top_n);

    output::print_separator();
    output::print_done(&format!(
        "Processed {} molecules: {} succeeded, {} failed",
        summary.total(),
        summary.succeeded.len(),
        summary.failed.len()
    ));

    if !summary.failed.is_empty() {
        for job in &summary.failed {
            output::print_warning(&format!(
                "{} {} ({})",
                job.handle,
                job.identifier,
                job.reason.code()
            ));
        }
        output::print_info(&format!(
            "Failed molecules are listed in '{}'",
            undone_path.display()
        ));
    }
    if let Some(path) = table_path {
        output::print_success(&format!("Result table saved to '{}'", path.display()));
    }

    Ok(())
}

/// 合并 --input 文件和 --smiles 参数中的分子
fn gather_molecules(args: &RunArgs) -> Result<Vec<String>> {
    let mut molecules = Vec::new();

    if let Some(ref input) = args.input {
        if !input.exists() {
            return Err(OrcanizerError::FileNotFound {
                path: input.display().to_string(),
            });
        }
        molecules.extend(read_molecule_list(input)?);
    }
    molecules.extend(args.smiles.iter().cloned());

    if molecules.is_empty() {
        return Err(OrcanizerError::InvalidArgument(
            "No molecules given, use --input or --smiles".to_string(),
        ));
    }

    Ok(molecules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    fn run_args(argv: &[&str]) -> RunArgs {
        let mut full = vec!["orcanizer", "run"];
        full.extend_from_slice(argv);
        match Cli::parse_from(full).command {
            Commands::Run(args) => args,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_defaults() {
        let args = run_args(&["-s", "CCO"]);
        assert_eq!(args.report.encoding, "utf-16");
        assert!(!args.report.lenient);
        assert!(!args.no_save);
        assert_eq!(args.table.to_str(), Some("orkanized.csv"));
    }

    #[test]
    fn test_gather_file_then_flags() {
        let dir = tempfile::tempdir().unwrap();
        let list = dir.path().join("mols.txt");
        fs::write(&list, "C\nCC\n").unwrap();

        let args = run_args(&["--input", list.to_str().unwrap(), "-s", "CCC"]);
        assert_eq!(gather_molecules(&args).unwrap(), vec!["C", "CC", "CCC"]);
    }

    #[test]
    fn test_gather_requires_molecules() {
        let args = run_args(&[]);
        assert!(matches!(
            gather_molecules(&args),
            Err(OrcanizerError::InvalidArgument(_))
        ));

        let args = run_args(&["--input", "/nonexistent/mols.txt"]);
        assert!(matches!(
            gather_molecules(&args),
            Err(OrcanizerError::FileNotFound { .. })
        ));
    }
}
