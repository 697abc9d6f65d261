//! # collect 命令实现
//!
//! 重新解析目录中已有的 `{handle}.out` 并重建结果表。
//!
//! ## 功能
//! - 按文件名模式扫描 ORCA 输出
//! - 由分子列表或 done.log / undone.log 恢复 SMILES
//! - 解析失败的输出只给出警告，不中止
//!
//! ## 依赖关系
//! - 使用 `cli/collect.rs` 定义的参数
//! - 使用 `batch/`, `parsers/orca_out.rs`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::batch::{read_log, read_molecule_list, write_table, OutcomeLogs, ReportCollector};
use crate::cli::collect::CollectArgs;
use crate::commands::{parse_options, summary};
use crate::error::{OrcanizerError, Result};
use crate::models::{JobHandle, PropertyMap};
use crate::parsers::parse_orca_report;
use crate::utils::{output, progress};

use std::collections::HashMap;
use std::path::Path;

/// 执行 collect 命令
pub fn execute(args: CollectArgs) -> Result<()> {
    output::print_header("Collecting ORCA Results");

    let reports = ReportCollector::new(args.dir.clone())
        .with_pattern(&args.pattern)?
        .recursive(args.recursive)
        .collect()?;

    if reports.is_empty() {
        return Err(OrcanizerError::NoFilesFound {
            pattern: args.pattern.clone(),
        });
    }
    output::print_info(&format!("Found {} ORCA outputs", reports.len()));

    let identifiers = identifier_map(&args.dir, args.input.as_deref())?;
    let options = parse_options(&args.report)?;

    let pb = progress::create_progress_bar(reports.len() as u64, "Parsing");
    let mut rows: Vec<PropertyMap> = Vec::new();
    let mut failed = 0usize;

    for (handle, path) in &reports {
        let identifier = match identifiers.get(handle) {
            Some(id) => id.clone(),
            None => {
                pb.suspend(|| {
                    output::print_warning(&format!(
                        "No SMILES known for job {}, using the handle instead",
                        handle
                    ));
                });
                handle.to_string()
            }
        };

        match parse_orca_report(path, &identifier, &options) {
            Ok(props) => rows.push(props),
            Err(e) => {
                failed += 1;
                log::debug!("{}: {}", path.display(), e);
                pb.suspend(|| {
                    output::print_warning(&format!("Skipping {}: {}", path.display(), e));
                });
            }
        }
        pb.inc(1);
    }

    pb.finish_and_clear();

    write_table(&args.output, &rows)?;
    summary::print_property_table(&rows, rows.len());

    output::print_separator();
    output::print_done(&format!(
        "Collected {} molecules into '{}' ({} outputs unusable)",
        rows.len(),
        args.output.display(),
        failed
    ));

    Ok(())
}

/// 作业编号 → SMILES
///
/// 有分子列表时按行号对应；否则读取目录下的 undone.log 和 done.log。
/// 两个日志都跨运行追加，后读的 done.log 覆盖同一编号的失败记录。
fn identifier_map(dir: &Path, input: Option<&Path>) -> Result<HashMap<JobHandle, String>> {
    if let Some(list) = input {
        if !list.exists() {
            return Err(OrcanizerError::FileNotFound {
                path: list.display().to_string(),
            });
        }
        return Ok(read_molecule_list(list)?
            .into_iter()
            .enumerate()
            .map(|(n, smiles)| (JobHandle(n), smiles))
            .collect());
    }

    let logs = OutcomeLogs::in_dir(dir, false);
    let mut map = HashMap::new();
    for path in [logs.undone_path(), logs.done_path()] {
        for entry in read_log(path)? {
            if let Some(reason) = &entry.reason {
                log::debug!("job {} failed earlier ({})", entry.handle, reason);
            }
            map.insert(entry.handle, entry.identifier);
        }
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::logs::{DONE_LOG, UNDONE_LOG};
    use crate::cli::ReportArgs;
    use crate::parsers::orca_out::tests::{utf16le_bytes, WATER_REPORT};
    use std::fs;

    fn collect_args(dir: &Path) -> CollectArgs {
        CollectArgs {
            dir: dir.to_path_buf(),
            pattern: "*.out".to_string(),
            recursive: false,
            input: None,
            report: ReportArgs {
                encoding: "utf-16".to_string(),
                lenient: false,
            },
            output: dir.join("rebuilt.csv"),
        }
    }

    #[test]
    fn test_identifiers_from_logs() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(DONE_LOG), "0 O\n2 CCO\n").unwrap();
        fs::write(dir.path().join(UNDONE_LOG), "1 C=O\n").unwrap();

        let map = identifier_map(dir.path(), None).unwrap();
        assert_eq!(map.len(), 3);
        assert_eq!(map[&JobHandle(1)], "C=O");
        assert_eq!(map[&JobHandle(2)], "CCO");
    }

    #[test]
    fn test_done_entry_wins_over_earlier_failure() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(DONE_LOG), "0 CCO\n").unwrap();
        fs::write(dir.path().join(UNDONE_LOG), "0 CC scf\n1 C=O\n").unwrap();

        let map = identifier_map(dir.path(), None).unwrap();
        assert_eq!(map[&JobHandle(0)], "CCO");
        assert_eq!(map[&JobHandle(1)], "C=O");
    }

    #[test]
    fn test_identifiers_from_molecule_list() {
        let dir = tempfile::tempdir().unwrap();
        let list = dir.path().join("mols.txt");
        fs::write(&list, "O\nCCO\n").unwrap();

        let map = identifier_map(dir.path(), Some(&list)).unwrap();
        assert_eq!(map[&JobHandle(0)], "O");
        assert_eq!(map[&JobHandle(1)], "CCO");
    }

    #[test]
    fn test_collect_skips_unusable_reports() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("0.out"), utf16le_bytes(WATER_REPORT, true)).unwrap();
        fs::write(dir.path().join("1.out"), b"").unwrap();
        fs::write(dir.path().join(DONE_LOG), "0 O\n").unwrap();

        let args = collect_args(dir.path());
        let output = args.output.clone();
        execute(args).unwrap();

        let text = fs::read_to_string(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("smiles,LUMO (Eh)"));
        assert!(lines[1].starts_with("O,"));
    }

    #[test]
    fn test_collect_without_reports() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            execute(collect_args(dir.path())),
            Err(OrcanizerError::NoFilesFound { .. })
        ));
    }
}
