//! # parse 命令实现
//!
//! 解析单个 ORCA 输出并显示全部性质。
//!
//! ## 依赖关系
//! - 使用 `cli/parse.rs` 定义的参数
//! - 使用 `parsers/orca_out.rs`, `batch/table.rs`

use crate::batch::write_table;
use crate::cli::parse::ParseArgs;
use crate::commands::{parse_options, summary};
use crate::error::{OrcanizerError, Result};
use crate::models::Property;
use crate::parsers::parse_orca_report;
use crate::utils::output;

/// 执行 parse 命令
pub fn execute(args: ParseArgs) -> Result<()> {
    output::print_header("Parsing ORCA Output");

    if !args.report.exists() {
        return Err(OrcanizerError::FileNotFound {
            path: args.report.display().to_string(),
        });
    }

    let identifier = args.smiles.clone().unwrap_or_else(|| {
        args.report
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default()
    });

    let options = parse_options(&args.report_args)?;
    let props = parse_orca_report(&args.report, &identifier, &options).map_err(|reason| {
        OrcanizerError::ReportError {
            path: args.report.display().to_string(),
            reason,
        }
    })?;

    summary::print_properties(&props);
    output::print_info(&format!(
        "Extracted {} of {} properties",
        props.len(),
        Property::ALL.len()
    ));

    let missing = props.missing();
    if !missing.is_empty() {
        output::print_warning(&format!(
            "Missing: {}",
            missing
                .iter()
                .map(|p| p.column())
                .collect::<Vec<_>>()
                .join(", ")
        ));
    }

    if let Some(ref csv_path) = args.output_csv {
        write_table(csv_path, std::slice::from_ref(&props))?;
        output::print_success(&format!("Properties saved to '{}'", csv_path.display()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ReportArgs;
    use crate::parsers::orca_out::tests::{utf16le_bytes, WATER_REPORT};
    use std::fs;
    use std::path::{Path, PathBuf};

    fn parse_args(report: &Path, smiles: Option<&str>, output_csv: Option<PathBuf>) -> ParseArgs {
        ParseArgs {
            report: report.to_path_buf(),
            smiles: smiles.map(str::to_string),
            report_args: ReportArgs {
                encoding: "utf-16".to_string(),
                lenient: false,
            },
            output_csv,
        }
    }

    #[test]
    fn test_identifier_defaults_to_file_stem() {
        let dir = tempfile::tempdir().unwrap();
        let report = dir.path().join("7.out");
        fs::write(&report, utf16le_bytes(WATER_REPORT, true)).unwrap();
        let csv_path = dir.path().join("one.csv");

        execute(parse_args(&report, None, Some(csv_path.clone()))).unwrap();

        let text = fs::read_to_string(csv_path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("smiles,LUMO (Eh)"));
        assert!(lines[1].starts_with("7,"));
    }

    #[test]
    fn test_smiles_overrides_identifier() {
        let dir = tempfile::tempdir().unwrap();
        let report = dir.path().join("7.out");
        fs::write(&report, utf16le_bytes(WATER_REPORT, true)).unwrap();
        let csv_path = dir.path().join("one.csv");

        execute(parse_args(&report, Some("O"), Some(csv_path.clone()))).unwrap();

        let text = fs::read_to_string(csv_path).unwrap();
        assert!(text.lines().nth(1).unwrap().starts_with("O,"));
    }

    #[test]
    fn test_without_csv_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let report = dir.path().join("7.out");
        fs::write(&report, utf16le_bytes(WATER_REPORT, true)).unwrap();

        execute(parse_args(&report, None, None)).unwrap();
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_missing_report() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            execute(parse_args(&dir.path().join("none.out"), None, None)),
            Err(OrcanizerError::FileNotFound { .. })
        ));
    }

    #[test]
    fn test_unusable_report() {
        let dir = tempfile::tempdir().unwrap();
        let report = dir.path().join("3.out");
        fs::write(&report, b"").unwrap();
        assert!(matches!(
            execute(parse_args(&report, None, None)),
            Err(OrcanizerError::ReportError { .. })
        ));
    }
}
