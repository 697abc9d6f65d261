//! # 分子列表读取
//!
//! 按 CSV 读取，每行取第一列（列内再取第一个空白分隔的字段）作为 SMILES；
//! 支持带引号的字段，跳过空行和 `#` 注释，第一行若包含 "smiles" 字样则视为表头。
//!
//! ## 依赖关系
//! - 被 `commands/run.rs`, `commands/collect.rs` 使用
//! - 使用 `csv` 解析列表

use crate::error::{OrcanizerError, Result};

use std::fs::File;
use std::path::Path;

/// 读取分子列表文件
pub fn read_molecule_list(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| OrcanizerError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut molecules = Vec::new();
    let mut first_record = true;

    for record in reader.records() {
        let record = record?;

        // 纯文本列表中 "SMILES 名称" 这样的行
        let first = record
            .get(0)
            .and_then(|field| field.split_whitespace().next())
            .unwrap_or("");
        if first.is_empty() {
            continue;
        }

        if first_record {
            first_record = false;
            if record
                .iter()
                .any(|field| field.to_lowercase().contains("smiles"))
            {
                continue;
            }
        }

        molecules.push(first.to_string());
    }

    Ok(molecules)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_list_with_header_and_comments() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("molecules.csv");
        std::fs::write(
            &path,
            "smiles,name\n# solvents\nCCO,ethanol\n\nO water\nC1=CC=CC=C1\n",
        )
        .unwrap();

        let molecules = read_molecule_list(&path).unwrap();
        assert_eq!(molecules, vec!["CCO", "O", "C1=CC=CC=C1"]);
    }

    #[test]
    fn test_quoted_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("molecules.csv");
        std::fs::write(
            &path,
            "smiles,name\n\"CCO\",ethanol\n\"O\",\"water, pure\"\n",
        )
        .unwrap();

        let molecules = read_molecule_list(&path).unwrap();
        assert_eq!(molecules, vec!["CCO", "O"]);
    }

    #[test]
    fn test_quoted_list_without_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("molecules.csv");
        std::fs::write(&path, "\"C=O\",\"formaldehyde, gas\"\n\"CC#N\",acetonitrile\n").unwrap();

        let molecules = read_molecule_list(&path).unwrap();
        assert_eq!(molecules, vec!["C=O", "CC#N"]);
    }

    #[test]
    fn test_missing_list() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            read_molecule_list(&dir.path().join("none.txt")),
            Err(OrcanizerError::FileReadError { .. })
        ));
    }
}
