//! # 结果表
//!
//! 每个成功分子一行。保存开启时，批处理开始即创建 CSV 并写表头，
//! 之后每成功一个分子追加一行并立即 flush，崩溃时最多丢失正在计算的分子。
//!
//! ## 依赖关系
//! - 被 `batch/driver.rs`, `commands/collect.rs`, `commands/parse.rs` 使用
//! - 使用 `csv` crate

use crate::error::{OrcanizerError, Result};
use crate::models::{Property, PropertyMap};

use std::fs::File;
use std::path::{Path, PathBuf};

pub const TABLE_FILE: &str = "orkanized.csv";

/// 结果表（可选持久化）
pub struct ResultTable {
    rows: Vec<PropertyMap>,
    sink: Option<(PathBuf, csv::Writer<File>)>,
}

impl ResultTable {
    /// 不落盘的结果表
    pub fn in_memory() -> Self {
        ResultTable {
            rows: Vec::new(),
            sink: None,
        }
    }

    /// 创建（覆盖）CSV 文件并写入表头
    pub fn create(path: &Path) -> Result<Self> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(Property::header())?;
        flush(&mut writer, path)?;

        Ok(ResultTable {
            rows: Vec::new(),
            sink: Some((path.to_path_buf(), writer)),
        })
    }

    /// 追加一行
    pub fn push(&mut self, row: PropertyMap) -> Result<()> {
        if let Some((path, writer)) = self.sink.as_mut() {
            writer.write_record(row.to_record())?;
            flush(writer, path.as_path())?;
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn into_rows(self) -> Vec<PropertyMap> {
        self.rows
    }
}

fn flush(writer: &mut csv::Writer<File>, path: &Path) -> Result<()> {
    writer.flush().map_err(|e| OrcanizerError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })
}

/// 一次性写出整张表
pub fn write_table(path: &Path, rows: &[PropertyMap]) -> Result<()> {
    let mut table = ResultTable::create(path)?;
    for row in rows {
        table.push(row.clone())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(smiles: &str, homo: &str) -> PropertyMap {
        let mut map = PropertyMap::new(smiles);
        map.set(Property::HomoEh, homo);
        map
    }

    #[test]
    fn test_rows_are_on_disk_after_each_push() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(TABLE_FILE);
        let mut table = ResultTable::create(&path).unwrap();

        let header = std::fs::read_to_string(&path).unwrap();
        assert_eq!(header.lines().count(), 1);
        assert!(header.starts_with("smiles,LUMO (Eh),LUMO (eV),HOMO (Eh)"));

        table.push(row("CCO", "-0.25")).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);

        table.push(row("O", "-0.30")).unwrap();
        let mut reader = csv::Reader::from_path(&path).unwrap();
        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 2);
        assert_eq!(&records[1][0], "O");
        assert_eq!(&records[1][3], "-0.30");
        assert_eq!(&records[1][1], "");
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_create_truncates_previous_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(TABLE_FILE);
        write_table(&path, &[row("C", "-0.4"), row("N", "-0.3")]).unwrap();

        let table = ResultTable::create(&path).unwrap();
        assert!(table.is_empty());
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
    }

    #[test]
    fn test_in_memory_table() {
        let mut table = ResultTable::in_memory();
        table.push(row("C", "-0.4")).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.into_rows()[0].identifier, "C");
    }
}
