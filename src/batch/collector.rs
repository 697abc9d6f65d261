//! # 输出文件收集器
//!
//! 在工作目录中收集已有的 ORCA 输出 `{handle}.out`，按作业编号排序，
//! 用于不重新计算、仅重新解析的场景。
//!
//! ## 功能
//! - glob 模式匹配（逗号分隔多模式）
//! - 可选递归搜索
//! - 文件名主干必须是作业编号，其他文件跳过
//!
//! ## 依赖关系
//! - 被 `commands/collect.rs` 调用
//! - 使用 `walkdir` 遍历目录, `glob` 匹配文件名

use crate::error::{OrcanizerError, Result};
use crate::models::JobHandle;

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 输出文件收集器
pub struct ReportCollector {
    /// 搜索目录
    dir: PathBuf,
    /// 匹配模式列表
    patterns: Vec<glob::Pattern>,
    /// 是否递归
    recursive: bool,
}

impl ReportCollector {
    /// 创建新的收集器，默认匹配 `*.out`
    pub fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            patterns: vec![glob::Pattern::new("*.out").expect("static pattern is valid")],
            recursive: false,
        }
    }

    /// 设置匹配模式（逗号分隔的多模式）
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self> {
        let patterns = pattern
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| {
                glob::Pattern::new(s).map_err(|e| {
                    OrcanizerError::InvalidArgument(format!("Invalid glob pattern '{}': {}", s, e))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        if !patterns.is_empty() {
            self.patterns = patterns;
        }
        Ok(self)
    }

    /// 设置是否递归搜索
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 收集所有匹配的输出文件
    pub fn collect(&self) -> Result<Vec<(JobHandle, PathBuf)>> {
        if !self.dir.is_dir() {
            return Err(OrcanizerError::DirectoryNotFound {
                path: self.dir.display().to_string(),
            });
        }

        let max_depth = if self.recursive { usize::MAX } else { 1 };

        let mut reports: Vec<(JobHandle, PathBuf)> = WalkDir::new(&self.dir)
            .max_depth(max_depth)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| self.matches_patterns(e.path()))
            .filter_map(|e| handle_of(e.path()).map(|h| (h, e.path().to_path_buf())))
            .collect();

        reports.sort();
        Ok(reports)
    }

    /// 检查文件是否匹配任一模式
    fn matches_patterns(&self, path: &Path) -> bool {
        match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => self.patterns.iter().any(|p| p.matches(name)),
            None => false,
        }
    }
}

/// 从文件名主干读取作业编号
fn handle_of(path: &Path) -> Option<JobHandle> {
    path.file_stem()?.to_str()?.parse().ok().map(JobHandle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_numeric_reports_in_order() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["10.out", "2.out", "0.out", "notes.out", "3.inp", "orca.log"] {
            std::fs::write(dir.path().join(name), "").unwrap();
        }

        let reports = ReportCollector::new(dir.path().to_path_buf())
            .collect()
            .unwrap();
        let handles: Vec<usize> = reports.iter().map(|(h, _)| h.0).collect();
        assert_eq!(handles, vec![0, 2, 10]);
    }

    #[test]
    fn test_custom_patterns_and_recursion() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("1.log"), "").unwrap();
        std::fs::write(dir.path().join("sub").join("4.log"), "").unwrap();
        std::fs::write(dir.path().join("5.out"), "").unwrap();

        let flat = ReportCollector::new(dir.path().to_path_buf())
            .with_pattern("*.log")
            .unwrap()
            .collect()
            .unwrap();
        assert_eq!(flat.len(), 1);

        let deep = ReportCollector::new(dir.path().to_path_buf())
            .with_pattern("*.log, *.out")
            .unwrap()
            .recursive(true)
            .collect()
            .unwrap();
        let handles: Vec<usize> = deep.iter().map(|(h, _)| h.0).collect();
        assert_eq!(handles, vec![1, 4, 5]);
    }

    #[test]
    fn test_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let collector = ReportCollector::new(dir.path().join("absent"));
        assert!(matches!(
            collector.collect(),
            Err(OrcanizerError::DirectoryNotFound { .. })
        ));
        assert!(ReportCollector::new(dir.path().to_path_buf())
            .with_pattern("[")
            .is_err());
    }
}
