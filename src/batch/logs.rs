//! # 作业结果日志
//!
//! `done.log` / `undone.log`：只追加，每行 `{handle} {identifier}`。
//! 开启原因记录时，`undone.log` 追加第三列原因代码。
//!
//! ## 依赖关系
//! - 被 `batch/orchestrator.rs` 写入
//! - 被 `commands/collect.rs` 读取

use crate::error::{OrcanizerError, ParseFailure, Result};
use crate::models::JobHandle;

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

pub const DONE_LOG: &str = "done.log";
pub const UNDONE_LOG: &str = "undone.log";

/// 日志中的一条记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub handle: JobHandle,
    pub identifier: String,
    pub reason: Option<String>,
}

/// 成功/失败两份日志
#[derive(Debug, Clone)]
pub struct OutcomeLogs {
    done: PathBuf,
    undone: PathBuf,
    with_reasons: bool,
}

impl OutcomeLogs {
    pub fn in_dir(workdir: &Path, with_reasons: bool) -> Self {
        OutcomeLogs {
            done: workdir.join(DONE_LOG),
            undone: workdir.join(UNDONE_LOG),
            with_reasons,
        }
    }

    pub fn done_path(&self) -> &Path {
        &self.done
    }

    pub fn undone_path(&self) -> &Path {
        &self.undone
    }

    pub fn record_success(&self, handle: JobHandle, identifier: &str) -> Result<()> {
        append_line(&self.done, &format!("{} {}", handle, identifier))
    }

    pub fn record_failure(
        &self,
        handle: JobHandle,
        identifier: &str,
        reason: &ParseFailure,
    ) -> Result<()> {
        let line = if self.with_reasons {
            format!("{} {} {}", handle, identifier, reason.code())
        } else {
            format!("{} {}", handle, identifier)
        };
        append_line(&self.undone, &line)
    }
}

fn append_line(path: &Path, line: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| OrcanizerError::FileWriteError {
            path: path.display().to_string(),
            source: e,
        })?;

    writeln!(file, "{}", line).map_err(|e| OrcanizerError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })
}

/// 读取日志；不存在时返回空列表，无法识别的行跳过
pub fn read_log(path: &Path) -> Result<Vec<LogEntry>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path).map_err(|e| OrcanizerError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    let mut entries = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| OrcanizerError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;

        let mut parts = line.split_whitespace();
        let (handle, identifier) = match (parts.next(), parts.next()) {
            (Some(h), Some(id)) => match h.parse::<usize>() {
                Ok(h) => (JobHandle(h), id.to_string()),
                Err(_) => {
                    log::warn!("{}: skipping malformed line '{}'", path.display(), line);
                    continue;
                }
            },
            _ => continue,
        };

        entries.push(LogEntry {
            handle,
            identifier,
            reason: parts.next().map(str::to_string),
        });
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let logs = OutcomeLogs::in_dir(dir.path(), false);

        logs.record_success(JobHandle(0), "CCO").unwrap();
        logs.record_failure(
            JobHandle(1),
            "C#N",
            &ParseFailure::MissingProperties("U".to_string()),
        )
        .unwrap();
        logs.record_success(JobHandle(2), "O").unwrap();

        let done = std::fs::read_to_string(logs.done_path()).unwrap();
        assert_eq!(done, "0 CCO\n2 O\n");
        let undone = std::fs::read_to_string(logs.undone_path()).unwrap();
        assert_eq!(undone, "1 C#N\n");

        let entries = read_log(logs.done_path()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].handle, JobHandle(2));
        assert_eq!(entries[1].identifier, "O");
        assert_eq!(entries[1].reason, None);
    }

    #[test]
    fn test_failure_reason_column() {
        let dir = tempfile::tempdir().unwrap();
        let logs = OutcomeLogs::in_dir(dir.path(), true);
        logs.record_failure(
            JobHandle(5),
            "[CH3]",
            &ParseFailure::BadOccupation {
                line: 10,
                token: "x".to_string(),
            },
        )
        .unwrap();

        let undone = std::fs::read_to_string(logs.undone_path()).unwrap();
        assert_eq!(undone, "5 [CH3] bad-occupation\n");

        let entries = read_log(logs.undone_path()).unwrap();
        assert_eq!(entries[0].reason.as_deref(), Some("bad-occupation"));
    }

    #[test]
    fn test_read_missing_log() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_log(&dir.path().join(DONE_LOG)).unwrap().is_empty());
    }
}
