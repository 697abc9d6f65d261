//! # ORCA 作业执行
//!
//! 在工作目录中执行 `orca {handle}.inp`，标准输出重定向到 `{handle}.out`。
//! 阻塞直到进程退出，不解释退出码：作业是否可用由输出解析决定。
//!
//! ## 依赖关系
//! - 被 `batch/orchestrator.rs` 使用
//! - 无内部模块依赖（除 models/error）

use crate::error::{OrcanizerError, Result};
use crate::models::JobHandle;

use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;
use std::process::{Command, Stdio};

/// 外部程序退出状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStatus {
    /// 被信号终止时为 None
    pub code: Option<i32>,
}

impl RunStatus {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// 作业执行器
pub trait JobRunner {
    fn run(&self, workdir: &Path, handle: JobHandle) -> Result<RunStatus>;
}

/// ORCA 执行器
#[derive(Debug, Clone)]
pub struct OrcaRunner {
    pub executable: String,
}

impl OrcaRunner {
    pub fn new(executable: impl Into<String>) -> Self {
        OrcaRunner {
            executable: executable.into(),
        }
    }
}

impl JobRunner for OrcaRunner {
    fn run(&self, workdir: &Path, handle: JobHandle) -> Result<RunStatus> {
        let report_path = workdir.join(handle.report_file());
        let report = File::create(&report_path).map_err(|e| OrcanizerError::FileWriteError {
            path: report_path.display().to_string(),
            source: e,
        })?;

        log::info!("running {} {}", self.executable, handle.input_file());
        let status = Command::new(&self.executable)
            .arg(handle.input_file())
            .current_dir(workdir)
            .stdout(Stdio::from(report))
            .status()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => OrcanizerError::CommandNotFound {
                    command: self.executable.clone(),
                },
                _ => OrcanizerError::CommandFailed {
                    command: format!("{} {}", self.executable, handle.input_file()),
                    stderr: e.to_string(),
                },
            })?;

        let status = RunStatus {
            code: status.code(),
        };
        if !status.success() {
            log::warn!(
                "{} exited with {:?} for job {}",
                self.executable,
                status.code,
                handle
            );
        }
        Ok(status)
    }
}
