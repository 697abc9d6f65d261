//! # 单分子作业编排
//!
//! 依次执行：输入文件生成 → ORCA → 输出解析，并把结果记入成功/失败日志。
//!
//! ## 错误边界
//! - 生成失败、外部程序无法启动、日志写入失败：返回 `Err`，中止批处理
//! - 解析失败（任何原因）：记入 `undone.log`，返回 `JobOutcome::Failed`
//!
//! ## 依赖关系
//! - 被 `batch/driver.rs` 使用
//! - 使用 `jobs/`, `parsers/orca_out.rs`, `batch/logs.rs`

use crate::batch::logs::OutcomeLogs;
use crate::error::{ParseFailure, Result};
use crate::jobs::{Embedder, InputBuilder, JobRunner};
use crate::models::{JobHandle, PropertyMap};
use crate::parsers::{parse_orca_report, ParseOptions};

use std::path::PathBuf;

/// 单个分子的处理结果
#[derive(Debug)]
pub enum JobOutcome {
    /// 解析成功
    Parsed(PropertyMap),
    /// 输出不可用
    Failed(ParseFailure),
}

/// 作业编排器
pub struct Orchestrator<E: Embedder, R: JobRunner> {
    builder: InputBuilder<E>,
    runner: R,
    workdir: PathBuf,
    options: ParseOptions,
    logs: OutcomeLogs,
}

impl<E: Embedder, R: JobRunner> Orchestrator<E, R> {
    pub fn new(
        builder: InputBuilder<E>,
        runner: R,
        workdir: impl Into<PathBuf>,
        options: ParseOptions,
        logs: OutcomeLogs,
    ) -> Self {
        Orchestrator {
            builder,
            runner,
            workdir: workdir.into(),
            options,
            logs,
        }
    }

    /// 处理一个分子
    pub fn process(&self, handle: JobHandle, identifier: &str) -> Result<JobOutcome> {
        self.builder.build(&self.workdir, handle, identifier)?;

        let status = self.runner.run(&self.workdir, handle)?;
        log::debug!("job {} finished with {:?}", handle, status.code);

        let report = self.workdir.join(handle.report_file());
        match parse_orca_report(&report, identifier, &self.options) {
            Ok(props) => {
                self.logs.record_success(handle, identifier)?;
                Ok(JobOutcome::Parsed(props))
            }
            Err(reason) => {
                log::info!("job {} ({}) unusable: {}", handle, identifier, reason);
                self.logs.record_failure(handle, identifier, &reason)?;
                Ok(JobOutcome::Failed(reason))
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::jobs::input::tests::FixedEmbedder;
    use crate::jobs::runner::RunStatus;
    use crate::parsers::orca_out::tests::{utf16le_bytes, WATER_REPORT};
    use std::path::Path;

    /// 按作业编号写出预设输出的测试执行器（UTF-16LE 带 BOM）
    pub(crate) struct ScriptedRunner {
        pub reports: Vec<String>,
    }

    impl JobRunner for ScriptedRunner {
        fn run(&self, workdir: &Path, handle: JobHandle) -> Result<RunStatus> {
            assert!(workdir.join(handle.input_file()).exists());
            let text = self.reports.get(handle.0).cloned().unwrap_or_default();
            let bytes = if text.is_empty() {
                Vec::new()
            } else {
                utf16le_bytes(&text, true)
            };
            std::fs::write(workdir.join(handle.report_file()), bytes).unwrap();
            Ok(RunStatus {
                code: Some(if text.is_empty() { 1 } else { 0 }),
            })
        }
    }

    fn orchestrator(
        dir: &Path,
        reports: Vec<String>,
    ) -> Orchestrator<FixedEmbedder, ScriptedRunner> {
        Orchestrator::new(
            InputBuilder::new(FixedEmbedder),
            ScriptedRunner { reports },
            dir,
            ParseOptions::default(),
            OutcomeLogs::in_dir(dir, false),
        )
    }

    #[test]
    fn test_success_goes_to_done_log() {
        let dir = tempfile::tempdir().unwrap();
        let orch = orchestrator(dir.path(), vec![WATER_REPORT.to_string()]);

        match orch.process(JobHandle(0), "O").unwrap() {
            JobOutcome::Parsed(props) => assert_eq!(props.identifier, "O"),
            JobOutcome::Failed(reason) => panic!("unexpected failure: {reason}"),
        }
        let done = std::fs::read_to_string(dir.path().join("done.log")).unwrap();
        assert_eq!(done, "0 O\n");
        assert!(!dir.path().join("undone.log").exists());
    }

    #[test]
    fn test_empty_report_goes_to_undone_log() {
        let dir = tempfile::tempdir().unwrap();
        let orch = orchestrator(dir.path(), vec![String::new()]);

        let outcome = orch.process(JobHandle(0), "C").unwrap();
        assert!(matches!(outcome, JobOutcome::Failed(_)));
        let undone = std::fs::read_to_string(dir.path().join("undone.log")).unwrap();
        assert_eq!(undone, "0 C\n");
        assert!(!dir.path().join("done.log").exists());
    }

    #[test]
    fn test_generation_failure_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let orch = orchestrator(dir.path(), vec![WATER_REPORT.to_string()]);

        assert!(orch.process(JobHandle(0), "C((").is_err());
        assert!(!dir.path().join("done.log").exists());
        assert!(!dir.path().join("undone.log").exists());
    }
}
