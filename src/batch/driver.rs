//! # 批处理驱动
//!
//! 按输入顺序逐个处理分子，作业编号 0..N-1 即在列表中的位置。
//! 严格串行：每个 ORCA 作业阻塞直到结束，没有超时。
//!
//! ## 依赖关系
//! - 被 `commands/run.rs` 使用
//! - 使用 `batch/orchestrator.rs`, `batch/table.rs`
//! - 使用 `utils/progress.rs` 显示进度

use crate::batch::orchestrator::{JobOutcome, Orchestrator};
use crate::batch::table::ResultTable;
use crate::error::{ParseFailure, Result};
use crate::jobs::{Embedder, JobRunner};
use crate::models::{JobHandle, PropertyMap};
use crate::utils::{output, progress};

use std::path::PathBuf;

/// 失败的作业
#[derive(Debug)]
pub struct FailedJob {
    pub handle: JobHandle,
    pub identifier: String,
    pub reason: ParseFailure,
}

/// 批处理结果
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// 成功分子的性质，按提交顺序
    pub rows: Vec<PropertyMap>,
    pub succeeded: Vec<JobHandle>,
    pub failed: Vec<FailedJob>,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }
}

/// 批处理驱动
pub struct BatchDriver<E: Embedder, R: JobRunner> {
    orchestrator: Orchestrator<E, R>,
    /// None 表示不保存结果表
    table_path: Option<PathBuf>,
    show_progress: bool,
}

impl<E: Embedder, R: JobRunner> BatchDriver<E, R> {
    pub fn new(orchestrator: Orchestrator<E, R>) -> Self {
        BatchDriver {
            orchestrator,
            table_path: None,
            show_progress: true,
        }
    }

    /// 设置结果表保存路径
    pub fn save_to(mut self, path: Option<PathBuf>) -> Self {
        self.table_path = path;
        self
    }

    pub fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// 处理全部分子
    pub fn run(&self, molecules: &[String]) -> Result<BatchSummary> {
        let mut table = match &self.table_path {
            Some(path) => ResultTable::create(path)?,
            None => ResultTable::in_memory(),
        };

        let pb = progress::create_job_bar(molecules.len() as u64, self.show_progress);

        let mut summary = BatchSummary::default();

        for (nb, smiles) in molecules.iter().enumerate() {
            let handle = JobHandle(nb);
            pb.set_message(format!("{} {}", handle, smiles));

            match self.orchestrator.process(handle, smiles)? {
                JobOutcome::Parsed(props) => {
                    pb.suspend(|| output::print_job(handle, smiles, None));
                    table.push(props)?;
                    summary.succeeded.push(handle);
                }
                JobOutcome::Failed(reason) => {
                    pb.suspend(|| output::print_job(handle, smiles, Some(reason.code())));
                    log::info!("job {} ({}) failed: {}", handle, smiles, reason);
                    summary.failed.push(FailedJob {
                        handle,
                        identifier: smiles.clone(),
                        reason,
                    });
                }
            }

            pb.inc(1);
        }

        pb.finish_and_clear();
        if table.is_empty() && !molecules.is_empty() {
            log::warn!("no molecule produced a usable report");
        }
        log::debug!("{} of {} molecules in the result table", table.len(), molecules.len());
        summary.rows = table.into_rows();
        Ok(summary)
    }
}
