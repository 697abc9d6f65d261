//! # 作业模块
//!
//! 单个分子的外部协作者：构型生成、输入文件、ORCA 执行。
//!
//! ## 依赖关系
//! - 被 `batch/` 和 `commands/` 使用
//! - 子模块: embed, input, runner

pub mod embed;
pub mod input;
pub mod runner;

pub use embed::{Embedder, OpenBabelEmbedder};
pub use input::InputBuilder;
pub use runner::{JobRunner, OrcaRunner};
