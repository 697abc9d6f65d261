//! # 批量处理模块
//!
//! 把 SMILES 列表串行送入 ORCA 并汇总结果。
//!
//! ## 功能
//! - 单分子编排（生成 → 计算 → 解析）
//! - 成功/失败日志
//! - 结果表增量持久化
//! - 已有输出文件的收集
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `jobs/`, `parsers/`
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod driver;
pub mod logs;
pub mod molecules;
pub mod orchestrator;
pub mod table;

pub use collector::ReportCollector;
pub use driver::BatchDriver;
pub use logs::{read_log, OutcomeLogs};
pub use molecules::read_molecule_list;
pub use orchestrator::Orchestrator;
pub use table::{write_table, TABLE_FILE};
