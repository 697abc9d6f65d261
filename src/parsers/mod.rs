//! # 解析器模块
//!
//! 提供 ORCA 输出、SMILES 和 XYZ 坐标的解析器。
//!
//! ## 依赖关系
//! - 被 `jobs/`, `batch/` 和 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: orca_out, rules, smiles, xyz

pub mod orca_out;
pub mod rules;
pub mod smiles;
pub mod xyz;

pub use orca_out::{encoding_from_label, parse_orca_report, ParseOptions, Strictness};
