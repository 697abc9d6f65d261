//! # 数据模型模块
//!
//! 定义分子输入和 ORCA 性质输出的数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `jobs/`, `batch/` 和 `commands/` 使用
//! - 子模块: molecule, properties

pub mod molecule;
pub mod properties;

pub use molecule::{Atom, ElectronicState, Geometry, JobHandle, MoleculeSpec};
pub use properties::{Property, PropertyMap};
