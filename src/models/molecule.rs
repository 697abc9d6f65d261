//! # 分子数据模型
//!
//! ORCA 输入所需的分子信息：三维坐标、形式电荷、自旋多重度。
//!
//! ## 依赖关系
//! - 被 `parsers/xyz.rs`, `parsers/smiles.rs` 构造
//! - 被 `jobs/input.rs` 使用

use serde::{Deserialize, Serialize};

/// 作业编号：按提交顺序分配，同时作为 `.inp` / `.out` 文件名
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct JobHandle(pub usize);

impl JobHandle {
    pub fn input_file(self) -> String {
        format!("{}.inp", self.0)
    }

    pub fn report_file(self) -> String {
        format!("{}.out", self.0)
    }
}

impl std::fmt::Display for JobHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 原子（笛卡尔坐标，单位 Å）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    pub element: String,
    pub position: [f64; 3],
}

impl Atom {
    pub fn new(element: impl Into<String>, position: [f64; 3]) -> Self {
        Atom {
            element: element.into(),
            position,
        }
    }
}

/// 三维构型
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub atoms: Vec<Atom>,
}

impl Geometry {
    pub fn new(atoms: Vec<Atom>) -> Self {
        Geometry { atoms }
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// 坐标块：每行 "元素 x y z"，不含首尾标记行
    pub fn coordinate_block(&self) -> String {
        self.atoms
            .iter()
            .map(|a| {
                format!(
                    "{:<2} {:>14.8} {:>14.8} {:>14.8}",
                    a.element, a.position[0], a.position[1], a.position[2]
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// 从结构标识推导出的电子信息
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ElectronicState {
    /// 净形式电荷
    pub charge: i32,
    /// 未成对电子数
    pub unpaired_electrons: u32,
}

impl ElectronicState {
    /// 自旋多重度 2S+1 = 未成对电子数 + 1
    pub fn multiplicity(&self) -> u32 {
        self.unpaired_electrons + 1
    }
}

/// 待计算的分子
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoleculeSpec {
    pub identifier: String,
    pub geometry: Geometry,
    pub state: ElectronicState,
}
