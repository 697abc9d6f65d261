//! # ORCA 性质数据模型
//!
//! 一个分子从 ORCA 输出中提取到的性质集合。数值保持原文本格式，
//! 不做浮点转换，保证写入 CSV 时与 ORCA 输出逐字一致。
//!
//! ## 依赖关系
//! - 被 `parsers/orca_out.rs`, `parsers/rules.rs` 填充
//! - 被 `batch/table.rs`, `commands/` 读取

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 标识符列名
pub const IDENTIFIER_COLUMN: &str = "smiles";

/// 可提取的性质（声明顺序即 CSV 列顺序）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Property {
    LumoEh,
    LumoEv,
    HomoEh,
    HomoEv,
    DipoleMoment,
    Polarizability,
    ThermalEnergy,
    Enthalpy,
    Entropy,
    GibbsFreeEnergy,
    RotationalA,
    RotationalB,
    RotationalC,
}

impl Property {
    pub const ALL: [Property; 13] = [
        Property::LumoEh,
        Property::LumoEv,
        Property::HomoEh,
        Property::HomoEv,
        Property::DipoleMoment,
        Property::Polarizability,
        Property::ThermalEnergy,
        Property::Enthalpy,
        Property::Entropy,
        Property::GibbsFreeEnergy,
        Property::RotationalA,
        Property::RotationalB,
        Property::RotationalC,
    ];

    /// CSV 列名
    pub fn column(self) -> &'static str {
        match self {
            Property::LumoEh => "LUMO (Eh)",
            Property::LumoEv => "LUMO (eV)",
            Property::HomoEh => "HOMO (Eh)",
            Property::HomoEv => "HOMO (eV)",
            Property::DipoleMoment => "Dipole Moment",
            Property::Polarizability => "polarizability",
            Property::ThermalEnergy => "U",
            Property::Enthalpy => "H",
            Property::Entropy => "S",
            Property::GibbsFreeEnergy => "G",
            Property::RotationalA => "A",
            Property::RotationalB => "B",
            Property::RotationalC => "C",
        }
    }

    /// CSV 表头（标识符 + 全部性质）
    pub fn header() -> Vec<&'static str> {
        std::iter::once(IDENTIFIER_COLUMN)
            .chain(Property::ALL.iter().map(|p| p.column()))
            .collect()
    }
}

impl std::fmt::Display for Property {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.column())
    }
}

/// 单个分子的性质映射
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyMap {
    /// 分子标识符 (SMILES)
    pub identifier: String,

    /// 已提取的性质（原文本）
    values: BTreeMap<Property, String>,
}

impl PropertyMap {
    pub fn new(identifier: impl Into<String>) -> Self {
        PropertyMap {
            identifier: identifier.into(),
            values: BTreeMap::new(),
        }
    }

    pub fn set(&mut self, property: Property, value: impl Into<String>) {
        self.values.insert(property, value.into());
    }

    pub fn get(&self, property: Property) -> Option<&str> {
        self.values.get(&property).map(String::as_str)
    }

    /// 以浮点数读取（仅用于显示和派生量）
    pub fn value_f64(&self, property: Property) -> Option<f64> {
        self.get(property)?.parse().ok()
    }

    /// HOMO-LUMO 能隙 (eV)
    pub fn gap_ev(&self) -> Option<f64> {
        Some(self.value_f64(Property::LumoEv)? - self.value_f64(Property::HomoEv)?)
    }

    pub fn contains(&self, property: Property) -> bool {
        self.values.contains_key(&property)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// 缺失的性质列表
    pub fn missing(&self) -> Vec<Property> {
        Property::ALL
            .iter()
            .copied()
            .filter(|p| !self.contains(*p))
            .collect()
    }

    /// 按表头顺序生成一行 CSV 记录，缺失项为空字符串
    pub fn to_record(&self) -> Vec<&str> {
        std::iter::once(self.identifier.as_str())
            .chain(Property::ALL.iter().map(|p| self.get(*p).unwrap_or("")))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_order() {
        let header = Property::header();
        assert_eq!(header.len(), 14);
        assert_eq!(header[0], "smiles");
        assert_eq!(header[1], "LUMO (Eh)");
        assert_eq!(header[5], "Dipole Moment");
        assert_eq!(header[13], "C");
    }

    #[test]
    fn test_record_fills_missing_with_empty() {
        let mut map = PropertyMap::new("CCO");
        map.set(Property::HomoEv, "-7.01");
        map.set(Property::LumoEv, "0.95");

        let record = map.to_record();
        assert_eq!(record.len(), 14);
        assert_eq!(record[0], "CCO");
        assert_eq!(record[2], "0.95");
        assert_eq!(record[4], "-7.01");
        assert_eq!(record[6], "");
        assert_eq!(map.missing().len(), 11);
    }

    #[test]
    fn test_gap() {
        let mut map = PropertyMap::new("C");
        assert!(map.gap_ev().is_none());
        map.set(Property::HomoEv, "-3.35");
        map.set(Property::LumoEv, "1.22");
        let gap = map.gap_ev().unwrap();
        assert!((gap - 4.57).abs() < 1e-9);
    }
}
