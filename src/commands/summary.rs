//! # 结果表格显示
//!
//! 终端中以表格形式展示提取的性质。
//!
//! ## 依赖关系
//! - 被 `commands/run.rs`, `commands/parse.rs`, `commands/collect.rs` 使用
//! - 使用 `tabled` crate

use crate::models::{Property, PropertyMap};
use crate::utils::output;

use tabled::{Table, Tabled};

/// 批处理结果行
#[derive(Debug, Clone, Tabled)]
struct SummaryRow {
    #[tabled(rename = "SMILES")]
    smiles: String,
    #[tabled(rename = "HOMO (eV)")]
    homo: String,
    #[tabled(rename = "LUMO (eV)")]
    lumo: String,
    #[tabled(rename = "Gap (eV)")]
    gap: String,
    #[tabled(rename = "Dipole (D)")]
    dipole: String,
    #[tabled(rename = "G (Eh)")]
    gibbs: String,
}

impl SummaryRow {
    fn from_map(map: &PropertyMap) -> Self {
        let cell = |p: Property| map.get(p).unwrap_or("-").to_string();
        SummaryRow {
            smiles: map.identifier.clone(),
            homo: cell(Property::HomoEv),
            lumo: cell(Property::LumoEv),
            gap: map
                .gap_ev()
                .map(|g| format!("{:.4}", g))
                .unwrap_or_else(|| "-".to_string()),
            dipole: cell(Property::DipoleMoment),
            gibbs: cell(Property::GibbsFreeEnergy),
        }
    }
}

/// 单个分子的全部性质
#[derive(Debug, Clone, Tabled)]
struct PropertyRow {
    #[tabled(rename = "Property")]
    name: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

/// 打印前 `limit` 个分子的主要性质
pub fn print_property_table(rows: &[PropertyMap], limit: usize) {
    if rows.is_empty() {
        output::print_warning("No molecule was processed successfully.");
        return;
    }

    let shown: Vec<SummaryRow> = rows.iter().take(limit).map(SummaryRow::from_map).collect();
    output::print_header(&format!("Properties ({} of {})", shown.len(), rows.len()));
    println!("{}", Table::new(&shown));
}

/// 打印单个分子的全部性质
pub fn print_properties(map: &PropertyMap) {
    let rows: Vec<PropertyRow> = Property::ALL
        .iter()
        .map(|p| PropertyRow {
            name: p.column(),
            value: map.get(*p).unwrap_or("-").to_string(),
        })
        .collect();

    output::print_header(&map.identifier);
    println!("{}", Table::new(&rows));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_row_formats_gap() {
        let mut map = PropertyMap::new("O");
        map.set(Property::HomoEv, "-3.35");
        map.set(Property::LumoEv, "1.22");
        let row = SummaryRow::from_map(&map);
        assert_eq!(row.gap, "4.5700");
        assert_eq!(row.dipole, "-");

        let table = Table::new(&[row]).to_string();
        assert!(table.contains("Gap (eV)"));
        assert!(table.contains("4.5700"));
    }
}
