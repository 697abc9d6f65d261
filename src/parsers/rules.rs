//! # ORCA 输出提取规则表
//!
//! 每条规则 = (触发短语, 门控条件, 动作)。扫描器对每一行按表中顺序逐条求值，
//! 因此表本身就是 ORCA 输出格式的契约：换 ORCA 版本时只需核对这张表。
//!
//! | 触发短语 | 门控 | 动作 |
//! |---|---|---|
//! | `ORBITAL ENERGIES` | - | 打开 section，跳过本行剩余规则 |
//! | `E(Eh)` | - | 打开 subsection，跳过本行剩余规则 |
//! | (任意行) | section + subsection | 轨道行 |
//! | `DIPOLE MOMENT` | - | 打开 section |
//! | `Magnitude (Debye)` | section | tokens[3] |
//! | `Isotropic polarizability` | section | tokens[3]，关闭 section |
//! | `INNER ENERGY` | - | 打开 section |
//! | `Total thermal energy` | section | tokens[3] |
//! | `Total Enthalpy` | section | tokens[3] |
//! | `Final entropy term` | section | tokens[4] |
//! | `Final Gibbs` | section | tokens[5] |
//! | `Rotational constants in cm-1:` | section | tokens[4..7] |
//!
//! ## 依赖关系
//! - 被 `parsers/orca_out.rs` 使用
//! - 使用 `models/properties.rs`

use crate::models::Property;

/// 规则触发方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// 行内包含该短语
    Phrase(&'static str),
    /// 每一行都尝试（由门控决定是否生效）
    AnyLine,
}

/// 规则生效前需要满足的扫描状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Always,
    InSection,
    /// section 与 subsection 同时打开
    InSubsection,
}

/// 规则动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// 进入 section；`skip_line` 为真时本行不再匹配后续规则
    OpenSection { skip_line: bool },
    /// 进入 subsection（轨道能量表头），本行不再匹配后续规则
    OpenSubsection,
    /// 轨道能量表中的一行：占据数 > 0 为 HOMO 候选，否则为 LUMO 并结束扫描
    OrbitalRow,
    /// 按空白切分后取固定位置的 token
    Extract {
        fields: &'static [(Property, usize)],
        closes_section: bool,
    },
}

/// 单条提取规则
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub trigger: Trigger,
    pub gate: Gate,
    pub action: Action,
}

impl Rule {
    /// 规则名称（用于错误信息）
    pub fn name(&self) -> &'static str {
        match self.trigger {
            Trigger::Phrase(p) => p,
            Trigger::AnyLine => "orbital row",
        }
    }
}

/// 轨道行中的 token 位置
pub const OCCUPATION_TOKEN: usize = 1;
pub const ORBITAL_EH_TOKEN: usize = 2;
pub const ORBITAL_EV_TOKEN: usize = 3;

pub const RULES: &[Rule] = &[
    Rule {
        trigger: Trigger::Phrase("ORBITAL ENERGIES"),
        gate: Gate::Always,
        action: Action::OpenSection { skip_line: true },
    },
    Rule {
        trigger: Trigger::Phrase("E(Eh)"),
        gate: Gate::Always,
        action: Action::OpenSubsection,
    },
    Rule {
        trigger: Trigger::AnyLine,
        gate: Gate::InSubsection,
        action: Action::OrbitalRow,
    },
    Rule {
        trigger: Trigger::Phrase("DIPOLE MOMENT"),
        gate: Gate::Always,
        action: Action::OpenSection { skip_line: false },
    },
    Rule {
        trigger: Trigger::Phrase("Magnitude (Debye)"),
        gate: Gate::InSection,
        action: Action::Extract {
            fields: &[(Property::DipoleMoment, 3)],
            closes_section: false,
        },
    },
    Rule {
        trigger: Trigger::Phrase("Isotropic polarizability"),
        gate: Gate::InSection,
        action: Action::Extract {
            fields: &[(Property::Polarizability, 3)],
            closes_section: true,
        },
    },
    Rule {
        trigger: Trigger::Phrase("INNER ENERGY"),
        gate: Gate::Always,
        action: Action::OpenSection { skip_line: false },
    },
    Rule {
        trigger: Trigger::Phrase("Total thermal energy"),
        gate: Gate::InSection,
        action: Action::Extract {
            fields: &[(Property::ThermalEnergy, 3)],
            closes_section: false,
        },
    },
    Rule {
        trigger: Trigger::Phrase("Total Enthalpy"),
        gate: Gate::InSection,
        action: Action::Extract {
            fields: &[(Property::Enthalpy, 3)],
            closes_section: false,
        },
    },
    Rule {
        trigger: Trigger::Phrase("Final entropy term"),
        gate: Gate::InSection,
        action: Action::Extract {
            fields: &[(Property::Entropy, 4)],
            closes_section: false,
        },
    },
    Rule {
        trigger: Trigger::Phrase("Final Gibbs"),
        gate: Gate::InSection,
        action: Action::Extract {
            fields: &[(Property::GibbsFreeEnergy, 5)],
            closes_section: false,
        },
    },
    Rule {
        trigger: Trigger::Phrase("Rotational constants in cm-1:"),
        gate: Gate::InSection,
        action: Action::Extract {
            fields: &[
                (Property::RotationalA, 4),
                (Property::RotationalB, 5),
                (Property::RotationalC, 6),
            ],
            closes_section: false,
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_property_has_a_source() {
        for property in Property::ALL {
            let orbital = matches!(
                property,
                Property::HomoEh | Property::HomoEv | Property::LumoEh | Property::LumoEv
            );
            let extracted = RULES.iter().any(|r| match r.action {
                Action::Extract { fields, .. } => fields.iter().any(|(p, _)| *p == property),
                _ => false,
            });
            assert!(orbital || extracted, "{} has no rule", property);
        }
    }

    #[test]
    fn test_orbital_row_follows_its_headers() {
        let pos = |t: Trigger| RULES.iter().position(|r| r.trigger == t).unwrap();
        assert!(pos(Trigger::Phrase("ORBITAL ENERGIES")) < pos(Trigger::AnyLine));
        assert!(pos(Trigger::Phrase("E(Eh)")) < pos(Trigger::AnyLine));
        assert!(pos(Trigger::AnyLine) < pos(Trigger::Phrase("DIPOLE MOMENT")));
    }
}
