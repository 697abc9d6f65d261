//! # SMILES 电子态推导
//!
//! 从 SMILES 字符串计算净形式电荷和未成对电子数（用于 ORCA 的
//! `* xyz charge multiplicity` 行）。不构建完整分子图，只记录每个原子的
//! 键级总和。
//!
//! ## 规则
//! - 形式电荷 = 所有方括号原子电荷之和
//! - 只有方括号原子可能带未成对电子（有机子集原子的隐式氢总是补满价态）
//! - 芳香键按 1.5 计，价态取下整
//!
//! ## 依赖关系
//! - 被 `jobs/input.rs` 使用
//! - 使用 `regex` 解析方括号原子

use crate::error::{OrcanizerError, Result};
use crate::models::ElectronicState;

use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// 键级，以半键为单位（芳香键 = 3）
type HalfBonds = u32;

const SINGLE: HalfBonds = 2;
const AROMATIC: HalfBonds = 3;

/// 方括号原子: [同位素 元素 手性 H数 电荷 :映射号]
fn bracket_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^\[(\d*)(\*|[A-Z][a-z]?|[a-z][a-z]?)(@(?:@|TH[12]|AL[12]|SP[1-3]|TB\d{1,2}|OH\d{1,2})?)?(H\d*)?([+-]+\d*)?(:\d+)?\]$",
        )
        .expect("bracket atom regex is valid")
    })
}

/// 主族元素的价电子数；过渡金属等不在表中，按无自由基处理
fn outer_electrons(element: &str) -> Option<i32> {
    let n = match element {
        "H" | "Li" | "Na" | "K" | "Rb" | "Cs" => 1,
        "Be" | "Mg" | "Ca" | "Sr" | "Ba" => 2,
        "B" | "Al" | "Ga" | "In" | "Tl" => 3,
        "C" | "Si" | "Ge" | "Sn" | "Pb" => 4,
        "N" | "P" | "As" | "Sb" | "Bi" => 5,
        "O" | "S" | "Se" | "Te" => 6,
        "F" | "Cl" | "Br" | "I" => 7,
        _ => return None,
    };
    Some(n)
}

#[derive(Debug, Clone)]
struct AtomNode {
    element: String,
    aromatic: bool,
    /// 仅方括号原子有显式氢数和电荷
    bracket: bool,
    hydrogens: u32,
    charge: i32,
    bond_halves: HalfBonds,
}

impl AtomNode {
    fn organic(element: &str, aromatic: bool) -> Self {
        AtomNode {
            element: element.to_string(),
            aromatic,
            bracket: false,
            hydrogens: 0,
            charge: 0,
            bond_halves: 0,
        }
    }

    /// 未成对电子数（八隅律）
    fn radical_electrons(&self) -> u32 {
        if !self.bracket {
            return 0;
        }
        let n_outer = match outer_electrons(&self.element) {
            Some(n) => n,
            None => return 0,
        };
        let base: i64 = if self.element == "H" { 2 } else { 8 };
        let n_outer = i64::from(n_outer);
        let charge = i64::from(self.charge);
        let valence = i64::from(self.bond_halves / 2) + i64::from(self.hydrogens);

        let late = (base - n_outer - valence + charge).max(0);
        let early = n_outer - valence - charge;
        let radicals = if early >= 0 { late.min(early) } else { late };
        u32::try_from(radicals).unwrap_or(u32::MAX)
    }
}

/// 逐字节扫描的 SMILES 解析器
struct SmilesScanner<'a> {
    smiles: &'a str,
    input: &'a [u8],
    index: usize,
    atoms: Vec<AtomNode>,
    prev: Option<usize>,
    branches: Vec<Option<usize>>,
    pending_bond: Option<HalfBonds>,
    rings: HashMap<u32, (usize, Option<HalfBonds>)>,
}

impl<'a> SmilesScanner<'a> {
    fn new(smiles: &'a str) -> Self {
        SmilesScanner {
            smiles,
            input: smiles.as_bytes(),
            index: 0,
            atoms: Vec::new(),
            prev: None,
            branches: Vec::new(),
            pending_bond: None,
            rings: HashMap::new(),
        }
    }

    fn error(&self, reason: impl Into<String>) -> OrcanizerError {
        OrcanizerError::InvalidSmiles {
            smiles: self.smiles.to_string(),
            position: self.index,
            reason: reason.into(),
        }
    }

    fn scan(mut self) -> Result<Vec<AtomNode>> {
        if self.input.is_empty() {
            return Err(self.error("empty SMILES"));
        }

        while self.index < self.input.len() {
            let c = self.input[self.index];
            match c {
                b'(' => {
                    if self.prev.is_none() {
                        return Err(self.error("branch opened without an atom"));
                    }
                    self.branches.push(self.prev);
                    self.index += 1;
                }
                b')' => {
                    if self.pending_bond.is_some() {
                        return Err(self.error("bond without a following atom"));
                    }
                    self.prev = self
                        .branches
                        .pop()
                        .ok_or_else(|| self.error("unmatched closing parenthesis"))?;
                    self.index += 1;
                }
                b'.' => {
                    self.prev = None;
                    self.index += 1;
                }
                b'-' | b'/' | b'\\' => self.bond(SINGLE)?,
                b'=' => self.bond(4)?,
                b'#' => self.bond(6)?,
                b'$' => self.bond(8)?,
                b':' => self.bond(AROMATIC)?,
                b'0'..=b'9' => {
                    let ring = (c - b'0') as u32;
                    self.index += 1;
                    self.ring_closure(ring)?;
                }
                b'%' => {
                    let digits = self
                        .smiles
                        .get(self.index + 1..self.index + 3)
                        .filter(|d| d.bytes().all(|b| b.is_ascii_digit()))
                        .ok_or_else(|| self.error("expected two digits after '%'"))?;
                    let ring: u32 = digits
                        .parse()
                        .map_err(|_| self.error("invalid ring number"))?;
                    self.index += 3;
                    self.ring_closure(ring)?;
                }
                b'[' => {
                    let atom = self.bracket_atom()?;
                    self.add_atom(atom);
                }
                _ => {
                    let atom = self.organic_atom()?;
                    self.add_atom(atom);
                }
            }
        }

        if !self.branches.is_empty() {
            return Err(self.error("unclosed branch"));
        }
        if let Some(ring) = self.rings.keys().min() {
            return Err(self.error(format!("ring {} was not closed", ring)));
        }
        if self.pending_bond.is_some() {
            return Err(self.error("bond without a following atom"));
        }

        Ok(self.atoms)
    }

    fn bond(&mut self, halves: HalfBonds) -> Result<()> {
        if self.prev.is_none() || self.pending_bond.is_some() {
            return Err(self.error("unexpected bond symbol"));
        }
        self.pending_bond = Some(halves);
        self.index += 1;
        Ok(())
    }

    fn connect(&mut self, a: usize, b: usize, explicit: Option<HalfBonds>) {
        let halves = explicit.unwrap_or(if self.atoms[a].aromatic && self.atoms[b].aromatic {
            AROMATIC
        } else {
            SINGLE
        });
        self.atoms[a].bond_halves += halves;
        self.atoms[b].bond_halves += halves;
    }

    fn add_atom(&mut self, atom: AtomNode) {
        let idx = self.atoms.len();
        self.atoms.push(atom);
        if let Some(prev) = self.prev {
            let bond = self.pending_bond.take();
            self.connect(prev, idx, bond);
        }
        self.prev = Some(idx);
    }

    fn ring_closure(&mut self, ring: u32) -> Result<()> {
        let current = self
            .prev
            .ok_or_else(|| self.error("ring closure without an atom"))?;
        let bond = self.pending_bond.take();

        match self.rings.remove(&ring) {
            Some((partner, opening_bond)) => {
                if partner == current {
                    return Err(self.error("ring closes on the same atom"));
                }
                self.connect(partner, current, bond.or(opening_bond));
            }
            None => {
                self.rings.insert(ring, (current, bond));
            }
        }
        Ok(())
    }

    fn organic_atom(&mut self) -> Result<AtomNode> {
        let rest = &self.smiles[self.index..];
        let (symbol, aromatic, len) = if rest.starts_with("Cl") {
            ("Cl", false, 2)
        } else if rest.starts_with("Br") {
            ("Br", false, 2)
        } else {
            match self.input[self.index] {
                b'B' => ("B", false, 1),
                b'C' => ("C", false, 1),
                b'N' => ("N", false, 1),
                b'O' => ("O", false, 1),
                b'P' => ("P", false, 1),
                b'S' => ("S", false, 1),
                b'F' => ("F", false, 1),
                b'I' => ("I", false, 1),
                b'*' => ("*", false, 1),
                b'b' => ("B", true, 1),
                b'c' => ("C", true, 1),
                b'n' => ("N", true, 1),
                b'o' => ("O", true, 1),
                b'p' => ("P", true, 1),
                b's' => ("S", true, 1),
                other => {
                    return Err(self.error(format!(
                        "'{}' is not a recognized atom",
                        other as char
                    )))
                }
            }
        };
        self.index += len;
        Ok(AtomNode::organic(symbol, aromatic))
    }

    fn bracket_atom(&mut self) -> Result<AtomNode> {
        let close = self.smiles[self.index..]
            .find(']')
            .ok_or_else(|| self.error("expected a closing bracket"))?;
        let text = &self.smiles[self.index..self.index + close + 1];

        let caps = bracket_regex()
            .captures(text)
            .ok_or_else(|| self.error(format!("malformed bracket atom '{}'", text)))?;

        let raw = &caps[2];
        let aromatic = raw.starts_with(|c: char| c.is_ascii_lowercase());
        let mut element = raw.to_string();
        if aromatic {
            element[..1].make_ascii_uppercase();
        }

        let hydrogens = match caps.get(4) {
            Some(h) if h.as_str().len() > 1 => h.as_str()[1..]
                .parse::<u8>()
                .map(u32::from)
                .map_err(|_| self.error(format!("hydrogen count '{}' out of range", h.as_str())))?,
            Some(_) => 1,
            None => 0,
        };

        let charge = match caps.get(5) {
            Some(c) => parse_charge(c.as_str())
                .ok_or_else(|| self.error(format!("invalid charge '{}'", c.as_str())))?,
            None => 0,
        };

        self.index += close + 1;
        Ok(AtomNode {
            element,
            aromatic,
            bracket: true,
            hydrogens,
            charge,
            bond_halves: 0,
        })
    }
}

/// "+", "++", "+2", "-", "--", "-3"
///
/// 电荷绝对值不超过 `u8::MAX`，超出时返回 `None`。
fn parse_charge(s: &str) -> Option<i32> {
    let first = s.chars().next()?;
    let sign = if first == '+' { 1 } else { -1 };
    let signs = s.chars().take_while(|c| *c == '+' || *c == '-').count();
    if s[..signs].chars().any(|c| c != first) {
        return None;
    }
    let digits = &s[signs..];
    let magnitude: u8 = if digits.is_empty() {
        u8::try_from(signs).ok()?
    } else if signs == 1 {
        digits.parse().ok()?
    } else {
        return None;
    };
    Some(sign * i32::from(magnitude))
}

/// 从 SMILES 计算净电荷和未成对电子数
pub fn electronic_state(smiles: &str) -> Result<ElectronicState> {
    let atoms = SmilesScanner::new(smiles.trim()).scan()?;

    let out_of_range = |what: &str| OrcanizerError::InvalidSmiles {
        smiles: smiles.to_string(),
        position: 0,
        reason: format!("{} out of range", what),
    };
    let charge = atoms
        .iter()
        .try_fold(0i32, |acc, a| acc.checked_add(a.charge))
        .ok_or_else(|| out_of_range("total charge"))?;
    let unpaired_electrons = atoms
        .iter()
        .try_fold(0u32, |acc, a| acc.checked_add(a.radical_electrons()))
        .ok_or_else(|| out_of_range("unpaired electron count"))?;

    log::debug!(
        "{}: {} atoms, charge {}, {} unpaired electrons",
        smiles,
        atoms.len(),
        charge,
        unpaired_electrons
    );

    Ok(ElectronicState {
        charge,
        unpaired_electrons,
    })
}
