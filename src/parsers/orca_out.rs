//! # ORCA 输出解析器
//!
//! 单遍、逐行扫描 ORCA 的文本输出，提取 HOMO/LUMO、偶极矩、极化率、
//! 热力学量和转动常数。
//!
//! ## 扫描模型
//! - 两个状态位 `in_section` / `in_subsection` 决定规则是否生效
//! - 每一行按 `rules::RULES` 的顺序求值，无回溯、无前瞻
//! - 文件以流方式解码（默认 UTF-16，BOM 优先），只保留当前行
//!
//! ## 依赖关系
//! - 被 `batch/orchestrator.rs`, `commands/parse.rs`, `commands/collect.rs` 使用
//! - 使用 `parsers/rules.rs`, `models/properties.rs`
//! - 使用 `encoding_rs_io` 流式解码

use crate::error::{OrcanizerError, ParseFailure, Result};
use crate::models::{Property, PropertyMap};
use crate::parsers::rules::{
    Action, Gate, Rule, Trigger, OCCUPATION_TOKEN, ORBITAL_EH_TOKEN, ORBITAL_EV_TOKEN, RULES,
};

use encoding_rs::Encoding;
use encoding_rs_io::DecodeReaderBytesBuilder;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// 对缺失性质的容忍程度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// 所有性质都必须出现
    #[default]
    Strict,
    /// 至少提取到一个性质即可
    Lenient,
}

/// 解析选项
#[derive(Debug, Clone, Copy)]
pub struct ParseOptions {
    /// 输出文件编码；带 BOM 时以 BOM 为准
    pub encoding: &'static Encoding,
    pub strictness: Strictness,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            encoding: encoding_rs::UTF_16LE,
            strictness: Strictness::Strict,
        }
    }
}

/// 由编码标签（如 "utf-16", "utf-8"）查找编码
pub fn encoding_from_label(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| OrcanizerError::UnknownEncoding(label.to_string()))
}

/// 解析 ORCA 输出文件
pub fn parse_orca_report(
    path: &Path,
    identifier: &str,
    options: &ParseOptions,
) -> std::result::Result<PropertyMap, ParseFailure> {
    let file = File::open(path)?;
    let decoder = DecodeReaderBytesBuilder::new()
        .encoding(Some(options.encoding))
        .bom_override(true)
        .build(file);

    log::debug!(
        "parsing {} as {} for '{}'",
        path.display(),
        options.encoding.name(),
        identifier
    );
    parse_lines(BufReader::new(decoder).lines(), identifier, options.strictness)
}

/// 解析已解码的输出文本
pub fn parse_orca_content(
    content: &str,
    identifier: &str,
    strictness: Strictness,
) -> std::result::Result<PropertyMap, ParseFailure> {
    parse_lines(content.lines().map(|l| Ok(l.to_string())), identifier, strictness)
}

fn parse_lines<I>(
    lines: I,
    identifier: &str,
    strictness: Strictness,
) -> std::result::Result<PropertyMap, ParseFailure>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    let mut scanner = ReportScanner::new(identifier);
    for (idx, line) in lines.into_iter().enumerate() {
        scanner.feed(idx + 1, &line?)?;
    }
    scanner.finish(strictness)
}

/// 规则 + 归一化后的触发短语
struct CompiledRule {
    rule: Rule,
    phrase: Option<String>,
}

/// 触发短语经 UTF-16 编码再解码，与输出文件走同一条解码路径
fn normalize_phrase(phrase: &str) -> String {
    let units: Vec<u16> = phrase.encode_utf16().collect();
    String::from_utf16_lossy(&units)
}

/// 逐行状态机
pub struct ReportScanner {
    rules: Vec<CompiledRule>,
    in_section: bool,
    in_subsection: bool,
    /// (E(Eh), E(eV))
    homo: Option<(String, String)>,
    lumo: Option<(String, String)>,
    props: PropertyMap,
}

impl ReportScanner {
    pub fn new(identifier: &str) -> Self {
        let rules = RULES
            .iter()
            .map(|rule| CompiledRule {
                rule: *rule,
                phrase: match rule.trigger {
                    Trigger::Phrase(p) => Some(normalize_phrase(p)),
                    Trigger::AnyLine => None,
                },
            })
            .collect();

        ReportScanner {
            rules,
            in_section: false,
            in_subsection: false,
            homo: None,
            lumo: None,
            props: PropertyMap::new(identifier),
        }
    }

    /// 处理一行
    pub fn feed(&mut self, line_no: usize, line: &str) -> std::result::Result<(), ParseFailure> {
        let tokens: Vec<&str> = line.split_whitespace().collect();

        for idx in 0..self.rules.len() {
            let rule = self.rules[idx].rule;
            let triggered = match &self.rules[idx].phrase {
                Some(phrase) => line.contains(phrase.as_str()),
                None => true,
            };
            if !triggered || !self.gate_open(rule.gate) {
                continue;
            }

            match rule.action {
                Action::OpenSection { skip_line } => {
                    log::trace!("line {}: enter '{}'", line_no, rule.name());
                    self.in_section = true;
                    if skip_line {
                        return Ok(());
                    }
                }
                Action::OpenSubsection => {
                    self.in_subsection = true;
                    return Ok(());
                }
                Action::OrbitalRow => self.orbital_row(line_no, &tokens)?,
                Action::Extract {
                    fields,
                    closes_section,
                } => {
                    for (property, index) in fields {
                        let value = token(&tokens, *index, line_no, rule.name())?;
                        log::trace!("line {}: {} = {}", line_no, property, value);
                        self.props.set(*property, value);
                    }
                    if closes_section {
                        self.in_section = false;
                    }
                }
            }
        }

        Ok(())
    }

    fn gate_open(&self, gate: Gate) -> bool {
        match gate {
            Gate::Always => true,
            Gate::InSection => self.in_section,
            Gate::InSubsection => self.in_section && self.in_subsection,
        }
    }

    /// 轨道表的一行: `NO OCC E(Eh) E(eV)`
    fn orbital_row(&mut self, line_no: usize, tokens: &[&str]) -> std::result::Result<(), ParseFailure> {
        let occ_token = token(tokens, OCCUPATION_TOKEN, line_no, "orbital row")?;
        let occupation: f64 = occ_token
            .parse()
            .map_err(|_| ParseFailure::BadOccupation {
                line: line_no,
                token: occ_token.to_string(),
            })?;
        let energy_eh = token(tokens, ORBITAL_EH_TOKEN, line_no, "orbital row")?;
        let energy_ev = token(tokens, ORBITAL_EV_TOKEN, line_no, "orbital row")?;
        let energies = (energy_eh.to_string(), energy_ev.to_string());

        if occupation > 0.0 {
            self.homo = Some(energies.clone());
            self.lumo = Some(energies);
        } else {
            log::trace!("line {}: first virtual orbital, leaving orbital table", line_no);
            self.lumo = Some(energies);
            self.in_section = false;
            self.in_subsection = false;
        }

        // HOMO 可能来自之前的轨道表（优化的上一轮）
        let (homo_eh, homo_ev) = self
            .homo
            .clone()
            .ok_or(ParseFailure::NoOccupiedOrbital { line: line_no })?;
        if let Some((lumo_eh, lumo_ev)) = self.lumo.clone() {
            self.props.set(Property::LumoEh, lumo_eh);
            self.props.set(Property::LumoEv, lumo_ev);
        }
        self.props.set(Property::HomoEh, homo_eh);
        self.props.set(Property::HomoEv, homo_ev);

        Ok(())
    }

    /// 结束扫描，检查必需性质
    pub fn finish(self, strictness: Strictness) -> std::result::Result<PropertyMap, ParseFailure> {
        let missing = self.props.missing();
        let complete = match strictness {
            Strictness::Strict => missing.is_empty(),
            Strictness::Lenient => !self.props.is_empty(),
        };

        if complete {
            Ok(self.props)
        } else {
            Err(ParseFailure::MissingProperties(
                missing
                    .iter()
                    .map(|p| p.column())
                    .collect::<Vec<_>>()
                    .join(", "),
            ))
        }
    }
}

fn token<'a>(
    tokens: &[&'a str],
    index: usize,
    line_no: usize,
    phrase: &'static str,
) -> std::result::Result<&'a str, ParseFailure> {
    tokens
        .get(index)
        .copied()
        .ok_or(ParseFailure::MissingToken {
            line: line_no,
            phrase,
            index,
            found: tokens.len(),
        })
}
