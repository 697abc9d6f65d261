//! # XYZ 坐标解析器
//!
//! 解析嵌入程序输出的 XYZ 文本：第 1 行原子数，第 2 行注释，其后每行
//! `元素 x y z`。
//!
//! ## 依赖关系
//! - 被 `jobs/embed.rs` 使用
//! - 使用 `models/molecule.rs`

use crate::error::{OrcanizerError, Result};
use crate::models::{Atom, Geometry};

/// 解析 XYZ 文本（可能包含多帧时只取第一帧）
pub fn parse_xyz_content(content: &str) -> Result<Geometry> {
    let mut lines = content.lines();

    let count_line = lines
        .next()
        .ok_or_else(|| OrcanizerError::InvalidXyz("empty input".to_string()))?;
    let count: usize = count_line.trim().parse().map_err(|_| {
        OrcanizerError::InvalidXyz(format!("invalid atom count '{}'", count_line.trim()))
    })?;

    // 注释行
    lines.next();

    let mut atoms = Vec::with_capacity(count);
    for (i, line) in lines.take(count).enumerate() {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(OrcanizerError::InvalidXyz(format!(
                "atom line {} has {} fields: '{}'",
                i + 1,
                parts.len(),
                line.trim()
            )));
        }

        let mut position = [0.0; 3];
        for (k, value) in parts[1..4].iter().enumerate() {
            position[k] = value.parse().map_err(|_| {
                OrcanizerError::InvalidXyz(format!("invalid coordinate '{}' on atom {}", value, i + 1))
            })?;
        }
        atoms.push(Atom::new(parts[0], position));
    }

    if atoms.len() != count {
        return Err(OrcanizerError::InvalidXyz(format!(
            "expected {} atoms, found {}",
            count,
            atoms.len()
        )));
    }
    if atoms.is_empty() {
        return Err(OrcanizerError::InvalidXyz("no atoms".to_string()));
    }

    Ok(Geometry::new(atoms))
}
