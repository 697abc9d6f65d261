//! # 三维构型生成
//!
//! 由 SMILES 生成带氢的三维坐标。默认调用 Open Babel：
//! `obabel -:<smiles> -oxyz --gen3d -h`，从标准输出读取 XYZ。
//!
//! ## 依赖关系
//! - 被 `jobs/input.rs` 使用
//! - 使用 `parsers/xyz.rs`

use crate::error::{OrcanizerError, Result};
use crate::models::Geometry;
use crate::parsers::xyz::parse_xyz_content;

use std::io::ErrorKind;
use std::process::Command;

/// 三维构型生成器
pub trait Embedder {
    fn embed(&self, smiles: &str) -> Result<Geometry>;
}

/// Open Babel 构型生成器
#[derive(Debug, Clone)]
pub struct OpenBabelEmbedder {
    pub executable: String,
}

impl OpenBabelEmbedder {
    pub fn new(executable: impl Into<String>) -> Self {
        OpenBabelEmbedder {
            executable: executable.into(),
        }
    }

    fn args(smiles: &str) -> Vec<String> {
        vec![
            format!("-:{}", smiles),
            "-oxyz".to_string(),
            "--gen3d".to_string(),
            "-h".to_string(),
        ]
    }
}

impl Default for OpenBabelEmbedder {
    fn default() -> Self {
        OpenBabelEmbedder::new("obabel")
    }
}

impl Embedder for OpenBabelEmbedder {
    fn embed(&self, smiles: &str) -> Result<Geometry> {
        let output = Command::new(&self.executable)
            .args(Self::args(smiles))
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => OrcanizerError::CommandNotFound {
                    command: self.executable.clone(),
                },
                _ => OrcanizerError::CommandFailed {
                    command: self.executable.clone(),
                    stderr: e.to_string(),
                },
            })?;

        if !output.status.success() {
            return Err(OrcanizerError::EmbeddingFailed {
                smiles: smiles.to_string(),
                reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        // Open Babel 对无法解析的 SMILES 也可能返回 0，只是没有输出
        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_xyz_content(&stdout).map_err(|e| OrcanizerError::EmbeddingFailed {
            smiles: smiles.to_string(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_obabel_arguments() {
        let args = OpenBabelEmbedder::args("C=C");
        assert_eq!(args, vec!["-:C=C", "-oxyz", "--gen3d", "-h"]);
    }

    #[test]
    fn test_missing_executable() {
        let embedder = OpenBabelEmbedder::new("orcanizer-no-such-obabel");
        assert!(matches!(
            embedder.embed("C"),
            Err(OrcanizerError::CommandNotFound { .. })
        ));
    }
}
