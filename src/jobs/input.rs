//! # ORCA 输入文件生成
//!
//! 由 SMILES 推导电荷、自旋多重度和三维坐标，写入固定模板的 `{handle}.inp`。
//!
//! ## 依赖关系
//! - 被 `batch/orchestrator.rs`, `commands/generate.rs` 使用
//! - 使用 `jobs/embed.rs`, `parsers/smiles.rs`

use crate::error::{OrcanizerError, Result};
use crate::jobs::embed::Embedder;
use crate::models::{JobHandle, MoleculeSpec};
use crate::parsers::smiles::electronic_state;

use std::fs;
use std::path::{Path, PathBuf};

/// 生成 ORCA 输入内容
pub fn render_input(spec: &MoleculeSpec) -> String {
    format!(
        r#"! DFT B3LYP/G RIJCOSX def2-SVP Opt FREQ BOHRS xyzfile

%scf
MaxIter 500
end

%geom
MaxIter 500
end

%elprop Dipole true
Polar 1
end

* xyz {} {}
{}
*
"#,
        spec.state.charge,
        spec.state.multiplicity(),
        spec.geometry.coordinate_block(),
    )
}

/// 输入文件生成器
pub struct InputBuilder<E: Embedder> {
    embedder: E,
}

impl<E: Embedder> InputBuilder<E> {
    pub fn new(embedder: E) -> Self {
        InputBuilder { embedder }
    }

    /// 推导电子态并生成三维构型
    pub fn prepare(&self, smiles: &str) -> Result<MoleculeSpec> {
        let state = electronic_state(smiles)?;
        let geometry = self.embedder.embed(smiles)?;
        if geometry.is_empty() {
            return Err(OrcanizerError::EmbeddingFailed {
                smiles: smiles.to_string(),
                reason: "embedder returned no atoms".to_string(),
            });
        }

        Ok(MoleculeSpec {
            identifier: smiles.to_string(),
            geometry,
            state,
        })
    }

    /// 写入 `{workdir}/{handle}.inp`，返回路径
    pub fn build(&self, workdir: &Path, handle: JobHandle, smiles: &str) -> Result<PathBuf> {
        let spec = self.prepare(smiles)?;
        let path = workdir.join(handle.input_file());

        fs::write(&path, render_input(&spec)).map_err(|e| OrcanizerError::FileWriteError {
            path: path.display().to_string(),
            source: e,
        })?;

        log::debug!(
            "wrote {} for {} ({} atoms, charge {}, multiplicity {})",
            path.display(),
            spec.identifier,
            spec.geometry.len(),
            spec.state.charge,
            spec.state.multiplicity()
        );
        Ok(path)
    }
}
