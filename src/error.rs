//! # 统一错误处理模块
//!
//! 定义 orcanizer 的所有错误类型，使用 `thiserror` 派生。
//!
//! 两层错误：
//! - `OrcanizerError`: 中止整个命令（生成失败、外部程序无法启动、I/O 等）
//! - `ParseFailure`: ORCA 输出不可用，只影响单个分子，由编排器记入 `undone.log`
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// orcanizer 统一错误类型
#[derive(Error, Debug)]
pub enum OrcanizerError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 分子/结构错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid SMILES '{smiles}' at byte {position}: {reason}")]
    InvalidSmiles {
        smiles: String,
        position: usize,
        reason: String,
    },

    #[error("Failed to embed '{smiles}' in 3D: {reason}")]
    EmbeddingFailed { smiles: String, reason: String },

    #[error("Malformed XYZ block: {0}")]
    InvalidXyz(String),

    // ─────────────────────────────────────────────────────────────
    // 外部命令错误
    // ─────────────────────────────────────────────────────────────
    #[error("External command '{command}' not found in PATH")]
    CommandNotFound { command: String },

    #[error("External command failed: {command}\n{stderr}")]
    CommandFailed { command: String, stderr: String },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown text encoding: {0}")]
    UnknownEncoding(String),

    // ─────────────────────────────────────────────────────────────
    // 解析错误（单独使用时，如 parse 子命令）
    // ─────────────────────────────────────────────────────────────
    #[error("Unusable ORCA report: {path}\nReason: {reason}")]
    ReportError {
        path: String,
        #[source]
        reason: ParseFailure,
    },

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("No matching files found with pattern: {pattern}")]
    NoFilesFound { pattern: String },
}

/// ORCA 输出解析失败原因
///
/// 编排器不区分这些原因（统一视为"作业失败"），
/// 但保留类型以便 `--log-reasons` 写出原因代码。
#[derive(Error, Debug)]
pub enum ParseFailure {
    #[error("cannot read report: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: '{phrase}' needs token #{index}, found {found} tokens")]
    MissingToken {
        line: usize,
        phrase: &'static str,
        index: usize,
        found: usize,
    },

    #[error("line {line}: occupation number '{token}' is not a number")]
    BadOccupation { line: usize, token: String },

    #[error("line {line}: virtual orbital found before any occupied orbital")]
    NoOccupiedOrbital { line: usize },

    #[error("missing properties: {0}")]
    MissingProperties(String),
}

impl ParseFailure {
    /// 写入 undone.log 第三列的短代码
    pub fn code(&self) -> &'static str {
        match self {
            ParseFailure::Io(_) => "io",
            ParseFailure::MissingToken { .. } => "short-line",
            ParseFailure::BadOccupation { .. } => "bad-occupation",
            ParseFailure::NoOccupiedOrbital { .. } => "no-homo",
            ParseFailure::MissingProperties(_) => "missing-section",
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, OrcanizerError>;
