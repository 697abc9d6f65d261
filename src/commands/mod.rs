//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `jobs/`, `parsers/`, `utils/`
//! - 子模块: run, parse, collect, generate, summary

pub mod collect;
pub mod generate;
pub mod parse;
pub mod run;
pub mod summary;

use crate::cli::{Commands, ReportArgs};
use crate::error::Result;
use crate::parsers::{encoding_from_label, ParseOptions, Strictness};

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Run(args) => run::execute(args),
        Commands::Parse(args) => parse::execute(args),
        Commands::Collect(args) => collect::execute(args),
        Commands::Generate(args) => generate::execute(args),
    }
}

/// 由命令行参数构造解析选项
pub(crate) fn parse_options(args: &ReportArgs) -> Result<ParseOptions> {
    Ok(ParseOptions {
        encoding: encoding_from_label(&args.encoding)?,
        strictness: if args.lenient {
            Strictness::Lenient
        } else {
            Strictness::Strict
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OrcanizerError;

    #[test]
    fn test_parse_options_from_args() {
        let args = ReportArgs {
            encoding: "UTF-16".to_string(),
            lenient: true,
        };
        let options = parse_options(&args).unwrap();
        assert_eq!(options.encoding, encoding_rs::UTF_16LE);
        assert_eq!(options.strictness, Strictness::Lenient);

        let bad = ReportArgs {
            encoding: "utf-99".to_string(),
            lenient: false,
        };
        assert!(matches!(
            parse_options(&bad),
            Err(OrcanizerError::UnknownEncoding(_))
        ));
    }
}
