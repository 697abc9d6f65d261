//! # 美化输出工具
//!
//! 统一的终端输出样式。警告和错误写到 stderr，便于把结果表通过管道导出。
//!
//! ## 依赖关系
//! - 被 `commands/`, `batch/driver.rs` 使用
//! - 使用 `colored` crate

use colored::Colorize;
use std::fmt::Display;

const RULE_WIDTH: usize = 60;

/// 打印成功消息
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}

/// 打印单个作业的结果行：`[OK] 3 CCO` 或 `[FAIL] 3 CCO (reason)`
pub fn print_job(handle: impl Display, identifier: &str, failure: Option<&str>) {
    match failure {
        None => println!("{} {} {}", "[OK]".green().bold(), handle, identifier),
        Some(reason) => eprintln!(
            "{} {} {} {}",
            "[FAIL]".red().bold(),
            handle,
            identifier,
            format!("({})", reason).dimmed()
        ),
    }
}

/// 打印生成的文件：`SMILES -> path`
pub fn print_conversion(from: &str, to: &str) {
    println!(
        "{} {} {} {}",
        "[OK]".green().bold(),
        from.dimmed(),
        "->".cyan(),
        to
    );
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(RULE_WIDTH);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

/// 打印分隔线
pub fn print_separator() {
    println!("{}", "─".repeat(RULE_WIDTH).dimmed());
}
