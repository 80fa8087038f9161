//! png2jpg - PNG TO JPEG CONVERTER
//!
//! 메인 엔트리포인트

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;

use png2jpg::{
    cli::Args,
    config::Layout,
    report::{line, Reporter},
    runner::{discover_checked, run},
};

fn main() -> ExitCode {
    let args = Args::parse();

    match execute(&args) {
        Ok(code) => code,
        Err(e) => {
            println!("{}", line(format!("{:#}", e).red()));
            ExitCode::FAILURE
        }
    }
}

/// 작업 디렉토리 기준으로 변환 실행
fn execute(args: &Args) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("cannot resolve current directory")?;
    let layout = Layout::from_root(cwd);
    let options = args.convert_options(&layout.square_dir);

    // 드라이런 모드
    if args.dry_run {
        let files = discover_checked(&layout)?;
        print_dry_run(&files);
        return Ok(ExitCode::SUCCESS);
    }

    let mut reporter = Reporter::new(args.verbose);
    let stats = run(&layout, &options, &mut reporter)?;

    if stats.has_errors() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// 드라이런 출력
fn print_dry_run(files: &[PathBuf]) {
    println!("{}", line("Dry run, no files will be changed:"));
    for (i, path) in files.iter().enumerate() {
        println!("{}", line(format!("  {}. {}", i + 1, path.display())));
    }
    println!(
        "{}",
        line(format!(
            "{} PNG file(s) found.",
            files.len().to_string().bright_green()
        ))
    );
}
