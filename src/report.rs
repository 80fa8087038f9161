//! 진행 상황 출력 모듈
//!
//! `[png2jpg]` 접두사가 붙은 로그 라인과 진행률 바를 담당합니다.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::fmt::Display;
use std::path::Path;

use crate::converter::{Conversion, Relocation};
use crate::stats::{format_bytes, Statistics};

/// 모든 로그 라인의 접두사
pub const PREFIX: &str = "[png2jpg]";

/// 접두사가 붙은 로그 라인 생성
pub fn line(message: impl Display) -> String {
    format!("{} {}", PREFIX.bright_blue(), message)
}

/// 로그 및 진행률 출력기
pub struct Reporter {
    verbose: bool,
    progress: ProgressBar,
}

impl Reporter {
    /// 새 출력기 생성 (진행률 바는 `start`에서 길이가 정해짐)
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            progress: ProgressBar::hidden(),
        }
    }

    /// 일반 로그 출력
    pub fn info(&self, message: impl Display) {
        let text = line(message);
        self.progress.suspend(|| println!("{}", text));
    }

    /// 일괄 처리 시작: 시작 메시지 출력 후 진행률 바 생성
    pub fn start(&mut self, total: usize, quality: u8, move_square: bool) {
        self.info(format!(
            "Found {} PNG file(s). Starting conversion (quality={}){} ...",
            total.to_string().bright_green(),
            quality,
            if move_square {
                " (move-square enabled)"
            } else {
                ""
            }
        ));
        self.progress = create_progress_bar(total);
    }

    /// 파일 하나 처리 완료
    pub fn advance(&self) {
        self.progress.inc(1);
    }

    /// 진행률 바 정리
    pub fn finish(&self) {
        self.progress.finish_and_clear();
    }

    /// 변환 성공 (verbose 모드에서만 출력)
    pub fn converted(&self, conversion: &Conversion) {
        if !self.verbose {
            return;
        }
        self.info(format!(
            "{} {} -> {} ({} -> {})",
            "✓".green(),
            conversion.source.display(),
            conversion.output.display(),
            format_bytes(conversion.input_bytes),
            format_bytes(conversion.output_bytes)
        ));
    }

    /// square 대상이 이미 존재하여 이동을 건너뜀
    pub fn relocation(&self, relocation: &Relocation) {
        if let Relocation::TargetExists { target } = relocation {
            self.info(format!(
                "{} {}",
                "Exists, skip move (use --force):".yellow(),
                target.display()
            ));
        }
    }

    /// 출력 JPEG이 이미 존재하여 건너뜀 (verbose 모드에서만 출력)
    pub fn skipped(&self, existing: &Path) {
        if self.verbose {
            self.info(format!("{} {}", "Skip (exists):".dimmed(), existing.display()));
        }
    }

    /// 파일 처리 실패 (에러 메시지에 파일 경로가 포함됨)
    pub fn error(&self, error: impl Display) {
        self.info(error_line(error));
    }

    /// 통계 요약 출력
    pub fn summary(&self, stats: &Statistics) {
        for text in stats.summary_lines() {
            self.info(text);
        }
        if self.verbose {
            self.info(format!(
                "Input: {}, Output: {}",
                format_bytes(stats.bytes_in),
                format_bytes(stats.bytes_out)
            ));
        }
    }
}

fn error_line(error: impl Display) -> String {
    format!("{} {}", "Error:".red(), error)
}

/// 진행률 바 생성
fn create_progress_bar(total: usize) -> ProgressBar {
    let pb = ProgressBar::new(total as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}
