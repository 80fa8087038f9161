//! 통계 및 유틸리티 모듈
//!
//! 변환 결과 집계와 요약 포맷팅을 담당합니다.

use std::time::{Duration, Instant};

use crate::converter::ConvertOutcome;

/// 처리 통계 구조체
#[derive(Debug, Default)]
pub struct Statistics {
    /// 총 파일 수
    pub total_files: usize,
    /// 변환 성공 수
    pub converted: usize,
    /// 건너뜀 수
    pub skipped: usize,
    /// 에러 발생 수
    pub errors: usize,
    /// 변환된 PNG의 총 바이트
    pub bytes_in: u64,
    /// 생성된 JPEG의 총 바이트
    pub bytes_out: u64,
    /// 절약된 총 바이트 (파일별 음수 차이는 0으로 계산)
    pub bytes_saved: u64,
    /// 처리 시작 시간
    start_time: Option<Instant>,
}

impl Statistics {
    /// 새 통계 인스턴스 생성
    pub fn new(total_files: usize) -> Self {
        Self {
            total_files,
            start_time: Some(Instant::now()),
            ..Default::default()
        }
    }

    /// 파일 하나의 처리 결과 반영
    pub fn record<E>(&mut self, result: &std::result::Result<ConvertOutcome, E>) {
        match result {
            Ok(ConvertOutcome::Converted(conversion)) => {
                self.converted += 1;
                self.bytes_in += conversion.input_bytes;
                self.bytes_out += conversion.output_bytes;
                self.bytes_saved += conversion.saved_bytes();
            }
            Ok(ConvertOutcome::Skipped { .. }) => self.skipped += 1,
            Err(_) => self.errors += 1,
        }
    }

    /// 에러가 하나라도 있었는지 여부 (종료 코드 결정)
    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }

    /// 경과 시간 반환
    pub fn elapsed(&self) -> Duration {
        self.start_time
            .map(|t| t.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// 요약 출력 문자열 목록
    pub fn summary_lines(&self) -> Vec<String> {
        vec![
            "--- Summary ---".to_string(),
            format!("Converted: {}", self.converted),
            format!("Skipped:   {}", self.skipped),
            format!("Errors:    {}", self.errors),
            format!("Size saved: {:.1} KiB", self.bytes_saved as f64 / 1024.0),
            format!("Elapsed:   {}", format_duration(self.elapsed())),
        ]
    }
}

/// 바이트를 읽기 쉬운 형식으로 변환
///
/// # Arguments
/// * `bytes` - 바이트 수
///
/// # Returns
/// 형식화된 문자열 (예: "1.25 MB")
///
/// # Examples
/// ```
/// use png2jpg::stats::format_bytes;
///
/// assert_eq!(format_bytes(500), "500 B");
/// assert_eq!(format_bytes(1024), "1.00 KB");
/// assert_eq!(format_bytes(1048576), "1.00 MB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// 경과 시간을 읽기 쉬운 형식으로 변환
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let millis = duration.subsec_millis();

    if secs >= 3600 {
        format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
    } else if secs >= 60 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else if secs > 0 {
        format!("{}.{:03}s", secs, millis)
    } else {
        format!("{}ms", millis)
    }
}
