//! 일괄 변환 실행 모듈
//!
//! 탐색된 파일을 순서대로 변환하고 결과를 집계합니다. 파일 단위 에러는
//! 기록만 하고 다음 파일로 넘어갑니다.

use std::path::PathBuf;

use crate::config::{ConvertOptions, Layout};
use crate::converter::{convert_file, ConvertOutcome};
use crate::discovery::discover;
use crate::error::{Png2JpgError, Result};
use crate::report::Reporter;
use crate::stats::Statistics;

/// 파일 목록 일괄 변환
///
/// # Arguments
/// * `files` - 변환할 PNG 파일 목록
/// * `options` - 변환 옵션
/// * `reporter` - 로그 출력기
///
/// # Returns
/// 집계된 통계
pub fn run_batch(files: &[PathBuf], options: &ConvertOptions, reporter: &Reporter) -> Statistics {
    let mut stats = Statistics::new(files.len());

    for path in files {
        let result = convert_file(path, options);
        match &result {
            Ok(ConvertOutcome::Converted(conversion)) => {
                reporter.relocation(&conversion.relocation);
                reporter.converted(conversion);
            }
            Ok(ConvertOutcome::Skipped { existing }) => reporter.skipped(existing),
            Err(e) => reporter.error(e),
        }
        stats.record(&result);
        reporter.advance();
    }

    reporter.finish();
    stats
}

/// 이미지 폴더 확인, 파일 탐색 후 일괄 변환
///
/// 이미지 폴더가 없으면 어떤 파일도 처리하지 않고 에러를 반환합니다.
pub fn run(layout: &Layout, options: &ConvertOptions, reporter: &mut Reporter) -> Result<Statistics> {
    let files = discover_checked(layout)?;
    reporter.start(files.len(), options.quality, options.move_square);
    let stats = run_batch(&files, options, reporter);
    reporter.summary(&stats);
    Ok(stats)
}

/// 이미지 폴더 존재를 확인한 뒤 PNG 파일 탐색
pub fn discover_checked(layout: &Layout) -> Result<Vec<PathBuf>> {
    if !layout.images_dir.exists() {
        return Err(Png2JpgError::ImagesDirNotFound {
            path: layout.images_dir.clone(),
        });
    }
    Ok(discover(layout))
}
