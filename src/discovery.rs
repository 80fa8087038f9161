//! PNG 파일 탐색 모듈

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::Layout;

/// 파일 이름이 `.png` (대소문자 무시) 로 끝나는지 확인
///
/// 확장자가 아닌 이름 전체를 보므로 이름이 정확히 `.png` 인 파일도 포함됩니다.
pub fn is_png(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|s| s.to_ascii_lowercase().ends_with(".png"))
        .unwrap_or(false)
}

/// 폴더 아래의 모든 PNG 파일 수집
///
/// 폴더가 존재하지 않으면 빈 목록을 반환합니다. 탐색 중 읽을 수 없는 항목은 건너뜁니다.
///
/// # Arguments
/// * `root` - 탐색할 최상위 폴더
pub fn collect_png_files(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .filter(|e| is_png(e.path()))
        .map(|e| e.into_path())
        .collect()
}

/// 이미지 폴더와 (존재할 경우) square 폴더의 PNG 파일 수집
pub fn discover(layout: &Layout) -> Vec<PathBuf> {
    let mut files = collect_png_files(&layout.images_dir);
    if layout.square_dir.exists() {
        files.extend(collect_png_files(&layout.square_dir));
    }
    files
}
