//! 실행 설정 모듈
//!
//! 실행 시작 시 한 번 결정되어 이후 변경되지 않는 옵션과 디렉토리 구성을 담당합니다.

use std::path::{Path, PathBuf};

/// 허용되는 최소 JPEG 품질
pub const MIN_QUALITY: u8 = 40;
/// 허용되는 최대 JPEG 품질
pub const MAX_QUALITY: u8 = 95;
/// 기본 JPEG 품질
pub const DEFAULT_QUALITY: u8 = 82;

/// 요청된 품질 값을 [40, 95] 범위로 보정
///
/// # Examples
/// ```
/// use png2jpg::config::clamp_quality;
///
/// assert_eq!(clamp_quality(10), 40);
/// assert_eq!(clamp_quality(82), 82);
/// assert_eq!(clamp_quality(999), 95);
/// ```
pub fn clamp_quality(requested: i64) -> u8 {
    requested.clamp(MIN_QUALITY as i64, MAX_QUALITY as i64) as u8
}

/// 파일 변환 옵션
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertOptions {
    /// 보정된 JPEG 품질
    pub quality: u8,
    /// 기존 JPEG 및 square 대상 파일 덮어쓰기
    pub force: bool,
    /// `-square` 파일을 square 폴더로 이동
    pub move_square: bool,
    /// square 파일 이동 대상 폴더
    pub square_dir: PathBuf,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            quality: DEFAULT_QUALITY,
            force: false,
            move_square: false,
            square_dir: PathBuf::from("public").join("square"),
        }
    }
}

impl ConvertOptions {
    /// 기본 옵션 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 품질 설정 (범위 밖의 값은 보정됨)
    pub fn with_quality(mut self, requested: i64) -> Self {
        self.quality = clamp_quality(requested);
        self
    }

    /// 덮어쓰기 설정
    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// square 이동 설정
    pub fn with_move_square(mut self, move_square: bool) -> Self {
        self.move_square = move_square;
        self
    }

    /// square 폴더 설정
    pub fn with_square_dir(mut self, square_dir: impl Into<PathBuf>) -> Self {
        self.square_dir = square_dir.into();
        self
    }
}

/// 작업 디렉토리 기준 폴더 구성
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    /// 변환 대상 이미지 트리 (`<root>/public/images`)
    pub images_dir: PathBuf,
    /// square 출력 트리 (`<root>/public/square`)
    pub square_dir: PathBuf,
}

impl Layout {
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        let public = root.as_ref().join("public");
        Self {
            images_dir: public.join("images"),
            square_dir: public.join("square"),
        }
    }
}
