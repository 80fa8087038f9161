//! CLI 인자 파싱 모듈
//!
//! clap을 사용한 명령줄 인자 정의 및 파싱을 담당합니다.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{ConvertOptions, DEFAULT_QUALITY};

/// png2jpg CLI 인자 구조체
#[derive(Parser, Debug, Clone)]
#[command(
    name = "png2jpg",
    author = "YourName <your@email.com>",
    version,
    about = "PNG TO JPEG CONVERTER - public/images 아래의 PNG를 최적화된 JPEG으로 변환하고 원본을 삭제합니다",
    long_about = r#"
PNG TO JPEG CONVERTER
=====================

현재 작업 디렉토리의 public/images (및 존재할 경우 public/square) 폴더를
재귀적으로 탐색하여 모든 PNG 파일을 JPEG으로 변환한 뒤 원본 PNG를 삭제합니다.

특징:
  • 투명 영역은 흰색 배경으로 합성
  • progressive + 최적화 Huffman + 4:2:0 JPEG 출력
  • 이미 변환된 파일은 건너뜀 (--force로 덮어쓰기)
  • "-square" 파일을 public/square 로 이동 (--move-square)

예제:
  png2jpg
  png2jpg --quality 90
  png2jpg --force --move-square
  png2jpg --dry-run
"#
)]
pub struct Args {
    /// 기존 JPEG 및 square 대상 파일 덮어쓰기
    #[arg(long)]
    pub force: bool,

    /// JPEG 품질 (40-95 범위로 보정됨)
    #[arg(long, default_value_t = DEFAULT_QUALITY as i64, allow_negative_numbers = true)]
    pub quality: i64,

    /// 이름이 "-square"로 끝나는 파일을 public/square 로 이동
    #[arg(long)]
    pub move_square: bool,

    /// 상세 출력 모드
    #[arg(short, long)]
    pub verbose: bool,

    /// 실제 변환 없이 처리될 파일 목록만 표시
    #[arg(long)]
    pub dry_run: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            force: false,
            quality: DEFAULT_QUALITY as i64,
            move_square: false,
            verbose: false,
            dry_run: false,
        }
    }
}

impl Args {
    /// 인자로부터 변환 옵션 생성
    ///
    /// # Arguments
    /// * `square_dir` - square 파일 이동 대상 폴더
    pub fn convert_options(&self, square_dir: impl Into<PathBuf>) -> ConvertOptions {
        ConvertOptions::new()
            .with_quality(self.quality)
            .with_force(self.force)
            .with_move_square(self.move_square)
            .with_square_dir(square_dir)
    }
}
