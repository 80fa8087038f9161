//! png2jpg - PNG TO JPEG CONVERTER
//!
//! 정적 사이트 이미지 폴더의 PNG 파일들을 최적화된 JPEG으로 일괄 변환하고
//! 원본 PNG를 삭제하는 CLI 도구입니다.
//!
//! # 주요 기능
//!
//! - 🔍 **재귀 탐색**: `public/images` (및 기존 `public/square`) 아래의 모든 `.png` 파일
//! - 🎨 **투명도 평탄화**: 알파 채널은 흰색 배경 위에 합성
//! - 🗜️ **최적화 JPEG**: progressive, 최적화 Huffman, 4:2:0 서브샘플링
//! - ⏭️ **건너뛰기**: 이미 변환된 파일은 `--force` 없이 다시 변환하지 않음
//! - 📐 **square 이동**: `-square` 파일을 `public/square`로 옮기고 접미사 제거
//! - 📊 **요약 통계**: 변환/건너뜀/에러 수와 절약된 용량
//!
//! # 예제
//!
//! ```bash
//! # 기본 사용법 (품질 82)
//! png2jpg
//!
//! # 기존 JPEG 덮어쓰기 + square 이동
//! png2jpg --force --move-square --quality 90
//! ```

pub mod cli;
pub mod config;
pub mod converter;
pub mod discovery;
pub mod encode;
pub mod error;
pub mod flatten;
pub mod report;
pub mod runner;
pub mod stats;

// Re-exports for convenient access
pub use cli::Args;
pub use config::{clamp_quality, ConvertOptions, Layout};
pub use converter::{convert_file, Conversion, ConvertOutcome, Relocation};
pub use error::{Png2JpgError, Result};
pub use report::Reporter;
pub use runner::{run, run_batch};
pub use stats::{format_bytes, Statistics};
