//! 에러 타입 정의 모듈
//!
//! png2jpg에서 발생할 수 있는 모든 에러 타입을 정의합니다.

use std::path::PathBuf;
use thiserror::Error;

/// png2jpg에서 발생할 수 있는 에러 타입
#[derive(Error, Debug)]
pub enum Png2JpgError {
    /// 이미지 폴더가 존재하지 않음 (실행 전체 중단)
    #[error("Images directory not found: {}", path.display())]
    ImagesDirNotFound { path: PathBuf },

    /// 파일 메타데이터(크기) 조회 실패
    #[error("cannot stat {}: {reason}", file.display())]
    Metadata { file: PathBuf, reason: String },

    /// PNG 디코딩 실패
    #[error("cannot decode {}: {reason}", file.display())]
    Decode { file: PathBuf, reason: String },

    /// JPEG 인코딩 또는 쓰기 실패
    #[error("cannot write {}: {reason}", file.display())]
    Encode { file: PathBuf, reason: String },

    /// square 폴더 생성 또는 이동 실패
    #[error("cannot move {} to {}: {reason}", from.display(), to.display())]
    Relocate {
        from: PathBuf,
        to: PathBuf,
        reason: String,
    },

    /// 원본 PNG 삭제 실패
    #[error("cannot remove {}: {reason}", file.display())]
    Remove { file: PathBuf, reason: String },
}

/// png2jpg 결과 타입 별칭
pub type Result<T> = std::result::Result<T, Png2JpgError>;
