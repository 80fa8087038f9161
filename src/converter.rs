//! PNG 파일 변환 모듈
//!
//! 개별 PNG 파일의 디코딩, 평탄화, JPEG 인코딩, square 이동, 원본 삭제를 담당합니다.

use image::ImageReader;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ConvertOptions;
use crate::encode::write_jpeg;
use crate::error::{Png2JpgError, Result};
use crate::flatten::flatten_to_rgb;

/// square 파일을 표시하는 파일 이름 접미사
pub const SQUARE_SUFFIX: &str = "-square";

/// square 이동 결과
#[derive(Debug, Clone, PartialEq)]
pub enum Relocation {
    /// 이동 대상이 아니거나 `--move-square`가 꺼져 있음
    NotRequested,
    /// square 폴더로 이동됨
    Moved,
    /// 대상 파일이 이미 존재하여 원래 위치에 남겨둠
    TargetExists { target: PathBuf },
}

/// 변환 성공 정보
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    /// 원본 PNG 경로 (삭제됨)
    pub source: PathBuf,
    /// 최종 JPEG 경로
    pub output: PathBuf,
    /// 원본 PNG 크기
    pub input_bytes: u64,
    /// 최종 JPEG 크기
    pub output_bytes: u64,
    pub relocation: Relocation,
}

impl Conversion {
    /// 절약된 바이트 (커진 경우 0)
    pub fn saved_bytes(&self) -> u64 {
        saved_bytes(self.input_bytes, self.output_bytes)
    }
}

/// 파일 변환 결과
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertOutcome {
    Converted(Conversion),
    /// 출력 JPEG이 이미 존재하여 건너뜀
    Skipped { existing: PathBuf },
}

/// 입력 크기 대비 절약된 바이트 (음수는 0으로 처리)
pub fn saved_bytes(input_bytes: u64, output_bytes: u64) -> u64 {
    input_bytes.saturating_sub(output_bytes)
}

/// 같은 폴더, 같은 이름의 `.jpg` 경로
pub fn output_path_for(png: &Path) -> PathBuf {
    png.with_extension("jpg")
}

/// square 파일이면 square 폴더 안의 이동 대상 경로 반환
///
/// # Examples
/// ```
/// use std::path::Path;
/// use png2jpg::converter::square_target_for;
///
/// let target = square_target_for(Path::new("img/icon-square.png"), Path::new("square"));
/// assert_eq!(target.unwrap(), Path::new("square/icon.jpg"));
/// assert!(square_target_for(Path::new("img/icon.png"), Path::new("square")).is_none());
/// ```
pub fn square_target_for(png: &Path, square_dir: &Path) -> Option<PathBuf> {
    let stem = png.file_stem()?.to_str()?;
    let clean = stem.strip_suffix(SQUARE_SUFFIX)?;
    Some(square_dir.join(format!("{}.jpg", clean)))
}

/// 단일 PNG 파일 변환
///
/// 실패는 잡지 않고 그대로 호출자에게 전달합니다. 원본 삭제는 인코딩(및 이동)이
/// 성공한 뒤에만 수행됩니다.
///
/// # Arguments
/// * `png` - 변환할 PNG 파일 경로
/// * `options` - 변환 옵션
///
/// # Returns
/// 변환 또는 건너뜀 결과
pub fn convert_file(png: &Path, options: &ConvertOptions) -> Result<ConvertOutcome> {
    let mut output = output_path_for(png);
    if output.exists() && !options.force {
        return Ok(ConvertOutcome::Skipped { existing: output });
    }

    let input_bytes = file_size(png)?;

    let decoded = ImageReader::open(png)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| Png2JpgError::Decode {
            file: png.to_path_buf(),
            reason: e.to_string(),
        })?
        .decode()
        .map_err(|e| Png2JpgError::Decode {
            file: png.to_path_buf(),
            reason: e.to_string(),
        })?;
    let rgb = flatten_to_rgb(decoded);
    write_jpeg(&rgb, options.quality, &output)?;

    let mut relocation = Relocation::NotRequested;
    if options.move_square {
        if let Some(target) = square_target_for(png, &options.square_dir) {
            relocation = relocate(&output, &target, options)?;
            if relocation == Relocation::Moved {
                output = target;
            }
        }
    }

    fs::remove_file(png).map_err(|e| Png2JpgError::Remove {
        file: png.to_path_buf(),
        reason: e.to_string(),
    })?;

    let output_bytes = file_size(&output)?;

    Ok(ConvertOutcome::Converted(Conversion {
        source: png.to_path_buf(),
        output,
        input_bytes,
        output_bytes,
        relocation,
    }))
}

/// JPEG을 square 폴더로 이동
fn relocate(jpg: &Path, target: &Path, options: &ConvertOptions) -> Result<Relocation> {
    let relocate_err = |e: std::io::Error| Png2JpgError::Relocate {
        from: jpg.to_path_buf(),
        to: target.to_path_buf(),
        reason: e.to_string(),
    };

    fs::create_dir_all(&options.square_dir).map_err(relocate_err)?;

    if target.exists() && !options.force {
        return Ok(Relocation::TargetExists {
            target: target.to_path_buf(),
        });
    }

    fs::rename(jpg, target).map_err(relocate_err)?;
    Ok(Relocation::Moved)
}

fn file_size(path: &Path) -> Result<u64> {
    fs::metadata(path)
        .map(|m| m.len())
        .map_err(|e| Png2JpgError::Metadata {
            file: path.to_path_buf(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_for() {
        assert_eq!(output_path_for(Path::new("a/b/logo.png")), Path::new("a/b/logo.jpg"));
        assert_eq!(output_path_for(Path::new("a/LOGO.PNG")), Path::new("a/LOGO.jpg"));
        assert_eq!(
            output_path_for(Path::new("a/my.photo.png")),
            Path::new("a/my.photo.jpg")
        );
    }

    #[test]
    fn test_square_target_for() {
        let square = Path::new("/site/public/square");

        assert_eq!(
            square_target_for(Path::new("x/icon-square.png"), square),
            Some(PathBuf::from("/site/public/square/icon.jpg"))
        );
        assert_eq!(square_target_for(Path::new("x/icon.png"), square), None);
        assert_eq!(square_target_for(Path::new("x/square.png"), square), None);
        assert_eq!(square_target_for(Path::new("x/icon-SQUARE.png"), square), None);
    }

    #[test]
    fn test_saved_bytes_never_negative() {
        assert_eq!(saved_bytes(1000, 600), 400);
        assert_eq!(saved_bytes(500, 700), 0);
        assert_eq!(saved_bytes(0, 0), 0);
    }

    #[test]
    fn test_conversion_saved_bytes() {
        let conversion = Conversion {
            source: PathBuf::from("a.png"),
            output: PathBuf::from("a.jpg"),
            input_bytes: 1000,
            output_bytes: 600,
            relocation: Relocation::NotRequested,
        };
        assert_eq!(conversion.saved_bytes(), 400);
    }
}
