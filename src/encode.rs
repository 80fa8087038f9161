//! JPEG 인코딩 모듈
//!
//! mozjpeg로 progressive + 최적화 Huffman + 4:2:0 JPEG을 생성합니다.
//! 인코더 설정은 고정 정책이며 품질만 조정할 수 있습니다.

use image::RgbImage;
use mozjpeg::{ColorSpace, Compress};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{Png2JpgError, Result};

/// RGB 버퍼를 JPEG으로 인코딩하여 writer에 기록
///
/// # Arguments
/// * `img` - 불투명 RGB 이미지
/// * `quality` - JPEG 품질 (보정된 값)
/// * `writer` - 출력 대상
///
/// # Returns
/// 인코딩이 끝난 writer
pub fn encode_jpeg<W: Write>(img: &RgbImage, quality: u8, writer: W) -> io::Result<W> {
    let mut comp = Compress::new(ColorSpace::JCS_RGB);
    comp.set_size(img.width() as usize, img.height() as usize);
    comp.set_quality(quality as f32);
    comp.set_progressive_mode();
    comp.set_optimize_coding(true);

    // 4:2:0 - Y는 2x2, Cb/Cr은 1x1
    for (i, c) in comp.components_mut().iter_mut().enumerate() {
        let factor = if i == 0 { 2 } else { 1 };
        c.h_samp_factor = factor;
        c.v_samp_factor = factor;
    }

    let mut started = comp.start_compress(writer)?;
    started.write_scanlines(img.as_raw())?;
    started.finish()
}

/// RGB 버퍼를 JPEG 파일로 저장 (기존 파일은 덮어씀)
pub fn write_jpeg(img: &RgbImage, quality: u8, path: &Path) -> Result<()> {
    let encode_err = |e: io::Error| Png2JpgError::Encode {
        file: path.to_path_buf(),
        reason: e.to_string(),
    };

    let file = File::create(path).map_err(encode_err)?;
    let mut writer = encode_jpeg(img, quality, BufWriter::new(file)).map_err(encode_err)?;
    writer.flush().map_err(encode_err)?;
    Ok(())
}
