//! 투명도 평탄화 모듈
//!
//! 디코딩된 이미지를 불투명한 RGB 버퍼로 변환합니다.

use image::{DynamicImage, Rgb, RgbImage};

/// 투명 영역을 합성할 배경색
pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// 이미지를 불투명한 RGB 버퍼로 평탄화
///
/// 알파 채널이 없는 이미지는 채널만 재해석하고, 알파 채널이 있는 이미지는
/// 흰색 배경 위에 알파를 마스크로 합성합니다. PNG 디코더가 `tRNS` 청크를 알파
/// 채널로 확장하므로 팔레트/그레이스케일 투명도도 알파 경로를 탑니다.
///
/// # Examples
/// ```
/// use image::{DynamicImage, Rgba, RgbaImage};
/// use png2jpg::flatten::flatten_to_rgb;
///
/// let img = RgbaImage::from_pixel(2, 2, Rgba([10, 20, 30, 0]));
/// let rgb = flatten_to_rgb(DynamicImage::ImageRgba8(img));
/// assert_eq!(rgb.get_pixel(0, 0).0, [255, 255, 255]);
/// ```
pub fn flatten_to_rgb(img: DynamicImage) -> RgbImage {
    if !img.color().has_alpha() {
        return img.into_rgb8();
    }

    let rgba = img.into_rgba8();
    let mut out = RgbImage::new(rgba.width(), rgba.height());
    for (dst, src) in out.pixels_mut().zip(rgba.pixels()) {
        let [r, g, b, a] = src.0;
        *dst = Rgb([
            blend(r, BACKGROUND[0], a),
            blend(g, BACKGROUND[1], a),
            blend(b, BACKGROUND[2], a),
        ]);
    }
    out
}

/// 알파 값으로 전경/배경 채널 혼합 (반올림)
fn blend(fg: u8, bg: u8, alpha: u8) -> u8 {
    let a = alpha as u32;
    ((fg as u32 * a + bg as u32 * (255 - a) + 127) / 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayAlphaImage, GrayImage, Luma, LumaA, Rgba, RgbaImage};
    use proptest::prelude::*;

    #[test]
    fn test_rgb_passthrough() {
        let mut img = RgbImage::new(3, 1);
        img.put_pixel(0, 0, Rgb([1, 2, 3]));
        img.put_pixel(1, 0, Rgb([200, 100, 50]));
        img.put_pixel(2, 0, Rgb([0, 0, 0]));

        let out = flatten_to_rgb(DynamicImage::ImageRgb8(img.clone()));
        assert_eq!(out, img);
    }

    #[test]
    fn test_gray_is_reinterpreted() {
        let img = GrayImage::from_pixel(2, 2, Luma([77]));
        let out = flatten_to_rgb(DynamicImage::ImageLuma8(img));
        assert!(out.pixels().all(|p| p.0 == [77, 77, 77]));
    }

    #[test]
    fn test_transparent_becomes_white_and_opaque_kept() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([12, 34, 56, 0]));
        img.put_pixel(1, 0, Rgba([12, 34, 56, 255]));

        let out = flatten_to_rgb(DynamicImage::ImageRgba8(img));
        assert_eq!(out.get_pixel(0, 0).0, [255, 255, 255]);
        assert_eq!(out.get_pixel(1, 0).0, [12, 34, 56]);
    }

    #[test]
    fn test_half_transparent_black_is_mid_gray() {
        let img = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 128]));
        let out = flatten_to_rgb(DynamicImage::ImageRgba8(img));
        assert_eq!(out.get_pixel(0, 0).0, [127, 127, 127]);
    }

    #[test]
    fn test_luma_alpha() {
        let mut img = GrayAlphaImage::new(2, 1);
        img.put_pixel(0, 0, LumaA([40, 0]));
        img.put_pixel(1, 0, LumaA([40, 255]));

        let out = flatten_to_rgb(DynamicImage::ImageLumaA8(img));
        assert_eq!(out.get_pixel(0, 0).0, [255, 255, 255]);
        assert_eq!(out.get_pixel(1, 0).0, [40, 40, 40]);
    }

    #[test]
    fn test_dimensions_preserved() {
        let img = RgbaImage::new(7, 3);
        let out = flatten_to_rgb(DynamicImage::ImageRgba8(img));
        assert_eq!(out.dimensions(), (7, 3));
    }

    proptest! {
        #[test]
        fn prop_alpha_extremes(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let mut img = RgbaImage::new(2, 1);
            img.put_pixel(0, 0, Rgba([r, g, b, 0]));
            img.put_pixel(1, 0, Rgba([r, g, b, 255]));

            let out = flatten_to_rgb(DynamicImage::ImageRgba8(img));
            prop_assert_eq!(out.get_pixel(0, 0).0, [255, 255, 255]);
            prop_assert_eq!(out.get_pixel(1, 0).0, [r, g, b]);
        }

        #[test]
        fn prop_blend_never_darker_than_foreground(fg in any::<u8>(), a in any::<u8>()) {
            prop_assert!(blend(fg, 255, a) >= fg);
        }
    }
}
