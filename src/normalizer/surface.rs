//! 描画サーフェス
//!
//! 元画像と同じ寸法のRGBAキャンバスに 1:1 で描き、宣言形式で再エンコードする。

use super::source::SupportedFormat;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::codecs::webp::WebPEncoder;
use image::{imageops, DynamicImage, ExtendedColorType, ImageEncoder, ImageResult, Rgb, RgbImage, RgbaImage};

/// 1辺の上限
pub const MAX_SURFACE_SIDE: u32 = 16_384;
/// 面積の上限
pub const MAX_SURFACE_AREA: u64 = 268_435_456;

/// アルファを黒背景に合成してRGBにする（透明ピクセルは黒）
pub fn flatten_onto_black(canvas: &RgbaImage) -> RgbImage {
    RgbImage::from_fn(canvas.width(), canvas.height(), |x, y| {
        let [r, g, b, a] = canvas.get_pixel(x, y).0;
        let scale = |c: u8| ((u16::from(c) * u16::from(a) + 127) / 255) as u8;
        Rgb([scale(r), scale(g), scale(b)])
    })
}

pub struct Surface {
    canvas: RgbaImage,
}

impl Surface {
    /// キャンバスを確保（上限外なら理由を返す）
    pub fn allocate(width: u32, height: u32) -> Result<Self, String> {
        if width == 0 || height == 0 {
            return Err(format!("image has zero size ({width}x{height})"));
        }
        if width > MAX_SURFACE_SIDE || height > MAX_SURFACE_SIDE {
            return Err(format!(
                "{width}x{height} exceeds the {MAX_SURFACE_SIDE}px side limit"
            ));
        }
        if u64::from(width) * u64::from(height) > MAX_SURFACE_AREA {
            return Err(format!(
                "{width}x{height} exceeds the {MAX_SURFACE_AREA} pixel area limit"
            ));
        }

        Ok(Self {
            canvas: RgbaImage::new(width, height),
        })
    }

    pub fn width(&self) -> u32 {
        self.canvas.width()
    }

    pub fn height(&self) -> u32 {
        self.canvas.height()
    }

    /// 左上原点に等倍で描画
    pub fn draw(&mut self, image: &DynamicImage) {
        imageops::replace(&mut self.canvas, &image.to_rgba8(), 0, 0);
    }

    /// 宣言形式で再エンコード
    ///
    /// JPEGはアルファを黒に合成したRGB、WEBPはロスレス。
    pub fn encode(&self, format: SupportedFormat, jpeg_quality: u8) -> ImageResult<Vec<u8>> {
        let (width, height) = self.canvas.dimensions();
        let mut bytes = Vec::new();

        match format {
            SupportedFormat::Jpeg => {
                let rgb = flatten_onto_black(&self.canvas);
                JpegEncoder::new_with_quality(&mut bytes, jpeg_quality).write_image(
                    rgb.as_raw(),
                    width,
                    height,
                    ExtendedColorType::Rgb8,
                )?;
            }
            SupportedFormat::Png => {
                PngEncoder::new(&mut bytes).write_image(
                    self.canvas.as_raw(),
                    width,
                    height,
                    ExtendedColorType::Rgba8,
                )?;
            }
            SupportedFormat::Webp => {
                // image 0.25 のWEBPエンコーダはロスレスのみで、品質95の非可逆出力は作れない
                WebPEncoder::new_lossless(&mut bytes).write_image(
                    self.canvas.as_raw(),
                    width,
                    height,
                    ExtendedColorType::Rgba8,
                )?;
            }
        }

        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_allocate_limits() {
        assert!(Surface::allocate(1, 1).is_ok());
        assert!(Surface::allocate(0, 10).is_err());
        assert!(Surface::allocate(10, 0).is_err());
        assert!(Surface::allocate(MAX_SURFACE_SIDE + 1, 1).is_err());
        assert!(Surface::allocate(1, MAX_SURFACE_SIDE + 1).is_err());
    }

    #[test]
    fn test_limit_reason_names_size() {
        let reason = Surface::allocate(MAX_SURFACE_SIDE + 1, 4).err().unwrap_or_default();
        assert!(reason.contains("16385x4"));
        assert!(reason.contains("side limit"));
    }

    #[test]
    fn test_draw_is_one_to_one() {
        let mut source = RgbaImage::new(2, 2);
        source.put_pixel(1, 0, Rgba([10, 20, 30, 128]));

        let mut surface = Surface::allocate(2, 2).unwrap();
        surface.draw(&DynamicImage::ImageRgba8(source.clone()));
        assert_eq!(surface.canvas, source);
    }

    #[test]
    fn test_flatten_onto_black() {
        let mut canvas = RgbaImage::new(3, 1);
        canvas.put_pixel(0, 0, Rgba([200, 100, 50, 0]));
        canvas.put_pixel(1, 0, Rgba([200, 100, 50, 255]));
        canvas.put_pixel(2, 0, Rgba([200, 100, 50, 128]));

        let rgb = flatten_onto_black(&canvas);
        assert_eq!(rgb.get_pixel(0, 0), &Rgb([0, 0, 0]));
        assert_eq!(rgb.get_pixel(1, 0), &Rgb([200, 100, 50]));
        assert_eq!(rgb.get_pixel(2, 0), &Rgb([100, 50, 25]));
    }

    #[test]
    fn test_transparent_jpeg_becomes_black() {
        let mut surface = Surface::allocate(8, 8).unwrap();
        surface.draw(&DynamicImage::ImageRgba8(RgbaImage::from_pixel(8, 8, Rgba([255, 255, 255, 0]))));

        let jpeg = surface.encode(SupportedFormat::Jpeg, 95).unwrap();
        let decoded = image::load_from_memory(&jpeg).unwrap().to_rgb8();
        let [r, g, b] = decoded.get_pixel(4, 4).0;
        assert!(r < 10 && g < 10 && b < 10, "expected black, got {r},{g},{b}");
    }

    #[test]
    fn test_webp_is_lossless() {
        let mut canvas = RgbaImage::new(4, 4);
        for (x, y, pixel) in canvas.enumerate_pixels_mut() {
            *pixel = Rgba([(x * 60) as u8, (y * 60) as u8, 7, 200]);
        }
        let mut surface = Surface::allocate(4, 4).unwrap();
        surface.draw(&DynamicImage::ImageRgba8(canvas.clone()));

        let webp = surface.encode(SupportedFormat::Webp, 95).unwrap();
        let decoded = image::load_from_memory(&webp).unwrap().to_rgba8();
        assert_eq!(decoded, canvas);
    }

    #[test]
    fn test_encode_signatures() {
        let mut surface = Surface::allocate(3, 2).unwrap();
        surface.draw(&DynamicImage::ImageRgba8(RgbaImage::from_pixel(3, 2, Rgba([200, 100, 50, 255]))));

        let jpeg = surface.encode(SupportedFormat::Jpeg, 95).unwrap();
        assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);

        let png = surface.encode(SupportedFormat::Png, 95).unwrap();
        assert_eq!(&png[..4], b"\x89PNG");

        let webp = surface.encode(SupportedFormat::Webp, 95).unwrap();
        assert_eq!(&webp[..4], b"RIFF");
        assert_eq!(&webp[8..12], b"WEBP");
    }
}
