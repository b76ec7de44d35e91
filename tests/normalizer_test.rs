//! 画像正規化の統合テスト
//!
//! 実際にエンコードした画像バイトを使って検証する

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use figure_fusion::error::FusionError;
use figure_fusion::normalizer::{HostPlatform, ImageNormalizer, SourceImage};
use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use std::io::Cursor;
use tempfile::tempdir;

fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_pixel(width, height, Rgb([180, 90, 30]));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Jpeg).expect("JPEG生成失敗");
    buf.into_inner()
}

fn png_bytes(width: u32, height: u32, alpha: u8) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, Rgba([20, 40, 60, alpha]));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png).expect("PNG生成失敗");
    buf.into_inner()
}

fn desktop() -> ImageNormalizer {
    ImageNormalizer::with_platform(HostPlatform::Desktop)
}

#[test]
fn test_jpeg_normalizes_to_jpeg() {
    let normalizer = desktop();
    let source = SourceImage::from_bytes("photo.jpg", "image/jpeg", jpeg_bytes(64, 48));

    let normalized = normalizer.normalize(&source).unwrap();
    assert_eq!(normalized.mime_type, "image/jpeg");
    assert_eq!((normalized.width, normalized.height), (64, 48));
    assert!(!normalized.base64_data.is_empty());

    // デコードし直せること
    let bytes = BASE64.decode(&normalized.base64_data).unwrap();
    let decoded = image::load_from_memory(&bytes).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (64, 48));
    assert_eq!(normalizer.live_handles(), 0);
}

#[test]
fn test_png_keeps_alpha() {
    let normalizer = desktop();
    let source = SourceImage::from_bytes("sticker.png", "image/png", png_bytes(8, 8, 77));

    let normalized = normalizer.normalize(&source).unwrap();
    assert_eq!(normalized.mime_type, "image/png");

    let bytes = BASE64.decode(&normalized.base64_data).unwrap();
    let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(decoded.get_pixel(3, 3), &Rgba([20, 40, 60, 77]));
}

#[test]
fn test_declared_type_wins_over_content() {
    // 中身はPNGだが宣言はWEBP → WEBPで再エンコード
    let normalizer = desktop();
    let source = SourceImage::from_bytes("odd.webp", "image/webp", png_bytes(4, 4, 255));

    let normalized = normalizer.normalize(&source).unwrap();
    assert_eq!(normalized.mime_type, "image/webp");
    let bytes = BASE64.decode(&normalized.base64_data).unwrap();
    assert_eq!(&bytes[..4], b"RIFF");
}

#[test]
fn test_gif_rejected_with_file_and_type() {
    let normalizer = desktop();
    let source = SourceImage::from_bytes("party.gif", "image/gif", b"GIF89a....".to_vec());

    let err = normalizer.normalize(&source).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("party.gif"));
    assert!(message.contains("image/gif"));
    assert!(matches!(err, FusionError::UnsupportedFileType { .. }));
}

#[test]
fn test_empty_file_is_corrupt_and_releases_handles() {
    let normalizer = desktop();

    for i in 0..5 {
        let source = SourceImage::from_bytes(format!("empty{i}.jpg"), "image/jpeg", Vec::new());
        let err = normalizer.normalize(&source).unwrap_err();
        assert!(matches!(err, FusionError::CorruptImage { .. }));
        assert!(err.to_string().contains(&format!("empty{i}.jpg")));
    }
    assert_eq!(normalizer.live_handles(), 0);
}

#[test]
fn test_garbage_bytes_are_corrupt() {
    let normalizer = desktop();
    let source = SourceImage::from_bytes("fake.png", "image/png", b"this is not an image".to_vec());

    let err = normalizer.normalize(&source).unwrap_err();
    assert!(matches!(err, FusionError::CorruptImage { .. }));
    assert_eq!(normalizer.live_handles(), 0);
}

#[test]
fn test_android_adds_guidance() {
    let source = SourceImage::from_bytes("cloud.jpg", "image/jpeg", Vec::new());

    let android = ImageNormalizer::with_platform(HostPlatform::Android);
    let message = android.normalize(&source).unwrap_err().to_string();
    assert!(message.contains("On Android"));

    let message = desktop().normalize(&source).unwrap_err().to_string();
    assert!(!message.contains("On Android"));
}

#[test]
fn test_from_path_then_normalize() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("portrait.JPG");
    std::fs::write(&path, jpeg_bytes(10, 20)).unwrap();

    let source = SourceImage::from_path(&path).unwrap();
    let normalized = desktop().normalize(&source).unwrap();
    assert_eq!(normalized.mime_type, "image/jpeg");
    assert_eq!((normalized.width, normalized.height), (10, 20));
}

#[tokio::test]
async fn test_normalize_all_preserves_order() {
    let normalizer = desktop();
    let sources = vec![
        SourceImage::from_bytes("a.jpg", "image/jpeg", jpeg_bytes(30, 10)),
        SourceImage::from_bytes("b.png", "image/png", png_bytes(5, 5, 255)),
        SourceImage::from_bytes("c.webp", "image/webp", png_bytes(7, 3, 255)),
    ];

    let normalized = normalizer.normalize_all(sources).await.unwrap();
    let summary: Vec<(&str, u32, u32)> = normalized
        .iter()
        .map(|n| (n.mime_type.as_str(), n.width, n.height))
        .collect();
    assert_eq!(
        summary,
        vec![("image/jpeg", 30, 10), ("image/png", 5, 5), ("image/webp", 7, 3)]
    );
    assert_eq!(normalizer.live_handles(), 0);
}

#[tokio::test]
async fn test_normalize_all_fails_as_a_whole() {
    let normalizer = desktop();
    let sources = vec![
        SourceImage::from_bytes("ok.jpg", "image/jpeg", jpeg_bytes(4, 4)),
        SourceImage::from_bytes("bad.gif", "image/gif", Vec::new()),
    ];

    let err = normalizer.normalize_all(sources).await.unwrap_err();
    assert!(matches!(err, FusionError::UnsupportedFileType { .. }));
    assert!(err.to_string().contains("bad.gif"));
}
