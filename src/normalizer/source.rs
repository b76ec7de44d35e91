//! 入力画像の読み込みとMIME判定

use crate::error::{FusionError, Result};
use image::ImageFormat;
use std::path::Path;

/// 読み込み済みの入力画像（宣言MIMEタイプ付き）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl SourceImage {
    /// ファイルから読み込む（MIMEタイプは拡張子から判定）
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(FusionError::FileNotFound(path.display().to_string()));
        }

        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self {
            file_name,
            mime_type: guess_mime_type(path).to_string(),
            bytes,
        })
    }

    pub fn from_bytes(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }
}

/// 拡張子からMIMEタイプを推定
pub fn guess_mime_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|value| value.to_str())
        .map(|value| value.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" | "jfif" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "heic" | "heif" => "image/heic",
        "tif" | "tiff" => "image/tiff",
        _ => "application/octet-stream",
    }
}

/// 受け付ける形式（これ以外はデコード前に拒否）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportedFormat {
    Jpeg,
    Png,
    Webp,
}

impl SupportedFormat {
    pub const ALL: [SupportedFormat; 3] = [SupportedFormat::Jpeg, SupportedFormat::Png, SupportedFormat::Webp];

    pub fn from_mime(mime_type: &str) -> Option<Self> {
        match mime_type.trim().to_ascii_lowercase().as_str() {
            "image/jpeg" | "image/jpg" => Some(SupportedFormat::Jpeg),
            "image/png" => Some(SupportedFormat::Png),
            "image/webp" => Some(SupportedFormat::Webp),
            _ => None,
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            SupportedFormat::Jpeg => "image/jpeg",
            SupportedFormat::Png => "image/png",
            SupportedFormat::Webp => "image/webp",
        }
    }

    pub fn image_format(&self) -> ImageFormat {
        match self {
            SupportedFormat::Jpeg => ImageFormat::Jpeg,
            SupportedFormat::Png => ImageFormat::Png,
            SupportedFormat::Webp => ImageFormat::WebP,
        }
    }
}
