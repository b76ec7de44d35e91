//! 画像正規化モジュール
//!
//! 送信前に入力画像を検証・再エンコードし、(base64, MIME) の組にする。
//!
//! ## 処理フロー
//! 1. 宣言MIMEタイプをホワイトリストで確認（JPEG/PNG/WEBP）
//! 2. 一時デコードハンドルを登録してデコード（中身で判定）
//! 3. 元寸法のRGBAサーフェスに等倍描画
//! 4. 宣言形式で再エンコード → data URL → `,` で分割
//!
//! リトライはしない。失敗はファイル名付きのエラーで返す。

pub mod handle;
pub mod source;
pub mod surface;

pub use handle::{DecodeHandle, HandleRegistry};
pub use source::{guess_mime_type, SourceImage, SupportedFormat};
pub use surface::{Surface, MAX_SURFACE_AREA, MAX_SURFACE_SIDE};

use crate::error::{FusionError, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use figure_fusion_common::{split_data_url, to_data_url, NormalizedImage};
use futures::future::try_join_all;
use tracing::debug;

/// JPEG再エンコード品質
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// 実行環境（エラーメッセージの案内文を切り替える）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostPlatform {
    Desktop,
    Android,
    Ios,
}

impl HostPlatform {
    pub fn detect() -> Self {
        if cfg!(target_os = "android") {
            HostPlatform::Android
        } else if cfg!(target_os = "ios") {
            HostPlatform::Ios
        } else {
            HostPlatform::Desktop
        }
    }

    pub fn is_android(&self) -> bool {
        matches!(self, HostPlatform::Android)
    }
}

#[derive(Debug, Clone)]
pub struct ImageNormalizer {
    platform: HostPlatform,
    jpeg_quality: u8,
    handles: HandleRegistry,
}

impl Default for ImageNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageNormalizer {
    /// 実行環境を検出して作成
    pub fn new() -> Self {
        Self::with_platform(HostPlatform::detect())
    }

    pub fn with_platform(platform: HostPlatform) -> Self {
        Self {
            platform,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            handles: HandleRegistry::new(),
        }
    }

    pub fn with_jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality.clamp(1, 100);
        self
    }

    /// 解放されていないデコードハンドル数
    pub fn live_handles(&self) -> usize {
        self.handles.live()
    }

    /// 1枚を正規化
    pub fn normalize(&self, source: &SourceImage) -> Result<NormalizedImage> {
        let format = SupportedFormat::from_mime(&source.mime_type).ok_or_else(|| {
            FusionError::UnsupportedFileType {
                file_name: source.file_name.clone(),
                mime_type: source.mime_type.clone(),
            }
        })?;

        let handle = self.handles.register(&source.bytes);
        let decoded = image::load_from_memory(handle.bytes()).map_err(|e| FusionError::CorruptImage {
            file_name: source.file_name.clone(),
            message: e.to_string(),
            android: self.platform.is_android(),
        })?;

        let mut surface = Surface::allocate(decoded.width(), decoded.height()).map_err(|reason| {
            FusionError::SurfaceUnavailable {
                file_name: source.file_name.clone(),
                reason,
            }
        })?;
        surface.draw(&decoded);
        drop(decoded);

        let encoded = surface
            .encode(format, self.jpeg_quality)
            .map_err(|e| encode_failed(&source.file_name, e))?;
        drop(handle);

        if encoded.is_empty() {
            return Err(FusionError::InvalidOutput(source.file_name.clone()));
        }

        let data_url = to_data_url(format.mime_type(), &BASE64.encode(&encoded));
        let (mime_type, base64_data) = split_data_url(&data_url)
            .map_err(|_| FusionError::InvalidOutput(source.file_name.clone()))?;
        if base64_data.is_empty() {
            return Err(FusionError::InvalidOutput(source.file_name.clone()));
        }

        debug!(
            file = %source.file_name,
            mime = mime_type,
            width = surface.width(),
            height = surface.height(),
            bytes = encoded.len(),
            "画像を正規化"
        );

        Ok(NormalizedImage {
            base64_data: base64_data.to_string(),
            mime_type: mime_type.to_string(),
            width: surface.width(),
            height: surface.height(),
        })
    }

    /// 複数枚を並列に正規化（入力順を保持、1枚でも失敗したら全体が失敗）
    pub async fn normalize_all(&self, sources: Vec<SourceImage>) -> Result<Vec<NormalizedImage>> {
        let tasks = sources.into_iter().map(|source| {
            let normalizer = self.clone();
            async move { tokio::task::spawn_blocking(move || normalizer.normalize(&source)).await? }
        });

        try_join_all(tasks).await
    }
}

fn encode_failed(file_name: &str, err: image::ImageError) -> FusionError {
    FusionError::EncodeFailed {
        file_name: file_name.to_string(),
        message: err.to_string(),
    }
}
