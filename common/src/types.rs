//! 生成リクエスト/結果の型定義
//!
//! - ImageDimensions: 入力画像のピクセルサイズ
//! - NormalizedImage: 正規化済み画像（送信直前に生成、使い捨て）
//! - GenerationResult: API 1回分の出力

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

impl ImageDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// 正規化済み画像
///
/// base64データとMIMEタイプの組。キャッシュも永続化もしない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedImage {
    pub base64_data: String,
    pub mime_type: String,
    pub width: u32,
    pub height: u32,
}

impl NormalizedImage {
    pub fn dimensions(&self) -> ImageDimensions {
        ImageDimensions::new(self.width, self.height)
    }
}

/// 生成結果
///
/// `image_url` は `data:{mime};base64,{data}` 形式。
/// 画像が無い場合（テキストのみ、または両方None）は呼び出し側で失敗として扱う。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub image_url: Option<String>,
    pub text: Option<String>,
}

impl GenerationResult {
    pub fn has_image(&self) -> bool {
        self.image_url.is_some()
    }
}
