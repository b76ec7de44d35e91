//! Gemini API ワイヤ型
//!
//! generateContent のリクエスト/レスポンス構造。
//! HTTP送信はCLI側（reqwest）が担当し、ここは型とビルダーのみ。

use crate::types::NormalizedImage;
use serde::{Deserialize, Serialize};

/// 画像生成モデル
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-image-preview";

/// モデル一覧エンドポイント
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// 生成エンドポイントURL（APIキーはクエリに付ける）
pub fn generate_content_url(base: &str, model: &str) -> String {
    format!("{}/{}:generateContent", base.trim_end_matches('/'), model)
}

/// Gemini APIリクエスト
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

impl Part {
    pub fn text(&self) -> Option<&str> {
        match self {
            Part::Text { text } => Some(text),
            Part::InlineData { .. } => None,
        }
    }

    pub fn inline_data(&self) -> Option<&InlineData> {
        match self {
            Part::InlineData { inline_data } => Some(inline_data),
            Part::Text { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InlineData {
    #[serde(alias = "mimeType")]
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GenerationConfig {
    #[serde(rename = "responseModalities")]
    pub response_modalities: Vec<String>,
}

impl Default for GenerationConfig {
    /// 画像とテキストの両方を要求
    fn default() -> Self {
        Self {
            response_modalities: vec!["IMAGE".to_string(), "TEXT".to_string()],
        }
    }
}

/// テキストパート
pub fn text_part(text: impl Into<String>) -> Part {
    Part::Text { text: text.into() }
}

/// 正規化済み画像のインラインパート
pub fn image_part(image: &NormalizedImage) -> Part {
    Part::InlineData {
        inline_data: InlineData {
            mime_type: image.mime_type.clone(),
            data: image.base64_data.clone(),
        },
    }
}

impl GenerateContentRequest {
    /// 1つのcontentにパートを順番通り詰める
    pub fn from_parts(parts: Vec<Part>) -> Self {
        Self {
            contents: vec![Content { parts }],
            generation_config: GenerationConfig::default(),
        }
    }

    /// 全パート（送信順）
    pub fn parts(&self) -> impl Iterator<Item = &Part> {
        self.contents.iter().flat_map(|c| c.parts.iter())
    }
}

/// Gemini APIレスポンス
///
/// フィールドはすべて欠落し得る。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<ResponseContent>,
    #[serde(default, rename = "finishReason")]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, alias = "inlineData")]
    pub inline_data: Option<InlineData>,
}

/// エラーレスポンス `{"error": {"code": 400, "message": "...", "status": "..."}}`
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}
