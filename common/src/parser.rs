//! APIレスポンスパーサー
//!
//! generateContent のレスポンスから画像とテキストを取り出す。
//! - 画像: 最初の inline_data パートを data URL に変換
//! - テキスト: 最初の空でない text パート
//!
//! data URL の分解/組み立てもここに置く。

use crate::error::{Error, Result};
use crate::gemini::{ApiErrorBody, GeminiResponse};
use crate::types::GenerationResult;

/// `data:{mime};base64,{data}` を組み立てる
pub fn to_data_url(mime_type: &str, base64_data: &str) -> String {
    format!("data:{};base64,{}", mime_type, base64_data)
}

/// data URL を (MIMEタイプ, base64データ) に分解
///
/// # Arguments
/// * `data_url` - "data:image/jpeg;base64,/9j/4AAQ..." 形式
///
/// # Returns
/// * `Ok((mime, data))` - 分解成功
/// * `Err` - base64 data URL でない場合
pub fn split_data_url(data_url: &str) -> Result<(&str, &str)> {
    let rest = data_url
        .strip_prefix("data:")
        .ok_or_else(|| Error::Parse("data URL must start with 'data:'".into()))?;
    let (header, data) = rest
        .split_once(',')
        .ok_or_else(|| Error::Parse("data URL has no payload".into()))?;
    let mime_type = header
        .strip_suffix(";base64")
        .ok_or_else(|| Error::Parse("data URL is not base64 encoded".into()))?;

    if mime_type.is_empty() {
        return Err(Error::Parse("data URL has no MIME type".into()));
    }
    Ok((mime_type, data))
}

/// デシリアライズ済みレスポンスから生成結果を抽出
///
/// 最初の候補のパートを順に走査する。どちらも見つからなければ両方None。
pub fn extract_generation_result(response: &GeminiResponse) -> GenerationResult {
    let parts = response
        .candidates
        .first()
        .and_then(|c| c.content.as_ref())
        .into_iter()
        .flat_map(|c| c.parts.iter());

    let mut result = GenerationResult::default();
    for part in parts {
        if result.image_url.is_none() {
            if let Some(inline) = &part.inline_data {
                result.image_url = Some(to_data_url(&inline.mime_type, &inline.data));
            }
        }
        if result.text.is_none() {
            if let Some(text) = part.text.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
                result.text = Some(text.to_string());
            }
        }
    }
    result
}

/// レスポンスボディ（JSON文字列）をパース
pub fn parse_generation_response(body: &str) -> Result<GenerationResult> {
    let response: GeminiResponse = serde_json::from_str(body)
        .map_err(|e| Error::Parse(format!("generateContent response: {}", e)))?;
    Ok(extract_generation_result(&response))
}

/// エラーレスポンスからメッセージを取り出す（形式外ならNone）
pub fn parse_api_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .map(|b| b.error.message)
        .filter(|m| !m.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================
    // data URL テスト
    // =============================================

    #[test]
    fn test_split_data_url() {
        let (mime, data) = split_data_url("data:image/jpeg;base64,/9j/4AAQSkZJRg==").unwrap();
        assert_eq!(mime, "image/jpeg");
        assert_eq!(data, "/9j/4AAQSkZJRg==");
    }

    #[test]
    fn test_split_data_url_png() {
        let (mime, data) = split_data_url("data:image/png;base64,iVBORw0KGgo=").unwrap();
        assert_eq!(mime, "image/png");
        assert_eq!(data, "iVBORw0KGgo=");
    }

    #[test]
    fn test_split_data_url_invalid() {
        assert!(split_data_url("").is_err());
        assert!(split_data_url("image/png;base64,AAAA").is_err());
        assert!(split_data_url("data:image/png;base64").is_err());
        assert!(split_data_url("data:image/png,AAAA").is_err());
        assert!(split_data_url("data:;base64,AAAA").is_err());
    }

    #[test]
    fn test_to_data_url() {
        let url = to_data_url("image/webp", "UklGR");
        assert_eq!(url, "data:image/webp;base64,UklGR");
        assert_eq!(split_data_url(&url).unwrap(), ("image/webp", "UklGR"));
    }

    // =============================================
    // parse_generation_response テスト
    // =============================================

    #[test]
    fn test_parse_image_and_text() {
        let body = r#"{
  "candidates": [{
    "content": {
      "parts": [
        {"text": "Here is your figure."},
        {"inlineData": {"mimeType": "image/png", "data": "iVBORw0KGgo="}}
      ]
    }
  }]
}"#;
        let result = parse_generation_response(body).unwrap();
        assert_eq!(result.image_url.as_deref(), Some("data:image/png;base64,iVBORw0KGgo="));
        assert_eq!(result.text.as_deref(), Some("Here is your figure."));
    }

    #[test]
    fn test_parse_first_image_wins() {
        let body = r#"{"candidates":[{"content":{"parts":[
            {"inlineData":{"mimeType":"image/png","data":"FIRST"}},
            {"inlineData":{"mimeType":"image/jpeg","data":"SECOND"}}
        ]}}]}"#;
        let result = parse_generation_response(body).unwrap();
        assert_eq!(result.image_url.as_deref(), Some("data:image/png;base64,FIRST"));
        assert!(result.text.is_none());
    }

    #[test]
    fn test_parse_skips_blank_text() {
        let body = r#"{"candidates":[{"content":{"parts":[
            {"text":"   "},
            {"text":"Second note"}
        ]}}]}"#;
        let result = parse_generation_response(body).unwrap();
        assert!(result.image_url.is_none());
        assert_eq!(result.text.as_deref(), Some("Second note"));
    }

    #[test]
    fn test_parse_snake_case_inline_data() {
        let body = r#"{"candidates":[{"content":{"parts":[{"inline_data":{"mime_type":"image/webp","data":"UklG"}}]}}]}"#;
        let result = parse_generation_response(body).unwrap();
        assert_eq!(result.image_url.as_deref(), Some("data:image/webp;base64,UklG"));
    }

    #[test]
    fn test_parse_no_candidates() {
        let result = parse_generation_response(r#"{"candidates": []}"#).unwrap();
        assert_eq!(result, GenerationResult::default());

        let result = parse_generation_response(r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#).unwrap();
        assert!(!result.has_image());
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = parse_generation_response("not json");
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_parse_api_error_message() {
        let body = r#"{"error":{"code":400,"message":"API key not valid.","status":"INVALID_ARGUMENT"}}"#;
        assert_eq!(parse_api_error_message(body).as_deref(), Some("API key not valid."));
        assert_eq!(parse_api_error_message("<html>Bad Gateway</html>"), None);
        assert_eq!(parse_api_error_message(r#"{"error":{"message":""}}"#), None);
    }
}
