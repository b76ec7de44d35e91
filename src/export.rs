//! 生成画像の保存
//!
//! data URL をデコードしてファイルに書き出す。
//! 出力先が省略またはディレクトリの場合は `{workflow}-{YYYYmmdd-HHMMSS}.{ext}`。

use crate::error::{FusionError, Result};
use crate::workflow::Workflow;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::{DateTime, Local};
use figure_fusion_common::{split_data_url, GenerationResult};
use std::path::{Path, PathBuf};
use tracing::debug;

/// MIMEタイプから拡張子
pub fn extension_for_mime(mime_type: &str) -> &'static str {
    match mime_type.to_ascii_lowercase().as_str() {
        "image/jpeg" | "image/jpg" => "jpg",
        "image/webp" => "webp",
        "image/gif" => "gif",
        _ => "png",
    }
}

pub fn default_file_name(workflow: Workflow, extension: &str, now: DateTime<Local>) -> String {
    format!("{}-{}.{}", workflow.slug(), now.format("%Y%m%d-%H%M%S"), extension)
}

fn output_path_for(output: Option<&Path>, workflow: Workflow, extension: &str, now: DateTime<Local>) -> PathBuf {
    match output {
        Some(path) if !path.is_dir() && path.extension().is_some() => path.to_path_buf(),
        Some(dir) => dir.join(default_file_name(workflow, extension, now)),
        None => PathBuf::from(default_file_name(workflow, extension, now)),
    }
}

/// data URL を (MIMEタイプ, バイト列) にデコード
pub fn decode_data_url(data_url: &str) -> Result<(String, Vec<u8>)> {
    let (mime_type, data) = split_data_url(data_url)?;
    let bytes = BASE64
        .decode(data.trim())
        .map_err(|e| FusionError::ResponseDecode(format!("image data is not valid base64: {e}")))?;
    Ok((mime_type.to_string(), bytes))
}

/// 生成画像を保存して書き出し先を返す
pub fn save_generated_image(result: &GenerationResult, workflow: Workflow, output: Option<&Path>) -> Result<PathBuf> {
    let data_url = result
        .image_url
        .as_deref()
        .ok_or_else(|| FusionError::NoImageGenerated { text: result.text.clone() })?;
    let (mime_type, bytes) = decode_data_url(data_url)?;

    let path = output_path_for(output, workflow, extension_for_mime(&mime_type), Local::now());
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, &bytes)?;

    debug!(path = %path.display(), mime = %mime_type, bytes = bytes.len(), "生成画像を保存");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::tempdir;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 9, 1, 13, 5, 9).single().expect("時刻生成失敗")
    }

    #[test]
    fn test_extension_for_mime() {
        assert_eq!(extension_for_mime("image/jpeg"), "jpg");
        assert_eq!(extension_for_mime("image/PNG"), "png");
        assert_eq!(extension_for_mime("image/webp"), "webp");
        assert_eq!(extension_for_mime("application/octet-stream"), "png");
    }

    #[test]
    fn test_default_file_name() {
        assert_eq!(
            default_file_name(Workflow::TryOn, "png", fixed_time()),
            "try-on-20250901-130509.png"
        );
    }

    #[test]
    fn test_output_path_variants() {
        let dir = tempdir().expect("Failed to create temp dir");

        let explicit = dir.path().join("out.png");
        assert_eq!(output_path_for(Some(&explicit), Workflow::Figure, "jpg", fixed_time()), explicit);

        let into_dir = output_path_for(Some(dir.path()), Workflow::Figure, "jpg", fixed_time());
        assert_eq!(into_dir, dir.path().join("figure-20250901-130509.jpg"));

        let cwd = output_path_for(None, Workflow::SoccerUniform, "png", fixed_time());
        assert_eq!(cwd, PathBuf::from("uniform-20250901-130509.png"));
    }

    #[test]
    fn test_decode_data_url() {
        let (mime, bytes) = decode_data_url("data:image/png;base64,QUJD").unwrap();
        assert_eq!(mime, "image/png");
        assert_eq!(bytes, b"ABC");

        assert!(matches!(
            decode_data_url("data:image/png;base64,@@@"),
            Err(FusionError::ResponseDecode(_))
        ));
    }
}
