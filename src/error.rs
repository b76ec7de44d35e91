use crate::workflow::Workflow;
use figure_fusion_common::Localizer;
use thiserror::Error;

/// エラー分類（表示メッセージとログレベルの切り替えに使う）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// ネットワーク呼び出し前に検出される入力エラー
    Validation,
    /// 画像のデコード/再エンコード失敗
    Processing,
    /// モデルが画像を返さなかった
    SoftFailure,
    /// HTTP/APIエラー
    Transport,
    /// I/O・設定・内部エラー
    Internal,
}

#[derive(Error, Debug)]
pub enum FusionError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Gemini API key is not set. Run `figure-fusion config --set-api-key YOUR_KEY` or set GEMINI_API_KEY")]
    MissingApiKey,

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Unsupported file type for '{file_name}' ({mime_type}). Please upload a JPG, PNG, or WEBP image.")]
    UnsupportedFileType { file_name: String, mime_type: String },

    #[error("{}", corrupt_image_message(.file_name, .message, .android))]
    CorruptImage {
        file_name: String,
        message: String,
        android: bool,
    },

    #[error("Could not prepare a drawing surface for '{file_name}': {reason}")]
    SurfaceUnavailable { file_name: String, reason: String },

    #[error("Failed to re-encode '{file_name}': {message}")]
    EncodeFailed { file_name: String, message: String },

    #[error("Failed to re-encode '{0}': the converted image was empty or invalid")]
    InvalidOutput(String),

    #[error("A photo of a person is required")]
    MissingPerson,

    #[error("At least one clothing item is required")]
    MissingItems,

    #[error("Too many clothing items: {count} (max {max})")]
    TooManyItems { count: usize, max: usize },

    #[error("A {0} request is already in progress")]
    RequestInFlight(Workflow),

    #[error("The model returned no image{}", .text.as_deref().map(|t| format!(": {t}")).unwrap_or_default())]
    NoImageGenerated { text: Option<String> },

    #[error("Gemini API Error: {0}")]
    Api(String),

    #[error("Failed to decode API response: {0}")]
    ResponseDecode(String),

    #[error("Interactive input failed: {0}")]
    Interaction(String),

    #[error("Background task failed: {0}")]
    Task(String),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] figure_fusion_common::Error),
}

fn corrupt_image_message(file_name: &str, message: &str, android: &bool) -> String {
    let mut text = format!("Failed to load image '{file_name}'. The file may be corrupt or in an unsupported format ({message}).");
    if *android {
        text.push_str(" On Android, save the image to your device first and select it again from local storage.");
    }
    text
}

impl FusionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FusionError::UnsupportedFileType { .. }
            | FusionError::MissingPerson
            | FusionError::MissingItems
            | FusionError::TooManyItems { .. }
            | FusionError::FileNotFound(_)
            | FusionError::MissingApiKey
            | FusionError::RequestInFlight(_) => ErrorKind::Validation,
            FusionError::CorruptImage { .. }
            | FusionError::SurfaceUnavailable { .. }
            | FusionError::EncodeFailed { .. }
            | FusionError::InvalidOutput(_) => ErrorKind::Processing,
            FusionError::NoImageGenerated { .. } => ErrorKind::SoftFailure,
            FusionError::Api(_) | FusionError::ResponseDecode(_) => ErrorKind::Transport,
            FusionError::Config(_)
            | FusionError::Interaction(_)
            | FusionError::Task(_)
            | FusionError::JsonParse(_)
            | FusionError::Io(_)
            | FusionError::Common(_) => ErrorKind::Internal,
        }
    }

    /// ユーザー向けメッセージ（ローカライズ済み）
    pub fn user_message(&self, localizer: &Localizer) -> String {
        match self {
            FusionError::MissingPerson => localizer.t("errorPerson").to_string(),
            FusionError::MissingItems => localizer.t("errorItems").to_string(),
            FusionError::NoImageGenerated { .. } => localizer.t("errorGenerate").to_string(),
            other => format!("{}\n\nDetails: {}", localizer.t("errorTransform"), other),
        }
    }
}

impl From<reqwest::Error> for FusionError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FusionError::ResponseDecode(err.to_string())
        } else {
            FusionError::Api(err.to_string())
        }
    }
}

impl From<tokio::task::JoinError> for FusionError {
    fn from(err: tokio::task::JoinError) -> Self {
        FusionError::Task(err.to_string())
    }
}

impl From<dialoguer::Error> for FusionError {
    fn from(err: dialoguer::Error) -> Self {
        FusionError::Interaction(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FusionError>;
