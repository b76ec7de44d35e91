use super::ImageGenerator;
use crate::config::Config;
use crate::error::{FusionError, Result};
use figure_fusion_common::gemini::generate_content_url;
use figure_fusion_common::parser::{parse_api_error_message, parse_generation_response};
use figure_fusion_common::{GenerateContentRequest, GenerationResult};
use std::time::Duration;
use tracing::{debug, warn};

/// reqwest による Gemini クライアント
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            api_key: api_key.into(),
            endpoint: endpoint.into(),
        })
    }

    /// 設定から作成（APIキーが無ければ MissingApiKey）
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.get_api_key()?;
        let endpoint = generate_content_url(&config.api_base, &config.model);
        Self::new(api_key, endpoint, Duration::from_secs(config.timeout_seconds.max(1)))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn post(&self, request: &GenerateContentRequest) -> Result<GenerationResult> {
        debug!(
            endpoint = %self.endpoint,
            parts = request.parts().count(),
            "generateContent を送信"
        );

        let response = self
            .http
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = parse_api_error_message(&body)
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
            warn!(status = status.as_u16(), %message, "Gemini API がエラーを返却");
            return Err(FusionError::Api(message));
        }

        let result = parse_generation_response(&body)
            .map_err(|e| FusionError::ResponseDecode(e.to_string()))?;
        debug!(
            status = status.as_u16(),
            has_image = result.has_image(),
            has_text = result.text.is_some(),
            "generateContent 応答"
        );
        Ok(result)
    }
}

impl ImageGenerator for GeminiClient {
    async fn generate(&self, request: GenerateContentRequest) -> Result<GenerationResult> {
        self.post(&request).await
    }
}
