//! Gemini API連携
//!
//! generateContent を1回呼び出して GenerationResult を返す。
//! スタジオ側は ImageGenerator トレイト越しに呼ぶので、テストでは偽実装に差し替えられる。

mod client;

pub use client::GeminiClient;

use crate::error::Result;
use figure_fusion_common::{GenerateContentRequest, GenerationResult};
use std::future::Future;

/// 画像生成バックエンド
pub trait ImageGenerator: Send + Sync {
    fn generate(
        &self,
        request: GenerateContentRequest,
    ) -> impl Future<Output = Result<GenerationResult>> + Send;
}
