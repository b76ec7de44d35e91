//! 生成スタジオ
//!
//! 1回の生成 = 正規化 → プロンプト生成 → API呼び出し → 結果検証。
//! - フィギュア: [画像, テキスト]
//! - 仮想試着: [人物, 衣類1..4, テキスト]
//! - ユニフォーム: [テキスト]
//!
//! 各ワークフローは RequestGate を持ち、同じワークフローの二重送信を拒否する。

mod gate;

pub use gate::{GateGuard, RequestGate};

use crate::error::{FusionError, Result};
use crate::gemini::ImageGenerator;
use crate::normalizer::{ImageNormalizer, SourceImage};
use crate::workflow::Workflow;
use figure_fusion_common::{
    build_figure_prompt, build_soccer_uniform_prompt, build_try_on_prompt, image_part, text_part,
    FigureOptions, GenerateContentRequest, GenerationResult, SoccerUniformOptions,
    TryOnOptions, MAX_TRY_ON_ITEMS,
};
use tracing::{info, warn};

pub struct Studio<G> {
    generator: G,
    normalizer: ImageNormalizer,
    figure_gate: RequestGate,
    try_on_gate: RequestGate,
    uniform_gate: RequestGate,
}

impl<G: ImageGenerator> Studio<G> {
    pub fn new(generator: G, normalizer: ImageNormalizer) -> Self {
        Self {
            generator,
            normalizer,
            figure_gate: RequestGate::new(Workflow::Figure),
            try_on_gate: RequestGate::new(Workflow::TryOn),
            uniform_gate: RequestGate::new(Workflow::SoccerUniform),
        }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn gate(&self, workflow: Workflow) -> &RequestGate {
        match workflow {
            Workflow::Figure => &self.figure_gate,
            Workflow::TryOn => &self.try_on_gate,
            Workflow::SoccerUniform => &self.uniform_gate,
        }
    }

    /// フィギュア変換
    pub async fn transform_figure(&self, image: SourceImage, options: &FigureOptions) -> Result<GenerationResult> {
        let _guard = self.figure_gate.acquire()?;

        let normalized = self.normalizer.normalize_all(vec![image]).await?;
        let prompt = build_figure_prompt(options, normalized[0].dimensions());
        let mut parts: Vec<_> = normalized.iter().map(image_part).collect();
        parts.push(text_part(prompt));

        self.run(Workflow::Figure, GenerateContentRequest::from_parts(parts)).await
    }

    /// 仮想試着（1枚目が人物、衣類は1〜4枚）
    pub async fn virtual_try_on(
        &self,
        person: Option<SourceImage>,
        items: Vec<SourceImage>,
        options: &TryOnOptions,
    ) -> Result<GenerationResult> {
        let person = person.ok_or(FusionError::MissingPerson)?;
        check_item_count(items.len())?;
        let _guard = self.try_on_gate.acquire()?;

        let mut sources = Vec::with_capacity(items.len() + 1);
        sources.push(person);
        sources.extend(items);

        let normalized = self.normalizer.normalize_all(sources).await?;
        let prompt = build_try_on_prompt(&options.pose, &options.background);
        let mut parts: Vec<_> = normalized.iter().map(image_part).collect();
        parts.push(text_part(prompt));

        self.run(Workflow::TryOn, GenerateContentRequest::from_parts(parts)).await
    }

    /// サッカーユニフォーム（テキストのみ）
    pub async fn design_uniform(&self, options: &SoccerUniformOptions) -> Result<GenerationResult> {
        let _guard = self.uniform_gate.acquire()?;

        let prompt = build_soccer_uniform_prompt(options);
        self.run(
            Workflow::SoccerUniform,
            GenerateContentRequest::from_parts(vec![text_part(prompt)]),
        )
        .await
    }

    async fn run(&self, workflow: Workflow, request: GenerateContentRequest) -> Result<GenerationResult> {
        info!(workflow = %workflow, parts = request.parts().count(), "生成リクエスト開始");

        let result = self.generator.generate(request).await?;
        if !result.has_image() {
            warn!(workflow = %workflow, text = ?result.text, "画像が返されなかった");
            return Err(FusionError::NoImageGenerated { text: result.text });
        }

        info!(workflow = %workflow, "生成完了");
        Ok(result)
    }
}

/// 送信せずにフィギュアのプロンプトだけ作る（入力画像は検証する）
pub async fn preview_figure_prompt(
    normalizer: &ImageNormalizer,
    image: SourceImage,
    options: &FigureOptions,
) -> Result<String> {
    let normalized = normalizer.normalize_all(vec![image]).await?;
    Ok(build_figure_prompt(options, normalized[0].dimensions()))
}

/// 送信せずに試着のプロンプトだけ作る（入力画像は検証する）
pub async fn preview_try_on_prompt(
    normalizer: &ImageNormalizer,
    person: Option<SourceImage>,
    items: Vec<SourceImage>,
    options: &TryOnOptions,
) -> Result<String> {
    let person = person.ok_or(FusionError::MissingPerson)?;
    check_item_count(items.len())?;

    let mut sources = vec![person];
    sources.extend(items);
    normalizer.normalize_all(sources).await?;
    Ok(build_try_on_prompt(&options.pose, &options.background))
}

fn check_item_count(count: usize) -> Result<()> {
    match count {
        0 => Err(FusionError::MissingItems),
        n if n > MAX_TRY_ON_ITEMS => Err(FusionError::TooManyItems {
            count: n,
            max: MAX_TRY_ON_ITEMS,
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_item_count() {
        assert!(matches!(check_item_count(0), Err(FusionError::MissingItems)));
        assert!(check_item_count(1).is_ok());
        assert!(check_item_count(4).is_ok());
        assert!(matches!(
            check_item_count(5),
            Err(FusionError::TooManyItems { count: 5, max: 4 })
        ));
    }
}
