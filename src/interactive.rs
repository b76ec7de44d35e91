//! 対話式オプション選択
//!
//! フィギュアの各オプションを dialoguer の Select で1つずつ選ぶ。
//! options コマンド用の選択肢一覧もここで組み立てる。
//! 表示は現在の言語のラベルと説明文。

use crate::error::Result;
use crate::workflow::Workflow;
use dialoguer::{Password, Select};
use figure_fusion_common::options::{
    ArtStyle, ColorScheme, Detailing, FigureBackground, FigureBase, FigurePose, FontStyle, JerseyFit,
    JerseyMaterial, JerseyPattern, Neckline, RenderModel, RenderStyle, RenderView, ShortsFit,
    ShortsLength, ShortsPattern, Sleeves, Texture, TryOnBackground, TryOnPose, Waistband,
    FIGURE_MATERIALS, FIGURE_SCALES,
};
use figure_fusion_common::{Choice, FigureOptions, Localizer, OptionSet};

/// 選択肢1行（ラベル + 説明文があれば併記）
pub fn option_line(localizer: &Localizer, key: &str) -> String {
    let label = localizer.t(key);
    match localizer.td(key) {
        "" => label.to_string(),
        description => format!("{label} - {description}"),
    }
}

fn select_index(localizer: &Localizer, label_key: &str, items: &[String], default: usize) -> Result<usize> {
    let index = Select::new()
        .with_prompt(localizer.t(label_key))
        .items(items)
        .default(default)
        .interact()?;
    Ok(index)
}

fn select_choice<T: OptionSet>(localizer: &Localizer, label_key: &str, current: &Choice<T>) -> Result<Choice<T>> {
    let items: Vec<String> = T::ALL.iter().map(|v| option_line(localizer, v.i18n_key())).collect();
    let default = current
        .known()
        .and_then(|value| T::ALL.iter().position(|v| *v == value))
        .unwrap_or(0);

    let index = select_index(localizer, label_key, &items, default)?;
    Ok(T::ALL[index].into())
}

fn select_label(localizer: &Localizer, label_key: &str, labels: &[&str], current: &str) -> Result<String> {
    let items: Vec<String> = labels.iter().map(|l| option_line(localizer, l)).collect();
    let default = labels.iter().position(|l| *l == current).unwrap_or(0);

    let index = select_index(localizer, label_key, &items, default)?;
    Ok(labels[index].to_string())
}

/// フィギュアオプションを対話で選ぶ（現在値を初期選択にする）
pub fn pick_figure_options(localizer: &Localizer, current: &FigureOptions) -> Result<FigureOptions> {
    println!("{}", localizer.t("customizeTitle"));

    Ok(FigureOptions {
        art_style: select_choice::<ArtStyle>(localizer, "artStyleLabel", &current.art_style)?,
        material: select_label(localizer, "materialLabel", FIGURE_MATERIALS, &current.material)?,
        texture: select_choice::<Texture>(localizer, "textureLabel", &current.texture)?,
        scale: select_label(localizer, "scaleLabel", FIGURE_SCALES, &current.scale)?,
        pose: select_choice::<FigurePose>(localizer, "poseLabel", &current.pose)?,
        color_scheme: select_choice::<ColorScheme>(localizer, "colorSchemeLabel", &current.color_scheme)?,
        detailing: select_choice::<Detailing>(localizer, "detailingLabel", &current.detailing)?,
        base: select_choice::<FigureBase>(localizer, "baseLabel", &current.base)?,
        background: select_choice::<FigureBackground>(localizer, "backgroundLabel", &current.background)?,
    })
}

/// 一覧表示の1セクション（見出し + 選択肢行）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSection {
    pub title: String,
    pub lines: Vec<String>,
}

fn section<T: OptionSet>(localizer: &Localizer, title_key: &str) -> CatalogSection {
    CatalogSection {
        title: localizer.t(title_key).to_string(),
        lines: T::ALL.iter().map(|v| option_line(localizer, v.i18n_key())).collect(),
    }
}

fn label_section(localizer: &Localizer, title_key: &str, labels: &[&str]) -> CatalogSection {
    CatalogSection {
        title: localizer.t(title_key).to_string(),
        lines: labels.iter().map(|l| option_line(localizer, l)).collect(),
    }
}

/// ワークフローの全選択肢（現在の言語）
pub fn option_catalog(localizer: &Localizer, workflow: Workflow) -> Vec<CatalogSection> {
    match workflow {
        Workflow::Figure => vec![
            section::<ArtStyle>(localizer, "artStyleLabel"),
            label_section(localizer, "scaleLabel", FIGURE_SCALES),
            label_section(localizer, "materialLabel", FIGURE_MATERIALS),
            section::<Texture>(localizer, "textureLabel"),
            section::<FigurePose>(localizer, "poseLabel"),
            section::<FigureBase>(localizer, "baseLabel"),
            section::<FigureBackground>(localizer, "backgroundLabel"),
            section::<ColorScheme>(localizer, "colorSchemeLabel"),
            section::<Detailing>(localizer, "detailingLabel"),
        ],
        Workflow::TryOn => vec![
            section::<TryOnPose>(localizer, "poseSectionTitle"),
            section::<TryOnBackground>(localizer, "backgroundSectionTitle"),
        ],
        Workflow::SoccerUniform => {
            let jersey = localizer.t("jerseyOptions");
            let shorts = localizer.t("shortsOptions");
            let render = localizer.t("renderOptions");
            let titled = |group: &str, mut s: CatalogSection| {
                s.title = format!("{group} / {}", s.title);
                s
            };
            vec![
                titled(jersey, section::<JerseyPattern>(localizer, "pattern")),
                titled(jersey, section::<FontStyle>(localizer, "fontStyle")),
                titled(jersey, section::<Neckline>(localizer, "neckline")),
                titled(jersey, section::<Sleeves>(localizer, "sleeves")),
                titled(jersey, section::<JerseyFit>(localizer, "fit")),
                titled(jersey, section::<JerseyMaterial>(localizer, "material")),
                titled(shorts, section::<ShortsPattern>(localizer, "pattern")),
                titled(shorts, section::<ShortsLength>(localizer, "length")),
                titled(shorts, section::<Waistband>(localizer, "waistband")),
                titled(shorts, section::<ShortsFit>(localizer, "fit")),
                titled(render, section::<RenderView>(localizer, "view")),
                titled(render, section::<RenderStyle>(localizer, "style")),
                titled(render, section::<RenderModel>(localizer, "generationModel")),
            ]
        }
    }
}

/// APIキーを伏せ字で入力
pub fn prompt_api_key() -> Result<String> {
    let key = Password::new().with_prompt("Gemini API key").interact()?;
    Ok(key.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use figure_fusion_common::Language;

    #[test]
    fn test_option_line_with_description() {
        let en = Localizer::new(Language::En);
        assert_eq!(
            option_line(&en, "Glossy"),
            "Glossy - A high-shine, reflective finish for a polished look."
        );
    }

    #[test]
    fn test_option_line_without_description() {
        let en = Localizer::new(Language::En);
        assert_eq!(option_line(&en, "Checkered"), "Checkered");
    }

    #[test]
    fn test_figure_catalog() {
        let en = Localizer::new(Language::En);
        let catalog = option_catalog(&en, Workflow::Figure);
        assert_eq!(catalog.len(), 9);
        assert_eq!(catalog[0].title, "Art Style");
        assert_eq!(catalog[0].lines.len(), 4);
        assert!(catalog[1].lines[0].starts_with("1/12 Scale - Mini scale"));
    }

    #[test]
    fn test_uniform_catalog_groups() {
        let en = Localizer::new(Language::En);
        let catalog = option_catalog(&en, Workflow::SoccerUniform);
        assert_eq!(catalog[0].title, "Jersey Options (Top) / Pattern");
        assert!(catalog.iter().any(|s| s.title == "Render Options / Generation Model"));
        assert!(catalog.iter().all(|s| !s.lines.is_empty()));
    }

    #[test]
    fn test_try_on_catalog_korean() {
        let ko = Localizer::new(Language::Ko);
        let catalog = option_catalog(&ko, Workflow::TryOn);
        assert_eq!(catalog[0].title, "포즈 선택");
        assert!(catalog[0].lines[0].starts_with("원본 포즈"));
    }

    #[test]
    fn test_option_line_uses_i18n_key() {
        let ko = Localizer::new(Language::Ko);
        let line = option_line(&ko, FigurePose::Sitting.i18n_key());
        assert!(line.starts_with("앉은 자세"));
    }
}
