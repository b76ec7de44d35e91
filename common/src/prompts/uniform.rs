//! サッカーユニフォームプロンプト
//!
//! 各フィールドを句に変換してカンマで連結する。
//! 空文字・false・パターン "None" の項目は句ごと省略する（プレースホルダは出さない）。

use crate::choice::{Choice, OptionSet};
use crate::options::{
    JerseyOptions, JerseyPattern, RenderOptions, ShortsOptions, ShortsPattern,
    SoccerUniformOptions,
};

const RENDER_SUFFIX: &str = "high detail, high resolution, on a mannequin or plain background";

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn lowered<T: OptionSet>(choice: &Choice<T>) -> Option<String> {
    non_empty(choice.as_str()).map(str::to_lowercase)
}

/// ジャージ（上）の句リスト
pub fn jersey_clauses(jersey: &JerseyOptions) -> Vec<String> {
    let mut parts = Vec::new();

    if let Some(color) = non_empty(&jersey.main_color) {
        parts.push(format!("{color} jersey"));
    }
    if let Some(color) = non_empty(&jersey.accent_color) {
        parts.push(format!("with {color} accents"));
    }
    if !jersey.pattern.is(JerseyPattern::None) {
        if let Some(pattern) = lowered(&jersey.pattern) {
            parts.push(format!("{pattern} pattern"));
        }
    }
    if let Some(neckline) = lowered(&jersey.neckline) {
        parts.push(format!("{neckline} collar"));
    }
    if let Some(sleeves) = lowered(&jersey.sleeves) {
        parts.push(format!("{sleeves} sleeves"));
    }
    if let Some(fit) = lowered(&jersey.fit) {
        parts.push(fit);
    }
    if let Some(material) = lowered(&jersey.material) {
        parts.push(format!("{material} material"));
    }
    if let Some(logo) = non_empty(&jersey.team_logo) {
        parts.push(format!("team logo '{logo}' on chest"));
    }
    if let Some(sponsor) = non_empty(&jersey.sponsor_logo) {
        parts.push(format!("sponsor logo '{sponsor}' on front"));
    }
    if let Some(number) = non_empty(&jersey.player_number) {
        let mut clause = format!("number {number} on back");
        if let Some(font) = lowered(&jersey.font_style) {
            clause.push_str(&format!(" in {font} font"));
        }
        parts.push(clause);
    }
    if let Some(name) = non_empty(&jersey.player_name) {
        parts.push(format!("player name '{name}' above number"));
    }

    parts
}

/// ショーツ（下）の句リスト
///
/// アクセントカラーはサイドストライプ柄の時だけ使う。
pub fn shorts_clauses(shorts: &ShortsOptions) -> Vec<String> {
    let mut parts = Vec::new();

    if let Some(color) = non_empty(&shorts.main_color) {
        parts.push(format!("matching {color} shorts"));
    }
    if shorts.pattern.is(ShortsPattern::SideStripes) {
        if let Some(color) = non_empty(&shorts.accent_color) {
            parts.push(format!("with {color} side stripes"));
        }
    }
    if let Some(length) = lowered(&shorts.length) {
        parts.push(format!("{length} length"));
    }
    if let Some(waistband) = lowered(&shorts.waistband) {
        parts.push(waistband);
    }
    if let Some(fit) = lowered(&shorts.fit) {
        parts.push(fit);
    }
    if shorts.team_logo {
        parts.push("team logo on thigh".to_string());
    }

    parts
}

/// レンダリング指定の句リスト（固定の品質指定を末尾に付ける）
pub fn render_clauses(render: &RenderOptions) -> Vec<String> {
    let mut parts = Vec::new();

    if let Some(view) = lowered(&render.view) {
        parts.push(view);
    }
    if let Some(style) = lowered(&render.style) {
        parts.push(style);
    }
    parts.push(RENDER_SUFFIX.to_string());

    parts
}

/// サッカーユニフォームプロンプト生成
///
/// `A complete soccer uniform set: {ジャージ}; {ショーツ}; {レンダリング}.`
/// 句が1つも無いセクションは区切りごと省略する。
pub fn build_soccer_uniform_prompt(options: &SoccerUniformOptions) -> String {
    let sections: Vec<String> = [
        jersey_clauses(&options.jersey),
        shorts_clauses(&options.shorts),
        render_clauses(&options.render),
    ]
    .into_iter()
    .filter(|parts| !parts.is_empty())
    .map(|parts| parts.join(", "))
    .collect();

    format!("A complete soccer uniform set: {}.", sections.join("; "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{FontStyle, JerseyFit, Neckline, RenderStyle, RenderView};

    #[test]
    fn test_default_uniform_prompt() {
        let prompt = build_soccer_uniform_prompt(&SoccerUniformOptions::default());

        assert_eq!(
            prompt,
            "A complete soccer uniform set: White jersey, with Royal Blue accents, v-neck collar, \
             short sleeves, athletic cut, breathable polyester material, team logo 'Eagle shield' on chest, \
             sponsor logo 'AI Sports' on front, number 10 on back in bold font, player name 'GEMINI' above number; \
             matching White shorts, with Royal Blue side stripes, mid-thigh length, elastic with drawstring, \
             loose fit, team logo on thigh; front view, photorealistic, high detail, high resolution, \
             on a mannequin or plain background."
        );
    }

    #[test]
    fn test_empty_team_logo_omits_clause() {
        let mut options = SoccerUniformOptions::default();
        options.jersey.team_logo = String::new();
        options.shorts.team_logo = false;

        let prompt = build_soccer_uniform_prompt(&options);
        assert!(!prompt.contains("team logo"));
        assert!(prompt.contains("sponsor logo 'AI Sports'"));
    }

    #[test]
    fn test_shorts_logo_flag_controls_thigh_clause() {
        let mut options = SoccerUniformOptions::default();
        options.shorts.team_logo = false;
        assert!(!build_soccer_uniform_prompt(&options).contains("team logo on thigh"));

        options.shorts.team_logo = true;
        assert!(build_soccer_uniform_prompt(&options).contains("team logo on thigh"));
    }

    #[test]
    fn test_pattern_none_is_omitted() {
        let mut options = SoccerUniformOptions::default();
        assert!(!build_soccer_uniform_prompt(&options).contains("pattern"));

        options.jersey.pattern = JerseyPattern::Checkered.into();
        assert!(build_soccer_uniform_prompt(&options).contains("checkered pattern"));
    }

    #[test]
    fn test_shorts_accent_only_with_side_stripes() {
        let mut options = SoccerUniformOptions::default();
        options.shorts.pattern = ShortsPattern::None.into();

        let clauses = shorts_clauses(&options.shorts);
        assert!(!clauses.iter().any(|c| c.contains("side stripes")));
    }

    #[test]
    fn test_number_without_font() {
        let mut jersey = JerseyOptions::default();
        jersey.font_style = Choice::parse("");
        let clauses = jersey_clauses(&jersey);
        assert!(clauses.contains(&"number 10 on back".to_string()));

        jersey.player_number = String::new();
        let clauses = jersey_clauses(&jersey);
        assert!(!clauses.iter().any(|c| c.starts_with("number")));
    }

    #[test]
    fn test_free_text_interpolated_verbatim() {
        let mut jersey = JerseyOptions::default();
        jersey.team_logo = "Lion's \"roaring\" head".to_string();
        jersey.player_name = "O'NEIL".to_string();
        let clauses = jersey_clauses(&jersey);

        assert!(clauses.contains(&"team logo 'Lion's \"roaring\" head' on chest".to_string()));
        assert!(clauses.contains(&"player name 'O'NEIL' above number".to_string()));
    }

    #[test]
    fn test_unrecognized_structural_value_is_lowercased_verbatim() {
        let mut jersey = JerseyOptions::default();
        jersey.neckline = Choice::parse("Mandarin");
        let clauses = jersey_clauses(&jersey);
        assert!(clauses.contains(&"mandarin collar".to_string()));
    }

    #[test]
    fn test_all_empty_jersey_and_shorts() {
        let options = SoccerUniformOptions {
            jersey: JerseyOptions {
                main_color: String::new(),
                accent_color: String::new(),
                pattern: JerseyPattern::None.into(),
                team_logo: String::new(),
                sponsor_logo: String::new(),
                player_number: String::new(),
                player_name: String::new(),
                font_style: FontStyle::Bold.into(),
                neckline: Choice::parse(""),
                sleeves: Choice::parse(""),
                fit: Choice::parse(""),
                material: Choice::parse(""),
            },
            shorts: ShortsOptions {
                main_color: String::new(),
                accent_color: String::new(),
                pattern: ShortsPattern::None.into(),
                team_logo: false,
                length: Choice::parse(""),
                waistband: Choice::parse(""),
                fit: Choice::parse(""),
            },
            render: RenderOptions {
                view: RenderView::ThreeQuarter.into(),
                style: RenderStyle::ThreeD.into(),
                ..RenderOptions::default()
            },
        };

        let prompt = build_soccer_uniform_prompt(&options);
        assert_eq!(
            prompt,
            "A complete soccer uniform set: 3/4 view, 3d style, high detail, high resolution, on a mannequin or plain background."
        );
    }

    #[test]
    fn test_fit_and_neckline_labels() {
        let mut jersey = JerseyOptions::default();
        jersey.fit = JerseyFit::Slim.into();
        jersey.neckline = Neckline::RoundNeck.into();
        let clauses = jersey_clauses(&jersey);
        assert!(clauses.contains(&"slim fit".to_string()));
        assert!(clauses.contains(&"round neck collar".to_string()));
    }
}
