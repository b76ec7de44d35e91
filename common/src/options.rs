//! ワークフロー別オプション定義
//!
//! - FigureOptions: フィギュア変換
//! - TryOnPose / TryOnBackground: 仮想試着
//! - SoccerUniformOptions: サッカーユニフォーム
//!
//! 構造的なフィールドは閉じた列挙型、色・ロゴ・名前などは自由入力の文字列。

use crate::choice::{option_set, Choice};
use serde::{Deserialize, Serialize};

// =============================================
// フィギュア
// =============================================

option_set! {
    pub enum ArtStyle {
        Anime => "Anime",
        Realistic => "Realistic",
        Chibi => "Chibi/SD",
        Stylized => "Stylized",
    }
    default = Anime;
}

option_set! {
    pub enum Texture {
        Matte => "Matte",
        Glossy => "Glossy",
        Metallic => "Metallic",
        Weathered => "Weathered",
    }
    default = Matte;
}

option_set! {
    pub enum FigurePose {
        Standing => "Standing" | "Figure: Standing",
        Dynamic => "Dynamic/Action",
        Sitting => "Sitting" | "Figure: Sitting",
    }
    default = Standing;
}

option_set! {
    pub enum ColorScheme {
        Original => "Original Colors",
        Monochrome => "Monochrome",
        Vibrant => "Vibrant",
    }
    default = Original;
}

option_set! {
    pub enum Detailing {
        Standard => "Standard",
        High => "High",
        Ultra => "Ultra",
    }
    default = Standard;
}

option_set! {
    pub enum FigureBase {
        None => "None",
        SimpleDisc => "Simple Disc",
        ThemedDiorama => "Themed Diorama",
        Floating => "Floating",
    }
    default = SimpleDisc;
}

option_set! {
    pub enum FigureBackground {
        Studio => "Studio",
        Bookshelf => "Bookshelf",
        Desktop => "Desktop",
        Showcase => "Showcase",
    }
    default = Studio;
}

/// スケールの候補（自由入力も可）
pub const FIGURE_SCALES: &[&str] = &["1/12", "1/8", "1/7", "1/6", "1/4"];

/// 素材の候補（自由入力も可）
pub const FIGURE_MATERIALS: &[&str] = &["PVC/ABS", "Resin", "Polystone", "Metal"];

pub const DEFAULT_FIGURE_SCALE: &str = "1/7";
pub const DEFAULT_FIGURE_MATERIAL: &str = "PVC/ABS";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FigureOptions {
    pub art_style: Choice<ArtStyle>,
    pub material: String,
    pub texture: Choice<Texture>,
    pub scale: String,
    pub pose: Choice<FigurePose>,
    pub color_scheme: Choice<ColorScheme>,
    pub detailing: Choice<Detailing>,
    pub base: Choice<FigureBase>,
    pub background: Choice<FigureBackground>,
}

impl Default for FigureOptions {
    fn default() -> Self {
        Self {
            art_style: Choice::default(),
            material: DEFAULT_FIGURE_MATERIAL.to_string(),
            texture: Choice::default(),
            scale: DEFAULT_FIGURE_SCALE.to_string(),
            pose: Choice::default(),
            color_scheme: Choice::default(),
            detailing: Choice::default(),
            base: Choice::default(),
            background: Choice::default(),
        }
    }
}

// =============================================
// 仮想試着
// =============================================

option_set! {
    pub enum TryOnPose {
        Original => "Original Pose",
        Standing => "Standing" | "Try On: Standing",
        FashionModel => "Fashion Model",
        Walking => "Walking",
        Sitting => "Sitting" | "Try On: Sitting",
    }
    default = Original;
}

option_set! {
    pub enum TryOnBackground {
        Original => "Original Background",
        Studio => "Studio",
        Urban => "Urban",
        Nature => "Nature",
        Cafe => "Cafe",
    }
    default = Original;
}

/// 試着アイテムの上限
pub const MAX_TRY_ON_ITEMS: usize = 4;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TryOnOptions {
    pub pose: Choice<TryOnPose>,
    pub background: Choice<TryOnBackground>,
}

// =============================================
// サッカーユニフォーム
// =============================================

option_set! {
    pub enum JerseyPattern {
        None => "None",
        Stripes => "Stripes",
        Checkered => "Checkered",
        Gradient => "Gradient",
    }
    default = None;
}

option_set! {
    pub enum FontStyle {
        Bold => "Bold",
        Italic => "Italic",
        Futuristic => "Futuristic",
    }
    default = Bold;
}

option_set! {
    pub enum Neckline {
        VNeck => "V-Neck",
        RoundNeck => "Round Neck",
        Collar => "Collar",
    }
    default = VNeck;
}

option_set! {
    pub enum Sleeves {
        Short => "Short",
        Long => "Long",
    }
    default = Short;
}

option_set! {
    pub enum JerseyFit {
        Slim => "Slim Fit",
        Athletic => "Athletic Cut",
        Regular => "Regular",
    }
    default = Athletic;
}

option_set! {
    pub enum JerseyMaterial {
        BreathablePolyester => "Breathable Polyester",
        MoistureWicking => "Moisture-Wicking",
    }
    default = BreathablePolyester;
}

option_set! {
    pub enum ShortsPattern {
        None => "None",
        SideStripes => "Side Stripes",
    }
    default = SideStripes;
}

option_set! {
    pub enum ShortsLength {
        MidThigh => "Mid-thigh",
    }
    default = MidThigh;
}

option_set! {
    pub enum Waistband {
        ElasticDrawstring => "Elastic with Drawstring",
    }
    default = ElasticDrawstring;
}

option_set! {
    pub enum ShortsFit {
        Loose => "Loose Fit",
    }
    default = Loose;
}

option_set! {
    pub enum RenderView {
        Front => "Front View",
        ThreeQuarter => "3/4 View",
        FullBody => "Full Body View",
    }
    default = Front;
}

option_set! {
    pub enum RenderStyle {
        Realistic => "Realistic",
        Photorealistic => "Photorealistic",
        ThreeD => "3D Style",
    }
    default = Photorealistic;
}

option_set! {
    pub enum RenderModel {
        Standard => "Standard" | "Model: Standard",
        HighQuality => "High Quality" | "Model: High Quality",
    }
    default = Standard;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JerseyOptions {
    pub main_color: String,
    pub accent_color: String,
    pub pattern: Choice<JerseyPattern>,
    pub team_logo: String,
    pub sponsor_logo: String,
    pub player_number: String,
    pub player_name: String,
    pub font_style: Choice<FontStyle>,
    pub neckline: Choice<Neckline>,
    pub sleeves: Choice<Sleeves>,
    pub fit: Choice<JerseyFit>,
    pub material: Choice<JerseyMaterial>,
}

impl Default for JerseyOptions {
    fn default() -> Self {
        Self {
            main_color: "White".to_string(),
            accent_color: "Royal Blue".to_string(),
            pattern: Choice::default(),
            team_logo: "Eagle shield".to_string(),
            sponsor_logo: "AI Sports".to_string(),
            player_number: "10".to_string(),
            player_name: "GEMINI".to_string(),
            font_style: Choice::default(),
            neckline: Choice::default(),
            sleeves: Choice::default(),
            fit: Choice::default(),
            material: Choice::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShortsOptions {
    pub main_color: String,
    pub accent_color: String,
    pub pattern: Choice<ShortsPattern>,
    pub team_logo: bool,
    pub length: Choice<ShortsLength>,
    pub waistband: Choice<Waistband>,
    pub fit: Choice<ShortsFit>,
}

impl Default for ShortsOptions {
    fn default() -> Self {
        Self {
            main_color: "White".to_string(),
            accent_color: "Royal Blue".to_string(),
            pattern: Choice::default(),
            team_logo: true,
            length: Choice::default(),
            waistband: Choice::default(),
            fit: Choice::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderOptions {
    pub view: Choice<RenderView>,
    pub style: Choice<RenderStyle>,
    pub model: Choice<RenderModel>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SoccerUniformOptions {
    pub jersey: JerseyOptions,
    pub shorts: ShortsOptions,
    pub render: RenderOptions,
}
