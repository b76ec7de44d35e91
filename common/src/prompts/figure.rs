//! フィギュア変換プロンプト

use crate::choice::{Choice, ClauseTable};
use crate::options::{
    ArtStyle, ColorScheme, Detailing, FigureBackground, FigureBase, FigureOptions, FigurePose,
    Texture, DEFAULT_FIGURE_MATERIAL, DEFAULT_FIGURE_SCALE,
};
use crate::types::ImageDimensions;

/// 出力解像度（固定。ユーザー設定不可）
pub const FIGURE_OUTPUT_WIDTH: u32 = 1920;
pub const FIGURE_OUTPUT_HEIGHT: u32 = 1080;

const ART_STYLES: ClauseTable<ArtStyle> = ClauseTable::new(
    &[
        (ArtStyle::Anime, "The figure must have a Japanese anime/manga art style, characterized by large expressive eyes, defined linework, and cel-shading."),
        (ArtStyle::Realistic, "The figure must be hyper-realistic, with detailed skin textures, accurate anatomy, and natural shading to look like a real person/animal."),
        (ArtStyle::Chibi, "The figure must have 'chibi' or 'super-deformed' (SD) proportions: a very large, expressive head and a small, cute, simplified body."),
        (ArtStyle::Stylized, "The figure should have a unique, stylized look, like something from a modern western cartoon or fantasy art, with exaggerated features and dynamic shapes."),
    ],
    "An anime art style.",
);

const TEXTURES: ClauseTable<Texture> = ClauseTable::new(
    &[
        (Texture::Matte, "The figure's surface finish must be matte, with a smooth, non-reflective surface that diffuses light."),
        (Texture::Glossy, "The figure must have a glossy surface with a high-shine, reflective finish that reflects light, making it look polished and sleek."),
        (Texture::Metallic, "Incorporate metallic paint effects, especially on armor, weapons, or accessories, to give them a realistic metal sheen."),
        (Texture::Weathered, "Apply a weathered effect to the figure, with details like scratches, dust, or rust to make it look aged or battle-worn."),
    ],
    "A smooth, matte finish.",
);

const POSES: ClauseTable<FigurePose> = ClauseTable::new(
    &[
        (FigurePose::Standing, "A museum-style standing pose, either neutral or with a slight, characterful stance. It should be stable and grounded."),
        (FigurePose::Dynamic, "A dynamic action pose, as if captured mid-movement (e.g., jumping, attacking, running). The pose should be energetic and expressive."),
        (FigurePose::Sitting, "A relaxed sitting or kneeling pose, interacting with the base or an accessory naturally."),
    ],
    "A standard standing pose.",
);

const COLOR_SCHEMES: ClauseTable<ColorScheme> = ClauseTable::new(
    &[
        (ColorScheme::Original, "Use the colors from the original uploaded image as the primary reference for the figure's paint scheme."),
        (ColorScheme::Monochrome, "Render the entire figure in a monochrome color scheme, like a grayscale prototype or a stylish single-color variant (e.g., all-black)."),
        (ColorScheme::Vibrant, "Use a vibrant, high-saturation color palette that enhances the original colors, making the figure pop visually."),
    ],
    "Use the original colors.",
);

const DETAILING: ClauseTable<Detailing> = ClauseTable::new(
    &[
        (Detailing::Standard, "A standard level of detail suitable for the scale."),
        (Detailing::High, "A high level of detail, with fine textures on clothing, intricate facial expressions, and carefully sculpted hair."),
        (Detailing::Ultra, "An ultra-fine level of detail, capturing microscopic details like fabric weaves, subtle skin pores, and complex accessory patterns."),
    ],
    "A standard level of detail.",
);

const BASES: ClauseTable<FigureBase> = ClauseTable::new(
    &[
        (FigureBase::None, "The figure should have no display base and be able to stand on its own."),
        (FigureBase::SimpleDisc, "The figure must be placed on a simple, elegant circular or square disc-like display base (black, white, or clear)."),
        (FigureBase::ThemedDiorama, "The figure must be part of a themed diorama base that complements its origin (e.g., a rocky battlefield, a forest floor, a sci-fi platform)."),
        (FigureBase::Floating, "The figure should be mounted on a discreet, nearly invisible stand to give it a dynamic, weightless floating appearance, as if flying."),
    ],
    "A simple display base.",
);

const BACKGROUNDS: ClauseTable<FigureBackground> = ClauseTable::new(
    &[
        (FigureBackground::Studio, "Both the figure and the box must be presented against a clean, neutral, and seamless studio background (e.g., a simple white or gray gradient). The lighting should be professional and highlight both objects clearly."),
        (FigureBackground::Bookshelf, "The scene should be a realistic bookshelf, with the figure and box placed amongst books. Use a shallow depth of field (bokeh effect) to make the scene look like a real photograph taken with a DSLR camera."),
        (FigureBackground::Desktop, "The scene should be a modern, clean desktop environment, with items like a keyboard, monitor, or plant nearby. The lighting should be natural, as if from a window."),
        (FigureBackground::Showcase, "The scene should be inside a glass display showcase, possibly with other collectibles faintly visible in the background. The lighting should be dramatic, like from integrated LED strips."),
    ],
    "A clean, studio background.",
);

pub fn art_style_clause(style: &Choice<ArtStyle>) -> &'static str {
    ART_STYLES.lookup(style)
}

pub fn texture_clause(texture: &Choice<Texture>) -> &'static str {
    TEXTURES.lookup(texture)
}

pub fn pose_clause(pose: &Choice<FigurePose>) -> &'static str {
    POSES.lookup(pose)
}

pub fn color_scheme_clause(scheme: &Choice<ColorScheme>) -> &'static str {
    COLOR_SCHEMES.lookup(scheme)
}

pub fn detailing_clause(detailing: &Choice<Detailing>) -> &'static str {
    DETAILING.lookup(detailing)
}

pub fn base_clause(base: &Choice<FigureBase>) -> &'static str {
    BASES.lookup(base)
}

pub fn background_clause(background: &Choice<FigureBackground>) -> &'static str {
    BACKGROUNDS.lookup(background)
}

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        default
    } else {
        trimmed
    }
}

/// フィギュア変換プロンプト生成
///
/// # Arguments
/// * `options` - フィギュアオプション
/// * `dimensions` - 入力画像のピクセルサイズ（参考情報としてのみ埋め込む）
///
/// # Returns
/// 出力解像度 1920x1080 固定、元画像のアスペクト比を無視する指示を含むプロンプト
pub fn build_figure_prompt(options: &FigureOptions, dimensions: ImageDimensions) -> String {
    let scale = or_default(&options.scale, DEFAULT_FIGURE_SCALE);
    let material = or_default(&options.material, DEFAULT_FIGURE_MATERIAL);
    let detailing_level = if options.detailing.is_empty() {
        "Standard"
    } else {
        options.detailing.as_str()
    };

    let art_style = art_style_clause(&options.art_style);
    let texture = texture_clause(&options.texture);
    let pose = pose_clause(&options.pose);
    let color_scheme = color_scheme_clause(&options.color_scheme);
    let detailing = detailing_clause(&options.detailing);
    let base = base_clause(&options.base);
    let background = background_clause(&options.background);
    let (width, height) = (dimensions.width, dimensions.height);
    let (out_w, out_h) = (FIGURE_OUTPUT_WIDTH, FIGURE_OUTPUT_HEIGHT);

    format!(
        r#"
You are an expert AI digital artist specializing in creating photorealistic images of collectible figures.
Your task is to take the user's uploaded image and transform the main subject into a high-quality, {scale} scale collectible figure, presented as a professional photograph that includes both the figure and its packaging.

**Overall Goal:** The final image must look like a single, real photograph of physical objects. It must NOT look like a digital render, illustration, or a collage.

---

**INPUT IMAGE CONTEXT (FOR YOUR INFORMATION ONLY):**
*   The user uploaded an image with dimensions {width}px (width) by {height}px (height).
*   **Crucial Instruction:** You MUST completely IGNORE the original aspect ratio. Your goal is to create a new scene, not to replicate the original's composition.

---

**CORE FIGURE SPECIFICATIONS:**

*   **1. Art Style:** {art_style}
*   **2. Material & Texture:** The figure must look like it's made of high-grade {material}. The surface finish is critical: {texture}
*   **3. Pose:** The figure's pose should be a static, non-articulated {pose} It should be inspired by the original image but optimized for a display piece.
*   **4. Color & Detailing:**
    *   **Color Scheme:** {color_scheme}
    *   **Detailing Level:** The sculpt must have a {detailing_level} level of detail. {detailing}
*   **5. Base:** {base}

---

**FINAL IMAGE COMPOSITION:**

*   **Resolution & Aspect Ratio:** The final output image MUST be a high-resolution landscape photograph with an exact resolution of {out_w}x{out_h} pixels (a 16:9 aspect ratio). This is a strict, non-negotiable requirement.
*   **Composition:** The arrangement of the figure and box must be HORIZONTAL to fill the wide {out_w}x{out_h} frame. DO NOT stack them vertically. The final image should be a cinematic, wide shot.
*   **Scene:** Create a single, cohesive professional product photograph.
*   **Arrangement:** On one side, display the collectible figure standing on its base. On the other side, display its corresponding retail packaging (box) standing upright.
*   **Box Art:** Use the original uploaded image itself as the primary artwork on the packaging. The art should be vibrant and well-integrated into the box design.
*   **Box Design:** The packaging must feature a large, clear plastic window so the figure inside is clearly visible.
*   **Box Contents:** The figure visible inside the box through the window MUST be the IDENTICAL TWIN of the figure displayed outside the box. Same model, same pose, same colors. It is crucial that they are not different in any way.
*   **Environment:** {background}

**CRITICAL RULE:** Avoid an "action figure" look with visible joints or articulation. The result must be a premium, static, display-focused art piece, presented as a single, unified product shot.
"#
    )
}
