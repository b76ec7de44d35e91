//! 仮想試着プロンプト
//!
//! 1枚目の画像が人物、2枚目以降が衣類の参照画像という前提で組み立てる。

use crate::choice::{Choice, ClauseTable};
use crate::options::{TryOnBackground, TryOnPose};

const ORIGINAL_POSE_INSTRUCTION: &str = "It is absolutely critical to preserve the exact pose from the original person's image. Do not alter their stance, posture, or limb positions. The clothing must be fitted to this original pose. Only the newly styled person may appear; the original, unstyled person must NOT be rendered alongside them.";

/// 未知のポーズ値（元のポーズ指示の1文目のみ）
const FALLBACK_POSE_INSTRUCTION: &str = "It is absolutely critical to preserve the exact pose from the original person's image.";

const ORIGINAL_BACKGROUND_INSTRUCTION: &str = "The final image must feature the newly styled person seamlessly placed within the EXACT original background from the 'person' image. The original person must NOT be visible in the final image; they are completely replaced by the newly styled version. The background itself must remain identical to the original. Ensure there is no duplication or ghosting of people. The final output must look like a single, cohesive photograph of the new person in the old environment.";

const POSES: ClauseTable<TryOnPose> = ClauseTable::new(
    &[
        (TryOnPose::Original, ORIGINAL_POSE_INSTRUCTION),
        (TryOnPose::Standing, "The person must be generated in a natural, neutral standing pose. They should be facing forward or slightly angled."),
        (TryOnPose::FashionModel, "The person must be generated in a confident, stylish fashion model pose. This could include a hand on the hip, a slight contrapposto stance, or another dynamic yet static pose suitable for a catalogue."),
        (TryOnPose::Walking, "The person must be generated in a 'freeze-frame' walking pose, as if captured mid-stride. This should look natural and showcase the clothing in motion."),
        (TryOnPose::Sitting, "The person must be generated in a relaxed and natural sitting pose, for example on a simple stool or block (not visible or very minimalist)."),
    ],
    FALLBACK_POSE_INSTRUCTION,
);

const BACKGROUNDS: ClauseTable<TryOnBackground> = ClauseTable::new(
    &[
        (TryOnBackground::Original, ORIGINAL_BACKGROUND_INSTRUCTION),
        (TryOnBackground::Studio, "The background of the final image must be a clean, simple, neutral studio setting (e.g., light gray, white) to focus on the person and the outfit."),
        (TryOnBackground::Urban, "Generate a photorealistic and stylish urban background, such as a modern city street, an architectural feature, or against a graffiti wall. The lighting on the person must match the environment seamlessly."),
        (TryOnBackground::Nature, "Generate a photorealistic and serene natural background, such as a beautiful park, a forest path, or a beach scene. The lighting on the person must be natural and match the outdoor environment."),
        (TryOnBackground::Cafe, "Generate a photorealistic background of a cozy and modern café interior. The person should be believably integrated into the scene. Pay attention to realistic lighting and depth of field."),
    ],
    ORIGINAL_BACKGROUND_INSTRUCTION,
);

/// ポーズ指示（未知の値は元のポーズを維持）
pub fn try_on_pose_instruction(pose: &Choice<TryOnPose>) -> &'static str {
    POSES.lookup(pose)
}

/// 背景指示（未知の値は元の背景を維持）
pub fn try_on_background_instruction(background: &Choice<TryOnBackground>) -> &'static str {
    BACKGROUNDS.lookup(background)
}

/// 仮想試着プロンプト生成
pub fn build_try_on_prompt(pose: &Choice<TryOnPose>, background: &Choice<TryOnBackground>) -> String {
    let pose_instruction = try_on_pose_instruction(pose);
    let background_instruction = try_on_background_instruction(background);

    format!(
        r#"
You are an expert AI fashion stylist. Your task is to dress the person from the first image with the clothing and accessories from the subsequent images.

**CRITICAL INSTRUCTIONS:**
1.  **Identify the Person and Clothing:** The **very first image is the person** whose face, identity, and body you must use. All **subsequent images are for clothing reference ONLY**. If these subsequent images contain people, you MUST IGNORE those people and only use the clothes they are wearing.
2.  **Preserve Identity:** It is absolutely essential that you maintain the exact face, facial features, hair, and physical identity of the person from the **first image**. Do NOT change their face or replace it with someone else's.
3.  **Synthesize Full Body (if needed):** If the first image is not a full-body shot (e.g., only shows the upper body), you must realistically generate a full-body view of them, preserving their original characteristics.
4.  **Apply Clothing:** Digitally and seamlessly dress the person from the first image with ALL the provided clothing items. The clothes must fit naturally on their body according to the specified pose.
5.  **Pose Instruction:** {pose_instruction}
6.  **Background Instruction:** {background_instruction}
7.  **Final Output:** The final output must be a single, cohesive, photorealistic image of the original person wearing the new outfit. It must look like a real photograph. Realism is the top priority.
"#
    )
}
