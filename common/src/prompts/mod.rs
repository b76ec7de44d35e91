//! プロンプト生成モジュール
//!
//! CLIと他のフロントエンドで共有されるプロンプト生成ロジック:
//! - build_figure_prompt: フィギュア変換（商品写真）用プロンプト
//! - build_try_on_prompt: 仮想試着用プロンプト
//! - build_soccer_uniform_prompt: サッカーユニフォーム用プロンプト
//!
//! すべて純粋関数。どんな入力でも失敗せず、未知の選択値は既定文になる。

mod figure;
mod try_on;
mod uniform;

pub use figure::{
    art_style_clause, background_clause, base_clause, build_figure_prompt, color_scheme_clause,
    detailing_clause, pose_clause, texture_clause, FIGURE_OUTPUT_HEIGHT, FIGURE_OUTPUT_WIDTH,
};
pub use try_on::{build_try_on_prompt, try_on_background_instruction, try_on_pose_instruction};
pub use uniform::{build_soccer_uniform_prompt, jersey_clauses, render_clauses, shorts_clauses};
