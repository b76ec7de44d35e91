//! Figure Fusion
//!
//! 写真から3種類の画像を生成するGemini CLI:
//! - フィギュア変換（商品写真 + パッケージ）
//! - 仮想試着
//! - サッカーユニフォームデザイン
//!
//! プロンプト生成・選択肢・ワイヤ形式は figure_fusion_common にある。

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod gemini;
pub mod interactive;
pub mod logging;
pub mod normalizer;
pub mod progress;
pub mod studio;
pub mod workflow;
