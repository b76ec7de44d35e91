//! Figure Fusion Common Library
//!
//! CLIと他のフロントエンドで共有される型・プロンプト・ワイヤ形式

pub mod choice;
pub mod error;
pub mod gemini;
pub mod i18n;
pub mod options;
pub mod parser;
pub mod prompts;
pub mod types;

pub use choice::{Choice, ClauseTable, OptionSet};
pub use error::{Error, Result};
pub use gemini::{image_part, text_part, GenerateContentRequest, Part, DEFAULT_MODEL, GEMINI_API_BASE};
pub use i18n::{Language, Localizer};
pub use options::{FigureOptions, SoccerUniformOptions, TryOnOptions, MAX_TRY_ON_ITEMS};
pub use parser::{parse_generation_response, split_data_url, to_data_url};
pub use prompts::{build_figure_prompt, build_soccer_uniform_prompt, build_try_on_prompt};
pub use types::{GenerationResult, ImageDimensions, NormalizedImage};
