use crate::error::Result;
use crate::workflow::Workflow;
use clap::{Args, Parser, Subcommand};
use figure_fusion_common::{Choice, FigureOptions, Language, OptionSet, SoccerUniformOptions, TryOnOptions};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "figure-fusion")]
#[command(about = "写真からフィギュア・試着・サッカーユニフォーム画像を生成するGemini CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 表示言語 (en/ko)。省略時は設定ファイルの値
    #[arg(long, global = true)]
    pub lang: Option<Language>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 写真をフィギュアの商品写真に変換
    Figure(FigureArgs),

    /// 人物写真に衣類を着せる（仮想試着）
    TryOn(TryOnArgs),

    /// サッカーユニフォームをデザイン
    Uniform(UniformArgs),

    /// 選択肢の一覧（ラベルと説明）を表示
    Options {
        /// 対象ワークフロー
        #[arg(value_enum)]
        workflow: Workflow,
    },

    /// 設定を表示・変更
    Config {
        /// APIキーを設定
        #[arg(long)]
        set_api_key: Option<String>,

        /// APIキーを伏せ字で入力
        #[arg(long)]
        prompt_api_key: bool,

        /// 既定の表示言語を設定
        #[arg(long)]
        language: Option<Language>,

        /// 生成モデルを設定
        #[arg(long)]
        model: Option<String>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// 生成系コマンド共通の出力指定
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// 出力ファイル/ディレクトリ（デフォルト: ./{workflow}-{日時}.{拡張子}）
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// APIを呼ばずにプロンプトだけ表示
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct FigureArgs {
    /// 元画像 (JPG/PNG/WEBP)
    #[arg(required = true)]
    pub image: PathBuf,

    /// オプションJSONファイル（camelCase）
    #[arg(long)]
    pub options: Option<PathBuf>,

    /// 全オプションを対話で選ぶ
    #[arg(short, long)]
    pub interactive: bool,

    #[arg(long)]
    pub art_style: Option<String>,

    #[arg(long)]
    pub material: Option<String>,

    #[arg(long)]
    pub texture: Option<String>,

    /// スケール (1/12, 1/8, 1/7, 1/6, 1/4)
    #[arg(long)]
    pub scale: Option<String>,

    #[arg(long)]
    pub pose: Option<String>,

    #[arg(long)]
    pub color_scheme: Option<String>,

    #[arg(long)]
    pub detailing: Option<String>,

    #[arg(long)]
    pub base: Option<String>,

    #[arg(long)]
    pub background: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug, Clone, Default)]
pub struct TryOnArgs {
    /// 人物写真
    #[arg(required = true)]
    pub person: PathBuf,

    /// 衣類・アクセサリー画像（1〜4枚、順番通りに送信）
    #[arg(long = "item", required = true)]
    pub items: Vec<PathBuf>,

    /// ポーズ (Original Pose, Standing, Fashion Model, Walking, Sitting)
    #[arg(long)]
    pub pose: Option<String>,

    /// 背景 (Original Background, Studio, Urban, Nature, Cafe)
    #[arg(long)]
    pub background: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug, Clone, Default)]
pub struct UniformArgs {
    /// オプションJSONファイル（camelCase）
    #[arg(long)]
    pub options: Option<PathBuf>,

    #[arg(long)]
    pub jersey_color: Option<String>,

    #[arg(long)]
    pub jersey_accent: Option<String>,

    /// ジャージ柄 (None, Stripes, Checkered, Gradient)
    #[arg(long)]
    pub pattern: Option<String>,

    #[arg(long)]
    pub team_logo: Option<String>,

    #[arg(long)]
    pub sponsor: Option<String>,

    #[arg(long)]
    pub number: Option<String>,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub shorts_color: Option<String>,

    #[arg(long)]
    pub shorts_accent: Option<String>,

    /// ショーツのチームロゴを外す
    #[arg(long)]
    pub no_shorts_logo: bool,

    /// 視点 (Front View, 3/4 View, Full Body View)
    #[arg(long)]
    pub view: Option<String>,

    /// スタイル (Realistic, Photorealistic, 3D Style)
    #[arg(long)]
    pub style: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// JSONファイルからオプションを読む（省略時は既定値）
pub fn load_options<T: DeserializeOwned + Default>(path: Option<&Path>) -> Result<T> {
    match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&content)?)
        }
        None => Ok(T::default()),
    }
}

fn override_choice<T: OptionSet>(target: &mut Choice<T>, value: &Option<String>) {
    if let Some(raw) = value {
        *target = Choice::parse(raw);
    }
}

fn override_text(target: &mut String, value: &Option<String>) {
    if let Some(raw) = value {
        *target = raw.clone();
    }
}

impl FigureArgs {
    /// 指定されたフラグだけ上書き
    pub fn apply(&self, options: &mut FigureOptions) {
        override_choice(&mut options.art_style, &self.art_style);
        override_text(&mut options.material, &self.material);
        override_choice(&mut options.texture, &self.texture);
        override_text(&mut options.scale, &self.scale);
        override_choice(&mut options.pose, &self.pose);
        override_choice(&mut options.color_scheme, &self.color_scheme);
        override_choice(&mut options.detailing, &self.detailing);
        override_choice(&mut options.base, &self.base);
        override_choice(&mut options.background, &self.background);
    }

    pub fn figure_options(&self) -> Result<FigureOptions> {
        let mut options: FigureOptions = load_options(self.options.as_deref())?;
        self.apply(&mut options);
        Ok(options)
    }
}

impl TryOnArgs {
    pub fn try_on_options(&self) -> TryOnOptions {
        let mut options = TryOnOptions::default();
        override_choice(&mut options.pose, &self.pose);
        override_choice(&mut options.background, &self.background);
        options
    }
}

impl UniformArgs {
    pub fn apply(&self, options: &mut SoccerUniformOptions) {
        let jersey = &mut options.jersey;
        override_text(&mut jersey.main_color, &self.jersey_color);
        override_text(&mut jersey.accent_color, &self.jersey_accent);
        override_choice(&mut jersey.pattern, &self.pattern);
        override_text(&mut jersey.team_logo, &self.team_logo);
        override_text(&mut jersey.sponsor_logo, &self.sponsor);
        override_text(&mut jersey.player_number, &self.number);
        override_text(&mut jersey.player_name, &self.name);

        let shorts = &mut options.shorts;
        override_text(&mut shorts.main_color, &self.shorts_color);
        override_text(&mut shorts.accent_color, &self.shorts_accent);
        if self.no_shorts_logo {
            shorts.team_logo = false;
        }

        override_choice(&mut options.render.view, &self.view);
        override_choice(&mut options.render.style, &self.style);
    }

    pub fn uniform_options(&self) -> Result<SoccerUniformOptions> {
        let mut options: SoccerUniformOptions = load_options(self.options.as_deref())?;
        self.apply(&mut options);
        Ok(options)
    }
}
