use clap::ValueEnum;
use std::fmt;

/// 生成ワークフロー
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum Workflow {
    Figure,
    TryOn,
    #[value(name = "uniform")]
    SoccerUniform,
}

impl Workflow {
    /// 出力ファイル名などに使う識別子
    pub fn slug(&self) -> &'static str {
        match self {
            Workflow::Figure => "figure",
            Workflow::TryOn => "try-on",
            Workflow::SoccerUniform => "uniform",
        }
    }

    /// タイトルの翻訳キー
    pub fn title_key(&self) -> &'static str {
        match self {
            Workflow::Figure => "figureFusionTitle",
            Workflow::TryOn => "tryOnTitle",
            Workflow::SoccerUniform => "soccerUniformTitle",
        }
    }

    /// 結果見出しの翻訳キー
    pub fn result_key(&self) -> &'static str {
        match self {
            Workflow::Figure => "generatedImageTitle",
            Workflow::TryOn => "generatedResultTitle",
            Workflow::SoccerUniform => "generatedUniformTitle",
        }
    }
}

impl fmt::Display for Workflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
