//! 選択肢モデル
//!
//! UIのボタン群に相当する閉じた列挙型と、その値を文字列から受け取るためのラッパー:
//! - OptionSet: 列挙型のラベル・翻訳キー・全値
//! - Choice: 既知の値 or 認識できなかった生文字列
//! - ClauseTable: 値 → プロンプト文のテーブル（未知の値は既定文にフォールバック）

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// 閉じた選択肢の集合
pub trait OptionSet: Copy + Eq + Default + fmt::Debug + 'static {
    /// 表示順の全値
    const ALL: &'static [Self];

    /// UI/JSONで使う英語ラベル
    fn label(self) -> &'static str;

    /// 翻訳テーブルのキー（ラベルが他の選択肢と衝突する場合のみ異なる）
    fn i18n_key(self) -> &'static str {
        self.label()
    }

    /// ラベルまたは翻訳キーから値を引く（大文字小文字は無視）
    fn from_label(label: &str) -> Option<Self> {
        let needle = label.trim();
        Self::ALL.iter().copied().find(|value| {
            value.label().eq_ignore_ascii_case(needle) || value.i18n_key().eq_ignore_ascii_case(needle)
        })
    }
}

/// 列挙型を宣言し、OptionSet / Default / Display を実装する
///
/// `Variant => "Label" | "i18n key"` のように翻訳キーを別指定できる。
macro_rules! option_set {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $label:literal $(| $key:literal)?),+ $(,)?
        }
        default = $default:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl $crate::choice::OptionSet for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }

            fn i18n_key(self) -> &'static str {
                match self {
                    $(Self::$variant => $crate::choice::option_set!(@key $label $(, $key)?)),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::choice::OptionSet::label(*self))
            }
        }
    };
    (@key $label:literal) => {
        $label
    };
    (@key $label:literal, $key:literal) => {
        $key
    };
}

pub(crate) use option_set;

/// 選択値
///
/// JSONやCLIから来た値は必ず受け入れ、認識できなければ生文字列のまま保持する。
/// プロンプト生成時に既定文へフォールバックさせるため、ここでは失敗させない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice<T> {
    Known(T),
    Unrecognized(String),
}

impl<T: OptionSet> Choice<T> {
    /// 文字列から選択値を作る（失敗しない）
    pub fn parse(raw: &str) -> Self {
        match T::from_label(raw) {
            Some(value) => Self::Known(value),
            None => Self::Unrecognized(raw.trim().to_string()),
        }
    }

    pub fn known(&self) -> Option<T> {
        match self {
            Self::Known(value) => Some(*value),
            Self::Unrecognized(_) => None,
        }
    }

    /// ラベル、または認識できなかった生文字列
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(value) => value.label(),
            Self::Unrecognized(raw) => raw.as_str(),
        }
    }

    /// 翻訳キー（未知の値は生文字列をそのままキーにする）
    pub fn i18n_key(&self) -> &str {
        match self {
            Self::Known(value) => value.i18n_key(),
            Self::Unrecognized(raw) => raw.as_str(),
        }
    }

    pub fn is(&self, value: T) -> bool {
        self.known() == Some(value)
    }

    pub fn is_empty(&self) -> bool {
        self.as_str().trim().is_empty()
    }
}

impl<T: OptionSet> Default for Choice<T> {
    fn default() -> Self {
        Self::Known(T::default())
    }
}

impl<T: OptionSet> From<T> for Choice<T> {
    fn from(value: T) -> Self {
        Self::Known(value)
    }
}

impl<T: OptionSet> FromStr for Choice<T> {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl<T: OptionSet> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<T: OptionSet> Serialize for Choice<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de, T: OptionSet> Deserialize<'de> for Choice<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// 値 → プロンプト文のテーブル
///
/// 未知の値（および表に無い値）は `fallback` を返す。フォールバックはこの1箇所のみ。
pub struct ClauseTable<T: 'static> {
    entries: &'static [(T, &'static str)],
    fallback: &'static str,
}

impl<T: OptionSet> ClauseTable<T> {
    pub const fn new(entries: &'static [(T, &'static str)], fallback: &'static str) -> Self {
        Self { entries, fallback }
    }

    pub fn lookup(&self, choice: &Choice<T>) -> &'static str {
        choice
            .known()
            .and_then(|value| self.get(value))
            .unwrap_or(self.fallback)
    }

    pub fn get(&self, value: T) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(key, _)| *key == value)
            .map(|(_, clause)| *clause)
    }

    pub fn fallback(&self) -> &'static str {
        self.fallback
    }
}
