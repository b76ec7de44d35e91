//! 生成待ちのスピナー
//!
//! 待機中はローディングメッセージ（loaderMsg1〜5）を順に表示する。

use figure_fusion_common::Localizer;
use indicatif::{ProgressBar, ProgressStyle};
use std::future::Future;
use std::time::Duration;

pub const LOADER_KEYS: [&str; 5] = ["loaderMsg1", "loaderMsg2", "loaderMsg3", "loaderMsg4", "loaderMsg5"];

const TICK: Duration = Duration::from_millis(120);
const MESSAGE_INTERVAL: Duration = Duration::from_secs(3);

/// ローディングメッセージを現在の言語で返す
pub fn loader_messages(localizer: &Localizer) -> Vec<String> {
    LOADER_KEYS.iter().map(|key| localizer.t(key).to_string()).collect()
}

fn spinner(first: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg} [{elapsed}]") {
        bar.set_style(style);
    }
    bar.set_message(first.to_string());
    bar.enable_steady_tick(TICK);
    bar
}

/// future の完了までスピナーを回す
pub async fn with_spinner<F: Future>(localizer: &Localizer, future: F) -> F::Output {
    let messages = loader_messages(localizer);
    let bar = spinner(&messages[0]);

    tokio::pin!(future);
    let mut interval = tokio::time::interval(MESSAGE_INTERVAL);
    // 初回tickは即時に完了する
    interval.tick().await;

    let mut index = 0;
    let output = loop {
        tokio::select! {
            output = &mut future => break output,
            _ = interval.tick() => {
                index = (index + 1) % messages.len();
                bar.set_message(messages[index].clone());
            }
        }
    };

    bar.finish_and_clear();
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use figure_fusion_common::Language;

    #[test]
    fn test_loader_messages_localized() {
        let messages = loader_messages(&Localizer::new(Language::En));
        assert_eq!(messages.len(), 5);
        assert_eq!(messages[0], "Warming up the AI's creative circuits...");

        let messages = loader_messages(&Localizer::new(Language::Ko));
        assert!(messages.iter().all(|m| !m.starts_with("loaderMsg")));
    }

    #[tokio::test]
    async fn test_with_spinner_returns_output() {
        let value = with_spinner(&Localizer::default(), async { 42 }).await;
        assert_eq!(value, 42);
    }
}
