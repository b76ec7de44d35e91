//! ログ初期化
//!
//! RUST_LOG が無ければ `figure_fusion=info`（--verbose で debug）。
//! 出力先は stderr。進捗表示（stdout）とは混ぜない。

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("figure_fusion={level},figure_fusion_common={level}")
}

/// サブスクライバを登録（2回目以降は無視）
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "figure_fusion=info,figure_fusion_common=info");
        assert!(default_directive(true).starts_with("figure_fusion=debug"));
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init(false);
        init(true);
    }
}
