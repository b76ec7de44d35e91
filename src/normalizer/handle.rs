//! 一時デコードハンドル
//!
//! 入力バイト列をデコードしている間だけ登録されるハンドル。
//! Drop で必ず解放されるので、どの経路で抜けても件数は戻る。

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// 生存中のハンドル数（クローン間で共有）
#[derive(Debug, Clone, Default)]
pub struct HandleRegistry {
    live: Arc<AtomicUsize>,
}

impl HandleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<'a>(&'a self, bytes: &'a [u8]) -> DecodeHandle<'a> {
        self.live.fetch_add(1, Ordering::SeqCst);
        DecodeHandle { registry: self, bytes }
    }

    pub fn live(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }
}

#[derive(Debug)]
pub struct DecodeHandle<'a> {
    registry: &'a HandleRegistry,
    bytes: &'a [u8],
}

impl DecodeHandle<'_> {
    pub fn bytes(&self) -> &[u8] {
        self.bytes
    }
}

impl Drop for DecodeHandle<'_> {
    fn drop(&mut self) {
        self.registry.live.fetch_sub(1, Ordering::SeqCst);
    }
}
