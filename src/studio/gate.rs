use crate::error::{FusionError, Result};
use crate::workflow::Workflow;
use std::sync::atomic::{AtomicBool, Ordering};

/// ワークフローごとの同時実行ゲート（未完了リクエストは1件まで）
#[derive(Debug)]
pub struct RequestGate {
    workflow: Workflow,
    busy: AtomicBool,
}

impl RequestGate {
    pub fn new(workflow: Workflow) -> Self {
        Self {
            workflow,
            busy: AtomicBool::new(false),
        }
    }

    /// 取得できなければ RequestInFlight
    pub fn acquire(&self) -> Result<GateGuard<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| FusionError::RequestInFlight(self.workflow))?;
        Ok(GateGuard { gate: self })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// Drop でゲートを開放
#[derive(Debug)]
pub struct GateGuard<'a> {
    gate: &'a RequestGate,
}

impl Drop for GateGuard<'_> {
    fn drop(&mut self) {
        self.gate.busy.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_acquire_fails_while_held() {
        let gate = RequestGate::new(Workflow::Figure);
        let guard = gate.acquire().unwrap();
        assert!(gate.is_busy());

        let err = gate.acquire().unwrap_err();
        assert!(matches!(err, FusionError::RequestInFlight(Workflow::Figure)));

        drop(guard);
        assert!(!gate.is_busy());
        assert!(gate.acquire().is_ok());
    }
}
