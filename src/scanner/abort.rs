use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::core::barcode::ScanError;

/// Owner side of a cancellation flag.
#[derive(Debug, Clone, Default)]
pub struct AbortController {
    signal: AbortSignal,
}

impl AbortController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signal(&self) -> AbortSignal {
        self.signal.clone()
    }

    pub fn abort(&self) {
        self.signal.aborted.store(true, Ordering::SeqCst);
    }
}

/// 取消信号，只在一次空结果之后、重新调度之前检查
#[derive(Debug, Clone, Default)]
pub struct AbortSignal {
    aborted: Arc<AtomicBool>,
}

impl AbortSignal {
    pub fn is_aborted(&self) -> bool {
        self.aborted.load(Ordering::SeqCst)
    }

    pub fn throw_if_aborted(&self) -> Result<(), ScanError> {
        if self.is_aborted() {
            Err(ScanError::Aborted)
        } else {
            Ok(())
        }
    }
}
