use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;

use crate::core::barcode::{BarcodeResult, ScanError};
use crate::core::video::Frame;

/// 外部条码检测能力（平台原生检测器或备用解码库）
#[async_trait]
pub trait BarcodeDetector: Send + Sync {
    async fn detect(&self, frame: &Frame) -> Result<Vec<BarcodeResult>, ScanError>;
}

type DetectFn = Box<dyn Fn(&Frame) -> Result<Vec<BarcodeResult>, ScanError> + Send + Sync>;

/// Scripted detector for tests and demos.
pub struct MockBarcodeDetector {
    pattern: Option<DetectFn>,
    calls: AtomicU64,
}

impl MockBarcodeDetector {
    pub fn new() -> Self {
        Self {
            pattern: None,
            calls: AtomicU64::new(0),
        }
    }

    pub fn with_pattern<F>(pattern: F) -> Self
    where
        F: Fn(&Frame) -> Vec<BarcodeResult> + Send + Sync + 'static,
    {
        Self::with_result_pattern(move |frame| Ok(pattern(frame)))
    }

    /// Like [`with_pattern`](Self::with_pattern), but the closure may fail.
    pub fn with_result_pattern<F>(pattern: F) -> Self
    where
        F: Fn(&Frame) -> Result<Vec<BarcodeResult>, ScanError> + Send + Sync + 'static,
    {
        Self {
            pattern: Some(Box::new(pattern)),
            calls: AtomicU64::new(0),
        }
    }

    /// Reports `result` on frames whose number is listed, nothing elsewhere.
    pub fn with_fixed_frames(frames: Vec<u64>, result: BarcodeResult) -> Self {
        Self::with_pattern(move |frame| {
            if frames.contains(&frame.frame_number) {
                vec![result.clone()]
            } else {
                Vec::new()
            }
        })
    }

    pub fn failing(message: &str) -> Self {
        let message = message.to_string();
        Self::with_result_pattern(move |_| Err(ScanError::detection(message.clone())))
    }

    pub fn call_count(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockBarcodeDetector {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BarcodeDetector for MockBarcodeDetector {
    async fn detect(&self, frame: &Frame) -> Result<Vec<BarcodeResult>, ScanError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.pattern {
            Some(pattern) => pattern(frame),
            None => Ok(Vec::new()),
        }
    }
}
