use log::{debug, error, info, warn};

use crate::core::barcode::{BarcodeResult, ScanError};

/// 扫描过程的观测钩子，替代在检测循环里直接打印日志
pub trait ScanObserver: Send + Sync {
    fn on_attempt(&self, _attempt: u64, _found: usize) {}

    fn on_detected(&self, _attempt: u64, _barcodes: &[BarcodeResult]) {}

    fn on_rejected(&self, _attempt: u64, _error: &ScanError) {}
}

/// Writes scan progress through the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl ScanObserver for LogObserver {
    fn on_attempt(&self, attempt: u64, found: usize) {
        debug!("🔍 Attempt {}: {} barcode(s)", attempt, found);
    }

    fn on_detected(&self, attempt: u64, barcodes: &[BarcodeResult]) {
        info!(
            "✅ Barcode detection succeeded after {} attempt(s): {:?}",
            attempt, barcodes
        );
    }

    fn on_rejected(&self, attempt: u64, err: &ScanError) {
        if err.is_aborted() {
            warn!("⏹️ Barcode scan aborted after {} attempt(s)", attempt);
        } else {
            error!("❌ Barcode detection failed on attempt {}: {}", attempt, err);
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ScanObserver for NoopObserver {}
