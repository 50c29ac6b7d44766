use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::barcode::{BarcodeResult, ScanError};
use crate::core::video::VideoSource;
use crate::scanner::abort::AbortSignal;
use crate::scanner::detector::BarcodeDetector;
use crate::scanner::dual_pass::{DetectionMode, FrameDetector};
use crate::scanner::observer::{LogObserver, ScanObserver};
use crate::scanner::state_machine::{AttemptOutcome, PollAction, PollMachine};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    pub mode: DetectionMode,
    /// Drop repeated `(format, raw_value)` pairs from a merged attempt.
    pub deduplicate: bool,
    /// Web `BarcodeFormat` names; empty means no restriction.
    pub formats: Vec<String>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self::dual_pass()
    }
}

impl ScannerConfig {
    pub fn single_pass() -> Self {
        Self {
            mode: DetectionMode::SinglePass,
            deduplicate: false,
            formats: Vec::new(),
        }
    }

    pub fn dual_pass() -> Self {
        Self {
            mode: DetectionMode::DualPass,
            deduplicate: false,
            formats: Vec::new(),
        }
    }

    pub fn from_json5(text: &str) -> Result<Self, ScanError> {
        json5::from_str(text).map_err(|e| ScanError::Config(e.to_string()))
    }
}

/// 逐帧轮询检测，直到识别出条码、检测失败或被取消
pub struct FramePoller {
    frame_detector: FrameDetector,
    observer: Arc<dyn ScanObserver>,
}

impl FramePoller {
    pub fn new() -> Self {
        Self::with_config(&ScannerConfig::default())
    }

    pub fn with_config(config: &ScannerConfig) -> Self {
        Self {
            frame_detector: FrameDetector::new(config.mode, config.deduplicate),
            observer: Arc::new(LogObserver),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn ScanObserver>) -> Self {
        self.set_observer(observer);
        self
    }

    pub fn set_observer(&mut self, observer: Arc<dyn ScanObserver>) {
        self.observer = observer;
    }

    pub fn frame_detector(&self) -> &FrameDetector {
        &self.frame_detector
    }

    /// Attempts detection once per presented frame.
    ///
    /// Resolves with a non-empty list on the first attempt that finds
    /// anything. A detector or frame error rejects immediately. After an empty
    /// attempt the abort signal is checked; an aborted scan rejects with
    /// [`ScanError::Aborted`], otherwise the next frame is awaited. A source
    /// that stops presenting frames rejects with [`ScanError::SourceEnded`].
    pub async fn detect(
        &self,
        detector: &dyn BarcodeDetector,
        source: &mut dyn VideoSource,
        signal: Option<&AbortSignal>,
    ) -> Result<Vec<BarcodeResult>, ScanError> {
        let mut machine = PollMachine::new();

        loop {
            if !source.frame_ready().await {
                let err = ScanError::SourceEnded;
                self.observer.on_rejected(machine.attempt_count(), &err);
                return Err(err);
            }

            let result = self.attempt(detector, &*source).await;
            let outcome = match &result {
                Ok(barcodes) if barcodes.is_empty() => AttemptOutcome::Empty,
                Ok(_) => AttemptOutcome::Found,
                Err(_) => AttemptOutcome::Failed,
            };
            let abort_check = match (outcome, signal) {
                (AttemptOutcome::Empty, Some(signal)) => signal.throw_if_aborted(),
                _ => Ok(()),
            };

            let action = machine.record(outcome, abort_check.is_err());
            let attempts = machine.attempt_count();
            self.observer
                .on_attempt(attempts, result.as_ref().map_or(0, Vec::len));

            match action {
                PollAction::Resolve => {
                    let barcodes = result?;
                    self.observer.on_detected(attempts, &barcodes);
                    return Ok(barcodes);
                }
                PollAction::Reject(_) => {
                    let Err(err) = result.and(abort_check) else {
                        unreachable!("rejected attempt {attempts} carries no error");
                    };
                    self.observer.on_rejected(attempts, &err);
                    return Err(err);
                }
                PollAction::Reschedule => {}
                PollAction::Ignore => {
                    unreachable!("scan settled before attempt {attempts}");
                }
            }
        }
    }

    async fn attempt(
        &self,
        detector: &dyn BarcodeDetector,
        source: &dyn VideoSource,
    ) -> Result<Vec<BarcodeResult>, ScanError> {
        let frame = source.current_frame()?;
        self.frame_detector
            .detect_frame(detector, &frame, source.dimensions())
            .await
    }
}

impl Default for FramePoller {
    fn default() -> Self {
        Self::new()
    }
}
