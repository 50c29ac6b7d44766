//! 单帧检测：原始帧直接检测 + HSP 亮度重映射副本检测，两路并发

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::barcode::{BarcodeResult, ScanError};
use crate::core::video::{hsp_snapshot, Frame};
use crate::scanner::detector::BarcodeDetector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionMode {
    /// Direct detection only.
    SinglePass,
    /// Direct detection plus detection on a luminance-remapped copy.
    #[default]
    DualPass,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FrameDetector {
    mode: DetectionMode,
    deduplicate: bool,
}

impl FrameDetector {
    pub fn new(mode: DetectionMode, deduplicate: bool) -> Self {
        Self { mode, deduplicate }
    }

    pub fn mode(&self) -> DetectionMode {
        self.mode
    }

    /// Runs one detection attempt on `frame`. `surface_size` is the
    /// presentation size the remapped copy is drawn at.
    ///
    /// In dual-pass mode both passes are awaited together and their results
    /// concatenated, direct pass first. Either pass failing fails the attempt.
    pub async fn detect_frame(
        &self,
        detector: &dyn BarcodeDetector,
        frame: &Frame,
        surface_size: (u32, u32),
    ) -> Result<Vec<BarcodeResult>, ScanError> {
        let mut barcodes = match self.mode {
            DetectionMode::SinglePass => detector.detect(frame).await?,
            DetectionMode::DualPass => {
                let (mut direct, remapped) = tokio::try_join!(
                    detector.detect(frame),
                    detect_with_hsp_luminance(detector, frame, surface_size)
                )?;
                direct.extend(remapped);
                direct
            }
        };

        if self.deduplicate {
            let mut seen = HashSet::new();
            barcodes.retain(|barcode| seen.insert(barcode.clone()));
        }

        Ok(barcodes)
    }
}

async fn detect_with_hsp_luminance(
    detector: &dyn BarcodeDetector,
    frame: &Frame,
    (width, height): (u32, u32),
) -> Result<Vec<BarcodeResult>, ScanError> {
    // 每次尝试都新建离屏缓冲，检测结束即释放
    let remapped = hsp_snapshot(frame, width, height)?;
    detector.detect(&remapped).await
}
