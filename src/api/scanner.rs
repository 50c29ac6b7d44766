//! 条码扫描器 - 视频流轮询 + 静态图片检测

use std::sync::Arc;

use log::{debug, error, info};

use crate::core::barcode::{
    first_well_formed, map_formats, BarcodeResult, FallbackFormat, ScanError,
};
use crate::core::video::{Frame, VideoSource};
use crate::scanner::{AbortSignal, BarcodeDetector, FramePoller, ScanObserver, ScannerConfig};

/// 条码扫描器 - 封装格式校验、逐帧轮询与单帧检测
///
/// ```ignore
/// let scanner = BarcodeScanner::create(ScannerConfig::dual_pass())?;
/// let barcodes = scanner.scan(&detector, &mut source, Some(&signal)).await?;
/// println!("{}", barcodes[0].raw_value);
/// ```
pub struct BarcodeScanner {
    config: ScannerConfig,
    fallback_formats: Vec<FallbackFormat>,
    poller: FramePoller,
}

impl BarcodeScanner {
    /// 创建扫描器；不支持的格式名在此处直接报错，早于任何检测
    pub fn create(config: ScannerConfig) -> Result<Self, ScanError> {
        crate::init_logging();

        let fallback_formats = map_formats(&config.formats).map_err(|e| {
            error!("❌ Invalid scanner formats: {}", e);
            e
        })?;

        info!(
            "📷 BarcodeScanner: created ({:?}, {} format(s))",
            config.mode,
            config.formats.len()
        );
        Ok(Self {
            poller: FramePoller::with_config(&config),
            config,
            fallback_formats,
        })
    }

    pub fn from_json5(text: &str) -> Result<Self, ScanError> {
        Self::create(ScannerConfig::from_json5(text)?)
    }

    pub fn with_observer(mut self, observer: Arc<dyn ScanObserver>) -> Self {
        self.poller.set_observer(observer);
        self
    }

    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    /// Format identifiers to hand to the fallback decoding library.
    pub fn fallback_formats(&self) -> &[FallbackFormat] {
        &self.fallback_formats
    }

    /// 持续逐帧检测，直到识别出条码
    pub async fn scan(
        &self,
        detector: &dyn BarcodeDetector,
        source: &mut dyn VideoSource,
        signal: Option<&AbortSignal>,
    ) -> Result<Vec<BarcodeResult>, ScanError> {
        self.poller.detect(detector, source, signal).await
    }

    /// One detection attempt on a still image, using the configured passes.
    /// An empty list means nothing was found.
    pub async fn detect_image(
        &self,
        detector: &dyn BarcodeDetector,
        frame: &Frame,
    ) -> Result<Vec<BarcodeResult>, ScanError> {
        debug!("🖼️ Detecting barcodes in {}x{} image", frame.width, frame.height);
        self.poller
            .frame_detector()
            .detect_frame(detector, frame, (frame.width, frame.height))
            .await
    }

    /// 直接检测当前帧，返回第一个格式与内容都非空的结果；检测失败只记录日志
    pub async fn detect_first(
        &self,
        detector: &dyn BarcodeDetector,
        frame: &Frame,
    ) -> Option<BarcodeResult> {
        match detector.detect(frame).await {
            Ok(barcodes) => {
                let first = first_well_formed(&barcodes).cloned();
                if let Some(barcode) = &first {
                    info!("✅ Barcode Detection API: {:?}", barcode);
                }
                first
            }
            Err(e) => {
                error!("❌ Barcode detection failed: {}", e);
                None
            }
        }
    }
}

impl Drop for BarcodeScanner {
    fn drop(&mut self) {
        info!("🗑️ BarcodeScanner: released");
    }
}
