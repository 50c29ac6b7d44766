use std::time::Duration;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::core::barcode::ScanError;

/// 帧快照，像素为 RGBA 格式
#[derive(Debug, Clone)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>, // RGBA 格式
    pub timestamp: Duration,
    pub frame_number: u64,
}

impl Frame {
    pub fn new(
        width: u32,
        height: u32,
        data: Vec<u8>,
        timestamp_ms: u64,
        frame_number: u64,
    ) -> Self {
        Self {
            width,
            height,
            data,
            timestamp: Duration::from_millis(timestamp_ms),
            frame_number,
        }
    }

    pub fn from_rgba_image(image: RgbaImage, timestamp: Duration, frame_number: u64) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            data: image.into_raw(),
            timestamp,
            frame_number,
        }
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Borrowed image view over the pixel buffer; fails when the buffer does
    /// not hold exactly `width * height` RGBA pixels.
    pub fn view(&self) -> Result<ImageBuffer<Rgba<u8>, &[u8]>, ScanError> {
        let expected = self.pixel_count() * 4;
        let invalid = || ScanError::InvalidFrame {
            width: self.width,
            height: self.height,
            expected,
            actual: self.data.len(),
        };
        if self.data.len() != expected {
            return Err(invalid());
        }

        ImageBuffer::from_raw(self.width, self.height, self.data.as_slice()).ok_or_else(invalid)
    }

    pub fn is_grayscale(&self) -> bool {
        self.data
            .chunks_exact(4)
            .all(|px| px[0] == px[1] && px[1] == px[2])
    }
}
