use async_trait::async_trait;
use log::debug;
use tokio::sync::mpsc;

use super::frame::Frame;
use crate::core::barcode::ScanError;

/// 视频帧来源：提供"下一帧就绪"通知与当前帧像素
#[async_trait]
pub trait VideoSource: Send {
    /// Waits until a new frame has been presented. Returns `false` once the
    /// source will never present another frame.
    async fn frame_ready(&mut self) -> bool;

    /// Current presentation size in pixels.
    fn dimensions(&self) -> (u32, u32);

    /// Copies the most recently presented frame.
    fn current_frame(&self) -> Result<Frame, ScanError>;
}

/// Frames pushed from a capture pipeline through a channel. Each
/// `frame_ready` is one frame-ready event: it waits for at least one frame and
/// then keeps only the newest one queued, dropping frames that arrived while
/// the previous attempt was running.
pub struct FrameQueueSource {
    receiver: mpsc::Receiver<Frame>,
    current: Option<Frame>,
    delivered: u64,
    skipped: u64,
}

impl FrameQueueSource {
    pub fn new(receiver: mpsc::Receiver<Frame>) -> Self {
        Self {
            receiver,
            current: None,
            delivered: 0,
            skipped: 0,
        }
    }

    pub fn channel(capacity: usize) -> (mpsc::Sender<Frame>, Self) {
        let (tx, rx) = mpsc::channel(capacity);
        (tx, Self::new(rx))
    }

    /// Number of frame-ready events handed out.
    pub fn frames_delivered(&self) -> u64 {
        self.delivered
    }

    /// Frames replaced by a newer one before they were presented.
    pub fn frames_skipped(&self) -> u64 {
        self.skipped
    }
}

#[async_trait]
impl VideoSource for FrameQueueSource {
    async fn frame_ready(&mut self) -> bool {
        let Some(mut latest) = self.receiver.recv().await else {
            debug!(
                "Frame queue closed after {} frames ({} skipped)",
                self.delivered, self.skipped
            );
            return false;
        };

        // 只保留积压中最新的一帧
        while let Ok(newer) = self.receiver.try_recv() {
            self.skipped += 1;
            latest = newer;
        }

        self.delivered += 1;
        self.current = Some(latest);
        true
    }

    fn dimensions(&self) -> (u32, u32) {
        self.current
            .as_ref()
            .map(|f| (f.width, f.height))
            .unwrap_or((0, 0))
    }

    fn current_frame(&self) -> Result<Frame, ScanError> {
        self.current.clone().ok_or(ScanError::SourceEnded)
    }
}

/// A single still image presented once.
pub struct StillImageSource {
    frame: Frame,
    presented: bool,
}

impl StillImageSource {
    pub fn new(frame: Frame) -> Self {
        Self {
            frame,
            presented: false,
        }
    }
}

#[async_trait]
impl VideoSource for StillImageSource {
    async fn frame_ready(&mut self) -> bool {
        !std::mem::replace(&mut self.presented, true)
    }

    fn dimensions(&self) -> (u32, u32) {
        (self.frame.width, self.frame.height)
    }

    fn current_frame(&self) -> Result<Frame, ScanError> {
        Ok(self.frame.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(n: u64) -> Frame {
        Frame::new(2, 2, vec![0u8; 16], n * 33, n)
    }

    #[tokio::test]
    async fn test_queue_source_presents_frames_one_at_a_time() {
        let (tx, mut source) = FrameQueueSource::channel(4);
        assert!(source.current_frame().is_err());
        assert_eq!(source.dimensions(), (0, 0));

        tx.send(frame(1)).await.unwrap();
        assert!(source.frame_ready().await);
        assert_eq!(source.current_frame().unwrap().frame_number, 1);

        tx.send(frame(2)).await.unwrap();
        assert!(source.frame_ready().await);
        assert_eq!(source.current_frame().unwrap().frame_number, 2);
        assert_eq!(source.dimensions(), (2, 2));

        drop(tx);
        assert!(!source.frame_ready().await);
        assert_eq!(source.frames_delivered(), 2);
        assert_eq!(source.frames_skipped(), 0);
    }

    #[tokio::test]
    async fn test_queue_source_skips_backlog_to_newest_frame() {
        let (tx, mut source) = FrameQueueSource::channel(8);
        for n in 1..=5 {
            tx.send(frame(n)).await.unwrap();
        }
        drop(tx);

        assert!(source.frame_ready().await);
        assert_eq!(source.current_frame().unwrap().frame_number, 5);
        assert_eq!(source.frames_delivered(), 1);
        assert_eq!(source.frames_skipped(), 4);

        assert!(!source.frame_ready().await);
    }

    #[tokio::test]
    async fn test_still_image_presents_once() {
        let mut source = StillImageSource::new(frame(7));

        assert!(source.frame_ready().await);
        assert!(!source.frame_ready().await);
        assert_eq!(source.current_frame().unwrap().frame_number, 7);
    }
}
