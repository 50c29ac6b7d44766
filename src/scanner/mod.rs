//! 条码扫描器 - 从视频帧中轮询识别条码
//!
//! 核心策略：
//! 1. 逐帧轮询 - 每呈现一帧只做一次检测，直到识别成功、出错或被取消
//! 2. 双通道检测 - 原始帧与 HSP 亮度重映射副本并发检测，结果按顺序拼接
//! 3. 显式状态机 - Polling / Resolved / Rejected

pub mod abort;
pub mod detector;
pub mod dual_pass;
pub mod observer;
pub mod poller;
pub mod state_machine;

pub use abort::{AbortController, AbortSignal};
pub use detector::{BarcodeDetector, MockBarcodeDetector};
pub use dual_pass::{DetectionMode, FrameDetector};
pub use observer::{LogObserver, NoopObserver, ScanObserver};
pub use poller::{FramePoller, ScannerConfig};
pub use state_machine::{AttemptOutcome, PollAction, PollMachine, PollState, RejectReason};
