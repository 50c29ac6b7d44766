pub mod frame;
pub mod luminance;
pub mod source;

pub use frame::Frame;
pub use luminance::{apply_hsp_luminance, hsp_luminance, hsp_snapshot};
pub use source::{FrameQueueSource, StillImageSource, VideoSource};
