pub mod error;
pub mod format;
pub mod result;

pub use error::ScanError;
pub use format::{map_formats, BarcodeFormat, FallbackFormat};
pub use result::{first_well_formed, BarcodeResult};
