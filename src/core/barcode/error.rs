use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Barcode detection failed: {0}")]
    Detection(String),
    #[error("Barcode scan aborted")]
    Aborted,
    #[error(
        "Unsupported format \"{0}\"; a string supported by the \"BarcodeFormat\" \
         enumeration must be given, e.g., \"qr_code\", not a number."
    )]
    UnsupportedNumericFormat(String),
    #[error("Unsupported format \"{0}\".")]
    UnsupportedFormat(String),
    #[error("Video source ended before a barcode was found")]
    SourceEnded,
    #[error("Invalid frame buffer: {width}x{height} needs {expected} bytes, got {actual}")]
    InvalidFrame {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
    #[error("Config parse error: {0}")]
    Config(String),
}

impl ScanError {
    /// Errors raised by the injected detector capability.
    pub fn detection(message: impl Into<String>) -> Self {
        ScanError::Detection(message.into())
    }

    pub fn is_aborted(&self) -> bool {
        matches!(self, ScanError::Aborted)
    }
}
