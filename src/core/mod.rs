pub mod barcode;
pub mod video;
