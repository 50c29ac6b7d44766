use serde::{Deserialize, Serialize};

/// 单个条码识别结果，字段命名与 Web `DetectedBarcode` 保持一致
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarcodeResult {
    pub format: String,
    pub raw_value: String,
}

impl BarcodeResult {
    pub fn new(format: impl Into<String>, raw_value: impl Into<String>) -> Self {
        Self {
            format: format.into(),
            raw_value: raw_value.into(),
        }
    }

    pub fn is_well_formed(&self) -> bool {
        !self.format.is_empty() && !self.raw_value.is_empty()
    }
}

/// Returns the first result that carries both a format and a value.
pub fn first_well_formed(results: &[BarcodeResult]) -> Option<&BarcodeResult> {
    results.iter().find(|r| r.is_well_formed())
}
