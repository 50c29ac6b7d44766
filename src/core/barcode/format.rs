//! Web `BarcodeFormat` 名称与备用解码库格式编号之间的映射

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::error::ScanError;

// parseInt(value, 10) 能解析出数字的输入
static NUMERIC_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[+-]?[0-9]").expect("static regex"));

/// Symbologies named by the Shape Detection API `BarcodeFormat` enumeration
/// that the fallback decoder also understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarcodeFormat {
    Aztec,
    #[serde(rename = "code_128")]
    Code128,
    #[serde(rename = "code_39")]
    Code39,
    #[serde(rename = "code_93")]
    Code93,
    Codabar,
    DataMatrix,
    #[serde(rename = "ean_13")]
    Ean13,
    #[serde(rename = "ean_8")]
    Ean8,
    Itf,
    Pdf417,
    QrCode,
    UpcA,
    UpcE,
}

impl BarcodeFormat {
    pub const ALL: [BarcodeFormat; 13] = [
        BarcodeFormat::Aztec,
        BarcodeFormat::Code128,
        BarcodeFormat::Code39,
        BarcodeFormat::Code93,
        BarcodeFormat::Codabar,
        BarcodeFormat::DataMatrix,
        BarcodeFormat::Ean13,
        BarcodeFormat::Ean8,
        BarcodeFormat::Itf,
        BarcodeFormat::Pdf417,
        BarcodeFormat::QrCode,
        BarcodeFormat::UpcA,
        BarcodeFormat::UpcE,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BarcodeFormat::Aztec => "aztec",
            BarcodeFormat::Code128 => "code_128",
            BarcodeFormat::Code39 => "code_39",
            BarcodeFormat::Code93 => "code_93",
            BarcodeFormat::Codabar => "codabar",
            BarcodeFormat::DataMatrix => "data_matrix",
            BarcodeFormat::Ean13 => "ean_13",
            BarcodeFormat::Ean8 => "ean_8",
            BarcodeFormat::Itf => "itf",
            BarcodeFormat::Pdf417 => "pdf417",
            BarcodeFormat::QrCode => "qr_code",
            BarcodeFormat::UpcA => "upc_a",
            BarcodeFormat::UpcE => "upc_e",
        }
    }

    pub fn fallback(&self) -> FallbackFormat {
        match self {
            BarcodeFormat::Aztec => FallbackFormat::Aztec,
            BarcodeFormat::Code128 => FallbackFormat::Code128,
            BarcodeFormat::Code39 => FallbackFormat::Code39,
            BarcodeFormat::Code93 => FallbackFormat::Code93,
            BarcodeFormat::Codabar => FallbackFormat::Codabar,
            BarcodeFormat::DataMatrix => FallbackFormat::DataMatrix,
            BarcodeFormat::Ean13 => FallbackFormat::Ean13,
            BarcodeFormat::Ean8 => FallbackFormat::Ean8,
            BarcodeFormat::Itf => FallbackFormat::Itf,
            BarcodeFormat::Pdf417 => FallbackFormat::Pdf417,
            BarcodeFormat::QrCode => FallbackFormat::QrCode,
            BarcodeFormat::UpcA => FallbackFormat::UpcA,
            BarcodeFormat::UpcE => FallbackFormat::UpcE,
        }
    }
}

impl fmt::Display for BarcodeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BarcodeFormat {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BarcodeFormat::ALL
            .iter()
            .copied()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| unsupported(s))
    }
}

/// Format identifiers of the fallback decoding library. Discriminants are the
/// library's own numeric values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FallbackFormat {
    QrCode = 0,
    Aztec = 1,
    Codabar = 2,
    Code39 = 3,
    Code93 = 4,
    Code128 = 5,
    DataMatrix = 6,
    MaxiCode = 7,
    Itf = 8,
    Ean13 = 9,
    Ean8 = 10,
    Pdf417 = 11,
    Rss14 = 12,
    RssExpanded = 13,
    UpcA = 14,
    UpcE = 15,
    UpcEanExtension = 16,
}

impl FallbackFormat {
    pub fn id(&self) -> u8 {
        *self as u8
    }
}

/// 将 Web 原生格式名批量映射为备用解码库的格式编号
pub fn map_formats<S: AsRef<str>>(formats: &[S]) -> Result<Vec<FallbackFormat>, ScanError> {
    formats
        .iter()
        .map(|format| format.as_ref().parse::<BarcodeFormat>().map(|f| f.fallback()))
        .collect()
}

fn unsupported(value: &str) -> ScanError {
    if NUMERIC_PREFIX.is_match(value) {
        ScanError::UnsupportedNumericFormat(value.to_string())
    } else {
        ScanError::UnsupportedFormat(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_qr_code() {
        let mapped = map_formats(&["qr_code"]).unwrap();
        assert_eq!(mapped, vec![FallbackFormat::QrCode]);
        assert_eq!(mapped[0].id(), 0);
    }

    #[test]
    fn test_map_preserves_order() {
        let mapped = map_formats(&["pdf417", "ean_13", "code_128"]).unwrap();
        assert_eq!(
            mapped,
            vec![
                FallbackFormat::Pdf417,
                FallbackFormat::Ean13,
                FallbackFormat::Code128
            ]
        );
        assert_eq!(mapped[0].id(), 11);
    }

    #[test]
    fn test_every_web_format_round_trips_by_name() {
        for format in BarcodeFormat::ALL {
            assert_eq!(format.as_str().parse::<BarcodeFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_unknown_string_names_the_value() {
        let err = map_formats(&["qr_code", "not_a_format"]).unwrap_err();
        assert!(matches!(err, ScanError::UnsupportedFormat(ref v) if v == "not_a_format"));

        let message = err.to_string();
        assert!(message.contains("not_a_format"));
        assert!(!message.contains("not a number"));
    }

    #[test]
    fn test_numeric_value_gets_numeric_hint() {
        for value in ["11", " 0", "-3", "5abc"] {
            let err = map_formats(&[value]).unwrap_err();
            assert!(
                matches!(err, ScanError::UnsupportedNumericFormat(_)),
                "{value} should be treated as numeric"
            );
            let message = err.to_string();
            assert!(message.contains(value));
            assert!(message.contains("not a number"));
        }
    }

    #[test]
    fn test_serde_names_match_web_enumeration() {
        let json = serde_json::to_string(&BarcodeFormat::Code128).unwrap();
        assert_eq!(json, "\"code_128\"");

        let parsed: BarcodeFormat = serde_json::from_str("\"data_matrix\"").unwrap();
        assert_eq!(parsed, BarcodeFormat::DataMatrix);
    }
}
