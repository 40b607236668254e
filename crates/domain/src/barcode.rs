//! Barcode payloads and GS1 application-identifier parsing.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// `(NN)value` pairs in human-readable GS1 syntax.
static GS1_AI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((\d{2})\)([^(]+)").expect("GS1 pattern compiles"));

/// A barcode found in an image, before interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedBarcode {
    /// Symbology name as reported by the decoder (e.g. `EAN_13`).
    pub symbology: String,
    pub text: String,
}

/// Fields extracted from a GS1 element string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Gs1Data {
    /// AI `01`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gtin: Option<String>,
    /// AI `17`, rendered `20YY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    /// AI `10`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch: Option<String>,
    /// Every other AI, keyed `ai_NN`.
    #[serde(flatten)]
    pub other: BTreeMap<String, String>,
}

/// Interpreted barcode content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BarcodePayload {
    Gs1(Gs1Data),
    Raw { raw: String },
}

impl BarcodePayload {
    /// Interpret decoded barcode text. Text containing `(` is treated as a
    /// GS1 element string, anything else is kept verbatim.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        if text.contains('(') {
            Self::Gs1(parse_gs1(text))
        } else {
            Self::Raw {
                raw: text.to_string(),
            }
        }
    }

    /// Key to query a product catalog with: the GTIN when known, else the
    /// raw text the payload was parsed from.
    #[must_use]
    pub fn lookup_code<'a>(&'a self, source: &'a str) -> &'a str {
        match self {
            Self::Gs1(Gs1Data {
                gtin: Some(gtin), ..
            }) => gtin.as_str(),
            Self::Raw { raw } => raw.as_str(),
            Self::Gs1(_) => source,
        }
    }
}

/// Parse a human-readable GS1 element string such as
/// `(01)05201671001517(17)250101(10)ABC`.
#[must_use]
pub fn parse_gs1(text: &str) -> Gs1Data {
    let mut data = Gs1Data::default();
    for caps in GS1_AI.captures_iter(text) {
        let ai = &caps[1];
        let value = caps[2].to_string();
        match ai {
            "01" => data.gtin = Some(value),
            "17" => data.expiry_date = Some(gs1_date(&value)),
            "10" => data.batch = Some(value),
            _ => {
                data.other.insert(format!("ai_{ai}"), value);
            }
        }
    }
    data
}

fn gs1_date(value: &str) -> String {
    let part = |range: std::ops::Range<usize>| value.get(range).unwrap_or_default();
    format!(
        "20{}-{}-{}",
        part(0..2),
        part(2..4),
        value.get(4..).unwrap_or_default()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_gtin_expiry_and_batch() {
        let data = parse_gs1("(01)05201671001517(17)250101(10)ABC");
        assert_eq!(data.gtin.as_deref(), Some("05201671001517"));
        assert_eq!(data.expiry_date.as_deref(), Some("2025-01-01"));
        assert_eq!(data.batch.as_deref(), Some("ABC"));
        assert!(data.other.is_empty());
    }

    #[test]
    fn should_keep_unknown_application_identifiers() {
        let data = parse_gs1("(01)123(21)SERIAL9");
        assert_eq!(data.other.get("ai_21").map(String::as_str), Some("SERIAL9"));
    }

    #[test]
    fn should_keep_raw_text_when_not_gs1() {
        let payload = BarcodePayload::parse("5201671001517");
        assert_eq!(
            payload,
            BarcodePayload::Raw {
                raw: "5201671001517".to_string()
            }
        );
        assert_eq!(payload.lookup_code("5201671001517"), "5201671001517");
    }

    #[test]
    fn should_use_gtin_as_lookup_code() {
        let text = "(01)05201671001517(10)B1";
        let payload = BarcodePayload::parse(text);
        assert_eq!(payload.lookup_code(text), "05201671001517");
    }

    #[test]
    fn should_fall_back_to_source_when_gs1_has_no_gtin() {
        let text = "(10)B1";
        let payload = BarcodePayload::parse(text);
        assert_eq!(payload.lookup_code(text), text);
    }

    #[test]
    fn should_not_panic_on_short_expiry() {
        let data = parse_gs1("(17)25");
        assert_eq!(data.expiry_date.as_deref(), Some("2025--"));
    }

    #[test]
    fn should_serialize_payloads_flat() {
        let json = serde_json::to_value(BarcodePayload::parse("(01)1(99)X")).unwrap();
        assert_eq!(json, serde_json::json!({"gtin": "1", "ai_99": "X"}));
        let json = serde_json::to_value(BarcodePayload::parse("42")).unwrap();
        assert_eq!(json, serde_json::json!({"raw": "42"}));
    }
}
