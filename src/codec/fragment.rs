//! Fragment-Text ↔ Annotationen.
//!
//! Kodiert wird immer im Binärformat (base64url ohne Padding). Dekodiert wird
//! über eine feste Parser-Kette: Binär → altes JSON → altes CSV. Der erste
//! erfolgreiche Parser gewinnt.

use super::binary::{decode_binary, encode_binary};
use super::legacy_csv::decode_legacy_csv;
use super::legacy_json::decode_legacy_json;
use crate::core::AnnotationSet;
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, URL_SAFE_NO_PAD};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;

/// Tolerante Dekodierung: Padding optional, Rest-Bits ignoriert.
const LENIENT_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Format, mit dem ein Fragment erfolgreich gelesen wurde.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentFormat {
    /// Aktuelles Float32-Binärformat
    Binary,
    /// base64-kodiertes JSON-Objekt
    LegacyJson,
    /// Query-String mit kommagetrennten Zahlen
    LegacyCsv,
}

impl std::fmt::Display for FragmentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FragmentFormat::Binary => "binary",
            FragmentFormat::LegacyJson => "legacy-json",
            FragmentFormat::LegacyCsv => "legacy-csv",
        };
        f.write_str(name)
    }
}

/// Ergebnis einer Fragment-Dekodierung.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FragmentDecode {
    /// Gelesene Linien (leer bei Fehlschlag)
    pub annotations: AnnotationSet,
    /// Erfolgreicher Parser; `None` bei leerem Fragment oder Fehlschlag
    pub format: Option<FragmentFormat>,
}

impl FragmentDecode {
    /// `true`, wenn Inhalt vorhanden war, aber kein Parser ihn lesen konnte.
    pub fn is_rejected(&self, raw: &str) -> bool {
        self.format.is_none() && !raw.trim().is_empty()
    }
}

/// Vorverarbeitete Eingabe für die Parser-Kette.
struct FragmentInput<'a> {
    raw: &'a str,
    bytes: Option<Vec<u8>>,
}

type FragmentParser = fn(&FragmentInput<'_>) -> Option<AnnotationSet>;

fn parse_binary(input: &FragmentInput<'_>) -> Option<AnnotationSet> {
    input.bytes.as_deref().and_then(decode_binary)
}

fn parse_legacy_json(input: &FragmentInput<'_>) -> Option<AnnotationSet> {
    input.bytes.as_deref().and_then(decode_legacy_json)
}

fn parse_legacy_csv(input: &FragmentInput<'_>) -> Option<AnnotationSet> {
    decode_legacy_csv(input.raw)
}

/// Parser in Prüfreihenfolge.
const PARSERS: &[(FragmentFormat, FragmentParser)] = &[
    (FragmentFormat::Binary, parse_binary),
    (FragmentFormat::LegacyJson, parse_legacy_json),
    (FragmentFormat::LegacyCsv, parse_legacy_csv),
];

/// Dekodiert base64url (oder Standard-base64), mit oder ohne Padding.
pub fn base64url_to_bytes(text: &str) -> Option<Vec<u8>> {
    let standard: String = text
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();
    LENIENT_STANDARD.decode(standard).ok()
}

/// Kodiert Bytes als base64url ohne Padding.
pub fn bytes_to_base64url(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Kodiert beide Linien als Fragment-Text (ohne `#`).
///
/// `None`, wenn keine Linie vorhanden ist; ein leeres Fragment wird nie erzeugt.
pub fn encode_fragment(annotations: &AnnotationSet) -> Option<String> {
    encode_binary(annotations).map(|bytes| bytes_to_base64url(&bytes))
}

/// Dekodiert einen (nicht vertrauenswürdigen) Fragment-Text.
///
/// Panikt nie; unlesbare Eingaben ergeben leere Annotationen ohne Format.
pub fn decode_fragment(raw: &str) -> FragmentDecode {
    let raw = raw.trim();
    if raw.is_empty() {
        return FragmentDecode::default();
    }

    let input = FragmentInput {
        raw,
        bytes: base64url_to_bytes(raw),
    };

    for (format, parser) in PARSERS {
        if let Some(annotations) = parser(&input) {
            log::debug!("Fragment als {} gelesen", format);
            return FragmentDecode {
                annotations,
                format: Some(*format),
            };
        }
    }

    log::warn!("Fragment konnte nicht gelesen werden ({} Zeichen)", raw.len());
    FragmentDecode::default()
}
