//! Ältestes Format: Query-String `1=lat,lng,lat,lng&2=…` direkt im Fragment.

use crate::core::{AnnotationSet, LatLng, MapSlot, Polyline};
use url::form_urlencoded;

/// Mindestanzahl Zahlen pro Linie (zwei Punkte).
const MIN_VALUES: usize = 4;

/// Parst eine Zahl wie das Browser-`Number()`: Whitespace erlaubt, leer = 0.
fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parst eine kommagetrennte Liste abwechselnder lat/lng-Werte.
fn parse_csv_line(value: &str) -> Option<Polyline> {
    let values: Vec<f64> = value
        .split(',')
        .map(parse_number)
        .collect::<Option<_>>()?;
    if values.len() < MIN_VALUES || values.len() % 2 != 0 {
        return None;
    }
    let points = values
        .chunks_exact(2)
        .map(|pair| LatLng::new(pair[0], pair[1]))
        .collect();
    Polyline::new(points)
}

/// Parst das Fragment als Query-String mit den Parametern `1` und `2`.
///
/// `None`, wenn keiner der beiden Parameter mit Inhalt vorhanden ist.
/// Ungültige Listen ergeben eine fehlende Linie, keinen Fehler.
pub fn decode_legacy_csv(raw: &str) -> Option<AnnotationSet> {
    let mut values: [Option<String>; 2] = [None, None];
    for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
        // Schlüssel exakt `1` oder `2`; `01` oder `+1` zählen nicht
        let slot = match key.as_ref() {
            "1" => Some(MapSlot::One),
            "2" => Some(MapSlot::Two),
            _ => None,
        };
        if let Some(slot) = slot {
            // Nur das erste Vorkommen zählt
            values[slot.index()].get_or_insert_with(|| value.into_owned());
        }
    }

    if values.iter().all(|v| v.as_deref().map_or(true, str::is_empty)) {
        return None;
    }

    let mut annotations = AnnotationSet::new();
    for slot in MapSlot::ALL {
        let line = values[slot.index()]
            .as_deref()
            .filter(|v| !v.is_empty())
            .and_then(parse_csv_line);
        annotations.set(slot, line);
    }
    Some(annotations)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(raw: &[(f64, f64)]) -> Option<Polyline> {
        Polyline::new(raw.iter().map(|&p| LatLng::from(p)).collect())
    }

    #[test]
    fn test_both_params() {
        let set = decode_legacy_csv("1=42,-83,42.1,-83.1&2=1,2,3,4,5,6").expect("Set erwartet");
        assert_eq!(set.line1, line(&[(42.0, -83.0), (42.1, -83.1)]));
        assert_eq!(set.line2, line(&[(1.0, 2.0), (3.0, 4.0), (5.0, 6.0)]));
    }

    #[test]
    fn test_percent_encoded_commas() {
        let set = decode_legacy_csv("2=1%2C2%2C3%2C4").expect("Set erwartet");
        assert!(set.line1.is_none());
        assert_eq!(set.line2, line(&[(1.0, 2.0), (3.0, 4.0)]));
    }

    #[test]
    fn test_invalid_lists_yield_absent_lines() {
        // ungerade Anzahl, zu kurz, nicht numerisch
        for raw in ["1=1,2,3,4,5", "1=1,2", "1=1,2,x,4", "1=1,2,inf,4"] {
            let set = decode_legacy_csv(raw).expect("Set erwartet");
            assert!(set.is_empty(), "{raw}");
        }
    }

    #[test]
    fn test_missing_or_empty_params_fail() {
        assert!(decode_legacy_csv("").is_none());
        assert!(decode_legacy_csv("foo=bar").is_none());
        assert!(decode_legacy_csv("1=&2=").is_none());
        assert!(decode_legacy_csv("not a query").is_none());
    }

    #[test]
    fn test_empty_items_count_as_zero() {
        let set = decode_legacy_csv("1=,1,2,3").expect("Set erwartet");
        assert_eq!(set.line1, line(&[(0.0, 1.0), (2.0, 3.0)]));
    }

    #[test]
    fn test_keys_must_match_exactly() {
        assert_eq!(decode_legacy_csv("01=5,6,7,8"), None);
        assert_eq!(decode_legacy_csv("+1=5,6,7,8&02=1,2,3,4"), None);

        let set = decode_legacy_csv("01=9,9,9,9&2=5,6,7,8").expect("Set erwartet");
        assert_eq!(set.line1, None);
        assert_eq!(set.line2, line(&[(5.0, 6.0), (7.0, 8.0)]));
    }
}
