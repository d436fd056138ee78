//! Altes JSON-Format: `{"1": [[lat, lng], …], "2": [{"lat":…, "lng":…}, …]}`.
//!
//! Vor dem Binärformat wurden Linien als base64url-kodiertes JSON abgelegt.
//! Die Schlüssel `1`/`2` haben Vorrang vor `line1`/`line2`.

use crate::core::{AnnotationSet, LatLng, MapSlot, Polyline};
use serde_json::{Map, Value};

/// Interpretiert einen Zahlwert oder einen numerischen String.
fn number_like(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Some(0.0)
            } else {
                trimmed.parse().ok()
            }
        }
        _ => None,
    }
}

/// Erster Eintrag unter `key` (Objektfeld) oder `index` (Array-Element), der nicht `null` ist.
fn field<'a>(value: &'a Value, key: &str, index: usize) -> Option<&'a Value> {
    let named = value.get(key).filter(|v| !v.is_null());
    named.or_else(|| match value {
        Value::Array(items) => items.get(index),
        Value::Object(map) => map.get(&index.to_string()),
        _ => None,
    })
    .filter(|v| !v.is_null())
}

/// Wandelt ein Punkt-Objekt oder Koordinaten-Paar in einen Punkt um.
fn point_like(value: &Value) -> Option<LatLng> {
    let lat = number_like(field(value, "lat", 0)?)?;
    let lng = number_like(field(value, "lng", 1)?)?;
    let point = LatLng::new(lat, lng);
    point.is_finite().then_some(point)
}

/// Liest eine Linie; unbrauchbare Punkte werden übersprungen.
fn line_from_value(value: Option<&Value>) -> Option<Polyline> {
    let items = value?.as_array()?;
    Polyline::new(items.iter().filter_map(point_like).collect())
}

/// Wert eines Slots: numerischer Schlüssel zuerst, sonst `lineN`.
fn slot_value(object: &Map<String, Value>, slot: MapSlot) -> Option<&Value> {
    object
        .get(&slot.id().to_string())
        .filter(|v| !v.is_null())
        .or_else(|| object.get(&format!("line{}", slot.id())))
}

/// Parst base64-dekodierte Bytes als JSON-Objekt.
///
/// `None`, wenn die Bytes kein UTF-8 bzw. kein JSON-Objekt sind. Ein Objekt
/// ohne verwertbare Linien ist ein Erfolg mit leerem Ergebnis.
pub fn decode_legacy_json(bytes: &[u8]) -> Option<AnnotationSet> {
    let text = std::str::from_utf8(bytes).ok()?;
    let data: Value = serde_json::from_str(text).ok()?;
    let object = data.as_object()?;

    let mut annotations = AnnotationSet::new();
    for slot in MapSlot::ALL {
        annotations.set(slot, line_from_value(slot_value(object, slot)));
    }
    Some(annotations)
}
